//! A precedence climbing parser for propositions.

use std::str::FromStr;

use crate::{
    misc::log::targets::{self},
    structures::{atom::Atom, proposition::Proposition},
    types::err::{self},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Connective {
    Iff,
    Then,
    Or,
    Xor,
    And,
    Nand,
}

impl Connective {
    fn from_keyword(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "iff" => Some(Connective::Iff),
            "then" => Some(Connective::Then),
            "or" => Some(Connective::Or),
            "xor" => Some(Connective::Xor),
            "and" => Some(Connective::And),
            "nand" => Some(Connective::Nand),
            _ => None,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Connective::Iff => 1,
            Connective::Then => 2,
            Connective::Or | Connective::Xor => 3,
            Connective::And | Connective::Nand => 4,
        }
    }

    fn apply(&self, left: Proposition, right: Proposition) -> Proposition {
        match self {
            Connective::Iff => left.iff(right),
            Connective::Then => left.implies(right),
            Connective::Or => left.or(right),
            Connective::Xor => left.xor(right),
            Connective::And => left.and(right),
            Connective::Nand => left.and(right).negate(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Negation,
    Binary(Connective, String),
    Operand(Proposition),
}

impl Token {
    fn text(&self) -> String {
        match self {
            Token::Open => "(".to_string(),
            Token::Close => ")".to_string(),
            Token::Negation => "-".to_string(),
            Token::Binary(_, word) => word.clone(),
            Token::Operand(p) => p.to_string(),
        }
    }
}

fn tokenise(text: &str) -> Result<Vec<Token>, err::ParseError> {
    let mut tokens = Vec::default();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}

            '(' => tokens.push(Token::Open),

            ')' => tokens.push(Token::Close),

            '-' => tokens.push(Token::Negation),

            c if c.is_alphanumeric() => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !next.is_alphanumeric() {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }

                let token = if let Some(connective) = Connective::from_keyword(&word) {
                    Token::Binary(connective, word)
                } else if word == "1" {
                    Token::Operand(Proposition::Top)
                } else if word == "0" {
                    Token::Operand(Proposition::Bottom)
                } else if word.chars().all(|c| c.is_ascii_alphabetic()) {
                    Token::Operand(Proposition::Atom(Atom::from(word.to_lowercase())))
                } else {
                    return Err(err::ParseError::UnrecognisedToken(word));
                };

                tokens.push(token);
            }

            _ => return Err(err::ParseError::UnrecognisedToken(c.to_string())),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        self.index += 1;
        token
    }

    /// The token before the current token, used to name the operator missing an operand.
    fn previous_text(&self) -> String {
        match self.index.checked_sub(2).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.text(),
            None => String::new(),
        }
    }

    /// Parses an expression whose binary connectives bind at least as tight as `bound`.
    fn expression(&mut self, bound: u8) -> Result<Proposition, err::ParseError> {
        let mut left = self.unary()?;

        while let Some(Token::Binary(connective, _)) = self.peek() {
            let connective = *connective;
            if connective.precedence() < bound {
                break;
            }
            self.next();

            // Left associative, so the right operand must bind strictly tighter.
            let right = self.expression(connective.precedence() + 1)?;
            left = connective.apply(left, right);
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<Proposition, err::ParseError> {
        match self.next() {
            Some(Token::Operand(p)) => Ok(p),

            Some(Token::Negation) => Ok(self.unary()?.negate()),

            Some(Token::Open) => {
                let inner = self.expression(0)?;
                match self.next() {
                    Some(Token::Close) => Ok(inner),
                    Some(token) => Err(err::ParseError::UnexpectedToken(token.text())),
                    None => Err(err::ParseError::UnbalancedParenthesis),
                }
            }

            Some(Token::Close) => Err(err::ParseError::UnbalancedParenthesis),

            Some(Token::Binary(_, word)) => Err(err::ParseError::MissingOperand(word)),

            None => Err(err::ParseError::MissingOperand(self.previous_text())),
        }
    }
}

impl FromStr for Proposition {
    type Err = err::ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens = tokenise(text)?;
        if tokens.is_empty() {
            return Err(err::ParseError::Empty);
        }

        let mut parser = Parser { tokens, index: 0 };
        let proposition = parser.expression(0)?;

        match parser.next() {
            None => {
                log::trace!(target: targets::PARSE, "Parsed \"{text}\" as {proposition}");
                Ok(proposition)
            }
            Some(Token::Close) => Err(err::ParseError::UnbalancedParenthesis),
            Some(token) => Err(err::ParseError::UnexpectedToken(token.text())),
        }
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn atom(name: &str) -> Proposition {
        Proposition::atom(name)
    }

    #[test]
    fn precedence() {
        let parsed: Proposition = "a or b and c".parse().unwrap();
        assert_eq!(parsed, atom("a").or(atom("b").and(atom("c"))));

        let parsed: Proposition = "a then b iff c".parse().unwrap();
        assert_eq!(parsed, atom("a").implies(atom("b")).iff(atom("c")));

        let parsed: Proposition = "-a and b".parse().unwrap();
        assert_eq!(parsed, atom("a").negate().and(atom("b")));
    }

    #[test]
    fn left_associative() {
        let parsed: Proposition = "a then b then c".parse().unwrap();
        assert_eq!(parsed, atom("a").implies(atom("b")).implies(atom("c")));

        let parsed: Proposition = "a or b xor c".parse().unwrap();
        assert_eq!(parsed, atom("a").or(atom("b")).xor(atom("c")));
    }

    #[test]
    fn constants_and_case() {
        let parsed: Proposition = "1 AND Rain".parse().unwrap();
        assert_eq!(parsed, Proposition::Top.and(atom("rain")));

        let parsed: Proposition = "--0".parse().unwrap();
        assert_eq!(parsed, Proposition::Bottom.negate().negate());
    }

    #[test]
    fn nand() {
        let parsed: Proposition = "a nand b".parse().unwrap();
        assert_eq!(parsed, atom("a").and(atom("b")).negate());
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Proposition>(), Err(err::ParseError::Empty));
        assert_eq!("  ".parse::<Proposition>(), Err(err::ParseError::Empty));

        assert_eq!(
            "(a or b".parse::<Proposition>(),
            Err(err::ParseError::UnbalancedParenthesis)
        );
        assert_eq!(
            "a or b)".parse::<Proposition>(),
            Err(err::ParseError::UnbalancedParenthesis)
        );

        assert_eq!(
            "a and".parse::<Proposition>(),
            Err(err::ParseError::MissingOperand("and".to_string()))
        );
        assert_eq!(
            "or a".parse::<Proposition>(),
            Err(err::ParseError::MissingOperand("or".to_string()))
        );

        assert_eq!(
            "a b".parse::<Proposition>(),
            Err(err::ParseError::UnexpectedToken("b".to_string()))
        );

        assert_eq!(
            "a & b".parse::<Proposition>(),
            Err(err::ParseError::UnrecognisedToken("&".to_string()))
        );
        assert_eq!(
            "a2".parse::<Proposition>(),
            Err(err::ParseError::UnrecognisedToken("a2".to_string()))
        );
    }
}
