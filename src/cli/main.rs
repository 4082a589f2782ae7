#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use belief_revisor::{context::Context, reports::Report};

mod parse;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let (belief_state, sentence) = match parse::config::input_from_args(&matches) {
        Ok(input) => input,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    println!("c Ordering: {}", config.comparator);
    println!("c Trust: {}", config.trust);
    for belief in &belief_state {
        println!("c Belief: {belief}");
    }
    println!("c Sentence: {sentence}");

    let display = config.display;
    let the_context = Context::from_config(config);

    let report = match the_context.revise(&belief_state, &sentence) {
        Ok(report) => report,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    println!("s {report}");

    if let Report::Revised(revised) = report {
        for proposition in display.apply(&revised) {
            println!("v {proposition}");
        }
    }
}
