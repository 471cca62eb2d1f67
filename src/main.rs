// src/main.rs

use schedag::{cli, logging, run};

/// Exit status when the schedule stalled (partial result printed).
const EXIT_STALLED: i32 = 2;

fn main() {
    match run_main() {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_STALLED),
        Err(err) => {
            eprintln!("schedag error: {err:?}");
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the produced schedule is incomplete.
fn run_main() -> anyhow::Result<bool> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    let outcome = run(args)?;
    Ok(outcome.is_none_or(|o| o.is_complete()))
}
