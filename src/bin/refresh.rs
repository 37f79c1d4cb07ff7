// src/bin/refresh.rs
//
// Scheduled-trigger entry point (cron invokes this): refreshes the
// rolling last-3-months gastos dataset. Period comes from YEAR/MONTH
// env vars, defaulting to the most recent tracked period.

use color_eyre::eyre::Result;

use cba_scrape::params::{JobKind, Params};
use cba_scrape::progress::ConsoleProgress;
use cba_scrape::runner;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let mut params = Params::new();
    params.job = JobKind::Gastos;
    params.apply_env();

    let mut progress = ConsoleProgress;
    match runner::run(&params, Some(&mut progress)) {
        Ok(summary) => {
            println!("Gastos data updated: {} records", summary.records);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error updating gastos data: {e}");
            std::process::exit(1);
        }
    }
}
