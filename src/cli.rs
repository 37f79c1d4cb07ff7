// src/cli.rs
use std::env;
use std::path::PathBuf;

use crate::params::{JobKind, Params};
use crate::progress::ConsoleProgress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    params.apply_env(); // YEAR/MONTH fill gaps left by flags

    let mut progress = ConsoleProgress;
    let summary = runner::run(&params, Some(&mut progress))?;

    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    println!("Total records: {}", summary.records);
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--job" | "-j" => {
                let v = args.next().ok_or("Missing value for --job")?;
                params.job = match v.to_ascii_lowercase().as_str() {
                    "sueldos" | "salaries" => JobKind::Salaries,
                    "executions" => JobKind::Executions,
                    "details" => JobKind::ExecutionDetails,
                    "enrich" => JobKind::Enrich,
                    "gastos" => JobKind::Gastos,
                    "all" => JobKind::All,
                    other => return Err(format!("Unknown job: {}", other).into()),
                };
            }
            "-y" | "--year" => {
                let v: i32 = args.next().ok_or("Missing year")?.parse()?;
                params.year = Some(v);
            }
            "-m" | "--month" => {
                let v: u32 = args.next().ok_or("Missing month")?.parse()?;
                if !(1..=12).contains(&v) {
                    return Err("Month out of range (1..12)".into());
                }
                params.month = Some(v);
            }
            "-o" | "--out" => {
                params.out_dir = PathBuf::from(args.next().ok_or("Missing output dir")?);
            }
            "--rows" => {
                let v: usize = args.next().ok_or("Missing value for --rows")?.parse()?;
                if v == 0 {
                    return Err("--rows must be > 0".into());
                }
                params.page_size = Some(v);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}
