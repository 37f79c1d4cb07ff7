// src/runner.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use log::info;
use reqwest::blocking::Client;

use crate::core::error::ScrapeError;
use crate::core::net;
use crate::enrich;
use crate::params::{
    JobKind, Params, DETAILS_FILE, ENRICHED_FILE, EXECUTIONS_FILE,
    FIRST_EXECUTION_YEAR, GASTOS_FILE, LAST_EXECUTION_YEAR, SALARIES_FILE,
};
use crate::progress::Progress;
use crate::records::{ExecutionDetailRecord, ExecutionRecord, SalaryRecord};
use crate::specs::{execution_details, executions, salaries};
use crate::store;

/// Summary of what a run produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records: usize,
}

impl RunSummary {
    fn new() -> Self {
        Self { files_written: Vec::new(), records: 0 }
    }

    fn add(&mut self, path: PathBuf, records: usize) {
        self.files_written.push(path);
        self.records += records;
    }
}

/// Top-level runner: dispatch on job kind and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let client = net::build_client()?;
    let mut summary = RunSummary::new();

    match params.job {
        JobKind::Salaries => run_salaries(&client, params, &mut progress, &mut summary)?,
        JobKind::Executions => run_executions(&client, params, &mut progress, &mut summary)?,
        JobKind::ExecutionDetails => run_details(&client, params, &mut progress, &mut summary)?,
        JobKind::Enrich => run_enrich(params, &mut progress, &mut summary)?,
        JobKind::Gastos => run_gastos(&client, params, &mut progress, &mut summary)?,
        JobKind::All => {
            run_salaries(&client, params, &mut progress, &mut summary)?;
            run_executions(&client, params, &mut progress, &mut summary)?;
            run_details(&client, params, &mut progress, &mut summary)?;
            run_enrich(params, &mut progress, &mut summary)?;
            run_gastos(&client, params, &mut progress, &mut summary)?;
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/* ---------------- Salaries ---------------- */

fn run_salaries(
    client: &Client,
    params: &Params,
    progress: &mut Option<&mut dyn Progress>,
    summary: &mut RunSummary,
) -> Result<(), ScrapeError> {
    let year = params.year_or_default();

    // Accumulator owned here; collectors only append.
    let mut all: Vec<SalaryRecord> = Vec::new();

    if let Some(month) = params.month {
        // Required single-shot run: a dead page is fatal (exit 1 upstream).
        if let Some(p) = progress.as_deref_mut() {
            p.begin(1);
        }
        let mut records = salaries::fetch_month_strict(client, year, month, params.page_size)?;
        if let Some(p) = progress.as_deref_mut() {
            p.unit_done(&format!("sueldos {year}-{month:02}"), records.len());
        }
        all.append(&mut records);
    } else {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(12);
        }
        for month in 1..=12 {
            let mut records = salaries::fetch_month(client, year, month, params.page_size);
            if let Some(p) = progress.as_deref_mut() {
                p.unit_done(&format!("sueldos {year}-{month:02}"), records.len());
            }
            all.append(&mut records);
        }
    }

    let n = all.len();
    let path = store::save_json(&params.out_dir, SALARIES_FILE, &all)?;
    info!("wrote {n} salary records to {}", path.display());
    summary.add(path, n);
    Ok(())
}

/* ---------------- Budget executions ---------------- */

fn execution_years(params: &Params) -> Vec<i32> {
    match params.year {
        Some(y) => vec![y],
        None => (FIRST_EXECUTION_YEAR..=LAST_EXECUTION_YEAR).collect(),
    }
}

fn run_executions(
    client: &Client,
    params: &Params,
    progress: &mut Option<&mut dyn Progress>,
    summary: &mut RunSummary,
) -> Result<(), ScrapeError> {
    let years = execution_years(params);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(years.len());
    }

    let mut all: Vec<ExecutionRecord> = Vec::new();
    for year in years {
        let mut records = executions::fetch_year(client, year, params.page_size);
        if let Some(p) = progress.as_deref_mut() {
            p.unit_done(&format!("executions {year}"), records.len());
        }
        all.append(&mut records);
    }

    let n = all.len();
    let path = store::save_json(&params.out_dir, EXECUTIONS_FILE, &all)?;
    info!("wrote {n} execution records to {}", path.display());
    summary.add(path, n);
    Ok(())
}

/* ---------------- Execution details ---------------- */

/// Distinct (idObra, year) pairs from the executions artifact,
/// first-seen order, records without an id skipped.
pub fn obra_keys(executions: &[ExecutionRecord]) -> Vec<(i64, i32)> {
    let mut keys: Vec<(i64, i32)> = Vec::new();
    for ex in executions {
        if let Some(id) = ex.id_obra {
            if !keys.contains(&(id, ex.year)) {
                keys.push((id, ex.year));
            }
        }
    }
    keys
}

fn run_details(
    client: &Client,
    params: &Params,
    progress: &mut Option<&mut dyn Progress>,
    summary: &mut RunSummary,
) -> Result<(), ScrapeError> {
    let execs = store::load_executions(&params.out_dir, EXECUTIONS_FILE)?;
    let keys = obra_keys(&execs);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(keys.len());
    }

    let mut all: Vec<ExecutionDetailRecord> = Vec::new();
    for (id_obra, year) in keys {
        let mut records =
            execution_details::fetch_obra(client, id_obra, year, params.page_size);
        if let Some(p) = progress.as_deref_mut() {
            p.unit_done(&format!("obra {id_obra} ({year})"), records.len());
        }
        all.append(&mut records);
    }

    let n = all.len();
    let path = store::save_json(&params.out_dir, DETAILS_FILE, &all)?;
    info!("wrote {n} detail records to {}", path.display());
    summary.add(path, n);
    Ok(())
}

/* ---------------- Enrichment (offline join) ---------------- */

fn run_enrich(
    params: &Params,
    progress: &mut Option<&mut dyn Progress>,
    summary: &mut RunSummary,
) -> Result<(), ScrapeError> {
    let execs = store::load_executions(&params.out_dir, EXECUTIONS_FILE)?;
    let details: Vec<ExecutionDetailRecord> =
        store::load_json(&params.out_dir.join(DETAILS_FILE))?;

    let enriched = enrich::enrich(&execs, &details);
    if let Some(p) = progress.as_deref_mut() {
        p.unit_done("enrich", enriched.len());
    }

    let n = enriched.len();
    let path = store::save_json(&params.out_dir, ENRICHED_FILE, &enriched)?;
    info!("wrote {n} enriched records to {}", path.display());
    summary.add(path, n);
    Ok(())
}

/* ---------------- Gastos (rolling 3-month window) ---------------- */

/// The three months ending at (year, month), oldest first.
/// Crosses the year boundary: (2025, 1) -> [(2024, 11), (2024, 12), (2025, 1)].
pub fn gastos_window(year: i32, month: u32) -> [(i32, u32); 3] {
    let mut out = [(0, 0); 3];
    for (i, back) in (0..3).rev().enumerate() {
        let m = month as i32 - back;
        out[i] = if m <= 0 { (year - 1, (m + 12) as u32) } else { (year, m as u32) };
    }
    out
}

type GastosMap = BTreeMap<String, BTreeMap<String, Vec<SalaryRecord>>>;

fn run_gastos(
    client: &Client,
    params: &Params,
    progress: &mut Option<&mut dyn Progress>,
    summary: &mut RunSummary,
) -> Result<(), ScrapeError> {
    let window = gastos_window(params.year_or_default(), params.month_or_default());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(window.len());
    }

    let mut data: GastosMap = BTreeMap::new();
    let mut n = 0usize;
    for (year, month) in window {
        let records = salaries::fetch_month(client, year, month, params.page_size);
        if let Some(p) = progress.as_deref_mut() {
            p.unit_done(&format!("gastos {year}-{month:02}"), records.len());
        }
        n += records.len();
        data.entry(year.to_string())
            .or_default()
            .insert(format!("{month:02}"), records);
    }

    let path = store::save_json(&params.out_dir, GASTOS_FILE, &data)?;
    info!("wrote {n} gastos records to {}", path.display());
    summary.add(path, n);
    Ok(())
}
