// src/params.rs
use std::env;
use std::path::PathBuf;

// Net config
pub const BASE_URL: &str = "https://transparencia.cba.gov.ar";
pub const SALARIES_HANDLER: &str = "HandlerSueldos.ashx";
pub const MASTER_HANDLER: &str = "HandlerMasterConsulta.ashx";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 90;

// Retry
pub const MAX_ATTEMPTS: u32 = 3;

// Pagination (rows per page per endpoint)
pub const SALARY_PAGE_SIZE: usize = 1000;
pub const EXECUTION_PAGE_SIZE: usize = 2000;
pub const DETAIL_PAGE_SIZE: usize = 3000;

// Budget-execution years tracked by the portal
pub const FIRST_EXECUTION_YEAR: i32 = 2023;
pub const LAST_EXECUTION_YEAR: i32 = 2025;

// Output
pub const DEFAULT_DATA_DIR: &str = "data";
pub const SALARIES_FILE: &str = "sueldos.json";
pub const EXECUTIONS_FILE: &str = "executions.json";
pub const DETAILS_FILE: &str = "executionDetails.json";
pub const ENRICHED_FILE: &str = "executionsEnriched.json";
pub const GASTOS_FILE: &str = "gastos.json";

// Fallback period when neither flags nor YEAR/MONTH env select one
pub const DEFAULT_YEAR: i32 = 2025;
pub const DEFAULT_MONTH: u32 = 1;

/// The portal codes execution years: 206 = 2023, 207 = 2024, 208 = 2025.
pub fn coded_year(year: i32) -> i32 {
    206 + (year - 2023)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    Salaries,
    Executions,
    ExecutionDetails,
    Enrich,
    Gastos,
    /// Everything, in dependency order.
    All,
}

#[derive(Clone)]
pub struct Params {
    pub job: JobKind,
    pub year: Option<i32>,        // restrict to one year
    pub month: Option<u32>,       // restrict to one month (salaries only)
    pub out_dir: PathBuf,         // data directory for JSON artifacts
    pub page_size: Option<usize>, // override endpoint default (mostly for tests)
}

impl Params {
    pub fn new() -> Self {
        Self {
            job: JobKind::Salaries,
            year: None,
            month: None,
            out_dir: PathBuf::from(DEFAULT_DATA_DIR),
            page_size: None,
        }
    }

    /// Fill year/month from YEAR/MONTH env vars when flags left them unset.
    /// Bad values are ignored rather than fatal; defaults apply downstream.
    pub fn apply_env(&mut self) {
        if self.year.is_none() {
            if let Ok(v) = env::var("YEAR") {
                if let Ok(y) = v.trim().parse::<i32>() {
                    self.year = Some(y);
                }
            }
        }
        if self.month.is_none() {
            if let Ok(v) = env::var("MONTH") {
                if let Ok(m) = v.trim().parse::<u32>() {
                    if (1..=12).contains(&m) {
                        self.month = Some(m);
                    }
                }
            }
        }
    }

    pub fn year_or_default(&self) -> i32 {
        self.year.unwrap_or(DEFAULT_YEAR)
    }

    pub fn month_or_default(&self) -> u32 {
        self.month.unwrap_or(DEFAULT_MONTH)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
