// src/specs/executions.rs
//
// HandlerMasterConsulta.ashx with Obras=Obras: returns a JSON array of
// obra-level execution rows for a coded year.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::core::error::ScrapeError;
use crate::core::net;
use crate::core::paging::fetch_all_pages;
use crate::core::retry::with_retry;
use crate::params::{coded_year, BASE_URL, EXECUTION_PAGE_SIZE, MASTER_HANDLER};
use crate::records::{
    ExecutionRecord, SIN_BENEFICIARIO, SIN_JURISDICCION, SIN_OBJETO, SIN_OBRA,
    SIN_PROGRAMA,
};

pub fn page_url(year: i32, rows: usize, page: usize) -> String {
    let coded = coded_year(year);
    format!(
        "{BASE_URL}/{MASTER_HANDLER}?anio={coded}&Obras=Obras&_search=false&rows={rows}&page={page}&sidx=invdate&sord=desc"
    )
}

/// Normalize one JSON array of raw obra rows.
/// The payload must be a JSON array; anything else is a parse failure
/// (and therefore retried, same as the upstream treats it).
pub fn normalize(payload: &Value, year: i32) -> Result<Vec<ExecutionRecord>, ScrapeError> {
    let items = payload
        .as_array()
        .ok_or_else(|| ScrapeError::Parse("expected a JSON array of obra rows".into()))?;

    Ok(items
        .iter()
        .map(|item| ExecutionRecord {
            obra: str_or(item, "nobras", SIN_OBRA),
            id_obra: opt_id(item, "id_Obra"),
            programa: str_or(item, "prog", SIN_PROGRAMA),
            jurisdiccion: str_or(item, "nro_nombre_jurisdiccion", SIN_JURISDICCION),
            objeto_gasto: str_or(item, "numero_objeto", SIN_OBJETO),
            beneficiario: str_or(item, "beneficiario", SIN_BENEFICIARIO),
            monto: num_or_zero(item, "monto"),
            year,
        })
        .collect())
}

pub fn fetch_page(
    client: &Client,
    year: i32,
    rows: usize,
    page: usize,
) -> Result<Vec<ExecutionRecord>, ScrapeError> {
    let url = page_url(year, rows, page);
    let label = format!("executions {year} page {page}");
    with_retry(&label, || {
        let body = net::http_get(client, &url, "application/json")?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| ScrapeError::Parse(format!("invalid JSON: {e}")))?;
        normalize(&payload, year)
    })
}

/// All pages for one year. A dead page truncates the year (logged).
pub fn fetch_year(client: &Client, year: i32, page_size: Option<usize>) -> Vec<ExecutionRecord> {
    let rows = page_size.unwrap_or(EXECUTION_PAGE_SIZE);
    let label = format!("executions {year}");
    fetch_all_pages(&label, rows, |page| fetch_page(client, year, rows, page))
}

/* ---------- JSON field helpers ---------- */

fn str_or(item: &Value, key: &str, placeholder: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => placeholder.to_string(),
    }
}

/// `id_Obra` is falsy-null upstream: absent, null or 0 all mean "no id".
fn opt_id(item: &Value, key: &str) -> Option<i64> {
    let id = match item.get(key) {
        Some(Value::Number(n)) => n.as_i64()?,
        Some(Value::String(s)) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    (id != 0).then_some(id)
}

/// Amounts arrive as numbers or numeric strings; either way, garbage is 0.
fn num_or_zero(item: &Value, key: &str) -> f64 {
    match item.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => crate::core::sanitize::float_or_zero(s),
        _ => 0.0,
    }
}
