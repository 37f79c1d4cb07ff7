// src/specs/execution_details.rs
//
// HandlerMasterConsulta.ashx keyed by idObra + idVigenciaObra: XML,
// one <row> per budget line of one obra. Cell order: [unused,
// jurisdiccion, creditoVigente, devengado, pagado].

use reqwest::blocking::Client;

use crate::core::error::ScrapeError;
use crate::core::paging::fetch_all_pages;
use crate::core::retry::with_retry;
use crate::core::sanitize::{float_or_zero, text_or};
use crate::core::{net, xml};
use crate::params::{coded_year, BASE_URL, DETAIL_PAGE_SIZE, MASTER_HANDLER};
use crate::records::{ExecutionDetailRecord, SIN_JURISDICCION};

pub fn page_url(id_obra: i64, year: i32, rows: usize, page: usize) -> String {
    let coded = coded_year(year);
    format!(
        "{BASE_URL}/{MASTER_HANDLER}?idObra={id_obra}&idVigenciaObra={coded}&_search=false&rows={rows}&page={page}&sidx=invdate&sord=desc"
    )
}

pub fn normalize(rows: &[Vec<String>], id_obra: i64, year: i32) -> Vec<ExecutionDetailRecord> {
    rows.iter()
        .map(|cells| {
            let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");
            ExecutionDetailRecord {
                id_obra,
                year,
                jurisdiccion: text_or(cell(1), SIN_JURISDICCION),
                credito_vigente: float_or_zero(cell(2)),
                devengado: float_or_zero(cell(3)),
                pagado: float_or_zero(cell(4)),
            }
        })
        .collect()
}

pub fn fetch_page(
    client: &Client,
    id_obra: i64,
    year: i32,
    rows: usize,
    page: usize,
) -> Result<Vec<ExecutionDetailRecord>, ScrapeError> {
    let url = page_url(id_obra, year, rows, page);
    let label = format!("details obra {id_obra} year {year} page {page}");
    with_retry(&label, || {
        let body = net::http_get(client, &url, "application/xml")?;
        let raw = xml::parse_rows(&body);
        Ok(normalize(&raw, id_obra, year))
    })
}

/// All pages for one (idObra, year). A dead page truncates the obra (logged).
pub fn fetch_obra(
    client: &Client,
    id_obra: i64,
    year: i32,
    page_size: Option<usize>,
) -> Vec<ExecutionDetailRecord> {
    let rows = page_size.unwrap_or(DETAIL_PAGE_SIZE);
    let label = format!("details obra {id_obra} year {year}");
    fetch_all_pages(&label, rows, |page| fetch_page(client, id_obra, year, rows, page))
}
