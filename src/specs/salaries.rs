// src/specs/salaries.rs
//
// HandlerSueldos.ashx: XML, one <row> per salaried position.
// Cell order: jurisdiccion, unidadOrganigrama, unidadSuperior, cargo,
// montoBruto, aportesPersonales, contribucionesPatronales.

use reqwest::blocking::Client;

use crate::core::error::ScrapeError;
use crate::core::paging::{fetch_all_pages, fetch_all_pages_strict};
use crate::core::retry::with_retry;
use crate::core::sanitize::{int_or_zero, text_or};
use crate::core::{net, xml};
use crate::params::{BASE_URL, SALARIES_HANDLER, SALARY_PAGE_SIZE};
use crate::records::{
    SalaryRecord, SIN_CARGO, SIN_JURISDICCION, SIN_SUPERIOR, SIN_UNIDAD,
};

pub fn page_url(year: i32, month: u32, rows: usize, page: usize) -> String {
    format!(
        "{BASE_URL}/{SALARIES_HANDLER}?anio={year}&mes={month:02}&rows={rows}&page={page}&sidx=invdate&sord=desc"
    )
}

/// Raw XML cells for one month-page, normalized and stamped.
pub fn normalize(rows: &[Vec<String>], year: i32, month: u32) -> Vec<SalaryRecord> {
    rows.iter()
        .map(|cells| {
            let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");
            SalaryRecord {
                jurisdiccion: text_or(cell(0), SIN_JURISDICCION),
                unidad_organigrama: text_or(cell(1), SIN_UNIDAD),
                unidad_superior: text_or(cell(2), SIN_SUPERIOR),
                cargo: text_or(cell(3), SIN_CARGO),
                monto_bruto: int_or_zero(cell(4)),
                aportes_personales: int_or_zero(cell(5)),
                contribuciones_patronales: int_or_zero(cell(6)),
                year,
                month: format!("{month:02}"),
            }
        })
        .collect()
}

/// Fetch one page of one month, retried with backoff.
pub fn fetch_page(
    client: &Client,
    year: i32,
    month: u32,
    rows: usize,
    page: usize,
) -> Result<Vec<SalaryRecord>, ScrapeError> {
    let url = page_url(year, month, rows, page);
    let label = format!("sueldos {year}-{month:02} page {page}");
    with_retry(&label, || {
        let body = net::http_get(client, &url, "application/xml")?;
        let raw = xml::parse_rows(&body);
        Ok(normalize(&raw, year, month))
    })
}

/// All pages for one month. A dead page truncates the month (logged).
pub fn fetch_month(client: &Client, year: i32, month: u32, page_size: Option<usize>) -> Vec<SalaryRecord> {
    let rows = page_size.unwrap_or(SALARY_PAGE_SIZE);
    let label = format!("sueldos {year}-{month:02}");
    fetch_all_pages(&label, rows, |page| fetch_page(client, year, month, rows, page))
}

/// Strict variant for the required single-shot run: any exhausted page
/// surfaces as an error so the process can exit non-zero.
pub fn fetch_month_strict(
    client: &Client,
    year: i32,
    month: u32,
    page_size: Option<usize>,
) -> Result<Vec<SalaryRecord>, ScrapeError> {
    let rows = page_size.unwrap_or(SALARY_PAGE_SIZE);
    fetch_all_pages_strict(rows, |page| fetch_page(client, year, month, rows, page))
}
