// src/core/paging.rs

use log::warn;

use crate::core::error::ScrapeError;

/// Page through one logical unit of work (a month, an obra-year).
///
/// Calls `fetch_page(page)` starting at page 1 and appends each page's
/// rows to the result. Stops when a page comes back shorter than
/// `page_size`: the handlers have no total-count field, a short page is
/// the only end-of-data signal.
///
/// A page whose retries were exhausted is logged and treated as end of
/// data for this unit. That truncates the unit's output rather than
/// looping forever against a dead endpoint; the rest of the run goes on.
pub fn fetch_all_pages<T>(
    label: &str,
    page_size: usize,
    mut fetch_page: impl FnMut(usize) -> Result<Vec<T>, ScrapeError>,
) -> Vec<T> {
    let mut out = Vec::new();
    let mut page = 1usize;
    loop {
        match fetch_page(page) {
            Ok(rows) => {
                let n = rows.len();
                out.extend(rows);
                if n < page_size {
                    break;
                }
                page += 1;
            }
            Err(e) => {
                warn!("{label}: page {page} abandoned ({e}); truncating this unit");
                break;
            }
        }
    }
    out
}

/// Strict variant for required single-shot runs: the first failed page
/// kills the whole unit instead of truncating it.
pub fn fetch_all_pages_strict<T>(
    page_size: usize,
    mut fetch_page: impl FnMut(usize) -> Result<Vec<T>, ScrapeError>,
) -> Result<Vec<T>, ScrapeError> {
    let mut out = Vec::new();
    let mut page = 1usize;
    loop {
        let rows = fetch_page(page)?;
        let n = rows.len();
        out.extend(rows);
        if n < page_size {
            return Ok(out);
        }
        page += 1;
    }
}
