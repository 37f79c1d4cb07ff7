// tests/store.rs
//
// Persister: recursive dir creation, wholesale overwrite, pretty JSON.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use cba_scrape::records::SalaryRecord;
use cba_scrape::store::{load_json, save_json};

static SEQ: AtomicUsize = AtomicUsize::new(0);

fn scratch_dir(name: &str) -> PathBuf {
    let n = SEQ.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "cba_scrape_test_{name}_{}_{n}",
        std::process::id()
    ))
}

fn sample(month: &str) -> SalaryRecord {
    SalaryRecord {
        jurisdiccion: "Salud".into(),
        unidad_organigrama: "Hospital".into(),
        unidad_superior: "Ministerio".into(),
        cargo: "Enfermero".into(),
        monto_bruto: 150_000,
        aportes_personales: 25_000,
        contribuciones_patronales: 30_000,
        year: 2024,
        month: month.into(),
    }
}

#[test]
fn creates_missing_directories_recursively() {
    let root = scratch_dir("nested");
    let dir = root.join("a").join("b");
    let path = save_json(&dir, "sueldos.json", &vec![sample("01")]).unwrap();
    assert!(path.exists());

    let back: Vec<SalaryRecord> = load_json(&path).unwrap();
    assert_eq!(back, vec![sample("01")]);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn overwrites_prior_contents_wholesale() {
    let dir = scratch_dir("overwrite");
    save_json(&dir, "sueldos.json", &vec![sample("01"), sample("02")]).unwrap();
    let path = save_json(&dir, "sueldos.json", &vec![sample("03")]).unwrap();

    let back: Vec<SalaryRecord> = load_json(&path).unwrap();
    assert_eq!(back, vec![sample("03")]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn leaves_no_temp_file_behind() {
    let dir = scratch_dir("tmpfile");
    save_json(&dir, "out.json", &vec![sample("05")]).unwrap();

    let leftovers: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn output_is_pretty_printed_with_upstream_field_names() {
    let dir = scratch_dir("pretty");
    let path = save_json(&dir, "sueldos.json", &vec![sample("09")]).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    // Serving layer reads these exact camelCase keys.
    assert!(text.contains("\"montoBruto\": 150000"));
    assert!(text.contains("\"unidadOrganigrama\""));
    assert!(text.contains('\n'), "pretty-printed, not a single line");

    fs::remove_dir_all(&dir).unwrap();
}
