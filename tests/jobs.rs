// tests/jobs.rs
//
// Job-level helpers: obra-key extraction, the gastos window, execution
// JSON normalization and URL shapes.

use serde_json::json;

use cba_scrape::params::coded_year;
use cba_scrape::records::{ExecutionRecord, SIN_BENEFICIARIO, SIN_OBRA};
use cba_scrape::runner::{gastos_window, obra_keys};
use cba_scrape::specs::{execution_details, executions, salaries};

#[test]
fn coded_years_match_the_portal_scheme() {
    assert_eq!(coded_year(2023), 206);
    assert_eq!(coded_year(2024), 207);
    assert_eq!(coded_year(2025), 208);
}

#[test]
fn url_shapes_carry_the_expected_query_parameters() {
    let u = salaries::page_url(2024, 3, 1000, 2);
    assert!(u.contains("HandlerSueldos.ashx"));
    assert!(u.contains("anio=2024"));
    assert!(u.contains("mes=03"), "month must be zero-padded: {u}");
    assert!(u.contains("rows=1000"));
    assert!(u.contains("page=2"));
    assert!(u.contains("sidx=invdate"));

    let u = executions::page_url(2024, 2000, 1);
    assert!(u.contains("anio=207"), "executions use the coded year: {u}");
    assert!(u.contains("Obras=Obras"));

    let u = execution_details::page_url(55, 2025, 3000, 1);
    assert!(u.contains("idObra=55"));
    assert!(u.contains("idVigenciaObra=208"));
}

#[test]
fn executions_normalize_defaults_and_falsy_ids() {
    let payload = json!([
        {
            "nobras": "Ruta Provincial 6",
            "id_Obra": 42,
            "prog": "Vial",
            "nro_nombre_jurisdiccion": "01 - Vialidad",
            "numero_objeto": "12.06",
            "beneficiario": "Constructora SA",
            "monto": "1234.5"
        },
        { "id_Obra": 0, "monto": 7 }
    ]);

    let out = executions::normalize(&payload, 2024).unwrap();
    assert_eq!(out.len(), 2);

    assert_eq!(out[0].id_obra, Some(42));
    assert_eq!(out[0].monto, 1234.5);
    assert_eq!(out[0].year, 2024);

    // id_Obra 0 is "no id", missing strings get placeholders
    assert_eq!(out[1].id_obra, None);
    assert_eq!(out[1].obra, SIN_OBRA);
    assert_eq!(out[1].beneficiario, SIN_BENEFICIARIO);
    assert_eq!(out[1].monto, 7.0);
}

#[test]
fn executions_normalize_rejects_non_array_payloads() {
    let payload = json!({ "error": "maintenance" });
    assert!(executions::normalize(&payload, 2024).is_err());
}

#[test]
fn detail_cells_use_positions_one_through_four() {
    let rows = vec![vec![
        "ignored".to_string(),
        "Vialidad".to_string(),
        "1000.5".to_string(),
        "800".to_string(),
        "600.25".to_string(),
    ]];
    let out = execution_details::normalize(&rows, 42, 2024);
    assert_eq!(out[0].id_obra, 42);
    assert_eq!(out[0].jurisdiccion, "Vialidad");
    assert_eq!(out[0].credito_vigente, 1000.5);
    assert_eq!(out[0].devengado, 800.0);
    assert_eq!(out[0].pagado, 600.25);
}

#[test]
fn obra_keys_dedup_and_skip_missing_ids() {
    let ex = |id: Option<i64>, year: i32| ExecutionRecord {
        obra: "x".into(),
        id_obra: id,
        programa: "p".into(),
        jurisdiccion: "j".into(),
        objeto_gasto: "o".into(),
        beneficiario: "b".into(),
        monto: 0.0,
        year,
    };

    let keys = obra_keys(&[
        ex(Some(1), 2023),
        ex(None, 2023),
        ex(Some(1), 2023), // duplicate
        ex(Some(1), 2024), // same obra, other year
        ex(Some(2), 2024),
    ]);
    assert_eq!(keys, vec![(1, 2023), (1, 2024), (2, 2024)]);
}

#[test]
fn gastos_window_is_three_months_oldest_first() {
    assert_eq!(gastos_window(2025, 4), [(2025, 2), (2025, 3), (2025, 4)]);
}

#[test]
fn gastos_window_crosses_the_year_boundary() {
    assert_eq!(gastos_window(2025, 1), [(2024, 11), (2024, 12), (2025, 1)]);
    assert_eq!(gastos_window(2025, 2), [(2024, 12), (2025, 1), (2025, 2)]);
}
