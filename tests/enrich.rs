// tests/enrich.rs
//
// Cross-source join of executions and execution details.

use cba_scrape::enrich::enrich;
use cba_scrape::records::{ExecutionDetailRecord, ExecutionRecord};

fn execution(obra: &str, id: Option<i64>, programa: &str, jurisdiccion: &str, year: i32) -> ExecutionRecord {
    ExecutionRecord {
        obra: obra.into(),
        id_obra: id,
        programa: programa.into(),
        jurisdiccion: jurisdiccion.into(),
        objeto_gasto: "12.06".into(),
        beneficiario: "Constructora SA".into(),
        monto: 0.0,
        year,
    }
}

fn detail(id: i64, year: i32, jurisdiccion: &str, pagado: f64) -> ExecutionDetailRecord {
    ExecutionDetailRecord {
        id_obra: id,
        year,
        jurisdiccion: jurisdiccion.into(),
        credito_vigente: 0.0,
        devengado: 0.0,
        pagado,
    }
}

#[test]
fn sums_pagado_across_matching_detail_rows() {
    let execs = vec![execution("Ruta 5", Some(5), "Prog A", "Vialidad", 2024)];
    let details = vec![
        detail(5, 2024, "Vialidad", 100.0),
        detail(5, 2024, "Vialidad", 50.0),
    ];

    let out = enrich(&execs, &details);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].pagado, 150.0);
    assert_eq!(out[0].monto, 150.0);
}

#[test]
fn detail_jurisdiction_wins_over_execution_field() {
    let execs = vec![execution("Escuela", Some(9), "Prog B", "Sin Jurisdicción", 2024)];
    let details = vec![detail(9, 2024, "Educación", 10.0)];

    let out = enrich(&execs, &details);
    assert_eq!(out[0].jurisdicciones, vec!["Educación".to_string()]);
}

#[test]
fn no_matching_details_keeps_own_jurisdiction_and_monto() {
    let mut ex = execution("Puente", Some(3), "Prog C", "Obras Públicas", 2023);
    ex.monto = 777.0;
    let out = enrich(&[ex], &[]);

    assert_eq!(out[0].pagado, 0.0);
    assert_eq!(out[0].monto, 777.0);
    assert_eq!(out[0].jurisdicciones, vec!["Obras Públicas".to_string()]);
}

#[test]
fn join_respects_year_not_just_obra_id() {
    let execs = vec![execution("Ruta 5", Some(5), "Prog A", "Vialidad", 2024)];
    let details = vec![detail(5, 2023, "Vialidad", 999.0)];

    let out = enrich(&execs, &details);
    assert_eq!(out[0].pagado, 0.0);
}

#[test]
fn duplicate_composite_keys_merge_into_provenance_list() {
    // Same obra+programa+pagado from two jurisdictions: one output record
    // listing both, instead of a mutated display label.
    let execs = vec![
        execution("Hospital Norte", Some(7), "Prog D", "Salud", 2024),
        execution("Hospital Norte", Some(8), "Prog D", "Capital", 2024),
    ];
    let details = vec![
        detail(7, 2024, "Salud", 300.0),
        detail(8, 2024, "Capital", 300.0),
    ];

    let out = enrich(&execs, &details);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].pagado, 300.0);
    assert_eq!(
        out[0].jurisdicciones,
        vec!["Salud".to_string(), "Capital".to_string()]
    );
}

#[test]
fn distinct_pagado_keeps_rows_separate() {
    let execs = vec![
        execution("Hospital Norte", Some(7), "Prog D", "Salud", 2024),
        execution("Hospital Norte", Some(8), "Prog D", "Capital", 2024),
    ];
    let details = vec![
        detail(7, 2024, "Salud", 300.0),
        detail(8, 2024, "Capital", 301.0),
    ];

    let out = enrich(&execs, &details);
    assert_eq!(out.len(), 2);
}

#[test]
fn execution_without_id_is_never_joined() {
    let execs = vec![execution("Sin id", None, "Prog E", "Ambiente", 2024)];
    let details = vec![detail(0, 2024, "Ambiente", 50.0)];

    let out = enrich(&execs, &details);
    assert_eq!(out[0].pagado, 0.0);
    assert_eq!(out[0].jurisdicciones, vec!["Ambiente".to_string()]);
}
