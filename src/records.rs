// src/records.rs
//
// Record shapes for the JSON artifacts. Field names match what the
// serving layer reads, so serde renames are explicit where they differ
// from Rust naming.

use serde::{Deserialize, Serialize};

/// One salaried position's gross pay and contributions for a month.
/// Immutable once built; the normalizer stamps year/month at parse time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub jurisdiccion: String,
    pub unidad_organigrama: String,
    pub unidad_superior: String,
    pub cargo: String,
    pub monto_bruto: i64,
    pub aportes_personales: i64,
    pub contribuciones_patronales: i64,
    pub year: i32,
    /// Zero-padded "01".."12".
    pub month: String,
}

/// Budget-execution line for an obra (public-works project).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    pub obra: String,
    pub id_obra: Option<i64>,
    pub programa: String,
    pub jurisdiccion: String,
    pub objeto_gasto: String,
    pub beneficiario: String,
    pub monto: f64,
    pub year: i32,
}

/// Per-obra execution detail: credit, accrued and paid amounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionDetailRecord {
    pub id_obra: i64,
    pub year: i32,
    pub jurisdiccion: String,
    pub credito_vigente: f64,
    pub devengado: f64,
    pub pagado: f64,
}

/// Execution record joined with its detail rows: `pagado` is the sum of
/// matching detail amounts, `jurisdicciones` lists every jurisdiction that
/// contributed a source row (provenance, instead of mutating a label).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedExecution {
    pub obra: String,
    pub id_obra: Option<i64>,
    pub programa: String,
    pub objeto_gasto: String,
    pub beneficiario: String,
    pub monto: f64,
    pub year: i32,
    pub pagado: f64,
    pub jurisdicciones: Vec<String>,
}

// Placeholder defaults for missing source cells
pub const SIN_JURISDICCION: &str = "Sin Jurisdicción";
pub const SIN_UNIDAD: &str = "Sin Unidad";
pub const SIN_SUPERIOR: &str = "Sin Superior";
pub const SIN_CARGO: &str = "Sin Cargo";
pub const SIN_OBRA: &str = "Sin Obra";
pub const SIN_PROGRAMA: &str = "Sin Programa";
pub const SIN_OBJETO: &str = "Sin Objeto";
pub const SIN_BENEFICIARIO: &str = "Sin Beneficiario";
