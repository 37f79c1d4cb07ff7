// src/enrich.rs
//
// Cross-source join: obra-level execution rows + per-obra detail rows.
//
// Detail rows matching an execution on (idObra, year) contribute their
// `pagado` amounts to a summed total, and their jurisdiction labels to a
// provenance list. Duplicate source rows sharing (obra, programa, pagado)
// are merged by unioning their provenance lists; the upstream dataset
// contains such duplicates across jurisdictions.

use std::collections::HashMap;

use crate::records::{EnrichedExecution, ExecutionDetailRecord, ExecutionRecord};

/// Sum of `pagado` and ordered distinct jurisdictions per (idObra, year).
fn index_details(
    details: &[ExecutionDetailRecord],
) -> HashMap<(i64, i32), (f64, Vec<String>)> {
    let mut by_key: HashMap<(i64, i32), (f64, Vec<String>)> = HashMap::new();
    for d in details {
        let entry = by_key.entry((d.id_obra, d.year)).or_default();
        entry.0 += d.pagado;
        if !entry.1.contains(&d.jurisdiccion) {
            entry.1.push(d.jurisdiccion.clone());
        }
    }
    by_key
}

/// Join executions with their detail rows and dedup the result.
///
/// When detail rows match, the summed `pagado` becomes both the paid
/// total and the record's `monto` (obra rows carry no usable amount of
/// their own), and the detail jurisdictions take precedence over the
/// execution row's jurisdiction field.
pub fn enrich(
    executions: &[ExecutionRecord],
    details: &[ExecutionDetailRecord],
) -> Vec<EnrichedExecution> {
    let detail_index = index_details(details);

    let mut out: Vec<EnrichedExecution> = Vec::with_capacity(executions.len());
    // composite key (obra, programa, pagado-bits) -> index into `out`
    let mut seen: HashMap<(String, String, u64), usize> = HashMap::new();

    for ex in executions {
        let matched = ex
            .id_obra
            .and_then(|id| detail_index.get(&(id, ex.year)));

        let (pagado, jurisdicciones) = match matched {
            Some((sum, js)) => (*sum, js.clone()),
            None => (0.0, vec![ex.jurisdiccion.clone()]),
        };
        let monto = if matched.is_some() { pagado } else { ex.monto };

        let key = (ex.obra.clone(), ex.programa.clone(), pagado.to_bits());
        if let Some(&i) = seen.get(&key) {
            // duplicate source row: merge provenance, keep the rest
            for j in jurisdicciones {
                if !out[i].jurisdicciones.contains(&j) {
                    out[i].jurisdicciones.push(j);
                }
            }
            continue;
        }

        seen.insert(key, out.len());
        out.push(EnrichedExecution {
            obra: ex.obra.clone(),
            id_obra: ex.id_obra,
            programa: ex.programa.clone(),
            objeto_gasto: ex.objeto_gasto.clone(),
            beneficiario: ex.beneficiario.clone(),
            monto,
            year: ex.year,
            pagado,
            jurisdicciones,
        });
    }

    out
}
