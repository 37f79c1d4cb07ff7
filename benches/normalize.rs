// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cba_scrape::core::xml::parse_rows;
use cba_scrape::specs::salaries;

fn synthetic_doc(rows: usize) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?><rows>");
    for i in 0..rows {
        doc.push_str(&format!(
            "<row id=\"{i}\"><cell>Ministerio de Educaci&#243;n</cell>\
             <cell>Direcci&#243;n General {i}</cell><cell>Secretar&#237;a</cell>\
             <cell>Docente</cell><cell>{}</cell><cell>{}</cell><cell>{}</cell></row>",
            100_000 + i,
            10_000 + i,
            20_000 + i
        ));
    }
    doc.push_str("</rows>");
    doc
}

fn bench_normalize(c: &mut Criterion) {
    let doc = synthetic_doc(1000);

    c.bench_function("xml_parse_rows_1000", |b| {
        b.iter(|| {
            let rows = parse_rows(black_box(&doc));
            black_box(rows.len())
        })
    });

    c.bench_function("salaries_parse_and_normalize_1000", |b| {
        b.iter(|| {
            let rows = parse_rows(black_box(&doc));
            let records = salaries::normalize(&rows, 2024, 3);
            black_box(records.len())
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
