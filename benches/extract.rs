// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::NaiveDate;
use ecourts_scrape::{
    core::html::parse,
    scrape::case_record,
    specs::cause_list,
    QueryIdentifier,
};

const CASE_STATUS: &str = include_str!("../tests/fixtures/case_status.html");
const CAUSE_LIST: &str = include_str!("../tests/fixtures/cause_list.html");

/// Repeat the court sections so the backward heading scan has work to do.
fn large_cause_list(sections: usize) -> String {
    let start = CAUSE_LIST.find("<h3>").unwrap_or(0);
    let end = CAUSE_LIST.rfind("</div>").unwrap_or(CAUSE_LIST.len());
    let body = &CAUSE_LIST[start..end];
    let mut doc = String::from("<html><body>");
    for _ in 0..sections {
        doc.push_str(body);
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let query = QueryIdentifier::Cnr("MHPU010012342023".into());
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    c.bench_function("case_record", |b| {
        b.iter(|| {
            let doc = parse(black_box(CASE_STATUS));
            black_box(case_record(&doc, &query, today).hearing_dates.len())
        })
    });

    let big = large_cause_list(50);
    let doc = parse(&big);
    c.bench_function("cause_list_50_sections", |b| {
        b.iter(|| black_box(cause_list::extract(black_box(&doc), "18-10-2026").len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
