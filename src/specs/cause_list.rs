// src/specs/cause_list.rs
//! Cause list: one `table.table` per court section, each under an `<h3>` or
//! `<h4>` naming the court.
//!
//! ```text
//! <h3>Court No. 1 - Civil Judge Senior Division</h3>
//! <table class="table">
//!   <tr><th>Sr No</th><th>Case</th><th>Parties</th><th>Purpose</th></tr>
//!   <tr><td>1</td><td>CS/101/2023</td><td>A vs B</td><td>Evidence</td></tr>
//! ```
//! The court name is looked up per table by walking back through document
//! order; it is never cached across tables.

use scraper::Html;
use tracing::debug;

use super::TableShape;
use crate::config::consts::{CAUSE_LIST_TABLE, COURT_HEADINGS, UNKNOWN_COURT};
use crate::core::html::{preceding_element, text_of};
use crate::data::CauseListEntry;

pub const SHAPE: TableShape = TableShape {
    table: CAUSE_LIST_TABLE,
    skip_header: true,
    min_cells: 4,
};

/// `date` is echoed into every entry as given.
pub fn extract(doc: &Html, date: &str) -> Vec<CauseListEntry> {
    let mut out = Vec::new();

    for table in SHAPE.tables(doc) {
        let rows = SHAPE.data_rows(table);
        if rows.is_empty() {
            continue;
        }

        let court_name = preceding_element(doc, table, COURT_HEADINGS)
            .map(text_of)
            .unwrap_or_else(|| s!(UNKNOWN_COURT));
        debug!(court = %court_name, rows = rows.len(), "cause list table");

        for mut c in rows {
            c.truncate(4);
            let mut c = c.into_iter();
            out.push(CauseListEntry {
                date: s!(date),
                serial_number: c.next().unwrap_or_default(),
                case_number: c.next().unwrap_or_default(),
                parties: c.next().unwrap_or_default(),
                purpose: c.next().unwrap_or_default(),
                court_name: court_name.clone(),
            });
        }
    }

    out
}
