// src/specs/case_details.rs
//! Case details: a two-column label/value table.
//!
//! ```text
//! <table class="table">
//!   <tr><td>Case Type :</td><td>Civil Suit</td></tr>
//!   <tr><td>Filing Number:</td><td>1234/2023</td></tr>
//! ```
//! Labels become map keys verbatim (after dropping the trailing colon), so the
//! key set follows whatever the portal prints. A label that names a derived
//! attribute of `CaseRecord` is dropped; the derived value owns that key.

use scraper::Html;
use tracing::debug;

use super::TableShape;
use crate::config::consts::CASE_DETAILS_TABLE;
use crate::core::sanitize::strip_label_colon;
use crate::data::{CaseRecord, Fields};

pub const SHAPE: TableShape = TableShape {
    table: CASE_DETAILS_TABLE,
    skip_header: false,
    min_cells: 2,
};

pub fn extract(doc: &Html, identifiers: Fields) -> CaseRecord {
    extract_with(doc, &SHAPE, identifiers)
}

pub fn extract_with(doc: &Html, shape: &TableShape, identifiers: Fields) -> CaseRecord {
    let mut fields = identifiers;

    let Some(table) = shape.first_table(doc) else {
        debug!(selector = shape.table, "case details table not found");
        return CaseRecord { fields, ..Default::default() };
    };

    let seeded = fields.len();
    for cells in shape.data_rows(table) {
        let [label, value, ..] = cells.as_slice() else {
            continue;
        };
        let label = strip_label_colon(label);
        if label.is_empty() || value.is_empty() {
            continue;
        }
        if CaseRecord::is_derived_key(&label) {
            debug!(%label, "label shadows a derived attribute; dropped");
            continue;
        }
        fields.insert(label, value.clone());
    }
    debug!(fields = fields.len().saturating_sub(seeded), "case details extracted");

    CaseRecord { fields, ..Default::default() }
}
