// src/specs/hearings.rs
//! Hearing history: `table.table.table-bordered`, header row first, then
//! `date | purpose | stage` rows as the portal publishes them.

use scraper::Html;
use tracing::debug;

use super::TableShape;
use crate::config::consts::HEARING_TABLE;
use crate::data::HearingEntry;

pub const SHAPE: TableShape = TableShape {
    table: HEARING_TABLE,
    skip_header: true,
    min_cells: 3,
};

pub fn extract(doc: &Html) -> Vec<HearingEntry> {
    let Some(table) = SHAPE.first_table(doc) else {
        debug!("hearing history table not found");
        return Vec::new();
    };

    let entries: Vec<HearingEntry> = SHAPE
        .data_rows(table)
        .into_iter()
        .filter(|c| !c[0].is_empty())
        .map(|mut c| {
            c.truncate(3);
            let stage = c.pop().unwrap_or_default();
            let purpose = c.pop().unwrap_or_default();
            let date = c.pop().unwrap_or_default();
            HearingEntry { date, purpose, stage }
        })
        .collect();

    debug!(count = entries.len(), "hearing entries extracted");
    entries
}
