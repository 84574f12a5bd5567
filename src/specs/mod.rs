// src/specs/mod.rs
//! # Page specs
//!
//! One module per portal response. Each spec knows *where the data lives in
//! the markup* and turns a parsed document into typed values.
//!
//! ## What lives here
//! - **Pure extraction** from an already parsed `scraper::Html`. No network,
//!   no clock, no files.
//! - **Table shapes**: which table to pick, whether its first row is a header,
//!   and how many cells a data row needs.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`, driven by `scrape`).
//! - The today/tomorrow decision (`listing`).
//! - Console or file output (`report`, `file`).
//!
//! ## Conventions
//! - The portal markup is an unversioned contract. A missing table is *no
//!   data*, never an error: specs return empty results and log at debug.
//! - Cell text is whitespace-collapsed and trimmed (`core::html::text_of`).
//! - Document order is preserved; nothing is re-sorted.
//!
//! ## Current specs
//! - `case_details` – label/value table → `CaseRecord.fields`
//! - `hearings` – hearing history table → `Vec<HearingEntry>`
//! - `cause_list` – every listing table, with the court heading above it

pub mod case_details;
pub mod cause_list;
pub mod hearings;

use scraper::{ElementRef, Html};

use crate::core::html::{cells, css, first_match, rows};

/// Where a page keeps one kind of record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableShape {
    /// CSS selector for the table element.
    pub table: &'static str,
    /// First `<tr>` is a header row.
    pub skip_header: bool,
    /// Rows with fewer `<td>` cells are dropped silently.
    pub min_cells: usize,
}

impl TableShape {
    pub fn first_table<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        first_match(doc, &css(self.table))
    }

    pub fn tables<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&css(self.table)).collect()
    }

    /// Cell texts of every qualifying row, in document order.
    pub fn data_rows(&self, table: ElementRef<'_>) -> Vec<Vec<String>> {
        rows(table)
            .into_iter()
            .skip(usize::from(self.skip_header))
            .map(cells)
            .filter(|c| c.len() >= self.min_cells)
            .collect()
    }
}
