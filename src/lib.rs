// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod file;
pub mod listing;
pub mod report;
pub mod scrape;
pub mod specs;

pub use data::{CaseRecord, CauseListEntry, HearingEntry, Outcome, QueryIdentifier};
pub use listing::{classify, Listing};
