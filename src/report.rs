// src/report.rs
// Console rendering. Writes to any `Write` so the CLI passes stdout and tests
// pass a Vec<u8>.

use std::io::{self, Write};

use crate::config::consts::PREVIEW_ROWS;
use crate::core::sanitize::title_case;
use crate::data::{CaseRecord, CauseListEntry, HearingEntry, Outcome};

const RULE: &str = "==================================================";

pub fn write_case<W: Write>(out: &mut W, outcome: &Outcome<CaseRecord>) -> io::Result<()> {
    writeln!(out, "\n{RULE}\nCASE INFORMATION\n{RULE}")?;

    let rec = match outcome {
        Outcome::Data(rec) => rec,
        Outcome::Failed { error } => return writeln!(out, "Error: {error}"),
    };

    for (label, value) in &rec.fields {
        writeln!(out, "{}: {}", title_case(label), value)?;
    }

    let status = if rec.listed_today {
        Some("TODAY")
    } else if rec.listed_tomorrow {
        Some("TOMORROW")
    } else {
        None
    };

    match (status, &rec.next_hearing) {
        (Some(when), hearing) => {
            writeln!(out, "\nSTATUS: Listed {when}")?;
            if let Some(h) = hearing {
                write_hearing(out, rec, h)?;
            }
        }
        (None, hearing) => {
            writeln!(out, "\nSTATUS: Not listed today or tomorrow")?;
            if let Some(h) = hearing {
                writeln!(out, "   Next Hearing: {}", h.date)?;
            }
        }
    }
    Ok(())
}

fn write_hearing<W: Write>(out: &mut W, rec: &CaseRecord, h: &HearingEntry) -> io::Result<()> {
    writeln!(out, "   Serial Number: {}", rec.serial_number.as_deref().unwrap_or("N/A"))?;
    writeln!(out, "   Court: {}", rec.court_name.as_deref().unwrap_or("N/A"))?;
    writeln!(out, "   Purpose: {}", or_na(&h.purpose))?;
    writeln!(out, "   Stage: {}", or_na(&h.stage))
}

fn or_na(s: &str) -> &str {
    if s.is_empty() { "N/A" } else { s }
}

/// Count plus the first few rows.
pub fn write_cause_list<W: Write>(out: &mut W, outcome: &Outcome<Vec<CauseListEntry>>) -> io::Result<()> {
    let entries = match outcome {
        Outcome::Data(entries) => entries,
        Outcome::Failed { error } => return writeln!(out, "Error: {error}"),
    };

    writeln!(out, "Found {} cases in cause list", entries.len())?;
    for e in entries.iter().take(PREVIEW_ROWS) {
        writeln!(out, "  {}: {} - {}", e.serial_number, e.case_number, e.purpose)?;
    }
    if entries.len() > PREVIEW_ROWS {
        writeln!(out, "  ... and {} more cases", entries.len() - PREVIEW_ROWS)?;
    }
    Ok(())
}
