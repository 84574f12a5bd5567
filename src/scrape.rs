// src/scrape.rs
//! Fetch → parse → classify, one query at a time.
//!
//! Network failures come back as `Outcome::Failed` carrying the message;
//! everything the markup does not contain comes back empty.

use chrono::NaiveDate;
use scraper::Html;
use tracing::{info, warn};

use crate::config::consts::{CASE_HISTORY_PATH, CAUSE_LIST_DATE_FMT, CAUSE_LIST_PATH, CNR_SEARCH_PATH};
use crate::config::options::CauseListRequest;
use crate::core::html;
use crate::core::net::Portal;
use crate::data::{CaseRecord, CauseListEntry, Outcome, QueryIdentifier};
use crate::listing::classify;
use crate::specs::{case_details, cause_list, hearings};

/// Parse a case response into a finished record. Pure.
pub fn case_record(doc: &Html, query: &QueryIdentifier, today: NaiveDate) -> CaseRecord {
    let base = case_details::extract(doc, query.seed_fields());
    let hearing_dates = hearings::extract(doc);
    let listing = classify(&hearing_dates, today);

    CaseRecord {
        hearing_dates,
        listed_today: listing.listed_today,
        listed_tomorrow: listing.listed_tomorrow,
        next_hearing: listing.next_hearing,
        ..base
    }
}

pub fn fetch_case<P: Portal + ?Sized>(portal: &P, query: &QueryIdentifier, today: NaiveDate) -> Outcome<CaseRecord> {
    let (path, form) = case_form(query);
    info!(query = %query.label(), "fetching case");

    match portal.post_form(path, &form) {
        Ok(body) => Outcome::Data(case_record(&html::parse(&body), query, today)),
        Err(e) => {
            warn!(error = %e, "case fetch failed");
            Outcome::failed(format!("Failed to fetch case details: {e}"))
        }
    }
}

/// Download and parse the cause list for `req.day` relative to `today`.
pub fn fetch_cause_list<P: Portal + ?Sized>(
    portal: &P,
    req: &CauseListRequest,
    today: NaiveDate,
) -> Outcome<Vec<CauseListEntry>> {
    let date = req.day.resolve(today).format(CAUSE_LIST_DATE_FMT).to_string();
    let form = [
        ("state_code", req.state_code.as_str()),
        ("dist_code", req.dist_code.as_str()),
        ("court_code", req.court_code.as_str()),
        ("causelist_date", date.as_str()),
        ("action", "causelist"),
    ];
    info!(%date, court = %req.court_code, "fetching cause list");

    match portal.post_form(CAUSE_LIST_PATH, &form) {
        Ok(body) => Outcome::Data(cause_list::extract(&html::parse(&body), &date)),
        Err(e) => {
            warn!(error = %e, "cause list fetch failed");
            Outcome::failed(format!("Failed to download cause list: {e}"))
        }
    }
}

fn case_form(query: &QueryIdentifier) -> (&'static str, Vec<(&'static str, &str)>) {
    match query {
        QueryIdentifier::Cnr(cnr) => (
            CNR_SEARCH_PATH,
            vec![("cnr_number", cnr.as_str()), ("action", "cnr_search")],
        ),
        QueryIdentifier::CaseNumber { case_type, case_number, case_year, state_code, dist_code, court_code } => (
            CASE_HISTORY_PATH,
            vec![
                ("state_code", state_code.as_str()),
                ("dist_code", dist_code.as_str()),
                ("court_code", court_code.as_str()),
                ("case_type", case_type.as_str()),
                ("case_no", case_number.as_str()),
                ("year", case_year.as_str()),
                ("action", "case_history"),
            ],
        ),
    }
}
