// src/listing.rs
//! Decide whether a case is listed today, tomorrow, or neither.
//!
//! Matching is exact string equality against the reference date rendered as
//! `DD/MM/YYYY`. A date in any other shape simply never matches.

use chrono::{Days, Local, NaiveDate};

use crate::config::consts::HEARING_DATE_FMT;
use crate::data::HearingEntry;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub listed_today: bool,
    pub listed_tomorrow: bool,
    pub next_hearing: Option<HearingEntry>,
}

/// First entry dated today wins outright; otherwise the first entry dated
/// tomorrow. Later duplicates are ignored.
pub fn classify(entries: &[HearingEntry], reference: NaiveDate) -> Listing {
    let today = reference.format(HEARING_DATE_FMT).to_string();
    if let Some(hit) = entries.iter().find(|e| e.date == today) {
        return Listing { listed_today: true, listed_tomorrow: false, next_hearing: Some(hit.clone()) };
    }

    let tomorrow = reference
        .checked_add_days(Days::new(1))
        .map(|d| d.format(HEARING_DATE_FMT).to_string());
    if let Some(tomorrow) = tomorrow {
        if let Some(hit) = entries.iter().find(|e| e.date == tomorrow) {
            return Listing { listed_today: false, listed_tomorrow: true, next_hearing: Some(hit.clone()) };
        }
    }

    Listing::default()
}

/// Reference date from the local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, purpose: &str) -> HearingEntry {
        HearingEntry { date: s!(date), purpose: s!(purpose), stage: s!("Evidence") }
    }

    fn jan1() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn today_match() {
        let l = classify(&[entry("01/01/2025", "a"), entry("02/01/2025", "b")], jan1());
        assert!(l.listed_today);
        assert!(!l.listed_tomorrow);
        assert_eq!(l.next_hearing.unwrap().date, "01/01/2025");
    }

    #[test]
    fn today_beats_earlier_tomorrow() {
        let l = classify(&[entry("02/01/2025", "b"), entry("01/01/2025", "a")], jan1());
        assert!(l.listed_today && !l.listed_tomorrow);
        assert_eq!(l.next_hearing.unwrap().purpose, "a");
    }

    #[test]
    fn tomorrow_match() {
        let l = classify(&[entry("02/01/2025", "b")], jan1());
        assert!(l.listed_tomorrow);
        assert!(!l.listed_today);
        assert_eq!(l.next_hearing.unwrap().date, "02/01/2025");
    }

    #[test]
    fn neither() {
        let l = classify(&[entry("05/01/2025", "c")], jan1());
        assert_eq!(l, Listing::default());
        assert!(classify(&[], jan1()).next_hearing.is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let l = classify(&[entry("01/01/2025", "first"), entry("01/01/2025", "second")], jan1());
        assert_eq!(l.next_hearing.unwrap().purpose, "first");
    }

    #[test]
    fn other_formats_never_match() {
        let entries = [entry("2025-01-01", "iso"), entry("1/1/2025", "short"), entry("01-01-2025", "dash")];
        assert_eq!(classify(&entries, jan1()), Listing::default());
    }

    #[test]
    fn tomorrow_crosses_year_end() {
        let dec31 = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let l = classify(&[entry("01/01/2025", "new year")], dec31);
        assert!(l.listed_tomorrow);
    }
}
