// src/data.rs
//! Value objects produced by one query. Nothing here is shared or mutated
//! after it is returned.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scheduled appearance, straight from a hearing-history row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingEntry {
    /// `DD/MM/YYYY` as published; never reparsed.
    pub date: String,
    pub purpose: String,
    pub stage: String,
}

/// Label → value, in the order they were seeded or read off the page.
pub type Fields = IndexMap<String, String>;

/// Case details as published by the portal.
///
/// `fields` holds the seeded identifiers plus whatever label/value pairs the
/// case-details table carried. It is flattened into the top-level JSON object
/// next to the derived attributes, so a label may not reuse one of their
/// names (see [`CaseRecord::DERIVED_KEYS`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(flatten)]
    pub fields: Fields,
    pub hearing_dates: Vec<HearingEntry>,
    pub listed_today: bool,
    pub listed_tomorrow: bool,
    pub next_hearing: Option<HearingEntry>,
    pub serial_number: Option<String>,
    pub court_name: Option<String>,
}

impl CaseRecord {
    pub const DERIVED_KEYS: [&'static str; 6] = [
        "hearing_dates",
        "listed_today",
        "listed_tomorrow",
        "next_hearing",
        "serial_number",
        "court_name",
    ];

    pub fn is_derived_key(label: &str) -> bool {
        Self::DERIVED_KEYS.contains(&label)
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseListEntry {
    pub date: String,
    pub serial_number: String,
    pub case_number: String,
    pub parties: String,
    pub purpose: String,
    /// Nearest heading above the row's table, not a column of the row.
    pub court_name: String,
}

/// How the user asked for a case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryIdentifier {
    Cnr(String),
    CaseNumber {
        case_type: String,
        case_number: String,
        case_year: String,
        state_code: String,
        dist_code: String,
        court_code: String,
    },
}

impl QueryIdentifier {
    /// Fields echoed into the record before any markup is read.
    pub fn seed_fields(&self) -> Fields {
        let mut seed = Fields::new();
        match self {
            QueryIdentifier::Cnr(cnr) => {
                seed.insert(s!("cnr_number"), cnr.clone());
            }
            QueryIdentifier::CaseNumber { .. } => {
                seed.insert(s!("case_number"), self.label());
            }
        }
        seed
    }

    /// Human label: the CNR itself or `type/number/year`.
    pub fn label(&self) -> String {
        match self {
            QueryIdentifier::Cnr(cnr) => cnr.clone(),
            QueryIdentifier::CaseNumber { case_type, case_number, case_year, .. } => {
                format!("{case_type}/{case_number}/{case_year}")
            }
        }
    }
}

/// A fetch either yields data or an error object; transport failures never
/// escape as faults.
///
/// Serializes as the data itself, or as `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Data(T),
    Failed { error: String },
}

impl<T> Outcome<T> {
    pub fn failed(msg: impl Into<String>) -> Self {
        Outcome::Failed { error: msg.into() }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Data(t) => Some(t),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Data(_) => None,
            Outcome::Failed { error } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CaseRecord {
        let entry = HearingEntry { date: s!("01/01/2025"), purpose: s!("Arguments"), stage: s!("Evidence") };
        let mut fields = QueryIdentifier::Cnr(s!("MHPU010012342023")).seed_fields();
        fields.insert(s!("Case Type"), s!("Civil Suit"));
        fields.insert(s!("Filing Number"), s!("1234/2023"));
        CaseRecord {
            fields,
            hearing_dates: vec![entry.clone()],
            listed_today: true,
            listed_tomorrow: false,
            next_hearing: Some(entry),
            serial_number: None,
            court_name: None,
        }
    }

    #[test]
    fn record_json_roundtrip() {
        let rec = sample_record();
        let json = serde_json::to_string_pretty(&rec).unwrap();
        let back: CaseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn record_json_keeps_field_order() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        let cnr = json.find("\"cnr_number\"").unwrap();
        let case_type = json.find("\"Case Type\"").unwrap();
        let filing = json.find("\"Filing Number\"").unwrap();
        assert!(cnr < case_type && case_type < filing);

        let back: CaseRecord = serde_json::from_str(&json).unwrap();
        let keys: Vec<&str> = back.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["cnr_number", "Case Type", "Filing Number"]);
    }

    #[test]
    fn record_json_is_flat() {
        let v = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(v["cnr_number"], "MHPU010012342023");
        assert_eq!(v["Case Type"], "Civil Suit");
        assert_eq!(v["listed_today"], true);
        assert_eq!(v["next_hearing"]["date"], "01/01/2025");
        assert!(v["court_name"].is_null());
    }

    #[test]
    fn composite_seed_uses_slash_label() {
        let q = QueryIdentifier::CaseNumber {
            case_type: s!("CS"),
            case_number: s!("101"),
            case_year: s!("2023"),
            state_code: s!("26"),
            dist_code: s!("1"),
            court_code: s!("3"),
        };
        let seed = q.seed_fields();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed["case_number"], "CS/101/2023");
    }

    #[test]
    fn failed_outcome_serializes_as_error_object() {
        let out: Outcome<CaseRecord> = Outcome::failed("Failed to fetch case details: dns error");
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v, serde_json::json!({ "error": "Failed to fetch case details: dns error" }));
        assert!(out.data().is_none());
    }
}
