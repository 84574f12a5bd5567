// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use thiserror::Error;

use super::consts::{BASE_URL, CAUSE_LIST_SUFFIX};
use crate::data::QueryIdentifier;

/// Raw selector values as typed by the user, before validation.
#[derive(Clone, Debug, Default)]
pub struct Selectors {
    pub cnr: Option<String>,
    pub case_type: Option<String>,
    pub case_number: Option<String>,
    pub case_year: Option<String>,
    pub state_code: Option<String>,
    pub dist_code: Option<String>,
    pub court_code: Option<String>,
    pub today: bool,
    pub tomorrow: bool,
    pub causelist: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("must specify either --cnr, --case-type with other case details, or --causelist")]
    NoSelector,
    #[error("when using --case-type, must also provide {}", flags(.0))]
    MissingCaseFields(Vec<&'static str>),
    #[error("when using --causelist, must provide {}", flags(.0))]
    MissingCourtCodes(Vec<&'static str>),
}

fn flags(names: &[&'static str]) -> String {
    names.join(", ")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DaySelector {
    #[default]
    Today,
    Tomorrow,
}

impl DaySelector {
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            DaySelector::Today => today,
            DaySelector::Tomorrow => today.checked_add_days(Days::new(1)).unwrap_or(today),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CauseListRequest {
    pub state_code: String,
    pub dist_code: String,
    pub court_code: String,
    pub day: DaySelector,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Json,
    /// One JSON object per line
    Text,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "text",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// File stem without extension. `None` means console only.
    pub out_stem: Option<PathBuf>,
}

impl ExportOptions {
    /// `<stem>.<ext>`
    pub fn case_path(&self) -> Option<PathBuf> {
        self.out_stem.as_deref().map(|stem| with_suffix(stem, "", self.format))
    }

    /// `<stem>_causelist.<ext>`
    pub fn cause_list_path(&self) -> Option<PathBuf> {
        self.out_stem
            .as_deref()
            .map(|stem| with_suffix(stem, CAUSE_LIST_SUFFIX, self.format))
    }
}

// Appends rather than replacing: a stem like "out/v1.2" keeps its dot.
fn with_suffix(stem: &Path, suffix: &str, format: ExportFormat) -> PathBuf {
    let name = stem.to_string_lossy();
    PathBuf::from(join!(&*name, suffix, ".", format.ext()))
}

/// Validated run parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub query: Option<QueryIdentifier>,
    pub cause_list: Option<CauseListRequest>,
    pub export: ExportOptions,
    pub base_url: String,
}

impl Params {
    /// Validate selectors. Runs before any network activity.
    pub fn from_selectors(sel: Selectors, export: ExportOptions) -> Result<Self, UsageError> {
        if sel.cnr.is_none() && sel.case_type.is_none() && !sel.causelist {
            return Err(UsageError::NoSelector);
        }

        let query = if let Some(cnr) = sel.cnr.clone() {
            Some(QueryIdentifier::Cnr(cnr))
        } else if let Some(case_type) = sel.case_type.clone() {
            let missing = missing(&[
                ("--case-number", &sel.case_number),
                ("--case-year", &sel.case_year),
                ("--state-code", &sel.state_code),
                ("--dist-code", &sel.dist_code),
                ("--court-code", &sel.court_code),
            ]);
            if !missing.is_empty() {
                return Err(UsageError::MissingCaseFields(missing));
            }
            Some(QueryIdentifier::CaseNumber {
                case_type,
                case_number: sel.case_number.clone().unwrap_or_default(),
                case_year: sel.case_year.clone().unwrap_or_default(),
                state_code: sel.state_code.clone().unwrap_or_default(),
                dist_code: sel.dist_code.clone().unwrap_or_default(),
                court_code: sel.court_code.clone().unwrap_or_default(),
            })
        } else {
            None
        };

        let cause_list = if sel.causelist {
            let missing = missing(&[
                ("--state-code", &sel.state_code),
                ("--dist-code", &sel.dist_code),
                ("--court-code", &sel.court_code),
            ]);
            if !missing.is_empty() {
                return Err(UsageError::MissingCourtCodes(missing));
            }
            // --today wins if both are given
            let day = if !sel.today && sel.tomorrow { DaySelector::Tomorrow } else { DaySelector::Today };
            Some(CauseListRequest {
                state_code: sel.state_code.unwrap_or_default(),
                dist_code: sel.dist_code.unwrap_or_default(),
                court_code: sel.court_code.unwrap_or_default(),
                day,
            })
        } else {
            None
        };

        Ok(Self { query, cause_list, export, base_url: s!(BASE_URL) })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// Empty strings count as missing, same as absent flags.
fn missing(fields: &[(&'static str, &Option<String>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, v)| v.as_deref().map_or(true, |s| s.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite() -> Selectors {
        Selectors {
            case_type: Some(s!("CS")),
            case_number: Some(s!("101")),
            case_year: Some(s!("2023")),
            state_code: Some(s!("26")),
            dist_code: Some(s!("1")),
            court_code: Some(s!("3")),
            ..Default::default()
        }
    }

    #[test]
    fn nothing_selected_is_usage_error() {
        let err = Params::from_selectors(Selectors::default(), ExportOptions::default()).unwrap_err();
        assert_eq!(err, UsageError::NoSelector);
    }

    #[test]
    fn composite_requires_all_fields() {
        let mut sel = composite();
        sel.case_year = None;
        sel.court_code = Some(s!("  "));
        let err = Params::from_selectors(sel, ExportOptions::default()).unwrap_err();
        assert_eq!(err, UsageError::MissingCaseFields(vec!["--case-year", "--court-code"]));
        assert!(err.to_string().contains("--case-year, --court-code"));
    }

    #[test]
    fn composite_builds_query() {
        let p = Params::from_selectors(composite(), ExportOptions::default()).unwrap();
        match p.query {
            Some(QueryIdentifier::CaseNumber { ref case_type, ref case_year, .. }) => {
                assert_eq!(case_type, "CS");
                assert_eq!(case_year, "2023");
            }
            other => panic!("unexpected query: {other:?}"),
        }
        assert!(p.cause_list.is_none());
        assert_eq!(p.base_url, BASE_URL);
    }

    #[test]
    fn cnr_takes_precedence_over_case_type() {
        let mut sel = composite();
        sel.cnr = Some(s!("DLHC010012342023"));
        let p = Params::from_selectors(sel, ExportOptions::default()).unwrap();
        assert_eq!(p.query, Some(QueryIdentifier::Cnr(s!("DLHC010012342023"))));
    }

    #[test]
    fn cnr_skips_case_type_companion_check() {
        let sel = Selectors {
            cnr: Some(s!("DLHC010012342023")),
            case_type: Some(s!("CS")),
            ..Default::default()
        };
        let p = Params::from_selectors(sel, ExportOptions::default()).unwrap();
        assert_eq!(p.query, Some(QueryIdentifier::Cnr(s!("DLHC010012342023"))));
    }

    #[test]
    fn causelist_requires_court_codes() {
        let sel = Selectors { causelist: true, state_code: Some(s!("26")), ..Default::default() };
        let err = Params::from_selectors(sel, ExportOptions::default()).unwrap_err();
        assert_eq!(err, UsageError::MissingCourtCodes(vec!["--dist-code", "--court-code"]));
    }

    #[test]
    fn causelist_day_selection() {
        let base = Selectors {
            causelist: true,
            state_code: Some(s!("26")),
            dist_code: Some(s!("1")),
            court_code: Some(s!("3")),
            ..Default::default()
        };

        let p = Params::from_selectors(base.clone(), ExportOptions::default()).unwrap();
        assert_eq!(p.cause_list.unwrap().day, DaySelector::Today);

        let p = Params::from_selectors(Selectors { tomorrow: true, ..base.clone() }, ExportOptions::default()).unwrap();
        assert_eq!(p.cause_list.unwrap().day, DaySelector::Tomorrow);

        let both = Selectors { today: true, tomorrow: true, ..base };
        let p = Params::from_selectors(both, ExportOptions::default()).unwrap();
        assert_eq!(p.cause_list.unwrap().day, DaySelector::Today);
    }

    #[test]
    fn day_selector_rolls_over_month() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(DaySelector::Tomorrow.resolve(d), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(DaySelector::Today.resolve(d), d);
    }

    #[test]
    fn export_paths_append_extension() {
        let export = ExportOptions { format: ExportFormat::Text, out_stem: Some(PathBuf::from("out/v1.2")) };
        assert_eq!(export.case_path().unwrap(), PathBuf::from("out/v1.2.text"));
        assert_eq!(export.cause_list_path().unwrap(), PathBuf::from("out/v1.2_causelist.text"));
        assert!(ExportOptions::default().case_path().is_none());
    }
}
