// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://services.ecourts.gov.in/ecourtindia_v6/";
pub const BASE_URL_ENV: &str = "ECOURTS_BASE_URL";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Endpoints (appended to BASE_URL)
pub const CNR_SEARCH_PATH: &str = "?p=case_history/index";
pub const CASE_HISTORY_PATH: &str = "?p=case_history/case_history";
pub const CAUSE_LIST_PATH: &str = "?p=causelist/index";

// Dates
pub const HEARING_DATE_FMT: &str = "%d/%m/%Y"; // hearing history cells
pub const CAUSE_LIST_DATE_FMT: &str = "%d-%m-%Y"; // cause list request + echo

// Markup
pub const CASE_DETAILS_TABLE: &str = "table.table";
pub const HEARING_TABLE: &str = "table.table.table-bordered";
pub const CAUSE_LIST_TABLE: &str = "table.table";
pub const COURT_HEADINGS: &[&str] = &["h3", "h4"];
pub const UNKNOWN_COURT: &str = "Unknown Court";

// Export
pub const CAUSE_LIST_SUFFIX: &str = "_causelist";
pub const PREVIEW_ROWS: usize = 5;
