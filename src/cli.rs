// src/cli.rs
use std::{io::Write, path::PathBuf};

use chrono::NaiveDate;
use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::config::consts::{BASE_URL, BASE_URL_ENV, CAUSE_LIST_DATE_FMT};
use crate::config::options::{ExportFormat, ExportOptions, Params, Selectors, UsageError};
use crate::core::net::{Portal, PortalClient};
use crate::data::{Outcome, QueryIdentifier};
use crate::listing::local_today;
use crate::{file, report, scrape};

#[derive(Parser, Debug)]
#[command(name = "ecourts", version, about = "eCourts case listing fetcher")]
pub struct Args {
    /// Search by CNR number
    #[arg(long, help_heading = "Case Search Options")]
    pub cnr: Option<String>,

    /// Case type (e.g., CIVIL, CRIMINAL)
    #[arg(long, help_heading = "Case Search Options")]
    pub case_type: Option<String>,

    #[arg(long, help_heading = "Case Search Options")]
    pub case_number: Option<String>,

    #[arg(long, help_heading = "Case Search Options")]
    pub case_year: Option<String>,

    #[arg(long, help_heading = "Case Search Options")]
    pub state_code: Option<String>,

    /// District code
    #[arg(long, help_heading = "Case Search Options")]
    pub dist_code: Option<String>,

    #[arg(long, help_heading = "Case Search Options")]
    pub court_code: Option<String>,

    /// Check today's listings
    #[arg(long, help_heading = "Date Options")]
    pub today: bool,

    /// Check tomorrow's listings
    #[arg(long, help_heading = "Date Options")]
    pub tomorrow: bool,

    /// Download entire cause list
    #[arg(long, help_heading = "Date Options")]
    pub causelist: bool,

    /// Output filename (without extension)
    #[arg(short, long, help_heading = "Output Options")]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Json, help_heading = "Output Options")]
    pub format: ExportFormat,

    /// Portal root URL
    #[arg(long, env = BASE_URL_ENV, default_value = BASE_URL)]
    pub base_url: String,

    /// Debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_params(self) -> Result<Params, UsageError> {
        let export = ExportOptions { format: self.format, out_stem: self.output };
        let selectors = Selectors {
            cnr: self.cnr,
            case_type: self.case_type,
            case_number: self.case_number,
            case_year: self.case_year,
            state_code: self.state_code,
            dist_code: self.dist_code,
            court_code: self.court_code,
            today: self.today,
            tomorrow: self.tomorrow,
            causelist: self.causelist,
        };
        Ok(Params::from_selectors(selectors, export)?.with_base_url(self.base_url))
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let params = match args.into_params() {
        Ok(p) => p,
        // Same shape and exit status (2) as clap's own argument errors.
        Err(e) => Args::command().error(ErrorKind::MissingRequiredArgument, e).exit(),
    };

    let client = PortalClient::new(params.base_url.as_str())?;
    let stdout = std::io::stdout();
    execute(&client, &params, local_today(), &mut stdout.lock())
}

/// Case lookup first (if asked), then the cause list (if asked).
pub fn execute<P, W>(portal: &P, params: &Params, today: NaiveDate, out: &mut W) -> color_eyre::Result<()>
where
    P: Portal + ?Sized,
    W: Write,
{
    if let Some(query) = &params.query {
        match query {
            QueryIdentifier::Cnr(cnr) => writeln!(out, "Searching for case with CNR: {cnr}")?,
            QueryIdentifier::CaseNumber { .. } => writeln!(out, "Searching for case: {}", query.label())?,
        }

        let outcome = scrape::fetch_case(portal, query, today);
        report::write_case(out, &outcome)?;

        if let Some(path) = params.export.case_path() {
            let written = file::write_value(&path, &outcome, params.export.format)?;
            writeln!(out, "\nResults saved to: {}", written.display())?;
        }
    }

    if let Some(req) = &params.cause_list {
        let date = req.day.resolve(today).format(CAUSE_LIST_DATE_FMT);
        writeln!(out, "Downloading cause list for date: {date}")?;

        let outcome = scrape::fetch_cause_list(portal, req, today);
        report::write_cause_list(out, &outcome)?;

        // Error outcomes are reported, not saved.
        if let (Outcome::Data(entries), Some(path)) = (&outcome, params.export.cause_list_path()) {
            let written = file::write_list(&path, entries, params.export.format)?;
            writeln!(out, "\nCause list saved to: {}", written.display())?;
        }
    }

    Ok(())
}
