// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::file::{read_input, write_export};
use crate::page::RaceStartlist;
use crate::specs::fields::validate_fields;
use crate::specs::race_url::canonicalize;
use crate::specs::startlist::{extract_with_fields, SUPPORTED_FIELDS};

#[derive(Parser, Debug, Clone)]
#[command(name = "startlist", version, about = "Extract a race startlist from a saved page")]
pub struct Args {
    /// Page URL (absolute or relative), e.g. race/tour-de-france/2021/startlist
    #[arg(short, long)]
    pub url: String,

    /// Saved page HTML; stdin when omitted or `-`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Comma-separated fields (rider_name, rider_url, team_name, team_url, nationality, rider_number); all when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// csv | tsv | json
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Emit a header row (csv/tsv)
    #[arg(long)]
    pub include_headers: bool,

    /// Output file, or a directory ending in `/`; stdout when omitted
    #[arg(short, long)]
    pub out: Option<String>,

    /// Print the canonical page identity and exit
    #[arg(long)]
    pub identity_only: bool,

    /// More logging (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn export_options(&self) -> ExportOptions {
        let mut export = ExportOptions::new(self.format, self.include_headers);
        if let Some(out) = &self.out {
            export.set_path(out);
        }
        export
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    crate::log::init(args.verbose);

    // Bad fields or a bad URL never cost a read of the page.
    let fields = validate_fields(args.fields.as_slice(), &SUPPORTED_FIELDS)?;
    let identity = canonicalize(&args.url)?;
    if args.identity_only {
        println!("{identity}");
        return Ok(());
    }

    let html = read_input(args.input.as_deref())
        .wrap_err_with(|| format!("reading page for {identity}"))?;
    let page = RaceStartlist::new(&args.url, &html)?;
    logf!("Extracting {identity}");

    let records = extract_with_fields(page.document(), &fields)?;
    write_export(&args.export_options(), &fields, &records)?;
    Ok(())
}
