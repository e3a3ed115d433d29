// src/cli.rs
use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use crate::{
    charts::{self, RadarChart},
    config::{
        leagues,
        options::{DocumentKind, ExportFormat, ExportOptions, Query, Season},
    },
    core::net::{Fetch, HttpFetcher},
    csv::table_to_string,
    file,
    progress::Progress,
    scrape::Pipeline,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Fetch one fbref league table and print or export it")]
pub struct Args {
    /// Competition name, e.g. "Serie A"
    #[arg(long, default_value = "Premier League")]
    pub league: String,

    /// Season as YYYY-YYYY (default: most recent)
    #[arg(long)]
    pub season: Option<Season>,

    /// standings | fixtures
    #[arg(long, default_value = "standings")]
    pub kind: DocumentKind,

    /// csv | tsv
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Write to this file (or into this directory) instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,

    #[arg(long)]
    pub no_headers: bool,

    #[arg(long)]
    pub list_leagues: bool,

    #[arg(long)]
    pub list_seasons: bool,

    /// Print the radar comparison of two teams instead of the table
    #[arg(long, num_args = 2, value_names = ["TEAM1", "TEAM2"])]
    pub compare: Option<Vec<String>>,

    /// Debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Status lines go to stderr so stdout carries only data.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn finish(&mut self, ok: bool) {
        if ok {
            eprintln!("Data fetched successfully!");
        }
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    crate::log::init_stderr(args.verbose);

    let fetcher = HttpFetcher::new()?;
    let stdout = io::stdout();
    execute(&args, fetcher, &mut stdout.lock())
}

/// Everything after argument parsing; `out` receives what would go to stdout.
pub fn execute<F: Fetch, W: Write>(args: &Args, fetcher: F, out: &mut W) -> Result<()> {
    if args.list_leagues {
        for c in leagues::all() {
            writeln!(out, "{},{}", c.name, c.id)?;
        }
        return Ok(());
    }
    if args.list_seasons {
        for s in Season::available() {
            writeln!(out, "{}", s)?;
        }
        return Ok(());
    }

    let competition = leagues::find(&args.league).ok_or_else(|| {
        let known: Vec<&str> = leagues::all().iter().map(|c| c.name).collect();
        eyre!("Unknown league {:?} (expected one of: {})", args.league, known.join(", "))
    })?;
    let query = Query {
        competition: *competition,
        season: args.season.unwrap_or_else(Season::latest),
        kind: args.kind,
    };
    logf!("CLI: {}", query.heading());

    let mut pipeline = Pipeline::new(fetcher);
    let table = pipeline.run(&query, Some(&mut StderrProgress))?;

    if let Some(teams) = &args.compare {
        let rows = table
            .standings()
            .ok_or_else(|| eyre!("--compare needs --kind standings"))?;
        let [team1, team2] = teams.as_slice() else {
            return Err(eyre!("--compare takes exactly two team names"));
        };
        let chart = charts::comparison_chart(rows, team1, team2)?;
        write_radar(out, &chart)?;
        return Ok(());
    }

    let mut export = ExportOptions::default();
    export.format = args.format;
    export.include_headers = !args.no_headers;

    match &args.out {
        Some(target) => {
            let default = export.default_path_for(&query);
            let name = default.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            let path = file::resolve_out_path(target, &name);
            export.set_path(&path.to_string_lossy());
            let written = file::export_table(&export, &query, &table)?;
            eprintln!("Wrote {} rows to {}", table.len(), written.display());
        }
        None => {
            let text = table_to_string(&table, export.include_headers, export.format.delim());
            out.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

/// Plain-text rendering of a radar chart: one line per axis.
fn write_radar<W: Write>(out: &mut W, chart: &RadarChart) -> io::Result<()> {
    writeln!(out, "{}", chart.title)?;
    let width = chart.axes.iter().map(|a| a.len()).max().unwrap_or(0);
    write!(out, "{:width$}", "", width = width)?;
    for s in &chart.series {
        write!(out, "  {:>12}", s.team)?;
    }
    writeln!(out)?;
    for (i, axis) in chart.axes.iter().enumerate() {
        write!(out, "{:width$}", axis, width = width)?;
        for s in &chart.series {
            write!(out, "  {:>12}", s.values.get(i).copied().unwrap_or_default())?;
        }
        writeln!(out)?;
    }
    writeln!(out, "Radial range: {} - {}", chart.range.0, chart.range.1)
}
