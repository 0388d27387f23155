//! CLI binary for IGC Parser
//!
//! This provides the command-line interface for the IGC parser library.

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use glob::glob;
use igc_parser::{
    convert_igc_bytes, export_to_csv, summarize_igc_bytes, ExportOptions, FlightSummary, IgcError,
};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

fn build_command() -> Command {
    let command = Command::new("igc2csv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read IGC flight recorder logs and convert position and sensor fixes to CSV.")
        .arg(
            Arg::new("files")
                .help("IGC files to convert (.igc extension, case-insensitive, supports globbing)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed parsing information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for CSV output files (default: same as input file)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("no-sensors")
                .long("no-sensors")
                .help("Do not write the K-record sensor CSV (<name>.sensors.csv)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .help("Write CSV files even when no position fix could be decoded")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .help("Only print the flight summary, do not convert")
                .action(clap::ArgAction::SetTrue),
        );

    #[cfg(feature = "json")]
    let command = command.arg(
        Arg::new("json")
            .long("json")
            .help("Print the flight summary as JSON")
            .action(clap::ArgAction::SetTrue),
    );

    command
}

fn is_igc_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("igc"))
        .unwrap_or(false)
}

/// Expand globs and keep existing `.igc` files
fn collect_input_paths(patterns: &[&String]) -> Vec<PathBuf> {
    let mut valid_paths = Vec::new();

    for pattern in patterns {
        debug!("Processing pattern: {pattern}");

        let paths: Vec<PathBuf> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                    Ok(paths) => {
                        debug!("Glob pattern '{pattern}' matched {} files", paths.len());
                        paths
                    }
                    Err(e) => {
                        error!("Error expanding glob pattern '{pattern}': {e}");
                        continue;
                    }
                },
                Err(e) => {
                    error!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![PathBuf::from(pattern.as_str())]
        };

        for path in paths {
            if !path.exists() {
                warn!("File does not exist: {path:?}");
                continue;
            }
            if !is_igc_path(&path) {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
                warn!("Skipping file with unsupported extension '{ext}': {path:?}");
                continue;
            }
            valid_paths.push(path);
        }
    }

    valid_paths
}

fn print_summary(summary: &FlightSummary) {
    let show = |label: &str, value: &Option<String>| {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    };

    show("Pilot", &summary.pilot);
    show("Glider type", &summary.glider_type);
    show("Glider ID", &summary.glider_id);
    show("Competition ID", &summary.competition_id);
    show("Competition class", &summary.competition_class);
    match summary.display_time() {
        Some(time) => println!("  Date: {}", time.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("  Date: (missing)"),
    }
    println!("  Position fixes: {}", summary.position_fix_count);
    println!("  Sensor fixes: {}", summary.sensor_fix_count);
    println!(
        "  Extensions: {}",
        if summary.has_extensions { "yes" } else { "no" }
    );
}

#[cfg(feature = "json")]
fn print_summary_json(summary: &FlightSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn process_file(path: &Path, matches: &ArgMatches, export_options: &ExportOptions) -> Result<()> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read IGC file: {path:?}"))?;

    let summary = summarize_igc_bytes(&data);

    #[cfg(feature = "json")]
    let printed_json = if matches.get_flag("json") {
        print_summary_json(&summary)?;
        true
    } else {
        false
    };
    #[cfg(not(feature = "json"))]
    let printed_json = false;

    if !printed_json {
        print_summary(&summary);
    }

    if matches.get_flag("info") {
        return Ok(());
    }

    let outcome = match convert_igc_bytes(&data) {
        Ok(outcome) => outcome,
        Err(IgcError::NoDateFound) => {
            anyhow::bail!("no HFDTE flight date in {path:?}, nothing converted")
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to convert {path:?}")),
    };

    if outcome.position_fix_count == 0 {
        warn!("{path:?} converted with zero position fixes");
    }

    let report = export_to_csv(&outcome, path, export_options)
        .with_context(|| format!("Failed to write CSV for {path:?}"))?;

    if let Some(ref csv_path) = report.position_csv_path {
        println!(
            "Exported {} position fixes to: {}",
            outcome.position_fix_count,
            csv_path.display()
        );
    }
    if let Some(ref csv_path) = report.sensor_csv_path {
        println!(
            "Exported {} sensor fixes to: {}",
            outcome.sensor_fix_count,
            csv_path.display()
        );
    }
    if report.skipped {
        println!("Skipped export (use --force to write empty tables)");
    }

    Ok(())
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if debug { "debug" } else { "info" }),
    )
    .init();
    debug!("igc2csv {} ({})", env!("CARGO_PKG_VERSION"), GIT_SHA);

    let export_options = ExportOptions {
        output_dir: matches.get_one::<String>("output-dir").cloned(),
        sensors: !matches.get_flag("no-sensors"),
        force_export: matches.get_flag("force"),
    };

    let file_patterns: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|values| values.collect())
        .unwrap_or_default();
    debug!("Input patterns: {file_patterns:?}");

    let valid_paths = collect_input_paths(&file_patterns);
    if valid_paths.is_empty() {
        error!("No valid files found to process. Supported extension: .igc (case-insensitive)");
        error!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    let mut processed_files = 0;
    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match process_file(path, &matches, &export_options) {
            Ok(()) => processed_files += 1,
            Err(e) => {
                error!("Error processing {filename}: {e:#}");
                info!("Continuing with next file...");
            }
        }
    }

    if processed_files == 0 {
        error!(
            "No files were successfully processed out of {} files found.",
            valid_paths.len()
        );
        std::process::exit(1);
    }

    Ok(())
}
