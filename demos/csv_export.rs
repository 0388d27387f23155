//! CSV Export Example
//!
//! Demonstrates how to convert an IGC file and write its position table
//! (`<name>.csv`) and sensor table (`<name>.sensors.csv`) to disk.
//!
//! Files without an `HFDTE` date cannot be converted and are reported as errors.

use igc_parser::{convert_igc_file, export_to_csv, summarize_igc_file, ExportOptions};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Get input file from command line or show usage
    let input_file = std::env::args().nth(1).unwrap_or_else(|| {
        println!("Usage: csv_export <input.igc> [output_dir]");
        println!("Example: csv_export flight.igc ./output");
        std::process::exit(1);
    });

    // Get optional output directory from command line
    let output_dir = std::env::args().nth(2);

    let export_opts = ExportOptions {
        output_dir,
        ..Default::default()
    };

    let input_path = Path::new(&input_file);

    let summary = summarize_igc_file(input_path)?;
    println!("\nFlight Information:");
    if let Some(ref pilot) = summary.pilot {
        println!("  Pilot: {pilot}");
    }
    if let Some(ref glider) = summary.glider_type {
        println!("  Glider: {glider}");
    }
    if let Some(time) = summary.display_time() {
        println!("  First fix: {}", time.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!("  Total fixes: {}", summary.total_fix_count());

    println!("\nParsing: {input_file}");
    let outcome = convert_igc_file(input_path)?;

    println!("Exporting to CSV...");
    let report = export_to_csv(&outcome, input_path, &export_opts)?;
    if let Some(path) = report.position_csv_path {
        println!("✓ {} position fixes -> {}", outcome.position_fix_count, path.display());
    }
    if let Some(path) = report.sensor_csv_path {
        println!("✓ {} sensor fixes -> {}", outcome.sensor_fix_count, path.display());
    }
    if report.skipped {
        println!("No position fixes decoded, nothing written");
    }

    Ok(())
}
