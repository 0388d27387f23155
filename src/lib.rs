//! IGC Parser Library
//!
//! A Rust library for parsing IGC flight recorder logs and converting their
//! position (B) and sensor (K) records into CSV tables.
//!
//! # Features
//!
//! - **`cli`** (default): Build the `igc2csv` command-line binary
//! - **`serde`**: Enable serialization/deserialization of types
//! - **`json`**: Enable JSON summary output in the CLI
//!
//! # Quick Start
//!
//! Inspect a file before converting it:
//! ```rust,no_run
//! use igc_parser::summarize_igc_file;
//! use std::path::Path;
//!
//! let summary = summarize_igc_file(Path::new("flight.igc")).unwrap();
//! println!("Pilot: {:?}", summary.pilot);
//! println!("{} position fixes", summary.position_fix_count);
//! ```
//!
//! Convert to CSV in memory:
//! ```rust
//! use igc_parser::convert_igc_str;
//!
//! let igc = "HFDTE010180\nB1200005213123N00019456WA0010000150\n";
//! let outcome = convert_igc_str(igc).unwrap();
//! assert_eq!(outcome.position_fix_count, 1);
//! assert_eq!(
//!     String::from_utf8(outcome.position_csv).unwrap(),
//!     "date,Latitude,Longitude,GPS Altitude,Pressure Altitude\n\
//!      1980-01-01T12:00:00Z,52.218717,-0.324267,150,100\n"
//! );
//! ```
//!
//! Write the tables next to the input file:
//! ```rust,no_run
//! use igc_parser::{convert_igc_file, export_to_csv, ExportOptions};
//! use std::path::Path;
//!
//! let input = Path::new("flight.igc");
//! let outcome = convert_igc_file(input).unwrap();
//! let report = export_to_csv(&outcome, input, &ExportOptions::default()).unwrap();
//! if let Some(path) = report.position_csv_path {
//!     println!("Exported to: {}", path.display());
//! }
//! ```
//!
//! # Public API
//!
//! ## Parsing Functions
//! - [`parse_igc_str`] / [`parse_igc_bytes`] / [`parse_igc_file`] - Full two-pass decode into an [`IgcFlight`]
//! - [`convert_igc_str`] / [`convert_igc_bytes`] / [`convert_igc_file`] - Decode and render CSV
//! - [`summarize_igc_str`] / [`summarize_igc_bytes`] / [`summarize_igc_file`] - Cheap metadata pass
//!
//! ## Building Blocks
//! - [`classify_line`] - Route a line to its record kind
//! - [`parse_flight_date`] / [`parse_header_lines`] - H record extraction
//! - [`parse_extension_layout`] - I/J record layouts
//! - [`decode_position_fix`] / [`decode_sensor_fix`] - Fixed-column decoders
//! - [`TimestampSequencer`] - Midnight rollover handling
//! - [`normalize_field`] - Absent/integer/real/literal classification
//!
//! ## Export Functions
//! - [`position_fixes_to_csv`] / [`sensor_fixes_to_csv`] / [`flight_to_csv`] - In-memory CSV
//! - [`export_to_csv`] - Write CSV files
//! - [`compute_export_paths`] - Helper for consistent path computation

// Module declarations
pub mod conversion;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use conversion::*;
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;
