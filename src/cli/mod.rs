//! salestat CLI Module
//!
//! Command-line interface for inspecting, encoding, and reporting on
//! house-sale CSV data.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::*;
use serde::Deserialize;

use crate::cef::cef;
use crate::encode::{encode, EncodeOptions, Encoded};
use crate::error::Result;
use crate::housing;
use crate::ingest::{ingest, Table};
use crate::report::{CefPlot, Histogram};
use crate::stats::{log1p_column, transform_skewed, SKEW_THRESHOLD};
use crate::summary::summarize;

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString {
    s.truecolor(120, 120, 120)
}

fn ok(s: &str) -> ColoredString {
    s.truecolor(100, 210, 120)
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(48)));
}

fn kv(key: &str, value: &str) {
    println!("  {} {}", dim(key), value.white());
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "salestat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "House-sale tabular analysis: encoding, CEF and distribution reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show per-column cardinality and mode for a dataset
    Info {
        /// Input CSV file
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Build the design matrix and apply the skew transform policy
    Encode {
        /// Input CSV file
        #[arg(short, long)]
        data: PathBuf,

        /// JSON schema file overriding the built-in house-sale hints
        #[arg(long)]
        hints: Option<PathBuf>,

        /// Write the encoded matrix as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Conditional expectation of the target over one column
    Cef {
        /// Input CSV file
        #[arg(short, long)]
        data: PathBuf,

        /// Column to condition on
        #[arg(short, long)]
        column: String,

        /// Write plot data as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write CEF and target-histogram plot data for a dataset
    Report {
        /// Input CSV file
        #[arg(short, long)]
        data: PathBuf,

        /// Column to condition the CEF on
        #[arg(short, long)]
        column: String,

        /// Output directory for the JSON artifacts
        #[arg(short, long, default_value = "report")]
        out_dir: PathBuf,

        /// Number of histogram bins
        #[arg(long, default_value_t = Histogram::DEFAULT_BINS)]
        bins: usize,
    },
}

// ─── Schema file ───────────────────────────────────────────────────────────────

/// External schema: categorical column names plus columns to ignore.
///
/// This is the user-facing form of the position-aligned type-hint array;
/// the alignment to the actual header happens after ingestion.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    categorical: Vec<String>,
    #[serde(default)]
    ignored: Vec<String>,
}

fn load_schema(path: Option<&Path>, table: &Table) -> Result<(Vec<bool>, EncodeOptions)> {
    match path {
        Some(path) => {
            let schema: SchemaFile = serde_json::from_reader(File::open(path)?)?;
            let hints = table
                .header
                .iter()
                .map(|name| schema.categorical.iter().any(|c| c == name))
                .collect();
            let options = housing::options().with_ignored_columns(schema.ignored);
            Ok((hints, options))
        }
        None => Ok((housing::hints_for(&table.header), housing::options())),
    }
}

fn encode_file(data: &Path, hints_path: Option<&Path>) -> Result<(Table, Encoded, EncodeOptions)> {
    let table = ingest(File::open(data)?)?;
    let (hints, options) = load_schema(hints_path, &table)?;
    let encoded = encode(&table, &hints, &options)?;
    Ok((table, encoded, options))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_info(data: &Path) -> Result<()> {
    let table = ingest(File::open(data)?)?;

    section(&data.display().to_string());
    kv("rows", &table.n_rows().to_string());
    kv("columns", &table.n_cols().to_string());

    section("cardinality / mode");
    for summary in summarize(&table) {
        println!(
            "  {:<16} {:>6}   {}",
            summary.column,
            summary.cardinality,
            dim(&summary.mode)
        );
    }

    Ok(())
}

pub fn cmd_encode(data: &Path, hints: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let (_, mut encoded, _) = encode_file(data, hints)?;

    let transformed = transform_skewed(&mut encoded.xs, &encoded.hints, SKEW_THRESHOLD);

    section("design matrix");
    kv("rows", &encoded.n_rows().to_string());
    kv("columns", &encoded.n_cols().to_string());
    kv("log1p-transformed", &transformed.len().to_string());

    if let Some(path) = output {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&encoded.header)?;
        for row in encoded.xs.rows() {
            writer.write_record(row.iter().map(|v| v.to_string()))?;
        }
        writer.flush()?;
        println!("  {} wrote {}", ok("✓"), path.display());
    }

    Ok(())
}

pub fn cmd_cef(data: &Path, column: &str, output: Option<&Path>) -> Result<()> {
    let (table, encoded, options) = encode_file(data, None)?;
    let position = table.require_column(column)?;

    let means = cef(&encoded.ys.to_vec(), position, &table.index);
    let plot = cef_plot(&means, column, &options.target_column);

    section(&format!("CEF for {column}"));
    for (category, mean) in &means {
        println!("  {:<16} {:>14.2}", category, mean);
    }

    if let Some(path) = output {
        write_json(path, &plot)?;
        println!("  {} wrote {}", ok("✓"), path.display());
    }

    Ok(())
}

pub fn cmd_report(data: &Path, column: &str, out_dir: &Path, bins: usize) -> Result<()> {
    let (table, mut encoded, options) = encode_file(data, None)?;
    let position = table.require_column(column)?;

    std::fs::create_dir_all(out_dir)?;

    let means = cef(&encoded.ys.to_vec(), position, &table.index);
    let plot = cef_plot(&means, column, &options.target_column);
    write_json(&out_dir.join("cef.json"), &plot)?;

    let mut raw = Histogram::new(&encoded.ys.to_vec(), bins);
    raw.normalize(1.0);
    write_json(&out_dir.join("hist.json"), &raw)?;

    log1p_column(encoded.ys.view_mut());
    let mut processed = Histogram::new(&encoded.ys.to_vec(), bins);
    processed.normalize(1.0);
    write_json(&out_dir.join("hist_log1p.json"), &processed)?;

    section("report");
    kv("out dir", &out_dir.display().to_string());
    println!("  {} cef.json, hist.json, hist_log1p.json", ok("✓"));

    Ok(())
}

fn cef_plot(means: &BTreeMap<String, f64>, column: &str, target: &str) -> CefPlot {
    CefPlot::from_cef(means)
        .with_title(format!("CEF for {column}"))
        .with_labels(column, format!("conditional mean {target}"))
}
