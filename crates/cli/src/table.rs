//! Tabular output of an enumerated polygon sequence.
//!
//! One row per emitted polygon. JSON keeps the nested vertex and length
//! lists; CSV and Parquet go through a polars frame where those lists are
//! flattened to their display strings.

use anyhow::{Context, Result};
use clap::ValueEnum;
use gridpoly::search::PolygonSequence;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Parquet,
}

impl OutputFormat {
    /// Guess from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "parquet" | "pq" => Some(Self::Parquet),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonRow {
    pub index: u64,
    pub orbit: u64,
    /// `[row, col]` pairs in winding order.
    pub vertices: Vec<[i64; 2]>,
    pub twice_area: i64,
    pub area: f64,
    pub right_angles: u32,
    pub distinct_sides: u32,
    pub side_lengths: Vec<f64>,
}

pub fn rows(seq: &PolygonSequence) -> Vec<PolygonRow> {
    let mut out = Vec::with_capacity(seq.len());
    for (orbit, members) in seq.orbits().enumerate() {
        for p in members {
            out.push(PolygonRow {
                index: out.len() as u64,
                orbit: orbit as u64,
                vertices: p.vertices().iter().map(|v| [v.row(), v.col()]).collect(),
                twice_area: p.twice_area(),
                area: p.area(),
                right_angles: p.right_angles() as u32,
                distinct_sides: p.distinct_sides() as u32,
                side_lengths: p.side_lengths(),
            });
        }
    }
    out
}

fn vertices_cell(vs: &[[i64; 2]]) -> String {
    let parts: Vec<String> = vs.iter().map(|[r, c]| format!("({r},{c})")).collect();
    parts.join(" ")
}

fn lengths_cell(ls: &[f64]) -> String {
    let parts: Vec<String> = ls.iter().map(|l| format!("{l:.2}")).collect();
    parts.join(";")
}

pub fn to_frame(rows: &[PolygonRow]) -> Result<DataFrame> {
    let df = df!(
        "index" => rows.iter().map(|r| r.index).collect::<Vec<u64>>(),
        "orbit" => rows.iter().map(|r| r.orbit).collect::<Vec<u64>>(),
        "vertices" => rows.iter().map(|r| vertices_cell(&r.vertices)).collect::<Vec<String>>(),
        "twice_area" => rows.iter().map(|r| r.twice_area).collect::<Vec<i64>>(),
        "area" => rows.iter().map(|r| r.area).collect::<Vec<f64>>(),
        "right_angles" => rows.iter().map(|r| r.right_angles).collect::<Vec<u32>>(),
        "distinct_sides" => rows.iter().map(|r| r.distinct_sides).collect::<Vec<u32>>(),
        "side_lengths" => rows.iter().map(|r| lengths_cell(&r.side_lengths)).collect::<Vec<String>>(),
    )?;
    Ok(df)
}

/// Write `rows` to `path`, creating parent directories as needed.
pub fn write(rows: &[PolygonRow], path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        OutputFormat::Json => {
            fs::write(path, serde_json::to_vec_pretty(rows)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        OutputFormat::Csv => {
            let mut df = to_frame(rows)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing csv {}", path.display()))?;
        }
        OutputFormat::Parquet => {
            let mut df = to_frame(rows)?;
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing parquet {}", path.display()))?;
        }
    }
    Ok(())
}
