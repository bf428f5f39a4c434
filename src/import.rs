//! Loading sensor packages from JSON or CSV files
//!
//! JSON files hold an array of `{"code": "RUN", "data": [15000, 1, 75]}`
//! objects. CSV files hold one package per row: the code followed by its
//! values, rows may have different lengths.

use crate::error::ImportError;
use crate::models::WorkoutPackage;
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use tracing::info;

/// Supported package file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    Json,
    Csv,
}

impl PackageFormat {
    /// Detect the format from the file extension
    pub fn detect(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(PackageFormat::Json),
            "csv" | "txt" => Ok(PackageFormat::Csv),
            _ => Err(ImportError::UnsupportedFormat {
                format: if extension.is_empty() {
                    "<none>".to_string()
                } else {
                    extension
                },
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PackageFormat::Json => "JSON",
            PackageFormat::Csv => "CSV",
        }
    }
}

/// Import packages from a file, auto-detecting the format
pub fn import_file(path: &Path) -> Result<Vec<WorkoutPackage>, ImportError> {
    let format = PackageFormat::detect(path)?;
    let content = fs::read_to_string(path).map_err(|e| ImportError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let packages = match format {
        PackageFormat::Json => parse_json(&content)?,
        PackageFormat::Csv => parse_csv(&content)?,
    };

    info!(
        file = %path.display(),
        format = format.name(),
        packages = packages.len(),
        "packages imported"
    );
    Ok(packages)
}

/// Parse a JSON array of packages
pub fn parse_json(content: &str) -> Result<Vec<WorkoutPackage>, ImportError> {
    serde_json::from_str(content).map_err(|e| ImportError::ParseError {
        format: "JSON".to_string(),
        location: format!("line {}, column {}", e.line(), e.column()),
        reason: e.to_string(),
    })
}

/// Parse CSV rows of `code,value,value,...`.
///
/// Blank lines and lines starting with `#` are skipped, as is a leading
/// header row whose first cell is `code`. Trailing empty cells (from
/// padding rows to a common width) are dropped; an empty cell between
/// values is an error.
pub fn parse_csv(content: &str) -> Result<Vec<WorkoutPackage>, ImportError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut packages = Vec::new();

    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(row as u64 + 1);
            csv_error(line, e.to_string())
        })?;
        let line = record
            .position()
            .map(|p| record_line(content, p))
            .unwrap_or(row as u64 + 1);

        let Some(code) = record.get(0) else {
            continue;
        };
        if code.is_empty() && record.len() == 1 {
            continue;
        }
        if row == 0 && code.eq_ignore_ascii_case("code") {
            continue;
        }

        let mut cells: Vec<&str> = record.iter().skip(1).collect();
        while cells.last().is_some_and(|cell| cell.is_empty()) {
            cells.pop();
        }

        let data = cells
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                if cell.is_empty() {
                    return Err(csv_error(line, format!("missing value in column {}", column + 2)));
                }
                cell.parse::<f64>()
                    .map_err(|e| csv_error(line, format!("'{}': {}", cell, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        packages.push(WorkoutPackage::new(code, data));
    }

    Ok(packages)
}

/// File line a record starts on.
///
/// The reader stamps a record with the position where it began scanning,
/// which is before any blank or comment lines it skipped on the way.
fn record_line(content: &str, position: &csv::Position) -> u64 {
    let skipped = content
        .get(position.byte() as usize..)
        .unwrap_or_default()
        .lines()
        .take_while(|line| line.is_empty() || line.starts_with('#'))
        .count();
    position.line() + skipped as u64
}

fn csv_error(line: u64, reason: String) -> ImportError {
    ImportError::ParseError {
        format: "CSV".to_string(),
        location: format!("line {}", line),
        reason,
    }
}
