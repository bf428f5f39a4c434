//! Writing processing reports in text, JSON, CSV or table form

use crate::error::ExportError;
use crate::models::InfoMessage;
use crate::report::ProcessingReport;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tabled::{settings::Style, Table, Tabled};

/// Report output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One summary sentence per training
    #[default]
    Text,
    Json,
    Csv,
    Table,
}

impl std::str::FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "table" => Ok(ReportFormat::Table),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Tabular view of a summary, values kept at three decimals
#[derive(Debug, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Training type")]
    training_type: &'static str,
    #[tabled(rename = "Duration (h)")]
    duration_h: String,
    #[tabled(rename = "Distance (km)")]
    distance_km: String,
    #[tabled(rename = "Avg speed (km/h)")]
    speed_kmh: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

impl From<&InfoMessage> for SummaryRow {
    fn from(info: &InfoMessage) -> Self {
        SummaryRow {
            training_type: info.training_type.label(),
            duration_h: format!("{:.3}", info.duration),
            distance_km: format!("{:.3}", info.distance),
            speed_kmh: format!("{:.3}", info.speed),
            calories: format!("{:.3}", info.calories),
        }
    }
}

/// Write the report to `out` in the given format.
///
/// Failed packages are only present in the JSON form; the other formats
/// list successful trainings only.
pub fn write_report<W: Write>(
    report: &ProcessingReport,
    format: ReportFormat,
    out: &mut W,
) -> Result<(), ExportError> {
    match format {
        ReportFormat::Text => write_text(report, out),
        ReportFormat::Json => write_json(report, out),
        ReportFormat::Csv => write_csv(report, out),
        ReportFormat::Table => write_table(report, out),
    }
}

fn write_text<W: Write>(report: &ProcessingReport, out: &mut W) -> Result<(), ExportError> {
    for info in report.summaries() {
        writeln!(out, "{}", info.get_message())?;
    }
    Ok(())
}

fn write_json<W: Write>(report: &ProcessingReport, out: &mut W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(report: &ProcessingReport, out: &mut W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["training_type", "duration_h", "distance_km", "speed_kmh", "calories"])?;
    for info in report.summaries() {
        let row = SummaryRow::from(info);
        let record: [&str; 5] = [
            row.training_type,
            &row.duration_h,
            &row.distance_km,
            &row.speed_kmh,
            &row.calories,
        ];
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(report: &ProcessingReport, out: &mut W) -> Result<(), ExportError> {
    let rows: Vec<SummaryRow> = report.summaries().map(SummaryRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    writeln!(out, "{}", table)?;
    Ok(())
}
