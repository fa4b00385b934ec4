use crate::domain::model::{Advocate, AdvocatesPayload, FilterOptions, EXPERIENCE_RANGES};
use crate::utils::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const TABLE_HEADERS: [&str; 7] = [
    "First Name",
    "Last Name",
    "City",
    "Degree",
    "Specialties",
    "Years of Experience",
    "Contact",
];

const EMPTY_MESSAGE: &str = "No advocates found.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

fn row(advocate: &Advocate) -> [String; 7] {
    [
        advocate.first_name.clone(),
        advocate.last_name.clone(),
        advocate.city.clone(),
        advocate.degree.clone(),
        advocate.specialties.join(", "),
        advocate.years_of_experience.to_string(),
        advocate.phone_number.to_string(),
    ]
}

pub fn render(format: OutputFormat, advocates: &[&Advocate]) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(advocates)),
        OutputFormat::Csv => render_csv(advocates),
        OutputFormat::Json => render_json(advocates),
    }
}

/// 純文字表格，欄寬依內容調整
pub fn render_table(advocates: &[&Advocate]) -> String {
    let rows: Vec<[String; 7]> = advocates.iter().map(|a| row(a)).collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &separator, &widths);

    if rows.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

pub fn render_csv(advocates: &[&Advocate]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TABLE_HEADERS)?;
    for advocate in advocates {
        writer.write_record(row(advocate))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| DirectoryError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| DirectoryError::ValidationError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// 與記錄來源相同的 `{ "data": [...] }` 格式
pub fn render_json(advocates: &[&Advocate]) -> Result<String> {
    let payload = AdvocatesPayload {
        data: advocates.iter().map(|a| (*a).clone()).collect(),
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

pub fn render_options(options: &FilterOptions) -> String {
    let mut out = String::new();
    for (label, values) in [
        ("Specialty", &options.specialties),
        ("City", &options.cities),
        ("Degree", &options.degrees),
    ] {
        let _ = writeln!(out, "{} ({}):", label, values.len());
        for value in values {
            let _ = writeln!(out, "  - {}", value);
        }
    }
    out
}

pub fn render_ranges() -> String {
    let mut out = String::from("Years of Experience:\n");
    for range in EXPERIENCE_RANGES.iter() {
        let _ = writeln!(out, "  - {}", range.label);
    }
    out
}
