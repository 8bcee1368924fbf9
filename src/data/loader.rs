use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::model::SpectralSensitivityTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Text formats a table can be exchanged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// Pick a format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            other => bail!("Unsupported extension: .{other}"),
        }
    }
}

/// Parse a table from in-memory text. Dispatch by format.
///
/// `name` is used unless the document names the table itself (JSON only).
pub fn parse_str(text: &str, format: Format, name: &str) -> Result<SpectralSensitivityTable> {
    let table = match format {
        Format::Json => parse_json(text, name),
        Format::Csv => parse_csv(text, name),
    }?;

    log::info!(
        "Loaded '{}': {} samples, {} channels",
        table.name(),
        table.len(),
        table.channel_count()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "name": "ACES RICD",
///   "labels": ["red", "green", "blue"],
///   "samples": [
///     { "wavelength": 360.0, "values": [1.2e-6, 0.0, 5.7e-6] },
///     ...
///   ]
/// }
/// ```
///
/// `name` and `labels` are optional.
#[derive(Debug, Serialize, Deserialize)]
struct TableDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<String>>,
    samples: Vec<SampleRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SampleRecord {
    wavelength: f64,
    values: Vec<f64>,
}

fn parse_json(text: &str, name: &str) -> Result<SpectralSensitivityTable> {
    let doc: TableDocument = serde_json::from_str(text).context("parsing JSON")?;
    let name = doc.name.unwrap_or_else(|| name.to_string());

    let samples = doc.samples.into_iter().map(|s| (s.wavelength, s.values));
    let table = SpectralSensitivityTable::new(name, samples).context("building table from JSON")?;

    match doc.labels {
        Some(labels) => table.with_labels(labels).context("applying JSON labels"),
        None => Ok(table),
    }
}

/// Serialise a table into the JSON schema accepted by [`parse_str`].
pub fn to_json(table: &SpectralSensitivityTable) -> Result<String> {
    let doc = TableDocument {
        name: Some(table.name().to_string()),
        labels: Some(table.labels().to_vec()),
        samples: table
            .rows()
            .map(|(wavelength, values)| SampleRecord {
                wavelength,
                values: values.to_vec(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc).context("serialising JSON")
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// CSV layout: a header row, the wavelength in the first column and one
/// column per channel. Channel column names become the labels:
///
/// ```text
/// wavelength,red,green,blue
/// 360,0.0000012,0,0.0000057
/// ```
fn parse_csv(text: &str, name: &str) -> Result<SpectralSensitivityTable> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < 2 {
        bail!(
            "CSV needs a wavelength column and at least one channel, got {} columns",
            headers.len()
        );
    }

    let mut samples = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut fields = record
            .iter()
            .enumerate()
            .map(|(col, field)| parse_float(field, row_no, &headers[col]));

        let wavelength = match fields.next() {
            Some(w) => w?,
            None => bail!("CSV row {row_no} is empty"),
        };
        let values = fields.collect::<Result<Vec<f64>>>()?;
        samples.push((wavelength, values));
    }

    SpectralSensitivityTable::new(name, samples)
        .and_then(|table| table.with_labels(headers.into_iter().skip(1)))
        .context("building table from CSV")
}

fn parse_float(field: &str, row: usize, col: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Row {row}, column '{col}': '{field}' is not a number"))
}

/// Serialise a table as CSV with a `wavelength` column followed by one
/// column per label.
pub fn to_csv(table: &SpectralSensitivityTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["wavelength".to_string()];
    header.extend(table.labels().iter().cloned());
    writer.write_record(&header).context("writing CSV header")?;

    for (wavelength, values) in table.rows() {
        let record = std::iter::once(wavelength)
            .chain(values.iter().copied())
            .map(|v| v.to_string());
        writer
            .write_record(record)
            .with_context(|| format!("writing CSV row at {wavelength} nm"))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}
