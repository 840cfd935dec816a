use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::proposal::VendorResponse;

/// Vendor as embedded in an exported response record.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorRecord {
    pub name: String,
    pub email: String,
}

/// One row of a response export: a vendor's reply with its vendor included.
///
/// Unknown fields are ignored so exports can carry extra columns.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub rfp_id: u64,
    pub vendor_id: u64,
    pub vendor: VendorRecord,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub delivery_days: Option<f64>,
    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default)]
    pub notes: Option<String>, // not scored
}

impl From<ResponseRecord> for VendorResponse {
    fn from(record: ResponseRecord) -> Self {
        VendorResponse {
            vendor_id: record.vendor_id,
            vendor_name: record.vendor.name,
            vendor_email: record.vendor.email,
            price: record.price,
            delivery_days: record.delivery_days,
            warranty: record.warranty,
        }
    }
}

/// Load response records from a JSON export (an array of records).
pub fn load_records(path: &Path) -> Result<Vec<ResponseRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open response file at {}", path.display()))?;

    let records: Vec<ResponseRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse response file: invalid JSON in {}", path.display()))?;

    Ok(records)
}

/// Load the responses to score from a JSON export.
///
/// With `rfp_id`, only that request's responses are kept. Without it, the
/// whole file is taken as one request's responses.
pub fn load_responses(path: &Path, rfp_id: Option<u64>) -> Result<Vec<VendorResponse>> {
    let records = load_records(path)?;
    let total = records.len();

    let responses: Vec<VendorResponse> = records
        .into_iter()
        .filter(|record| rfp_id.is_none_or(|id| record.rfp_id == id))
        .map(VendorResponse::from)
        .collect();

    tracing::debug!(
        path = %path.display(),
        rfp_id = ?rfp_id,
        total,
        kept = responses.len(),
        "Loaded vendor responses"
    );

    Ok(responses)
}
