use thiserror::Error;
use tracing::{debug, trace};

use super::config::ScoringWeights;
use super::warranty::extract_warranty_years;
use crate::proposal::{ScoredResult, VendorResponse};

/// Errors raised by the scoring engine.
///
/// Irregular field values never error; they score 0 for that criterion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Nothing to rank: no vendor has replied to the request yet.
    #[error("No vendor responses found to score.")]
    EmptyInput,
}

/// Best value seen for each criterion across one request's responses.
#[derive(Debug, Clone, Copy)]
struct ReferenceValues {
    min_price: Option<f64>,
    min_delivery: Option<f64>,
    max_warranty_years: u64,
}

impl ReferenceValues {
    fn from_responses(responses: &[VendorResponse]) -> Self {
        Self {
            min_price: min_nonzero(responses.iter().filter_map(|r| r.price)),
            min_delivery: min_nonzero(responses.iter().filter_map(|r| r.delivery_days)),
            max_warranty_years: responses
                .iter()
                .map(|r| extract_warranty_years(r.warranty.as_deref()))
                .max()
                .unwrap_or(0),
        }
    }
}

/// Score and rank responses with the default weights (price 50%, delivery 30%, warranty 20%).
pub fn score(responses: &[VendorResponse]) -> Result<Vec<ScoredResult>, ScoringError> {
    score_with_weights(responses, &ScoringWeights::default())
}

/// Score and rank one request's responses, best first.
///
/// Each criterion is normalized against the best response: the lowest price
/// and the shortest delivery get 100 and the rest scale proportionally; the
/// longest warranty gets 100 and the rest scale linearly. A missing, zero or
/// negative value scores 0 for that criterion; a negative quote still counts
/// as the best price, so every positive quote clamps to 0 against it. All four
/// scores are rounded to two decimals. Ties on the total keep input order.
///
/// `weights` are expected to be validated (see [`ScoringWeights::validate`]).
/// Unvalidated weights cannot push the total outside 0..=100: it is clamped,
/// and a NaN total scores 0.
///
/// # Errors
///
/// Returns [`ScoringError::EmptyInput`] if `responses` is empty.
pub fn score_with_weights(
    responses: &[VendorResponse],
    weights: &ScoringWeights,
) -> Result<Vec<ScoredResult>, ScoringError> {
    if responses.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let reference = ReferenceValues::from_responses(responses);
    debug!(
        responses = responses.len(),
        min_price = ?reference.min_price,
        min_delivery = ?reference.min_delivery,
        max_warranty_years = reference.max_warranty_years,
        "Computed reference values"
    );

    let mut results: Vec<ScoredResult> = responses
        .iter()
        .map(|response| score_one(response, &reference, weights))
        .collect();

    // Stable sort: equal totals keep input order
    results.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(results)
}

fn score_one(
    response: &VendorResponse,
    reference: &ReferenceValues,
    weights: &ScoringWeights,
) -> ScoredResult {
    // Lower is better for price and delivery
    let price_score = ratio_score(reference.min_price, response.price);
    let delivery_score = ratio_score(reference.min_delivery, response.delivery_days);

    // Longer is better for warranty; years never exceed the max, so no clamp
    let warranty_score = if reference.max_warranty_years == 0 {
        0.0
    } else {
        let years = extract_warranty_years(response.warranty.as_deref());
        years as f64 / reference.max_warranty_years as f64 * 100.0
    };

    let weighted = price_score * weights.price
        + delivery_score * weights.delivery
        + warranty_score * weights.warranty;
    let total = if weighted.is_nan() {
        0.0
    } else {
        weighted.clamp(0.0, 100.0)
    };

    trace!(
        vendor = %response.vendor_name,
        price_score,
        delivery_score,
        warranty_score,
        total,
        "Scored response"
    );

    ScoredResult {
        vendor_name: response.vendor_name.clone(),
        vendor_email: response.vendor_email.clone(),
        price: response.price,
        delivery_days: response.delivery_days,
        warranty: response.warranty.clone(),
        price_score: round2(price_score),
        delivery_score: round2(delivery_score),
        warranty_score: round2(warranty_score),
        total_score: round2(total),
    }
}

/// `best / value * 100`, clamped to 0..=100. Missing or non-positive values score 0.
fn ratio_score(best: Option<f64>, value: Option<f64>) -> f64 {
    match (best, value) {
        (Some(best), Some(value)) if value > 0.0 => (best / value * 100.0).clamp(0.0, 100.0),
        _ => 0.0,
    }
}

/// Smallest finite non-zero value, if any. Negative values take part.
fn min_nonzero(values: impl Iterator<Item = f64>) -> Option<f64> {
    values
        .filter(|v| v.is_finite() && *v != 0.0)
        .fold(None, |min, v| match min {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
}

/// Round half away from zero to two decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
