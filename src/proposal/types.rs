use serde::{Deserialize, Serialize};

/// A single vendor's structured reply to one request.
///
/// Missing fields are `None`: "no quote given" is not the same as a quote of zero.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorResponse {
    pub vendor_id: u64,
    pub vendor_name: String,
    pub vendor_email: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub delivery_days: Option<f64>,
    #[serde(default)]
    pub warranty: Option<String>, // raw text, e.g. "2 years parts and labor"
}

impl VendorResponse {
    /// Build a response with no price, delivery or warranty.
    pub fn new(vendor_id: u64, vendor_name: impl Into<String>, vendor_email: impl Into<String>) -> Self {
        Self {
            vendor_id,
            vendor_name: vendor_name.into(),
            vendor_email: vendor_email.into(),
            price: None,
            delivery_days: None,
            warranty: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_delivery_days(mut self, days: f64) -> Self {
        self.delivery_days = Some(days);
        self
    }

    pub fn with_warranty(mut self, warranty: impl Into<String>) -> Self {
        self.warranty = Some(warranty.into());
        self
    }
}

/// One ranked row of the comparison.
///
/// Field names on the wire match what the scores page binds to, so `vendor_name`
/// is serialized as `vendor`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    #[serde(rename = "vendor", alias = "vendorName")]
    pub vendor_name: String,
    pub vendor_email: String,
    pub price: Option<f64>,
    pub delivery_days: Option<f64>,
    pub warranty: Option<String>,
    pub price_score: f64,
    pub delivery_score: f64,
    pub warranty_score: f64,
    pub total_score: f64,
}

/// How much one criterion added to a total.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub label: &'static str, // "Price", "Delivery", "Warranty"
    pub sub_score: f64,
    pub weight: f64,
    pub points: f64, // sub_score * weight
}

impl ScoredResult {
    /// Break the total back down into weighted per-criterion points.
    pub fn contributions(&self, weights: &crate::scoring::ScoringWeights) -> [Contribution; 3] {
        let make = |label, sub_score: f64, weight: f64| Contribution {
            label,
            sub_score,
            weight,
            points: sub_score * weight,
        };
        [
            make("Price", self.price_score, weights.price),
            make("Delivery", self.delivery_score, weights.delivery),
            make("Warranty", self.warranty_score, weights.warranty),
        ]
    }
}
