use serde::{Deserialize, Serialize};

/// A prop-trading firm listing, the primary catalog entity.
///
/// Field names match the persisted snake_case columns of the `prop_firms`
/// table. Percentage fields are kept inside their documented ranges by form
/// validation, not by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropFirm {
    /// Server-assigned identifier.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub category_id: Option<String>,
    pub price: f64,
    pub original_price: f64,
    pub coupon_code: Option<String>,
    /// Average star rating, 0-5.
    #[serde(default)]
    pub review_score: f64,
    /// Editorially assigned confidence score, 0-10.
    #[serde(default)]
    pub trust_rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    pub logo_url: Option<String>,
    /// Share of profits paid out to the funded trader, 0-100.
    #[serde(default)]
    pub profit_split: f64,
    /// Payout reliability percentage, 0-100.
    #[serde(default)]
    pub payout_rate: f64,
    /// Free-text label, e.g. "$10K-$600K".
    pub funding_amount: String,
    #[serde(default)]
    pub starting_fee: f64,
    #[serde(default)]
    pub user_review_count: u32,
    pub affiliate_url: Option<String>,
    /// Server-assigned creation timestamp.
    pub created_at: String,
    pub user_id: Option<String>,
}

/// Insert payload for `prop_firms`: everything the server does not assign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFirm {
    pub name: String,
    pub brand: String,
    pub category_id: Option<String>,
    pub price: f64,
    pub original_price: f64,
    pub coupon_code: Option<String>,
    pub review_score: f64,
    pub trust_rating: f64,
    pub description: String,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub logo_url: Option<String>,
    pub profit_split: f64,
    pub payout_rate: f64,
    pub funding_amount: String,
    pub starting_fee: f64,
    pub user_review_count: u32,
    pub affiliate_url: Option<String>,
}

/// Partial update for a firm, keyed by id at the call site.
///
/// Every updatable column appears as an `Option`; absent fields are left
/// untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FirmPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pros: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_split: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_url: Option<Option<String>>,
}
