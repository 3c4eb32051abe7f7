//! Form drafts and their field-keyed validation.
//!
//! Drafts hold whatever the inputs currently contain; `validate_firm` /
//! `validate_review` return one message per failing field and submission is
//! blocked while the map is non-empty. The maps are `BTreeMap`s so error
//! rendering and tests see a deterministic order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::firm::{FirmPatch, NewFirm, PropFirm};
use crate::model::review::NewReview;

/// Field name to error message, for inline display next to each input.
pub type ValidationErrors = BTreeMap<&'static str, String>;

/// Editable state of the admin firm form.
///
/// Starts at `Default` for a new record, or seeded via [`FirmDraft::from_firm`]
/// when an existing record is being edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirmDraft {
    pub name: String,
    pub brand: String,
    pub category_id: Option<String>,
    pub price: f64,
    pub original_price: f64,
    pub coupon_code: String,
    pub review_score: f64,
    pub trust_rating: f64,
    pub description: String,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub logo_url: String,
    pub profit_split: f64,
    pub payout_rate: f64,
    pub funding_amount: String,
    pub starting_fee: f64,
    pub user_review_count: u32,
    pub affiliate_url: String,
}

impl FirmDraft {
    pub fn from_firm(firm: &PropFirm) -> Self {
        Self {
            name: firm.name.clone(),
            brand: firm.brand.clone(),
            category_id: firm.category_id.clone(),
            price: firm.price,
            original_price: firm.original_price,
            coupon_code: firm.coupon_code.clone().unwrap_or_default(),
            review_score: firm.review_score,
            trust_rating: firm.trust_rating,
            description: firm.description.clone(),
            features: firm.features.clone(),
            pros: firm.pros.clone(),
            cons: firm.cons.clone(),
            logo_url: firm.logo_url.clone().unwrap_or_default(),
            profit_split: firm.profit_split,
            payout_rate: firm.payout_rate,
            funding_amount: firm.funding_amount.clone(),
            starting_fee: firm.starting_fee,
            user_review_count: firm.user_review_count,
            affiliate_url: firm.affiliate_url.clone().unwrap_or_default(),
        }
    }

    /// Insert payload for a validated draft. Empty optional strings become
    /// `None` rather than empty columns.
    pub fn to_new_firm(&self) -> NewFirm {
        NewFirm {
            name: self.name.trim().to_string(),
            brand: self.brand.trim().to_string(),
            category_id: self.category_id.clone(),
            price: self.price,
            original_price: self.original_price,
            coupon_code: none_if_empty(&self.coupon_code),
            review_score: self.review_score,
            trust_rating: self.trust_rating,
            description: self.description.clone(),
            features: self.features.clone(),
            pros: self.pros.clone(),
            cons: self.cons.clone(),
            logo_url: none_if_empty(&self.logo_url),
            profit_split: self.profit_split,
            payout_rate: self.payout_rate,
            funding_amount: self.funding_amount.trim().to_string(),
            starting_fee: self.starting_fee,
            user_review_count: self.user_review_count,
            affiliate_url: none_if_empty(&self.affiliate_url),
        }
    }

    /// Full-field patch for the edit form (every column explicitly set).
    pub fn to_patch(&self) -> FirmPatch {
        FirmPatch {
            name: Some(self.name.trim().to_string()),
            brand: Some(self.brand.trim().to_string()),
            category_id: Some(self.category_id.clone()),
            price: Some(self.price),
            original_price: Some(self.original_price),
            coupon_code: Some(none_if_empty(&self.coupon_code)),
            review_score: Some(self.review_score),
            trust_rating: Some(self.trust_rating),
            description: Some(self.description.clone()),
            features: Some(self.features.clone()),
            pros: Some(self.pros.clone()),
            cons: Some(self.cons.clone()),
            logo_url: Some(none_if_empty(&self.logo_url)),
            profit_split: Some(self.profit_split),
            payout_rate: Some(self.payout_rate),
            funding_amount: Some(self.funding_amount.trim().to_string()),
            starting_fee: Some(self.starting_fee),
            user_review_count: Some(self.user_review_count),
            affiliate_url: Some(none_if_empty(&self.affiliate_url)),
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn validate_firm(draft: &FirmDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert("name", "Firm name is required".to_string());
    }
    if draft.funding_amount.trim().is_empty() {
        errors.insert("funding_amount", "Funding amount is required".to_string());
    }
    if draft.price < 0.0 {
        errors.insert("price", "Price must be 0 or greater".to_string());
    }
    if draft.original_price < 0.0 {
        errors.insert(
            "original_price",
            "Original price must be 0 or greater".to_string(),
        );
    }
    if draft.profit_split < 0.0 || draft.profit_split > 100.0 {
        errors.insert(
            "profit_split",
            "Profit split must be between 0 and 100".to_string(),
        );
    }
    if draft.payout_rate < 0.0 || draft.payout_rate > 100.0 {
        errors.insert(
            "payout_rate",
            "Payout rate must be between 0 and 100".to_string(),
        );
    }
    if draft.review_score < 0.0 || draft.review_score > 5.0 {
        errors.insert(
            "review_score",
            "Review score must be between 0 and 5".to_string(),
        );
    }
    if draft.trust_rating < 0.0 || draft.trust_rating > 10.0 {
        errors.insert(
            "trust_rating",
            "Trust rating must be between 0 and 10".to_string(),
        );
    }
    if draft.starting_fee < 0.0 {
        errors.insert(
            "starting_fee",
            "Starting fee must be 0 or greater".to_string(),
        );
    }
    if !draft.affiliate_url.is_empty() && !draft.affiliate_url.starts_with("http") {
        errors.insert(
            "affiliate_url",
            "Affiliate URL must start with http:// or https://".to_string(),
        );
    }
    if !draft.logo_url.is_empty()
        && !draft.logo_url.starts_with('/')
        && !draft.logo_url.starts_with("http")
    {
        errors.insert("logo_url", "Logo URL must be a valid path or URL".to_string());
    }

    errors
}

/// Editable state of the public review form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub user_name: String,
    pub rating: u8,
    pub title: String,
    pub content: String,
}

impl ReviewDraft {
    pub fn to_new_review(&self, firm_id: &str, user_id: Option<String>) -> NewReview {
        NewReview {
            firm_id: firm_id.to_string(),
            user_name: self.user_name.trim().to_string(),
            rating: self.rating,
            title: none_if_empty(&self.title),
            content: self.content.trim().to_string(),
            user_id,
        }
    }
}

pub fn validate_review(draft: &ReviewDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name = draft.user_name.trim();
    if name.is_empty() {
        errors.insert("user_name", "Name is required".to_string());
    } else if name.chars().count() > 50 {
        errors.insert("user_name", "Name must be under 50 characters".to_string());
    }

    if draft.rating == 0 {
        errors.insert("rating", "Rating is required".to_string());
    } else if draft.rating > 5 {
        errors.insert("rating", "Rating must be between 1 and 5".to_string());
    }

    if draft.title.chars().count() > 100 {
        errors.insert("title", "Title must be under 100 characters".to_string());
    }

    let content = draft.content.trim();
    if content.chars().count() < 10 {
        errors.insert(
            "content",
            "Review must be at least 10 characters".to_string(),
        );
    } else if content.chars().count() > 1000 {
        errors.insert("content", "Review must be under 1000 characters".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_firm_draft() -> FirmDraft {
        FirmDraft {
            name: "FTMO".to_string(),
            brand: "FTMO".to_string(),
            price: 155.0,
            original_price: 199.0,
            review_score: 4.8,
            trust_rating: 9.0,
            profit_split: 90.0,
            payout_rate: 95.0,
            funding_amount: "$10K-$400K".to_string(),
            affiliate_url: "https://ftmo.com".to_string(),
            logo_url: "/logos/ftmo.png".to_string(),
            ..FirmDraft::default()
        }
    }

    #[test]
    fn valid_firm_draft_yields_empty_error_map() {
        assert!(validate_firm(&valid_firm_draft()).is_empty());
    }

    #[test]
    fn missing_name_and_funding_amount_are_the_only_errors() {
        let draft = FirmDraft {
            name: "   ".to_string(),
            funding_amount: String::new(),
            ..valid_firm_draft()
        };
        let errors = validate_firm(&draft);
        let fields: Vec<&str> = errors.keys().copied().collect();
        assert_eq!(fields, vec!["funding_amount", "name"]);
    }

    #[test]
    fn profit_split_over_100_is_rejected() {
        let draft = FirmDraft {
            profit_split: 150.0,
            ..valid_firm_draft()
        };
        let errors = validate_firm(&draft);
        assert!(errors.contains_key("profit_split"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn percentage_and_score_bounds_are_enforced() {
        let draft = FirmDraft {
            payout_rate: -1.0,
            review_score: 5.5,
            trust_rating: 11.0,
            starting_fee: -10.0,
            ..valid_firm_draft()
        };
        let errors = validate_firm(&draft);
        assert!(errors.contains_key("payout_rate"));
        assert!(errors.contains_key("review_score"));
        assert!(errors.contains_key("trust_rating"));
        assert!(errors.contains_key("starting_fee"));
    }

    #[test]
    fn url_prefix_checks() {
        let draft = FirmDraft {
            affiliate_url: "ftmo.com".to_string(),
            logo_url: "logos/ftmo.png".to_string(),
            ..valid_firm_draft()
        };
        let errors = validate_firm(&draft);
        assert!(errors.contains_key("affiliate_url"));
        assert!(errors.contains_key("logo_url"));
    }

    #[test]
    fn empty_optional_urls_are_fine() {
        let draft = FirmDraft {
            affiliate_url: String::new(),
            logo_url: String::new(),
            ..valid_firm_draft()
        };
        assert!(validate_firm(&draft).is_empty());
    }

    #[test]
    fn to_new_firm_drops_empty_optionals() {
        let draft = FirmDraft {
            coupon_code: "  ".to_string(),
            affiliate_url: String::new(),
            ..valid_firm_draft()
        };
        let payload = draft.to_new_firm();
        assert_eq!(payload.coupon_code, None);
        assert_eq!(payload.affiliate_url, None);
        assert_eq!(payload.logo_url.as_deref(), Some("/logos/ftmo.png"));
    }

    #[test]
    fn valid_review_draft_yields_empty_error_map() {
        let draft = ReviewDraft {
            user_name: "Alex".to_string(),
            rating: 5,
            title: String::new(),
            content: "Payouts arrived within two days, twice.".to_string(),
        };
        assert!(validate_review(&draft).is_empty());
    }

    #[test]
    fn review_requires_name_rating_and_minimum_content() {
        let draft = ReviewDraft {
            user_name: String::new(),
            rating: 0,
            title: String::new(),
            content: "too short".to_string(),
        };
        let errors = validate_review(&draft);
        let fields: Vec<&str> = errors.keys().copied().collect();
        assert_eq!(fields, vec!["content", "rating", "user_name"]);
    }

    #[test]
    fn out_of_range_rating_is_not_reported_as_missing() {
        let draft = ReviewDraft {
            user_name: "Alex".to_string(),
            rating: 6,
            title: String::new(),
            content: "Payouts arrived within two days, twice.".to_string(),
        };
        let errors = validate_review(&draft);
        assert_eq!(
            errors.get("rating").map(String::as_str),
            Some("Rating must be between 1 and 5")
        );
    }

    #[test]
    fn review_content_upper_bound() {
        let draft = ReviewDraft {
            user_name: "Alex".to_string(),
            rating: 3,
            title: String::new(),
            content: "x".repeat(1001),
        };
        assert!(validate_review(&draft).contains_key("content"));
    }
}
