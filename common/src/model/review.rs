use serde::{Deserialize, Serialize};

/// A user-submitted review. Always references exactly one firm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub firm_id: String,
    pub user_name: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub helpful_count: u32,
    pub created_at: String,
    pub user_id: Option<String>,
}

/// Insert payload for `reviews`. Created by any visitor from the public form;
/// `user_id` is stamped only when a session happens to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub firm_id: String,
    pub user_name: String,
    pub rating: u8,
    pub title: Option<String>,
    pub content: String,
    pub user_id: Option<String>,
}
