use yew::prelude::*;

use common::model::review::Review;

#[derive(Properties, PartialEq)]
pub struct ReviewFormProps {
    pub firm_id: String,
    pub firm_name: String,
    /// Stamped onto the review when a session exists; reviews are otherwise
    /// anonymous.
    #[prop_or_default]
    pub user_id: Option<String>,
    /// Fired with the stored row after a successful submission.
    #[prop_or_default]
    pub on_saved: Callback<Review>,
}
