use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReviewListProps {
    /// Restrict to one firm's reviews; `None` shows the whole collection.
    #[prop_or_default]
    pub firm_id: Option<String>,
    /// Whether the current session may delete reviews.
    #[prop_or_default]
    pub can_delete: bool,
}
