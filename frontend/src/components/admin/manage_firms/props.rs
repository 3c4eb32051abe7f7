use yew::prelude::*;

use common::model::category::Category;

#[derive(Properties, PartialEq)]
pub struct ManageFirmsProps {
    /// Section to manage; `None` shows every firm in the catalog.
    #[prop_or_default]
    pub category_id: Option<String>,
    #[prop_or_default]
    pub categories: Vec<Category>,
}
