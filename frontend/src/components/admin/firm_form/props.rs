use yew::prelude::*;

use common::model::category::Category;
use common::model::firm::PropFirm;

use super::messages::FirmSaved;

#[derive(Properties, PartialEq)]
pub struct FirmFormProps {
    /// Record being edited; `None` means the form creates a new firm.
    #[prop_or_default]
    pub editing: Option<PropFirm>,
    #[prop_or_default]
    pub categories: Vec<Category>,
    /// Fired with the stored row after a successful create or update.
    pub on_saved: Callback<FirmSaved>,
    #[prop_or_default]
    pub on_cancel: Callback<()>,
}
