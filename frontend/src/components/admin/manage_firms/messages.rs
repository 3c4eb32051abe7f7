use common::model::firm::PropFirm;

use crate::components::admin::firm_form::FirmSaved;

pub enum Msg {
    Loaded(Result<Vec<PropFirm>, String>),
    RemoteChange,
    Edit(PropFirm),
    CancelEdit,
    Saved(FirmSaved),
    Delete(String),
    Deleted(String, Result<(), String>),
}
