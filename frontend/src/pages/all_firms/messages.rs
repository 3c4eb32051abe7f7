use common::model::firm::PropFirm;
use common::views::{FirmFilters, SortKey};

pub enum Msg {
    Loaded(Result<Vec<PropFirm>, String>),
    RemoteChange,
    SetFilters(FirmFilters),
    SetSort(SortKey),
}
