use common::model::firm::PropFirm;
use common::state::CollectionState;
use common::views::{FirmFilters, SortKey};

use crate::supabase::realtime::RealtimeChannel;

pub struct AllFirmsPage {
    pub firms: CollectionState<PropFirm>,
    pub filters: FirmFilters,
    pub sort_by: SortKey,
    pub channel: Option<RealtimeChannel>,
}

impl AllFirmsPage {
    pub fn new() -> Self {
        Self {
            firms: CollectionState::new(),
            filters: FirmFilters::default(),
            sort_by: SortKey::Review,
            channel: None,
        }
    }
}
