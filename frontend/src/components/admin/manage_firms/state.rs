use common::model::firm::PropFirm;
use common::state::CollectionState;

use crate::supabase::realtime::RealtimeChannel;

pub struct ManageFirms {
    pub firms: CollectionState<PropFirm>,
    pub editing: Option<PropFirm>,
    pub channel: Option<RealtimeChannel>,
    /// Id of the firm whose delete request is in flight.
    pub deleting: Option<String>,
}

impl ManageFirms {
    pub fn new() -> Self {
        Self {
            firms: CollectionState::new(),
            editing: None,
            channel: None,
            deleting: None,
        }
    }
}
