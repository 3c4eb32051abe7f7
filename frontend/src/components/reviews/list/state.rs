use common::model::review::Review;
use common::state::CollectionState;

use crate::supabase::realtime::RealtimeChannel;

pub struct ReviewList {
    pub reviews: CollectionState<Review>,
    /// The one live subscription for this mounted list.
    pub channel: Option<RealtimeChannel>,
    /// Id of the review currently being deleted, if any.
    pub deleting: Option<String>,
    /// Guard against re-running first-render initialization.
    pub loaded: bool,
}

impl ReviewList {
    pub fn new() -> Self {
        Self {
            reviews: CollectionState::new(),
            channel: None,
            deleting: None,
            loaded: false,
        }
    }
}
