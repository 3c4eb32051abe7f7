use common::model::review::Review;

pub enum Msg {
    Loaded(Result<Vec<Review>, String>),
    /// A realtime change event arrived for the subscribed table.
    RemoteChange,
    Delete(String),
    Deleted(String, Result<(), String>),
}
