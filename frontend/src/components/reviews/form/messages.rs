use common::model::review::Review;

pub enum Msg {
    SetName(String),
    SetTitle(String),
    SetContent(String),
    SetRating(u8),
    HoverRating(u8),
    Submit,
    Saved(Result<Review, String>),
}
