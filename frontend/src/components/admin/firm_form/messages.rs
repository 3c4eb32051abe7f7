use common::model::firm::PropFirm;

/// Editable inputs, addressed generically so the update arm parses each kind
/// of value in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Brand,
    Category,
    Price,
    OriginalPrice,
    CouponCode,
    ReviewScore,
    TrustRating,
    Description,
    Features,
    Pros,
    Cons,
    LogoUrl,
    ProfitSplit,
    PayoutRate,
    FundingAmount,
    StartingFee,
    UserReviewCount,
    AffiliateUrl,
}

/// Outcome handed to the parent so it can patch its collection.
#[derive(Debug, Clone, PartialEq)]
pub enum FirmSaved {
    Created(PropFirm),
    Updated(PropFirm),
}

pub enum Msg {
    Edit(Field, String),
    Submit,
    Saved(Result<FirmSaved, String>),
    Cancel,
}
