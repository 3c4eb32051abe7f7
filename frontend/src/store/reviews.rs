use common::model::review::{NewReview, Review};

use crate::supabase::{self, SupabaseError};

const TABLE: &str = "reviews";

/// All reviews newest first, optionally for a single firm.
pub async fn fetch(firm_id: Option<&str>) -> Result<Vec<Review>, SupabaseError> {
    supabase::fetch_rows(TABLE, "created_at.desc", firm_id.map(|id| ("firm_id", id))).await
}

pub async fn add(review: &NewReview) -> Result<Review, SupabaseError> {
    supabase::insert_row(TABLE, review).await
}

/// Admin-only at the call sites; the backend's row-level rules enforce it.
pub async fn delete(id: &str) -> Result<(), SupabaseError> {
    supabase::delete_row(TABLE, id).await
}
