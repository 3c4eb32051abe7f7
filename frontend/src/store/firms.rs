use common::model::firm::{FirmPatch, NewFirm, PropFirm};

use crate::supabase::{self, SupabaseError};

const TABLE: &str = "prop_firms";

/// Whole catalog, newest first, optionally narrowed to one category.
pub async fn fetch(category_id: Option<&str>) -> Result<Vec<PropFirm>, SupabaseError> {
    supabase::fetch_rows(
        TABLE,
        "created_at.desc",
        category_id.map(|id| ("category_id", id)),
    )
    .await
}

pub async fn fetch_one(id: &str) -> Result<Option<PropFirm>, SupabaseError> {
    supabase::fetch_one(TABLE, id).await
}

pub async fn add(firm: &NewFirm) -> Result<PropFirm, SupabaseError> {
    supabase::insert_row(TABLE, firm).await
}

pub async fn update(id: &str, patch: &FirmPatch) -> Result<PropFirm, SupabaseError> {
    supabase::update_row(TABLE, id, patch).await
}

pub async fn delete(id: &str) -> Result<(), SupabaseError> {
    supabase::delete_row(TABLE, id).await
}
