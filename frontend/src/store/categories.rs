use common::model::category::Category;

use crate::supabase::{self, SupabaseError};

const TABLE: &str = "categories";

pub async fn fetch() -> Result<Vec<Category>, SupabaseError> {
    supabase::fetch_rows(TABLE, "name.asc", None).await
}
