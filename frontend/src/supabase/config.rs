//! Project constants for the hosted database service.
//!
//! The anon key is a publishable client credential; access control lives in
//! the service's row-level security rules, not here.

pub const SUPABASE_URL: &str = "https://qlkezfgvgblqtmjdqlgw.supabase.co";
pub const SUPABASE_ANON_KEY: &str = "sb_publishable_qlkezfgvgblqtmjdqlgw_anon";

/// Websocket endpoint of the realtime service, derived from the project URL.
pub fn realtime_url() -> String {
    format!(
        "{}/realtime/v1/websocket?apikey={}&vsn=1.0.0",
        SUPABASE_URL.replacen("https", "wss", 1),
        SUPABASE_ANON_KEY
    )
}
