pub mod admin;
pub mod all_firms;
pub mod cheap_firms;
pub mod comparison;
pub mod firm_detail;
pub mod home;
pub mod reviews;
pub mod top_firms;
