pub mod admin;
pub mod firms;
pub mod footer;
pub mod helpers;
pub mod hero;
pub mod navbar;
pub mod reviews;
