pub mod card;
pub mod filter_sidebar;
pub mod list;
