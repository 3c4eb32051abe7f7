pub mod firm_form;
pub mod firms_table;
pub mod login;
pub mod manage_firms;
pub mod sidebar;
