pub mod model;
pub mod realtime;
pub mod state;
pub mod validation;
pub mod views;
