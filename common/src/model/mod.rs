pub mod category;
pub mod firm;
pub mod review;
