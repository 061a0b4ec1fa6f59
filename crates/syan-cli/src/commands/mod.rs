pub mod analyze;
pub mod catalog;
pub mod compose;
pub mod serve;
