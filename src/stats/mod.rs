pub mod fix_dates;
pub mod merge;
pub mod models;
