pub mod chart;
pub mod info;
pub mod validate;
