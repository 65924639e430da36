mod chart;
mod health;
mod options;

pub use chart::chart_data;
pub use health::health_check;
pub use options::dataset_options;
