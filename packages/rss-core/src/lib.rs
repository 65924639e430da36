pub mod error;
pub mod loader;
pub mod reshaper;
pub mod selector;
pub mod store;
pub mod types;

pub use error::{Result, RssError};
pub use loader::{load, normalize_subject_id};
pub use reshaper::{chart_data, melt};
pub use selector::select;
pub use store::SignalStore;
pub use types::*;
