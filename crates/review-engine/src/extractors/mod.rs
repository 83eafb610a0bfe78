pub mod metadata;

pub use metadata::{extract_counterparties, extract_effective_date, extract_metadata, extract_title};
