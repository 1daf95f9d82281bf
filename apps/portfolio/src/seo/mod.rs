// Search-engine output: <head> metadata and schema.org structured data.

pub mod metadata;
pub mod structured_data;

pub use metadata::{build_metadata, fallback_metadata, PageMetadata};
pub use structured_data::{build_profile_page_ld, to_script_json};
