// Launch records dataset
// Loaded once at startup and shared read-only with every other component

pub mod loader;
pub mod types;

// Re-export commonly used types
pub use loader::{
    BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, DEFAULT_DATASET_FILE, LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN, load_launch_csv, read_launch_records,
};
pub use types::{Dataset, LaunchOutcome, LaunchRecord, PayloadBounds};
