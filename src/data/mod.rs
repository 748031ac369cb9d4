//! Data module - launch records CSV loading and filtering

mod filter;
mod loader;

pub use filter::{FilterError, LaunchFilter, SiteSelection, ALL_SITES};
pub use loader::{DataError, LaunchData};

#[cfg(test)]
pub(crate) use loader::tests::sample_frame;

/// CSV column holding the launch facility label.
pub const LAUNCH_SITE: &str = "Launch Site";
/// CSV column holding the payload mass in kilograms.
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
/// CSV column holding the booster variant label.
pub const BOOSTER_VERSION: &str = "Booster Version";
/// CSV column holding the binary outcome flag (1 = success, 0 = failure).
pub const OUTCOME: &str = "class";

/// Columns the dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, BOOSTER_VERSION, OUTCOME];
