/// Failures while building a schedule summary.
///
/// These never reach the caller of [`analyze_schedule`](super::analyze_schedule);
/// they are logged and replaced by a fixed apology.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    /// A pairing arrives before it departs, so its time window can't be shown.
    #[error("pairing {pairing} arrives ({arrival}) before it departs ({departure})")]
    InvalidWindow {
        pairing: String,
        departure: String,
        arrival: String,
    },

    /// Block hours are NaN or infinite and can't be compared.
    #[error("pairing {0} has non-finite block hours")]
    NonFiniteBlockHours(String),
}
