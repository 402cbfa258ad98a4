pub mod filter;
pub mod loader;
pub mod types;

pub use filter::{filter_pairings, PairingFilter};
pub use loader::load_pairings;
pub use types::{Layover, Pairing, Preference, PreferenceKind};
