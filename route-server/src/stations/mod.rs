//! Station id → name/code lookup.
//!
//! Built from the store's station list each time the network is loaded;
//! used to resolve request parameters and to label routes for display.

mod directory;

pub use directory::StationDirectory;
