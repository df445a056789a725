//! Public façade for the data layer.
//!
//! Resolution order for a section key: live API (when enabled) → snapshot
//! store → synthetic fallback. Callers get a JSON value back no matter what;
//! source failures degrade instead of propagating.

pub mod cache;
pub mod config;
pub mod key;
pub mod live;
pub mod locator;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod synth;

pub use config::Config;
pub use locator::Locator;
pub use service::DataService;
