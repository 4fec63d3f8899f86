//! Face swap core: wire contract between client and relay, vendor request
//! parameters, data URI helpers and the shared error taxonomy.

pub mod config;
pub mod data_uri;
pub mod error;
pub mod types;
pub mod vendor;

pub use config::RelayConfig;
pub use error::{Error, Result};
pub use types::{RelayRequest, RelayResponse, SwapParams, PROBE_SENTINEL};
pub use vendor::VendorFailure;
