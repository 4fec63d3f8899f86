//! Face swap client orchestrator.
//!
//! Drives one swap attempt against the relay, reports coarse progress
//! milestones and tracks the attempt in an explicit session state machine.

pub mod config;
pub mod orchestrator;
pub mod relay;
pub mod session;
pub mod source;
pub mod types;

pub use config::ClientConfig;
pub use faceswap_core::Error as SwapError;
pub use orchestrator::Orchestrator;
pub use relay::RelayClient;
pub use session::{SwapSession, SwapState};
pub use source::SourceImage;
pub use types::*;
