//! Face swap relay: a single stateless HTTP handler that forwards
//! `{image_url, gif_url}` to the Segmind face swap API and relays the answer
//! in a uniform JSON envelope.

pub mod error;
pub mod routes;
pub mod state;
pub mod vendor;

pub use routes::build_router;
pub use state::AppState;
pub use vendor::{FaceSwapVendor, SegmindClient, VendorReply};
