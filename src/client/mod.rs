//! Funding Backend Client
//!
//! HTTP access to the external funding backend, which owns authentication,
//! persistence and business rules. This layer only fetches entity
//! collections and secondary assets:
//! - [`backend`]: reqwest client with the error taxonomy
//! - [`source`]: async trait seam so tests and the demo can feed fixtures
//! - [`avatars`]: concurrent, failure-isolated avatar fetches

pub mod avatars;
pub mod backend;
pub mod source;

pub use avatars::{fetch_all_avatars, AvatarState, AVATAR_PLACEHOLDER_SVG};
pub use backend::{BackendClient, BackendConfig, BackendError};
pub use source::{FixtureSource, RecordSource};
