//! Hackair-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod kind;

pub use capability::Capability;
pub use config::{ClientConfig, HackairConfig, SplitConfig};
pub use error::HackairError;
pub use kind::{SeriesKind, Target, UnknownTarget};
