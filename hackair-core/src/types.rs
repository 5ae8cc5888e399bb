//! Re-export of foundational types from `hackair-types`.
// Consolidated re-exports so downstream crates can depend on `hackair-core` only

pub use hackair_types::{
    Capability, ClientConfig, HackairConfig, HackairError, SeriesKind, SplitConfig, Target,
    UnknownTarget,
};
