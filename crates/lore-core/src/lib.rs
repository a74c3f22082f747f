//! # lore-core
//!
//! Core types and error types for lore.
//!
//! This crate provides the foundational types shared across all lore crates:
//! - [`Topic`], the validated subject of a learning report
//! - [`LearnerProfile`] with its knowledge-level and format enums
//! - [`SourceResult`] and [`ResearchBundle`], the output of the content fetchers
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod profile;
pub mod research;
pub mod topic;

pub use enums::{KnowledgeLevel, PreferredFormat, SourceKind};
pub use errors::CoreError;
pub use profile::LearnerProfile;
pub use research::{ResearchBundle, SourceResult};
pub use topic::Topic;

/// Closing line of every report unless configured otherwise.
pub const DEFAULT_ATTRIBUTION: &str =
    "Report generated by the Enhanced Interactive Learning Assistant";
