//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `report` - Report aggregate, quota rules and lifecycle errors
//! - `document` - Classification, parsing and rendering of report text
//! - `view_mode` - Report screen mode state machine

pub mod document;
pub mod foundation;
pub mod report;
pub mod view_mode;
