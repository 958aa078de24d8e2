//! Progress Reports - AI-generated project progress reports
//!
//! Generates, stores, parses, renders and exports progress reports for
//! projects, with a per-project ceiling on how many reports may exist.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
