//! Sdkenv - Vendor SDK manifest resolver
//!
//! This library resolves an installed vendor SDK state - a component manifest
//! plus an SDK options descriptor - into a fully-substituted build environment
//! consumable by an application build graph.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Resolution logic (loading, validation, substitution, assembly)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
