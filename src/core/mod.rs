//! Resolution logic module
//!
//! This module contains the whole manifest-to-environment pipeline.
//! It performs no I/O beyond the two descriptor reads in [`descriptor`].
//!
//! # Submodules
//!
//! - [`descriptor`] - Raw JSON descriptor loading
//! - [`manifest`] - Component manifest parsing and validation
//! - [`options`] - SDK options descriptor types
//! - [`subst`] - Marker token substitution engine
//! - [`env`] - Resolved environment value types
//! - [`assemble`] - Environment assembly from validated inputs
//! - [`resolve`] - Top-level resolution entry point

pub mod assemble;
pub mod descriptor;
pub mod env;
pub mod manifest;
pub mod options;
pub mod resolve;
pub mod subst;
