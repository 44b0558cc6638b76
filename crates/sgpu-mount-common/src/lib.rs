//! # sgpu-mount-common
//!
//! Shared types for the sgpu-mount tool:
//! - Error taxonomy for the attachment pipeline
//! - `/proc` path construction for target processes

#![warn(missing_docs)]

pub mod error;
pub mod proc;

pub use error::{SgpuMountError, SgpuMountResult};
