//! Filesystem operations for placing GPU device nodes.
//!
//! This module handles:
//! - Placeholder mount-target creation
//! - Bind mounts

mod mounts;

pub use mounts::{bind_mount, ensure_mount_target};
