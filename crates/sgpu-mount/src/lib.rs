//! # sgpu-mount
//!
//! A short-lived helper that bind-mounts a shared GPU device node and its
//! control node from the host into the mount namespace of a target process,
//! so a container sees one specific GPU instead of the whole host device
//! tree.
//!
//! The pipeline is strictly linear: open `/proc/<pid>/ns/mnt`, join the
//! namespace with `setns(2)`, create placeholder files at both destination
//! paths, then bind-mount the two device nodes. There is no rollback; a
//! failure after the first mount leaves that mount in place.
//!
//! Joining a mount namespace is a one-way, process-wide effect. This crate
//! is meant to drive a single-purpose process that exits right after the
//! mounts land, not a long-running service.
//!
//! ## Usage
//!
//! ```no_run
//! use sgpu_mount::{GpuAttachment, MountPair};
//!
//! # fn example() -> sgpu_mount_common::SgpuMountResult<()> {
//! let attachment = GpuAttachment::new(
//!     "4821",
//!     MountPair::new("/dev/sgpu0", "/var/lib/containers/4821/dev/sgpu0"),
//!     MountPair::new("/dev/nvidiactl", "/var/lib/containers/4821/dev/nvidiactl"),
//! );
//! attachment.execute()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod attach;
pub mod cli;
pub mod filesystem;
pub mod namespace;

pub use attach::{GpuAttachment, MountPair};
