#![allow(unsafe_code)]
//! Mount namespace entry for a target process.
//!
//! Joining is a one-way, process-wide effect: after [`MntNamespace::join`]
//! every later filesystem operation in this process resolves inside the
//! target's mount table. Callers are expected to exit shortly afterwards.

use std::fs::File;
use std::path::{Path, PathBuf};

use sgpu_mount_common::proc::mnt_ns_path;
use sgpu_mount_common::{SgpuMountError, SgpuMountResult};

/// An open handle on `/proc/<pid>/ns/mnt`.
///
/// The file descriptor closes when the value drops, whether or not the
/// join succeeded.
#[derive(Debug)]
pub struct MntNamespace {
    path: PathBuf,
    file: File,
}

impl MntNamespace {
    /// Open the mount namespace of the given process.
    ///
    /// # Errors
    ///
    /// Returns [`SgpuMountError::NamespaceOpen`] if the namespace file
    /// cannot be opened (process gone, no permission, or `/proc` absent).
    pub fn open(pid: &str) -> SgpuMountResult<Self> {
        let path = mnt_ns_path(pid);
        let file = File::open(&path).map_err(|source| SgpuMountError::NamespaceOpen {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Opened mount namespace handle");

        Ok(Self { path, file })
    }

    /// Namespace file this handle references.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move this process into the namespace, consuming the handle.
    ///
    /// The descriptor is released on return, on the error path too.
    ///
    /// # Errors
    ///
    /// Returns [`SgpuMountError::NamespaceJoin`] if `setns(2)` fails,
    /// typically because the caller lacks `CAP_SYS_ADMIN` or the namespace
    /// no longer exists.
    #[cfg(target_os = "linux")]
    pub fn join(self) -> SgpuMountResult<()> {
        use std::os::unix::io::AsRawFd;

        // Safety: the fd references a namespace file we opened above;
        // CLONE_NEWNS makes setns reject anything but a mount namespace.
        let rc = unsafe { libc::setns(self.file.as_raw_fd(), libc::CLONE_NEWNS) };
        if rc != 0 {
            return Err(SgpuMountError::NamespaceJoin {
                path: self.path,
                source: std::io::Error::last_os_error(),
            });
        }

        tracing::debug!(path = %self.path.display(), "Joined mount namespace");

        Ok(())
    }

    /// Move this process into the namespace, consuming the handle.
    #[cfg(not(target_os = "linux"))]
    pub fn join(self) -> SgpuMountResult<()> {
        Err(SgpuMountError::Unsupported {
            feature: "mount namespaces".to_string(),
        })
    }
}
