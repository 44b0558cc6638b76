//! Common error types for the sgpu-mount tool.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using [`SgpuMountError`].
pub type SgpuMountResult<T> = Result<T, SgpuMountError>;

/// Errors raised while attaching GPU device nodes to a target mount
/// namespace.
///
/// Every variant is terminal: the pipeline aborts at the failing step and
/// earlier steps are not rolled back.
#[derive(Error, Diagnostic, Debug)]
pub enum SgpuMountError {
    /// The target process's mount namespace file could not be opened.
    #[error("cannot open mount namespace {path}: {source}")]
    #[diagnostic(
        code(sgpu_mount::namespace::open),
        help("check that the target process exists and that /proc is mounted")
    )]
    NamespaceOpen {
        /// Namespace file that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// `setns(2)` refused to move this process into the namespace.
    #[error("cannot join mount namespace {path}: {source}")]
    #[diagnostic(
        code(sgpu_mount::namespace::join),
        help("joining a mount namespace requires CAP_SYS_ADMIN")
    )]
    NamespaceJoin {
        /// Namespace file the join was attempted against.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// A placeholder mount target could not be created or opened.
    #[error("cannot create mount target {path}: {source}")]
    #[diagnostic(code(sgpu_mount::mount::target))]
    MountTarget {
        /// Destination path that could not be prepared.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A bind mount failed.
    #[error("mount from {source_path} to {target} failed: {source}")]
    #[diagnostic(
        code(sgpu_mount::mount::bind),
        help("bind mounts require CAP_SYS_ADMIN inside the joined namespace")
    )]
    Mount {
        /// Source device node.
        source_path: PathBuf,
        /// Destination the mount was aimed at.
        target: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// Feature not supported on this platform.
    #[error("feature not supported: {feature}")]
    #[diagnostic(
        code(sgpu_mount::unsupported),
        help("this tool only works on Linux")
    )]
    Unsupported {
        /// The unsupported feature.
        feature: String,
    },
}

impl SgpuMountError {
    /// Raw OS error code of the failing step, when one exists.
    ///
    /// Used as the process exit code so callers can distinguish failure
    /// modes by errno rather than a flat 0/1 scheme.
    #[must_use]
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            Self::NamespaceOpen { source, .. }
            | Self::NamespaceJoin { source, .. }
            | Self::MountTarget { source, .. }
            | Self::Mount { source, .. } => source.raw_os_error(),
            Self::Unsupported { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENOENT: i32 = 2;

    #[test]
    fn error_display_names_both_mount_paths() {
        let err = SgpuMountError::Mount {
            source_path: PathBuf::from("/dev/sgpu0"),
            target: PathBuf::from("/tmp/dev/sgpu0"),
            source: io::Error::from_raw_os_error(ENOENT),
        };
        let msg = err.to_string();
        assert!(msg.contains("/dev/sgpu0"));
        assert!(msg.contains("/tmp/dev/sgpu0"));
    }

    #[test]
    fn os_error_code_passes_through_errno() {
        let err = SgpuMountError::NamespaceOpen {
            path: PathBuf::from("/proc/4821/ns/mnt"),
            source: io::Error::from_raw_os_error(ENOENT),
        };
        assert_eq!(err.os_error_code(), Some(ENOENT));
    }

    #[test]
    fn os_error_code_is_none_without_errno() {
        let err = SgpuMountError::Unsupported {
            feature: "bind mounts".to_string(),
        };
        assert_eq!(err.os_error_code(), None);
    }
}
