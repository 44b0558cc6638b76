//! Mount operations.

use std::path::Path;

use sgpu_mount_common::{SgpuMountError, SgpuMountResult};

/// Creation mode for placeholder mount targets.
const MOUNT_TARGET_MODE: rustix::fs::RawMode = 0o755;

/// Open-or-create a regular file to serve as a bind-mount target.
///
/// Only the inode needs to exist before a device node is mounted over it,
/// so the descriptor is closed immediately. A file already present at the
/// path is left untouched.
///
/// # Errors
///
/// Returns [`SgpuMountError::MountTarget`] if the file cannot be created
/// or opened.
pub fn ensure_mount_target(path: &Path) -> SgpuMountResult<()> {
    use rustix::fs::{Mode, OFlags};

    tracing::debug!(path = %path.display(), "Ensuring mount target exists");

    let fd = rustix::fs::open(
        path,
        OFlags::CREATE | OFlags::RDONLY | OFlags::CLOEXEC,
        Mode::from_raw_mode(MOUNT_TARGET_MODE),
    )
    .map_err(|errno| SgpuMountError::MountTarget {
        path: path.to_path_buf(),
        source: errno.into(),
    })?;
    drop(fd);

    Ok(())
}

/// Bind-mount `source` onto `target`.
///
/// No propagation change and no read-only remount: the device node must
/// stay writable and the mount lives only in the joined namespace.
///
/// # Errors
///
/// Returns [`SgpuMountError::Mount`] naming both paths if `mount(2)`
/// fails.
#[cfg(target_os = "linux")]
pub fn bind_mount(source: &Path, target: &Path) -> SgpuMountResult<()> {
    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        "Creating bind mount"
    );

    rustix::mount::mount_bind(source, target).map_err(|errno| SgpuMountError::Mount {
        source_path: source.to_path_buf(),
        target: target.to_path_buf(),
        source: errno.into(),
    })?;

    Ok(())
}

/// Bind-mount `source` onto `target`.
#[cfg(not(target_os = "linux"))]
pub fn bind_mount(_source: &Path, _target: &Path) -> SgpuMountResult<()> {
    Err(SgpuMountError::Unsupported {
        feature: "bind mounts".to_string(),
    })
}
