//! The GPU attachment pipeline.
//!
//! A strictly linear sequence with no rollback: join the target's mount
//! namespace, make sure both destination files exist, then bind-mount the
//! GPU node and its control node. If the second mount fails the first
//! stays in place; partial attachment is an accepted outcome for this
//! short-lived tool.

use std::fmt;
use std::path::PathBuf;

use sgpu_mount_common::SgpuMountResult;

use crate::filesystem::{bind_mount, ensure_mount_target};
use crate::namespace::MntNamespace;

/// A source device node and the path it is mounted onto.
#[derive(Debug, Clone)]
pub struct MountPair {
    /// Host path of the device node.
    pub source: PathBuf,
    /// Destination inside the target namespace.
    pub target: PathBuf,
}

impl MountPair {
    /// Create a pair from source and target paths.
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for MountPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-->{}", self.source.display(), self.target.display())
    }
}

/// Attaches a shared GPU device node and its control node to the mount
/// namespace of a target process.
#[derive(Debug, Clone)]
pub struct GpuAttachment {
    pid: String,
    gpu: MountPair,
    control: MountPair,
}

impl GpuAttachment {
    /// Describe an attachment for the given process.
    ///
    /// The PID is passed through verbatim; whether it names a live process
    /// is checked by opening its namespace file, not up front.
    pub fn new(pid: impl Into<String>, gpu: MountPair, control: MountPair) -> Self {
        Self {
            pid: pid.into(),
            gpu,
            control,
        }
    }

    /// Target process ID.
    #[must_use]
    pub fn pid(&self) -> &str {
        &self.pid
    }

    /// GPU device mount pair.
    #[must_use]
    pub fn gpu(&self) -> &MountPair {
        &self.gpu
    }

    /// Control device mount pair.
    #[must_use]
    pub fn control(&self) -> &MountPair {
        &self.control
    }

    /// Run the attachment pipeline.
    ///
    /// Joining the namespace switches this whole process into the target's
    /// mount table for the rest of its lifetime; the caller should exit
    /// soon after. Every filesystem path after the join, destinations
    /// included, resolves inside the target namespace.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error; later steps are not
    /// attempted and earlier ones are not undone.
    pub fn execute(&self) -> SgpuMountResult<()> {
        let ns = MntNamespace::open(&self.pid)?;
        ns.join()?;

        ensure_mount_target(&self.gpu.target)?;
        ensure_mount_target(&self.control.target)?;

        bind_mount(&self.gpu.source, &self.gpu.target)?;
        bind_mount(&self.control.source, &self.control.target)?;

        tracing::info!(
            pid = %self.pid,
            gpu = %self.gpu,
            control = %self.control,
            "Attached GPU devices"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgpu_mount_common::SgpuMountError;
    use tempfile::TempDir;

    #[test]
    fn mount_pair_display_names_both_paths() {
        let pair = MountPair::new("/dev/sgpu0", "/var/lib/containers/4821/dev/sgpu0");
        assert_eq!(
            pair.to_string(),
            "/dev/sgpu0-->/var/lib/containers/4821/dev/sgpu0"
        );
    }

    #[test]
    fn nonexistent_pid_fails_before_touching_targets() {
        let tmp = TempDir::new().unwrap();
        let gpu_target = tmp.path().join("sgpu0");
        let control_target = tmp.path().join("nvidiactl");

        let attachment = GpuAttachment::new(
            "0", // PID 0 never has a /proc entry
            MountPair::new("/dev/null", &gpu_target),
            MountPair::new("/dev/null", &control_target),
        );
        let err = attachment.execute().unwrap_err();

        assert!(matches!(err, SgpuMountError::NamespaceOpen { .. }));
        // The pipeline stopped before the ensure step.
        assert!(!gpu_target.exists());
        assert!(!control_target.exists());
    }

    #[test]
    fn attachment_keeps_pid_verbatim() {
        let attachment = GpuAttachment::new(
            "4821",
            MountPair::new("/dev/sgpu0", "/tmp/sgpu0"),
            MountPair::new("/dev/nvidiactl", "/tmp/nvidiactl"),
        );
        assert_eq!(attachment.pid(), "4821");
        assert_eq!(attachment.gpu().source, PathBuf::from("/dev/sgpu0"));
        assert_eq!(
            attachment.control().target,
            PathBuf::from("/tmp/nvidiactl")
        );
    }
}
