//! CLI definition and execution.

use std::path::PathBuf;

use clap::Parser;
use sgpu_mount_common::SgpuMountResult;

use crate::attach::{GpuAttachment, MountPair};

/// sgpu-mount - attach shared GPU device nodes to a process's mount namespace
#[derive(Debug, Parser)]
#[command(name = "sgpu-mount")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target process ID (locates /proc/<pid>/ns/mnt)
    pub pid: String,

    /// Host path of the shared GPU device node
    pub gpu_source: PathBuf,

    /// Destination for the GPU node inside the target namespace
    pub gpu_target: PathBuf,

    /// Host path of the GPU control device node
    pub control_source: PathBuf,

    /// Destination for the control node inside the target namespace
    pub control_target: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Execute the attachment described by the arguments.
    ///
    /// Prints a confirmation naming all four paths on success.
    ///
    /// # Errors
    ///
    /// Propagates the first failing pipeline step.
    pub fn execute(self) -> SgpuMountResult<()> {
        let attachment = GpuAttachment::new(
            self.pid,
            MountPair::new(self.gpu_source, self.gpu_target),
            MountPair::new(self.control_source, self.control_target),
        );

        attachment.execute()?;

        println!(
            "Successfully bind mounted {} and {}",
            attachment.gpu(),
            attachment.control()
        );

        Ok(())
    }
}
