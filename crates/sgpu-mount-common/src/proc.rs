//! `/proc` path construction for target processes.

use std::path::PathBuf;

/// Path to a process's mount namespace file.
///
/// The PID is kept as the caller-supplied string and never parsed as a
/// number; a nonexistent or malformed PID simply fails when the path is
/// opened.
#[must_use]
pub fn mnt_ns_path(pid: &str) -> PathBuf {
    PathBuf::from(format!("/proc/{pid}/ns/mnt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn mnt_ns_path_for_pid() {
        assert_eq!(mnt_ns_path("4821"), Path::new("/proc/4821/ns/mnt"));
    }

    #[test]
    fn mnt_ns_path_keeps_pid_verbatim() {
        // No numeric validation; "self" is a legitimate /proc entry.
        assert_eq!(mnt_ns_path("self"), Path::new("/proc/self/ns/mnt"));
    }
}
