// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Name handling for the /dev/shm strategy: portable shm names ("/foo")
// map to plain files beneath the tmpfs mount.

use std::path::PathBuf;

/// Mount point of the POSIX shm tmpfs on Linux. Not configurable.
pub const DEV_SHM: &str = "/dev/shm/";

/// Strip every leading '/' from `name`.
///
/// Returns `None` when nothing is left, which callers must reject before
/// touching the filesystem.
pub fn normalize(name: &str) -> Option<&str> {
    let stripped = name.trim_start_matches('/');
    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}

/// Path of a normalized name under [`DEV_SHM`].
pub fn dev_shm_path(normalized: &str) -> PathBuf {
    let mut path = String::with_capacity(DEV_SHM.len() + normalized.len());
    path.push_str(DEV_SHM);
    path.push_str(normalized);
    PathBuf::from(path)
}
