// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Open and unlink POSIX shared memory objects.
// On Linux the objects are files under /dev/shm; elsewhere the C library's
// shm_open(3)/shm_unlink(3) are used. Mapping is left to the caller.

#![cfg(unix)]

pub mod flags;
pub mod shm_name;

mod error;
pub use error::{Op, Result, ShmError};

mod mode;
pub use mode::Mode;

mod file;
pub use file::ShmFile;

mod platform;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use platform::DevShm;
#[cfg(not(target_os = "android"))]
pub use platform::NativeShm;
pub use platform::{DefaultBackend, ShmBackend};

/// Open or create the shared memory object `name` with the target's
/// default strategy.
///
/// `flags` are `open(2)` flags (see [`flags`]). On Linux the name may carry
/// any number of leading '/' and the descriptor is always close-on-exec.
pub fn open(name: &str, flags: libc::c_int, mode: Mode) -> Result<ShmFile> {
    DefaultBackend::open(name, flags, mode)
}

/// Remove the shared memory object `name`.
pub fn unlink(name: &str) -> Result<()> {
    DefaultBackend::unlink(name)
}
