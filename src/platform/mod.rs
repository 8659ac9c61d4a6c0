// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Platform strategies for opening and unlinking shm objects. The one used
// by `crate::open` / `crate::unlink` is fixed at build time.

use libc::c_int;

use crate::{Mode, Result, ShmFile};

#[cfg(any(target_os = "linux", target_os = "android"))]
mod dev_shm;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use dev_shm::DevShm;

#[cfg(not(target_os = "android"))]
mod native;
#[cfg(not(target_os = "android"))]
pub use native::NativeShm;

#[cfg(all(target_os = "android", feature = "native"))]
compile_error!("feature `native` is unavailable on Android: bionic has no shm_open");

/// A way of creating, opening and removing named shm objects.
pub trait ShmBackend {
    /// Open (or with `O_CREAT`, create) the object called `name`.
    ///
    /// `flags` are `open(2)` flags and are passed through as given, apart
    /// from whatever the strategy documents it adds.
    fn open(name: &str, flags: c_int, mode: Mode) -> Result<ShmFile>;

    /// Remove the name. Open handles stay valid.
    fn unlink(name: &str) -> Result<()>;
}

/// The strategy for this target.
#[cfg(all(any(target_os = "linux", target_os = "android"), not(feature = "native")))]
pub type DefaultBackend = DevShm;

#[cfg(not(all(any(target_os = "linux", target_os = "android"), not(feature = "native"))))]
pub type DefaultBackend = NativeShm;
