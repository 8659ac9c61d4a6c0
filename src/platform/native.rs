// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Native strategy: hand the caller's name to shm_open(3)/shm_unlink(3).

use std::ffi::{CStr, CString};
use std::io;

use libc::c_int;

use super::ShmBackend;
use crate::error::{Op, ShmError};
use crate::{Mode, Result, ShmFile};

// shm_open is variadic on Apple targets, so the mode must be promoted.
#[cfg(target_vendor = "apple")]
type ModeArg = libc::c_uint;
#[cfg(not(target_vendor = "apple"))]
type ModeArg = libc::mode_t;

/// Strategy backed by the C library's shm API.
///
/// Names, flags and permission bits go through unchanged; validation is the
/// C library's business. Portable names look like `/somename`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeShm;

/// Run `f` with `name` as a C string. The buffer lives exactly as long as
/// this call, whichever way `f` returns.
fn with_native_name<T>(
    op: Op,
    name: &str,
    f: impl FnOnce(&CStr) -> io::Result<T>,
) -> Result<T> {
    let c_name = CString::new(name).map_err(|source| ShmError::Marshal {
        op,
        name: name.to_string(),
        source,
    })?;
    log::trace!("{op} {name:?} via libc");
    f(&c_name).map_err(|e| ShmError::os(op, name, e))
}

impl ShmBackend for NativeShm {
    fn open(name: &str, flags: c_int, mode: Mode) -> Result<ShmFile> {
        let fd = with_native_name(Op::Open, name, |c_name| {
            let fd = unsafe { libc::shm_open(c_name.as_ptr(), flags, mode.perm() as ModeArg) };
            if fd == -1 {
                return Err(io::Error::last_os_error());
            }
            Ok(fd)
        })?;
        // Safety: `fd` was just returned by shm_open(3) and is owned by nobody else.
        Ok(unsafe { ShmFile::from_raw_fd(fd, name) })
    }

    fn unlink(name: &str) -> Result<()> {
        with_native_name(Op::Unlink, name, |c_name| {
            if unsafe { libc::shm_unlink(c_name.as_ptr()) } == -1 {
                return Err(io::Error::last_os_error());
            }
            Ok(())
        })
    }
}
