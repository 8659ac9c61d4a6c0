// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Linux strategy: shm objects are files on the /dev/shm tmpfs, so plain
// open(2)/unlink(2) on "/dev/shm/<name>" is equivalent to shm_open(3).

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;

use libc::c_int;

use super::ShmBackend;
use crate::error::{Op, ShmError};
use crate::{shm_name, Mode, Result, ShmFile};

/// Path-based strategy over [`shm_name::DEV_SHM`].
///
/// Leading '/' are stripped from names, special mode bits are translated,
/// and `O_CLOEXEC` is always added to the caller's flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevShm;

/// Resolve `name` to a NUL-terminated path under /dev/shm.
fn resolve(op: Op, name: &str) -> Result<CString> {
    let normalized = shm_name::normalize(name).ok_or_else(|| ShmError::InvalidName {
        op,
        name: name.to_string(),
    })?;
    let path = shm_name::dev_shm_path(normalized);
    log::trace!("{op} {name:?} -> {}", path.display());
    // open(2) reports an embedded NUL as EINVAL; do the same.
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| ShmError::os(op, name, io::Error::from_raw_os_error(libc::EINVAL)))
}

impl ShmBackend for DevShm {
    fn open(name: &str, flags: c_int, mode: Mode) -> Result<ShmFile> {
        let path = resolve(Op::Open, name)?;
        let perm = mode.native();
        let flags = flags | libc::O_CLOEXEC;
        log::trace!("open flags={flags:#o} mode={perm:#o}");

        let fd = unsafe { libc::open(path.as_ptr(), flags, perm as libc::c_uint) };
        if fd == -1 {
            return Err(ShmError::os(Op::Open, name, io::Error::last_os_error()));
        }
        // Safety: `fd` was just returned by open(2) and is owned by nobody else.
        Ok(unsafe { ShmFile::from_raw_fd(fd, name) })
    }

    fn unlink(name: &str) -> Result<()> {
        let path = resolve(Op::Unlink, name)?;
        if unsafe { libc::unlink(path.as_ptr()) } == -1 {
            return Err(ShmError::os(Op::Unlink, name, io::Error::last_os_error()));
        }
        Ok(())
    }
}
