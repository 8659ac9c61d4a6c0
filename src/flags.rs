// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Host open(2) flag values, re-exported under short names.

use libc::c_int;

pub const RDONLY: c_int = libc::O_RDONLY;
pub const RDWR: c_int = libc::O_RDWR;
pub const CREATE: c_int = libc::O_CREAT;
pub const EXCL: c_int = libc::O_EXCL;
pub const TRUNC: c_int = libc::O_TRUNC;
pub const CLOEXEC: c_int = libc::O_CLOEXEC;
