// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Error type shared by both shm strategies. Every variant carries the
// operation and the name exactly as the caller passed it.

use std::ffi::NulError;
use std::fmt;
use std::io;

/// The operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Open,
    Unlink,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Open => "open",
            Op::Unlink => "unlink",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShmError {
    /// The name is empty once leading '/' are stripped. No syscall was made.
    #[error("{op} {name}: invalid shared memory name")]
    InvalidName { op: Op, name: String },
    /// The underlying open/unlink/shm_open/shm_unlink call failed.
    #[error("{op} {name}: {source}")]
    Os {
        op: Op,
        name: String,
        #[source]
        source: io::Error,
    },
    /// The name could not be turned into a C string.
    #[error("{op} {name}: {source}")]
    Marshal {
        op: Op,
        name: String,
        #[source]
        source: NulError,
    },
}

pub type Result<T> = std::result::Result<T, ShmError>;

impl ShmError {
    pub(crate) fn os(op: Op, name: &str, source: io::Error) -> Self {
        ShmError::Os {
            op,
            name: name.to_string(),
            source,
        }
    }

    pub fn op(&self) -> Op {
        match self {
            ShmError::InvalidName { op, .. }
            | ShmError::Os { op, .. }
            | ShmError::Marshal { op, .. } => *op,
        }
    }

    /// The name as the caller supplied it, before normalization.
    pub fn name(&self) -> &str {
        match self {
            ShmError::InvalidName { name, .. }
            | ShmError::Os { name, .. }
            | ShmError::Marshal { name, .. } => name,
        }
    }

    /// errno of the failure. Invalid and unmarshalable names report `EINVAL`.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            ShmError::Os { source, .. } => source.raw_os_error(),
            ShmError::InvalidName { .. } | ShmError::Marshal { .. } => Some(libc::EINVAL),
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            ShmError::Os { source, .. } => source.kind(),
            ShmError::InvalidName { .. } | ShmError::Marshal { .. } => io::ErrorKind::InvalidInput,
        }
    }
}

impl From<ShmError> for io::Error {
    fn from(e: ShmError) -> Self {
        io::Error::new(e.kind(), e)
    }
}
