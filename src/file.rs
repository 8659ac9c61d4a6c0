// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Owned handle returned by a successful open.

use std::fs::File;
use std::ops::{Deref, DerefMut};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, IntoRawFd, OwnedFd, RawFd};

/// An open shared memory object.
///
/// Owns the descriptor; it is closed when the handle (or the `File` taken
/// out of it) is dropped. Mapping, sizing and synchronization are up to the
/// caller.
#[derive(Debug)]
pub struct ShmFile {
    file: File,
    name: String,
}

impl ShmFile {
    /// Take ownership of `fd`.
    ///
    /// # Safety
    /// `fd` must be an open descriptor not owned by anything else.
    pub(crate) unsafe fn from_raw_fd(fd: RawFd, name: &str) -> Self {
        Self {
            file: File::from(OwnedFd::from_raw_fd(fd)),
            name: name.to_string(),
        }
    }

    /// The name passed to `open`, unmodified.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn into_file(self) -> File {
        self.file
    }

    pub fn into_parts(self) -> (File, String) {
        (self.file, self.name)
    }
}

impl Deref for ShmFile {
    type Target = File;

    fn deref(&self) -> &File {
        &self.file
    }
}

impl DerefMut for ShmFile {
    fn deref_mut(&mut self) -> &mut File {
        &mut self.file
    }
}

impl AsFd for ShmFile {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.file.as_fd()
    }
}

impl AsRawFd for ShmFile {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

impl IntoRawFd for ShmFile {
    fn into_raw_fd(self) -> RawFd {
        self.file.into_raw_fd()
    }
}

impl From<ShmFile> for File {
    fn from(f: ShmFile) -> File {
        f.file
    }
}

impl From<ShmFile> for OwnedFd {
    fn from(f: ShmFile) -> OwnedFd {
        f.file.into()
    }
}
