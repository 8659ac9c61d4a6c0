// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Portable permission word for shm objects.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Permission bits for a shared memory object.
///
/// The low nine bits are the usual rwx permissions. Setuid, setgid and
/// sticky are kept in their own high bits so they survive independently of
/// the permission mask; [`Mode::native`] moves them to the host's
/// `S_ISUID` / `S_ISGID` / `S_ISVTX` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mode(u32);

impl Mode {
    pub const SETUID: Mode = Mode(1 << 23);
    pub const SETGID: Mode = Mode(1 << 22);
    pub const STICKY: Mode = Mode(1 << 20);

    /// Mask of the rwx permission bits.
    pub const PERM_MASK: u32 = 0o777;

    /// Build a mode from raw portable bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Build a mode from rwx bits only; anything above 0o777 is dropped.
    pub const fn from_perm(perm: u32) -> Self {
        Self(perm & Self::PERM_MASK)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The rwx permission bits.
    pub const fn perm(self) -> u32 {
        self.0 & Self::PERM_MASK
    }

    pub const fn contains(self, other: Mode) -> bool {
        self.0 & other.0 == other.0
    }

    /// Native `mode_t` word: permission bits plus translated special bits.
    #[cfg(unix)]
    pub fn native(self) -> libc::mode_t {
        let mut m = self.perm() as libc::mode_t;
        if self.contains(Self::SETUID) {
            m |= libc::S_ISUID;
        }
        if self.contains(Self::SETGID) {
            m |= libc::S_ISGID;
        }
        if self.contains(Self::STICKY) {
            m |= libc::S_ISVTX;
        }
        m
    }
}

impl From<u32> for Mode {
    fn from(perm: u32) -> Self {
        Self::from_perm(perm)
    }
}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mode {
    fn bitor_assign(&mut self, rhs: Mode) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let special = [(Mode::SETUID, 'u'), (Mode::SETGID, 'g'), (Mode::STICKY, 't')];
        for (flag, c) in special {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        write!(f, "{:04o}", self.perm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_perm_masks_high_bits() {
        assert_eq!(Mode::from(0o4755).perm(), 0o755);
        assert!(!Mode::from(0o4755).contains(Mode::SETUID));
    }

    #[test]
    fn special_bits_do_not_overlap_perm() {
        for flag in [Mode::SETUID, Mode::SETGID, Mode::STICKY] {
            assert_eq!(flag.perm(), 0);
        }
    }

    #[test]
    fn native_plain_perm() {
        assert_eq!(Mode::from(0o600).native(), 0o600);
    }

    #[test]
    fn native_translates_special_bits() {
        let m = Mode::from(0o640) | Mode::SETUID;
        assert_eq!(m.native(), 0o640 | libc::S_ISUID);

        let m = Mode::from(0o700) | Mode::SETGID | Mode::STICKY;
        assert_eq!(m.native(), 0o700 | libc::S_ISGID | libc::S_ISVTX);
    }

    #[test]
    fn display() {
        assert_eq!((Mode::from(0o600) | Mode::SETUID).to_string(), "u0600");
        assert_eq!(Mode::default().to_string(), "0000");
    }
}
