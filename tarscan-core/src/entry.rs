//! Entry kinds.
//!
//! This module defines `EntryKind`, the decoded form of a ustar type flag.
//! Link targets live inside the variants that have one, so a regular file
//! can never carry a stray target.

use serde::Serialize;

/// Type flag for regular files (`'0'`). Pre-POSIX archives use NUL.
pub const REGULAR: u8 = b'0';
/// Legacy regular-file type flag.
pub const REGULAR_LEGACY: u8 = 0;
/// Type flag for hard links.
pub const HARDLINK: u8 = b'1';
/// Type flag for symbolic links.
pub const SYMLINK: u8 = b'2';
/// Type flag for character devices.
pub const CHAR_DEVICE: u8 = b'3';
/// Type flag for block devices.
pub const BLOCK_DEVICE: u8 = b'4';
/// Type flag for directories.
pub const DIRECTORY: u8 = b'5';
/// Type flag for FIFOs.
pub const FIFO: u8 = b'6';

/// What an archive entry is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file.
    #[default]
    Regular,
    /// Hard link to the given path.
    HardLink(String),
    /// Symbolic link to the given path.
    SymbolicLink(String),
    /// Character device.
    CharDevice,
    /// Block device.
    BlockDevice,
    /// Directory.
    Directory,
    /// Named pipe.
    Fifo,
    /// Any other type flag, kept raw.
    Other(u8),
}

impl EntryKind {
    /// Build a kind from a raw type flag.
    ///
    /// `link` is only consulted for the two link flags and is not evaluated
    /// otherwise.
    pub fn from_flag(flag: u8, link: impl FnOnce() -> String) -> Self {
        match flag {
            REGULAR | REGULAR_LEGACY => Self::Regular,
            HARDLINK => Self::HardLink(link()),
            SYMLINK => Self::SymbolicLink(link()),
            CHAR_DEVICE => Self::CharDevice,
            BLOCK_DEVICE => Self::BlockDevice,
            DIRECTORY => Self::Directory,
            FIFO => Self::Fifo,
            other => Self::Other(other),
        }
    }

    /// The ustar type flag for this kind. Regular files map to `'0'`.
    pub fn type_flag(&self) -> u8 {
        match self {
            Self::Regular => REGULAR,
            Self::HardLink(_) => HARDLINK,
            Self::SymbolicLink(_) => SYMLINK,
            Self::CharDevice => CHAR_DEVICE,
            Self::BlockDevice => BLOCK_DEVICE,
            Self::Directory => DIRECTORY,
            Self::Fifo => FIFO,
            Self::Other(flag) => *flag,
        }
    }

    /// Link target, for hard and symbolic links.
    pub fn link_target(&self) -> Option<&str> {
        match self {
            Self::HardLink(target) | Self::SymbolicLink(target) => Some(target),
            _ => None,
        }
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::Regular)
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Check if this is a hard or symbolic link.
    pub fn is_link(&self) -> bool {
        self.link_target().is_some()
    }

    /// Single character used in `ls -l` style listings.
    pub fn type_char(&self) -> char {
        match self {
            Self::Regular => '-',
            Self::HardLink(_) => 'h',
            Self::SymbolicLink(_) => 'l',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::Directory => 'd',
            Self::Fifo => 'p',
            Self::Other(_) => '?',
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "file"),
            Self::HardLink(target) => write!(f, "hard link to {}", target),
            Self::SymbolicLink(target) => write!(f, "symlink to {}", target),
            Self::CharDevice => write!(f, "character device"),
            Self::BlockDevice => write!(f, "block device"),
            Self::Directory => write!(f, "directory"),
            Self::Fifo => write!(f, "fifo"),
            Self::Other(flag) => write!(f, "unknown type {:?}", *flag as char),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        let none = || -> String { panic!("link target read for non-link") };
        assert_eq!(EntryKind::from_flag(b'0', none), EntryKind::Regular);
        assert_eq!(EntryKind::from_flag(0, none), EntryKind::Regular);
        assert_eq!(EntryKind::from_flag(b'5', none), EntryKind::Directory);
        assert_eq!(EntryKind::from_flag(b'3', none), EntryKind::CharDevice);
        assert_eq!(EntryKind::from_flag(b'4', none), EntryKind::BlockDevice);
        assert_eq!(EntryKind::from_flag(b'6', none), EntryKind::Fifo);
        assert_eq!(EntryKind::from_flag(b'7', none), EntryKind::Other(b'7'));
    }

    #[test]
    fn test_link_kinds_carry_target() {
        let kind = EntryKind::from_flag(b'2', || "target".to_string());
        assert_eq!(kind, EntryKind::SymbolicLink("target".into()));
        assert_eq!(kind.link_target(), Some("target"));
        assert!(kind.is_link());

        let kind = EntryKind::from_flag(b'1', || "other".to_string());
        assert_eq!(kind.link_target(), Some("other"));
        assert_eq!(kind.type_flag(), b'1');
    }

    #[test]
    fn test_type_flag_round_trip() {
        for flag in [b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'g', b'x'] {
            let kind = EntryKind::from_flag(flag, String::new);
            assert_eq!(kind.type_flag(), flag);
        }
    }

    #[test]
    fn test_predicates() {
        assert!(EntryKind::Regular.is_file());
        assert!(!EntryKind::Regular.is_link());
        assert!(EntryKind::Directory.is_dir());
        assert_eq!(EntryKind::Regular.link_target(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(EntryKind::Regular.to_string(), "file");
        assert_eq!(
            EntryKind::SymbolicLink("a".into()).to_string(),
            "symlink to a"
        );
        assert_eq!(EntryKind::Other(b'x').to_string(), "unknown type 'x'");
    }
}
