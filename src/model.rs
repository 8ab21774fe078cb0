//! Data structures describing one row of the generated listing.
//!
//! This module provides the [`Entry`] struct, a transient record of a
//! discovered filesystem node. Entries are rebuilt from the live
//! filesystem on every run and discarded once their row is rendered.

use std::time::SystemTime;

/// A single listed entity: a root-level file or a subdirectory that
/// carries its own index page.
#[derive(Debug, PartialEq)]
pub struct Entry {
    link: String,
    kind: EntryKind,
    modified: SystemTime,
}

/// Specialized data specific to the type of the [`Entry`].
#[derive(Debug, PartialEq)]
pub enum EntryKind {
    File { size: u64 },
    Directory,
}

impl Entry {
    pub fn file(link: String, size: u64, modified: SystemTime) -> Self {
        Entry {
            link,
            kind: EntryKind::File { size },
            modified,
        }
    }

    pub fn directory(link: String, modified: SystemTime) -> Self {
        Entry {
            link,
            kind: EntryKind::Directory,
            modified,
        }
    }

    /// Link target and display name, relative to the scanned root.
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}
