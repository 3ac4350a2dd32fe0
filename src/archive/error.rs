//! Error types for archive view operations.
//!
//! Every fallible operation on an [`ArchiveView`](super::ArchiveView)
//! returns [`Result<T>`]. Variants carry the archive path and entry name
//! involved, so a failure can be diagnosed without any surrounding context.

use std::io;
use std::path::PathBuf;

use zip::result::ZipError;

/// Convenience alias for archive view operations.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of opening, picking from, and rezipping an archive.
///
/// The first error aborts the operation in progress; there is no retry and
/// no partial-success reporting.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The source path is missing, unreadable, or not a valid zip archive.
    #[error("cannot open archive {}: {source}", .archive.display())]
    Open {
        archive: PathBuf,
        #[source]
        source: ZipError,
    },

    /// The requested base name is not in the index.
    #[error("file {name} not in zipfile {}", .archive.display())]
    NotFound { name: String, archive: PathBuf },

    /// An indexed entry could not be opened for reading.
    #[error("cannot open {name} inside {}: {source}", .archive.display())]
    OpenEntry {
        name: String,
        archive: PathBuf,
        #[source]
        source: ZipError,
    },

    /// The caller-supplied consumer failed while reading an entry.
    #[error("consumer failed on {name}: {source}")]
    Consumer {
        name: String,
        #[source]
        source: io::Error,
    },

    /// A rezip selection named an entry absent from the index.
    ///
    /// Raised during pre-validation, before the destination is touched.
    #[error("required file {name} is not in {}", .archive.display())]
    MissingEntry { name: String, archive: PathBuf },

    /// The rezip destination could not be opened for writing.
    #[error("cannot open destination zipfile {}: {source}", .dest.display())]
    Create {
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Byte transfer of a single entry failed mid-copy.
    ///
    /// The destination may be left partial; rezip is not atomic.
    #[error("cannot copy {name} into {}: {source}", .dest.display())]
    Copy {
        name: String,
        dest: PathBuf,
        #[source]
        source: ZipError,
    },

    /// Writing the destination archive's central directory failed.
    #[error("cannot finalize zipfile {}: {source}", .dest.display())]
    Finalize {
        dest: PathBuf,
        #[source]
        source: ZipError,
    },

    /// Flushing the finished destination file to disk failed.
    #[error("cannot close destination zipfile {}: {source}", .dest.display())]
    Close {
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}
