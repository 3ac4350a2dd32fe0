//! Zip archive indexing and selective rewrite.
//!
//! This module provides [`ArchiveView`], a handle over an opened zip
//! archive whose entries are indexed by base filename: the last path
//! component of each archived name, with any directory prefix discarded.
//! Directory markers are never indexed.
//!
//! ## Lifecycle
//!
//! Control flow over a view is linear:
//!
//! 1. [`ArchiveView::open`] reads the central directory once and builds the
//!    index.
//! 2. [`ArchiveView::pick`] streams a single entry's decompressed bytes to
//!    a caller-supplied consumer, any number of times, in any order.
//! 3. [`ArchiveView::rezip`] writes a selection of entries into a new
//!    archive in caller-specified order, named by base filename.
//! 4. [`ArchiveView::close`] releases the handle.
//!
//! ## Limitations
//!
//! - Entries with colliding base filenames shadow each other; the last one
//!   in the central directory wins.
//! - `rezip` is not atomic: a failure mid-write leaves a partial file at
//!   the destination.
//! - Single-threaded, blocking I/O only.

mod error;
mod view;

pub use error::{Error, Result};
pub use view::{ArchiveView, EntryMeta};
