//! # rezip
//!
//! A zip utility that indexes archive entries by base filename, streams
//! picked entries to a caller-supplied sink, and rewrites a filtered subset
//! of entries into a new archive.
//!
//! The library surface is [`ArchiveView`]: open an archive, pick entries by
//! base name regardless of where they sit in the archive's directory tree,
//! and rezip a selection into a new flat archive. The companion binary
//! wraps the same surface in a small command-line tool.
//!
//! ## Example
//!
//! ```no_run
//! use rezip::ArchiveView;
//!
//! fn main() -> rezip::Result<()> {
//!     let mut view = ArchiveView::open("archive.zip")?;
//!
//!     // Stream one entry to stdout.
//!     view.pick("notes.txt", |reader| {
//!         std::io::copy(reader, &mut std::io::stdout()).map(|_| ())
//!     })?;
//!
//!     // Write a filtered subset into a new archive.
//!     view.rezip("subset.zip", &["notes.txt", "todo.md"])?;
//!
//!     view.close();
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;

pub use archive::{ArchiveView, EntryMeta, Error, Result};
pub use cli::Cli;
