use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use super::error::{Error, Result};

/// Index metadata captured for one archived entry.
#[derive(Debug, Clone)]
pub struct EntryMeta {
    /// Full name as stored in the archive, directory prefix included.
    pub full_name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Position in the source archive's central directory.
    position: usize,
}

/// A read view over an opened zip archive, indexed by base filename.
///
/// The index is built once during [`open`](ArchiveView::open) and never
/// changes afterwards. Operations are driven linearly from a single owner:
/// open, any number of [`pick`](ArchiveView::pick) calls, optionally a
/// [`rezip`](ArchiveView::rezip), then [`close`](ArchiveView::close).
///
/// `pick` and `rezip` take `&mut self` because the underlying reader seeks;
/// neither mutates the index or any other observable state.
#[derive(Debug)]
pub struct ArchiveView {
    source: PathBuf,
    archive: ZipArchive<File>,
    index: HashMap<String, EntryMeta>,
}

impl ArchiveView {
    /// Opens the archive at `path` and indexes every non-directory entry
    /// under its base filename (last path component, directory prefix
    /// discarded).
    ///
    /// Directory markers are skipped entirely. When two entries collapse to
    /// the same base filename, the one later in the central directory wins.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let source = path.into();
        let file = File::open(&source).map_err(|e| Error::Open {
            archive: source.clone(),
            source: ZipError::Io(e),
        })?;
        let mut archive = ZipArchive::new(file).map_err(|e| Error::Open {
            archive: source.clone(),
            source: e,
        })?;

        let mut index = HashMap::with_capacity(archive.len());
        for position in 0..archive.len() {
            // Raw access: indexing must not decompress anything.
            let entry = archive.by_index_raw(position).map_err(|e| Error::Open {
                archive: source.clone(),
                source: e,
            })?;
            if entry.is_dir() {
                continue;
            }
            index.insert(
                base_name(entry.name()),
                EntryMeta {
                    full_name: entry.name().to_string(),
                    size: entry.size(),
                    compressed_size: entry.compressed_size(),
                    position,
                },
            );
        }
        log::debug!("indexed {} entries from {}", index.len(), source.display());

        Ok(Self {
            source,
            archive,
            index,
        })
    }

    /// Looks up `basename` and hands the consumer a readable stream over
    /// the entry's decompressed bytes.
    ///
    /// The stream is scoped to the call: it is released when `pick`
    /// returns, whether the consumer succeeds or fails. A consumer failure
    /// is surfaced as [`Error::Consumer`] with the entry name attached.
    pub fn pick<F>(&mut self, basename: &str, consumer: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Read) -> io::Result<()>,
    {
        let Some(meta) = self.index.get(basename) else {
            return Err(Error::NotFound {
                name: basename.to_string(),
                archive: self.source.clone(),
            });
        };
        let mut entry =
            self.archive
                .by_index(meta.position)
                .map_err(|e| Error::OpenEntry {
                    name: basename.to_string(),
                    archive: self.source.clone(),
                    source: e,
                })?;
        consumer(&mut entry).map_err(|e| Error::Consumer {
            name: basename.to_string(),
            source: e,
        })
    }

    /// Writes the named entries into a fresh archive at `dest`, in the
    /// order given, each stored under its base filename.
    ///
    /// Every name is validated against the index before any output I/O; the
    /// first missing name aborts with the destination untouched. After
    /// validation the destination is created or truncated, so a failure
    /// mid-copy leaves a partial file behind.
    pub fn rezip<P, S>(&mut self, dest: P, basenames: &[S]) -> Result<()>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let dest = dest.as_ref();
        for basename in basenames {
            if !self.index.contains_key(basename.as_ref()) {
                return Err(Error::MissingEntry {
                    name: basename.as_ref().to_string(),
                    archive: self.source.clone(),
                });
            }
        }

        // TODO: write to a temp file and rename it over dest so a failed
        // copy cannot leave a truncated archive at the destination path.
        let file = File::create(dest).map_err(|e| Error::Create {
            dest: dest.to_path_buf(),
            source: e,
        })?;
        let mut writer = ZipWriter::new(file);

        for basename in basenames {
            let basename = basename.as_ref();
            let position = self.index[basename].position;
            let mut entry = self
                .archive
                .by_index(position)
                .map_err(|e| Error::OpenEntry {
                    name: basename.to_string(),
                    archive: self.source.clone(),
                    source: e,
                })?;
            writer
                .start_file(basename, SimpleFileOptions::default())
                .map_err(|e| Error::Copy {
                    name: basename.to_string(),
                    dest: dest.to_path_buf(),
                    source: e,
                })?;
            io::copy(&mut entry, &mut writer).map_err(|e| Error::Copy {
                name: basename.to_string(),
                dest: dest.to_path_buf(),
                source: ZipError::Io(e),
            })?;
        }

        let file = writer.finish().map_err(|e| Error::Finalize {
            dest: dest.to_path_buf(),
            source: e,
        })?;
        file.sync_all().map_err(|e| Error::Close {
            dest: dest.to_path_buf(),
            source: e,
        })?;
        log::debug!(
            "rezipped {} entries into {}",
            basenames.len(),
            dest.display()
        );

        Ok(())
    }

    /// Releases the archive handle.
    ///
    /// Dropping the view has the same effect; taking `self` by value makes
    /// the hand-off explicit and rules out any use after close.
    pub fn close(self) {}

    /// Path the archive was opened from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether `basename` is in the index.
    pub fn contains(&self, basename: &str) -> bool {
        self.index.contains_key(basename)
    }

    /// Indexed base names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Metadata for an indexed entry.
    pub fn meta(&self, basename: &str) -> Option<&EntryMeta> {
        self.index.get(basename)
    }
}

/// Last path component of an archived name, directory prefix discarded.
fn base_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::base_name;

    #[test]
    fn base_name_strips_directory_prefix() {
        assert_eq!(base_name("dir/test1"), "test1");
        assert_eq!(base_name("a/b/c/deep.txt"), "deep.txt");
        assert_eq!(base_name("plain"), "plain");
    }
}
