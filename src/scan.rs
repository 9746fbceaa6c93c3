//! Filesystem scanning.
//!
//! Stage 1 of the generator. Reads the gallery root one level deep and maps
//! it to a [`Gallery`]: the ordered list of categories and their images that
//! the generate stage renders.
//!
//! ## Directory Structure
//!
//! ```text
//! photos/                  # Gallery root (the working directory)
//! ├── index.html           # Generated root listing
//! ├── readme.txt           # Plain files at the root are ignored
//! ├── .hidden/             # Hidden directories are never categories
//! │   └── x.png
//! ├── Beach/               # Category
//! │   ├── index.html       # Generated category page
//! │   ├── 01.Sunset.jpg    # Image, captioned "Sunset"
//! │   ├── waves.png        # Image, captioned "waves"
//! │   └── raw/             # Nested directories are not scanned
//! └── empty/               # No images: skipped, no page generated
//!     └── notes.txt
//! ```
//!
//! ## Ordering
//!
//! Categories and images are sorted by their raw names (byte order, so
//! case-sensitive: `A` < `B` < `a`). Output is deterministic for an unchanged
//! tree.
//!
//! ## Recognized Images
//!
//! A file is an image when its name ends in `.<ext>` for one of the configured
//! extensions, compared case-insensitively. Only regular files (or symlinks to
//! them) count; a directory named `holiday.jpg` is ignored.

use crate::config::GalleryConfig;
use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Gallery root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Cannot read directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Scan result: every category that will get a page, in output order.
#[derive(Debug)]
pub struct Gallery {
    pub root: PathBuf,
    pub categories: Vec<Category>,
    /// Visible directories that held no recognized images, in name order.
    pub skipped: Vec<String>,
}

/// One root-level directory with at least one image.
#[derive(Debug)]
pub struct Category {
    /// Directory name exactly as found on disk (lossy if not UTF-8).
    pub directory_name: String,
    /// Title for the root listing and page heading, e.g. `beach` → "Beach".
    pub display_title: String,
    /// Percent-encoded directory name for use in links.
    pub href: String,
    /// Location on disk; the category page is written here.
    pub path: PathBuf,
    pub images: Vec<ImageEntry>,
}

impl Category {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// A recognized image inside a category directory.
#[derive(Debug)]
pub struct ImageEntry {
    pub file_name: String,
    /// Caption derived from the file name, e.g. `01.Sunset.jpg` → "Sunset".
    pub caption: String,
    /// Percent-encoded file name, safe inside `src`/`href` attributes.
    pub href: String,
}

pub fn scan(root: &Path, config: &GalleryConfig) -> Result<Gallery, ScanError> {
    if !fs::metadata(root)?.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut categories = Vec::new();
    let mut skipped = Vec::new();

    for entry in direct_children(root) {
        let entry = entry?;
        if !is_category_candidate(&entry) {
            continue;
        }

        let directory_name = entry.file_name().to_string_lossy().into_owned();
        let images = collect_images(entry.path(), config)?;
        if images.is_empty() {
            skipped.push(directory_name);
            continue;
        }

        categories.push(Category {
            display_title: naming::capitalize(&directory_name),
            href: encode_segment(&entry),
            path: entry.into_path(),
            directory_name,
            images,
        });
    }

    Ok(Gallery {
        root: root.to_path_buf(),
        categories,
        skipped,
    })
}

/// Direct children of `path`, sorted by name. Never descends further.
fn direct_children(path: &Path) -> walkdir::IntoIter {
    WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
}

fn is_category_candidate(entry: &DirEntry) -> bool {
    // Path::is_dir follows symlinks and treats dangling ones as non-directories
    !entry.file_name().to_string_lossy().starts_with('.') && entry.path().is_dir()
}

fn collect_images(dir: &Path, config: &GalleryConfig) -> Result<Vec<ImageEntry>, ScanError> {
    let mut images = Vec::new();
    for entry in direct_children(dir) {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_image(&entry, &file_name, config) {
            continue;
        }
        images.push(ImageEntry {
            caption: naming::display_title(&file_name),
            href: encode_segment(&entry),
            file_name,
        });
    }
    Ok(images)
}

fn is_image(entry: &DirEntry, file_name: &str, config: &GalleryConfig) -> bool {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    config.is_image_extension(ext) && !entry.path().is_dir()
}

/// Percent-encode a single path segment from its raw bytes.
///
/// Everything outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) is escaped,
/// so spaces, `#`, `?`, `%` and non-ASCII names survive a round trip through
/// an HTML attribute and the browser's URL parser.
fn encode_segment(entry: &DirEntry) -> String {
    urlencoding::encode_binary(entry.file_name().as_encoded_bytes()).into_owned()
}
