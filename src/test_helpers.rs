//! Shared test utilities.
//!
//! Fixture setup plus lookup helpers over scan results (`Gallery`,
//! `Category`). Lookups panic with the available names on a miss so a failing
//! test says what it did find.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let gallery = scan(tmp.path(), &GalleryConfig::default()).unwrap();
//!
//! let beach = find_category(&gallery, "Beach");
//! assert_eq!(captions(beach), vec!["Sunset", "waves"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::{Category, Gallery};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// The fixture tree holds three categories (`Beach`, `Zoo`, `mountains`), a
/// hidden directory, a directory without images, and a stray root file.
/// Image files are placeholders: scanning only looks at names.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create `root/dir/file` with placeholder content, creating `dir` as needed.
pub fn add_image(root: &Path, dir: &str, file: &str) {
    let dir = root.join(dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(file), "fake image").unwrap();
}

// =========================================================================
// Gallery lookups
// =========================================================================

/// Find a category by directory name. Panics if not found.
pub fn find_category<'a>(gallery: &'a Gallery, directory_name: &str) -> &'a Category {
    gallery
        .categories
        .iter()
        .find(|c| c.directory_name == directory_name)
        .unwrap_or_else(|| {
            let names = category_names(gallery);
            panic!("category '{directory_name}' not found. Available: {names:?}")
        })
}

/// All category directory names in output order.
pub fn category_names(gallery: &Gallery) -> Vec<&str> {
    gallery
        .categories
        .iter()
        .map(|c| c.directory_name.as_str())
        .collect()
}

/// All image captions in category order.
pub fn captions(category: &Category) -> Vec<&str> {
    category.images.iter().map(|i| i.caption.as_str()).collect()
}

/// All image file names in category order.
pub fn file_names(category: &Category) -> Vec<&str> {
    category
        .images
        .iter()
        .map(|i| i.file_name.as_str())
        .collect()
}
