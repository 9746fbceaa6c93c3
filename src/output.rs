//! CLI output formatting.
//!
//! Output is information-first: every category and image is shown by its
//! position and display title, with the file it came from as an indented
//! `Source:` line. The listing reads as an inventory of what the gallery will
//! show, while still pointing back at the files.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Categories
//! 001 Beach (2 photos)
//!     Source: Beach/
//!     001 Sunset
//!         Source: 01.Sunset.jpg
//!     002 waves
//!         Source: waves.png
//!
//! Skipped
//!     empty/ (no images)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Generated Beach/index.html with 2 images.
//! Generated index.html with 1 categories.
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::generate::GenerateEvent;
use crate::scan::Gallery;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a category header: positional index, title and photo count.
///
/// ```text
/// 001 Beach (2 photos)
/// ```
fn category_header(index: usize, title: &str, count: usize) -> String {
    format!("{} {} ({} photos)", format_index(index), title, count)
}

/// Format an image line: captioned images show the caption, uncaptioned ones
/// the file name in parens.
///
/// ```text
/// 001 Sunset            // captioned
/// 002 (_.png)           // blank caption, filename is the identity
/// ```
fn image_line(index: usize, caption: &str, file_name: &str) -> String {
    if caption.trim().is_empty() {
        format!("{} ({})", format_index(index), file_name)
    } else {
        format!("{} {}", format_index(index), caption)
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the scanned gallery structure.
pub fn format_scan_output(gallery: &Gallery) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    if gallery.categories.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }

    for (i, category) in gallery.categories.iter().enumerate() {
        lines.push(category_header(
            i + 1,
            &category.display_title,
            category.image_count(),
        ));
        lines.push(format!("{}Source: {}/", indent(1), category.directory_name));

        for (j, image) in category.images.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                image_line(j + 1, &image.caption, &image.file_name)
            ));
            lines.push(format!("{}Source: {}", indent(2), image.file_name));
        }
    }

    if !gallery.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for name in &gallery.skipped {
            lines.push(format!("{}{}/ (no images)", indent(1), name));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(gallery: &Gallery) {
    for line in format_scan_output(gallery) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format a single page-written event.
pub fn format_generate_event(event: &GenerateEvent) -> String {
    match event {
        GenerateEvent::CategoryPage { path, image_count } => {
            format!("Generated {} with {} images.", path.display(), image_count)
        }
        GenerateEvent::IndexPage {
            path,
            category_count,
        } => format!(
            "Generated {} with {} categories.",
            path.display(),
            category_count
        ),
    }
}

/// Print a page-written event to stdout.
pub fn print_generate_event(event: &GenerateEvent) {
    println!("{}", format_generate_event(event));
}
