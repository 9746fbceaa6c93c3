//! # dir-gallery
//!
//! Turns a folder of photo folders into a static HTML gallery. Run it in the
//! gallery root: every visible subdirectory holding images becomes a category
//! with its own page, and the root gets a listing of all categories.
//!
//! # Architecture: Two Stages
//!
//! ```text
//! 1. Scan      ./          →  Gallery          (filesystem → structured data)
//! 2. Generate  Gallery     →  **/index.html    (structured data → pages)
//! ```
//!
//! Scanning never writes and generating never reads the photo directories, so
//! each stage can be tested on its own: renderers take plain structs, and the
//! scanner only needs a directory of placeholder files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists categories and their images, one level deep |
//! | [`generate`] | Stage 2 — renders the root listing and category pages using Maud |
//! | [`naming`] | Captions and titles derived from file and directory names |
//! | [`config`] | Compiled-in settings shared by both stages |
//! | [`output`] | CLI progress formatting |
//!
//! # Design Decisions
//!
//! ## Pages Live Next to the Photos
//!
//! Category pages are written into the category directory and reference
//! images by bare file name, so the whole tree can be copied to any static
//! host or opened straight from disk.
//!
//! ## Self-Contained Pages
//!
//! CSS and the lightbox script are compiled into the binary and inlined into
//! each page. There is nothing else to deploy and no asset directory to keep
//! in sync.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Captions come
//! straight from file names, and Maud escapes every interpolated value, so a
//! file called `<b>.jpg` shows up as text instead of markup.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
