//! HTML page generation.
//!
//! Stage 2 of the generator. Takes the scanned [`Gallery`] and writes the
//! pages next to the photos they show.
//!
//! ## Generated Pages
//!
//! - **Root listing** (`index.html`): one card per category with a folder
//!   glyph, the category title and its photo count.
//! - **Category pages** (`{category}/index.html`): a responsive grid of photo
//!   cards, a link back to the root listing, and a lightbox viewer.
//!
//! Existing pages are overwritten. Category pages are written first, the root
//! listing last.
//!
//! ## Lightbox
//!
//! Clicking a photo card opens the full image in an overlay. The mouse wheel
//! zooms within the configured bounds, dragging pans, and the × control, a
//! click on the backdrop or Escape closes it. The script is a fixed asset;
//! the zoom bounds reach it through `data-*` attributes on `#lightbox`.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into every page, so
//! each page is self-contained:
//! - `static/index.css`: root listing styles
//! - `static/gallery.css`: category grid and lightbox styles
//! - `static/lightbox.js`: zoom/pan viewer
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Titles and captions come from file names, so automatic escaping matters.

use crate::config::GalleryConfig;
use crate::scan::{Category, Gallery};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress notification, one per page written.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    CategoryPage {
        /// Page path relative to the gallery root, e.g. `Beach/index.html`.
        path: PathBuf,
        image_count: usize,
    },
    IndexPage {
        path: PathBuf,
        category_count: usize,
    },
}

const INDEX_CSS: &str = include_str!("../static/index.css");
const GALLERY_CSS: &str = include_str!("../static/gallery.css");
const LIGHTBOX_JS: &str = include_str!("../static/lightbox.js");

const FOLDER_GLYPH: &str = "\u{1F4C1}";

/// Write every category page and then the root listing.
///
/// `on_event` is called after each page is written. The first failed write
/// aborts the run; pages written before it stay on disk.
pub fn generate<F>(
    gallery: &Gallery,
    config: &GalleryConfig,
    mut on_event: F,
) -> Result<(), GenerateError>
where
    F: FnMut(&GenerateEvent),
{
    for category in &gallery.categories {
        let page = render_category_page(category, config);
        write_page(&category.path.join(&config.page_file_name), page)?;
        on_event(&GenerateEvent::CategoryPage {
            path: Path::new(&category.directory_name).join(&config.page_file_name),
            image_count: category.image_count(),
        });
    }

    let index = render_index(gallery, config);
    write_page(&gallery.root.join(&config.page_file_name), index)?;
    on_event(&GenerateEvent::IndexPage {
        path: PathBuf::from(&config.page_file_name),
        category_count: gallery.categories.len(),
    });

    Ok(())
}

fn write_page(path: &Path, page: Markup) -> Result<(), GenerateError> {
    fs::write(path, page.into_string()).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the overlay viewer and its script.
fn lightbox(config: &GalleryConfig) -> Markup {
    let zoom = &config.zoom;
    html! {
        div id="lightbox" class="lightbox"
            data-min-scale=(zoom.min_scale)
            data-max-scale=(zoom.max_scale)
            data-wheel-step=(zoom.wheel_step) {
            span class="close" role="button" aria-label="Close" { "\u{00D7}" }
            img class="lightbox-content" id="lightbox-img" alt="";
        }
        script { (PreEscaped(LIGHTBOX_JS)) }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the root listing with one card per category
fn render_index(gallery: &Gallery, config: &GalleryConfig) -> Markup {
    let content = html! {
        header {
            h1 { (config.heading) }
        }
        div.container {
            @for category in &gallery.categories {
                a.card href={ (category.href) "/" (config.page_file_name) } {
                    div.card-content {
                        span.icon { (FOLDER_GLYPH) }
                        h2 { (category.display_title) }
                        p { (category.image_count()) " photos" }
                    }
                }
            }
        }
    };

    base_document(&config.document_title, INDEX_CSS, content)
}

/// Renders a category page with its photo grid and the lightbox
fn render_category_page(category: &Category, config: &GalleryConfig) -> Markup {
    let page_title = format!("{} - {}", category.display_title, config.document_title);

    let content = html! {
        header {
            h1 { (category.display_title) }
            a.back-link href={ "../" (config.page_file_name) } { "\u{2190} Back to Gallery" }
        }
        div.gallery {
            @for image in &category.images {
                div.photo-card {
                    img src=(image.href) alt=(image.caption) loading="lazy";
                    div.caption { (image.caption) }
                }
            }
        }
        (lightbox(config))
    };

    base_document(&page_title, GALLERY_CSS, content)
}

// ============================================================================
// Tests
// ============================================================================
