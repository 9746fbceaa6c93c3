//! Gallery settings.
//!
//! The generator takes no flags and reads no config file: every run uses the
//! compiled-in defaults below. They still live in one typed struct so that the
//! scanner and the page templates read them from a single place and tests can
//! vary them.
//!
//! ```text
//! document_title   = "Photo Gallery"
//! heading          = "My Photo Gallery"
//! page_file_name   = "index.html"
//! image_extensions = ["png", "jpg", "jpeg", "gif", "webp"]
//!
//! [zoom]
//! min_scale  = 0.5
//! max_scale  = 5.0
//! wheel_step = 0.001   # scale change per wheel delta unit
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings shared by the scan and generate stages.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// `<title>` of the root listing, and suffix of category page titles.
    pub document_title: String,
    /// Heading shown at the top of the root listing.
    pub heading: String,
    /// File name of every generated page (root and per category).
    pub page_file_name: String,
    /// Recognized image extensions, lower-case, without the leading dot.
    pub image_extensions: Vec<String>,
    /// Lightbox zoom behaviour.
    pub zoom: ZoomConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            document_title: "Photo Gallery".to_string(),
            heading: "My Photo Gallery".to_string(),
            page_file_name: "index.html".to_string(),
            image_extensions: ["png", "jpg", "jpeg", "gif", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            zoom: ZoomConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "image_extensions must not be empty".into(),
            ));
        }
        for ext in &self.image_extensions {
            if ext.is_empty() || ext.contains('.') || *ext != ext.to_lowercase() {
                return Err(ConfigError::Validation(format!(
                    "image extension {ext:?} must be lower-case and without dots"
                )));
            }
        }
        if self.page_file_name.is_empty()
            || self.page_file_name.contains(['/', '\\'])
            || self.page_file_name.starts_with('.')
        {
            return Err(ConfigError::Validation(format!(
                "page_file_name {:?} must be a plain file name",
                self.page_file_name
            )));
        }
        self.zoom.validate()
    }

    /// Whether `ext` (any case) is one of the recognized image extensions.
    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }
}

/// Lightbox zoom bounds and wheel sensitivity.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale change per unit of wheel `deltaY`.
    pub wheel_step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 5.0,
            wheel_step: 0.001,
        }
    }
}

impl ZoomConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_scale > 0.0) {
            return Err(ConfigError::Validation(
                "zoom.min_scale must be positive".into(),
            ));
        }
        if !(self.max_scale >= self.min_scale) || !self.max_scale.is_finite() {
            return Err(ConfigError::Validation(
                "zoom.max_scale must be finite and at least zoom.min_scale".into(),
            ));
        }
        if !(1.0 >= self.min_scale && 1.0 <= self.max_scale) {
            return Err(ConfigError::Validation(
                "zoom bounds must include the unzoomed scale 1.0".into(),
            ));
        }
        if !(self.wheel_step > 0.0) || !self.wheel_step.is_finite() {
            return Err(ConfigError::Validation(
                "zoom.wheel_step must be a positive number".into(),
            ));
        }
        Ok(())
    }
}
