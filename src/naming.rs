//! Display names derived from file and directory names.
//!
//! Two rules live here, and they are deliberately different:
//!
//! - [`display_title`] turns an image filename into a caption. The extension
//!   is dropped, `_` and `-` become spaces, and a leading numeric ordinal
//!   (`01.`) is removed so photographers can order files without the number
//!   showing up on the page:
//!   - `01.Sunset_Beach.jpg` → "Sunset Beach"
//!   - `my-photo.png` → "my photo"
//!   - `vacation` → "vacation"
//! - [`capitalize`] turns a category directory name into the title shown on
//!   the root listing: `beach/` → "Beach".

/// Split a name into its stem and extension at the last `.`.
///
/// Leading dots belong to the stem, so hidden-style names have no extension.
///
/// - `"01.Sunset.jpg"` → `("01.Sunset", Some("jpg"))`
/// - `"vacation"` → `("vacation", None)`
/// - `".hidden"` → `(".hidden", None)`
/// - `"photo."` → `("photo", Some(""))`
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(pos) => {
            let dot = leading + pos;
            (&name[..dot], Some(&name[dot + 1..]))
        }
        None => (name, None),
    }
}

/// Convert a filename into a human-readable caption.
///
/// The ordinal prefix is only stripped when it is made of ASCII digits and
/// something other than whitespace follows the first `.`. A name such as
/// `01..jpg` therefore keeps its number (`"01."`) instead of collapsing into
/// an empty caption. Only the first `.`-delimited token is considered, so
/// `01.Sunset.Beach.jpg` becomes "Sunset.Beach".
pub fn display_title(name: &str) -> String {
    let (stem, _) = split_extension(name);
    let spaced = stem.replace(['_', '-'], " ");

    if let Some((prefix, rest)) = spaced.split_once('.')
        && is_ordinal(prefix)
    {
        let rest = rest.trim();
        if !rest.is_empty() {
            return rest.to_string();
        }
    }
    spaced
}

/// Upper-case the first character and lower-case the rest.
///
/// Used for category titles on the root listing: `"beach"` → "Beach",
/// `"NYC"` → "Nyc".
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_ordinal(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit())
}
