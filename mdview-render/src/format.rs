//! Format trait definition
//!
//! An output format decides what a rendered body becomes on the way out: a
//! complete page, the bare body, and so on. Rendering itself is shared and
//! happens before any format is involved.

use crate::document::DocumentMetadata;
use crate::render::Rendered;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Format for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn serialize(&self, rendered: &Rendered, _meta: &DocumentMetadata) -> String {
///         rendered.body().to_uppercase()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "fragment")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a format from an output file name.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a rendered body into the final output text
    fn serialize(&self, rendered: &Rendered, meta: &DocumentMetadata) -> String;
}
