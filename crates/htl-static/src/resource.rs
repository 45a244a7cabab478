use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use axum::body::Bytes;
use htl_dom::render;
use htl_parser::ParseError;
use mime::Mime;
use tracing::debug;

use crate::LoadError;

/// A servable file: its content type and the bytes to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// Response body.
    pub content: Bytes,
}

/// Rewrites a freshly read resource in place.
type Transformer = fn(&mut Resource) -> Result<(), ParseError>;

/// Transformers keyed by file extension. Matching is exact.
const TRANSFORMERS: &[(&str, Transformer)] = &[("htl", htl_to_html)];

fn transformer_for(extension: &str) -> Option<Transformer> {
    TRANSFORMERS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|&(_, transform)| transform)
}

/// Parse an htl source and replace it with the rendered HTML.
fn htl_to_html(resource: &mut Resource) -> Result<(), ParseError> {
    let tree = {
        let source = String::from_utf8_lossy(&resource.content);
        htl_parser::parse(&source)?
    };
    resource.content_type = mime::TEXT_HTML_UTF_8.to_string();
    resource.content = Bytes::from(render(tree.as_ref()));
    Ok(())
}

/// Content type for a file extension (without the dot).
///
/// `htl` files are served as HTML since they are transformed on load.
/// Unknown extensions map to `application/octet-stream`.
#[must_use]
pub fn content_type_for_extension(extension: &str) -> Mime {
    match extension.to_ascii_lowercase().as_str() {
        "htl" | "html" | "htm" => mime::TEXT_HTML_UTF_8,
        "css" => mime::TEXT_CSS_UTF_8,
        "js" | "mjs" => mime::APPLICATION_JAVASCRIPT_UTF_8,
        "json" => mime::APPLICATION_JSON,
        "txt" => mime::TEXT_PLAIN_UTF_8,
        "xml" => mime::TEXT_XML,
        "csv" => mime::TEXT_CSV_UTF_8,
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        "bmp" => mime::IMAGE_BMP,
        "svg" => mime::IMAGE_SVG,
        "woff" => mime::FONT_WOFF,
        "woff2" => mime::FONT_WOFF2,
        "pdf" => mime::APPLICATION_PDF,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

impl Resource {
    /// Read `path`, pick its content type from the extension and apply the
    /// matching transformer, if any.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Transform`] if an `.htl` file fails to parse.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();

        let mut resource = Self {
            content_type: content_type_for_extension(extension).to_string(),
            content: Bytes::from(content),
        };
        if let Some(transform) = transformer_for(extension) {
            transform(&mut resource).map_err(|source| LoadError::Transform {
                path: path.to_path_buf(),
                source,
            })?;
        }

        debug!(
            path = %path.display(),
            content_type = %resource.content_type,
            "loaded resource"
        );
        Ok(resource)
    }
}
