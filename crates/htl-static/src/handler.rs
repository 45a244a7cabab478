use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use htl_common::warning::{clear_warnings, warn_once};
use tracing::debug;
use walkdir::WalkDir;

use crate::{LoadError, Resource};

/// Serves a single file.
#[derive(Debug, Clone)]
pub enum Handler {
    /// Reload, and re-transform, the file on every request.
    Dev {
        /// The file to load.
        path: PathBuf,
    },
    /// Serve the resource loaded when the handler was built.
    Cached(Arc<Resource>),
}

impl Handler {
    /// Build the handler for `path`.
    ///
    /// In dev mode nothing is read until the first request. Otherwise the
    /// file is loaded and transformed now.
    ///
    /// # Errors
    ///
    /// Outside dev mode, returns the [`LoadError`] from loading the file.
    pub fn from_file(path: &Path, dev: bool) -> Result<Self, LoadError> {
        if dev {
            return Ok(Self::Dev {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::Cached(Arc::new(Resource::from_file(path)?)))
    }

    /// The resource to serve for the current request.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] from reloading a dev-mode file.
    pub fn resource(&self) -> Result<Arc<Resource>, LoadError> {
        match self {
            Self::Dev { path } => Resource::from_file(path).map(Arc::new),
            Self::Cached(resource) => Ok(Arc::clone(resource)),
        }
    }

    /// Build the HTTP response.
    ///
    /// A file that fails to load is reported once and answered with an
    /// empty 500 response. Once a dev-mode file loads again its warnings are
    /// forgotten, so a later breakage is reported even if the message repeats.
    #[must_use]
    pub fn respond(&self) -> Response {
        let component = self.warning_component();
        match self.resource() {
            Ok(resource) => {
                if matches!(self, Self::Dev { .. }) {
                    clear_warnings(&component);
                }
                (
                    [(header::CONTENT_TYPE, resource.content_type.clone())],
                    resource.content.clone(),
                )
                    .into_response()
            }
            Err(err) => {
                warn_once(&component, &err.to_string());
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    /// Warnings are grouped per dev-mode file.
    fn warning_component(&self) -> String {
        match self {
            Self::Dev { path } => format!("static {}", path.display()),
            Self::Cached(_) => "static".to_owned(),
        }
    }
}

/// URL path for `path` found while walking `dir`: the relative path with a
/// leading `/` and `/` separators.
///
/// Returns `None` for `dir` itself and for paths that are not valid UTF-8.
#[must_use]
pub fn route_for(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let mut route = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            route.push('/');
            route.push_str(part.to_str()?);
        }
    }
    if route.is_empty() { None } else { Some(route) }
}

/// Build one handler per file found under `dirs`, keyed by route.
///
/// Later directories win when two of them hold the same route.
///
/// # Errors
///
/// Returns a [`LoadError`] if a directory cannot be walked or, outside dev
/// mode, if any file fails to load.
pub fn handlers_from_dirs<P: AsRef<Path>>(
    dirs: &[P],
    dev: bool,
) -> Result<BTreeMap<String, Handler>, LoadError> {
    let mut handlers = BTreeMap::new();
    for dir in dirs {
        let dir = dir.as_ref();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(route) = route_for(dir, entry.path()) else {
                continue;
            };
            let handler = Handler::from_file(entry.path(), dev)?;
            debug!(%route, path = %entry.path().display(), "registered handler");
            let _ = handlers.insert(route, handler);
        }
    }
    Ok(handlers)
}
