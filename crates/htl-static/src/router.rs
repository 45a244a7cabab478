use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tracing::{error, info};

use crate::Handler;

/// Handlers by route, plus the route also served at `/`.
#[derive(Debug)]
struct Routes {
    handlers: BTreeMap<String, Handler>,
    index: String,
}

impl Routes {
    /// The handler for a percent-decoded request path.
    fn lookup(&self, path: &str) -> Option<&Handler> {
        let route = if path == "/" { self.index.as_str() } else { path };
        self.handlers.get(route)
    }
}

/// Route every handler under its path, and the `index` handler also at `/`.
///
/// Request paths are percent-decoded before lookup, so files whose names
/// hold spaces or non-ASCII characters are reachable.
#[must_use]
pub fn router(handlers: BTreeMap<String, Handler>, index: &str) -> Router {
    for route in handlers.keys() {
        info!(%route, "registered path");
    }
    let routes = Arc::new(Routes {
        handlers,
        index: index.to_owned(),
    });
    Router::new().fallback(serve).with_state(routes)
}

async fn serve(State(routes): State<Arc<Routes>>, uri: Uri) -> Response {
    let Ok(path) = urlencoding::decode(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match routes.lookup(&path) {
        Some(handler) => respond(handler.clone()).await,
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Dev-mode handlers read and parse the file, so they run on the blocking pool.
async fn respond(handler: Handler) -> Response {
    if let Handler::Cached(_) = handler {
        return handler.respond();
    }
    tokio::task::spawn_blocking(move || handler.respond())
        .await
        .unwrap_or_else(|err| {
            error!(%err, "dev handler failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}
