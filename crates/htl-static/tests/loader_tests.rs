//! Integration tests for resource loading, handlers and routing.

use std::fs;
use std::path::Path;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use htl_static::{Handler, LoadError, Resource, handlers_from_dirs, router};
use tempfile::TempDir;
use tower::ServiceExt;

/// Helper to write a file (creating parent directories) under `dir`.
fn write_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Helper to issue a GET and return status, content type and body.
async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

// ========== Resource ==========

#[test]
fn test_htl_file_is_rendered() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "index.htl", "(html (body (p :class x \"hi & bye\")))");

    let resource = Resource::from_file(&temp.path().join("index.htl")).unwrap();
    assert_eq!(resource.content_type, "text/html; charset=utf-8");
    assert_eq!(
        &resource.content[..],
        b"<html><body><p class=\"x\">hi &amp; bye</p></body></html>"
    );
}

#[test]
fn test_other_files_are_served_raw() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "site.css", "p { color: red }");

    let resource = Resource::from_file(&temp.path().join("site.css")).unwrap();
    assert_eq!(resource.content_type, "text/css; charset=utf-8");
    assert_eq!(&resource.content[..], b"p { color: red }");
}

#[test]
fn test_broken_htl_is_a_transform_error() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "bad.htl", "(a (b)");

    let err = Resource::from_file(&temp.path().join("bad.htl")).unwrap_err();
    assert!(matches!(err, LoadError::Transform { .. }));
    assert!(err.to_string().contains("closing parens are missing"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let err = Resource::from_file(&temp.path().join("nope.htl")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

// ========== Handlers ==========

#[test]
fn test_handlers_are_keyed_by_route() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "index.htl", "(p)");
    write_file(temp.path(), "css/site.css", "");

    let handlers = handlers_from_dirs(&[temp.path()], false).unwrap();
    let routes: Vec<&str> = handlers.keys().map(String::as_str).collect();
    assert_eq!(routes, ["/css/site.css", "/index.htl"]);
}

#[test]
fn test_later_directories_win() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_file(first.path(), "a.txt", "first");
    write_file(second.path(), "a.txt", "second");

    let handlers = handlers_from_dirs(&[first.path(), second.path()], false).unwrap();
    let resource = handlers["/a.txt"].resource().unwrap();
    assert_eq!(&resource.content[..], b"second");
}

#[test]
fn test_cached_mode_fails_at_startup_on_broken_htl() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "bad.htl", ")");

    let err = handlers_from_dirs(&[temp.path()], false).unwrap_err();
    assert!(matches!(err, LoadError::Transform { .. }));
}

#[test]
fn test_dev_mode_defers_loading() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "bad.htl", ")");

    let handlers = handlers_from_dirs(&[temp.path()], true).unwrap();
    assert!(matches!(handlers["/bad.htl"], Handler::Dev { .. }));
    assert!(handlers["/bad.htl"].resource().is_err());
}

#[test]
fn test_missing_directory_is_a_walk_error() {
    let temp = TempDir::new().unwrap();
    let err = handlers_from_dirs(&[temp.path().join("absent")], false).unwrap_err();
    assert!(matches!(err, LoadError::Walk(_)));
}

#[test]
fn test_cached_handler_ignores_later_edits() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("page.htl");
    write_file(temp.path(), "page.htl", "(p one)");

    let handler = Handler::from_file(&path, false).unwrap();
    write_file(temp.path(), "page.htl", "(p two)");
    assert_eq!(&handler.resource().unwrap().content[..], b"<p>one</p>");
}

// ========== Router ==========

#[tokio::test]
async fn test_router_serves_index_at_root() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "index.htl", "(h1 \"Hello\")");
    write_file(temp.path(), "robots.txt", "ok");

    let app = router(handlers_from_dirs(&[temp.path()], false).unwrap(), "/index.htl");

    let (status, content_type, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert_eq!(body, "<h1>Hello</h1>");

    let (status, _, body) = get(app.clone(), "/index.htl").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>Hello</h1>");

    let (status, content_type, body) = get(app.clone(), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, "ok");

    let (status, _, _) = get(app, "/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dev_router_reloads_and_survives_broken_files() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "page.htl", "(p one)");

    let app = router(handlers_from_dirs(&[temp.path()], true).unwrap(), "/index.htl");

    let (_, _, body) = get(app.clone(), "/page.htl").await;
    assert_eq!(body, "<p>one</p>");

    write_file(temp.path(), "page.htl", "(p two)");
    let (_, _, body) = get(app.clone(), "/page.htl").await;
    assert_eq!(body, "<p>two</p>");

    write_file(temp.path(), "page.htl", "(p");
    let (status, _, body) = get(app.clone(), "/page.htl").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());

    let (status, _, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_router_decodes_request_paths() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a b.txt", "spaced");
    write_file(temp.path(), "안.txt", "hangul");
    write_file(temp.path(), "{id}.htl", "(p id)");

    let app = router(handlers_from_dirs(&[temp.path()], false).unwrap(), "/index.htl");

    let (status, _, body) = get(app.clone(), "/a%20b.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "spaced");

    let (status, _, body) = get(app.clone(), "/%EC%95%88.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "hangul");

    let (status, _, body) = get(app.clone(), "/%7Bid%7D.htl").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<p>id</p>");

    let (status, _, _) = get(app, "/%FF.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
