//! Static file resolution and response construction.
//!
//! # Responsibilities
//! - Resolve request paths against the serve root, confined to it
//! - Serve files with content types inferred from extensions
//! - Fall back to `index.html` for directories, or render a listing
//!
//! # Design Decisions
//! - Path segments are percent-decoded, then any `..` segment rejects the
//!   whole request; resolution never escapes the root
//! - File bodies are streamed, never buffered whole
//! - Only GET and HEAD are meaningful for a static tree; everything else
//!   is 405

use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use tokio::fs::{self, File};
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::http::server::AppState;

const INDEX_FILE: &str = "index.html";

/// Fallback handler resolving every request against the serve root.
pub async fn serve(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method();
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
            "Method Not Allowed",
        )
            .into_response();
    }
    let head_only = method == Method::HEAD;
    let raw_path = request.uri().path();

    let Some(relative) = sanitize_request_path(raw_path) else {
        debug!(path = raw_path, "rejected unresolvable path");
        return not_found();
    };

    let resolved = state.root.join(relative);
    match fs::metadata(&resolved).await {
        Ok(meta) if meta.is_dir() => serve_directory(&resolved, raw_path, head_only).await,
        Ok(meta) => serve_file(&resolved, meta.len(), head_only).await,
        Err(_) => not_found(),
    }
}

/// Decode and normalise a request path into a root-relative [`PathBuf`].
///
/// Returns `None` for anything that could step outside the root: `..`
/// segments, embedded NUL, or backslashes.
fn sanitize_request_path(raw: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let mut relative = PathBuf::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            _ if segment.contains(['\\', '\0']) => return None,
            _ => relative.push(segment),
        }
    }
    Some(relative)
}

async fn serve_directory(dir: &Path, raw_path: &str, head_only: bool) -> Response {
    let index = dir.join(INDEX_FILE);
    if let Ok(meta) = fs::metadata(&index).await {
        if meta.is_file() {
            return serve_file(&index, meta.len(), head_only).await;
        }
    }
    directory_listing(dir, raw_path, head_only).await
}

async fn serve_file(path: &Path, len: u64, head_only: bool) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let body = if head_only {
        Body::empty()
    } else {
        match File::open(path).await {
            Ok(file) => Body::from_stream(ReaderStream::new(file)),
            // Raced with deletion between metadata and open.
            Err(_) => return not_found(),
        }
    };

    (
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CONTENT_LENGTH, len.to_string()),
        ],
        body,
    )
        .into_response()
}

async fn directory_listing(dir: &Path, raw_path: &str, head_only: bool) -> Response {
    let mut reader = match fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(_) => return not_found(),
    };

    let mut names = Vec::new();
    while let Ok(Some(entry)) = reader.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false) {
            name.push('/');
        }
        names.push(name);
    }

    names.sort();

    let title = escape_html(raw_path);
    let items: String = names
        .iter()
        .map(|name| {
            format!(
                "<li><a href=\"{href}\">{text}</a></li>\n",
                href = escape_html(name),
                text = escape_html(name)
            )
        })
        .collect();

    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Index of {title}</title></head>\n\
         <body>\n<h1>Index of {title}</h1>\n<ul>\n{items}</ul>\n</body>\n</html>\n"
    );

    let content_length = html.len().to_string();
    let body = if head_only {
        Body::empty()
    } else {
        Body::from(html)
    };

    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_LENGTH, content_length),
        ],
        body,
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_empty_and_dot_segments() {
        assert_eq!(
            sanitize_request_path("/a//./b").unwrap(),
            PathBuf::from("a/b")
        );
        assert_eq!(sanitize_request_path("/").unwrap(), PathBuf::new());
    }

    #[test]
    fn sanitize_rejects_parent_traversal() {
        assert!(sanitize_request_path("/../etc/passwd").is_none());
        assert!(sanitize_request_path("/a/../../b").is_none());
        assert!(sanitize_request_path("/%2e%2e/secret").is_none());
    }

    #[test]
    fn sanitize_decodes_percent_sequences() {
        assert_eq!(
            sanitize_request_path("/my%20file.txt").unwrap(),
            PathBuf::from("my file.txt")
        );
    }

    #[test]
    fn sanitize_rejects_backslash_segments() {
        assert!(sanitize_request_path("/a%5C..%5Cb").is_none());
    }

    #[test]
    fn escape_html_neutralises_markup() {
        assert_eq!(
            escape_html("<script>\"x\"&'y'</script>"),
            "&lt;script&gt;&quot;x&quot;&amp;&#39;y&#39;&lt;/script&gt;"
        );
    }
}
