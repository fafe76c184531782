//! Landing page.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;

use crate::AppState;
use crate::error::StartupError;

/// Page served when no `INDEX_TEMPLATE` is configured.
pub const DEFAULT_INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Reads the index page once at startup.
pub fn load_index_html(path: Option<&str>) -> Result<Bytes, StartupError> {
    match path {
        None => Ok(Bytes::from_static(DEFAULT_INDEX_HTML.as_bytes())),
        Some(path) => std::fs::read(path)
            .map(Bytes::from)
            .map_err(|source| StartupError::IndexTemplate {
                path: path.to_string(),
                source,
            }),
    }
}

/// GET / — returns the static landing page. Cloning `Bytes` shares the buffer.
pub async fn page(State(state): State<Arc<AppState>>) -> Html<Bytes> {
    Html(state.index_html.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let html = load_index_html(None).unwrap();
        assert!(std::str::from_utf8(&html).unwrap().contains("<html"));
    }

    #[test]
    fn test_default_page_is_not_copied() {
        let html = load_index_html(None).unwrap();
        assert_eq!(html.as_ptr(), DEFAULT_INDEX_HTML.as_ptr());
        assert_eq!(html.clone().as_ptr(), html.as_ptr());
    }

    #[test]
    fn test_template_file_is_loaded() {
        let path = std::env::temp_dir()
            .join(format!("showcase-index-{}.html", std::process::id()));
        std::fs::write(&path, "<html>custom</html>").unwrap();

        let html = load_index_html(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(&html[..], b"<html>custom</html>");
    }

    #[test]
    fn test_missing_template_file() {
        let err = load_index_html(Some("/nonexistent/index.html")).unwrap_err();
        assert!(matches!(err, StartupError::IndexTemplate { .. }));
        assert!(err.to_string().contains("/nonexistent/index.html"));
    }
}
