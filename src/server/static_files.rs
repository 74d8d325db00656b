//! Static frontend assets.
//!
//! The names of the regular files directly inside the asset root are read
//! once at startup. A GET/HEAD whose path names one of them is answered from
//! disk; every other request falls through to the API router.

use super::state::AppState;
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, warn};

const INDEX: &str = "index.html";

#[derive(Debug, Default)]
pub struct StaticAssets {
    root: PathBuf,
    names: HashSet<String>,
}

impl StaticAssets {
    /// Index the asset root. A missing or unreadable root serves nothing.
    pub fn scan(root: &Path) -> Self {
        let mut names = HashSet::new();

        match fs::read_dir(root) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
                    if let Some(name) = entry.file_name().to_str()
                        && is_file
                    {
                        names.insert(name.to_string());
                    }
                }
            }
            Err(e) => warn!("Static directory {} not readable: {e}", root.display()),
        }

        debug!("Indexed {} static assets under {}", names.len(), root.display());
        Self {
            root: root.to_path_buf(),
            names,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Map a request path to a known asset file.
    pub fn resolve(&self, uri_path: &str) -> Option<PathBuf> {
        let name = uri_path.strip_prefix('/').unwrap_or(uri_path);
        let name = if name.is_empty() { INDEX } else { name };

        self.names.contains(name).then(|| self.root.join(name))
    }
}

pub async fn serve_static(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method();
    if method != Method::GET && method != Method::HEAD {
        return next.run(request).await;
    }

    match state.assets.resolve(request.uri().path()) {
        Some(file) => match ServeFile::new(file).oneshot(request).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        },
        None => next.run(request).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index_and_unknown_names_miss() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("script.js"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let assets = StaticAssets::scan(dir.path());
        assert_eq!(assets.len(), 2);
        assert_eq!(assets.resolve("/"), Some(dir.path().join("index.html")));
        assert_eq!(assets.resolve("/script.js"), Some(dir.path().join("script.js")));
        assert_eq!(assets.resolve("/nested"), None);
        assert_eq!(assets.resolve("/api/dump"), None);
        assert_eq!(assets.resolve("/../Cargo.toml"), None);
    }

    #[test]
    fn missing_root_serves_nothing() {
        let assets = StaticAssets::scan(Path::new("/definitely/not/here"));
        assert!(assets.is_empty());
        assert_eq!(assets.resolve("/"), None);
    }
}
