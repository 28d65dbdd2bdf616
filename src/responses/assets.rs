// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Resolve `rel` under `root`, refusing anything that could step outside it.
fn resolve(root: &Path, rel: &str) -> Option<PathBuf> {
    let rel = Path::new(rel.trim_start_matches('/'));
    if rel.as_os_str().is_empty() {
        return None;
    }

    let mut path = root.to_path_buf();
    for component in rel.components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(path)
}

/// Returns appropriate Cache-Control header based on file type.
fn cache_control_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") | Some("js") => "public, max-age=3600",
        Some("html") => "no-cache, must-revalidate",
        _ => "public, max-age=86400",
    }
}

/// Serve a file below the static directory.
pub fn static_file_response(root: &Path, rel: &str) -> ResultResp {
    let path = resolve(root, rel).ok_or(ServerError::NotFound)?;

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(ServerError::NotFound),
        Err(e) if path.is_dir() => {
            tracing::debug!(path = %path.display(), error = %e, "static path is a directory");
            return Err(ServerError::NotFound);
        }
        Err(e) => {
            return Err(ServerError::Io(format!(
                "Reading {} failed: {e}",
                path.display()
            )))
        }
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime.as_ref())
        .header("Cache-Control", cache_control_for_path(&path))
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rejects_escapes() {
        let root = Path::new("/srv/static");
        assert_eq!(
            resolve(root, "css/main.css"),
            Some(PathBuf::from("/srv/static/css/main.css"))
        );
        assert_eq!(resolve(root, "../secret"), None);
        assert_eq!(resolve(root, "a/../../b"), None);
        assert_eq!(resolve(root, ""), None);
        assert_eq!(
            resolve(root, "//etc/passwd"),
            Some(PathBuf::from("/srv/static/etc/passwd"))
        );
    }

    #[test]
    fn cache_control_by_extension() {
        assert_eq!(cache_control_for_path(Path::new("main.css")), "public, max-age=3600");
        assert_eq!(cache_control_for_path(Path::new("pd-1.png")), "public, max-age=86400");
    }
}
