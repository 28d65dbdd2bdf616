pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::desktop::desktop_layout;

use crate::domain::viewport::ViewportBus;
use crate::request::Query;

/// Per-request state every page renders with.
pub struct PageCtx {
    /// Request path, used to highlight the active nav link.
    pub path: String,
    pub query: Query,
    pub viewport: ViewportBus,
    pub show_banner: bool,
    pub year: i32,
}

impl PageCtx {
    pub fn new(path: impl Into<String>, query: Query, width: u32) -> Self {
        use chrono::Datelike;

        Self {
            path: path.into(),
            query,
            viewport: ViewportBus::with_width(width),
            show_banner: true,
            year: chrono::Utc::now().year(),
        }
    }

    /// Current path with `key` set to `value`, keeping every other query pair.
    pub fn href_with(&self, key: &str, value: &str) -> String {
        let mut out = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.query.pairs().filter(|(k, _)| *k != key) {
            out.append_pair(k, v);
        }
        out.append_pair(key, value);
        format!("{}?{}", self.path, out.finish())
    }
}
