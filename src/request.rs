// src/request.rs

use astra::Request;
use std::collections::HashMap;
use std::io::Read;

use crate::errors::ServerError;

/// Upper bound on accepted form bodies.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded query string; the last value wins for repeated keys.
#[derive(Debug, Default, Clone)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn from_request(req: &Request) -> Self {
        Self::parse(req.uri().query().unwrap_or(""))
    }

    pub fn parse(raw: &str) -> Self {
        let pairs = url::form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 1-based page cursor; anything that is not a number is ignored.
    pub fn page(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Viewport width from client hints, then the `vw` query parameter.
pub fn viewport_width(req: &Request, query: &Query, default: u32) -> u32 {
    ["Sec-CH-Viewport-Width", "Viewport-Width"]
        .iter()
        .filter_map(|name| req.headers().get(*name))
        .filter_map(|value| value.to_str().ok())
        .chain(query.get("vw"))
        .find_map(|raw| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w > 0.0)
        })
        .map(|w| w.round() as u32)
        .unwrap_or(default)
}

pub fn cookies(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for header in req.headers().get_all("Cookie") {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((k, v)) = pair.trim().split_once('=') {
                map.insert(k.trim().to_string(), v.trim().to_string());
            }
        }
    }

    map
}

pub fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::Io(format!("Reading request body failed: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form body too large".into()));
    }
    Ok(body)
}
