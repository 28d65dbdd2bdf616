use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

use crate::domain::viewport::DESKTOP_WIDTH;
use crate::errors::ResultResp;
use crate::state::AppState;

/// A fresh static directory with a stylesheet and one image, unique per test.
pub fn test_state(name: &str) -> AppState {
    let dir = std::env::temp_dir().join(format!("estatein-{}-{name}", std::process::id()));
    std::fs::create_dir_all(dir.join("properties")).expect("create static dir");
    std::fs::write(dir.join("main.css"), "body { margin: 0; }").expect("write css");
    std::fs::write(dir.join("properties/pd-1.png"), [0x89, b'P', b'N', b'G']).expect("write png");

    AppState {
        static_dir: dir,
        default_viewport_width: DESKTOP_WIDTH,
    }
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post_form(uri: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(resp: Response) -> String {
    let mut out = String::new();
    let mut body = resp.into_body();
    body.reader().read_to_string(&mut out).expect("read body");
    out
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Status code of a handler result, whether it succeeded or not.
pub fn status_of(result: ResultResp) -> u16 {
    match result {
        Ok(resp) => resp.status().as_u16(),
        Err(err) => err.status(),
    }
}
