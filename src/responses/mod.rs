pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

pub use assets::static_file_response;
pub use errors::html_error_response;
pub use html::{html_response, redirect_response, text_response};
pub use json::json_response;
