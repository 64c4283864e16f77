pub mod errors;
pub mod html;

pub use errors::{error_to_response, ResultResp};

// Normal responses
pub use html::{html_response, redirect_response, text_response};
