//! Error taxonomy for the HTTP client adapter
//!
//! Every network operation in the frontend resolves to an [`ApiError`].
//! The variants separate transport failures, non-2xx responses, body decode
//! failures, and errors raised by the browser APIs themselves (FormData,
//! Blob construction).

use thiserror::Error;

/// Errors surfaced by the HTTP client adapter.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request never produced a response (network down, CORS, abort).
	#[error("request failed: {0}")]
	Network(String),

	/// The server answered with a non-2xx status.
	#[error("server responded with status {status}")]
	Status { status: u16 },

	/// The response body could not be decoded into the expected shape.
	#[error("failed to decode response: {0}")]
	Decode(String),

	/// A browser API call failed while building the request.
	#[error("browser error: {0}")]
	Browser(String),
}

impl From<gloo_net::Error> for ApiError {
	fn from(err: gloo_net::Error) -> Self {
		ApiError::Network(err.to_string())
	}
}

impl ApiError {
	/// Wrap an opaque JavaScript error value.
	pub fn browser(value: wasm_bindgen::JsValue) -> Self {
		ApiError::Browser(format!("{value:?}"))
	}
}
