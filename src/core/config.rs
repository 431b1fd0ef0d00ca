//! API endpoint configuration
//!
//! The frontend talks to one REST backend. The base URL is baked in at
//! compile time so the deployed bundle carries no runtime config fetch:
//! set `SOZO_API_BASE` in the build environment to point at another
//! backend, otherwise the local development default is used.

/// Default backend used by `trunk serve` against a local API server.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/v1";

/// Resolved API endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
	base_url: String,
}

impl ApiConfig {
	/// Build the configuration from the compile-time environment.
	pub fn from_env() -> Self {
		Self::with_base(option_env!("SOZO_API_BASE").unwrap_or(DEFAULT_API_BASE))
	}

	/// Build a configuration for an explicit base URL.
	///
	/// A trailing slash is stripped so endpoint paths can always be joined
	/// with a leading slash.
	pub fn with_base(base_url: &str) -> Self {
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	/// The backend base URL, without a trailing slash.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::from_env()
	}
}
