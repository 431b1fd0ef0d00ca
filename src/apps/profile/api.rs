//! HTTP adapter for the profile resource
//!
//! Thin `gloo-net` implementation of [`ProfileApi`]: attaches the bearer
//! credential, treats non-2xx statuses as errors, and assembles the
//! multipart PATCH body. No retries, no timeouts, no response body consumed
//! beyond the fetched record.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use uuid::Uuid;

use crate::core::config::ApiConfig;
use crate::core::error::ApiError;

use super::flow::ProfileApi;
use super::types::{ProfileRecord, ProfileUpdate};

/// Production [`ProfileApi`] backed by the browser fetch API.
pub struct HttpProfileApi {
	base_url: String,
	token: Option<String>,
}

impl HttpProfileApi {
	pub fn new(config: &ApiConfig, token: Option<String>) -> Self {
		Self {
			base_url: config.base_url().to_string(),
			token,
		}
	}

	fn profile_url(&self, user_id: Uuid) -> String {
		format!("{}/user/profile/{}/", self.base_url, user_id)
	}

	fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
		match &self.token {
			Some(token) => request.header("Authorization", &format!("Bearer {token}")),
			None => request,
		}
	}
}

#[async_trait(?Send)]
impl ProfileApi for HttpProfileApi {
	async fn fetch_profile(&self, user_id: Uuid) -> Result<ProfileRecord, ApiError> {
		let response = self
			.authorize(Request::get(&self.profile_url(user_id)))
			.send()
			.await?;
		if !response.ok() {
			return Err(ApiError::Status {
				status: response.status(),
			});
		}
		response
			.json()
			.await
			.map_err(|err| ApiError::Decode(err.to_string()))
	}

	async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<(), ApiError> {
		// The browser sets the multipart boundary itself; setting a
		// Content-Type header here would break the request.
		let body = multipart_body(&update)?;
		let response = self
			.authorize(Request::patch(&self.profile_url(user_id)))
			.body(body)?
			.send()
			.await?;
		if !response.ok() {
			return Err(ApiError::Status {
				status: response.status(),
			});
		}
		Ok(())
	}
}

/// Assemble the multipart body: all nine scalar entries, plus the image
/// only when the update carries one.
fn multipart_body(update: &ProfileUpdate) -> Result<web_sys::FormData, ApiError> {
	let form = web_sys::FormData::new().map_err(ApiError::browser)?;
	for (name, value) in update.fields() {
		form.append_with_str(name, value).map_err(ApiError::browser)?;
	}
	if let Some(image) = update.image() {
		let parts = js_sys::Array::new();
		parts.push(&js_sys::Uint8Array::from(image.bytes.as_slice()));
		let options = web_sys::BlobPropertyBag::new();
		options.set_type(&image.mime);
		let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
			.map_err(ApiError::browser)?;
		form.append_with_blob_and_filename("image", &blob, &image.file_name)
			.map_err(ApiError::browser)?;
	}
	Ok(form)
}
