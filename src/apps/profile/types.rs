//! Profile wire types
//!
//! [`ProfileRecord`] mirrors the REST resource at `/user/profile/{user_id}/`.
//! [`ProfileUpdate`] is the outgoing multipart payload; [`PendingImage`] is a
//! newly selected avatar held in memory until the update completes.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The server-held profile resource.
///
/// All scalar fields are optional free text; `date` is server-assigned and
/// never submitted back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
	pub user: Uuid,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub full_name: Option<String>,
	#[serde(default)]
	pub about: Option<String>,
	#[serde(default)]
	pub bio: Option<String>,
	#[serde(default)]
	pub facebook: Option<String>,
	#[serde(default)]
	pub whatsapp: Option<String>,
	#[serde(default)]
	pub instagram: Option<String>,
	#[serde(default)]
	pub linkedin: Option<String>,
	#[serde(default)]
	pub country: Option<String>,
	#[serde(default)]
	pub city: Option<String>,
	pub date: DateTime<Utc>,
}

/// A newly selected avatar file, not yet uploaded.
///
/// Holds the raw bytes so the multipart body and the preview can both be
/// derived without touching the file input again. Discarded once a submit
/// succeeds; kept for retry when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingImage {
	pub file_name: String,
	pub mime: String,
	pub bytes: Vec<u8>,
}

impl PendingImage {
	pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
		Self {
			file_name: file_name.into(),
			mime: mime.into(),
			bytes,
		}
	}

	/// Data URL used for the in-form preview before the upload completes.
	pub fn to_data_url(&self) -> String {
		format!("data:{};base64,{}", self.mime, BASE64.encode(&self.bytes))
	}
}

/// Outgoing profile update.
///
/// Always carries every scalar field (last-write-wins on the server); the
/// image is present only when the user actually replaced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
	fields: Vec<(&'static str, String)>,
	image: Option<PendingImage>,
}

impl ProfileUpdate {
	pub fn new(fields: Vec<(&'static str, String)>, image: Option<PendingImage>) -> Self {
		Self { fields, image }
	}

	/// The nine scalar entries, in wire order.
	pub fn fields(&self) -> &[(&'static str, String)] {
		&self.fields
	}

	pub fn image(&self) -> Option<&PendingImage> {
		self.image.as_ref()
	}
}
