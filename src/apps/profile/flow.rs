//! Profile load/submit orchestration
//!
//! The flows talk to the backend through the [`ProfileApi`] seam and report
//! outcomes through [`Notify`], so they run the same against the real HTTP
//! adapter and against mocks. Nothing here knows about the DOM.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::ApiError;
use crate::core::notify::{Notify, ToastKind};
use crate::error_log;

use super::state::{FieldErrors, ProfileForm};
use super::types::{ProfileRecord, ProfileUpdate};

/// HTTP client adapter for the profile resource.
#[async_trait(?Send)]
pub trait ProfileApi {
	/// `GET /user/profile/{user_id}/`
	async fn fetch_profile(&self, user_id: Uuid) -> Result<ProfileRecord, ApiError>;

	/// `PATCH /user/profile/{user_id}/` with a multipart body.
	async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<(), ApiError>;
}

/// Fetch the record for the initial hydration.
///
/// Failures are logged and handed back to the caller, which surfaces them as
/// a recoverable "could not load" state rather than an unobserved rejection.
pub async fn load_profile(api: &dyn ProfileApi, user_id: Uuid) -> Result<ProfileRecord, ApiError> {
	api.fetch_profile(user_id).await.map_err(|err| {
		error_log!("failed to load profile for {user_id}: {err}");
		err
	})
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
	Saved,
	/// Validation stopped the request; no PATCH was issued.
	Invalid(FieldErrors),
	Failed(ApiError),
}

/// Validate, build the diffed payload, and PATCH it.
///
/// Exactly one notification is raised per attempt. On failure the caller's
/// local edits are untouched so the user can retry without re-entering data.
pub async fn submit_profile(
	api: &dyn ProfileApi,
	notify: &dyn Notify,
	user_id: Uuid,
	form: &ProfileForm,
) -> SubmitOutcome {
	if let Err(errors) = form.validate() {
		notify.notify(ToastKind::Error, "Please fix the highlighted fields", "");
		return SubmitOutcome::Invalid(errors);
	}

	match api.update_profile(user_id, form.to_update()).await {
		Ok(()) => {
			notify.notify(ToastKind::Success, "Profile updated successfully", "");
			SubmitOutcome::Saved
		}
		Err(err) => {
			// Diagnostic detail is for operators; the user gets a generic
			// message and keeps their edits.
			error_log!("profile update for {user_id} failed: {err}");
			notify.notify(
				ToastKind::Error,
				"Could not update your profile",
				"Your changes were kept. Please try again.",
			);
			SubmitOutcome::Failed(err)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::apps::profile::state::{ProfileAction, ProfileField};
	use crate::apps::profile::types::PendingImage;
	use chrono::{TimeZone, Utc};
	use std::cell::RefCell;
	use std::rc::Rc;
	use yew::Reducible;

	struct MockApi {
		record: ProfileRecord,
		fail_fetch: bool,
		fail_update: bool,
		updates: RefCell<Vec<ProfileUpdate>>,
	}

	impl MockApi {
		fn new() -> Self {
			Self {
				record: sample_record(),
				fail_fetch: false,
				fail_update: false,
				updates: RefCell::new(Vec::new()),
			}
		}
	}

	#[async_trait(?Send)]
	impl ProfileApi for MockApi {
		async fn fetch_profile(&self, _user_id: Uuid) -> Result<ProfileRecord, ApiError> {
			if self.fail_fetch {
				Err(ApiError::Status { status: 500 })
			} else {
				Ok(self.record.clone())
			}
		}

		async fn update_profile(
			&self,
			_user_id: Uuid,
			update: ProfileUpdate,
		) -> Result<(), ApiError> {
			self.updates.borrow_mut().push(update);
			if self.fail_update {
				Err(ApiError::Network("connection reset".into()))
			} else {
				Ok(())
			}
		}
	}

	#[derive(Default)]
	struct RecordingNotify {
		raised: RefCell<Vec<(ToastKind, String)>>,
	}

	impl Notify for RecordingNotify {
		fn notify(&self, kind: ToastKind, message: &str, _detail: &str) {
			self.raised.borrow_mut().push((kind, message.to_string()));
		}
	}

	fn sample_record() -> ProfileRecord {
		ProfileRecord {
			user: Uuid::nil(),
			image: Some("https://cdn.example.com/jane.jpg".into()),
			full_name: Some("Jane Doe".into()),
			about: None,
			bio: Some("Editor".into()),
			facebook: None,
			whatsapp: None,
			instagram: None,
			linkedin: None,
			country: Some("Kenya".into()),
			city: Some("Nairobi".into()),
			date: Utc.with_ymd_and_hms(2023, 5, 4, 10, 0, 0).unwrap(),
		}
	}

	fn hydrated_form() -> ProfileForm {
		let form = Rc::new(ProfileForm::default())
			.reduce(ProfileAction::Hydrate(sample_record()));
		(*form).clone()
	}

	#[tokio::test]
	async fn load_returns_fetched_record() {
		let api = MockApi::new();
		let record = load_profile(&api, Uuid::nil()).await.unwrap();
		assert_eq!(record.full_name.as_deref(), Some("Jane Doe"));
	}

	#[tokio::test]
	async fn load_failure_surfaces_the_error() {
		let api = MockApi {
			fail_fetch: true,
			..MockApi::new()
		};
		let err = load_profile(&api, Uuid::nil()).await.unwrap_err();
		assert!(matches!(err, ApiError::Status { status: 500 }));
	}

	#[tokio::test]
	async fn successful_submit_notifies_success_exactly_once() {
		let api = MockApi::new();
		let notify = RecordingNotify::default();
		let form = hydrated_form();

		let outcome = submit_profile(&api, &notify, Uuid::nil(), &form).await;

		assert!(matches!(outcome, SubmitOutcome::Saved));
		let raised = notify.raised.borrow();
		assert_eq!(raised.len(), 1);
		assert_eq!(raised[0].0, ToastKind::Success);
	}

	#[tokio::test]
	async fn failed_submit_notifies_error_exactly_once() {
		let api = MockApi {
			fail_update: true,
			..MockApi::new()
		};
		let notify = RecordingNotify::default();
		let form = hydrated_form();

		let outcome = submit_profile(&api, &notify, Uuid::nil(), &form).await;

		assert!(matches!(outcome, SubmitOutcome::Failed(_)));
		let raised = notify.raised.borrow();
		assert_eq!(raised.len(), 1);
		assert_eq!(raised[0].0, ToastKind::Error);
	}

	#[tokio::test]
	async fn submitted_payload_contains_every_scalar_field() {
		let api = MockApi::new();
		let notify = RecordingNotify::default();
		let mut form = hydrated_form();
		form.values.facebook = String::new();

		submit_profile(&api, &notify, Uuid::nil(), &form).await;

		let updates = api.updates.borrow();
		assert_eq!(updates.len(), 1);
		assert_eq!(updates[0].fields().len(), 9);
		assert!(
			updates[0]
				.fields()
				.iter()
				.any(|(name, value)| *name == "facebook" && value.is_empty())
		);
	}

	#[tokio::test]
	async fn clean_image_is_omitted_dirty_image_is_sent() {
		let api = MockApi::new();
		let notify = RecordingNotify::default();

		let clean = hydrated_form();
		submit_profile(&api, &notify, Uuid::nil(), &clean).await;
		assert!(api.updates.borrow()[0].image().is_none());

		let dirty = (*Rc::new(clean).reduce(ProfileAction::SelectImage(PendingImage::new(
			"new.png",
			"image/png",
			vec![7, 8],
		))))
		.clone();
		submit_profile(&api, &notify, Uuid::nil(), &dirty).await;
		let updates = api.updates.borrow();
		assert_eq!(updates[1].image().unwrap().bytes, vec![7, 8]);
	}

	#[tokio::test]
	async fn invalid_draft_blocks_the_patch() {
		let api = MockApi::new();
		let notify = RecordingNotify::default();
		let form = (*Rc::new(hydrated_form())
			.reduce(ProfileAction::Edit(ProfileField::FullName, String::new())))
		.clone();

		let outcome = submit_profile(&api, &notify, Uuid::nil(), &form).await;

		match outcome {
			SubmitOutcome::Invalid(errors) => {
				assert!(errors.contains_key("full_name"));
			}
			other => panic!("expected Invalid, got {other:?}"),
		}
		assert!(api.updates.borrow().is_empty());
		assert_eq!(notify.raised.borrow().len(), 1);
		assert_eq!(notify.raised.borrow()[0].0, ToastKind::Error);
	}
}
