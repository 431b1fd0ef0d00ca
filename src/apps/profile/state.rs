//! Profile form state
//!
//! One reducer owns the whole edit cycle: hydration from the fetched record,
//! per-field edits, image replacement with dirty tracking, and the
//! submitting flag. Every transition is a pure function, so the testable
//! properties of the flow live here rather than in the component.

use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use validator::Validate;
use yew::prelude::*;

use super::types::{PendingImage, ProfileRecord, ProfileUpdate};

/// Per-field validation messages keyed by wire name.
pub type FieldErrors = HashMap<&'static str, String>;

/// The editable scalar fields, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
	FullName,
	About,
	Bio,
	Facebook,
	Whatsapp,
	Instagram,
	Linkedin,
	Country,
	City,
}

impl ProfileField {
	pub const ALL: [ProfileField; 9] = [
		ProfileField::FullName,
		ProfileField::About,
		ProfileField::Bio,
		ProfileField::Facebook,
		ProfileField::Whatsapp,
		ProfileField::Instagram,
		ProfileField::Linkedin,
		ProfileField::Country,
		ProfileField::City,
	];

	/// Multipart/JSON field name.
	pub fn name(self) -> &'static str {
		match self {
			ProfileField::FullName => "full_name",
			ProfileField::About => "about",
			ProfileField::Bio => "bio",
			ProfileField::Facebook => "facebook",
			ProfileField::Whatsapp => "whatsapp",
			ProfileField::Instagram => "instagram",
			ProfileField::Linkedin => "linkedin",
			ProfileField::Country => "country",
			ProfileField::City => "city",
		}
	}

	/// Form label shown next to the input.
	pub fn label(self) -> &'static str {
		match self {
			ProfileField::FullName => "Full Name",
			ProfileField::About => "About Me",
			ProfileField::Bio => "Bio",
			ProfileField::Facebook => "Facebook",
			ProfileField::Whatsapp => "Whatsapp",
			ProfileField::Instagram => "Instagram",
			ProfileField::Linkedin => "Linkedin",
			ProfileField::Country => "Country",
			ProfileField::City => "City",
		}
	}
}

/// Current values of the nine scalar fields.
///
/// The non-empty rules mirror the fields the form marks as required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct FieldValues {
	#[validate(length(min = 1, message = "Please enter your full name."))]
	pub full_name: String,
	pub about: String,
	#[validate(length(min = 1, message = "Please enter a bio."))]
	pub bio: String,
	pub facebook: String,
	pub whatsapp: String,
	pub instagram: String,
	pub linkedin: String,
	#[validate(length(min = 1, message = "Please choose a country."))]
	pub country: String,
	#[validate(length(min = 1, message = "Please choose a city."))]
	pub city: String,
}

impl FieldValues {
	pub fn get(&self, field: ProfileField) -> &str {
		match field {
			ProfileField::FullName => &self.full_name,
			ProfileField::About => &self.about,
			ProfileField::Bio => &self.bio,
			ProfileField::Facebook => &self.facebook,
			ProfileField::Whatsapp => &self.whatsapp,
			ProfileField::Instagram => &self.instagram,
			ProfileField::Linkedin => &self.linkedin,
			ProfileField::Country => &self.country,
			ProfileField::City => &self.city,
		}
	}

	fn set(&mut self, field: ProfileField, value: String) {
		match field {
			ProfileField::FullName => self.full_name = value,
			ProfileField::About => self.about = value,
			ProfileField::Bio => self.bio = value,
			ProfileField::Facebook => self.facebook = value,
			ProfileField::Whatsapp => self.whatsapp = value,
			ProfileField::Instagram => self.instagram = value,
			ProfileField::Linkedin => self.linkedin = value,
			ProfileField::Country => self.country = value,
			ProfileField::City => self.city = value,
		}
	}
}

/// View-scoped editable copy of the profile resource.
///
/// Discarded on navigation away and re-fetched on the next mount; nothing
/// here persists or caches across views.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
	pub values: FieldValues,
	/// URL of the image currently stored on the server.
	pub image_url: Option<String>,
	/// Newly selected replacement, if any.
	pub pending_image: Option<PendingImage>,
	/// Set when the user picks a file; drives the conditional upload.
	pub image_dirty: bool,
	/// Server-assigned creation timestamp, read-only.
	pub joined: Option<DateTime<Utc>>,
	pub submitting: bool,
}

/// Transitions on the profile form.
pub enum ProfileAction {
	/// Populate every field from the fetched record.
	Hydrate(ProfileRecord),
	/// Pure single-field merge.
	Edit(ProfileField, String),
	/// Store a newly selected avatar and mark the image field dirty.
	SelectImage(PendingImage),
	SubmitStarted,
	/// The PATCH was accepted: the pending image is now the server value,
	/// so it must not ride along on the next save.
	SubmitSucceeded,
	/// The attempt ended without saving; local edits and any pending image
	/// stay so the user can retry.
	SubmitFinished,
}

impl Reducible for ProfileForm {
	type Action = ProfileAction;

	fn reduce(self: Rc<Self>, action: ProfileAction) -> Rc<Self> {
		let mut next = (*self).clone();
		match action {
			ProfileAction::Hydrate(record) => {
				next.values = FieldValues {
					full_name: record.full_name.unwrap_or_default(),
					about: record.about.unwrap_or_default(),
					bio: record.bio.unwrap_or_default(),
					facebook: record.facebook.unwrap_or_default(),
					whatsapp: record.whatsapp.unwrap_or_default(),
					instagram: record.instagram.unwrap_or_default(),
					linkedin: record.linkedin.unwrap_or_default(),
					country: record.country.unwrap_or_default(),
					city: record.city.unwrap_or_default(),
				};
				next.image_url = record.image;
				next.pending_image = None;
				next.image_dirty = false;
				next.joined = Some(record.date);
			}
			ProfileAction::Edit(field, value) => {
				next.values.set(field, value);
			}
			ProfileAction::SelectImage(pending) => {
				next.pending_image = Some(pending);
				next.image_dirty = true;
			}
			ProfileAction::SubmitStarted => {
				next.submitting = true;
			}
			ProfileAction::SubmitSucceeded => {
				if let Some(uploaded) = next.pending_image.take() {
					next.image_url = Some(uploaded.to_data_url());
				}
				next.image_dirty = false;
				next.submitting = false;
			}
			ProfileAction::SubmitFinished => {
				next.submitting = false;
			}
		}
		Rc::new(next)
	}
}

impl ProfileForm {
	/// Enumerated pre-submit rules (field, non-empty).
	pub fn validate(&self) -> Result<(), FieldErrors> {
		match Validate::validate(&self.values) {
			Ok(()) => Ok(()),
			Err(errors) => Err(collect_field_errors(&errors)),
		}
	}

	/// Build the outgoing payload.
	///
	/// Every scalar field is present, even when empty; the image rides along
	/// only when the user replaced it, so an unchanged avatar is never
	/// re-uploaded.
	pub fn to_update(&self) -> ProfileUpdate {
		let fields = ProfileField::ALL
			.iter()
			.map(|field| (field.name(), self.values.get(*field).to_string()))
			.collect();
		let image = if self.image_dirty {
			self.pending_image.clone()
		} else {
			None
		};
		ProfileUpdate::new(fields, image)
	}
}

fn collect_field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
	errors
		.field_errors()
		.iter()
		.map(|(field, field_errors)| {
			let message = field_errors
				.iter()
				.find_map(|error| error.message.as_ref().map(|message| message.to_string()))
				.unwrap_or_else(|| "Invalid value.".to_string());
			(*field, message)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use rstest::rstest;
	use uuid::Uuid;

	fn sample_record() -> ProfileRecord {
		ProfileRecord {
			user: Uuid::nil(),
			image: Some("https://cdn.example.com/jane.jpg".into()),
			full_name: Some("Jane Doe".into()),
			about: Some("Writer and editor".into()),
			bio: Some("Editor at large".into()),
			facebook: None,
			whatsapp: Some("+254700000000".into()),
			instagram: None,
			linkedin: Some("jane-doe".into()),
			country: Some("Kenya".into()),
			city: Some("Nairobi".into()),
			date: Utc.with_ymd_and_hms(2023, 5, 4, 10, 0, 0).unwrap(),
		}
	}

	fn hydrated() -> Rc<ProfileForm> {
		Rc::new(ProfileForm::default()).reduce(ProfileAction::Hydrate(sample_record()))
	}

	#[test]
	fn hydrate_populates_every_field() {
		let form = hydrated();
		assert_eq!(form.values.full_name, "Jane Doe");
		assert_eq!(form.values.bio, "Editor at large");
		assert_eq!(form.values.facebook, "");
		assert_eq!(form.values.city, "Nairobi");
		assert_eq!(form.image_url.as_deref(), Some("https://cdn.example.com/jane.jpg"));
		assert!(!form.image_dirty);
		assert!(form.joined.is_some());
	}

	#[rstest]
	#[case(ProfileField::City, "Mombasa")]
	#[case(ProfileField::About, "New about text")]
	#[case(ProfileField::Linkedin, "jane")]
	fn edit_changes_only_the_target_field(#[case] field: ProfileField, #[case] value: &str) {
		let before = hydrated();
		let after = before
			.clone()
			.reduce(ProfileAction::Edit(field, value.to_string()));

		assert_eq!(after.values.get(field), value);
		for other in ProfileField::ALL {
			if other != field {
				assert_eq!(after.values.get(other), before.values.get(other));
			}
		}
	}

	#[test]
	fn select_image_marks_field_dirty() {
		let form = hydrated().reduce(ProfileAction::SelectImage(PendingImage::new(
			"new.png",
			"image/png",
			vec![9, 9, 9],
		)));
		assert!(form.image_dirty);
		assert_eq!(form.pending_image.as_ref().unwrap().file_name, "new.png");
		// The last known server value stays around for preview fallback.
		assert!(form.image_url.is_some());
	}

	#[test]
	fn update_always_contains_all_nine_scalars() {
		let empty = ProfileForm::default().to_update();
		assert_eq!(empty.fields().len(), 9);
		for (_, value) in empty.fields() {
			assert_eq!(value, "");
		}

		let names: Vec<&str> = empty.fields().iter().map(|(name, _)| *name).collect();
		assert_eq!(
			names,
			vec![
				"full_name",
				"about",
				"bio",
				"facebook",
				"whatsapp",
				"instagram",
				"linkedin",
				"country",
				"city"
			]
		);
	}

	#[test]
	fn update_omits_unchanged_image() {
		let form = hydrated();
		assert!(form.to_update().image().is_none());
	}

	#[test]
	fn update_carries_replacement_image() {
		let form = hydrated().reduce(ProfileAction::SelectImage(PendingImage::new(
			"new.png",
			"image/png",
			vec![4, 5, 6],
		)));
		let update = form.to_update();
		let image = update.image().expect("dirty image should be included");
		assert_eq!(image.bytes, vec![4, 5, 6]);
	}

	#[test]
	fn submit_flags_toggle_without_touching_edits() {
		let edited = hydrated().reduce(ProfileAction::Edit(
			ProfileField::City,
			"Kisumu".to_string(),
		));
		let submitting = edited.clone().reduce(ProfileAction::SubmitStarted);
		assert!(submitting.submitting);

		let finished = submitting.reduce(ProfileAction::SubmitFinished);
		assert!(!finished.submitting);
		// Failure keeps local edits so the user can retry.
		assert_eq!(finished.values.city, "Kisumu");
		assert_eq!(finished.values, edited.values);
	}

	#[test]
	fn successful_submit_discards_the_pending_image() {
		let saved = hydrated()
			.reduce(ProfileAction::SelectImage(PendingImage::new(
				"new.png",
				"image/png",
				vec![7, 8, 9],
			)))
			.reduce(ProfileAction::SubmitStarted)
			.reduce(ProfileAction::SubmitSucceeded);

		assert!(!saved.submitting);
		assert!(!saved.image_dirty);
		assert!(saved.pending_image.is_none());
		// The accepted upload becomes the last known server value.
		assert!(saved.image_url.as_deref().unwrap().starts_with("data:image/png"));

		// A follow-up edit and save must not re-upload the same bytes.
		let second = saved.reduce(ProfileAction::Edit(
			ProfileField::City,
			"Mombasa".to_string(),
		));
		assert!(second.to_update().image().is_none());
	}

	#[test]
	fn failed_submit_keeps_the_pending_image_for_retry() {
		let retried = hydrated()
			.reduce(ProfileAction::SelectImage(PendingImage::new(
				"new.png",
				"image/png",
				vec![7, 8, 9],
			)))
			.reduce(ProfileAction::SubmitStarted)
			.reduce(ProfileAction::SubmitFinished);

		assert!(!retried.submitting);
		assert!(retried.image_dirty);
		assert_eq!(retried.to_update().image().unwrap().bytes, vec![7, 8, 9]);
	}

	#[rstest]
	#[case(ProfileField::FullName, "full_name")]
	#[case(ProfileField::Bio, "bio")]
	#[case(ProfileField::Country, "country")]
	#[case(ProfileField::City, "city")]
	fn validation_flags_empty_required_fields(
		#[case] field: ProfileField,
		#[case] wire_name: &str,
	) {
		let form = hydrated().reduce(ProfileAction::Edit(field, String::new()));
		let errors = form.validate().unwrap_err();
		assert!(errors.contains_key(wire_name));
	}

	#[test]
	fn validation_ignores_optional_fields() {
		// Social links and the about text may stay empty.
		let form = hydrated()
			.reduce(ProfileAction::Edit(ProfileField::About, String::new()))
			.reduce(ProfileAction::Edit(ProfileField::Whatsapp, String::new()))
			.reduce(ProfileAction::Edit(ProfileField::Linkedin, String::new()));
		assert!(form.validate().is_ok());
	}

	#[test]
	fn validation_passes_on_hydrated_record() {
		assert!(hydrated().validate().is_ok());
	}
}
