//! Profile edit screen
//!
//! Fetches the current user's [`ProfileRecord`], binds it to the form
//! reducer, and submits the diffed multipart update. All orchestration lives
//! in [`super::flow`]; this component only wires callbacks and renders.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::core::components::common::{LoadingSpinner, TextAreaField, TextField};
use crate::core::components::layout::{Footer, Header};
use crate::core::config::ApiConfig;
use crate::core::format::member_since;
use crate::core::notify::{ToastStack, Toaster};
use crate::core::session::Session;
use crate::routes::Route;

use super::api::HttpProfileApi;
use super::flow::{SubmitOutcome, load_profile, submit_profile};
use super::state::{FieldErrors, ProfileAction, ProfileField, ProfileForm};
use super::types::PendingImage;

/// Shown while no image exists on the server and none is selected.
const DEFAULT_AVATAR: &str = "https://via.placeholder.com/150?text=User";

/// Load lifecycle of the view, distinct from the submitting flag.
#[derive(Clone, PartialEq)]
enum LoadState {
	Loading,
	Loaded,
	Failed(String),
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
	let session = use_context::<Session>().unwrap_or_default();
	let toasts =
		use_context::<UseReducerHandle<ToastStack>>().expect("toast context not mounted");

	let form = use_reducer(ProfileForm::default);
	let load = use_state(|| LoadState::Loading);
	let field_errors = use_state(FieldErrors::default);
	let preview = use_state(|| None::<String>);
	// Keeps in-flight file readers alive until their callbacks fire.
	let readers = use_mut_ref(Vec::<gloo_file::callbacks::FileReader>::new);
	// Bumped by the retry button to re-run the load effect.
	let attempt = use_state(|| 0u32);

	let user_id = session.user_id();
	let token = session.bearer();

	{
		let form = form.clone();
		let load = load.clone();
		let token = token.clone();
		use_effect_with((user_id, *attempt), move |(user_id, _)| {
			if let Some(user_id) = *user_id {
				load.set(LoadState::Loading);
				let api = HttpProfileApi::new(&ApiConfig::from_env(), token);
				spawn_local(async move {
					match load_profile(&api, user_id).await {
						Ok(record) => {
							form.dispatch(ProfileAction::Hydrate(record));
							load.set(LoadState::Loaded);
						}
						Err(err) => {
							load.set(LoadState::Failed(err.to_string()));
						}
					}
				});
			}
		});
	}

	// One callback per field keeps every transition a pure reducer step.
	let edit_callback = {
		let form = form.clone();
		move |field: ProfileField| {
			let form = form.clone();
			Callback::from(move |value: String| form.dispatch(ProfileAction::Edit(field, value)))
		}
	};

	let on_image_change = {
		let form = form.clone();
		let preview = preview.clone();
		let readers = readers.clone();
		Callback::from(move |event: Event| {
			let input: HtmlInputElement = event.target_unchecked_into();
			// No file selected: nothing changes, the previous value stands.
			let Some(file) = input.files().and_then(|files| files.get(0)) else {
				return;
			};
			let file = gloo_file::File::from(file);
			let name = file.name();
			let mime = file.raw_mime_type();
			let form = form.clone();
			let preview = preview.clone();
			let reader = gloo_file::callbacks::read_as_bytes(&file, move |result| {
				if let Ok(bytes) = result {
					let pending = PendingImage::new(name, mime, bytes);
					preview.set(Some(pending.to_data_url()));
					form.dispatch(ProfileAction::SelectImage(pending));
				}
			});
			readers.borrow_mut().push(reader);
		})
	};

	let on_submit = {
		let form = form.clone();
		let field_errors = field_errors.clone();
		let preview = preview.clone();
		let toasts = toasts.clone();
		let token = token.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			let Some(user_id) = user_id else {
				return;
			};
			form.dispatch(ProfileAction::SubmitStarted);

			let form = form.clone();
			let field_errors = field_errors.clone();
			let preview = preview.clone();
			let notifier = Toaster(toasts.clone());
			let api = HttpProfileApi::new(&ApiConfig::from_env(), token.clone());
			spawn_local(async move {
				let outcome = submit_profile(&api, &notifier, user_id, &form).await;
				match outcome {
					SubmitOutcome::Saved => {
						field_errors.set(FieldErrors::default());
						// The accepted image becomes the form's own image_url,
						// so the ad-hoc preview can go.
						preview.set(None);
						form.dispatch(ProfileAction::SubmitSucceeded);
					}
					SubmitOutcome::Invalid(errors) => {
						field_errors.set(errors);
						form.dispatch(ProfileAction::SubmitFinished);
					}
					SubmitOutcome::Failed(_) => {
						field_errors.set(FieldErrors::default());
						form.dispatch(ProfileAction::SubmitFinished);
					}
				}
			});
		})
	};

	let body = if user_id.is_none() {
		html! {
			<div class="card-body text-center py-5">
				<p>{ "You need to be signed in to edit your profile." }</p>
				<Link<Route> classes="btn btn-primary" to={Route::Login}>{ "Login" }</Link<Route>>
			</div>
		}
	} else {
		match (*load).clone() {
			LoadState::Loading => html! { <LoadingSpinner /> },
			LoadState::Failed(detail) => {
				let retry = {
					let attempt = attempt.clone();
					Callback::from(move |_| attempt.set(*attempt + 1))
				};
				html! {
					<div class="card-body">
						<div class="alert alert-danger" role="alert">
							{ "Could not load your profile." }
							<div class="small">{ detail }</div>
						</div>
						<button type="button" class="btn btn-outline-primary" onclick={retry}>
							{ "Try again" }
						</button>
					</div>
				}
			}
			LoadState::Loaded => {
				let avatar_src = (*preview)
					.clone()
					.or_else(|| form.image_url.clone())
					.unwrap_or_else(|| DEFAULT_AVATAR.to_string());
				let error_for = |field: ProfileField| {
					field_errors
						.get(field.name())
						.map(|message| AttrValue::from(message.clone()))
				};

				html! {
					<form class="card-body" onsubmit={on_submit}>
						<div class="d-lg-flex align-items-center justify-content-between">
							<div class="d-flex align-items-center mb-4 mb-lg-0">
								<img
									src={avatar_src}
									class="avatar-xl rounded-circle"
									alt="avatar"
									style="width: 100px; height: 100px; border-radius: 50%; object-fit: cover;"
								/>
								<div class="ms-3">
									<h4 class="mb-0">{ "Your Profile Picture" }</h4>
									<p class="mb-0">{ "PNG or JPG no bigger than 800px wide and tall." }</p>
									<input
										type="file"
										name="image"
										accept="image/png,image/jpeg"
										class="form-control mt-3"
										onchange={on_image_change}
									/>
								</div>
							</div>
						</div>
						<hr class="my-5" />
						<div>
							<h4 class="mb-0">{ "Personal Details" }</h4>
							<p class="mb-4">{ "Edit your personal information and address." }</p>
							<div class="row gx-3">
								<TextField
									id="full_name"
									label="Full Name"
									placeholder="Full Name"
									value={form.values.full_name.clone()}
									oninput={edit_callback(ProfileField::FullName)}
									required={true}
									error={error_for(ProfileField::FullName)}
								/>
								<TextAreaField
									id="about"
									label="About Me"
									value={form.values.about.clone()}
									oninput={edit_callback(ProfileField::About)}
								/>
								<TextField
									id="bio"
									label="Bio"
									placeholder="Bio"
									value={form.values.bio.clone()}
									oninput={edit_callback(ProfileField::Bio)}
									required={true}
									error={error_for(ProfileField::Bio)}
								/>
								<TextField
									id="country"
									label="Country"
									placeholder="Country"
									value={form.values.country.clone()}
									oninput={edit_callback(ProfileField::Country)}
									required={true}
									error={error_for(ProfileField::Country)}
								/>
								<TextField
									id="city"
									label="City"
									placeholder="City"
									value={form.values.city.clone()}
									oninput={edit_callback(ProfileField::City)}
									required={true}
									error={error_for(ProfileField::City)}
								/>
								<TextField
									id="facebook"
									label="Facebook"
									placeholder="Facebook"
									value={form.values.facebook.clone()}
									oninput={edit_callback(ProfileField::Facebook)}
								/>
								<TextField
									id="instagram"
									label="Instagram"
									placeholder="Instagram"
									value={form.values.instagram.clone()}
									oninput={edit_callback(ProfileField::Instagram)}
								/>
								<TextField
									id="linkedin"
									label="Linkedin"
									placeholder="Linkedin"
									value={form.values.linkedin.clone()}
									oninput={edit_callback(ProfileField::Linkedin)}
								/>
								<TextField
									id="whatsapp"
									label="Whatsapp"
									placeholder="Whatsapp"
									value={form.values.whatsapp.clone()}
									oninput={edit_callback(ProfileField::Whatsapp)}
								/>
								<hr />
								if let Some(joined) = form.joined {
									<div class="mb-3 col-12 text-center">
										<p>{ format!("You've been with us since {}", member_since(&joined)) }</p>
									</div>
								}
								<hr />
								<div class="col-12">
									<button class="btn btn-primary" type="submit" disabled={form.submitting}>
										if form.submitting {
											<span class="spinner-border spinner-border-sm me-2" role="status" />
											{ "Saving..." }
										} else {
											{ "Update Profile" }
										}
									</button>
								</div>
							</div>
						</div>
					</form>
				}
			}
		}
	};

	html! {
		<>
			<Header />
			<section class="pt-5 pb-5">
				<div class="container">
					<div class="row mt-0 mt-md-4">
						<div class="col-lg-12 col-md-8 col-12">
							<div class="card">
								<div class="card-header">
									<h3 class="mb-0">{ "Profile Details" }</h3>
									<p class="mb-0">
										{ "You have full control to manage your own account setting." }
									</p>
								</div>
								{ body }
							</div>
						</div>
					</div>
				</div>
			</section>
			<Footer />
		</>
	}
}
