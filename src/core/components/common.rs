//! Shared form scaffolding
//!
//! Field components used by the dashboard screens:
//! - `TextField` - labeled text input with validation feedback
//! - `TextAreaField` - labeled multi-line input
//! - `LoadingSpinner` - centered loading indicator

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
	pub id: AttrValue,
	pub label: AttrValue,
	pub value: AttrValue,
	/// Receives the full field value on every keystroke.
	pub oninput: Callback<String>,
	#[prop_or_default]
	pub placeholder: AttrValue,
	#[prop_or_default]
	pub required: bool,
	/// Validation message; its presence switches the input to the invalid
	/// style and renders the feedback line.
	#[prop_or_default]
	pub error: Option<AttrValue>,
}

/// Labeled single-line text input.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
	let oninput = {
		let emit = props.oninput.clone();
		Callback::from(move |event: InputEvent| {
			let input: HtmlInputElement = event.target_unchecked_into();
			emit.emit(input.value());
		})
	};

	html! {
		<div class="mb-3">
			<label class="form-label" for={props.id.clone()}>{ props.label.clone() }</label>
			<input
				type="text"
				id={props.id.clone()}
				name={props.id.clone()}
				class={classes!("form-control", props.error.as_ref().map(|_| "is-invalid"))}
				placeholder={props.placeholder.clone()}
				value={props.value.clone()}
				required={props.required}
				{oninput}
			/>
			if let Some(error) = &props.error {
				<div class="invalid-feedback">{ error.clone() }</div>
			}
		</div>
	}
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
	pub id: AttrValue,
	pub label: AttrValue,
	pub value: AttrValue,
	pub oninput: Callback<String>,
	#[prop_or(5)]
	pub rows: u32,
	#[prop_or_default]
	pub error: Option<AttrValue>,
}

/// Labeled multi-line text input.
#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
	let oninput = {
		let emit = props.oninput.clone();
		Callback::from(move |event: InputEvent| {
			let area: HtmlTextAreaElement = event.target_unchecked_into();
			emit.emit(area.value());
		})
	};

	html! {
		<div class="mb-3">
			<label class="form-label" for={props.id.clone()}>{ props.label.clone() }</label>
			<textarea
				id={props.id.clone()}
				name={props.id.clone()}
				class={classes!("form-control", props.error.as_ref().map(|_| "is-invalid"))}
				rows={props.rows.to_string()}
				value={props.value.clone()}
				{oninput}
			/>
			if let Some(error) = &props.error {
				<div class="invalid-feedback">{ error.clone() }</div>
			}
		</div>
	}
}

/// Centered loading indicator.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
	html! {
		<div class="text-center py-5">
			<div class="spinner-border" role="status">
				<span class="visually-hidden">{ "Loading..." }</span>
			</div>
		</div>
	}
}
