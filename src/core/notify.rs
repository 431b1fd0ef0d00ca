//! Transient toast notifications
//!
//! Components report outcomes through the [`Notify`] trait so the flow logic
//! never touches the DOM directly. The production implementation pushes onto
//! a [`ToastStack`] rendered by [`ToastHost`]; tests substitute a recording
//! implementation.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen before auto-dismissing.
const TOAST_DISMISS_MS: u32 = 4_000;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
	Success,
	Error,
}

impl ToastKind {
	/// Bootstrap background class for this severity.
	pub fn class(self) -> &'static str {
		match self {
			ToastKind::Success => "bg-success",
			ToastKind::Error => "bg-danger",
		}
	}
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
	pub id: u32,
	pub kind: ToastKind,
	pub message: String,
	pub detail: String,
}

/// Ordered stack of visible notifications.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastStack {
	toasts: Vec<Toast>,
	next_id: u32,
}

impl ToastStack {
	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}
}

/// Transitions on the toast stack.
pub enum ToastAction {
	Push {
		kind: ToastKind,
		message: String,
		detail: String,
	},
	Dismiss(u32),
}

impl Reducible for ToastStack {
	type Action = ToastAction;

	fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
		let mut next = (*self).clone();
		match action {
			ToastAction::Push {
				kind,
				message,
				detail,
			} => {
				let id = next.next_id;
				next.next_id = next.next_id.wrapping_add(1);
				next.toasts.push(Toast {
					id,
					kind,
					message,
					detail,
				});
			}
			ToastAction::Dismiss(id) => {
				next.toasts.retain(|toast| toast.id != id);
			}
		}
		Rc::new(next)
	}
}

/// Notification service consumed by the flows.
pub trait Notify {
	fn notify(&self, kind: ToastKind, message: &str, detail: &str);
}

/// Production [`Notify`] implementation backed by the toast context.
#[derive(Clone, PartialEq)]
pub struct Toaster(pub UseReducerHandle<ToastStack>);

impl Notify for Toaster {
	fn notify(&self, kind: ToastKind, message: &str, detail: &str) {
		self.0.dispatch(ToastAction::Push {
			kind,
			message: message.to_string(),
			detail: detail.to_string(),
		});
	}
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
	pub stack: UseReducerHandle<ToastStack>,
}

/// Renders the toast stack in a fixed corner and auto-dismisses entries.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
	let stack = props.stack.clone();
	let ids: Vec<u32> = stack.toasts().iter().map(|toast| toast.id).collect();

	{
		let stack = stack.clone();
		// Dismissing an already-removed id is a no-op, so re-arming timers
		// on every stack change is harmless.
		use_effect_with(ids, move |ids| {
			for id in ids.clone() {
				let stack = stack.clone();
				Timeout::new(TOAST_DISMISS_MS, move || {
					stack.dispatch(ToastAction::Dismiss(id));
				})
				.forget();
			}
		});
	}

	html! {
		<div class="toast-container position-fixed bottom-0 end-0 p-3">
			{ for stack.toasts().iter().map(|toast| {
				let dismiss = {
					let stack = stack.clone();
					let id = toast.id;
					Callback::from(move |_| stack.dispatch(ToastAction::Dismiss(id)))
				};
				html! {
					<div key={toast.id} class={classes!("toast", "show", "text-white", toast.kind.class())} role="alert">
						<div class="d-flex">
							<div class="toast-body">
								<strong>{ toast.message.clone() }</strong>
								if !toast.detail.is_empty() {
									<div class="small">{ toast.detail.clone() }</div>
								}
							</div>
							<button
								type="button"
								class="btn-close btn-close-white me-2 m-auto"
								aria-label="Close"
								onclick={dismiss}
							/>
						</div>
					</div>
				}
			}) }
		</div>
	}
}
