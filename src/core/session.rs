//! Session state
//!
//! The authenticated session is an explicit value provided to components via
//! context rather than an ambient global, so the profile flow and the header
//! chrome stay independently testable. Mutation happens at login/logout; the
//! persisted copy lives in browser local storage.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "sozo.session";

/// The user attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
	pub user_id: Uuid,
	pub username: String,
}

/// Current session state.
///
/// `Default` is the anonymous session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
	pub user: Option<SessionUser>,
	pub access_token: Option<String>,
}

impl Session {
	/// Login-state predicate used by the chrome.
	pub fn is_logged_in(&self) -> bool {
		self.user.is_some()
	}

	/// Identifier of the current user, if any.
	pub fn user_id(&self) -> Option<Uuid> {
		self.user.as_ref().map(|user| user.user_id)
	}

	/// Bearer credential for authenticated requests.
	pub fn bearer(&self) -> Option<String> {
		self.access_token.clone()
	}
}

/// Load the persisted session, falling back to anonymous.
pub fn load_session() -> Session {
	LocalStorage::get(SESSION_STORAGE_KEY).unwrap_or_default()
}

/// Persist the session across reloads.
pub fn persist_session(session: &Session) -> Result<(), gloo_storage::errors::StorageError> {
	LocalStorage::set(SESSION_STORAGE_KEY, session)
}

/// Drop the persisted session (logout).
pub fn clear_session() {
	LocalStorage::delete(SESSION_STORAGE_KEY);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn logged_in() -> Session {
		Session {
			user: Some(SessionUser {
				user_id: Uuid::nil(),
				username: "jane".into(),
			}),
			access_token: Some("token-abc".into()),
		}
	}

	#[test]
	fn anonymous_session_is_logged_out() {
		let session = Session::default();
		assert!(!session.is_logged_in());
		assert_eq!(session.user_id(), None);
		assert_eq!(session.bearer(), None);
	}

	#[test]
	fn authenticated_session_exposes_identity() {
		let session = logged_in();
		assert!(session.is_logged_in());
		assert_eq!(session.user_id(), Some(Uuid::nil()));
		assert_eq!(session.bearer().as_deref(), Some("token-abc"));
	}

	#[test]
	fn session_round_trips_through_serde() {
		let session = logged_in();
		let json = serde_json::to_string(&session).unwrap();
		let restored: Session = serde_json::from_str(&json).unwrap();
		assert_eq!(restored, session);
	}
}
