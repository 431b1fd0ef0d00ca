//! Logging macros that work on both WASM and native targets
//!
//! On `wasm32` the macros write to the browser console; everywhere else they
//! write to stderr. `info_log!` and `warn_log!` compile to no-ops in release
//! builds; `error_log!` always logs because submit failures are diagnostic
//! detail for operators, not the user.

/// Logs an informational message (debug builds only).
#[macro_export]
macro_rules! info_log {
	($($arg:tt)*) => {{
		#[cfg(debug_assertions)]
		{
			#[cfg(target_arch = "wasm32")]
			::web_sys::console::info_1(&format!($($arg)*).into());
			#[cfg(not(target_arch = "wasm32"))]
			eprintln!("[INFO] {}", format!($($arg)*));
		}
		#[cfg(not(debug_assertions))]
		{
			let _ = format_args!($($arg)*);
		}
	}};
}

/// Logs a warning (debug builds only).
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		#[cfg(debug_assertions)]
		{
			#[cfg(target_arch = "wasm32")]
			::web_sys::console::warn_1(&format!($($arg)*).into());
			#[cfg(not(target_arch = "wasm32"))]
			eprintln!("[WARN] {}", format!($($arg)*));
		}
		#[cfg(not(debug_assertions))]
		{
			let _ = format_args!($($arg)*);
		}
	}};
}

/// Logs an error in every build profile.
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => {{
		#[cfg(target_arch = "wasm32")]
		::web_sys::console::error_1(&format!($($arg)*).into());
		#[cfg(not(target_arch = "wasm32"))]
		eprintln!("[ERROR] {}", format!($($arg)*));
	}};
}
