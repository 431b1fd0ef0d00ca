//! Display date formatting
//!
//! The profile view renders the server-assigned creation timestamp as a
//! "member since" line, e.g. `August 30th, 2026`.

use chrono::{DateTime, Datelike, Utc};

/// Format a timestamp as `Month DDth, YYYY` with an English ordinal day.
pub fn member_since(date: &DateTime<Utc>) -> String {
	let day = date.day();
	format!(
		"{} {}{}, {}",
		date.format("%B"),
		day,
		ordinal_suffix(day),
		date.year()
	)
}

/// Current year, used by the footer copyright line.
pub fn current_year() -> i32 {
	Utc::now().year()
}

fn ordinal_suffix(day: u32) -> &'static str {
	// 11th, 12th and 13th break the last-digit rule.
	match day % 100 {
		11..=13 => "th",
		_ => match day % 10 {
			1 => "st",
			2 => "nd",
			3 => "rd",
			_ => "th",
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use rstest::rstest;

	#[rstest]
	#[case(1, "st")]
	#[case(2, "nd")]
	#[case(3, "rd")]
	#[case(4, "th")]
	#[case(11, "th")]
	#[case(12, "th")]
	#[case(13, "th")]
	#[case(21, "st")]
	#[case(22, "nd")]
	#[case(23, "rd")]
	#[case(30, "th")]
	#[case(31, "st")]
	fn ordinal_suffixes(#[case] day: u32, #[case] suffix: &str) {
		assert_eq!(ordinal_suffix(day), suffix);
	}

	#[test]
	fn member_since_renders_full_date() {
		let date = Utc.with_ymd_and_hms(2024, 8, 3, 12, 0, 0).unwrap();
		assert_eq!(member_since(&date), "August 3rd, 2024");
	}

	#[test]
	fn current_year_is_plausible() {
		assert!(current_year() >= 2024);
	}
}
