//! Client-side route table
//!
//! Covers every destination the header navigation links to. Screens outside
//! the profile flow mount placeholder pages until their views land.

use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/category")]
	Category,
	#[at("/about")]
	About,
	#[at("/contact")]
	Contact,
	#[at("/search")]
	Search,
	#[at("/dashboard")]
	Dashboard,
	#[at("/posts")]
	Posts,
	#[at("/add-post")]
	AddPost,
	#[at("/comments")]
	Comments,
	#[at("/notifications")]
	Notifications,
	#[at("/profile")]
	Profile,
	#[at("/register")]
	Register,
	#[at("/login")]
	Login,
	#[at("/logout")]
	Logout,
	#[not_found]
	#[at("/404")]
	NotFound,
}
