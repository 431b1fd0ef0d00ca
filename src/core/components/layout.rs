//! Layout chrome
//!
//! Header navigation and footer. Neither component owns state or performs
//! network calls; the header only branches on the session's login predicate.
//! The branch itself is the pure [`auth_actions`] function so it can be
//! tested without a DOM.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::core::format::current_year;
use crate::core::session::Session;
use crate::routes::Route;

/// One auth-dependent header action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthAction {
	pub label: &'static str,
	pub route: Route,
	pub class: &'static str,
}

/// The pair of header actions for the given login state.
///
/// Authenticated sessions get Dashboard/Logout, anonymous ones Register/Login.
pub fn auth_actions(logged_in: bool) -> [AuthAction; 2] {
	if logged_in {
		[
			AuthAction {
				label: "Dashboard",
				route: Route::Dashboard,
				class: "btn btn-secondary text-light",
			},
			AuthAction {
				label: "Logout",
				route: Route::Logout,
				class: "btn btn-danger ms-2 text-light",
			},
		]
	} else {
		[
			AuthAction {
				label: "Register",
				route: Route::Register,
				class: "btn btn-success text-light",
			},
			AuthAction {
				label: "Login",
				route: Route::Login,
				class: "btn btn-success ms-2 text-light",
			},
		]
	}
}

/// Primary navigation links shown to every visitor.
const NAV_LINKS: [(&str, Route); 2] = [("Home", Route::Home), ("Category", Route::Category)];

/// Dashboard dropdown destinations (authenticated screens).
const DASHBOARD_LINKS: [(&str, Route); 6] = [
	("Dashboard", Route::Dashboard),
	("Posts", Route::Posts),
	("Add Post", Route::AddPost),
	("Comments", Route::Comments),
	("Notifications", Route::Notifications),
	("Profile", Route::Profile),
];

/// Footer copyright line.
pub fn copyright_line(year: i32) -> String {
	format!("\u{a9} {year} The Sozo Foundation")
}

/// Site header with primary navigation and auth-dependent actions.
#[function_component(Header)]
pub fn header() -> Html {
	let session = use_context::<Session>().unwrap_or_default();
	let actions = auth_actions(session.is_logged_in());

	html! {
		<header class="navbar-dark bg-light navbar-sticky border-bottom">
			<nav class="navbar navbar-expand-lg">
				<div class="container">
					<Link<Route> classes="navbar-brand fw-bold text-dark" to={Route::Home}>
						{ "Sozo" }
					</Link<Route>>
					<div class="collapse navbar-collapse show" id="navbarCollapse">
						<div class="nav mt-3 mt-lg-0 px-4 flex-nowrap align-items-center">
							<div class="nav-item w-100">
								// Search affordance only: the input submits nothing, the
								// icon links to the search screen.
								<form class="rounded position-relative">
									<input
										class="form-control pe-5 bg-light text-dark"
										type="search"
										placeholder="Search Articles"
										aria-label="Search"
									/>
									<Link<Route>
										classes="btn bg-transparent border-0 px-2 py-0 position-absolute top-50 end-0 translate-middle-y text-dark"
										to={Route::Search}
									>
										{ "Search" }
									</Link<Route>>
								</form>
							</div>
						</div>
						<ul class="navbar-nav navbar-nav-scroll ms-auto text-dark">
							{ for NAV_LINKS.iter().map(|(label, route)| html! {
								<li class="nav-item">
									<Link<Route> classes="nav-link active text-dark" to={*route}>
										{ *label }
									</Link<Route>>
								</li>
							}) }
							<li class="nav-item dropdown">
								<a
									class="nav-link dropdown-toggle active text-dark"
									href="#"
									id="pagesMenu"
									data-bs-toggle="dropdown"
									aria-haspopup="true"
									aria-expanded="false"
								>
									{ "Pages" }
								</a>
								<ul class="dropdown-menu" aria-labelledby="pagesMenu">
									<li>
										<Link<Route> classes="dropdown-item text-dark" to={Route::About}>
											{ "About" }
										</Link<Route>>
									</li>
									<li>
										<Link<Route> classes="dropdown-item text-dark" to={Route::Contact}>
											{ "Contact" }
										</Link<Route>>
									</li>
								</ul>
							</li>
							<li class="nav-item dropdown">
								<a
									class="nav-link dropdown-toggle active text-dark"
									href="#"
									id="dashboardMenu"
									data-bs-toggle="dropdown"
									aria-haspopup="true"
									aria-expanded="false"
								>
									{ "Dashboard" }
								</a>
								<ul class="dropdown-menu" aria-labelledby="dashboardMenu">
									{ for DASHBOARD_LINKS.iter().map(|(label, route)| html! {
										<li>
											<Link<Route> classes="dropdown-item text-dark" to={*route}>
												{ *label }
											</Link<Route>>
										</li>
									}) }
								</ul>
							</li>
							<li class="nav-item">
								{ for actions.iter().map(|action| html! {
									<Link<Route> classes={action.class} to={action.route}>
										{ action.label }
									</Link<Route>>
								}) }
							</li>
						</ul>
					</div>
				</div>
			</nav>
		</header>
	}
}

/// Social links shown in the footer.
const SOCIAL_LINKS: [(&str, &str); 3] = [
	("Facebook", "https://facebook.com/thesozofoundation"),
	("Twitter", "https://twitter.com/thesozofoundation"),
	("YouTube", "https://youtube.com/@thesozofoundation"),
];

/// Site footer: branding, social links, computed current year.
#[function_component(Footer)]
pub fn footer() -> Html {
	html! {
		<footer class="bg-light py-4 border-top">
			<div class="container">
				<div class="row align-items-center text-center text-md-start">
					<div class="col-md-6 mb-3 mb-md-0">
						<div class="text-muted">{ copyright_line(current_year()) }</div>
					</div>
					<div class="col-md-6">
						<ul class="nav justify-content-center justify-content-md-end">
							{ for SOCIAL_LINKS.iter().map(|(label, href)| html! {
								<li class="nav-item">
									<a
										class="nav-link px-2"
										href={*href}
										target="_blank"
										rel="noopener noreferrer"
									>
										{ *label }
									</a>
								</li>
							}) }
						</ul>
					</div>
				</div>
			</div>
		</footer>
	}
}
