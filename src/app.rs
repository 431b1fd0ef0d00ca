//! Application root
//!
//! Mounts the session and toast contexts, the router, and the toast host.
//! The session is loaded from local storage once at startup and provided as
//! an explicit context value so screens and chrome never reach for globals.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::apps::profile::components::ProfilePage;
use crate::core::components::layout::{Footer, Header};
use crate::core::notify::{ToastHost, ToastStack};
use crate::core::session::{Session, load_session};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
	title: AttrValue,
}

/// Stand-in for screens that are not built out yet.
#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
	html! {
		<>
			<Header />
			<section class="pt-5 pb-5">
				<div class="container text-center py-5">
					<h2>{ props.title.clone() }</h2>
					<p class="text-muted">{ "This screen is not available yet." }</p>
				</div>
			</section>
			<Footer />
		</>
	}
}

#[function_component(Home)]
fn home() -> Html {
	html! {
		<>
			<Header />
			<section class="pt-5 pb-5">
				<div class="container text-center py-5">
					<h1>{ "Sozo" }</h1>
					<p class="lead text-muted">{ "Stories from the community." }</p>
				</div>
			</section>
			<Footer />
		</>
	}
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::Profile => html! { <ProfilePage /> },
		Route::NotFound => html! { <Placeholder title="Page not found" /> },
		Route::Category => html! { <Placeholder title="Category" /> },
		Route::About => html! { <Placeholder title="About" /> },
		Route::Contact => html! { <Placeholder title="Contact" /> },
		Route::Search => html! { <Placeholder title="Search" /> },
		Route::Dashboard => html! { <Placeholder title="Dashboard" /> },
		Route::Posts => html! { <Placeholder title="Posts" /> },
		Route::AddPost => html! { <Placeholder title="Add Post" /> },
		Route::Comments => html! { <Placeholder title="Comments" /> },
		Route::Notifications => html! { <Placeholder title="Notifications" /> },
		Route::Register => html! { <Placeholder title="Register" /> },
		Route::Login => html! { <Placeholder title="Login" /> },
		Route::Logout => html! { <Placeholder title="Logout" /> },
	}
}

#[function_component(App)]
pub fn app() -> Html {
	let session = use_state(load_session);
	let toasts = use_reducer(ToastStack::default);

	html! {
		<ContextProvider<Session> context={(*session).clone()}>
			<ContextProvider<UseReducerHandle<ToastStack>> context={toasts.clone()}>
				<BrowserRouter>
					<Switch<Route> render={switch} />
				</BrowserRouter>
				<ToastHost stack={toasts.clone()} />
			</ContextProvider<UseReducerHandle<ToastStack>>>
		</ContextProvider<Session>>
	}
}
