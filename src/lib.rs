//! Leptos client-side app for the N-Mapper landing page.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod demo;
mod pages;
pub mod site;

// Top-Level pages
use crate::components::seo::SeoMeta;
use crate::pages::landing::Landing;
use crate::pages::not_found::NotFound;
use crate::site::SITE;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the landing page and handles 404's.
///
/// `/app` is served by the product itself; links to it are marked
/// `rel="external"` so this router never matches them.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang=SITE.lang attr:dir="ltr" attr:style=SITE.font_variables() />
		<Body attr:class="antialiased" />
		<SeoMeta />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Landing />
			</Routes>
		</Router>
	}
}
