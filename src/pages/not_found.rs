use leptos::prelude::*;
use leptos_meta::Title;

/// 404 page for in-app paths that have no route.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Title text="Page not found | N-Mapper" />
		<main class="not-found">
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<a href="/" class="btn-secondary">
				"Back to the start"
			</a>
		</main>
	}
}
