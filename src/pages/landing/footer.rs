use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="footer">
			<div class="container footer-row">
				<div class="brand">
					<div class="brand-mark">
						<span>"N"</span>
					</div>
					<span class="brand-name">"N-Mapper"</span>
				</div>

				<p class="footer-tagline">
					"Made with ❤️ for students who want to play school like a game"
				</p>

				<nav class="footer-links">
					<a href="#">"Privacy"</a>
					<a href="#">"Terms"</a>
				</nav>
			</div>
		</footer>
	}
}
