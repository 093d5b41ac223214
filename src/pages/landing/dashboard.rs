use leptos::html::Section;
use leptos::prelude::*;

use crate::components::icons::{ARROW_RIGHT, Icon};
use crate::components::reveal::{Motion, use_in_view};
use crate::site::SEE_IT_IN_ACTION;

const MOCK_URL: &str = "n-mapper.app/dashboard";
const SCREENSHOT_PATH: &str = "/docs/images/dashboard.png";

/// Browser-window frame around a placeholder for the dashboard screenshot.
#[component]
pub fn DashboardMockup() -> impl IntoView {
	let section_ref = NodeRef::<Section>::new();
	let in_view = use_in_view(section_ref, "-100px");

	view! {
		<section node_ref=section_ref class="section section-shaded">
			<div class="container-wide">
				<div
					class="section-heading"
					style=move || Motion::heading().style(in_view.get())
				>
					<h2>"The Full Experience"</h2>
					<p class="section-lead">
						"Your courses, visualized in 3D with voice navigation and real-time sync"
					</p>
				</div>

				<div
					class="mockup"
					style=move || Motion::scale_in(0.95, 0.2).style(in_view.get())
				>
					<div class="mockup-chrome">
						<div class="mockup-dots">
							<span class="dot dot-red" />
							<span class="dot dot-yellow" />
							<span class="dot dot-green" />
						</div>
						<div class="mockup-url">{MOCK_URL}</div>
					</div>

					<div class="mockup-screen">
						<div class="mockup-placeholder">
							{format!("[Dashboard Screenshot: {SCREENSHOT_PATH}]")}
						</div>
						<div class="mockup-hover" />
					</div>

					<a href=SEE_IT_IN_ACTION.href rel=SEE_IT_IN_ACTION.rel() class="text-link">
						{SEE_IT_IN_ACTION.label}
						<Icon paths=ARROW_RIGHT class="text-link-arrow" />
					</a>
				</div>
			</div>
		</section>
	}
}
