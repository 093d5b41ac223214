use leptos::html::Section;
use leptos::prelude::*;

use super::CtaButton;
use crate::components::icons::{Icon, PLAY_CIRCLE};
use crate::components::reveal::{Motion, use_in_view};
use crate::site::{GET_STARTED, WATCH_DEMO};

#[component]
pub fn FinalCta() -> impl IntoView {
	let section_ref = NodeRef::<Section>::new();
	let in_view = use_in_view(section_ref, "-100px");

	view! {
		<section node_ref=section_ref class="section final-cta">
			<div class="cta-wrap" style=move || Motion::scale_in(0.95, 0.0).style(in_view.get())>
				<div class="cta-card">
					<div class="cta-glow" />
					<div class="cta-body">
						<h2>"Ready to Transform" <br /> "Your Learning?"</h2>
						<p>"Join 10,000+ students navigating their courses spatially"</p>
						<div class="cta-actions">
							<CtaButton link=GET_STARTED />
							<a href=WATCH_DEMO.href class="btn-secondary">
								<Icon paths=PLAY_CIRCLE class="btn-icon" />
								{WATCH_DEMO.label}
							</a>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}
