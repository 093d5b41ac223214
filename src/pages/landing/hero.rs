use leptos::prelude::*;

use super::CtaButton;
use crate::components::reveal::{Motion, use_mounted};
use crate::site::LAUNCH_DASHBOARD;

#[component]
pub fn Hero() -> impl IntoView {
	let mounted = use_mounted();
	let stagger = move |delay: f64| move || Motion::fade_in_up(delay).style(mounted.get());

	view! {
		<section class="hero">
			<div class="hero-orb-wrap">
				<div class="hero-orb" />
			</div>
			<div class="dot-grid" />

			<div class="hero-content">
				<h1 class="hero-title" style=stagger(0.0)>
					"Learning Made"
					<span class="hero-title-accent">"Efficient"</span>
				</h1>
				<p class="hero-subtitle" style=stagger(0.2)>
					"Play School Like A Game — Navigate your Canvas courses as a 3D knowledge graph"
				</p>
				<div class="hero-cta" style=stagger(0.4)>
					<CtaButton link=LAUNCH_DASHBOARD />
				</div>
			</div>

			<div class="scroll-indicator" aria-hidden="true">
				<div class="scroll-indicator-dot" />
			</div>
		</section>
	}
}
