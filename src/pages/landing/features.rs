use leptos::html::Section;
use leptos::prelude::*;

use crate::components::icons::{CUBE, Icon, MICROPHONE, REFRESH};
use crate::components::reveal::{Motion, use_in_view};

pub struct Feature {
	pub icon: &'static [&'static str],
	pub accent: &'static str,
	pub title: &'static str,
	pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
	Feature {
		icon: MICROPHONE,
		accent: "accent-emerald",
		title: "Voice-First Control",
		description: "Say 'Show me CSE 101' and watch the graph zoom to your course. Natural language navigation powered by AI.",
	},
	Feature {
		icon: CUBE,
		accent: "accent-blue",
		title: "Spatial Learning",
		description: "Every course, module, and assignment becomes a node. See relationships, prerequisites, and connections at a glance.",
	},
	Feature {
		icon: REFRESH,
		accent: "accent-purple",
		title: "Live Canvas Data",
		description: "Syncs with your Canvas LMS. Updates automatically when assignments are added or grades are posted.",
	},
];

/// Stagger between consecutive cards, in seconds.
const CARD_STAGGER: f64 = 0.1;

#[component]
pub fn FeatureCards() -> impl IntoView {
	let section_ref = NodeRef::<Section>::new();
	let in_view = use_in_view(section_ref, "-50px");

	view! {
		<section node_ref=section_ref class="section">
			<div class="container feature-grid">
				{FEATURES
					.iter()
					.enumerate()
					.map(|(index, feature)| {
						let motion = Motion::fade_in_up(index as f64 * CARD_STAGGER);
						view! {
							<article class="glass feature-card" style=move || motion.style(in_view.get())>
								<Icon
									paths=feature.icon
									class=format!("feature-icon {}", feature.accent)
									stroke_width=1.5
								/>
								<h3>{feature.title}</h3>
								<p>{feature.description}</p>
							</article>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
