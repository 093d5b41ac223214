//! The landing page: seven independent sections stacked top to bottom.
//!
//! Each section owns its own reveal state; nothing flows between them.

use leptos::prelude::*;

use crate::components::icons::{ARROW_RIGHT, Icon};
use crate::site::NavLink;

mod call_to_action;
mod dashboard;
mod features;
mod footer;
mod graph_preview;
mod hero;
mod social_proof;

use call_to_action::FinalCta;
use dashboard::DashboardMockup;
use features::FeatureCards;
use footer::Footer;
use graph_preview::GraphPreview;
use hero::Hero;
use social_proof::SocialProof;

/// Primary call-to-action button with a trailing arrow.
#[component]
fn CtaButton(link: NavLink) -> impl IntoView {
	view! {
		<a href=link.href rel=link.rel() class="btn-primary">
			{link.label}
			<Icon paths=ARROW_RIGHT class="btn-arrow" />
		</a>
	}
}

#[component]
pub fn Landing() -> impl IntoView {
	view! {
		<main class="landing">
			<Hero />
			<GraphPreview />
			<FeatureCards />
			<DashboardMockup />
			<SocialProof />
			<FinalCta />
			<Footer />
		</main>
	}
}
