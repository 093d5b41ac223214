use leptos::html::Section;
use leptos::prelude::*;

use crate::components::reveal::{Motion, use_in_view};

/// (full name, abbreviation shown in the strip)
pub const UNIVERSITIES: [(&str, &str); 4] = [
	("UC San Diego", "UCSD"),
	("MIT", "MIT"),
	("Stanford", "Stanford"),
	("UC Berkeley", "Berkeley"),
];

#[component]
pub fn SocialProof() -> impl IntoView {
	let section_ref = NodeRef::<Section>::new();
	let in_view = use_in_view(section_ref, "-50px");

	view! {
		<section node_ref=section_ref class="section social-proof">
			<div class="container-narrow">
				<p class="eyebrow" style=move || Motion::fade(0.0).style(in_view.get())>
					"Trusted by Students at Top Universities"
				</p>
				<div
					class="university-row"
					style=move || Motion::rise(20.0, 0.2).style(in_view.get())
				>
					{UNIVERSITIES
						.iter()
						.map(|&(name, abbr)| {
							view! {
								<span class="university" title=name>
									{abbr}
								</span>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}
