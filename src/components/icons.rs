use leptos::prelude::*;

pub const ARROW_RIGHT: &[&str] = &["M13 7l5 5m0 0l-5 5m5-5H6"];

pub const MICROPHONE: &[&str] = &[
	"M19 11a7 7 0 01-7 7m0 0a7 7 0 01-7-7m7 7v4m0 0H8m4 0h4m-4-8a3 3 0 01-3-3V5a3 3 0 116 0v6a3 3 0 01-3 3z",
];

pub const CUBE: &[&str] = &[
	"M14 10l-2 1m0 0l-2-1m2 1v2.5M20 7l-2 1m2-1l-2-1m2 1v2.5M14 4l-2-1-2 1M4 7l2-1M4 7l2 1M4 7v2.5M12 21l-2-1m2 1l2-1m-2 1v-2.5M6 18l-2-1v-2.5M18 18l2-1v-2.5",
];

pub const REFRESH: &[&str] = &[
	"M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15",
];

pub const PLAY_CIRCLE: &[&str] = &[
	"M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664z",
	"M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
];

/// Outline icon drawn with `currentColor` strokes.
#[component]
pub fn Icon(
	paths: &'static [&'static str],
	#[prop(into, default = "icon".into())] class: String,
	#[prop(default = 2.0)] stroke_width: f64,
) -> impl IntoView {
	view! {
		<svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
			{paths
				.iter()
				.map(|d| {
					view! {
						<path
							stroke-linecap="round"
							stroke-linejoin="round"
							stroke-width=stroke_width.to_string()
							d=*d
						/>
					}
				})
				.collect_view()}
		</svg>
	}
}
