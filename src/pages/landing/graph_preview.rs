use leptos::html::Section;
use leptos::prelude::*;
use log::info;

use crate::components::force_graph::{ForceGraphCanvas, GraphData, LinkRelation, NodeKind};
use crate::components::reveal::{Motion, use_in_view};
use crate::demo::demo_graph;

fn log_summary(graph: &GraphData) {
	let prerequisites = graph
		.links
		.iter()
		.filter(|l| l.relation(graph) == Some(LinkRelation::Prerequisite))
		.count();
	info!(
		"Demo graph: {} courses, {} modules, {} assignments, {} links ({} prerequisites)",
		graph.count_kind(NodeKind::Course),
		graph.count_kind(NodeKind::Module),
		graph.count_kind(NodeKind::Assignment),
		graph.links.len(),
		prerequisites
	);
}

/// Interactive preview of the demo course graph. The layout is only built
/// once the section is about to scroll into view, and the camera starts
/// orbiting at the same time.
#[component]
pub fn GraphPreview() -> impl IntoView {
	let section_ref = NodeRef::<Section>::new();
	let in_view = use_in_view(section_ref, "-100px");
	let (settled, set_settled) = signal(false);

	let graph = demo_graph();
	let graph_view = graph.validate().map(move |()| {
		log_summary(&graph);
		view! {
			<ForceGraphCanvas
				data=Signal::stored(graph)
				active=in_view
				auto_rotate=in_view
				on_engine_stop=Callback::new(move |()| {
					info!("Demo graph layout settled");
					set_settled.set(true);
				})
			/>
		}
	});

	view! {
		<section node_ref=section_ref id="demo" class="section graph-preview">
			<div class="container-wide">
				<div
					class="section-heading"
					style=move || Motion::heading().style(in_view.get())
				>
					<h2>"Your Academic Universe"</h2>
					<div class="heading-rule" />
				</div>

				<div
					class="glass-card graph-card"
					data-layout=move || if settled.get() { "settled" } else { "running" }
					style=move || Motion::scale_in(0.9, 0.2).style(in_view.get())
				>
					<div class="graph-stage">
						<ErrorBoundary fallback=|errors| {
							view! {
								<div class="graph-error">
									<p>"Uh oh! The course graph could not be drawn."</p>
									<ul>
										{move || {
											errors
												.get()
												.into_iter()
												.map(|(_, e)| view! { <li>{e.to_string()}</li> })
												.collect_view()
										}}
									</ul>
								</div>
							}
						}>{graph_view}</ErrorBoundary>
					</div>

					<div class="graph-hint">
						<span>"Drag to rotate • Scroll to zoom"</span>
					</div>
				</div>
			</div>
		</section>
	}
}
