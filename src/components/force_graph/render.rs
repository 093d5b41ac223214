use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

const LINK_COLOR: &str = "rgba(255, 255, 255, 0.08)";
const LINK_WIDTH: f64 = 1.5;
const NODE_OPACITY: f64 = 0.75;
const TOOLTIP_FONT: &str = "12px 'Space Grotesk', sans-serif";

struct NodeSprite {
	x: f64,
	y: f64,
	radius: f64,
	color: String,
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	// Transparent background; the glass card behind the canvas shows through.
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_tooltip(state, ctx);
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(LINK_COLOR);
	ctx.set_line_width(LINK_WIDTH * state.transform.k);
	ctx.begin_path();
	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1) = state.project(n1.x() as f64, n1.y() as f64);
		let (x2, y2) = state.project(n2.x() as f64, n2.y() as f64);
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
	});
	ctx.stroke();
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let mut sprites = Vec::new();
	state.graph.visit_nodes(|node| {
		let (x, y) = state.project(node.x() as f64, node.y() as f64);
		let info = &node.data.user_data;
		sprites.push(NodeSprite {
			x,
			y,
			radius: info.radius() * k,
			color: info.color.clone(),
		});
	});
	// Small nodes first so courses sit on top of their modules.
	sprites.sort_by(|a, b| a.radius.total_cmp(&b.radius));

	ctx.set_global_alpha(NODE_OPACITY);
	for sprite in &sprites {
		let (x, y, radius) = (sprite.x, sprite.y, sprite.radius);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&sprite.color);
		ctx.fill();

		// Off-center highlight gives the disc a lit, spherical look.
		let (hx, hy) = (x - radius * 0.35, y - radius * 0.35);
		if let Ok(gradient) = ctx.create_radial_gradient(hx, hy, radius * 0.1, x, y, radius) {
			let _ = gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.45)");
			let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some((name, x, y, radius)) = state.hovered() else {
		return;
	};
	ctx.set_font(TOOLTIP_FONT);
	let width = ctx
		.measure_text(&name)
		.map(|m| m.width())
		.unwrap_or(name.len() as f64 * 7.0);
	let (pad, height) = (6.0, 20.0);
	let (left, top) = (x - width / 2.0 - pad, y - radius - height - 6.0);

	ctx.set_fill_style_str("rgba(0, 0, 0, 0.65)");
	ctx.fill_rect(left, top, width + 2.0 * pad, height);
	ctx.set_fill_style_str("white");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&name, x, top + height / 2.0);
}
