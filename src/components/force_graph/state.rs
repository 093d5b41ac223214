use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale;
use super::types::GraphData;

/// Per-tick cooling rate of the simulation temperature.
pub const ALPHA_DECAY: f64 = 0.02;
/// Temperature below which the layout is considered settled.
pub const ALPHA_MIN: f64 = 0.001;
/// Fraction of node velocity lost per step.
pub const VELOCITY_DECAY: f32 = 0.3;
/// Orbit speed; 1.0 is one revolution per minute.
pub const AUTO_ROTATE_SPEED: f64 = 0.5;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

const INITIAL_SPREAD: f64 = 100.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub name: String,
	pub color: String,
	pub val: f64,
}

impl NodeInfo {
	pub fn radius(&self) -> f64 {
		scale::node_radius(self.val)
	}
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// Pointer drag that spins the orbit.
#[derive(Clone, Debug, Default)]
pub struct RotateState {
	pub active: bool,
	pub start_x: f64,
	pub angle_start: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Orbit {
	pub angle: f64,
	pub auto_rotate: bool,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub rotate: RotateState,
	pub orbit: Orbit,
	pub hover: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub alpha: f64,
	pub engine_running: bool,
	center: (f64, f64),
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 1.0 - VELOCITY_DECAY,
		});
		let mut id_to_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (INITIAL_SPREAD * angle.cos()) as f32,
				y: (INITIAL_SPREAD * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					name: node.name.clone(),
					color: node.color.clone(),
					val: node.kind.val(),
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		let mut state = Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			rotate: RotateState::default(),
			orbit: Orbit::default(),
			hover: None,
			width,
			height,
			alpha: 1.0,
			engine_running: true,
			center: (0.0, 0.0),
		};
		state.center = state.centroid();
		state
	}

	pub fn centroid(&self) -> (f64, f64) {
		let (mut sx, mut sy, mut n) = (0.0, 0.0, 0usize);
		self.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			n += 1;
		});
		if n == 0 {
			(0.0, 0.0)
		} else {
			(sx / n as f64, sy / n as f64)
		}
	}

	/// Graph space to screen space: orbit around the centroid, then zoom and pan.
	pub fn project(&self, gx: f64, gy: f64) -> (f64, f64) {
		let (dx, dy) = (gx - self.center.0, gy - self.center.1);
		let (sin, cos) = self.orbit.angle.sin_cos();
		let (rx, ry) = (dx * cos - dy * sin, dx * sin + dy * cos);
		(
			self.transform.x + rx * self.transform.k,
			self.transform.y + ry * self.transform.k,
		)
	}

	pub fn unproject(&self, sx: f64, sy: f64) -> (f64, f64) {
		let (rx, ry) = (
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		);
		let (sin, cos) = self.orbit.angle.sin_cos();
		(
			self.center.0 + rx * cos + ry * sin,
			self.center.1 - rx * sin + ry * cos,
		)
	}

	/// Closest node whose hit circle contains the screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.unproject(sx, sy);
		let mut found: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < scale::hit_radius(node.data.user_data.val)
				&& found.is_none_or(|(_, best)| dist < best)
			{
				found = Some((node.index(), dist));
			}
		});
		found.map(|(idx, _)| idx)
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) -> bool {
		if self.hover == node {
			return false;
		}
		self.hover = node;
		true
	}

	/// Name, screen position and screen radius of the hovered node.
	pub fn hovered(&self) -> Option<(String, f64, f64, f64)> {
		let idx = self.hover?;
		let mut out = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				let (sx, sy) = self.project(node.x() as f64, node.y() as f64);
				let info = &node.data.user_data;
				out = Some((info.name.clone(), sx, sy, info.radius() * self.transform.k));
			}
		});
		out
	}

	pub fn begin_rotate(&mut self, x: f64) {
		self.rotate = RotateState {
			active: true,
			start_x: x,
			angle_start: self.orbit.angle,
		};
	}

	/// A drag across the full canvas height turns the graph once.
	pub fn drag_rotate(&mut self, x: f64) {
		if !self.rotate.active || self.height <= 0.0 {
			return;
		}
		let dx = x - self.rotate.start_x;
		self.orbit.angle = self.rotate.angle_start + 2.0 * PI * dx / self.height;
	}

	pub fn end_rotate(&mut self) {
		self.rotate.active = false;
	}

	/// Zooms around the cursor so the point under it stays fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Advances the layout and the orbit. Returns `true` on the tick the
	/// layout settles.
	pub fn tick(&mut self, dt: f32) -> bool {
		let mut settled = false;
		if self.engine_running {
			self.graph.update(dt);
			self.alpha += (0.0 - self.alpha) * ALPHA_DECAY;
			if self.alpha < ALPHA_MIN {
				self.engine_running = false;
				settled = true;
			}
			self.center = self.centroid();
		}

		if self.orbit.auto_rotate && !self.rotate.active {
			self.orbit.angle += 2.0 * PI / 60.0 * AUTO_ROTATE_SPEED * dt as f64;
		}
		settled
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode, NodeKind};

	fn small_graph() -> GraphData {
		let node = |id: &str, kind| GraphNode {
			id: id.into(),
			name: id.to_uppercase(),
			kind,
			color: "#3b82f6".into(),
		};
		GraphData {
			nodes: vec![
				node("c", NodeKind::Course),
				node("m", NodeKind::Module),
				node("a", NodeKind::Assignment),
			],
			links: vec![
				GraphLink {
					source: "c".into(),
					target: "m".into(),
				},
				GraphLink {
					source: "m".into(),
					target: "a".into(),
				},
			],
		}
	}

	fn first_node(state: &ForceGraphState) -> (DefaultNodeIdx, f64, f64) {
		let mut out = None;
		state.graph.visit_nodes(|node| {
			if out.is_none() {
				out = Some((node.index(), node.x() as f64, node.y() as f64));
			}
		});
		out.expect("graph has nodes")
	}

	#[test]
	fn test_starts_centered_on_canvas() {
		let state = ForceGraphState::new(&small_graph(), 800.0, 600.0);
		let (cx, cy) = state.centroid();
		let (sx, sy) = state.project(cx, cy);
		assert!((sx - 400.0).abs() < 1e-6);
		assert!((sy - 300.0).abs() < 1e-6);
	}

	#[test]
	fn test_unproject_inverts_project() {
		let mut state = ForceGraphState::new(&small_graph(), 800.0, 600.0);
		state.orbit.angle = 1.3;
		state.zoom_at(120.0, 80.0, -1.0);
		let (sx, sy) = state.project(42.0, -17.0);
		let (gx, gy) = state.unproject(sx, sy);
		assert!((gx - 42.0).abs() < 1e-9);
		assert!((gy + 17.0).abs() < 1e-9);
	}

	#[test]
	fn test_hit_test_finds_node_under_cursor() {
		let mut state = ForceGraphState::new(&small_graph(), 800.0, 600.0);
		state.orbit.angle = 0.7;
		let (idx, x, y) = first_node(&state);
		let (sx, sy) = state.project(x, y);
		assert!(state.node_at_position(sx, sy) == Some(idx));
		assert!(state.node_at_position(0.0, 0.0).is_none());
	}

	#[test]
	fn test_hover_reports_change_once() {
		let mut state = ForceGraphState::new(&small_graph(), 800.0, 600.0);
		let (idx, _, _) = first_node(&state);
		assert!(state.set_hover(Some(idx)));
		assert!(!state.set_hover(Some(idx)));
		let (name, _, _, radius) = state.hovered().expect("hovered node");
		let kind = match name.as_str() {
			"C" => NodeKind::Course,
			"M" => NodeKind::Module,
			_ => NodeKind::Assignment,
		};
		assert!((radius - scale::node_radius(kind.val())).abs() < 1e-9);
		assert!(state.set_hover(None));
		assert!(state.hovered().is_none());
	}

	#[test]
	fn test_zoom_is_clamped() {
		let mut state = ForceGraphState::new(&small_graph(), 800.0, 600.0);
		for _ in 0..100 {
			state.zoom_at(400.0, 300.0, -1.0);
		}
		assert_eq!(state.transform.k, MAX_ZOOM);
		for _ in 0..200 {
			state.zoom_at(400.0, 300.0, 1.0);
		}
		assert_eq!(state.transform.k, MIN_ZOOM);
	}

	#[test]
	fn test_engine_settles_once() {
		let mut state = ForceGraphState::new(&small_graph(), 800.0, 600.0);
		for _ in 0..341 {
			assert!(!state.tick(0.016));
		}
		assert!(state.tick(0.016));
		assert!(!state.engine_running);
		assert!(!state.tick(0.016));
	}

	#[test]
	fn test_auto_rotate_only_when_enabled() {
		let mut state = ForceGraphState::new(&small_graph(), 800.0, 600.0);
		state.tick(1.0);
		assert_eq!(state.orbit.angle, 0.0);

		state.orbit.auto_rotate = true;
		state.tick(1.0);
		let expected = 2.0 * PI / 60.0 * AUTO_ROTATE_SPEED;
		assert!((state.orbit.angle - expected).abs() < 1e-9);
	}

	#[test]
	fn test_drag_rotates_and_pauses_auto_rotate() {
		let mut state = ForceGraphState::new(&small_graph(), 800.0, 600.0);
		state.orbit.auto_rotate = true;
		state.begin_rotate(100.0);
		state.drag_rotate(400.0);
		assert!((state.orbit.angle - PI).abs() < 1e-9);

		state.tick(1.0);
		assert!((state.orbit.angle - PI).abs() < 1e-9);

		state.end_rotate();
		state.drag_rotate(700.0);
		assert!((state.orbit.angle - PI).abs() < 1e-9);
	}
}
