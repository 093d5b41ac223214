use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::ForceGraphState;
use super::types::GraphData;

const FRAME_DT: f32 = 0.016;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Debug, Error)]
pub enum CanvasError {
	#[error("no global window")]
	NoWindow,
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("browser call failed: {0}")]
	Js(String),
}

impl From<JsValue> for CanvasError {
	fn from(value: JsValue) -> Self {
		CanvasError::Js(format!("{value:?}"))
	}
}

/// Size of the element hosting the canvas, or a fixed fallback when it is
/// not laid out yet.
fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Unregisters and drops the resize closure, then drops the frame closure.
/// The frame closure holds a handle to its own slot, so emptying the slot is
/// what frees it along with the state it captured.
fn teardown<R, A>(
	resize: &RefCell<Option<R>>,
	animate: &RefCell<Option<A>>,
	unregister: impl FnOnce(&R),
) {
	if let Some(cb) = resize.borrow_mut().take() {
		unregister(&cb);
	}
	let frame = animate.borrow_mut().take();
	drop(frame);
}

/// Renders `data` as a force-directed graph on a canvas that fills its parent.
///
/// The simulation is only built once `active` turns true, so the layout cost
/// is deferred until the graph is about to be seen. A spinner covers the
/// canvas until the first frame is drawn.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] active: Signal<bool>,
	#[prop(into)] auto_rotate: Signal<bool>,
	#[prop(optional)] on_engine_stop: Option<Callback<()>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (ready, set_ready) = signal(false);
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		if !active.get() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}

		let data = data.get_untracked();
		if let Err(err) = data.validate() {
			error!("Refusing to lay out graph: {err}");
			return;
		}

		let setup = || -> Result<(), CanvasError> {
			let window: Window = web_sys::window().ok_or(CanvasError::NoWindow)?;
			let ctx: CanvasRenderingContext2d = canvas
				.get_context("2d")?
				.ok_or(CanvasError::NoContext)?
				.dyn_into()
				.map_err(|_| CanvasError::NoContext)?;

			let (w, h) = container_size(&canvas);
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);

			let mut graph_state = ForceGraphState::new(&data, w, h);
			graph_state.orbit.auto_rotate = auto_rotate.get_untracked();
			*state_init.borrow_mut() = Some(graph_state);
			info!(
				"Graph initialized: {} nodes, {} links",
				data.nodes.len(),
				data.links.len()
			);

			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let (nw, nh) = container_size(&canvas_resize);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
			}

			let (state_anim, animate_inner, resize_detach, canvas_anim) = (
				state_init.clone(),
				animate_init.clone(),
				resize_cb_init.clone(),
				canvas.clone(),
			);
			*animate_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				if !canvas_anim.is_connected() {
					teardown(&*resize_detach, &*animate_inner, |cb| {
						let _ = win
							.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
					});
					debug!("Graph canvas detached, animation stopped");
					return;
				}

				let settled = state_anim.borrow_mut().as_mut().map(|s| {
					let settled = s.tick(FRAME_DT);
					render::render(s, &ctx);
					settled
				});
				if settled == Some(true) {
					debug!("Graph layout settled");
					if let Some(cb) = on_engine_stop {
						cb.run(());
					}
				}
				if !ready.get_untracked() {
					set_ready.set(true);
				}

				if let Some(ref cb) = *animate_inner.borrow() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}));
			if let Some(ref cb) = *animate_init.borrow() {
				window.request_animation_frame(cb.as_ref().unchecked_ref())?;
			}
			Ok(())
		};

		if let Err(err) = setup() {
			error!("Graph canvas setup failed: {err}");
		}
	});

	let state_rot = state.clone();
	Effect::new(move |_| {
		let enabled = auto_rotate.get();
		if let Some(ref mut s) = *state_rot.borrow_mut() {
			s.orbit.auto_rotate = enabled;
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, _)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_rotate(x);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.rotate.active {
				s.drag_rotate(x);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_rotate();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_rotate();
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<div class="force-graph">
			<canvas
				node_ref=canvas_ref
				class="force-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<Show when=move || !ready.get()>
				<div class="graph-loading">
					<div class="spinner" />
				</div>
			</Show>
		</div>
	}
}
