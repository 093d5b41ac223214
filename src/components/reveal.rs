//! Scroll-triggered entrance animations.
//!
//! A section registers its root `<section>` with [`use_in_view`] and gets back a
//! signal that flips to `true` the first time the element enters the
//! viewport. Child elements turn that signal into inline styles through a
//! [`Motion`].

use leptos::html::Section;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const EASE: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Remembers whether an element has ever intersected the viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct InViewLatch {
	seen: bool,
}

impl InViewLatch {
	/// Returns `true` only for the first intersecting observation.
	pub fn observe(&mut self, is_intersecting: bool) -> bool {
		if self.seen || !is_intersecting {
			return false;
		}
		self.seen = true;
		true
	}
}

/// Slot for a value that gets `release` called on it when the current
/// reactive owner is cleaned up.
fn release_on_cleanup<T: 'static>(release: fn(&T)) -> StoredValue<Option<T>, LocalStorage> {
	let slot = StoredValue::new_local(None);
	on_cleanup(move || {
		slot.try_with_value(|held| {
			if let Some(value) = held {
				release(value);
			}
		});
	});
	slot
}

/// Watches `target` and returns a signal that latches `true` once it scrolls
/// into view. `root_margin` shrinks (negative) or grows the viewport used for
/// the test, in CSS margin syntax. The observer is disconnected on unmount
/// even if the element never came into view.
pub fn use_in_view(target: NodeRef<Section>, root_margin: &'static str) -> ReadSignal<bool> {
	let (in_view, set_in_view) = signal(false);
	let observer_slot = release_on_cleanup(IntersectionObserver::disconnect);

	Effect::new(move |_| {
		let Some(el) = target.get() else {
			return;
		};
		if in_view.get_untracked() {
			return;
		}

		let mut latch = InViewLatch::default();
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				let hit = entries
					.iter()
					.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
					.any(|e| e.is_intersecting());
				if latch.observe(hit) {
					debug!("Section entered viewport");
					set_in_view.set(true);
					observer.disconnect();
				}
			},
		)
		.into_js_value();

		let options = IntersectionObserverInit::new();
		options.set_root_margin(root_margin);
		match IntersectionObserver::new_with_options(callback.unchecked_ref(), &options) {
			Ok(observer) => {
				observer.observe(&el);
				observer_slot.set_value(Some(observer));
			}
			Err(err) => {
				warn!("IntersectionObserver unavailable, showing section: {err:?}");
				set_in_view.set(true);
			}
		}
	});

	in_view
}

/// Signal that turns `true` shortly after mount, for content that animates in
/// on page load rather than on scroll.
pub fn use_mounted() -> ReadSignal<bool> {
	let (mounted, set_mounted) = signal(false);

	Effect::new(move |_| {
		// The hidden state has to be painted once or no transition runs.
		let show = Closure::once_into_js(move || set_mounted.set(true));
		let scheduled = web_sys::window()
			.map(|w| {
				w.set_timeout_with_callback_and_timeout_and_arguments_0(show.unchecked_ref(), 50)
					.is_ok()
			})
			.unwrap_or(false);
		if !scheduled {
			set_mounted.set(true);
		}
	});

	mounted
}

/// Entrance animation: starts transparent, optionally shifted down and
/// shrunk, and transitions to its natural position once revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
	pub offset_y: f64,
	pub scale: f64,
	pub duration: f64,
	pub delay: f64,
}

impl Motion {
	pub const fn fade(delay: f64) -> Self {
		Self {
			offset_y: 0.0,
			scale: 1.0,
			duration: 0.6,
			delay,
		}
	}

	pub const fn fade_in_up(delay: f64) -> Self {
		Self {
			offset_y: 40.0,
			scale: 1.0,
			duration: 0.8,
			delay,
		}
	}

	/// Section headings rise a little less and a little faster.
	pub const fn heading() -> Self {
		Self {
			offset_y: 30.0,
			scale: 1.0,
			duration: 0.6,
			delay: 0.0,
		}
	}

	pub const fn scale_in(from: f64, delay: f64) -> Self {
		Self {
			offset_y: 0.0,
			scale: from,
			duration: 0.8,
			delay,
		}
	}

	pub const fn rise(offset_y: f64, delay: f64) -> Self {
		Self {
			offset_y,
			scale: 1.0,
			duration: 0.6,
			delay,
		}
	}

	fn transition(&self) -> String {
		format!(
			"transition: opacity {d}s {EASE} {delay}s, transform {d}s {EASE} {delay}s;",
			d = self.duration,
			delay = self.delay,
		)
	}

	fn hidden_transform(&self) -> String {
		let mut parts = Vec::new();
		if self.offset_y != 0.0 {
			parts.push(format!("translateY({}px)", self.offset_y));
		}
		if self.scale != 1.0 {
			parts.push(format!("scale({})", self.scale));
		}
		if parts.is_empty() {
			"none".to_string()
		} else {
			parts.join(" ")
		}
	}

	/// Inline CSS for the hidden (`visible == false`) or revealed state.
	pub fn style(&self, visible: bool) -> String {
		if visible {
			format!("opacity: 1; transform: none; {}", self.transition())
		} else {
			format!(
				"opacity: 0; transform: {}; {}",
				self.hidden_transform(),
				self.transition()
			)
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;

	fn bump(count: &Rc<Cell<u32>>) {
		count.set(count.get() + 1);
	}

	#[test]
	fn test_held_value_released_on_owner_cleanup() {
		let owner = Owner::new();
		owner.set();
		let count = Rc::new(Cell::new(0));
		let slot = release_on_cleanup(bump);
		slot.set_value(Some(count.clone()));
		assert_eq!(count.get(), 0);

		owner.cleanup();
		assert_eq!(count.get(), 1);
	}

	#[test]
	fn test_empty_slot_releases_nothing() {
		let owner = Owner::new();
		owner.set();
		let count = Rc::new(Cell::new(0));
		let slot = release_on_cleanup(bump);
		slot.set_value(Some(count.clone()));
		slot.set_value(None);

		owner.cleanup();
		assert_eq!(count.get(), 0);
	}

	#[test]
	fn test_latch_fires_once() {
		let mut latch = InViewLatch::default();
		assert!(!latch.observe(false));
		assert!(latch.observe(true));
		assert!(!latch.observe(true));
		assert!(!latch.observe(false));
		assert!(!latch.observe(true));
	}

	#[test]
	fn test_fade_in_up_hidden_state() {
		let style = Motion::fade_in_up(0.2).style(false);
		assert!(style.starts_with("opacity: 0;"));
		assert!(style.contains("transform: translateY(40px);"));
		assert!(style.contains("0.8s"));
		assert!(style.contains("0.2s"));
	}

	#[test]
	fn test_revealed_state_resets_transform() {
		let style = Motion::scale_in(0.9, 0.2).style(true);
		assert!(style.starts_with("opacity: 1; transform: none;"));
		assert!(!style.contains("scale(0.9)"));
	}

	#[test]
	fn test_scale_in_hidden_state() {
		let style = Motion::scale_in(0.95, 0.0).style(false);
		assert!(style.contains("transform: scale(0.95);"));
		assert!(!style.contains("translateY"));
	}

	#[test]
	fn test_fade_has_no_transform() {
		let style = Motion::fade(0.0).style(false);
		assert!(style.contains("transform: none;"));
	}

	#[test]
	fn test_heading_rises_thirty_pixels() {
		let style = Motion::heading().style(false);
		assert!(style.contains("translateY(30px)"));
		assert!(style.contains("0.6s"));
	}
}
