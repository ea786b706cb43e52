use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::ForceGraphState;
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::graph::{Graph, SelectionEvent, SelectionState};

type SharedState = Rc<RefCell<Option<ForceGraphState>>>;

/// Width available to the canvas inside its container.
fn fit_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(CANVAS_WIDTH)
}

/// Pointer position relative to the canvas.
fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Force-directed view of the knowledge graph.
///
/// Draws the nodes matching `query`, paints them from `selection`, and turns
/// node and background clicks into selection transitions. Setting `focus`
/// eases the view onto that node and clears the request. The canvas spans its
/// container's width and follows it when the window is resized.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] graph: Signal<Arc<Graph>>,
	#[prop(into)] query: Signal<String>,
	selection: RwSignal<SelectionState>,
	focus: RwSignal<Option<String>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let stopped = Arc::new(AtomicBool::new(false));
	let frame = Arc::new(AtomicI32::new(0));
	let (state_init, animate_init) = (state.clone(), animate.clone());
	let (stopped_init, frame_init) = (stopped.clone(), frame.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = (fit_width(&canvas), CANVAS_HEIGHT);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("canvas 2d context unavailable");
			return;
		};

		let mut initial = ForceGraphState::new(w, h);
		initial.set_data(&graph.get_untracked(), &query.get_untracked());
		initial.selection = selection.get_untracked();
		*state_init.borrow_mut() = Some(initial);

		// The loop only holds itself weakly, so it is freed with the component.
		let (state_anim, animate_self) = (state_init.clone(), Rc::downgrade(&animate_init));
		let (stopped_anim, frame_anim) = (stopped_init.clone(), frame_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if stopped_anim.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			let Some(animate) = animate_self.upgrade() else {
				return;
			};
			if let (Some(win), Some(cb)) = (web_sys::window(), animate.borrow().as_ref()) {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frame_anim.store(id, Ordering::Relaxed);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.store(id, Ordering::Relaxed);
			}
		}
	});

	let state_resize = state.clone();
	let resize = window_event_listener(ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let width = fit_width(&canvas);
		canvas.set_width(width as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(width, CANVAS_HEIGHT);
		}
	});

	on_cleanup(move || {
		stopped.store(true, Ordering::Relaxed);
		if let Some(win) = web_sys::window() {
			let _ = win.cancel_animation_frame(frame.load(Ordering::Relaxed));
		}
		resize.remove();
		log::debug!("graph canvas unmounted, animation stopped");
	});

	// Re-layout when the graph arrives or the search changes.
	let state_data = state.clone();
	Effect::new(move |_| {
		let (graph, query) = (graph.get(), query.get());
		if let Some(ref mut s) = *state_data.borrow_mut() {
			s.set_data(&graph, &query);
		}
	});

	let state_sel = state.clone();
	Effect::new(move |_| {
		let current = selection.get();
		if let Some(ref mut s) = *state_sel.borrow_mut() {
			s.selection = current;
		}
	});

	let state_focus = state.clone();
	Effect::new(move |_| {
		let Some(id) = focus.get() else {
			return;
		};
		if let Some(ref mut s) = *state_focus.borrow_mut() {
			s.focus_on(&id);
		}
		focus.set(None);
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let event: Option<SelectionEvent> = state_mu
			.borrow_mut()
			.as_mut()
			.and_then(|s| s.pointer_up());
		if let Some(event) = event {
			let next = graph.with_untracked(|g| selection.get_untracked().transition(g, event));
			selection.set(next);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.cancel_pointer();
			s.hover = None;
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y() <= 0.0);
		}
	};

	view! {
		<div class="canvas-host">
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
		</div>
	}
}
