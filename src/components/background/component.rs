use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::frame_loop::FrameLoop;
use super::render::CanvasPainter;
use super::state::BackgroundState;
use super::types::SimulationConfig;
use crate::theme::Theme;

/// Everything a mounted background owns, shared between the effect, the
/// resize listener and the frame callback.
#[derive(Clone, Default)]
struct Mount {
	state: Rc<RefCell<Option<BackgroundState>>>,
	frames: Rc<RefCell<Option<FrameLoop>>>,
	resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Mount {
	fn run(&self, ctx: CanvasRenderingContext2d) {
		let state = self.state.clone();
		let frames = FrameLoop::new(move |time| {
			if let Some(ref mut s) = *state.borrow_mut() {
				s.step(time, &mut CanvasPainter::new(&ctx));
			}
		});
		frames.start();
		*self.frames.borrow_mut() = Some(frames);
	}

	fn stop_frames(&self) {
		if let Some(frames) = self.frames.borrow_mut().take() {
			frames.cancel();
		}
		if let Some(ref mut s) = *self.state.borrow_mut() {
			s.teardown();
		}
	}

	fn teardown(&self) {
		self.stop_frames();
		if let Some(cb) = self.resize_cb.borrow_mut().take() {
			if let Some(window) = web_sys::window() {
				let _ =
					window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	}
}

fn viewport(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(600.0),
	)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Full-viewport decorative canvas behind the page content.
///
/// Regenerates every entity when the window is resized or `theme` changes.
/// Without a 2D context it silently renders nothing.
#[component]
pub fn AnimatedBackground(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mount = Mount::default();
	let mount_cleanup = StoredValue::new_local(mount.clone());

	Effect::new(move |_| {
		let theme = theme.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		mount.teardown();

		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("background: no 2d context, skipping animation");
			return;
		};

		let (w, h) = viewport(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut state = BackgroundState::from_entropy(SimulationConfig::default());
		state.setup(w, h, theme);
		*mount.state.borrow_mut() = Some(state);
		info!("background started ({w}x{h}, {})", theme.as_str());

		let (mount_resize, canvas_resize, ctx_resize) = (mount.clone(), canvas.clone(), ctx.clone());
		*mount.resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			mount_resize.stop_frames();
			if let Some(ref mut s) = *mount_resize.state.borrow_mut() {
				s.resize(nw, nh);
			}
			mount_resize.run(ctx_resize.clone());
		}));
		if let Some(ref cb) = *mount.resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		mount.run(ctx);
	});

	on_cleanup(move || {
		mount_cleanup.try_with_value(|m| m.teardown());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="animated-background"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: 0; pointer-events: none; opacity: 0.85;"
		/>
	}
}
