use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;

/// Bookkeeping for a self-rescheduling frame callback: at most one request in
/// flight, and nothing requested after cancellation.
#[derive(Debug, Default)]
struct Flight {
	pending: Option<i32>,
	cancelled: bool,
}

impl Flight {
	fn may_request(&self) -> bool {
		self.pending.is_none() && !self.cancelled
	}

	/// Called at the top of every callback. `false` means stop here.
	fn begin_frame(&mut self) -> bool {
		self.pending = None;
		!self.cancelled
	}

	fn cancel(&mut self) -> Option<i32> {
		self.cancelled = true;
		self.pending.take()
	}
}

/// A cancellable `requestAnimationFrame` loop.
///
/// The callback receives elapsed seconds since page load. Once cancelled the
/// loop never reschedules; a frame that is already running finishes.
pub struct FrameLoop {
	flight: Rc<RefCell<Flight>>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
	pub fn new(mut on_frame: impl FnMut(f64) + 'static) -> Self {
		let flight = Rc::new(RefCell::new(Flight::default()));
		let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

		let (flight_inner, callback_inner) = (flight.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			if !flight_inner.borrow_mut().begin_frame() {
				return;
			}
			on_frame(timestamp * 0.001);
			request(&flight_inner, &callback_inner);
		}));

		Self { flight, callback }
	}

	/// Schedule the first frame. Does nothing if one is already pending.
	pub fn start(&self) {
		request(&self.flight, &self.callback);
	}

	pub fn cancel(&self) {
		let pending = self.flight.borrow_mut().cancel();
		if let (Some(handle), Some(window)) = (pending, web_sys::window()) {
			let _ = window.cancel_animation_frame(handle);
		}
		// Breaks the closure's reference cycle back to itself.
		self.callback.borrow_mut().take();
		debug!("frame loop cancelled");
	}
}

fn request(flight: &Rc<RefCell<Flight>>, callback: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
	if !flight.borrow().may_request() {
		return;
	}
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(ref cb) = *callback.borrow() {
		if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			flight.borrow_mut().pending = Some(handle);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_one_request_in_flight() {
		let mut flight = Flight::default();
		assert!(flight.may_request());
		flight.pending = Some(1);
		assert!(!flight.may_request());
		assert!(flight.begin_frame());
		assert!(flight.may_request());
	}

	#[test]
	fn cancel_returns_pending_handle_and_blocks_further_frames() {
		let mut flight = Flight {
			pending: Some(7),
			cancelled: false,
		};
		assert_eq!(flight.cancel(), Some(7));
		assert!(!flight.may_request());
		assert!(!flight.begin_frame());
		assert_eq!(flight.cancel(), None);
	}
}
