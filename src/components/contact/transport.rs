use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use super::submit::{MailTransport, SubmitError};

/// [`MailTransport`] for the browser: `fetch` for the HTTP tiers and
/// `window.location` for the mail client handoff.
pub struct FetchTransport;

fn js_error(value: JsValue) -> SubmitError {
	SubmitError::Transport(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn window() -> Result<Window, SubmitError> {
	web_sys::window().ok_or_else(|| SubmitError::Transport("no window".into()))
}

impl MailTransport for FetchTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<(), SubmitError> {
		let opts = RequestInit::new();
		opts.set_method("POST");
		opts.set_mode(RequestMode::Cors);
		opts.set_body(&JsValue::from_str(&body));

		let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
		request
			.headers()
			.set("Content-Type", "application/json")
			.map_err(js_error)?;

		let value = JsFuture::from(window()?.fetch_with_request(&request))
			.await
			.map_err(js_error)?;
		let response: Response = value.dyn_into().map_err(js_error)?;
		if response.ok() {
			Ok(())
		} else {
			Err(SubmitError::Status(response.status()))
		}
	}

	fn open_mail_client(&self, href: &str) -> Result<(), SubmitError> {
		window()?.location().set_href(href).map_err(js_error)
	}
}
