use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use super::submit::{ContactConfig, ContactForm, Delivery, SubmitError, submit};
use super::transport::FetchTransport;
use crate::profile;
use crate::theme::Theme;

const STATUS_RESET: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
	Idle,
	Success,
	Error,
}

impl From<&Result<Delivery, SubmitError>> for SubmitStatus {
	fn from(outcome: &Result<Delivery, SubmitError>) -> Self {
		match outcome {
			Ok(_) => SubmitStatus::Success,
			Err(_) => SubmitStatus::Error,
		}
	}
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 \
	focus:ring-cyan-400 disabled:opacity-50";

#[component]
fn TextField(
	id: &'static str,
	label: &'static str,
	kind: &'static str,
	placeholder: &'static str,
	value: RwSignal<String>,
	#[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
	view! {
		<div>
			<label for=id class="block text-sm font-medium mb-2">{label}" *"</label>
			<input
				type=kind
				id=id
				name=id
				required
				class=INPUT_CLASS
				placeholder=placeholder
				prop:value=move || value.get()
				on:input=move |ev| value.set(event_target_value(&ev))
				disabled=move || disabled.get()
			/>
		</div>
	}
}

/// Contact details, social links and the message form.
#[component]
pub fn Contact() -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	let (name, email, subject, message) = (
		RwSignal::new(String::new()),
		RwSignal::new(String::new()),
		RwSignal::new(String::new()),
		RwSignal::new(String::new()),
	);
	let submitting = RwSignal::new(false);
	let status = RwSignal::new(SubmitStatus::Idle);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if submitting.get_untracked() {
			return;
		}
		let form = ContactForm {
			name: name.get_untracked(),
			email: email.get_untracked(),
			subject: subject.get_untracked(),
			message: message.get_untracked(),
		};
		submitting.set(true);
		status.set(SubmitStatus::Idle);

		spawn_local(async move {
			let outcome = submit(&FetchTransport, &ContactConfig::default(), &form).await;
			match &outcome {
				Ok(delivery) => {
					info!("contact form delivered ({delivery:?})");
					for field in [name, email, subject, message] {
						field.set(String::new());
					}
				}
				Err(e) => error!("contact form not delivered: {e}"),
			}
			status.set(SubmitStatus::from(&outcome));
			submitting.set(false);
			set_timeout(
				move || {
					let _ = status.try_set(SubmitStatus::Idle);
				},
				STATUS_RESET,
			);
		});
	};

	let card_class = move || {
		theme.get().pick(
			"bg-slate-800/50 border-slate-700/50 text-white",
			"bg-white/70 border-gray-200 text-gray-900",
		)
	};

	let info_cards = [
		("Email", profile::EMAIL, format!("mailto:{}", profile::EMAIL)),
		(
			"Phone",
			profile::PHONE,
			format!("tel:{}", profile::PHONE.replace(' ', "")),
		),
		("Location", profile::LOCATION, "#".to_string()),
	];

	view! {
		<section id="contact" class="py-20 relative">
			<div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
				<div class="text-center mb-16">
					<h2 class="text-4xl md:text-5xl font-bold mb-6">
						<span class="gradient-text">"Get In Touch"</span>
					</h2>
					<p class="text-lg max-w-2xl mx-auto">
						"Ready to discuss DevOps opportunities or collaborate on exciting projects? Let's connect!"
					</p>
				</div>

				<div class="grid lg:grid-cols-2 gap-12">
					<div class="space-y-8">
						<h3 class="text-2xl font-semibold mb-6">"Contact Information"</h3>
						<div class="space-y-4">
							{info_cards
								.into_iter()
								.map(|(label, value, href)| {
									view! {
										<a href=href class=move || format!("flex items-center space-x-4 p-4 rounded-xl border {}", card_class())>
											<div>
												<p class="text-sm opacity-70">{label}</p>
												<p class="font-medium">{value}</p>
											</div>
										</a>
									}
								})
								.collect_view()}
						</div>

						<h3 class="text-2xl font-semibold mb-6">"Social Media"</h3>
						<div class="flex items-center space-x-4">
							{[profile::GITHUB, profile::LINKEDIN]
								.into_iter()
								.map(|link| {
									view! {
										<a
											href=link.href
											target="_blank"
											rel="noopener noreferrer"
											aria-label=link.label
											class=move || format!("p-4 rounded-xl border {}", card_class())
										>
											{link.glyph}
										</a>
									}
								})
								.collect_view()}
						</div>

						<a
							href=profile::RESUME_URL
							target="_blank"
							rel="noopener noreferrer"
							class="inline-flex items-center space-x-2 gradient-button px-6 py-3 rounded-lg font-semibold"
						>
							"Download Resume"
						</a>
					</div>

					<div class=move || format!("rounded-xl border p-8 {}", card_class())>
						<h3 class="text-2xl font-semibold mb-6">"Send a Message"</h3>

						<Show when=move || status.get() == SubmitStatus::Success>
							<div class="mb-6 p-4 rounded-lg status-success" role="status">
								"Message sent successfully! I'll get back to you soon."
							</div>
						</Show>
						<Show when=move || status.get() == SubmitStatus::Error>
							<div class="mb-6 p-4 rounded-lg status-error" role="alert">
								"Failed to send message. Please try again or contact me directly."
							</div>
						</Show>

						<form on:submit=on_submit class="space-y-6">
							<div class="grid md:grid-cols-2 gap-6">
								<TextField id="name" label="Name" kind="text" placeholder="Your name" value=name disabled=submitting />
								<TextField id="email" label="Email" kind="email" placeholder="your@email.com" value=email disabled=submitting />
							</div>
							<TextField id="subject" label="Subject" kind="text" placeholder="Subject of your message" value=subject disabled=submitting />
							<div>
								<label for="message" class="block text-sm font-medium mb-2">"Message *"</label>
								<textarea
									id="message"
									name="message"
									rows="6"
									required
									class=INPUT_CLASS
									placeholder="Your message here..."
									prop:value=move || message.get()
									on:input=move |ev| message.set(event_target_value(&ev))
									disabled=move || submitting.get()
								/>
							</div>
							<button
								type="submit"
								class="w-full gradient-button px-6 py-3 rounded-lg font-semibold disabled:opacity-50"
								disabled=move || submitting.get()
							>
								{move || if submitting.get() { "Sending..." } else { "Send Message" }}
							</button>
						</form>
					</div>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn outcome_maps_to_status() {
		assert_eq!(SubmitStatus::from(&Ok(Delivery::MailClient)), SubmitStatus::Success);
		assert_eq!(
			SubmitStatus::from(&Err(SubmitError::Exhausted)),
			SubmitStatus::Error
		);
	}
}
