use std::time::Duration;

use leptos::prelude::*;

use super::typewriter::{TYPE_DELAY, Typewriter};
use crate::profile;
use crate::theme::Theme;

/// Re-arms itself after every step until the component's owner is disposed.
fn schedule(writer: StoredValue<Typewriter, LocalStorage>, typed: RwSignal<String>, delay: Duration) {
	set_timeout(
		move || {
			let Some((text, next)) = writer.try_update_value(|w| {
				let next = w.tick();
				(w.text(), next)
			}) else {
				return;
			};
			if typed.try_set(text.to_string()).is_some() {
				return;
			}
			schedule(writer, typed, next);
		},
		delay,
	);
}

#[component]
pub fn Hero() -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	let typed = RwSignal::new(String::new());
	let writer = StoredValue::new_local(Typewriter::new(profile::PHRASES));
	schedule(writer, typed, TYPE_DELAY);

	let muted = move || theme.get().pick("text-slate-300", "text-gray-600");
	let social_class = move || {
		theme.get().pick(
			"p-3 rounded-lg bg-slate-800/50 text-slate-400 hover:text-violet-400",
			"p-3 rounded-lg bg-white/50 text-gray-600 hover:text-violet-600",
		)
	};

	view! {
		<section id="hero" class="min-h-screen flex items-center justify-center relative">
			<div class="relative z-10 px-4 sm:px-6 lg:px-8 max-w-7xl mx-auto w-full">
				<div class="grid lg:grid-cols-2 gap-12 items-center">
					<div class="text-left mt-16 lg:mt-24 fade-in-left">
						<h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6">
							<span class=move || theme.get().pick("text-white", "text-gray-900")>"Hi, I'm "</span>
							<span class="gradient-text">{profile::OWNER_NAME}</span>
						</h1>

						<div class="text-xl md:text-2xl lg:text-3xl mb-8 h-16 flex items-center">
							<span class=muted>"I'm a "</span>
							<span class="ml-2 text-violet-500 font-semibold">
								{move || typed.get()}
								<span class="animate-pulse">"|"</span>
							</span>
						</div>

						<p class=move || format!("text-lg md:text-xl mb-8 max-w-2xl leading-relaxed {}", muted())>
							{profile::INTRO}
						</p>

						<div class="flex flex-col sm:flex-row items-start sm:items-center gap-6 mb-8">
							<a
								href=profile::RESUME_URL
								target="_blank"
								rel="noopener noreferrer"
								class="gradient-button px-6 py-3 rounded-lg font-semibold text-white"
							>
								"Download Resume"
							</a>
							<div class="flex items-center space-x-4">
								{profile::SOCIAL_LINKS
									.iter()
									.map(|link| {
										view! {
											<a
												href=link.href
												target="_blank"
												rel="noopener noreferrer"
												aria-label=link.label
												class=social_class
											>
												{link.glyph}
											</a>
										}
									})
									.collect_view()}
							</div>
						</div>
					</div>

					<div class="flex justify-center lg:justify-end mt-20 lg:mt-24 fade-in-right">
						<div class=move || {
							format!(
								"profile-card {}",
								theme.get().pick("profile-card-dark", "profile-card-light"),
							)
						}>
							<div class="profile-avatar">"KR"</div>
							<div class="text-center">
								<h3 class="text-base font-bold mb-1">"DevOps Engineer"</h3>
								<p class="text-sm mb-1 font-bold">"B.E Graduate 2024"</p>
								<p class="text-xs mb-1">{profile::LOCATION}</p>
								<p class="text-xs font-medium">"Available for DevOps Opportunities"</p>
							</div>
						</div>
					</div>
				</div>

				<div class="flex items-center justify-center mt-24">
					<a href="#about-skills" aria-label="Scroll down" class=move || format!("animate-bounce {}", muted())>
						"\u{2304}"
					</a>
				</div>
			</div>
		</section>
	}
}
