use leptos::prelude::*;
use leptos_meta::Html;

use crate::components::about_skills::AboutSkills;
use crate::components::background::AnimatedBackground;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::navigation::Navigation;
use crate::theme::Theme;

/// The whole portfolio: every section stacked over the animated background.
#[component]
pub fn Home() -> impl IntoView {
	let theme = RwSignal::new(Theme::default());
	provide_context(theme);

	view! {
		<Html attr:data-theme=move || theme.get().as_str() />

		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class=move || format!("portfolio {}", theme.get().as_str())>
				<AnimatedBackground theme=theme />
				<Navigation />
				<main class="relative z-10">
					<Hero />
					<AboutSkills />
					<Contact />
				</main>
			</div>
		</ErrorBoundary>
	}
}
