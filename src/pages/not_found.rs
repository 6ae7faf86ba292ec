use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="min-h-screen flex flex-col items-center justify-center">
			<h1 class="text-4xl font-bold mb-4">"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<a href="/" class="gradient-button px-6 py-3 rounded-lg font-semibold">"Back home"</a>
		</section>
	}
}
