use leptos::ev;
use leptos::prelude::*;

use crate::profile;
use crate::theme::Theme;

/// Scroll distance after which the bar gets an opaque background.
const SCROLL_THRESHOLD: f64 = 50.0;

fn scrolled_past_threshold() -> bool {
	window().scroll_y().is_ok_and(|y| y > SCROLL_THRESHOLD)
}

#[component]
fn ThemeToggle(#[prop(default = "")] class: &'static str) -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	view! {
		<button
			type="button"
			class=class
			title=move || {
				if theme.get().is_dark() { "Switch to Light Mode" } else { "Switch to Dark Mode" }
			}
			on:click=move |_| theme.update(|t| *t = t.toggled())
		>
			{move || if theme.get().is_dark() { "\u{2600}" } else { "\u{263E}" }}
		</button>
	}
}

/// Fixed top bar with section anchors, theme toggle and social links.
#[component]
pub fn Navigation() -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	let menu_open = RwSignal::new(false);
	let scrolled = RwSignal::new(false);

	let handle = window_event_listener(ev::scroll, move |_| {
		scrolled.set(scrolled_past_threshold());
	});
	on_cleanup(move || handle.remove());

	let bar_class = move || {
		let backdrop = match (scrolled.get(), theme.get()) {
			(false, _) => "bg-transparent",
			(true, Theme::Dark) => "bg-slate-900/95 backdrop-blur-sm border-b border-slate-800",
			(true, Theme::Light) => "bg-white/95 backdrop-blur-sm border-b border-gray-200",
		};
		format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {backdrop}")
	};
	let link_class = move || {
		theme
			.get()
			.pick("text-slate-300 hover:text-violet-400", "text-gray-600 hover:text-violet-600")
	};

	view! {
		<nav class=bar_class>
			<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
				<div class="flex items-center justify-between h-16">
					<a href="#hero" class="flex items-center space-x-2">
						<span class="brand-mark">"</>"</span>
						<span class="text-xl font-bold gradient-text">{profile::OWNER_NAME}</span>
					</a>

					<div class="hidden md:flex items-center space-x-8">
						{profile::NAV_ITEMS
							.iter()
							.map(|(name, href)| view! { <a href=*href class=link_class>{*name}</a> })
							.collect_view()}
						<ThemeToggle class="p-2 rounded-lg" />
						<div class="flex items-center space-x-4 ml-8">
							{profile::SOCIAL_LINKS
								.iter()
								.map(|link| {
									view! {
										<a
											href=link.href
											target="_blank"
											rel="noopener noreferrer"
											aria-label=link.label
											class=link_class
										>
											{link.glyph}
										</a>
									}
								})
								.collect_view()}
						</div>
					</div>

					<button
						type="button"
						class="md:hidden p-2 rounded-md"
						aria-label="Toggle menu"
						on:click=move |_| menu_open.update(|open| *open = !*open)
					>
						{move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
					</button>
				</div>
			</div>

			<Show when=move || menu_open.get()>
				<div class=move || {
					format!(
						"md:hidden backdrop-blur-sm border-t {}",
						theme.get().pick("bg-slate-900/95 border-slate-800", "bg-white/95 border-gray-200"),
					)
				}>
					<div class="px-2 pt-2 pb-3 space-y-1">
						{profile::NAV_ITEMS
							.iter()
							.map(|(name, href)| {
								view! {
									<a
										href=*href
										class=move || format!("block px-3 py-2 {}", link_class())
										on:click=move |_| menu_open.set(false)
									>
										{*name}
									</a>
								}
							})
							.collect_view()}
						<ThemeToggle class="flex items-center px-3 py-2" />
					</div>
				</div>
			</Show>
		</nav>
	}
}
