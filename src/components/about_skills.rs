use leptos::prelude::*;

use crate::profile::{self, SkillGroup};
use crate::theme::Theme;

fn panel_class(theme: Theme) -> &'static str {
	theme.pick(
		"rounded-xl border p-6 bg-slate-800/50 border-slate-700/50 text-white",
		"rounded-xl border p-6 bg-white/70 border-gray-200 text-gray-900",
	)
}

#[component]
fn About() -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	view! {
		<section id="about" class="py-20 relative">
			<div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
				<h2 class="text-4xl md:text-5xl font-bold mb-10 text-center">
					<span class="gradient-text">"About Me"</span>
				</h2>
				<div class="grid lg:grid-cols-2 gap-12 items-start">
					<p class=move || {
						theme.get().pick("text-lg text-slate-300", "text-lg text-gray-700")
					}>{profile::ABOUT}</p>
					<div class="grid sm:grid-cols-3 lg:grid-cols-1 gap-4">
						{profile::HIGHLIGHTS
							.iter()
							.map(|(title, blurb)| {
								view! {
									<div class=move || panel_class(theme.get())>
										<h3 class="font-semibold mb-1">{*title}</h3>
										<p class="text-sm opacity-80">{*blurb}</p>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
fn SkillPanel(group: SkillGroup) -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	view! {
		<div class=move || panel_class(theme.get())>
			<h3 class="text-xl font-semibold mb-4">{group.title}</h3>
			<ul class="space-y-3">
				{group
					.skills
					.iter()
					.map(|(name, level)| {
						view! {
							<li>
								<div class="flex justify-between text-sm mb-1">
									<span>{*name}</span>
									<span class="opacity-70">{format!("{level}%")}</span>
								</div>
								<div class="skill-track">
									<div class="skill-bar" style=format!("width: {}%", (*level).min(100))></div>
								</div>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}

#[component]
fn Skills() -> impl IntoView {
	view! {
		<section id="skills" class="py-20 relative">
			<div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
				<h2 class="text-4xl md:text-5xl font-bold mb-10 text-center">
					<span class="gradient-text">"Skills"</span>
				</h2>
				<div class="grid md:grid-cols-2 gap-8">
					{profile::SKILL_GROUPS
						.iter()
						.map(|group| view! { <SkillPanel group=*group /> })
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

/// About blurb followed by the grouped skill panels.
#[component]
pub fn AboutSkills() -> impl IntoView {
	view! {
		<div id="about-skills">
			<About />
			<Skills />
		</div>
	}
}
