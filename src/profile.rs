//! Static site content: who the portfolio belongs to and what the page says.

/// Full display name.
pub const OWNER_NAME: &str = "Kiran Rakh";
/// Used to address the owner in the prefilled mail body.
pub const OWNER_FIRST_NAME: &str = "Kiran";
pub const EMAIL: &str = "kiranrakh155@gmail.com";
pub const PHONE: &str = "+91 7721879397";
pub const LOCATION: &str = "Pune, India";
pub const RESUME_URL: &str =
	"https://drive.google.com/file/d/1PCrE7L3v9qBdMoFAlB-3GWSbU6fq2TDa/view?usp=sharing";

/// An external profile link.
#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
	pub label: &'static str,
	pub href: &'static str,
	/// Short glyph shown inside the round icon button.
	pub glyph: &'static str,
}

pub const GITHUB: SocialLink = SocialLink {
	label: "GitHub",
	href: "https://github.com/KiranRakh",
	glyph: "GH",
};

pub const LINKEDIN: SocialLink = SocialLink {
	label: "LinkedIn",
	href: "https://www.linkedin.com/in/kiran-rakh-b644b6248/",
	glyph: "in",
};

pub const MAIL: SocialLink = SocialLink {
	label: "Email",
	href: "mailto:kiranrakh155@gmail.com",
	glyph: "@",
};

/// Links shown in the navigation bar and hero.
pub const SOCIAL_LINKS: &[SocialLink] = &[GITHUB, LINKEDIN, MAIL];

/// In-page anchors listed in the navigation bar.
pub const NAV_ITEMS: &[(&str, &str)] = &[
	("Home", "#hero"),
	("About", "#about"),
	("Skills", "#skills"),
	("Contact", "#contact"),
];

/// Phrases cycled by the hero typewriter.
pub const PHRASES: &[&str] = &[
	"DevOps Enthusiast",
	"CI/CD Pipeline Builder",
	"Cloud Native Learner",
	"Kubernetes Specialist",
	"Automation Lover",
];

pub const INTRO: &str = "Passionate DevOps Engineer with expertise in cloud-native infrastructure, \
	automation pipelines, and container orchestration. Experienced in building scalable solutions \
	using modern DevOps practices, CI/CD automation, and cloud technologies. Committed to continuous \
	learning and delivering reliable, efficient systems.";

/// Text shown inside the drifting code panels of the background.
pub const CODE_SNIPPETS: &[&[&str]] = &[
	&["apiVersion: v1", "kind: Pod", "metadata:", "  name: app"],
	&["FROM node:alpine", "COPY . /app", "RUN npm install", "EXPOSE 3000"],
	&["pipeline {", "  agent any", "  stages {", "    stage(\"Build\")"],
	&[
		"resource \"aws_instance\"",
		"ami = \"ami-12345\"",
		"instance_type = \"t3.micro\"",
	],
	&[
		"prometheus:",
		"  scrape_configs:",
		"  - job_name: \"app\"",
		"    targets: [\"app:3000\"]",
	],
];

/// A named group of skills with self-assessed proficiency in percent.
#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
	pub title: &'static str,
	pub skills: &'static [(&'static str, u8)],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
	SkillGroup {
		title: "Containers & Orchestration",
		skills: &[("Docker", 85), ("Kubernetes", 75), ("Helm", 65)],
	},
	SkillGroup {
		title: "CI/CD",
		skills: &[("Jenkins", 80), ("GitHub Actions", 80), ("ArgoCD", 60)],
	},
	SkillGroup {
		title: "Cloud & IaC",
		skills: &[("AWS", 75), ("Terraform", 70), ("Ansible", 65)],
	},
	SkillGroup {
		title: "Monitoring & Scripting",
		skills: &[("Prometheus", 70), ("Grafana", 70), ("Bash", 80), ("Python", 70)],
	},
];

/// Short cards shown beside the about paragraph.
pub const HIGHLIGHTS: &[(&str, &str)] = &[
	("Automation", "Pipelines that build, test and ship without hand-holding."),
	("Reliability", "Observable systems with alerts that mean something."),
	("Cloud Native", "Containers, orchestration and infrastructure as code."),
];

pub const ABOUT: &str = "B.E. graduate (2024) based in Pune, focused on DevOps and cloud-native \
	engineering. I enjoy turning manual release steps into repeatable pipelines, packaging services \
	into containers, and wiring up the monitoring that keeps them healthy.";
