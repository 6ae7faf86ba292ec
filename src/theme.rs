//! Dark/light theme flag and the colour palettes derived from it.

use std::fmt;

/// The page colour scheme, shared through Leptos context as an `RwSignal<Theme>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Slate background, bright accents.
	#[default]
	Dark,
	/// Near-white background, stronger accents.
	Light,
}

impl Theme {
	/// The opposite theme.
	pub fn toggled(self) -> Self {
		match self {
			Theme::Dark => Theme::Light,
			Theme::Light => Theme::Dark,
		}
	}

	/// Whether this is the dark scheme.
	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}

	/// Value for the `data-theme` attribute on `<html>`.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Dark => "dark",
			Theme::Light => "light",
		}
	}

	/// Canvas palette for the animated background.
	pub fn palette(self) -> &'static Palette {
		match self {
			Theme::Dark => &DARK,
			Theme::Light => &LIGHT,
		}
	}

	/// Pick between a dark and a light CSS class string.
	pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
		match self {
			Theme::Dark => dark,
			Theme::Light => light,
		}
	}
}

/// An RGBA colour with straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Rgba {
	/// Build a colour from its components.
	pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same colour with a replaced alpha channel.
	pub const fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Fully transparent black, used as the outer stop of glows.
	pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Every colour the background simulator needs for one theme.
#[derive(Debug)]
pub struct Palette {
	/// Primary, secondary and accent entries, three each.
	pub entities: [Rgba; 9],
	/// Radial background stops at offsets 0, 0.3, 0.6 and 1.
	pub backdrop: [(f64, Rgba); 4],
	pub grid: Rgba,
	pub panel_fill: Rgba,
	pub panel_border: Rgba,
	pub panel_text: Rgba,
	/// Peak opacity of a node-to-node connection at zero distance.
	pub link_alpha: f64,
}

const BLUE: Rgba = Rgba::new(59, 130, 246, 1.0);
const INDIGO: Rgba = Rgba::new(99, 102, 241, 1.0);
const VIOLET: Rgba = Rgba::new(139, 92, 246, 1.0);
const EMERALD: Rgba = Rgba::new(16, 185, 129, 1.0);
const GREEN: Rgba = Rgba::new(34, 197, 94, 1.0);
const AMBER: Rgba = Rgba::new(245, 158, 11, 1.0);
const ORANGE: Rgba = Rgba::new(249, 115, 22, 1.0);
const RED: Rgba = Rgba::new(239, 68, 68, 1.0);

const fn entities(primary: f64, secondary: f64, accent: f64) -> [Rgba; 9] {
	[
		BLUE.with_alpha(primary),
		INDIGO.with_alpha(primary),
		VIOLET.with_alpha(primary),
		EMERALD.with_alpha(secondary),
		GREEN.with_alpha(secondary),
		BLUE.with_alpha(secondary),
		AMBER.with_alpha(accent),
		ORANGE.with_alpha(accent),
		RED.with_alpha(accent),
	]
}

static DARK: Palette = Palette {
	entities: entities(0.8, 0.7, 0.6),
	backdrop: [
		(0.0, Rgba::new(15, 23, 42, 0.98)),
		(0.3, Rgba::new(30, 41, 59, 0.95)),
		(0.6, Rgba::new(51, 65, 85, 0.92)),
		(1.0, Rgba::new(15, 23, 42, 0.98)),
	],
	grid: BLUE.with_alpha(0.12),
	panel_fill: Rgba::new(30, 41, 59, 0.8),
	panel_border: BLUE.with_alpha(0.5),
	panel_text: Rgba::new(148, 163, 184, 0.8),
	link_alpha: 0.2,
};

static LIGHT: Palette = Palette {
	entities: entities(0.9, 0.8, 0.7),
	backdrop: [
		(0.0, Rgba::new(248, 250, 252, 0.98)),
		(0.3, Rgba::new(241, 245, 249, 0.95)),
		(0.6, Rgba::new(226, 232, 240, 0.92)),
		(1.0, Rgba::new(248, 250, 252, 0.98)),
	],
	grid: BLUE.with_alpha(0.18),
	panel_fill: Rgba::new(255, 255, 255, 0.9),
	panel_border: BLUE.with_alpha(0.7),
	panel_text: Rgba::new(51, 65, 85, 0.8),
	link_alpha: 0.3,
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggling_twice_is_identity() {
		assert_eq!(Theme::Dark.toggled(), Theme::Light);
		assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
	}

	#[test]
	fn rgba_formats_as_css() {
		assert_eq!(BLUE.with_alpha(0.4).to_string(), "rgba(59, 130, 246, 0.4)");
	}

	#[test]
	fn light_palette_is_more_opaque() {
		let (dark, light) = (Theme::Dark.palette(), Theme::Light.palette());
		for (d, l) in dark.entities.iter().zip(light.entities.iter()) {
			assert_eq!((d.r, d.g, d.b), (l.r, l.g, l.b));
			assert!(l.a > d.a);
		}
		assert!(light.link_alpha > dark.link_alpha);
	}
}
