use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Types a phrase one character at a time, holds it, deletes it, then moves on
/// to the next phrase, forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
	phrases: &'static [&'static str],
	index: usize,
	/// Characters of the current phrase on screen.
	shown: usize,
	deleting: bool,
}

impl Typewriter {
	pub fn new(phrases: &'static [&'static str]) -> Self {
		Self {
			phrases,
			index: 0,
			shown: 0,
			deleting: false,
		}
	}

	fn phrase(&self) -> Option<&'static str> {
		self.phrases.get(self.index).copied()
	}

	/// Visible text right now.
	pub fn text(&self) -> &'static str {
		let Some(phrase) = self.phrase() else {
			return "";
		};
		let end = phrase
			.char_indices()
			.nth(self.shown)
			.map_or(phrase.len(), |(i, _)| i);
		&phrase[..end]
	}

	/// Advance one step and return how long to wait before the next one.
	pub fn tick(&mut self) -> Duration {
		let Some(phrase) = self.phrase() else {
			return TYPE_DELAY;
		};

		if self.deleting {
			self.shown = self.shown.saturating_sub(1);
			if self.shown > 0 {
				return DELETE_DELAY;
			}
			self.deleting = false;
			self.index = (self.index + 1) % self.phrases.len();
			return TYPE_DELAY;
		}

		let len = phrase.chars().count();
		self.shown = (self.shown + 1).min(len);
		if self.shown == len {
			self.deleting = true;
			return HOLD_DELAY;
		}
		TYPE_DELAY
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn types_holds_deletes_and_advances() {
		let mut tw = Typewriter::new(&["Ab", "Cd"]);
		assert_eq!(tw.text(), "");

		assert_eq!(tw.tick(), TYPE_DELAY);
		assert_eq!(tw.text(), "A");
		assert_eq!(tw.tick(), HOLD_DELAY);
		assert_eq!(tw.text(), "Ab");
		assert_eq!(tw.tick(), DELETE_DELAY);
		assert_eq!(tw.text(), "A");
		assert_eq!(tw.tick(), TYPE_DELAY);
		assert_eq!(tw.text(), "");

		tw.tick();
		assert_eq!(tw.text(), "C");
	}

	#[test]
	fn wraps_back_to_first_phrase() {
		let mut tw = Typewriter::new(&["x", "y"]);
		let mut seen = Vec::new();
		for _ in 0..8 {
			tw.tick();
			if !tw.text().is_empty() && seen.last() != Some(&tw.text()) {
				seen.push(tw.text());
			}
		}
		assert_eq!(seen, ["x", "y", "x", "y"]);
	}

	#[test]
	fn slices_on_char_boundaries() {
		let mut tw = Typewriter::new(&["né"]);
		tw.tick();
		tw.tick();
		assert_eq!(tw.text(), "né");
	}

	#[test]
	fn no_phrases_is_inert() {
		let mut tw = Typewriter::new(&[]);
		assert_eq!(tw.tick(), TYPE_DELAY);
		assert_eq!(tw.text(), "");
	}
}
