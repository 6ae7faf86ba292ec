use super::types::{CodeBlock, NodeKind};
use crate::theme::Rgba;

/// Colours for a code panel.
#[derive(Clone, Copy, Debug)]
pub struct PanelStyle {
	pub fill: Rgba,
	pub border: Rgba,
	pub text: Rgba,
}

/// Drawing capability the background simulator renders through.
///
/// The simulator only decides *what* goes on screen; implementors decide how.
/// The browser uses [`super::render::CanvasPainter`], tests record the calls.
pub trait Painter {
	/// Cover `width x height` with a radial gradient whose inner circle sits at
	/// `focus` and whose outer circle is centred on the surface.
	fn fill_background(
		&mut self,
		width: f64,
		height: f64,
		focus: (f64, f64),
		radius: f64,
		stops: &[(f64, Rgba)],
	);

	fn draw_grid_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba);

	/// Soft radial glow of diameter `size` around `center`.
	fn draw_glow(&mut self, center: (f64, f64), size: f64, color: Rgba);

	/// Category glyph scaled to `size`.
	fn draw_shape(&mut self, center: (f64, f64), size: f64, kind: NodeKind, color: Rgba);

	fn draw_packet(&mut self, center: (f64, f64), radius: f64, color: Rgba, alpha: f64);

	/// Line whose colour blends from `colors.0` at `from` to `colors.1` at `to`.
	fn draw_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		colors: (Rgba, Rgba),
		alpha: f64,
	);

	fn draw_text_block(&mut self, block: &CodeBlock, style: &PanelStyle);
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// One recorded painter call, reduced to what tests assert on.
	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Background { focus: (f64, f64) },
		GridLine,
		Glow { center: (f64, f64), size: f64 },
		Shape { kind: NodeKind },
		Packet { alpha: f64, radius: f64 },
		Link { alpha: f64 },
		TextBlock { lines: usize },
	}

	#[derive(Debug, Default)]
	pub struct RecordingPainter {
		pub ops: Vec<Op>,
	}

	impl RecordingPainter {
		pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
			self.ops.iter().filter(|op| pred(op)).count()
		}
	}

	impl Painter for RecordingPainter {
		fn fill_background(&mut self, _: f64, _: f64, focus: (f64, f64), _: f64, _: &[(f64, Rgba)]) {
			self.ops.push(Op::Background { focus });
		}

		fn draw_grid_line(&mut self, _: (f64, f64), _: (f64, f64), _: Rgba) {
			self.ops.push(Op::GridLine);
		}

		fn draw_glow(&mut self, center: (f64, f64), size: f64, _: Rgba) {
			self.ops.push(Op::Glow { center, size });
		}

		fn draw_shape(&mut self, _: (f64, f64), _: f64, kind: NodeKind, _: Rgba) {
			self.ops.push(Op::Shape { kind });
		}

		fn draw_packet(&mut self, _: (f64, f64), radius: f64, _: Rgba, alpha: f64) {
			self.ops.push(Op::Packet { alpha, radius });
		}

		fn draw_gradient_line(&mut self, _: (f64, f64), _: (f64, f64), _: (Rgba, Rgba), alpha: f64) {
			self.ops.push(Op::Link { alpha });
		}

		fn draw_text_block(&mut self, block: &CodeBlock, _: &PanelStyle) {
			self.ops.push(Op::TextBlock {
				lines: block.lines.len(),
			});
		}
	}
}
