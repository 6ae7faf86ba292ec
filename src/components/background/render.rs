use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::painter::{PanelStyle, Painter};
use super::types::{CodeBlock, NodeKind};
use crate::theme::Rgba;

const BLOCK_PADDING: f64 = 8.0;
const BLOCK_FIRST_BASELINE: f64 = 16.0;
const BLOCK_LINE_HEIGHT: f64 = 14.0;

/// [`Painter`] backed by a 2D canvas context.
pub struct CanvasPainter<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasPainter<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Painter for CanvasPainter<'_> {
	fn fill_background(
		&mut self,
		width: f64,
		height: f64,
		focus: (f64, f64),
		radius: f64,
		stops: &[(f64, Rgba)],
	) {
		let ctx = self.ctx;
		let Ok(gradient) =
			ctx.create_radial_gradient(focus.0, focus.1, 0.0, width / 2.0, height / 2.0, radius)
		else {
			return;
		};
		for (offset, color) in stops {
			let _ = gradient.add_color_stop(*offset as f32, &color.to_string());
		}
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn draw_grid_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba) {
		let ctx = self.ctx;
		ctx.set_stroke_style_str(&color.to_string());
		ctx.set_line_width(0.5);
		ctx.begin_path();
		ctx.move_to(from.0, from.1);
		ctx.line_to(to.0, to.1);
		ctx.stroke();
	}

	fn draw_glow(&mut self, (x, y): (f64, f64), size: f64, color: Rgba) {
		let ctx = self.ctx;
		let radius = size / 2.0;
		let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, &color.to_string());
		let _ = gradient.add_color_stop(0.7, &color.with_alpha(0.4).to_string());
		let _ = gradient.add_color_stop(1.0, &Rgba::TRANSPARENT.to_string());

		ctx.save();
		ctx.set_shadow_color(&color.to_string());
		ctx.set_shadow_blur(20.0);
		ctx.set_global_alpha(0.8);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, TAU);
		ctx.fill();
		ctx.restore();
	}

	fn draw_shape(&mut self, (x, y): (f64, f64), s: f64, kind: NodeKind, color: Rgba) {
		let ctx = self.ctx;
		ctx.save();
		let _ = ctx.translate(x, y);
		ctx.set_stroke_style_str(&color.to_string());
		ctx.set_line_width(2.0);

		match kind {
			NodeKind::Server => {
				for i in 0..3 {
					ctx.stroke_rect(-s / 4.0, -s / 4.0 + i as f64 * 6.0, s / 2.0, 4.0);
				}
			}
			NodeKind::Cloud => {
				ctx.begin_path();
				let _ = ctx.arc(-s / 6.0, 0.0, s / 6.0, 0.0, TAU);
				let _ = ctx.arc(s / 6.0, 0.0, s / 6.0, 0.0, TAU);
				let _ = ctx.arc(0.0, -s / 8.0, s / 5.0, 0.0, TAU);
				ctx.stroke();
			}
			NodeKind::Container => {
				ctx.stroke_rect(-s / 4.0, -s / 4.0, s / 2.0, s / 2.0);
				ctx.stroke_rect(-s / 6.0, -s / 6.0, s / 3.0, s / 3.0);
			}
			NodeKind::Pipeline => {
				ctx.begin_path();
				ctx.move_to(-s / 4.0, 0.0);
				ctx.line_to(s / 4.0, 0.0);
				ctx.move_to(s / 6.0, -s / 8.0);
				ctx.line_to(s / 4.0, 0.0);
				ctx.line_to(s / 6.0, s / 8.0);
				ctx.stroke();
			}
			NodeKind::Monitor => {
				ctx.stroke_rect(-s / 4.0, -s / 6.0, s / 2.0, s / 3.0);
				ctx.stroke_rect(-s / 5.0, s / 6.0, s / 2.5, s / 8.0);
			}
		}
		ctx.restore();
	}

	fn draw_packet(&mut self, (x, y): (f64, f64), radius: f64, color: Rgba, alpha: f64) {
		if radius <= 0.0 || alpha <= 0.0 {
			return;
		}
		let ctx = self.ctx;
		ctx.save();
		ctx.set_global_alpha(alpha);
		ctx.set_fill_style_str(&color.to_string());
		ctx.set_shadow_color(&color.to_string());
		ctx.set_shadow_blur(10.0);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, TAU);
		ctx.fill();
		ctx.restore();
	}

	fn draw_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		colors: (Rgba, Rgba),
		alpha: f64,
	) {
		let ctx = self.ctx;
		let gradient = ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
		let _ = gradient.add_color_stop(0.0, &colors.0.to_string());
		let _ = gradient.add_color_stop(1.0, &colors.1.to_string());

		ctx.save();
		ctx.set_global_alpha(alpha);
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_line_width(1.5);
		ctx.begin_path();
		ctx.move_to(from.0, from.1);
		ctx.line_to(to.0, to.1);
		ctx.stroke();
		ctx.restore();
	}

	fn draw_text_block(&mut self, block: &CodeBlock, style: &PanelStyle) {
		let ctx = self.ctx;
		ctx.save();
		ctx.set_global_alpha(block.opacity);

		ctx.set_fill_style_str(&style.fill.to_string());
		ctx.fill_rect(block.x, block.y, block.width, block.height);

		ctx.set_stroke_style_str(&style.border.to_string());
		ctx.set_line_width(1.0);
		ctx.stroke_rect(block.x, block.y, block.width, block.height);

		ctx.set_fill_style_str(&style.text.to_string());
		ctx.set_font("10px monospace");
		for (i, line) in block.lines.iter().enumerate() {
			let _ = ctx.fill_text(
				line,
				block.x + BLOCK_PADDING,
				block.y + BLOCK_FIRST_BASELINE + i as f64 * BLOCK_LINE_HEIGHT,
			);
		}
		ctx.restore();
	}
}
