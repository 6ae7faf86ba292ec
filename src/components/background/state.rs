use std::f64::consts::TAU;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::painter::{PanelStyle, Painter};
use super::types::{CodeBlock, DataFlow, InfraNode, NodeKind, SimulationConfig};
use crate::profile::CODE_SNIPPETS;
use crate::theme::{Palette, Theme};

const TRAIL_SPACING: f64 = 0.05;
const TRAIL_FADE: f64 = 0.2;
const TRAIL_SHRINK: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
	Stopped,
	Running,
}

/// Entity populations of the animated background and the rules that move them.
pub struct BackgroundState<R = StdRng> {
	pub nodes: Vec<InfraNode>,
	pub flows: Vec<DataFlow>,
	pub blocks: Vec<CodeBlock>,
	pub width: f64,
	pub height: f64,
	pub theme: Theme,
	pub lifecycle: Lifecycle,
	config: SimulationConfig,
	rng: R,
}

impl BackgroundState<StdRng> {
	/// A stopped, empty background seeded from the platform entropy source.
	pub fn from_entropy(config: SimulationConfig) -> Self {
		Self::with_rng(config, StdRng::from_entropy())
	}
}

impl<R: Rng> BackgroundState<R> {
	pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
		Self {
			nodes: Vec::new(),
			flows: Vec::new(),
			blocks: Vec::new(),
			width: 0.0,
			height: 0.0,
			theme: Theme::default(),
			lifecycle: Lifecycle::Stopped,
			config,
			rng,
		}
	}

	/// Throw away every entity and populate all three collections from scratch.
	pub fn setup(&mut self, width: f64, height: f64, theme: Theme) {
		self.width = width;
		self.height = height;
		self.theme = theme;

		let palette = theme.palette();
		let Self {
			nodes,
			flows,
			blocks,
			config,
			rng,
			..
		} = self;

		*nodes = (0..config.node_count)
			.map(|_| spawn_node(config, palette, width, height, rng))
			.collect();

		flows.clear();
		for _ in 0..config.flow_slots {
			// A colliding pick leaves the slot empty.
			if let Some((source, target)) = pick_route(nodes.len(), rng) {
				flows.push(spawn_flow(source, target, nodes, config, palette, rng));
			}
		}

		*blocks = (0..config.block_count)
			.map(|_| spawn_block(config, width, height, rng))
			.collect();

		self.lifecycle = Lifecycle::Running;
		debug!(
			"background setup {}x{} ({:?}): {} nodes, {} flows, {} blocks",
			width,
			height,
			theme,
			self.nodes.len(),
			self.flows.len(),
			self.blocks.len()
		);
	}

	/// Stop reacting to frames. Entities are kept until the next [`Self::setup`].
	pub fn teardown(&mut self) {
		if self.lifecycle == Lifecycle::Running {
			debug!("background teardown");
		}
		self.lifecycle = Lifecycle::Stopped;
	}

	/// Viewport changed: regenerate everything for the new size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.teardown();
		self.setup(width, height, self.theme);
	}

	/// Advance every entity by one frame and draw the result.
	///
	/// `time` is elapsed seconds and only drives the backdrop drift and grid
	/// scroll; entity motion is per frame. Returns `false` without drawing
	/// anything when the background is stopped.
	pub fn step<P: Painter>(&mut self, time: f64, painter: &mut P) -> bool {
		if self.lifecycle == Lifecycle::Stopped {
			return false;
		}
		let palette = self.theme.palette();
		let (w, h) = (self.width, self.height);

		self.draw_backdrop(time, palette, painter);

		let panel = PanelStyle {
			fill: palette.panel_fill,
			border: palette.panel_border,
			text: palette.panel_text,
		};
		for block in &mut self.blocks {
			block.advance(w, h);
			painter.draw_text_block(block, &panel);
		}

		let phase_step = self.config.phase_step;
		for node in &mut self.nodes {
			node.advance(w, h, phase_step);
			let size = node.pulse_size();
			painter.draw_glow((node.x, node.y), size, node.color);
			painter.draw_shape((node.x, node.y), size, node.kind, node.color);
		}

		let Self {
			flows,
			nodes,
			config,
			rng,
			..
		} = self;
		for flow in flows.iter_mut() {
			draw_flow(flow, config, painter);
			flow.tick();
			if flow.arrived() {
				// Stalls for a frame when the pick collides.
				if let Some((source, target)) = pick_route(nodes.len(), rng) {
					flow.reroute(source, target, nodes);
				}
			}
		}

		self.draw_links(palette, painter);
		true
	}

	fn draw_backdrop<P: Painter>(&self, time: f64, palette: &Palette, painter: &mut P) {
		let (w, h) = (self.width, self.height);
		let focus = (
			w / 2.0 + (time * 0.2).sin() * 100.0,
			h / 2.0 + (time * 0.15).cos() * 80.0,
		);
		painter.fill_background(w, h, focus, w.max(h) * 0.8, &palette.backdrop);

		let g = self.config.grid_size;
		let (ox, oy) = grid_offset(time, g);
		let mut x = -g + ox;
		while x < w + g {
			painter.draw_grid_line((x, 0.0), (x, h), palette.grid);
			x += g;
		}
		let mut y = -g + oy;
		while y < h + g {
			painter.draw_grid_line((0.0, y), (w, y), palette.grid);
			y += g;
		}
	}

	fn draw_links<P: Painter>(&self, palette: &Palette, painter: &mut P) {
		let threshold = self.config.link_distance;
		for (i, a) in self.nodes.iter().enumerate() {
			for b in &self.nodes[i + 1..] {
				let distance = (a.x - b.x).hypot(a.y - b.y);
				let alpha = link_alpha(distance, threshold, palette.link_alpha);
				if alpha > 0.0 {
					painter.draw_gradient_line((a.x, a.y), (b.x, b.y), (a.color, b.color), alpha);
				}
			}
		}
	}
}

impl DataFlow {
	/// Advance along the route. An arrived packet waits for a new route.
	pub fn tick(&mut self) {
		if !self.arrived() {
			self.progress += self.speed;
		}
	}

	/// Start over from `source` toward `target`, at their current positions.
	pub fn reroute(&mut self, source: usize, target: usize, nodes: &[InfraNode]) {
		self.source = source;
		self.target = target;
		self.from = (nodes[source].x, nodes[source].y);
		self.to = (nodes[target].x, nodes[target].y);
		self.progress = 0.0;
	}
}

/// Opacity of the line joining two nodes `distance` apart: linear falloff to
/// zero at `threshold`, `scale` at zero distance.
pub fn link_alpha(distance: f64, threshold: f64, scale: f64) -> f64 {
	if distance >= threshold {
		0.0
	} else {
		scale * (1.0 - distance / threshold)
	}
}

/// Scroll offset of the backdrop grid, always within `[0, size)`.
pub fn grid_offset(time: f64, size: f64) -> (f64, f64) {
	((time * 10.0).rem_euclid(size), (time * 8.0).rem_euclid(size))
}

/// Two independent uniform picks; `None` when they land on the same node.
fn pick_route<R: Rng>(len: usize, rng: &mut R) -> Option<(usize, usize)> {
	if len == 0 {
		return None;
	}
	let (source, target) = (rng.gen_range(0..len), rng.gen_range(0..len));
	(source != target).then_some((source, target))
}

fn spawn_node<R: Rng>(
	config: &SimulationConfig,
	palette: &Palette,
	width: f64,
	height: f64,
	rng: &mut R,
) -> InfraNode {
	let drift = config.node_drift;
	InfraNode {
		x: rng.r#gen::<f64>() * width,
		y: rng.r#gen::<f64>() * height,
		dx: rng.gen_range(-drift..drift),
		dy: rng.gen_range(-drift..drift),
		radius: rng.gen_range(config.node_radius.clone()),
		kind: NodeKind::ALL[rng.gen_range(0..NodeKind::ALL.len())],
		color: palette.entities[rng.gen_range(0..palette.entities.len())],
		phase: rng.gen_range(0.0..TAU),
		connections: Vec::new(),
	}
}

fn spawn_flow<R: Rng>(
	source: usize,
	target: usize,
	nodes: &[InfraNode],
	config: &SimulationConfig,
	palette: &Palette,
	rng: &mut R,
) -> DataFlow {
	DataFlow {
		source,
		target,
		from: (nodes[source].x, nodes[source].y),
		to: (nodes[target].x, nodes[target].y),
		progress: 0.0,
		speed: rng.gen_range(config.flow_speed.clone()),
		color: palette.entities[rng.gen_range(0..palette.entities.len())],
		opacity: rng.gen_range(config.flow_opacity.clone()),
	}
}

fn spawn_block<R: Rng>(config: &SimulationConfig, width: f64, height: f64, rng: &mut R) -> CodeBlock {
	let drift = config.block_drift;
	let (bw, bh) = config.block_size;
	CodeBlock {
		x: rng.r#gen::<f64>() * width,
		y: rng.r#gen::<f64>() * height,
		dx: rng.gen_range(-drift..drift),
		dy: rng.gen_range(-drift..drift),
		width: bw,
		height: bh,
		opacity: rng.gen_range(config.block_opacity.clone()),
		lines: CODE_SNIPPETS[rng.gen_range(0..CODE_SNIPPETS.len())].to_vec(),
	}
}

fn draw_flow<P: Painter>(flow: &DataFlow, config: &SimulationConfig, painter: &mut P) {
	let alpha = flow.opacity.min(1.0);
	let head = flow.position_at(flow.progress);
	painter.draw_packet(head, config.packet_radius, flow.color, alpha);

	for i in 1..=config.trail_len {
		let i = i as f64;
		let at = (flow.progress - i * TRAIL_SPACING).max(0.0);
		let radius = (config.packet_radius - i * TRAIL_SHRINK).max(0.0);
		let fade = (1.0 - i * TRAIL_FADE).max(0.0);
		painter.draw_packet(flow.position_at(at), radius, flow.color, alpha * fade);
	}
}
