use std::ops::Range;

use crate::theme::Rgba;

/// What a drifting node depicts; decides the glyph drawn on top of its glow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Server,
	Cloud,
	Container,
	Pipeline,
	Monitor,
}

impl NodeKind {
	pub const ALL: [NodeKind; 5] = [
		NodeKind::Server,
		NodeKind::Cloud,
		NodeKind::Container,
		NodeKind::Pipeline,
		NodeKind::Monitor,
	];
}

#[derive(Clone, Debug)]
pub struct InfraNode {
	pub x: f64,
	pub y: f64,
	pub dx: f64,
	pub dy: f64,
	pub radius: f64,
	pub kind: NodeKind,
	pub color: Rgba,
	pub phase: f64,
	/// Informational only; nothing reads it back.
	pub connections: Vec<usize>,
}

impl InfraNode {
	/// Move one frame and wrap once the node is a full radius past an edge.
	pub fn advance(&mut self, width: f64, height: f64, phase_step: f64) {
		self.x += self.dx;
		self.y += self.dy;
		self.phase += phase_step;

		let r = self.radius;
		if self.x < -r {
			self.x = width + r;
		}
		if self.x > width + r {
			self.x = -r;
		}
		if self.y < -r {
			self.y = height + r;
		}
		if self.y > height + r {
			self.y = -r;
		}
	}

	/// Breathing size used for both the glow and the glyph.
	pub fn pulse_size(&self) -> f64 {
		self.radius * (1.0 + self.phase.sin() * 0.2)
	}
}

/// A packet travelling between two nodes, recycled when it arrives.
#[derive(Clone, Debug)]
pub struct DataFlow {
	pub source: usize,
	pub target: usize,
	/// Node positions captured when the route was assigned.
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub progress: f64,
	pub speed: f64,
	pub color: Rgba,
	pub opacity: f64,
}

impl DataFlow {
	/// Point on the route at `progress`, clamped to the segment.
	pub fn position_at(&self, progress: f64) -> (f64, f64) {
		let t = progress.clamp(0.0, 1.0);
		(
			self.from.0 + (self.to.0 - self.from.0) * t,
			self.from.1 + (self.to.1 - self.from.1) * t,
		)
	}

	pub fn arrived(&self) -> bool {
		self.progress >= 1.0
	}
}

#[derive(Clone, Debug)]
pub struct CodeBlock {
	pub x: f64,
	pub y: f64,
	pub dx: f64,
	pub dy: f64,
	pub width: f64,
	pub height: f64,
	pub opacity: f64,
	pub lines: Vec<&'static str>,
}

impl CodeBlock {
	/// Move one frame; a block fully past an edge re-enters from the opposite one.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.dx;
		self.y += self.dy;

		if self.x < -self.width {
			self.x = width;
		}
		if self.x > width {
			self.x = -self.width;
		}
		if self.y < -self.height {
			self.y = height;
		}
		if self.y > height {
			self.y = -self.height;
		}
	}
}

/// Population sizes and motion ranges of the background.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
	pub node_count: usize,
	/// Packets are attempted this many times; collisions leave a slot empty.
	pub flow_slots: usize,
	pub block_count: usize,
	/// Velocity components are drawn from `-node_drift..node_drift`.
	pub node_drift: f64,
	pub node_radius: Range<f64>,
	pub phase_step: f64,
	pub flow_speed: Range<f64>,
	pub flow_opacity: Range<f64>,
	pub block_drift: f64,
	pub block_size: (f64, f64),
	pub block_opacity: Range<f64>,
	pub grid_size: f64,
	pub link_distance: f64,
	/// Packet head radius; the trail shrinks from it.
	pub packet_radius: f64,
	pub trail_len: usize,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			node_count: 12,
			flow_slots: 8,
			block_count: 6,
			node_drift: 0.4,
			node_radius: 30.0..70.0,
			phase_step: 0.03,
			flow_speed: 0.01..0.03,
			flow_opacity: 0.4..1.2,
			block_drift: 0.15,
			block_size: (200.0, 80.0),
			block_opacity: 0.2..0.6,
			grid_size: 120.0,
			link_distance: 200.0,
			packet_radius: 4.0,
			trail_len: 5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(x: f64, y: f64, dx: f64, dy: f64) -> InfraNode {
		InfraNode {
			x,
			y,
			dx,
			dy,
			radius: 10.0,
			kind: NodeKind::Server,
			color: Rgba::TRANSPARENT,
			phase: 0.0,
			connections: Vec::new(),
		}
	}

	#[test]
	fn node_wraps_to_opposite_side() {
		let mut n = node(-9.8, 50.0, -0.4, 0.0);
		n.advance(100.0, 100.0, 0.03);
		assert_eq!(n.x, 110.0);

		let mut n = node(50.0, 109.9, 0.0, 0.4);
		n.advance(100.0, 100.0, 0.03);
		assert_eq!(n.y, -10.0);
	}

	#[test]
	fn node_inside_bounds_just_drifts() {
		let mut n = node(50.0, 50.0, 0.25, -0.25);
		n.advance(100.0, 100.0, 0.03);
		assert_eq!((n.x, n.y), (50.25, 49.75));
		assert!((n.phase - 0.03).abs() < 1e-12);
	}

	#[test]
	fn pulse_breathes_twenty_percent() {
		let mut n = node(0.0, 0.0, 0.0, 0.0);
		n.phase = std::f64::consts::FRAC_PI_2;
		assert!((n.pulse_size() - 12.0).abs() < 1e-9);
		n.phase = -std::f64::consts::FRAC_PI_2;
		assert!((n.pulse_size() - 8.0).abs() < 1e-9);
	}

	#[test]
	fn block_wraps_only_once_fully_outside() {
		let mut b = CodeBlock {
			x: -199.95,
			y: 10.0,
			dx: -0.1,
			dy: 0.0,
			width: 200.0,
			height: 80.0,
			opacity: 0.3,
			lines: vec!["kind: Pod"],
		};
		b.advance(800.0, 600.0);
		assert_eq!(b.x, 800.0);
		b.dx = 0.1;
		b.advance(800.0, 600.0);
		assert_eq!(b.x, -200.0);
	}

	#[test]
	fn flow_position_is_clamped_to_route() {
		let flow = DataFlow {
			source: 0,
			target: 1,
			from: (0.0, 0.0),
			to: (100.0, 50.0),
			progress: 0.0,
			speed: 0.02,
			color: Rgba::TRANSPARENT,
			opacity: 1.0,
		};
		assert_eq!(flow.position_at(0.5), (50.0, 25.0));
		assert_eq!(flow.position_at(1.02), (100.0, 50.0));
		assert_eq!(flow.position_at(-0.2), (0.0, 0.0));
	}
}
