//! Decorative canvas animation: drifting infrastructure nodes, packets
//! travelling between them, and floating code panels.

mod component;
mod frame_loop;
mod painter;
mod render;
mod state;
mod types;

pub use component::AnimatedBackground;
