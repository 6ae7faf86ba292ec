mod component;
mod typewriter;

pub use component::Hero;
