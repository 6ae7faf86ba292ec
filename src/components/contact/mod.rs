//! Contact section and the fallback chain that delivers its form.

mod component;
mod submit;
mod transport;

pub use component::Contact;
