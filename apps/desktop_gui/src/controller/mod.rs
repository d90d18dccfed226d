//! Controller layer: cross-thread events delivered to the UI loop.

pub mod events;
