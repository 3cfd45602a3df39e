pub mod engine;
pub mod panel;

pub use engine::SlidingEngine;
