//! A hero image carousel: slides with a background image, a title with inline
//! `<strong>` emphasis, a description and a call-to-action button.
//!
//! [`HeroCarousel`] turns slides into panels; an engine displays them. With the `gui`
//! feature, [`sliding::SlidingEngine`] draws them in a raylib window.

pub mod button;
pub mod carousel;
pub mod constants;
pub mod engine;
pub mod manifest;
pub mod node;
pub mod slide;
pub mod state;
pub mod title;

#[cfg(feature = "gui")]
pub mod sliding;
#[cfg(feature = "gui")]
pub mod texture_loader;

pub use carousel::{CarouselConfig, CarouselView, HeroCarousel, Panel, PanelBody};
pub use node::{Element, Node};
pub use slide::{AutoplayInterval, ClickHandler, Slide, SlideKey};
pub use title::{FormattedTitle, Fragment, Title, format_title};
