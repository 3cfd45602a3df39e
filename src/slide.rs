use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::title::Title;

/// Zero-argument click callback. Runs synchronously on the UI thread.
#[derive(Clone)]
pub struct ClickHandler(Rc<dyn Fn()>);

impl ClickHandler {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Slide {
    pub id: Option<String>,
    pub image: String,
    pub title: Option<Title>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_on_click: Option<ClickHandler>,
    /// `None` inherits the engine default, zero disables auto-advance for this slide.
    pub interval: Option<Duration>,
}

impl Slide {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<Title>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_button(mut self, text: impl Into<String>, on_click: Option<ClickHandler>) -> Self {
        self.button_text = Some(text.into());
        self.button_on_click = on_click;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn key(&self, index: usize) -> SlideKey {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => SlideKey::Id(id.to_string()),
            _ => SlideKey::Index(index),
        }
    }

    pub fn autoplay_interval(&self) -> AutoplayInterval {
        match self.interval {
            Some(interval) => AutoplayInterval::Fixed(interval),
            None => AutoplayInterval::Inherit,
        }
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref().filter(|title| title.is_present())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }

    pub fn button_text(&self) -> Option<&str> {
        self.button_text.as_deref().filter(|text| !text.is_empty())
    }
}

/// Reconciliation key of a rendered panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlideKey {
    Id(String),
    Index(usize),
}

impl fmt::Display for SlideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideKey::Id(id) => f.write_str(id),
            SlideKey::Index(index) => write!(f, "{}", index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayInterval {
    Inherit,
    Fixed(Duration),
}

impl AutoplayInterval {
    /// Seconds until auto-advance, or `None` when the panel never advances on its own.
    pub fn resolve(self, default: Duration) -> Option<f32> {
        let interval = match self {
            AutoplayInterval::Inherit => default,
            AutoplayInterval::Fixed(interval) => interval,
        };
        (!interval.is_zero()).then(|| interval.as_secs_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn key_prefers_id_then_index() {
        assert_eq!(Slide::new("a.jpg").with_id("intro").key(3), SlideKey::Id("intro".into()));
        assert_eq!(Slide::new("a.jpg").key(3), SlideKey::Index(3));
        assert_eq!(Slide::new("a.jpg").with_id("").key(1), SlideKey::Index(1));
        assert_eq!(SlideKey::Index(7).to_string(), "7");
    }

    #[test]
    fn interval_zero_is_kept_explicit() {
        let slide = Slide::new("a.jpg").with_interval(Duration::ZERO);
        assert_eq!(slide.autoplay_interval(), AutoplayInterval::Fixed(Duration::ZERO));
        assert_eq!(Slide::new("a.jpg").autoplay_interval(), AutoplayInterval::Inherit);
    }

    #[test]
    fn interval_resolution() {
        let default = Duration::from_secs(5);
        assert_eq!(AutoplayInterval::Inherit.resolve(default), Some(5.0));
        assert_eq!(AutoplayInterval::Fixed(Duration::from_millis(1500)).resolve(default), Some(1.5));
        assert_eq!(AutoplayInterval::Fixed(Duration::ZERO).resolve(default), None);
    }

    #[test]
    fn empty_text_fields_count_as_missing() {
        let slide = Slide::new("")
            .with_title("")
            .with_description("")
            .with_button("", None);
        assert!(slide.title().is_none());
        assert!(slide.description().is_none());
        assert!(slide.button_text().is_none());
    }

    #[test]
    fn click_handler_runs_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handler = ClickHandler::new(move || counter.set(counter.get() + 1));
        handler.call();
        handler.clone().call();
        assert_eq!(hits.get(), 2);
    }
}
