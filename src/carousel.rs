//! The hero carousel component: maps slides to panels for the carousel engine.

use serde::Deserialize;

use crate::button::ActionButton;
use crate::node::{Element, Node};
use crate::slide::{AutoplayInterval, Slide, SlideKey};
use crate::title::{FormattedTitle, format_title};

/// Class names applied to the generated panels. Every field has a default, so a manifest
/// only needs to name the ones it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub class_name: String,
    pub overlay_class_name: String,
    pub content_class_name: String,
    pub title_class_name: String,
    pub description_class_name: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            overlay_class_name: "overlay".to_string(),
            content_class_name: "carousel-content".to_string(),
            title_class_name: "home-title".to_string(),
            description_class_name: "home-desc".to_string(),
        }
    }
}

type ContentRenderer<'r> = Box<dyn Fn(&Slide, usize) -> Node + 'r>;

pub struct HeroCarousel<'r> {
    config: CarouselConfig,
    custom_content: Option<ContentRenderer<'r>>,
}

impl Default for HeroCarousel<'_> {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl<'r> HeroCarousel<'r> {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            custom_content: None,
        }
    }

    /// Replaces the default title/description/button layout of every panel.
    pub fn with_custom_content(mut self, render: impl Fn(&Slide, usize) -> Node + 'r) -> Self {
        self.custom_content = Some(Box::new(render));
        self
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Renders one panel per slide, in order. An empty list renders nothing.
    pub fn render<'s>(&self, slides: &'s [Slide]) -> Option<CarouselView<'s>> {
        if slides.is_empty() {
            return None;
        }
        log::debug!("rendering {} hero panels", slides.len());

        let panels = slides
            .iter()
            .enumerate()
            .map(|(index, slide)| self.render_panel(slide, index))
            .collect();

        Some(CarouselView {
            class_name: self.config.class_name.clone(),
            panels,
        })
    }

    fn render_panel<'s>(&self, slide: &'s Slide, index: usize) -> Panel<'s> {
        let body = match &self.custom_content {
            Some(render) => PanelBody::Custom(render(slide, index)),
            None => PanelBody::Default(self.default_content(slide)),
        };

        Panel {
            key: slide.key(index),
            interval: slide.autoplay_interval(),
            image: &slide.image,
            overlay_class: self.config.overlay_class_name.clone(),
            content_class: self.config.content_class_name.clone(),
            body,
        }
    }

    fn default_content<'s>(&self, slide: &'s Slide) -> DefaultContent<'s> {
        DefaultContent {
            title: slide.title().map(|title| TitleBlock {
                class: format!("{} mb-4", self.config.title_class_name),
                content: format_title(title),
            }),
            description: slide.description().map(|text| TextBlock {
                class: format!("{} mb-4", self.config.description_class_name),
                text,
            }),
            button: slide
                .button_text()
                .map(|label| ActionButton::new(label, slide.button_on_click.as_ref())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarouselView<'s> {
    pub class_name: String,
    pub panels: Vec<Panel<'s>>,
}

impl CarouselView<'_> {
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn to_node(&self) -> Node {
        let items = self.panels.iter().enumerate().map(|(index, panel)| {
            let class = if index == 0 { "carousel-item active" } else { "carousel-item" };
            let mut item = Element::new("div").class(class).attr("data-key", panel.key.to_string());
            if let AutoplayInterval::Fixed(interval) = panel.interval {
                item = item.attr("data-interval", interval.as_millis().to_string());
            }
            Node::from(item.child(panel.to_node()))
        });

        Element::new("div")
            .class(join_classes("carousel slide", &self.class_name))
            .child(Element::new("div").class("carousel-inner").children(items))
            .into()
    }
}

#[derive(Debug, Clone)]
pub struct Panel<'s> {
    pub key: SlideKey,
    pub interval: AutoplayInterval,
    /// Background image; empty renders no background.
    pub image: &'s str,
    pub overlay_class: String,
    pub content_class: String,
    pub body: PanelBody<'s>,
}

impl Panel<'_> {
    pub fn to_node(&self) -> Node {
        let mut background = Element::new("div").class("carousel-bg-img");
        if !self.image.is_empty() {
            background = background.attr("style", format!("background-image:url({})", self.image));
        }

        let section = Element::new("div").class("home-content-section").child(self.body.to_node());
        let container = Element::new("div")
            .class("container position-relative")
            .child(Element::new("div").class("clearfix pt-md-5 mt-md-5 d-md-block d-lg-none d-none"))
            .child(section);

        background
            .child(Element::new("div").class(self.overlay_class.as_str()))
            .child(Element::new("div").class(self.content_class.as_str()).child(container))
            .into()
    }
}

#[derive(Debug, Clone)]
pub enum PanelBody<'s> {
    Default(DefaultContent<'s>),
    Custom(Node),
}

impl PanelBody<'_> {
    pub fn to_node(&self) -> Node {
        match self {
            PanelBody::Default(content) => content.to_node(),
            PanelBody::Custom(node) => node.clone(),
        }
    }
}

/// Title, description and button blocks; each is present only when its slide field is.
#[derive(Debug, Clone)]
pub struct DefaultContent<'s> {
    pub title: Option<TitleBlock<'s>>,
    pub description: Option<TextBlock<'s>>,
    pub button: Option<ActionButton<'s>>,
}

impl DefaultContent<'_> {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.button.is_none()
    }

    pub fn to_node(&self) -> Node {
        let mut root = Element::new("div");
        if let Some(title) = &self.title {
            root = root.child(Element::new("h1").class(title.class.as_str()).child(title.content.to_node()));
        }
        if let Some(description) = &self.description {
            root = root.child(Element::new("p").class(description.class.as_str()).child(description.text));
        }
        if let Some(button) = &self.button {
            root = root.child(button.to_node());
        }
        root.into()
    }
}

#[derive(Debug, Clone)]
pub struct TitleBlock<'s> {
    pub class: String,
    pub content: FormattedTitle<'s>,
}

#[derive(Debug, Clone)]
pub struct TextBlock<'s> {
    pub class: String,
    pub text: &'s str,
}

fn join_classes(base: &str, extra: &str) -> String {
    if extra.is_empty() { base.to_string() } else { format!("{} {}", base, extra) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::ClickHandler;
    use crate::title::Fragment;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn default_body<'a>(panel: &'a Panel<'_>) -> &'a DefaultContent<'a> {
        match &panel.body {
            PanelBody::Default(content) => content,
            PanelBody::Custom(_) => panic!("expected default layout"),
        }
    }

    #[test]
    fn empty_slide_list_renders_nothing() {
        assert!(HeroCarousel::default().render(&[]).is_none());
    }

    #[test]
    fn panels_follow_input_order_and_keys() {
        let slides = vec![
            Slide::new("a.jpg").with_id("first"),
            Slide::new("b.jpg"),
            Slide::new("c.jpg").with_id("third"),
        ];
        let carousel = HeroCarousel::default();
        let view = carousel.render(&slides).expect("three slides render");

        let keys: Vec<_> = view.panels.iter().map(|p| p.key.clone()).collect();
        assert_eq!(
            keys,
            vec![SlideKey::Id("first".into()), SlideKey::Index(1), SlideKey::Id("third".into())]
        );
        let images: Vec<_> = view.panels.iter().map(|p| p.image).collect();
        assert_eq!(images, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn interval_override_passes_through() {
        let slides = vec![
            Slide::new("a.jpg").with_interval(Duration::ZERO),
            Slide::new("b.jpg"),
            Slide::new("c.jpg").with_interval(Duration::from_millis(2500)),
        ];
        let carousel = HeroCarousel::default();
        let view = carousel.render(&slides).expect("slides render");

        assert_eq!(view.panels[0].interval, AutoplayInterval::Fixed(Duration::ZERO));
        assert_eq!(view.panels[1].interval, AutoplayInterval::Inherit);
        assert_eq!(view.panels[2].interval, AutoplayInterval::Fixed(Duration::from_millis(2500)));
    }

    #[test]
    fn missing_fields_omit_blocks() {
        let slides = vec![
            Slide::new("a.jpg").with_title("Hello").with_description("World"),
            Slide::new("b.jpg").with_button("Go", None),
            Slide::new(""),
        ];
        let carousel = HeroCarousel::default();
        let view = carousel.render(&slides).expect("slides render");

        let first = default_body(&view.panels[0]);
        assert!(first.title.is_some());
        assert_eq!(first.description.as_ref().map(|d| d.text), Some("World"));
        assert!(first.button.is_none());

        let second = default_body(&view.panels[1]);
        assert!(second.title.is_none() && second.description.is_none());
        assert_eq!(second.button.as_ref().map(|b| b.label), Some("Go"));

        assert!(default_body(&view.panels[2]).is_empty());
    }

    #[test]
    fn block_classes_use_config() {
        let config = CarouselConfig {
            title_class_name: "hero-title".into(),
            description_class_name: "hero-desc".into(),
            ..CarouselConfig::default()
        };
        let slides = vec![Slide::new("a.jpg").with_title("T").with_description("D")];
        let carousel = HeroCarousel::new(config);
        let view = carousel.render(&slides).expect("slide renders");
        let body = default_body(&view.panels[0]);

        assert_eq!(body.title.as_ref().map(|t| t.class.as_str()), Some("hero-title mb-4"));
        assert_eq!(body.description.as_ref().map(|d| d.class.as_str()), Some("hero-desc mb-4"));
        assert_eq!(view.panels[0].overlay_class, "overlay");
        assert_eq!(view.panels[0].content_class, "carousel-content");
    }

    #[test]
    fn title_is_formatted() {
        let slides = vec![Slide::new("a.jpg").with_title(r#"Hi <strong class="x">you</strong>"#)];
        let carousel = HeroCarousel::default();
        let view = carousel.render(&slides).expect("slide renders");
        let title = default_body(&view.panels[0]).title.as_ref().expect("title block");

        match &title.content {
            FormattedTitle::Fragments(fragments) => {
                assert_eq!(fragments[0], Fragment::Text("Hi "));
                assert_eq!(fragments[1].text(), "you");
            }
            FormattedTitle::Node(_) => panic!("string title must be split"),
        }
    }

    #[test]
    fn custom_renderer_replaces_layout() {
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let carousel = HeroCarousel::default().with_custom_content(move |slide, index| {
            counter.set(counter.get() + 1);
            Node::Text(format!("{}:{}", index, slide.image))
        });
        let slides = vec![Slide::new("a.jpg").with_title("ignored"), Slide::new("b.jpg")];
        let view = carousel.render(&slides).expect("slides render");

        assert_eq!(seen.get(), 2);
        for (index, panel) in view.panels.iter().enumerate() {
            match &panel.body {
                PanelBody::Custom(node) => assert_eq!(node.text_content(), format!("{}:{}", index, slides[index].image)),
                PanelBody::Default(_) => panic!("custom renderer must replace the default layout"),
            }
        }
    }

    #[test]
    fn button_block_dispatches_slide_callback() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let slides = vec![Slide::new("a.jpg").with_button("Start", Some(ClickHandler::new(move || counter.set(counter.get() + 1))))];
        let carousel = HeroCarousel::default();
        let view = carousel.render(&slides).expect("slide renders");

        default_body(&view.panels[0]).button.as_ref().expect("button block").click();
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn markup_mirrors_panel_structure() {
        let slides = vec![
            Slide::new("/img/a.jpg")
                .with_id("intro")
                .with_title("<strong>Bold</strong> text")
                .with_interval(Duration::ZERO),
            Slide::new(""),
        ];
        let carousel = HeroCarousel::new(CarouselConfig {
            class_name: "hero".into(),
            ..CarouselConfig::default()
        });
        let markup = carousel.render(&slides).expect("slides render").to_node().to_markup();

        assert!(markup.starts_with(r#"<div class="carousel slide hero"><div class="carousel-inner">"#));
        assert!(markup.contains(r#"<div class="carousel-item active" data-key="intro" data-interval="0">"#));
        assert!(markup.contains(r#"<div class="carousel-item" data-key="1">"#));
        assert!(markup.contains(r#"<div class="carousel-bg-img" style="background-image:url(/img/a.jpg)">"#));
        assert!(markup.contains(r#"<h1 class="home-title mb-4"><strong>Bold</strong> text</h1>"#));
        assert!(markup.contains(r#"<div class="carousel-bg-img"><div class="overlay"></div>"#));
    }
}
