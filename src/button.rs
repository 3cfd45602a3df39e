use crate::node::{Element, Node};
use crate::slide::ClickHandler;

pub const HOME_BUTTON_CLASS: &str = "home-button mt-4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fixed visual parameters passed to the action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: Rgb,
    pub color: Rgb,
    pub hover_background: Rgb,
    /// Vertical and horizontal padding, in pixels.
    pub padding: (u16, u16),
    pub font_size: u16,
    pub font_weight: u16,
    pub border_radius: u16,
}

pub const HOME_BUTTON_STYLE: ButtonStyle = ButtonStyle {
    background: Rgb(0x67, 0x7a, 0x58),
    color: Rgb(0xff, 0xff, 0xff),
    hover_background: Rgb(0x5a, 0x6a, 0x4a),
    padding: (13, 40),
    font_size: 16,
    font_weight: 500,
    border_radius: 100,
};

impl ButtonStyle {
    pub fn to_css(&self) -> String {
        format!(
            "background-color:{};color:{};padding:{}px {}px;font-size:{}px;font-weight:{};border-radius:{}px",
            self.background.to_hex(),
            self.color.to_hex(),
            self.padding.0,
            self.padding.1,
            self.font_size,
            self.font_weight,
            self.border_radius,
        )
    }
}

#[derive(Debug, Clone)]
pub struct ActionButton<'s> {
    pub label: &'s str,
    pub class: &'static str,
    pub style: ButtonStyle,
    pub on_click: Option<&'s ClickHandler>,
}

impl<'s> ActionButton<'s> {
    pub fn new(label: &'s str, on_click: Option<&'s ClickHandler>) -> Self {
        Self {
            label,
            class: HOME_BUTTON_CLASS,
            style: HOME_BUTTON_STYLE,
            on_click,
        }
    }

    /// Dispatches to the slide's callback; a button without one does nothing.
    pub fn click(&self) {
        match self.on_click {
            Some(handler) => handler.call(),
            None => log::debug!("button '{}' has no click handler", self.label),
        }
    }

    pub fn to_node(&self) -> Node {
        Element::new("button")
            .attr("type", "button")
            .class(self.class)
            .attr("style", self.style.to_css())
            .attr("data-hover-background", self.style.hover_background.to_hex())
            .child(self.label)
            .into()
    }
}
