use rand::Rng;
use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::button::{ActionButton, Rgb};
use crate::carousel::{DefaultContent, Panel, PanelBody};
use crate::constants::KEN_BURNS_ZOOM;
use crate::title::{FormattedTitle, Fragment};

const KEN_BURNS_DURATION: f32 = 8.0;
const OVERLAY: Color = Color::new(0, 0, 0, 110);
const ACCENT: Color = Color::new(0xb8, 0xd4, 0x8f, 255);

const TITLE_SIZE: f32 = 56.0;
const DESCRIPTION_SIZE: f32 = 26.0;
const BLOCK_GAP: f32 = 24.0;

/// Background of one panel: its texture, if it loaded, and the Ken Burns drift over it.
pub struct PanelSprite {
    texture: Option<Texture2D>,
    pan_direction: i32,
    tween_zoom: ease::Tween,
    tween_pan: ease::Tween,
    zoom: f32,
    pan: f32,
}

impl PanelSprite {
    pub fn new(texture: Option<Texture2D>) -> Self {
        // 0: left-to-right, 1: right-to-left, 2: top-to-bottom, 3: bottom-to-top
        let pan_direction = rand::rng().random_range(0..4);
        Self {
            texture,
            pan_direction,
            tween_zoom: Self::zoom_tween(),
            tween_pan: Self::pan_tween(),
            zoom: 1.0,
            pan: 0.0,
        }
    }

    fn zoom_tween() -> ease::Tween {
        ease::Tween::new(ease::linear_none, 1.0, KEN_BURNS_ZOOM, KEN_BURNS_DURATION)
    }

    fn pan_tween() -> ease::Tween {
        ease::Tween::new(ease::sine_in_out, 0.0, 1.0, KEN_BURNS_DURATION)
    }

    /// Restarts the drift; called when the panel comes on screen.
    pub fn restart(&mut self) {
        self.tween_zoom = Self::zoom_tween();
        self.tween_pan = Self::pan_tween();
        self.zoom = 1.0;
        self.pan = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        self.zoom = self.tween_zoom.apply(dt);
        self.pan = self.tween_pan.apply(dt);
    }

    /// Draws the texture cover-fitted to the screen, shifted horizontally by `offset`.
    /// Panels without a texture keep the cleared background.
    pub fn draw(&self, d: &mut RaylibDrawHandle, offset: f32, screen: (f32, f32)) {
        let Some(texture) = &self.texture else {
            return;
        };
        let (sw, sh) = screen;
        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;

        let screen_aspect = sw / sh;
        let (crop_width, crop_height) = if tex_width / tex_height > screen_aspect {
            (tex_height * screen_aspect, tex_height)
        } else {
            (tex_width, tex_width / screen_aspect)
        };
        let src_width = crop_width * self.zoom;
        let src_height = crop_height * self.zoom;

        let (fx, fy) = match self.pan_direction {
            0 => (self.pan, 0.5),
            1 => (1.0 - self.pan, 0.5),
            2 => (0.5, self.pan),
            _ => (0.5, 1.0 - self.pan),
        };
        let source_rec = Rectangle::new(
            (tex_width - src_width) * fx,
            (tex_height - src_height) * fy,
            src_width,
            src_height,
        );

        d.draw_texture_pro(
            texture,
            source_rec,
            Rectangle::new(offset, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

/// Draws the overlay and content of `panel`, shifted horizontally by `offset`.
pub fn draw_panel(d: &mut RaylibDrawHandle, panel: &Panel<'_>, sprite: &PanelSprite, offset: f32, hovered: bool) {
    let screen = (d.get_screen_width() as f32, d.get_screen_height() as f32);
    sprite.draw(d, offset, screen);
    d.draw_rectangle(offset as i32, 0, screen.0 as i32, screen.1 as i32, OVERLAY);

    let layout = ContentLayout::new(&panel.body, screen);
    let x = (layout.left + offset) as i32;
    match &panel.body {
        PanelBody::Default(content) => draw_default_content(d, content, &layout, x, hovered),
        PanelBody::Custom(node) => {
            let size = DESCRIPTION_SIZE as i32;
            for (line, text) in node.text_content().lines().enumerate() {
                let y = layout.top as i32 + line as i32 * (size + size / 2);
                d.draw_text(text, x, y, size, Color::WHITE);
            }
        }
    }
}

fn draw_default_content(d: &mut RaylibDrawHandle, content: &DefaultContent<'_>, layout: &ContentLayout, x: i32, hovered: bool) {
    if let (Some(title), Some(y)) = (&content.title, layout.title_y) {
        draw_title(d, &title.content, x, y as i32);
    }
    if let (Some(description), Some(y)) = (&content.description, layout.description_y) {
        d.draw_text(description.text, x, y as i32, DESCRIPTION_SIZE as i32, Color::WHITE);
    }
    if let (Some(button), Some(rect)) = (&content.button, layout.button) {
        let rect = Rectangle::new(x as f32, rect.y, rect.width, rect.height);
        draw_button(d, button, rect, hovered);
    }
}

fn draw_title(d: &mut RaylibDrawHandle, title: &FormattedTitle<'_>, x: i32, y: i32) {
    let size = TITLE_SIZE as i32;
    let spacing = size / 10;
    match title {
        FormattedTitle::Node(node) => d.draw_text(&node.text_content(), x, y, size, Color::WHITE),
        FormattedTitle::Fragments(fragments) => {
            let mut cursor = x;
            for fragment in fragments.iter().filter(|f| !f.text().is_empty()) {
                let text = fragment.text();
                match fragment {
                    Fragment::Text(_) => d.draw_text(text, cursor, y, size, Color::WHITE),
                    Fragment::Strong { class, .. } => {
                        let color = if class.is_some() { ACCENT } else { Color::WHITE };
                        // The default font has no bold face
                        d.draw_text(text, cursor, y, size, color);
                        d.draw_text(text, cursor + 2, y, size, color);
                    }
                }
                cursor += measure_text(text, size) + spacing;
            }
        }
    }
}

fn draw_button(d: &mut RaylibDrawHandle, button: &ActionButton<'_>, rect: Rectangle, hovered: bool) {
    let style = button.style;
    let background = if hovered { style.hover_background } else { style.background };
    d.draw_rectangle_rounded(rect, 1.0, 16, to_color(background));

    let size = button_font_size(button);
    let text_width = measure_text(button.label, size);
    d.draw_text(
        button.label,
        (rect.x + (rect.width - text_width as f32) / 2.0) as i32,
        (rect.y + (rect.height - size as f32) / 2.0) as i32,
        size,
        to_color(style.color),
    );
}

fn button_font_size(button: &ActionButton<'_>) -> i32 {
    // Style sizes are CSS pixels; the default font reads small at that size
    i32::from(button.style.font_size) * 3 / 2
}

fn to_color(rgb: Rgb) -> Color {
    Color::new(rgb.0, rgb.1, rgb.2, 255)
}

/// Vertical placement of the content blocks, shared by drawing and hit testing.
pub struct ContentLayout {
    pub left: f32,
    pub top: f32,
    pub title_y: Option<f32>,
    pub description_y: Option<f32>,
    pub button: Option<Rectangle>,
}

impl ContentLayout {
    pub fn new(body: &PanelBody<'_>, screen: (f32, f32)) -> Self {
        let (sw, sh) = screen;
        let left = sw * 0.1;
        let top = sh * 0.35;
        let mut layout = Self {
            left,
            top,
            title_y: None,
            description_y: None,
            button: None,
        };

        let PanelBody::Default(content) = body else {
            return layout;
        };

        let mut y = top;
        if content.title.is_some() {
            layout.title_y = Some(y);
            y += TITLE_SIZE + BLOCK_GAP;
        }
        if content.description.is_some() {
            layout.description_y = Some(y);
            y += DESCRIPTION_SIZE + BLOCK_GAP;
        }
        if let Some(button) = &content.button {
            let size = button_font_size(button);
            let (pad_y, pad_x) = button.style.padding;
            let width = measure_text(button.label, size) as f32 + 2.0 * f32::from(pad_x);
            let height = size as f32 + 2.0 * f32::from(pad_y);
            layout.button = Some(Rectangle::new(left, y + BLOCK_GAP, width, height));
        }
        layout
    }
}
