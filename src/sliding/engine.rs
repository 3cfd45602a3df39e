use std::path::Path;
use std::time::Duration;

use raylib::prelude::*;

use crate::carousel::{CarouselView, PanelBody};
use crate::engine::{Autoplay, Engine};
use crate::sliding::panel::{ContentLayout, PanelSprite, draw_panel};
use crate::state::{CarouselState, Direction};
use crate::texture_loader::load_texture_with_exif_rotation;

const INDICATOR_RADIUS: f32 = 6.0;
const INDICATOR_GAP: f32 = 28.0;

/// Draws panels full screen and slides them horizontally between each other.
pub struct SlidingEngine<'s> {
    view: Option<CarouselView<'s>>,
    sprites: Vec<PanelSprite>,
    autoplay: Autoplay,
    default_interval: Duration,
}

impl SlidingEngine<'_> {
    pub fn new(default_interval: Duration) -> Self {
        Self {
            view: None,
            sprites: Vec::new(),
            autoplay: Autoplay::from_intervals(Vec::new()),
            default_interval,
        }
    }
}

impl<'s> Engine<'s> for SlidingEngine<'s> {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, view: CarouselView<'s>) -> bool {
        self.sprites.clear();
        for panel in &view.panels {
            // A missing or broken image leaves the panel without a background
            let texture = if panel.image.is_empty() {
                None
            } else {
                match load_texture_with_exif_rotation(rl, thread, Path::new(panel.image)) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        log::warn!("panel {}: {:#}", panel.key, e);
                        None
                    }
                }
            };
            self.sprites.push(PanelSprite::new(texture));
        }

        self.autoplay = Autoplay::new(&view, self.default_interval);
        self.view = Some(view);
        !self.sprites.is_empty()
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool {
        let Some(view) = &self.view else {
            return false;
        };
        let screen = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let was_transitioning = matches!(self.autoplay.state(), CarouselState::Transitioning { .. });

        // --- Input ---
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.autoplay.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.autoplay.prev();
        }

        // Hovering the carousel pauses autoplay
        if rl.is_cursor_on_screen() {
            self.autoplay.pause();
        } else {
            self.autoplay.resume();
        }

        let mouse = rl.get_mouse_position();
        let current = self.autoplay.current();
        let displaying = matches!(self.autoplay.state(), CarouselState::Displaying { .. });
        let button_rect = ContentLayout::new(&view.panels[current].body, screen).button;
        let hovered = displaying && button_rect.is_some_and(|rect| rect.check_collision_point_rec(mouse));

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(index) = indicator_at(view.len(), screen, mouse) {
                self.autoplay.go_to(index);
            } else if hovered {
                if let PanelBody::Default(content) = &view.panels[current].body {
                    if let Some(button) = &content.button {
                        button.click();
                    }
                }
            }
        }

        // --- Update ---
        self.autoplay.update(dt);
        if let CarouselState::Transitioning { to, .. } = self.autoplay.state() {
            if !was_transitioning {
                self.sprites[to].restart();
            }
            self.sprites[to].update(dt);
        }
        self.sprites[self.autoplay.current()].update(dt);

        // --- Draw ---
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);

        match self.autoplay.state() {
            CarouselState::Displaying { .. } => {
                let current = self.autoplay.current();
                draw_panel(&mut d, &view.panels[current], &self.sprites[current], 0.0, hovered);
            }
            CarouselState::Transitioning { from, to, direction, .. } => {
                let progress = self.autoplay.transition_progress().unwrap_or(1.0);
                let shift = ease::cubic_in_out(progress, 0.0, 1.0, 1.0) * screen.0;
                let (from_x, to_x) = match direction {
                    Direction::Next => (-shift, screen.0 - shift),
                    Direction::Prev => (shift, shift - screen.0),
                };
                draw_panel(&mut d, &view.panels[from], &self.sprites[from], from_x, false);
                draw_panel(&mut d, &view.panels[to], &self.sprites[to], to_x, false);
            }
        }

        draw_indicators(&mut d, view.len(), self.autoplay.current(), screen);
        true
    }
}

fn indicator_center(index: usize, count: usize, screen: (f32, f32)) -> Vector2 {
    let row_width = (count.saturating_sub(1)) as f32 * INDICATOR_GAP;
    Vector2::new(
        screen.0 / 2.0 - row_width / 2.0 + index as f32 * INDICATOR_GAP,
        screen.1 - 40.0,
    )
}

fn indicator_at(count: usize, screen: (f32, f32), mouse: Vector2) -> Option<usize> {
    if count < 2 {
        return None;
    }
    (0..count).find(|&index| {
        let center = indicator_center(index, count, screen);
        let (dx, dy) = (mouse.x - center.x, mouse.y - center.y);
        // Generous hit area around the dot
        dx * dx + dy * dy <= (INDICATOR_GAP / 2.0) * (INDICATOR_GAP / 2.0)
    })
}

fn draw_indicators(d: &mut RaylibDrawHandle, count: usize, active: usize, screen: (f32, f32)) {
    if count < 2 {
        return;
    }
    for index in 0..count {
        let center = indicator_center(index, count, screen);
        let color = if index == active { Color::WHITE } else { Color::new(255, 255, 255, 110) };
        d.draw_circle(center.x as i32, center.y as i32, INDICATOR_RADIUS, color);
    }
}
