pub const RENDER_WIDTH: i32 = 1920;           // Default window width
pub const RENDER_HEIGHT: i32 = 1080;          // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_INTERVAL_MS: u64 = 5000;    // Autoplay interval when a slide does not set one
pub const TRANSITION_DURATION: f32 = 0.6;     // Duration of the slide transition (seconds)
pub const KEN_BURNS_ZOOM: f32 = 0.92;         // Source rect scale reached by the end of a slide
