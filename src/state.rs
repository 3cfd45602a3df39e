#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Direction {
    Next, // New panel enters from the right
    Prev, // New panel enters from the left
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CarouselState {
    // Showing the current panel, counting towards its interval
    Displaying { elapsed: f32 },
    // Sliding from one panel to another
    Transitioning { from: usize, to: usize, direction: Direction, elapsed: f32 },
}
