//! Drawing.
//!
//! The host supplies a [`DrawSurface`]; [`render`] issues one full frame of
//! draw calls against it.  Nothing here knows about pixels or colours.

use dr_agent::Agent;
use dr_field::TokenField;

/// Token dot radius, in surface units.
pub const TOKEN_RADIUS: f32 = 4.0;

/// Immediate-mode drawing target.
pub trait DrawSurface {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Paint the background over the whole surface.
    fn fill_background(&mut self);

    /// Filled circle (tokens).
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32);

    /// Filled circular wedge from `start` to `end` radians, clockwise in
    /// screen space, closed through the centre (the agent sprite).
    fn draw_wedge(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
}

/// A surface that draws nothing.  For headless runs that only need the
/// simulation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self) {}
    fn fill_background(&mut self) {}
    fn draw_circle(&mut self, _x: f32, _y: f32, _radius: f32) {}
    fn draw_wedge(&mut self, _x: f32, _y: f32, _radius: f32, _start: f32, _end: f32) {}
}

/// Draw one frame: background, every token, then the agent on top.
pub fn render<S: DrawSurface + ?Sized>(surface: &mut S, field: &TokenField, agent: &Agent) {
    surface.clear();
    surface.fill_background();
    for token in field.tokens() {
        surface.draw_circle(token.x(), token.y(), TOKEN_RADIUS);
    }
    let (start, end) = agent.wedge_angles();
    surface.draw_wedge(agent.position.x, agent.position.y, agent.size, start, end);
}
