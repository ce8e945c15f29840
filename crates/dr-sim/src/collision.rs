//! Token consumption.
//!
//! The agent eats every token inside a box of half-width
//! `0.75 × agent.size` centred on the agent.  On the travel axis the box is
//! centred on the agent's actual coordinate; on the cross axis it is centred
//! on the nearest grid lane, so tokens jittered off the lane are still
//! reachable.

use dr_agent::Agent;
use dr_core::snap_to_grid;
use dr_field::TokenField;

/// Collision half-width as a fraction of the agent size.
pub const COLLISION_FACTOR: f32 = 0.75;

/// Half-width of the consumption box for `agent`.
#[inline]
pub fn collision_threshold(agent: &Agent) -> f32 {
    agent.size * COLLISION_FACTOR
}

/// Remove every token the agent currently overlaps.  Returns the number
/// consumed.  Comparisons are strict: a token exactly at the threshold
/// survives.
pub fn resolve(agent: &Agent, field: &mut TokenField) -> usize {
    let t = collision_threshold(agent);
    let grid = field.grid_size();
    let pos = agent.position;

    if agent.direction.is_horizontal() {
        let lane_y = snap_to_grid(pos.y, grid);
        field.consume_where(|tok| (tok.y() - lane_y).abs() < t && (tok.x() - pos.x).abs() < t)
    } else {
        let lane_x = snap_to_grid(pos.x, grid);
        field.consume_where(|tok| (tok.x() - lane_x).abs() < t && (tok.y() - pos.y).abs() < t)
    }
}
