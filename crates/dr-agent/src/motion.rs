//! Per-frame movement integration.

use std::f32::consts::PI;

use dr_core::{LaneSmoothing, Point, snap_to_grid};

use crate::Agent;

/// Animation phase advance per integrated frame.
pub const PHASE_STEP: f32 = 0.2;

/// Share of the remaining cross-axis distance covered per frame under
/// [`LaneSmoothing::Ease`].
pub const EASE_FACTOR: f32 = 0.2;

/// Where the agent is heading this frame: one `speed` step along the travel
/// axis, with the cross axis snapped to the nearest lane.
pub fn lane_target(agent: &Agent, grid: f32) -> Point {
    let Point { x, y } = agent.position;
    let step = agent.speed * agent.direction.sign();
    if agent.direction.is_horizontal() {
        Point::new(x + step, snap_to_grid(y, grid))
    } else {
        Point::new(snap_to_grid(x, grid), y + step)
    }
}

/// Advance a moving agent by one frame on a surface of side `extent`.
///
/// A still agent is left untouched, animation phase included.
pub fn integrate(agent: &mut Agent, grid: f32, extent: f32, smoothing: LaneSmoothing) {
    if !agent.is_moving {
        return;
    }

    let target = lane_target(agent, grid);
    let next = match smoothing {
        LaneSmoothing::Snap => target,
        LaneSmoothing::Ease => {
            let current = agent.position;
            if agent.direction.is_horizontal() {
                Point::new(target.x, current.y + (target.y - current.y) * EASE_FACTOR)
            } else {
                Point::new(current.x + (target.x - current.x) * EASE_FACTOR, target.y)
            }
        }
    };

    let lo = agent.size / 2.0;
    let hi = extent - agent.size / 2.0;
    agent.position = Point::new(next.x.max(lo).min(hi), next.y.max(lo).min(hi));

    agent.motion_phase = (agent.motion_phase + PHASE_STEP) % PI;
}
