//! Per-frame movement rules for the two characters.
//!
//! The typical frame looks like:
//! 1. [`pursue_step`] — the pursuer seeks the pointer target.
//! 2. [`evade_step`] — if the pursuer actually moved, the evader reacts
//!    to its new position.
//!
//! Both rules are pure functions from points to a point under a
//! [`Config`] and an [`Arena`]; they hold no state of their own, and a
//! frame advances by calling each of them at most once.

use crate::{arena::Arena, config::Config};
use glam::Vec2;

/// Moves the pursuer one step toward `target`.
///
/// If the target is further away than `Config::pursuer_dead_zone`, the
/// pursuer travels `Config::pursuer_speed` along the normalized
/// direction to it, and the result is clamped per axis so the body
/// stays inside the arena (margin `Config::body_radius`). Targets
/// inside the dead zone leave the position unchanged, which keeps the
/// pursuer from jittering once it has reached the pointer.
///
/// ### Parameters
/// - `pos` - Current pursuer position.
/// - `target` - Point being chased (the pointer, in world space).
/// - `cfg` - Tuning constants (speed, dead zone, body radius).
/// - `arena` - Play-field bounds used for clamping.
///
/// ### Returns
/// The new pursuer position.
pub fn pursue_step(pos: Vec2, target: Vec2, cfg: &Config, arena: &Arena) -> Vec2 {
    let delta = target - pos;
    if delta.length() <= cfg.pursuer_dead_zone {
        return pos;
    }

    let next = pos + delta.normalize() * cfg.pursuer_speed;
    arena.clamp(next, cfg.body_radius)
}

/// Moves the evader one step away from `pursuer`.
///
/// Nothing happens until the pursuer is strictly closer than
/// `Config::safe_distance`; the evader idles between threats. When
/// active, the new position is built in a fixed order:
///
/// 1. Flee directly away from the pursuer at `Config::evader_speed`.
///    Coincident positions have no away direction, so the flee term is
///    zero for that frame (`normalize_or_zero`) and only the wall
///    forces below contribute.
/// 2. Every arena edge closer than `Config::corner_awareness` pushes
///    the target inward by `Config::evader_speed`. Pushes from adjacent
///    edges stack, which is what steers the evader out of corners
///    without any explicit corner handling.
/// 3. Inside `Config::escape_distance` the whole displacement so far is
///    scaled by `Config::escape_multiplier`, letting the evader briefly
///    outrun a pursuer of equal nominal speed.
/// 4. The target is clamped once, margin [`Config::evader_margin`].
/// 5. If the clamped position still sits in a corner quadrant
///    ([`Arena::in_corner`] with the same margin), a forced step of
///    `evader_speed * recovery_factor` toward the arena center is added
///    on top. This runs after the clamp and is not re-clamped; it is
///    the escape hatch for corner deadlocks where the blended forces
///    cancel or keep pressing into the wall.
///
/// ### Parameters
/// - `pos` - Current evader position.
/// - `pursuer` - The pursuer's (already updated) position.
/// - `cfg` - Tuning constants for the evasion rules.
/// - `arena` - Play-field bounds used for wall forces and clamping.
///
/// ### Returns
/// The new evader position, or `pos` unchanged while idle.
pub fn evade_step(pos: Vec2, pursuer: Vec2, cfg: &Config, arena: &Arena) -> Vec2 {
    let distance = pos.distance(pursuer);
    if distance >= cfg.safe_distance {
        return pos;
    }

    let flee = (pos - pursuer).normalize_or_zero() * cfg.evader_speed;
    let mut target = pos + flee;

    // Wall repulsion: each nearby edge pushes straight inward.
    if pos.x < cfg.corner_awareness {
        target.x += cfg.evader_speed;
    }
    if pos.x > arena.width - cfg.corner_awareness {
        target.x -= cfg.evader_speed;
    }
    if pos.y < cfg.corner_awareness {
        target.y += cfg.evader_speed;
    }
    if pos.y > arena.height - cfg.corner_awareness {
        target.y -= cfg.evader_speed;
    }

    if distance < cfg.escape_distance {
        target = pos + (target - pos) * cfg.escape_multiplier;
    }

    let margin = cfg.evader_margin();
    let mut next = arena.clamp(target, margin);

    if arena.in_corner(next, margin) {
        let to_center = (arena.center() - next).normalize_or_zero();
        next += to_center * cfg.evader_speed * cfg.recovery_factor;
    }

    next
}
