use crate::{arena::Arena, config::Config, steering, trail::Trail};
use glam::Vec2;

/// Shared plain state for both characters: where it is and where it
/// recently was. Radius and speed live in [`Config`], so the two roles
/// differ only in which movement rule their `step` applies.
#[derive(Debug, Clone)]
pub struct Body {
    pub pos: Vec2,
    pub trail: Trail,
}

impl Body {
    pub fn new(pos: Vec2, trail_len: usize) -> Self {
        Self {
            pos,
            trail: Trail::filled(pos, trail_len),
        }
    }

    /// Moves to `next` and records it in the trail. Idle steps leave
    /// the trail untouched. Returns `true` if the position changed.
    fn advance(&mut self, next: Vec2) -> bool {
        if next == self.pos {
            return false;
        }
        self.pos = next;
        self.trail.push(next);
        true
    }
}

/// The player-controlled character; seeks the pointer target.
#[derive(Debug, Clone)]
pub struct Pursuer {
    pub body: Body,
}

impl Pursuer {
    pub fn new(pos: Vec2, cfg: &Config) -> Self {
        Self {
            body: Body::new(pos, cfg.trail_len),
        }
    }

    /// Steps toward `target` via [`steering::pursue_step`].
    ///
    /// Returns `true` if the pursuer actually moved; the caller uses
    /// this both for the attempt counter and to decide whether the
    /// evader gets to react this frame.
    pub fn step(&mut self, target: Vec2, cfg: &Config, arena: &Arena) -> bool {
        let next = steering::pursue_step(self.body.pos, target, cfg, arena);
        self.body.advance(next)
    }
}

/// The fleeing character.
#[derive(Debug, Clone)]
pub struct Evader {
    pub body: Body,
}

impl Evader {
    pub fn new(pos: Vec2, cfg: &Config) -> Self {
        Self {
            body: Body::new(pos, cfg.trail_len),
        }
    }

    /// Steps away from `pursuer` via [`steering::evade_step`].
    ///
    /// Returns `true` if the evader moved (`false` while it idles
    /// outside the safe distance).
    pub fn step(&mut self, pursuer: Vec2, cfg: &Config, arena: &Arena) -> bool {
        let next = steering::evade_step(self.body.pos, pursuer, cfg, arena);
        self.body.advance(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pursuer_step_moves_and_records_the_trail() {
        let cfg = Config::default();
        let arena = Arena::default();
        let spawn = Vec2::new(200.0, 300.0);
        let mut pursuer = Pursuer::new(spawn, &cfg);

        let moved = pursuer.step(Vec2::new(600.0, 300.0), &cfg, &arena);

        assert!(moved);
        assert_eq!(pursuer.body.pos, Vec2::new(208.0, 300.0));
        // Newest trail entry is the position just reached.
        assert_eq!(pursuer.body.trail.iter().last(), Some(pursuer.body.pos));
    }

    #[test]
    fn pursuer_idle_step_reports_false_and_keeps_the_trail() {
        let cfg = Config::default();
        let arena = Arena::default();
        let spawn = Vec2::new(200.0, 300.0);
        let mut pursuer = Pursuer::new(spawn, &cfg);

        // Target inside the dead zone: nothing moves, nothing recorded.
        let moved = pursuer.step(Vec2::new(202.0, 300.0), &cfg, &arena);

        assert!(!moved);
        assert_eq!(pursuer.body.pos, spawn);
        assert!(pursuer.body.trail.iter().all(|p| p == spawn));
    }

    #[test]
    fn evader_idles_until_threatened() {
        let cfg = Config::default();
        let arena = Arena::default();
        let mut evader = Evader::new(Vec2::new(600.0, 300.0), &cfg);

        // Far pursuer: idle.
        assert!(!evader.step(Vec2::new(200.0, 300.0), &cfg, &arena));
        assert_eq!(evader.body.pos, Vec2::new(600.0, 300.0));

        // Close pursuer: the evader reacts.
        assert!(evader.step(Vec2::new(500.0, 300.0), &cfg, &arena));
        assert_eq!(evader.body.pos, Vec2::new(607.0, 300.0));
    }
}
