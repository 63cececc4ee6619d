#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub pursuer_speed: f32,
    /// Targets closer than this leave the pursuer in place.
    pub pursuer_dead_zone: f32,
    pub evader_speed: f32,
    /// The evader only reacts when the pursuer is closer than this.
    pub safe_distance: f32,
    /// Edges closer than this push the evader inward.
    pub corner_awareness: f32,
    /// Below this distance the evader's displacement is amplified.
    pub escape_distance: f32,
    pub escape_multiplier: f32,
    /// Extra clamp margin for the evader, on top of `body_radius`.
    pub wall_pad: f32,
    /// Speed multiplier for the emergency step toward the arena center.
    pub recovery_factor: f32,
    pub body_radius: f32,
    pub trail_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pursuer_speed: 8.0,
            pursuer_dead_zone: 5.0,
            evader_speed: 7.0,
            safe_distance: 200.0,
            corner_awareness: 150.0,
            escape_distance: 100.0,
            escape_multiplier: 1.5,
            wall_pad: 10.0,
            recovery_factor: 1.5,
            body_radius: 30.0,
            trail_len: 5,
        }
    }
}

impl Config {
    /// Clamp margin used by the evader (`body_radius + wall_pad`).
    #[inline]
    pub fn evader_margin(&self) -> f32 {
        self.body_radius + self.wall_pad
    }
}
