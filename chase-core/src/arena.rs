use glam::Vec2;

/// Rectangular play field. World coordinates run from `(0, 0)` at the
/// top-left corner to `(width, height)` at the bottom-right, with y
/// growing downward, matching screen space.
#[derive(Clone, Copy, Debug)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamps `pos` per axis to `[margin, extent - margin]`.
    pub fn clamp(&self, pos: Vec2, margin: f32) -> Vec2 {
        Vec2::new(
            pos.x.clamp(margin, self.width - margin),
            pos.y.clamp(margin, self.height - margin),
        )
    }

    /// Returns `true` if `pos` lies within `2 * margin` of two adjacent
    /// edges at once, i.e. inside one of the four corner quadrants.
    pub fn in_corner(&self, pos: Vec2, margin: f32) -> bool {
        let m2 = margin * 2.0;
        let near_x = pos.x < m2 || pos.x > self.width - m2;
        let near_y = pos.y < m2 || pos.y > self.height - m2;
        near_x && near_y
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
