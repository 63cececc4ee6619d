use glam::Vec2;

/// A fixed-capacity ring buffer holding the most recent positions of a
/// character.
///
/// The buffer always stays full: it is seeded with `len` copies of the
/// spawn position, and every [`Trail::push`] overwrites the oldest
/// entry. [`Trail::iter`] yields positions oldest first, which is the
/// order the viewer fades them in.
///
/// The trail is purely cosmetic; nothing in [`crate::steering`] reads it.
#[derive(Debug, Clone)]
pub struct Trail {
    slots: Vec<Vec2>,
    /// Index of the oldest entry; the next push overwrites it.
    head: usize,
}

impl Trail {
    /// Creates a trail of capacity `len` with every slot set to `pos`.
    pub fn filled(pos: Vec2, len: usize) -> Self {
        Self {
            slots: vec![pos; len],
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Records `pos`, overwriting the oldest entry.
    pub fn push(&mut self, pos: Vec2) {
        if self.slots.is_empty() {
            return;
        }
        self.slots[self.head] = pos;
        self.head = (self.head + 1) % self.slots.len();
    }

    /// Iterates the stored positions from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        let n = self.slots.len();
        (0..n).map(move |i| self.slots[(self.head + i) % n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_seeds_every_slot_with_the_spawn_position() {
        let spawn = Vec2::new(200.0, 300.0);
        let trail = Trail::filled(spawn, 5);

        assert_eq!(trail.len(), 5);
        assert!(!trail.is_empty());
        assert!(trail.iter().all(|p| p == spawn));
    }

    #[test]
    fn push_overwrites_oldest_and_iter_goes_oldest_to_newest() {
        let mut trail = Trail::filled(Vec2::ZERO, 3);

        trail.push(Vec2::new(1.0, 0.0));
        trail.push(Vec2::new(2.0, 0.0));

        let got: Vec<Vec2> = trail.iter().collect();
        assert_eq!(
            got,
            vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]
        );
    }

    #[test]
    fn push_wraps_around_after_capacity_entries() {
        let mut trail = Trail::filled(Vec2::ZERO, 3);

        for i in 1..=4 {
            trail.push(Vec2::new(i as f32, 0.0));
        }

        // The three newest entries survive, oldest first.
        let got: Vec<Vec2> = trail.iter().collect();
        assert_eq!(
            got,
            vec![
                Vec2::new(2.0, 0.0),
                Vec2::new(3.0, 0.0),
                Vec2::new(4.0, 0.0)
            ]
        );
    }

    #[test]
    fn zero_capacity_trail_ignores_pushes() {
        let mut trail = Trail::filled(Vec2::ZERO, 0);

        assert!(trail.is_empty());
        trail.push(Vec2::new(1.0, 1.0));

        assert_eq!(trail.len(), 0);
        assert_eq!(trail.iter().count(), 0);
    }
}
