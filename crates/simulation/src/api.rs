//! Relative-offset API for element rules during one tick.

use crate::grid::Grid;
use crate::material::Material;

/// Reads come from the frozen `current` grid, writes land in the staged
/// `next` grid. Every cell written this tick is stamped with the generation
/// and takes no further part in the tick, as source or destination.
///
/// Out-of-bounds reads return `None`, and out-of-bounds cells count as claimed.
#[derive(Debug)]
pub struct StepApi<'a> {
    current: &'a Grid<Material>,
    next: &'a mut Grid<Material>,
    stamps: &'a mut [u32],
    pub x: i32,
    pub y: i32,
    pub generation: u32,
}

impl<'a> StepApi<'a> {
    pub fn new(
        current: &'a Grid<Material>,
        next: &'a mut Grid<Material>,
        stamps: &'a mut [u32],
        x: i32,
        y: i32,
        generation: u32,
    ) -> Self {
        debug_assert_eq!(current.len(), next.len());
        debug_assert_eq!(current.len(), stamps.len());
        Self {
            current,
            next,
            stamps,
            x,
            y,
            generation,
        }
    }

    /// Material at the offset in the frozen before-state.
    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<Material> {
        self.current.get(self.x + dx, self.y + dy).copied()
    }

    /// Content already staged at the offset, `Empty` when out of range.
    #[must_use]
    pub fn staged(&self, dx: i32, dy: i32) -> Material {
        self.next
            .get(self.x + dx, self.y + dy)
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_claimed(&self, dx: i32, dy: i32) -> bool {
        self.current
            .index_of(self.x + dx, self.y + dy)
            .is_none_or(|i| self.stamps.get(i) == Some(&self.generation))
    }

    /// Moves this cell's material to the offset, putting whatever is staged
    /// there back into this cell. Both cells become claimed.
    ///
    /// Returns `false` and writes nothing if either cell is claimed.
    pub fn swap(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_claimed(0, 0) || self.is_claimed(dx, dy) {
            return false;
        }
        let Some(me) = self.get(0, 0) else {
            return false;
        };
        let displaced = self.staged(dx, dy);
        self.next.set(self.x, self.y, displaced);
        self.next.set(self.x + dx, self.y + dy, me);
        self.claim(0, 0);
        self.claim(dx, dy);
        true
    }

    fn claim(&mut self, dx: i32, dy: i32) {
        if let Some(i) = self.current.index_of(self.x + dx, self.y + dy) {
            if let Some(stamp) = self.stamps.get_mut(i) {
                *stamp = self.generation;
            }
        }
    }
}
