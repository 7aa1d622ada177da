//! Tick transition: frozen before-grid in, freshly staged after-grid out.

use crate::api::StepApi;
use crate::elements;
use crate::grid::Grid;
use crate::material::Material;

/// Order in which source cells are visited during a tick.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub enum Traversal {
    /// Row-major: y ascending, then x ascending.
    #[default]
    TopDown,
    /// The exact reverse of `TopDown`.
    BottomUp,
}

impl Traversal {
    /// Every `(x, y)` of a `width × height` grid, once, in this order.
    #[must_use]
    pub fn order(self, width: usize, height: usize) -> Box<dyn Iterator<Item = (i32, i32)>> {
        let (w, h) = (width as i32, height as i32);
        match self {
            Self::TopDown => Box::new((0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))),
            Self::BottomUp => {
                Box::new((0..h).rev().flat_map(move |y| (0..w).rev().map(move |x| (x, y))))
            }
        }
    }
}

/// Double-buffered state transition.
///
/// Rules read only the current grid and write only the next one. Each move
/// swaps two cells and stamps both with the tick's generation; a stamped
/// cell is skipped as a source and refused as a destination for the rest of
/// the tick. A tick is therefore a set of disjoint swaps between neighbors.
#[derive(Debug, Default)]
pub struct Engine {
    traversal: Traversal,
    stamps: Vec<u32>,
    generation: u32,
}

impl Engine {
    #[must_use]
    pub fn new(traversal: Traversal) -> Self {
        Self {
            traversal,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn set_traversal(&mut self, traversal: Traversal) {
        self.traversal = traversal;
    }

    /// Advance `current` by one tick into a new grid. `current` is untouched.
    #[must_use]
    pub fn step(&mut self, current: &Grid<Material>) -> Grid<Material> {
        let mut next = current.clone();
        self.step_into(current, &mut next);
        next
    }

    /// Advance `current` by one tick, overwriting `next` (reusing its
    /// allocation). Returns the number of moves made.
    pub fn step_into(&mut self, current: &Grid<Material>, next: &mut Grid<Material>) -> usize {
        next.clone_from(current);
        let gen = self.begin_tick(current.len());
        let mut moves = 0;

        for (x, y) in self.traversal.order(current.width(), current.height()) {
            let Some(&material) = current.get(x, y) else {
                continue;
            };
            if material.is_empty() {
                continue;
            }
            let mut api = StepApi::new(current, next, &mut self.stamps, x, y, gen);
            if api.is_claimed(0, 0) {
                continue;
            }
            elements::update_cell(material, &mut api);
            if api.is_claimed(0, 0) {
                moves += 1;
            }
        }
        moves
    }

    /// Bump the generation, resetting the stamps on resize or wrap-around.
    fn begin_tick(&mut self, len: usize) -> u32 {
        if self.stamps.len() != len {
            self.stamps = vec![0; len];
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.stamps.fill(0);
            self.generation = 1;
        }
        self.generation
    }
}

/// One tick with a fresh top-down engine.
#[must_use]
pub fn step(current: &Grid<Material>) -> Grid<Material> {
    Engine::default().step(current)
}
