//! Session: owns the grid between ticks, applies edits, drives the engine.

use crate::config::{ConfigError, SandboxConfig};
use crate::engine::Engine;
use crate::grid::Grid;
use crate::material::Material;

/// Edits land on the front buffer between ticks; each tick stages into the
/// back buffer and the two are swapped.
#[derive(Debug)]
pub struct Sandbox {
    current: Grid<Material>,
    next: Grid<Material>,
    engine: Engine,
    ticks_per_frame: u32,
    playing: bool,
    ticks: u64,
}

impl Sandbox {
    /// # Errors
    ///
    /// Returns the validation error for an unusable `config`.
    pub fn new(config: SandboxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "sandbox {}x{} ({} ticks/frame, {:?})",
            config.columns,
            config.rows,
            config.ticks_per_frame,
            config.traversal,
        );
        let current = Grid::new(config.rows, config.columns, Material::Empty);
        Ok(Self {
            next: current.clone(),
            current,
            engine: Engine::new(config.traversal),
            ticks_per_frame: config.ticks_per_frame,
            playing: true,
            ticks: 0,
        })
    }

    /// The canonical grid, as of the last tick plus any edits since.
    #[must_use]
    pub fn grid(&self) -> &Grid<Material> {
        &self.current
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.current.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Ticks run since creation.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    #[must_use]
    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    /// Zero is clamped to one.
    pub fn set_ticks_per_frame(&mut self, ticks: u32) {
        self.ticks_per_frame = ticks.max(1);
    }

    pub fn set(&mut self, x: i32, y: i32, material: Material) {
        self.current.set(x, y, material);
    }

    /// Fill the `(2r+1)²` square around `(cx, cy)`, clipped to the grid.
    pub fn paint(&mut self, cx: i32, cy: i32, radius: u32, material: Material) {
        self.current.set_region(cx, cy, radius, &material);
    }

    pub fn erase(&mut self, cx: i32, cy: i32, radius: u32) {
        self.paint(cx, cy, radius, Material::Empty);
    }

    pub fn clear(&mut self) {
        log::debug!("clearing sandbox after {} ticks", self.ticks);
        self.current = Grid::new(self.height(), self.width(), Material::Empty);
    }

    /// One engine tick, regardless of play state. Returns the moves made.
    pub fn tick(&mut self) -> usize {
        let moves = self.engine.step_into(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.ticks += 1;
        log::trace!("tick {}: {} moves", self.ticks, moves);
        moves
    }

    /// One displayed frame: `ticks_per_frame` ticks while playing, none
    /// while paused.
    pub fn advance(&mut self) -> &Grid<Material> {
        if self.playing {
            for _ in 0..self.ticks_per_frame {
                self.tick();
            }
        }
        &self.current
    }

    /// Map the current grid cell by cell, e.g. into display colors.
    #[must_use]
    pub fn render<R, F>(&self, f: F) -> Grid<R>
    where
        F: FnMut(&Material, i32, i32) -> R,
    {
        self.current.map(f)
    }
}
