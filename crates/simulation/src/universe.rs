//! WebAssembly entry point for the browser front end.

use wasm_bindgen::prelude::*;

use crate::config::SandboxConfig;
use crate::material::Material;
use crate::sandbox::Sandbox;

/// Sandbox plus a one-byte-per-cell mirror of the grid that JS reads
/// straight out of linear memory into an `r8uint` texture.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sandbox: Sandbox,
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    ///
    /// Fails on a zero width or height.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Universe, String> {
        let config = SandboxConfig::default().with_size(height as usize, width as usize);
        let sandbox = Sandbox::new(config).map_err(|err| err.to_string())?;
        let mut universe = Self {
            bytes: vec![0; sandbox.grid().len()],
            sandbox,
        };
        universe.sync();
        Ok(universe)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.sandbox.width() as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.sandbox.height() as u32
    }

    /// Unknown material ids are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, id: u8) {
        self.paint(x, y, 0, id);
    }

    /// Brush stroke of radius `radius` centered on `(x, y)`.
    pub fn paint(&mut self, x: i32, y: i32, radius: u32, id: u8) {
        match Material::try_from(id) {
            Ok(material) => {
                self.sandbox.paint(x, y, radius, material);
                self.sync();
            }
            Err(err) => log::warn!("ignoring paint at ({x}, {y}): {err}"),
        }
    }

    pub fn clear(&mut self) {
        self.sandbox.clear();
        self.sync();
    }

    /// Single tick, even while paused.
    pub fn tick(&mut self) {
        self.sandbox.tick();
        self.sync();
    }

    /// One displayed frame's worth of ticks.
    pub fn frame(&mut self) {
        self.sandbox.advance();
        self.sync();
    }

    pub fn pause(&mut self) {
        self.sandbox.pause();
    }

    pub fn play(&mut self) {
        self.sandbox.play();
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.sandbox.is_playing()
    }

    pub fn set_ticks_per_frame(&mut self, ticks: u32) {
        self.sandbox.set_ticks_per_frame(ticks);
    }

    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    #[must_use]
    pub fn cells_len(&self) -> usize {
        self.bytes.len()
    }
}

impl Universe {
    /// Material bytes, row-major.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    fn sync(&mut self) {
        for (byte, &material) in self.bytes.iter_mut().zip(self.sandbox.grid().cells()) {
            *byte = material.into();
        }
    }
}
