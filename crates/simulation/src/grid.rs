//! Fixed-size 2D container. Knows nothing about materials or movement.

/// Coordinate plus value, the unit of bulk transfer between grids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point<T> {
    pub x: i32,
    pub y: i32,
    pub value: T,
}

impl<T> Point<T> {
    #[must_use]
    pub fn new(x: i32, y: i32, value: T) -> Self {
        Self { x, y, value }
    }
}

/// Row-major `height × width` grid. Out-of-bounds reads return `None`,
/// writes are no-ops.
#[derive(PartialEq, Eq, Hash, Debug)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Every slot starts as a clone of `fill`.
    #[must_use]
    pub fn new(height: usize, width: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Bulk extraction of every cell as a `Point`, row-major.
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.iter().map(|(x, y, value)| Point::new(x, y, value.clone()))
    }

    /// Brush edit: writes `value` into the `(2r+1)²` square centered on
    /// `(cx, cy)`, clipped to the grid.
    pub fn set_region(&mut self, cx: i32, cy: i32, radius: u32, value: &T) {
        let r = radius.min(i32::MAX as u32 / 2) as i32;
        let x0 = cx.saturating_sub(r).max(0);
        let y0 = cy.saturating_sub(r).max(0);
        let x1 = cx.saturating_add(r).min(self.width as i32 - 1);
        let y1 = cy.saturating_add(r).min(self.height as i32 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x, y, value.clone());
            }
        }
    }
}

impl<T> Grid<T> {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major backing storage.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Flat index of `(x, y)`, if in range.
    #[must_use]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = value;
        }
    }

    /// Bulk application. Points outside the grid are dropped.
    pub fn set_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point<T>>,
    {
        for point in points {
            self.set(point.x, point.y, point.value);
        }
    }

    /// `(x, y, &value)` for every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| ((i % width) as i32, (i / width) as i32, value))
    }

    /// New grid of the same shape with every cell transformed by `f`.
    #[must_use]
    pub fn map<R, F>(&self, mut f: F) -> Grid<R>
    where
        F: FnMut(&T, i32, i32) -> R,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.iter().map(|(x, y, value)| f(value, x, y)).collect(),
        }
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, i32, i32),
    {
        for (x, y, value) in self.iter() {
            f(value, x, y);
        }
    }

    /// Number of cells matching `pred`.
    pub fn count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.cells.iter().filter(|value| pred(value)).count()
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Reuses `self`'s allocation when the sizes match.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.cells.clone_from(&source.cells);
    }
}
