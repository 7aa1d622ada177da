//! Liquid material: falls, settles diagonally, spreads sideways.
//!
//! Sideways spread only happens when exactly one side is open. A liquid
//! cell with empty space on both sides holds still for the tick.

use super::{fall, Fall};
use crate::api::StepApi;
use crate::material::Material;

pub fn update_liquid(api: &mut StepApi) {
    if !matches!(fall(api), Fall::Blocked(_)) {
        return;
    }

    let left_open = api.get(-1, 0).is_some_and(Material::is_empty);
    let right_open = api.get(1, 0).is_some_and(Material::is_empty);
    if left_open && right_open {
        return;
    }

    if left_open {
        api.swap(-1, 0);
    } else if right_open {
        api.swap(1, 0);
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::step;
    use crate::grid::Grid;
    use crate::material::Material;

    /// 3×3 with a granular floor and liquid in the middle of row 1.
    fn on_floor() -> Grid<Material> {
        let mut grid = Grid::new(3, 3, Material::Empty);
        for x in 0..3 {
            grid.set(x, 2, Material::Granular);
        }
        grid.set(1, 1, Material::Liquid);
        grid
    }

    #[test]
    fn holds_still_with_both_sides_open() {
        let grid = on_floor();
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn spreads_left_when_only_left_is_open() {
        let mut grid = on_floor();
        grid.set(2, 1, Material::Granular);
        let next = step(&grid);
        assert_eq!(next.get(0, 1), Some(&Material::Liquid));
        assert_eq!(next.get(1, 1), Some(&Material::Empty));
    }

    #[test]
    fn spreads_right_when_only_right_is_open() {
        let mut grid = on_floor();
        grid.set(0, 1, Material::Granular);
        let next = step(&grid);
        assert_eq!(next.get(2, 1), Some(&Material::Liquid));
        assert_eq!(next.get(1, 1), Some(&Material::Empty));
    }

    #[test]
    fn grid_edge_counts_as_closed() {
        let mut grid = Grid::new(2, 2, Material::Granular);
        grid.set(0, 0, Material::Liquid);
        grid.set(1, 0, Material::Empty);
        let next = step(&grid);
        assert_eq!(next.get(0, 0), Some(&Material::Empty));
        assert_eq!(next.get(1, 0), Some(&Material::Liquid));
    }

    #[test]
    fn does_not_spread_along_bottom_row() {
        let mut grid = Grid::new(1, 3, Material::Empty);
        grid.set(0, 0, Material::Liquid);
        grid.set(1, 0, Material::Liquid);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn displaced_liquid_does_not_move_again() {
        // The sink claims the liquid's cell before the liquid's own turn,
        // so it cannot also fall into the open cell below.
        let mut grid = Grid::new(3, 1, Material::Empty);
        grid.set(0, 0, Material::Granular);
        grid.set(0, 1, Material::Liquid);
        let next = step(&grid);
        assert_eq!(
            next.cells(),
            &[Material::Liquid, Material::Granular, Material::Empty]
        );
    }

    #[test]
    fn taken_side_cell_keeps_liquid_in_place() {
        // (0, 0) falls into (0, 1) first; the liquid's only open side is
        // gone, so it stays.
        let mut grid = Grid::new(3, 3, Material::Granular);
        grid.set(1, 0, Material::Empty);
        grid.set(2, 0, Material::Empty);
        grid.set(0, 1, Material::Empty);
        grid.set(1, 1, Material::Liquid);
        let next = step(&grid);
        assert_eq!(next.get(0, 1), Some(&Material::Granular));
        assert_eq!(next.get(1, 1), Some(&Material::Liquid));
        assert_eq!(next.get(0, 0), Some(&Material::Empty));
    }
}
