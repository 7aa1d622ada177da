//! Granular material: falls, settles diagonally, sinks through liquid.

use super::{fall, Fall};
use crate::api::StepApi;
use crate::material::Material;

pub fn update_granular(api: &mut StepApi) {
    if fall(api) == Fall::Blocked(Material::Liquid) {
        // Denser than liquid: trade places, pushing the liquid up.
        api.swap(0, 1);
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::step;
    use crate::grid::Grid;
    use crate::material::Material;

    #[test]
    fn sinks_through_liquid() {
        let mut grid = Grid::new(2, 1, Material::Empty);
        grid.set(0, 0, Material::Granular);
        grid.set(0, 1, Material::Liquid);
        let next = step(&grid);
        assert_eq!(next.get(0, 0), Some(&Material::Liquid));
        assert_eq!(next.get(0, 1), Some(&Material::Granular));
    }

    #[test]
    fn prefers_empty_diagonal_over_sinking() {
        let mut grid = Grid::new(2, 2, Material::Empty);
        grid.set(1, 0, Material::Granular);
        grid.set(1, 1, Material::Liquid);
        let next = step(&grid);
        assert_eq!(next.get(0, 1), Some(&Material::Granular));
        assert_eq!(next.get(1, 1), Some(&Material::Liquid));
        assert_eq!(next.get(1, 0), Some(&Material::Empty));
    }

    #[test]
    fn rests_on_granular() {
        let mut grid = Grid::new(2, 3, Material::Granular);
        grid.set(1, 0, Material::Empty);
        grid.set(0, 0, Material::Empty);
        assert_eq!(step(&grid), grid);
    }
}
