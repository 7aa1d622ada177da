//! Per-material movement rules dispatched from the tick loop.

mod granular;
mod liquid;

use crate::api::StepApi;
use crate::material::Material;

/// Outcome of the shared gravity phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Fall {
    /// Moved down or diagonally down.
    Moved,
    /// The chosen cell was already taken this tick; the particle stays.
    Stuck,
    /// Bottom row: nothing below, the particle stays put.
    Grounded,
    /// Something sits directly below and both diagonals are occupied.
    Blocked(Material),
}

/// Dispatch to the rule for `material`.
///
/// Empty is a no-op and should be skipped before calling this.
pub fn update_cell(material: Material, api: &mut StepApi) {
    match material {
        Material::Granular => granular::update_granular(api),
        Material::Liquid => liquid::update_liquid(api),
        Material::Empty => {}
    }
}

/// Gravity shared by every falling material: straight down, then
/// down-left, then down-right.
///
/// The target is chosen from the before-state alone. If that one cell was
/// already claimed this tick the particle stays; lower-priority moves are
/// not tried.
pub(crate) fn fall(api: &mut StepApi) -> Fall {
    let Some(below) = api.get(0, 1) else {
        return Fall::Grounded;
    };
    if below.is_empty() {
        return settle(api, 0);
    }
    for dx in [-1, 1] {
        if api.get(dx, 1).is_some_and(Material::is_empty) {
            return settle(api, dx);
        }
    }
    Fall::Blocked(below)
}

fn settle(api: &mut StepApi, dx: i32) -> Fall {
    if api.swap(dx, 1) {
        Fall::Moved
    } else {
        Fall::Stuck
    }
}
