//! The closed set of per-cell states.

use std::fmt;

/// Discriminant values are the bytes handed to the renderer; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub enum Material {
    #[default]
    Empty = 0,
    /// Sand-like: falls, settles diagonally, sinks through liquid.
    Granular = 1,
    /// Water-like: falls, settles diagonally, spreads sideways.
    Liquid = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MaterialError {
    #[error("unknown material id {0}")]
    Unknown(u8),
}

impl Material {
    pub const ALL: [Self; 3] = [Self::Empty, Self::Granular, Self::Liquid];

    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    #[must_use]
    pub fn granular() -> Self {
        Self::Granular
    }

    #[must_use]
    pub fn liquid() -> Self {
        Self::Liquid
    }

    /// Passable: the only state that can receive an incoming particle.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    #[must_use]
    pub fn is_granular(self) -> bool {
        self == Self::Granular
    }

    #[must_use]
    pub fn is_liquid(self) -> bool {
        self == Self::Liquid
    }
}

impl TryFrom<u8> for Material {
    type Error = MaterialError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Granular),
            2 => Ok(Self::Liquid),
            other => Err(MaterialError::Unknown(other)),
        }
    }
}

impl From<Material> for u8 {
    fn from(material: Material) -> Self {
        material as u8
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Granular => write!(f, "Granular"),
            Self::Liquid => write!(f, "Liquid"),
        }
    }
}
