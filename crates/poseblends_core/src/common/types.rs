use crate::error::{DriverError, Result};
use enum_map::Enum;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use strum_macros::Display;

/// Body-model family driven by a batch. The family fixes both the width of
/// each joint's weight vector and the math that derives it.
#[derive(Clone, Copy, Debug, Enum, FromPrimitive, PartialEq, Display)]
pub enum ModelFamily {
    Smpl = 0,
    Star,
}

impl ModelFamily {
    /// Converts a raw host value, as stored on an integer node attribute.
    pub fn from_raw(value: i16) -> Result<Self> {
        Self::from_i16(value).ok_or(DriverError::UnknownModelFamily(value))
    }
}

/// How one joint supplies its transform to the driver.
#[derive(Clone, Copy, Debug, Enum, FromPrimitive, PartialEq, Display)]
pub enum JointMatrixMode {
    /// The local matrix is used as supplied.
    Local = 0,
    /// The local matrix is derived from the world matrix and the inverse of
    /// the parent world matrix.
    World,
    /// Like `World`, but with a caller-supplied parent inverse. Cheaper when
    /// the host scene graph already exposes the inverse.
    WorldWithInverse,
}

impl JointMatrixMode {
    /// Converts a raw host value, as stored on an integer node attribute.
    pub fn from_raw(value: i16) -> Result<Self> {
        Self::from_i16(value).ok_or(DriverError::UnknownMatrixMode(value))
    }
}
