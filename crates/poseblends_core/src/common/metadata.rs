use super::types::ModelFamily;

/// Weights per joint for the SMPL family, the flattened 3x3 rotation block.
pub const NUM_SMPL_WEIGHTS: usize = 9;
/// Weights per joint for the STAR family, the quaternion components.
pub const NUM_STAR_WEIGHTS: usize = 4;

/// Fixed per-family settings of the weight derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FamilyMetadata {
    pub num_weights: usize,
    /// Transpose the local matrix before reading its rotation block. Maps a
    /// row-vector host convention onto the column-vector math here.
    pub transpose_rotation: bool,
    /// Subtract the identity from the rotation source so a rest pose yields
    /// zero weights.
    pub subtract_identity: bool,
}

/// Per-family derivation table. The toggles are calibration data matched to
/// the shipped model assets; do not rederive them from first principles.
pub fn family_metadata(family: ModelFamily) -> FamilyMetadata {
    match family {
        ModelFamily::Smpl => FamilyMetadata {
            num_weights: NUM_SMPL_WEIGHTS,
            transpose_rotation: true,
            subtract_identity: true,
        },
        ModelFamily::Star => FamilyMetadata {
            num_weights: NUM_STAR_WEIGHTS,
            transpose_rotation: true,
            subtract_identity: false,
        },
    }
}
