use super::joint::JointTransform;
use super::metadata::{family_metadata, FamilyMetadata, NUM_SMPL_WEIGHTS, NUM_STAR_WEIGHTS};
use super::types::ModelFamily;
use nalgebra as na;
use ndarray as nd;
use poseblends_utils::numerical::{flatten_rotation, rotation_to_quaternion};

/// Combined scales with a magnitude below this are treated as exactly zero.
/// The joint's weights are zeroed and none of its matrix fields are read.
pub const SCALE_TOL: f32 = 1.0e-5;

/// One joint's corrective weights, sized by model family.
#[derive(Clone, Debug, PartialEq)]
pub enum WeightVector {
    /// Flattened rotation minus identity, row-major.
    Smpl([f32; NUM_SMPL_WEIGHTS]),
    /// Quaternion deviation from the identity rotation, (x, y, z, w - 1).
    Star([f32; NUM_STAR_WEIGHTS]),
}

impl WeightVector {
    pub fn zeros(family: ModelFamily) -> Self {
        match family {
            ModelFamily::Smpl => Self::Smpl([0.0; NUM_SMPL_WEIGHTS]),
            ModelFamily::Star => Self::Star([0.0; NUM_STAR_WEIGHTS]),
        }
    }

    pub fn family(&self) -> ModelFamily {
        match self {
            Self::Smpl(_) => ModelFamily::Smpl,
            Self::Star(_) => ModelFamily::Star,
        }
    }

    pub fn num_weights(&self) -> usize {
        self.as_slice().len()
    }

    pub fn as_slice(&self) -> &[f32] {
        match self {
            Self::Smpl(weights) => weights,
            Self::Star(weights) => weights,
        }
    }
}

/// Rotation source shared by both families: optionally transpose the local
/// matrix, then optionally subtract the identity. The toggles come from
/// `family_metadata` and are not user-configurable.
pub fn rotation_source(local: &na::Matrix4<f32>, metadata: &FamilyMetadata) -> na::Matrix4<f32> {
    let mut source = if metadata.transpose_rotation {
        local.transpose()
    } else {
        *local
    };
    if metadata.subtract_identity {
        source -= na::Matrix4::identity();
    }
    source
}

/// SMPL-family weights for one joint: the rotation block of the transposed
/// local matrix minus the identity, flattened row-major and scaled.
pub fn smpl_weights(local: &na::Matrix4<f32>, combined_scale: f32) -> [f32; NUM_SMPL_WEIGHTS] {
    let source = rotation_source(local, &family_metadata(ModelFamily::Smpl));
    let mut weights = flatten_rotation(&source);
    for weight in &mut weights {
        *weight *= combined_scale;
    }
    weights
}

/// STAR-family weights for one joint: the unit quaternion of the transposed
/// local rotation, scaled, with the scalar part shifted so a rest pose lands
/// on exactly zero.
pub fn star_weights(local: &na::Matrix4<f32>, combined_scale: f32) -> [f32; NUM_STAR_WEIGHTS] {
    let source = rotation_source(local, &family_metadata(ModelFamily::Star));
    let quat = rotation_to_quaternion(&source);
    [
        combined_scale * quat.i,
        combined_scale * quat.j,
        combined_scale * quat.k,
        combined_scale * (quat.w - 1.0),
    ]
}

/// Weights for a single joint: tolerance gate first, then local-space
/// resolution, then family dispatch. Returns `None` when the joint's parent
/// world matrix is singular.
pub fn joint_weights(
    joint: &JointTransform,
    combined_scale: f32,
    family: ModelFamily,
) -> Option<WeightVector> {
    if combined_scale.abs() < SCALE_TOL {
        return Some(WeightVector::zeros(family));
    }
    let local = joint.local_matrix()?;
    let weights = match family {
        ModelFamily::Smpl => WeightVector::Smpl(smpl_weights(&local, combined_scale)),
        ModelFamily::Star => WeightVector::Star(star_weights(&local, combined_scale)),
    };
    Some(weights)
}

/// Stacks per-joint weights into a `(num_joints, num_weights)` array, one
/// row per joint in batch order. An empty batch yields a 0x0 array.
///
/// # Panics
/// Panics if the vectors do not all belong to the same family.
pub fn batch_to_array(weights: &[WeightVector]) -> nd::Array2<f32> {
    if weights.is_empty() {
        return nd::Array2::zeros((0, 0));
    }
    let family = weights[0].family();
    let mut array = nd::Array2::zeros((weights.len(), weights[0].num_weights()));
    for (row, vector) in weights.iter().enumerate() {
        assert!(
            vector.family() == family,
            "cannot stack {} weights into a {} batch",
            vector.family(),
            family
        );
        for (col, value) in vector.as_slice().iter().enumerate() {
            array[(row, col)] = *value;
        }
    }
    array
}
