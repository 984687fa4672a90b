use super::joint::JointTransform;
use super::types::ModelFamily;
use super::weights::{joint_weights, WeightVector};
use crate::error::{DriverError, Result};
use log::{debug, warn};
use rayon::prelude::*;

/// Batch-wide configuration, immutable for the duration of one computation.
#[derive(Clone, Copy, Debug)]
pub struct DriverConfig {
    /// Global scale in [0, 1].
    pub scale: f32,
    /// Global envelope in [0, 1].
    pub envelope: f32,
    /// Model family shared by every joint of the batch.
    pub model_family: ModelFamily,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            envelope: 1.0,
            model_family: ModelFamily::Smpl,
        }
    }
}

/// Maps per-joint transforms to the pose-corrective blendshape weights of a
/// body model.
///
/// The driver is a pure function of its config and the joint batch: it holds
/// no per-frame state, mutates nothing, and can be shared across threads.
/// Repeated calls over identical inputs return bit-identical weights.
#[derive(Clone, Debug, Default)]
pub struct PoseBlendsDriver {
    pub config: DriverConfig,
}

impl PoseBlendsDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Computes one weight vector per joint, in input order.
    ///
    /// Joints are independent, so the batch is evaluated as a parallel map
    /// and collected back in order. The error names the offending joint
    /// index; joints after it are still well-defined but discarded.
    pub fn compute(&self, joints: &[JointTransform]) -> Result<Vec<WeightVector>> {
        let global_scale = self.config.scale * self.config.envelope;
        if !(0.0..=1.0).contains(&global_scale) {
            warn!(
                "global scale {} is outside the [0, 1] range, scale is {} and envelope is {}",
                global_scale, self.config.scale, self.config.envelope
            );
        }
        debug!(
            "computing {} weights for {} joints",
            self.config.model_family,
            joints.len()
        );

        joints
            .par_iter()
            .enumerate()
            .map(|(index, joint)| {
                let combined_scale = global_scale * joint.envelope;
                joint_weights(joint, combined_scale, self.config.model_family)
                    .ok_or(DriverError::SingularParentMatrix { joint: index })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::metadata::NUM_SMPL_WEIGHTS;
    use nalgebra as na;

    fn star_driver() -> PoseBlendsDriver {
        PoseBlendsDriver::new(DriverConfig {
            model_family: ModelFamily::Star,
            ..DriverConfig::default()
        })
    }

    #[test]
    fn test_empty_batch() {
        let weights = PoseBlendsDriver::default().compute(&[]).unwrap();
        assert!(weights.is_empty());
    }

    #[test]
    fn test_default_config_is_full_strength_smpl() {
        let config = DriverConfig::default();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.envelope, 1.0);
        assert_eq!(config.model_family, ModelFamily::Smpl);
    }

    #[test]
    fn test_identity_joints_rest_at_zero() {
        let joints = vec![JointTransform::default(); 3];
        let weights = star_driver().compute(&joints).unwrap();
        assert_eq!(weights.len(), 3);
        for vector in weights {
            assert_eq!(vector, WeightVector::zeros(ModelFamily::Star));
        }
    }

    #[test]
    fn test_global_and_joint_scales_multiply() {
        #[rustfmt::skip]
        let local = na::Matrix4::new(
            0.0, 1.0, 0.0, 0.0,
            -1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        let joints = vec![JointTransform::new_local(local).with_envelope(0.5)];
        let reference = PoseBlendsDriver::default().compute(&joints).unwrap();

        let halved = PoseBlendsDriver::new(DriverConfig {
            scale: 0.5,
            envelope: 0.5,
            ..DriverConfig::default()
        });
        let attenuated = halved.compute(&joints).unwrap();
        for (attenuated, reference) in attenuated[0]
            .as_slice()
            .iter()
            .zip(reference[0].as_slice())
        {
            assert_eq!(*attenuated, 0.25 * reference);
        }
    }

    #[test]
    fn test_singular_parent_reports_joint_index() {
        let singular = JointTransform::new_world(na::Matrix4::identity(), na::Matrix4::zeros());
        let joints = vec![
            JointTransform::default(),
            singular,
            JointTransform::default(),
        ];
        let err = PoseBlendsDriver::default().compute(&joints).unwrap_err();
        assert_eq!(err, DriverError::SingularParentMatrix { joint: 1 });
    }

    #[test]
    fn test_repeated_runs_are_bit_identical() {
        let joints: Vec<JointTransform> = (0..16)
            .map(|index| {
                let angle = 0.3 * index as f32;
                let rotation = na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), angle)
                    .to_rotation_matrix()
                    .to_homogeneous();
                JointTransform::new_local(rotation.transpose()).with_envelope(0.9)
            })
            .collect();
        let driver = PoseBlendsDriver::default();
        let first = driver.compute(&joints).unwrap();
        let second = driver.compute(&joints).unwrap();
        assert_eq!(first, second);
        assert!(first
            .iter()
            .all(|vector| vector.num_weights() == NUM_SMPL_WEIGHTS));
    }
}
