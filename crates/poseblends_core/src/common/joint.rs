use super::types::JointMatrixMode;
use nalgebra as na;

/// Per-joint input to one driver computation.
///
/// Every matrix field defaults to the identity, so a joint only needs the
/// fields its `matrix_mode` actually reads. The matrices follow the
/// row-vector convention of the host DCC, where the rows of the rotation
/// block are the images of the basis vectors.
#[derive(Clone, Debug)]
pub struct JointTransform {
    /// Per-joint envelope in [0, 1]. Attenuates this joint's weights on top
    /// of the global scale and envelope.
    pub envelope: f32,
    /// Which matrix fields feed the local-space resolution.
    pub matrix_mode: JointMatrixMode,
    /// Local-space transform, used as supplied in `Local` mode.
    pub local: na::Matrix4<f32>,
    /// World-space transform, read in both world modes.
    pub world: na::Matrix4<f32>,
    /// Parent world-space transform, inverted internally in `World` mode.
    pub world_parent: na::Matrix4<f32>,
    /// Caller-supplied parent inverse, trusted verbatim in
    /// `WorldWithInverse` mode.
    pub world_parent_inverse: na::Matrix4<f32>,
}

impl Default for JointTransform {
    fn default() -> Self {
        Self {
            envelope: 1.0,
            matrix_mode: JointMatrixMode::Local,
            local: na::Matrix4::identity(),
            world: na::Matrix4::identity(),
            world_parent: na::Matrix4::identity(),
            world_parent_inverse: na::Matrix4::identity(),
        }
    }
}

impl JointTransform {
    pub fn new_local(local: na::Matrix4<f32>) -> Self {
        Self {
            matrix_mode: JointMatrixMode::Local,
            local,
            ..Self::default()
        }
    }

    pub fn new_world(world: na::Matrix4<f32>, world_parent: na::Matrix4<f32>) -> Self {
        Self {
            matrix_mode: JointMatrixMode::World,
            world,
            world_parent,
            ..Self::default()
        }
    }

    pub fn new_world_with_inverse(
        world: na::Matrix4<f32>,
        world_parent_inverse: na::Matrix4<f32>,
    ) -> Self {
        Self {
            matrix_mode: JointMatrixMode::WorldWithInverse,
            world,
            world_parent_inverse,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_envelope(mut self, envelope: f32) -> Self {
        self.envelope = envelope;
        self
    }

    /// Resolves the local-space matrix this joint contributes, according to
    /// its `matrix_mode`. Returns `None` when the parent world matrix cannot
    /// be inverted.
    pub fn local_matrix(&self) -> Option<na::Matrix4<f32>> {
        match self.matrix_mode {
            JointMatrixMode::Local => Some(self.local),
            JointMatrixMode::World => {
                let world_parent_inverse = self.world_parent.try_inverse()?;
                Some(self.world * world_parent_inverse)
            }
            JointMatrixMode::WorldWithInverse => Some(self.world * self.world_parent_inverse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn translation(x: f32, y: f32, z: f32) -> na::Matrix4<f32> {
        na::Matrix4::new_translation(&na::Vector3::new(x, y, z))
    }

    #[test]
    fn test_local_mode_passes_matrix_through() {
        let local = translation(1.0, 2.0, 3.0);
        let joint = JointTransform::new_local(local);
        assert_eq!(joint.local_matrix().unwrap(), local);
    }

    #[test]
    fn test_world_mode_recovers_local() {
        let local = translation(0.0, 1.0, 0.0);
        let parent = translation(5.0, 0.0, 0.0);
        //row-vector convention composes child-first
        let world = local * parent;
        let joint = JointTransform::new_world(world, parent);
        let resolved = joint.local_matrix().unwrap();
        assert_relative_eq!(resolved, local, epsilon = 1e-6);
    }

    #[test]
    fn test_world_modes_agree() {
        let parent = translation(-2.0, 4.0, 1.0);
        let world = translation(3.0, 3.0, 3.0);
        let with_inverse =
            JointTransform::new_world_with_inverse(world, parent.try_inverse().unwrap());
        let without = JointTransform::new_world(world, parent);
        assert_relative_eq!(
            with_inverse.local_matrix().unwrap(),
            without.local_matrix().unwrap(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_singular_parent_has_no_local_matrix() {
        let joint = JointTransform::new_world(na::Matrix4::identity(), na::Matrix4::zeros());
        assert!(joint.local_matrix().is_none());
    }

    #[test]
    fn test_defaults_are_identity_at_full_envelope() {
        let joint = JointTransform::default();
        assert_eq!(joint.envelope, 1.0);
        assert_eq!(joint.local_matrix().unwrap(), na::Matrix4::identity());
    }
}
