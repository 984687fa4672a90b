//! Drives the pose-corrective blendshapes of SMPL-family and STAR-family
//! body models from joint transforms.
//!
//! Posed body models correct their skinning with per-joint blendshapes whose
//! weights are a fixed function of each joint's local rotation. Given a batch
//! of joint transforms, [`PoseBlendsDriver`] derives those weights: for the
//! SMPL family the flattened rotation matrix minus the identity, for the STAR
//! family the sign-canonical unit quaternion shifted to vanish at rest.
//!
//! ```
//! use nalgebra as na;
//! use poseblends_core::{DriverConfig, JointTransform, ModelFamily, PoseBlendsDriver};
//!
//! let driver = PoseBlendsDriver::new(DriverConfig {
//!     model_family: ModelFamily::Star,
//!     ..DriverConfig::default()
//! });
//! let joints = vec![JointTransform::new_local(na::Matrix4::identity())];
//! let weights = driver.compute(&joints)?;
//! assert_eq!(weights[0].num_weights(), 4);
//! # Ok::<(), poseblends_core::DriverError>(())
//! ```

pub mod common;
pub mod error;

pub use common::channels;
pub use common::driver::{DriverConfig, PoseBlendsDriver};
pub use common::joint::JointTransform;
pub use common::metadata::{
    family_metadata, FamilyMetadata, NUM_SMPL_WEIGHTS, NUM_STAR_WEIGHTS,
};
pub use common::types::{JointMatrixMode, ModelFamily};
pub use common::weights::{
    batch_to_array, joint_weights, smpl_weights, star_weights, WeightVector, SCALE_TOL,
};
pub use error::{DriverError, Result};
