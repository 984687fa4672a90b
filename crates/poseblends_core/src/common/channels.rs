use super::metadata::family_metadata;
use super::types::ModelFamily;

/// Index of one weight inside a model's flat bank of corrective channels,
/// `num_weights * joint_index + element_index`.
///
/// # Panics
/// Panics if `element_index` is not a valid weight index for the family.
pub fn channel_index(family: ModelFamily, joint_index: usize, element_index: usize) -> usize {
    let num_weights = family_metadata(family).num_weights;
    assert!(
        element_index < num_weights,
        "element index {element_index} out of range for {family}, {num_weights} weights per joint"
    );
    num_weights * joint_index + element_index
}

/// Conventional name of a corrective channel on the blendshape node, zero
/// padded to three digits.
pub fn channel_name(family: ModelFamily, joint_index: usize, element_index: usize) -> String {
    format!("Pose{:03}", channel_index(family, joint_index, element_index))
}
