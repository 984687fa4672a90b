use nalgebra as na;

/// Flattens the rotational 3x3 block of a homogeneous transform to 9 scalars,
/// row-major.
pub fn flatten_rotation(mat: &na::Matrix4<f32>) -> [f32; 9] {
    let mut flat = [0.0; 9];
    for row in 0..3 {
        for col in 0..3 {
            flat[row * 3 + col] = mat[(row, col)];
        }
    }
    flat
}

/// Converts the rotational block of a homogeneous transform to a unit
/// quaternion with a non-negative scalar part.
///
/// Uses the trace method from Shoemake's quaternion course notes rather than
/// the half-angle formula, which loses precision for rotations near 180
/// degrees. The sign convention makes the output unambiguous: a rotation and
/// its quaternion correspond one to one, so downstream weights cannot jump
/// between the two equivalent encodings from frame to frame.
pub fn rotation_to_quaternion(mat: &na::Matrix4<f32>) -> na::Quaternion<f32> {
    //x, y, z, w
    let mut q = [0.0f32; 4];

    let trace = mat[(0, 0)] + mat[(1, 1)] + mat[(2, 2)];
    if trace > 0.0 {
        let mut s = (trace + 1.0).sqrt();
        q[3] = 0.5 * s;
        s = 0.5 / s;
        q[0] = (mat[(2, 1)] - mat[(1, 2)]) * s;
        q[1] = (mat[(0, 2)] - mat[(2, 0)]) * s;
        q[2] = (mat[(1, 0)] - mat[(0, 1)]) * s;
    } else {
        //largest diagonal element picks the best-conditioned axis
        let mut i = 0;
        if mat[(1, 1)] > mat[(0, 0)] {
            i = 1;
        }
        if mat[(2, 2)] > mat[(i, i)] {
            i = 2;
        }
        let j = (i + 1) % 3;
        let k = (j + 1) % 3;

        let mut s = (mat[(i, i)] - mat[(j, j)] - mat[(k, k)] + 1.0).sqrt();
        q[i] = 0.5 * s;
        s = 0.5 / s;
        q[3] = (mat[(k, j)] - mat[(j, k)]) * s;
        q[j] = (mat[(j, i)] + mat[(i, j)]) * s;
        q[k] = (mat[(k, i)] + mat[(i, k)]) * s;
    }

    let q = na::Quaternion::new(q[3], q[0], q[1], q[2]).normalize();
    if q.w < 0.0 {
        -q
    } else {
        q
    }
}
