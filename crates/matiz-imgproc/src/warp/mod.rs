mod affine;

pub use affine::{
    get_rotation_matrix2d, get_translation_matrix2d, invert_affine_transform, warp_affine,
};
