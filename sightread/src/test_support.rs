//! Test-only helpers for building exercise directories on disk.

use std::fs;
use std::path::Path;

use crate::core::types::{ExerciseNumber, image_file_name};

/// Create an empty `exercise_<N>.mxl` file in `dir` for each number.
pub fn write_notation_files(dir: &Path, numbers: &[ExerciseNumber]) {
    fs::create_dir_all(dir).expect("create notation dir");
    for n in numbers {
        fs::write(dir.join(format!("exercise_{n}.mxl")), b"").expect("write notation file");
    }
}

/// Create an empty `exercise_<N>.png` file in `dir` for each number.
pub fn write_image_files(dir: &Path, numbers: &[ExerciseNumber]) {
    fs::create_dir_all(dir).expect("create image dir");
    for &n in numbers {
        fs::write(dir.join(image_file_name(n)), b"").expect("write image file");
    }
}
