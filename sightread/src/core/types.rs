//! Shared deterministic types for exercise selection.
//!
//! These types carry no I/O. A [`Catalog`] is built once (usually by
//! [`crate::io::catalog::load_catalog`]) and only read afterwards.

use chrono::NaiveDate;
use serde::Serialize;

/// Number identifying one sight-reading exercise.
pub type ExerciseNumber = u32;

/// Number returned by every selector when the catalog is empty.
pub const FALLBACK_EXERCISE: ExerciseNumber = 1;

/// Sorted, duplicate-free list of exercise numbers present on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    numbers: Vec<ExerciseNumber>,
}

impl Catalog {
    /// Build a catalog from arbitrary numbers; sorts ascending and drops duplicates.
    pub fn new(numbers: impl IntoIterator<Item = ExerciseNumber>) -> Self {
        let mut numbers: Vec<ExerciseNumber> = numbers.into_iter().collect();
        numbers.sort_unstable();
        numbers.dedup();
        Self { numbers }
    }

    pub fn as_slice(&self) -> &[ExerciseNumber] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn first(&self) -> Option<ExerciseNumber> {
        self.numbers.first().copied()
    }

    /// Position of `number` in the catalog, if present.
    pub fn position(&self, number: ExerciseNumber) -> Option<usize> {
        self.numbers.binary_search(&number).ok()
    }

    pub fn contains(&self, number: ExerciseNumber) -> bool {
        self.position(number).is_some()
    }

    /// Smallest and largest exercise number, or `None` when empty.
    pub fn range(&self) -> Option<(ExerciseNumber, ExerciseNumber)> {
        match (self.numbers.first(), self.numbers.last()) {
            (Some(min), Some(max)) => Some((*min, *max)),
            _ => None,
        }
    }
}

impl FromIterator<ExerciseNumber> for Catalog {
    fn from_iter<I: IntoIterator<Item = ExerciseNumber>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Metadata handed to the client for rendering one exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub piece_number: ExerciseNumber,
    pub image_url: String,
    pub title: String,
    pub date: String,
    pub has_scoring: bool,
}

impl Piece {
    /// Describe `number` as served on `date`.
    ///
    /// `has_scoring` reflects whether the notation file for `number` is
    /// actually in the catalog; it is only false for the empty-catalog fallback.
    pub fn describe(catalog: &Catalog, number: ExerciseNumber, date: NaiveDate) -> Self {
        Self {
            piece_number: number,
            image_url: image_url(number),
            title: format!("Exercise No. {number}"),
            date: date.format("%Y-%m-%d").to_string(),
            has_scoring: catalog.contains(number),
        }
    }
}

/// Public URL of the rendered score image for `number`.
pub fn image_url(number: ExerciseNumber) -> String {
    format!("/images/{}", image_file_name(number))
}

/// File name of the rendered score image for `number`.
pub fn image_file_name(number: ExerciseNumber) -> String {
    format!("exercise_{number}.png")
}
