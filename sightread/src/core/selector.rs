//! Exercise selection over a [`Catalog`].
//!
//! Every selector returns [`FALLBACK_EXERCISE`] when the catalog is empty.
//! Navigation from a number that is not in the catalog restarts at the first
//! exercise instead of failing.

use chrono::{Local, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::types::{Catalog, ExerciseNumber, FALLBACK_EXERCISE};

/// Day zero of the daily rotation.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Whole calendar days from `epoch` to `date` (negative before the epoch).
pub fn day_index(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// Exercise of the day for a given calendar date.
pub fn for_date(catalog: &Catalog, date: NaiveDate) -> ExerciseNumber {
    let numbers = catalog.as_slice();
    if numbers.is_empty() {
        return FALLBACK_EXERCISE;
    }
    let index = day_index(date, epoch()).rem_euclid(numbers.len() as i64);
    numbers[index as usize]
}

/// Exercise of the day for the local current date.
pub fn today(catalog: &Catalog) -> ExerciseNumber {
    for_date(catalog, Local::now().date_naive())
}

/// Uniform draw from the catalog using `rng`.
pub fn random_with<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> ExerciseNumber {
    catalog
        .as_slice()
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_EXERCISE)
}

/// Uniform draw from the catalog using the thread-local RNG.
pub fn random(catalog: &Catalog) -> ExerciseNumber {
    random_with(catalog, &mut rand::thread_rng())
}

/// Where navigation restarts: the lowest exercise number.
pub fn first(catalog: &Catalog) -> ExerciseNumber {
    catalog.first().unwrap_or(FALLBACK_EXERCISE)
}

/// Exercise after `current`, wrapping from the last to the first.
pub fn next(catalog: &Catalog, current: ExerciseNumber) -> ExerciseNumber {
    let numbers = catalog.as_slice();
    match catalog.position(current) {
        Some(index) => numbers[(index + 1) % numbers.len()],
        None => first(catalog),
    }
}

/// Exercise before `current`, wrapping from the first to the last.
pub fn previous(catalog: &Catalog, current: ExerciseNumber) -> ExerciseNumber {
    let numbers = catalog.as_slice();
    match catalog.position(current) {
        Some(0) => numbers[numbers.len() - 1],
        Some(index) => numbers[index - 1],
        None => first(catalog),
    }
}

pub fn is_available(catalog: &Catalog, number: ExerciseNumber) -> bool {
    catalog.contains(number)
}
