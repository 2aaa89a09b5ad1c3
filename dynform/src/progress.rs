//! Fill progress.

use dynform_types::{FieldSpec, FormValues};

/// Base percentage plus the weight of every filled-in field.
///
/// The result is not clamped to 100; a base and weights that add up to more
/// than that produce a larger number.
pub fn compute_progress(base: u32, fields: &[FieldSpec], values: &FormValues) -> u32 {
    fields
        .iter()
        .filter(|field| field.progress_on_fill() > 0 && values.is_filled(field.key()))
        .fold(base, |total, field| {
            total.saturating_add(field.progress_on_fill())
        })
}
