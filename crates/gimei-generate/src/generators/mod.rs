pub mod address;
pub mod name;

use crate::errors::GenerationError;
use crate::randomizer::Randomizer;

/// Picks one element of `values` with a single draw.
///
/// The index is `floor(rnd() * len)`. An empty slice fails with
/// [`GenerationError::EmptySelection`] naming `table`.
pub fn choice<'a, T, R>(
    randomizer: &R,
    table: &'static str,
    values: &'a [T],
) -> Result<&'a T, GenerationError>
where
    R: Randomizer + ?Sized,
{
    let idx = choice_index(values.len(), randomizer)
        .ok_or(GenerationError::EmptySelection { table })?;
    tracing::trace!(table, idx, len = values.len(), "selected entry");
    values
        .get(idx)
        .ok_or(GenerationError::EmptySelection { table })
}

/// Index `choice` would select from a sequence of `len` elements, or `None`
/// when `len` is zero. Consumes one draw only when `len` is non-zero.
pub fn choice_index<R>(len: usize, randomizer: &R) -> Option<usize>
where
    R: Randomizer + ?Sized,
{
    if len == 0 {
        return None;
    }
    Some(scale_draw(randomizer.rnd(), len))
}

/// Maps a draw onto `[0, len)`, clamping draws outside `[0, 1)`.
fn scale_draw(draw: f64, len: usize) -> usize {
    if draw.is_nan() || draw <= 0.0 {
        return 0;
    }
    if draw >= 1.0 {
        tracing::warn!(draw, "randomizer returned a draw outside [0, 1)");
        return len - 1;
    }
    let idx = (draw * len as f64).floor() as usize;
    idx.min(len - 1)
}
