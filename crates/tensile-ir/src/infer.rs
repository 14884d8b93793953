//! Shape inference for lazy IR nodes.
//!
//! Node constructors never call into this module; nodes register their
//! attributes and defer here on the first shape access, so building a graph
//! does not force upstream shape resolution. Attribute validation against
//! operand shapes lives here as well: a node with inconsistent attributes
//! fails on first shape demand and never yields a partial shape.

use tensile_std::Shape;

use crate::IrError;

/// Infers the output shape of a slice.
///
/// Requires one base index and one size per operand dimension, with
/// `base_indices[i] + sizes[i]` within the operand extent. The output rank
/// equals the operand rank and the output extents equal `sizes`.
pub fn slice(input: &Shape, base_indices: &[usize], sizes: &[usize]) -> Result<Shape, IrError> {
    let rank = input.num_dims();

    if base_indices.len() != rank || sizes.len() != rank {
        return Err(IrError::RankMismatch {
            rank,
            base_indices: base_indices.len(),
            sizes: sizes.len(),
        });
    }

    for (dim, ((&base, &size), &extent)) in base_indices
        .iter()
        .zip(sizes)
        .zip(&input.dims)
        .enumerate()
    {
        // `base + size` can overflow for degenerate attributes; that is out
        // of bounds, not a panic.
        let fits = base.checked_add(size).is_some_and(|end| end <= extent);
        if !fits {
            return Err(IrError::SliceOutOfBounds {
                dim,
                base,
                size,
                extent,
            });
        }
    }

    Ok(Shape::from(sizes))
}
