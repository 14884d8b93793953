use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Shape of a tensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// The extent of each dimension.
    pub dims: Vec<usize>,
}

impl Shape {
    /// Constructs a new `Shape`.
    pub fn new<const D: usize>(dims: [usize; D]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }

    /// Returns the number of dimensions.
    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements of a tensor having this shape.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }
}

impl<const D: usize> From<[usize; D]> for Shape {
    fn from(dims: [usize; D]) -> Self {
        Shape::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape { dims: dims.into() }
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape { dims }
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn should_count_elements() {
        let shape = Shape::new([2, 3, 4]);
        assert_eq!(shape.num_elements(), 24);
        assert_eq!(shape.num_dims(), 3);
    }

    #[test]
    fn should_convert_from_vec() {
        let shape = Shape::from(vec![8, 8]);
        assert_eq!(shape, Shape::new([8, 8]));
    }
}
