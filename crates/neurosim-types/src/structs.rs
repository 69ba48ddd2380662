//! Core value structs shared across the workspace.

use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, Vec2};

/// Shape of a feed-forward brain network.
///
/// Describes how many inputs a brain reads, how many outputs it produces,
/// and the width of each hidden layer in order. The inference engine builds
/// its network from this descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrainShape {
    /// Number of input neurons.
    pub input_count: usize,
    /// Number of output neurons.
    pub output_count: usize,
    /// Hidden layer widths, input side first.
    pub hidden_layers: Vec<usize>,
}

impl BrainShape {
    /// Create a shape descriptor.
    pub fn new(input_count: usize, output_count: usize, hidden_layers: &[usize]) -> Self {
        Self {
            input_count,
            output_count,
            hidden_layers: hidden_layers.to_vec(),
        }
    }

    /// All layer widths from input to output.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers.len().saturating_add(2));
        sizes.push(self.input_count);
        sizes.extend_from_slice(&self.hidden_layers);
        sizes.push(self.output_count);
        sizes
    }

    /// Number of trainable parameters (weights plus biases) in a fully
    /// connected network of this shape.
    ///
    /// Returns `None` on overflow.
    pub fn parameter_count(&self) -> Option<usize> {
        let sizes = self.layer_sizes();
        sizes.windows(2).try_fold(0_usize, |total, pair| {
            let [from, to] = pair else {
                return Some(total);
            };
            let weights = from.checked_mul(*to)?;
            total.checked_add(weights)?.checked_add(*to)
        })
    }
}

/// Position of a simulated body.
///
/// A boid's transform is what flocking neighbours observe about each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform<C = Vec2> {
    /// Current position in the plane.
    pub position: C,
}

impl<C: Coordinate> Transform<C> {
    /// Create a transform at `position`.
    pub const fn new(position: C) -> Self {
        Self { position }
    }
}
