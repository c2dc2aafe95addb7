//! A dense layer: column-major weight store plus biases.

use crate::error::DecodeError;
use crate::network::LayerSpec;
use crate::reader::Reader;

/// One dense layer of the network.
///
/// The weight store is column-major with respect to the output index:
/// the value at logical position `(input, output)` sits at flat offset
/// `input * num_outputs + output`. Each input's outputs are contiguous;
/// a logical row is not. All access goes through the indexed accessors
/// so the layout cannot be mis-addressed by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    num_inputs: usize,
    num_outputs: usize,
    weight: Vec<i32>,
    bias: Vec<i32>,
}

impl Layer {
    /// Read one layer from the cursor: `num_inputs * num_outputs`
    /// weights at the spec's weight width, then `num_outputs` biases at
    /// its bias width.
    pub(crate) fn read(reader: &mut Reader<'_>, spec: LayerSpec) -> Result<Layer, DecodeError> {
        let weight = reader.read_int_array(spec.num_inputs * spec.num_outputs, spec.weight_width)?;
        let bias = reader.read_int_array(spec.num_outputs, spec.bias_width)?;
        Ok(Layer {
            num_inputs: spec.num_inputs,
            num_outputs: spec.num_outputs,
            weight,
            bias,
        })
    }

    /// Number of input features this layer consumes.
    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Number of output neurons this layer produces.
    #[inline]
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Flat offset of `(input, output)` in the column-major store.
    #[inline]
    fn flat_index(&self, input: usize, output: usize) -> usize {
        input * self.num_outputs + output
    }

    /// Weight at `(input, output)`, or `None` outside the declared shape.
    #[inline]
    pub fn weight(&self, input: usize, output: usize) -> Option<i32> {
        if input < self.num_inputs && output < self.num_outputs {
            Some(self.weight[self.flat_index(input, output)])
        } else {
            None
        }
    }

    /// Bias of one output neuron, or `None` out of range.
    #[inline]
    pub fn bias(&self, output: usize) -> Option<i32> {
        self.bias.get(output).copied()
    }

    /// Reconstruct the logical row of one output neuron: its weight for
    /// every input, gathered by striding the column-major store.
    /// O(num_inputs) per call.
    pub fn weight_row(&self, output: usize) -> Option<Vec<i32>> {
        if output >= self.num_outputs {
            return None;
        }
        Some(
            (0..self.num_inputs)
                .map(|input| self.weight[self.flat_index(input, output)])
                .collect(),
        )
    }

    /// Iterate the weight store in storage (flat) order.
    pub fn weights(&self) -> impl Iterator<Item = i32> + '_ {
        self.weight.iter().copied()
    }

    /// Iterate the biases in output order.
    pub fn biases(&self) -> impl Iterator<Item = i32> + '_ {
        self.bias.iter().copied()
    }
}
