//! Typed failures for weight-to-board mapping and viewer state.

/// Errors produced by the mapper and the viewer session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The requested neuron is outside the layer's output range.
    #[error("neuron {neuron} out of range, layer has {count} outputs")]
    NeuronOutOfRange {
        /// The requested neuron index.
        neuron: usize,
        /// The layer's output count.
        count: usize,
    },

    /// The layer does not have the 768 inputs the half-piece board
    /// mapping addresses.
    #[error("layer has {num_inputs} inputs, the half-piece mapping needs {expected}")]
    NotHalfPiece {
        /// The layer's input count.
        num_inputs: usize,
        /// The half-piece feature count.
        expected: usize,
    },

    /// A load was requested while another one is outstanding.
    #[error("a network load is already in progress")]
    LoadInProgress,
}
