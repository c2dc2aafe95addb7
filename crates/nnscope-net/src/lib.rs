//! Decoding and encoding of the nnscope binary network format.
//!
//! A network file is a feature-set tag (NUL-terminated string) followed
//! by four dense layers in a fixed order, each stored as its weights
//! then its biases, little-endian signed integers at per-position
//! widths. See [`Network::decode`] for the full layout.

pub mod error;
pub mod feature_set;
pub mod layer;
pub mod network;
pub mod reader;
pub mod writer;

pub use error::{DecodeError, EncodeError};
pub use feature_set::FeatureSet;
pub use layer::Layer;
pub use network::{FT, L1, L2, LayerSpec, Network, file_size, layer_plan};
pub use reader::{IntWidth, Reader};
pub use writer::{Writer, encode};
