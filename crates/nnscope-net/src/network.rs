//! The four-layer network file model.

use std::path::Path;

use tracing::{debug, info};

use crate::error::DecodeError;
use crate::feature_set::FeatureSet;
use crate::layer::Layer;
use crate::reader::{IntWidth, Reader};

/// Feature-transformer output width.
pub const FT: usize = 256;
/// First hidden layer width.
pub const L1: usize = 32;
/// Second hidden layer width.
pub const L2: usize = 32;

/// Shape and storage widths of one layer position.
///
/// The format does not self-describe these; they are fixed constants at
/// each position and must match the encoder exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpec {
    pub num_inputs: usize,
    pub num_outputs: usize,
    pub weight_width: IntWidth,
    pub bias_width: IntWidth,
}

/// The fixed four-layer plan for a feature set.
///
/// Layer 1 sees `2 * FT` inputs: the single physical FT layer feeds
/// both board perspectives.
pub fn layer_plan(feature_set: FeatureSet) -> [LayerSpec; 4] {
    [
        LayerSpec {
            num_inputs: feature_set.num_features(),
            num_outputs: FT,
            weight_width: IntWidth::I16,
            bias_width: IntWidth::I16,
        },
        LayerSpec {
            num_inputs: 2 * FT,
            num_outputs: L1,
            weight_width: IntWidth::I8,
            bias_width: IntWidth::I32,
        },
        LayerSpec {
            num_inputs: L1,
            num_outputs: L2,
            weight_width: IntWidth::I8,
            bias_width: IntWidth::I32,
        },
        LayerSpec {
            num_inputs: L2,
            num_outputs: 1,
            weight_width: IntWidth::I8,
            bias_width: IntWidth::I32,
        },
    ]
}

/// Exact byte length of a well-formed file for a feature set.
pub fn file_size(feature_set: FeatureSet) -> usize {
    let tag = feature_set.tag().len() + 1;
    layer_plan(feature_set)
        .iter()
        .map(|spec| {
            spec.num_inputs * spec.num_outputs * spec.weight_width.bytes()
                + spec.num_outputs * spec.bias_width.bytes()
        })
        .sum::<usize>()
        + tag
}

/// A fully decoded network file. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Network {
    feature_set: FeatureSet,
    layers: Vec<Layer>,
}

impl Network {
    /// Decode a network from an already-fetched byte buffer.
    ///
    /// Layout: `[tag]\0` then, per layer of [`layer_plan`], all weights
    /// followed by all biases. The buffer must be consumed exactly;
    /// leftover bytes fail with [`DecodeError::TrailingBytes`].
    pub fn decode(bytes: &[u8]) -> Result<Network, DecodeError> {
        let mut reader = Reader::new(bytes);

        let tag = reader.read_string()?;
        let feature_set =
            FeatureSet::from_tag(&tag).ok_or(DecodeError::UnknownFeatureSet { tag })?;
        debug!(%feature_set, num_features = feature_set.num_features(), "decoding network");

        let mut layers = Vec::with_capacity(4);
        for spec in layer_plan(feature_set) {
            layers.push(Layer::read(&mut reader, spec)?);
        }

        if !reader.is_eof() {
            return Err(DecodeError::TrailingBytes {
                remaining: reader.remaining(),
            });
        }

        Ok(Network {
            feature_set,
            layers,
        })
    }

    /// Read and decode a network file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Network, DecodeError> {
        let bytes = std::fs::read(path.as_ref())?;
        let network = Network::decode(&bytes)?;
        info!(
            feature_set = %network.feature_set,
            bytes = bytes.len(),
            "loaded network"
        );
        Ok(network)
    }

    /// The feature set named by the file header.
    #[inline]
    pub fn feature_set(&self) -> FeatureSet {
        self.feature_set
    }

    /// Number of input features of the FT layer.
    #[inline]
    pub fn num_features(&self) -> usize {
        self.feature_set.num_features()
    }

    /// The feature-transformer layer (layer 0, the one visualized
    /// against the board).
    #[inline]
    pub fn ft(&self) -> &Layer {
        &self.layers[0]
    }

    /// All four layers in file order.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}
