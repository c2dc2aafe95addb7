//! Shared fixtures: networks built through the public net API.

use nnscope_core::NUM_FEATURES;
use nnscope_net::{FT, FeatureSet, Layer, Network, Writer, layer_plan};

/// A half-piece network whose FT weights are `points` (feature, neuron,
/// value) over a zero background; all other layers zero.
pub fn network_with_ft(points: &[(usize, usize, i32)]) -> Network {
    let mut ft_weights = vec![0i32; NUM_FEATURES * FT];
    for &(feature, neuron, value) in points {
        ft_weights[feature * FT + neuron] = value;
    }

    let mut writer = Writer::new();
    writer.write_tag(FeatureSet::HalfPiece);
    for (position, spec) in layer_plan(FeatureSet::HalfPiece).into_iter().enumerate() {
        if position == 0 {
            writer
                .write_int_array(ft_weights.iter().copied(), spec.weight_width)
                .unwrap();
        } else {
            writer
                .write_int_array(
                    vec![0; spec.num_inputs * spec.num_outputs],
                    spec.weight_width,
                )
                .unwrap();
        }
        writer
            .write_int_array(vec![0; spec.num_outputs], spec.bias_width)
            .unwrap();
    }

    Network::decode(&writer.finish()).unwrap()
}

/// The FT layer of [`network_with_ft`].
pub fn ft_layer(points: &[(usize, usize, i32)]) -> Layer {
    network_with_ft(points).ft().clone()
}

/// An all-zero half-piece FT layer.
pub fn zero_ft_layer() -> Layer {
    ft_layer(&[])
}
