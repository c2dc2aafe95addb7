//! End-to-end encode/decode coverage over the public API.

use nnscope_net::{FeatureSet, Network, Writer, encode, file_size, layer_plan};

/// Build a file for `feature_set` whose FT weights come from `ft_weight`,
/// with everything else zero.
fn build_file(feature_set: FeatureSet, ft_weight: impl Fn(usize) -> i32) -> Vec<u8> {
    let mut writer = Writer::new();
    writer.write_tag(feature_set);
    for (position, spec) in layer_plan(feature_set).into_iter().enumerate() {
        let count = spec.num_inputs * spec.num_outputs;
        let weights: Vec<i32> = if position == 0 {
            (0..count).map(&ft_weight).collect()
        } else {
            vec![0; count]
        };
        writer.write_int_array(weights, spec.weight_width).unwrap();
        writer
            .write_int_array(vec![0; spec.num_outputs], spec.bias_width)
            .unwrap();
    }
    writer.finish()
}

#[test]
fn encode_decode_is_identity() {
    // Deterministic non-trivial FT weights, bias pattern left zero.
    let bytes = build_file(FeatureSet::HalfCompact, |flat| (flat % 251) as i32 - 125);
    let network = Network::decode(&bytes).unwrap();
    let reencoded = encode(&network).unwrap();
    assert_eq!(reencoded, bytes);

    // And decoding the re-encoding agrees weight for weight.
    let network2 = Network::decode(&reencoded).unwrap();
    for (a, b) in network.layers().iter().zip(network2.layers()) {
        assert_eq!(a, b);
    }
}

#[test]
fn ft_weight_lands_at_its_coordinates() {
    // +300 at (feature 5, neuron 2), -150 at (feature 40, neuron 0).
    let plan = layer_plan(FeatureSet::HalfPiece);
    let outputs = plan[0].num_outputs;
    let bytes = build_file(FeatureSet::HalfPiece, |flat| {
        if flat == 5 * outputs + 2 {
            300
        } else if flat == 40 * outputs {
            -150
        } else {
            0
        }
    });

    let network = Network::decode(&bytes).unwrap();
    let ft = network.ft();
    assert_eq!(ft.weight(5, 2), Some(300));
    assert_eq!(ft.weight(40, 0), Some(-150));
    assert_eq!(ft.weight(5, 3), Some(0));
}

#[test]
fn row_accessor_agrees_with_point_accessor() {
    let bytes = build_file(FeatureSet::HalfCompact, |flat| (flat as i32 * 7) % 1000 - 500);
    let network = Network::decode(&bytes).unwrap();
    let ft = network.ft();

    for neuron in [0, 1, 37, ft.num_outputs() - 1] {
        let row = ft.weight_row(neuron).unwrap();
        assert_eq!(row.len(), ft.num_inputs());
        for (feature, &value) in row.iter().enumerate() {
            assert_eq!(ft.weight(feature, neuron), Some(value));
        }
    }
}

#[test]
fn well_formed_files_are_sized_exactly() {
    for fs in FeatureSet::ALL {
        let bytes = build_file(fs, |_| 0);
        assert_eq!(bytes.len(), file_size(fs));
        // Decoding consumes every byte or the decoder would have failed.
        assert!(Network::decode(&bytes).is_ok());
    }
}
