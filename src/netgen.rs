//! Test network generation.

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use nnscope_net::{FeatureSet, IntWidth, Writer, layer_plan};

/// Build a well-formed network file: all-zero without a seed, small
/// random weights with one.
pub fn generate(feature_set: FeatureSet, seed: Option<u64>) -> Result<Vec<u8>> {
    let mut rng = seed.map(SmallRng::seed_from_u64);

    let mut writer = Writer::new();
    writer.write_tag(feature_set);
    for spec in layer_plan(feature_set) {
        let weights = values(&mut rng, spec.num_inputs * spec.num_outputs, spec.weight_width);
        writer.write_int_array(weights, spec.weight_width)?;

        let biases = values(&mut rng, spec.num_outputs, spec.bias_width);
        writer.write_int_array(biases, spec.bias_width)?;
    }
    Ok(writer.finish())
}

/// Draw `count` values that fit `width`, spanning the display's
/// saturation range where the width allows it.
fn values(rng: &mut Option<SmallRng>, count: usize, width: IntWidth) -> Vec<i32> {
    let Some(rng) = rng.as_mut() else {
        return vec![0; count];
    };
    let bound = match width {
        IntWidth::I8 => 127,
        IntWidth::I16 => 400,
        IntWidth::I32 => 1000,
    };
    (0..count).map(|_| rng.gen_range(-bound..=bound)).collect()
}
