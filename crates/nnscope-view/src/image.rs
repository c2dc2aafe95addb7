//! Dense weight-image rendering.

use nnscope_net::Layer;

/// RGBA8 pixels of a layer's weight store, one pixel per weight in
/// storage order: row `input`, column `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightImage {
    pub width: usize,
    pub height: usize,
    /// `width * height * 4` bytes, RGBA.
    pub pixels: Vec<u8>,
}

/// Render a layer's raw weights as pixels: positive values in the
/// green channel, negative in the red, magnitudes clamped to 255.
pub fn weight_image(layer: &Layer) -> WeightImage {
    let width = layer.num_outputs();
    let height = layer.num_inputs();

    let mut pixels = Vec::with_capacity(width * height * 4);
    for value in layer.weights() {
        let magnitude = value.unsigned_abs().min(255) as u8;
        if value < 0 {
            pixels.extend_from_slice(&[magnitude, 0, 0, 255]);
        } else {
            pixels.extend_from_slice(&[0, magnitude, 0, 255]);
        }
    }

    WeightImage {
        width,
        height,
        pixels,
    }
}
