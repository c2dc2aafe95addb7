//! Network file encoding, the exact inverse of decoding.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::EncodeError;
use crate::feature_set::FeatureSet;
use crate::network::{Network, layer_plan};
use crate::reader::IntWidth;

/// Incremental builder for a network file byte buffer.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Create an empty writer.
    pub fn new() -> Writer {
        Writer::default()
    }

    /// Write the NUL-terminated feature-set tag.
    pub fn write_tag(&mut self, feature_set: FeatureSet) {
        self.buf.extend_from_slice(feature_set.tag().as_bytes());
        self.buf.push(0);
    }

    /// Write signed integers as little-endian elements of the given
    /// width. Values outside the width's range fail the whole write.
    pub fn write_int_array(
        &mut self,
        values: impl IntoIterator<Item = i32>,
        width: IntWidth,
    ) -> Result<(), EncodeError> {
        for value in values {
            match width {
                IntWidth::I8 => {
                    let narrow = i8::try_from(value).map_err(|_| EncodeError::ValueOutOfRange {
                        value,
                        bits: width.bits(),
                    })?;
                    // infallible on Vec
                    let _ = self.buf.write_i8(narrow);
                }
                IntWidth::I16 => {
                    let narrow = i16::try_from(value).map_err(|_| EncodeError::ValueOutOfRange {
                        value,
                        bits: width.bits(),
                    })?;
                    let _ = self.buf.write_i16::<LittleEndian>(narrow);
                }
                IntWidth::I32 => {
                    let _ = self.buf.write_i32::<LittleEndian>(value);
                }
            }
        }
        Ok(())
    }

    /// Consume the writer and return the finished buffer.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Encode a decoded network back to its exact on-disk byte form.
pub fn encode(network: &Network) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    writer.write_tag(network.feature_set());
    for (layer, spec) in network.layers().iter().zip(layer_plan(network.feature_set())) {
        writer.write_int_array(layer.weights(), spec.weight_width)?;
        writer.write_int_array(layer.biases(), spec.bias_width)?;
    }
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::Writer;
    use crate::error::EncodeError;
    use crate::reader::{IntWidth, Reader};

    #[test]
    fn tag_is_nul_terminated() {
        let mut writer = Writer::new();
        writer.write_tag(crate::feature_set::FeatureSet::HalfPiece);
        assert_eq!(writer.finish(), b"half-piece\0");
    }

    #[test]
    fn int_arrays_round_trip_through_reader() {
        let values = vec![0, 1, -1, 127, -128];
        for width in [IntWidth::I8, IntWidth::I16, IntWidth::I32] {
            let mut writer = Writer::new();
            writer.write_int_array(values.iter().copied(), width).unwrap();
            let bytes = writer.finish();
            assert_eq!(bytes.len(), values.len() * width.bytes());

            let mut reader = Reader::new(&bytes);
            assert_eq!(reader.read_int_array(values.len(), width).unwrap(), values);
            assert!(reader.is_eof());
        }
    }

    #[test]
    fn narrow_width_rejects_wide_values() {
        let mut writer = Writer::new();
        let err = writer
            .write_int_array([300], IntWidth::I8)
            .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::ValueOutOfRange { value: 300, bits: 8 }
        ));

        let err = writer
            .write_int_array([40000], IntWidth::I16)
            .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::ValueOutOfRange {
                value: 40000,
                bits: 16
            }
        ));
    }
}
