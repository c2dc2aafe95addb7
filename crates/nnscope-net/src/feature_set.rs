//! The closed enumeration of feature sets the format can name.

use std::fmt;

/// Input feature encodings. Each fixes the FT input dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureSet {
    /// 192-feature compact encoding.
    HalfCompact,
    /// 768-feature (piece, square, color) encoding.
    HalfPiece,
    /// 40960-feature king-relative encoding.
    HalfKingPiece,
}

impl FeatureSet {
    /// All feature sets the format defines.
    pub const ALL: [FeatureSet; 3] = [
        FeatureSet::HalfCompact,
        FeatureSet::HalfPiece,
        FeatureSet::HalfKingPiece,
    ];

    /// Parse a header tag. Returns `None` for tags outside the closed set.
    pub fn from_tag(tag: &str) -> Option<FeatureSet> {
        match tag {
            "half-compact" => Some(FeatureSet::HalfCompact),
            "half-piece" => Some(FeatureSet::HalfPiece),
            "half-king-piece" => Some(FeatureSet::HalfKingPiece),
            _ => None,
        }
    }

    /// The on-disk header tag.
    pub const fn tag(self) -> &'static str {
        match self {
            FeatureSet::HalfCompact => "half-compact",
            FeatureSet::HalfPiece => "half-piece",
            FeatureSet::HalfKingPiece => "half-king-piece",
        }
    }

    /// Number of input features the FT layer consumes.
    pub const fn num_features(self) -> usize {
        match self {
            FeatureSet::HalfCompact => 192,
            FeatureSet::HalfPiece => 768,
            FeatureSet::HalfKingPiece => 40960,
        }
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
