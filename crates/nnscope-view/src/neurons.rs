//! Hidden-layer neuron markers and their FT connection lines.

use nnscope_net::Layer;
use tracing::debug;

use crate::command::{DrawCommand, Point};
use crate::error::ViewError;
use crate::pass::RenderPass;
use crate::style::{Rgba, Style};

/// Markers per grid row.
pub const GRID_COLUMNS: usize = 4;
/// Distance between marker centers.
pub const GRID_SPACING: f32 = 15.0;
/// Marker radius, for the surface's circle rendering.
pub const MARKER_RADIUS: f32 = 5.0;

const MARKER_FILL: Rgba = Rgba::new(255, 255, 255, 0.2);
const MARKER_SELECTED_FILL: Rgba = Rgba::new(255, 255, 255, 0.8);

/// One neuron marker in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronMarker {
    pub neuron: usize,
    pub center: Point,
    pub selected: bool,
}

impl NeuronMarker {
    /// Fill color the surface should use for this marker.
    pub fn fill(&self) -> Rgba {
        if self.selected {
            MARKER_SELECTED_FILL
        } else {
            MARKER_FILL
        }
    }
}

/// A layer's neurons as a marker grid, plus the selected neuron's
/// connection lines back to the feature cells of the current pass.
#[derive(Debug, Clone)]
pub struct NeuronGrid {
    pub markers: Vec<NeuronMarker>,
    pub connections: Vec<DrawCommand>,
}

/// Lay out a layer's output neurons as a fixed-width grid at `origin`
/// and connect the selected one to every feature cell the pass knows.
///
/// Connections are elided when the weight is below the visibility
/// threshold, when the feature has no anchor this pass, or when the
/// feature index is outside the layer's inputs; none of these is an
/// error. A `selected` index outside the layer's outputs is.
pub fn neuron_grid(
    pass: &RenderPass,
    origin: Point,
    layer: &Layer,
    selected: usize,
    style: &Style,
) -> Result<NeuronGrid, ViewError> {
    if selected >= layer.num_outputs() {
        return Err(ViewError::NeuronOutOfRange {
            neuron: selected,
            count: layer.num_outputs(),
        });
    }

    let markers: Vec<NeuronMarker> = (0..layer.num_outputs())
        .map(|neuron| NeuronMarker {
            neuron,
            center: Point::new(
                origin.x + (neuron % GRID_COLUMNS) as f32 * GRID_SPACING,
                origin.y + (neuron / GRID_COLUMNS) as f32 * GRID_SPACING,
            ),
            selected: neuron == selected,
        })
        .collect();

    let target = markers[selected].center;
    let mut connections = Vec::new();
    for feature in pass.known_features() {
        let Some(anchor) = pass.feature_anchor(feature) else {
            continue;
        };
        let Some(value) = layer.weight(feature, selected) else {
            // feature beyond this layer's inputs: nothing to connect
            continue;
        };
        if !style.significant(value) {
            continue;
        }
        connections.push(DrawCommand::Line {
            from: anchor,
            to: target,
            color: style.tint(value),
        });
    }

    debug!(
        selected,
        markers = markers.len(),
        connections = connections.len(),
        "built neuron grid"
    );

    Ok(NeuronGrid {
        markers,
        connections,
    })
}
