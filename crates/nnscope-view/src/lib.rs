//! Maps network weights onto drawable board descriptors.
//!
//! Everything here is declarative: the mapper produces cell
//! descriptors and draw commands; an external surface owns the actual
//! raster work.

pub mod board;
pub mod command;
pub mod error;
pub mod image;
pub mod neurons;
pub mod pass;
pub mod style;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_support;

pub use board::{Cell, ChannelBoard, CELL_SIZE, CHANNEL_STRIDE, board_commands, channel_boards, half_piece_commands};
pub use command::{DrawCommand, Point};
pub use error::ViewError;
pub use image::{WeightImage, weight_image};
pub use neurons::{GRID_COLUMNS, GRID_SPACING, MARKER_RADIUS, NeuronGrid, NeuronMarker, neuron_grid};
pub use pass::RenderPass;
pub use style::{Rgba, Style};
pub use viewer::Viewer;
