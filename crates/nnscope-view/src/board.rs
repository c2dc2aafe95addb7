//! Channel-board cell descriptors for the half-piece scheme.

use nnscope_core::{NUM_FEATURES, Piece, Square, feature_index};
use nnscope_net::Layer;
use tracing::debug;

use crate::command::{DrawCommand, Point};
use crate::error::ViewError;
use crate::pass::RenderPass;
use crate::style::{Rgba, Style};

/// Edge length of one board cell in surface units.
pub const CELL_SIZE: f32 = 16.0;

/// Vertical stride between stacked channel boards.
pub const CHANNEL_STRIDE: f32 = 150.0;

const LIGHT_SQUARE: Rgba = Rgba::opaque(0xF0, 0xD9, 0xB5);
const DARK_SQUARE: Rgba = Rgba::opaque(0xB5, 0x88, 0x63);
const LABEL_COLOR: Rgba = Rgba::opaque(255, 255, 255);

/// One board cell, ready for the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub square: Square,
    /// Piece glyph to blit, with its opacity.
    pub piece: Option<(Piece, f32)>,
    /// Translucent overlay on top of the checkerboard.
    pub accent: Option<Rgba>,
    /// Small label in the cell corner.
    pub text: Option<String>,
    /// When set, the cell center is recorded in the pass cache under
    /// this feature index.
    pub feature: Option<usize>,
}

/// All 64 cells of one (color, role) channel, square-ordered.
#[derive(Debug, Clone)]
pub struct ChannelBoard {
    pub piece: Piece,
    pub cells: Vec<Cell>,
}

/// Map one FT neuron onto the 12 half-piece channel boards.
///
/// Every feature's connection strength to `neuron` becomes a cell:
/// tinted green for positive weights and red for negative, with
/// intensity `|weight| / saturation`.
pub fn channel_boards(
    layer: &Layer,
    neuron: usize,
    style: &Style,
) -> Result<Vec<ChannelBoard>, ViewError> {
    if layer.num_inputs() != NUM_FEATURES {
        return Err(ViewError::NotHalfPiece {
            num_inputs: layer.num_inputs(),
            expected: NUM_FEATURES,
        });
    }

    // One stride through the column-major store instead of 768 point reads.
    let row = layer
        .weight_row(neuron)
        .ok_or(ViewError::NeuronOutOfRange {
            neuron,
            count: layer.num_outputs(),
        })?;

    debug!(neuron, "mapping FT neuron onto channel boards");

    let boards = Piece::all()
        .map(|piece| {
            let cells = Square::all()
                .map(|square| {
                    let feature = feature_index(piece, square);
                    let value = row[feature];
                    let opacity = style.opacity(value);
                    Cell {
                        square,
                        piece: Some((piece, opacity)),
                        accent: Some(style.tint(value)),
                        text: Some(feature.to_string()),
                        feature: Some(feature),
                    }
                })
                .collect();
            ChannelBoard { piece, cells }
        })
        .collect();

    Ok(boards)
}

/// Emit one board at `origin`, recording feature anchors in the pass.
///
/// Cells are laid out eight per row in square order, rank 0 at the
/// top, on a light/dark checkerboard.
pub fn board_commands(pass: &mut RenderPass, origin: Point, cells: &[Cell]) -> Vec<DrawCommand> {
    debug_assert_eq!(cells.len(), Square::COUNT, "a board has 64 cells");

    let mut commands = Vec::with_capacity(cells.len() * 3);
    for cell in cells {
        let col = cell.square.file();
        let row = cell.square.rank();
        let x = origin.x + col as f32 * CELL_SIZE;
        let y = origin.y + row as f32 * CELL_SIZE;

        let checker = if (col + row) % 2 == 0 {
            LIGHT_SQUARE
        } else {
            DARK_SQUARE
        };
        commands.push(DrawCommand::FillRect {
            x,
            y,
            width: CELL_SIZE,
            height: CELL_SIZE,
            color: checker,
        });

        if let Some(accent) = cell.accent {
            commands.push(DrawCommand::FillRect {
                x,
                y,
                width: CELL_SIZE,
                height: CELL_SIZE,
                color: accent,
            });
        }

        if let Some((piece, opacity)) = cell.piece {
            commands.push(DrawCommand::PieceSprite {
                piece,
                x,
                y,
                size: CELL_SIZE,
                opacity,
            });
        }

        if let Some(ref text) = cell.text {
            commands.push(DrawCommand::Text {
                text: text.clone(),
                x: x + 1.0,
                y: y + CELL_SIZE - 1.0,
                color: LABEL_COLOR,
            });
        }

        if let Some(feature) = cell.feature {
            pass.record(
                feature,
                Point::new(x + CELL_SIZE / 2.0, y + CELL_SIZE / 2.0),
            );
        }
    }
    commands
}

/// Emit the full half-piece view of one FT neuron: 12 channel boards
/// stacked vertically, plus the scheme caption.
pub fn half_piece_commands(
    pass: &mut RenderPass,
    layer: &Layer,
    neuron: usize,
    style: &Style,
) -> Result<Vec<DrawCommand>, ViewError> {
    let boards = channel_boards(layer, neuron, style)?;

    let mut commands = Vec::new();
    for (channel, board) in boards.iter().enumerate() {
        let origin = Point::new(0.0, channel as f32 * CHANNEL_STRIDE);
        commands.extend(board_commands(pass, origin, &board.cells));
    }

    let caption_x = CELL_SIZE * 8.0 / 2.0;
    commands.push(DrawCommand::Text {
        text: "Half-Piece".to_string(),
        x: caption_x,
        y: -30.0,
        color: LABEL_COLOR,
    });
    commands.push(DrawCommand::Text {
        text: format!("[{NUM_FEATURES}]"),
        x: caption_x,
        y: -10.0,
        color: LABEL_COLOR,
    });

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use nnscope_core::{Color, Piece, Role, Square};

    use super::{CELL_SIZE, board_commands, channel_boards};
    use crate::command::{DrawCommand, Point};
    use crate::error::ViewError;
    use crate::pass::RenderPass;
    use crate::style::Style;
    use crate::test_support::{ft_layer, zero_ft_layer};

    #[test]
    fn twelve_boards_of_64_cells() {
        let layer = zero_ft_layer();
        let boards = channel_boards(&layer, 0, &Style::default()).unwrap();
        assert_eq!(boards.len(), 12);
        for (channel, board) in boards.iter().enumerate() {
            assert_eq!(board.piece.channel(), channel);
            assert_eq!(board.cells.len(), 64);
            for cell in &board.cells {
                assert_eq!(cell.piece.unwrap().1, 0.0, "zero weights draw at opacity 0");
            }
        }
    }

    #[test]
    fn weight_shows_at_its_feature_cell() {
        // +300 at (feature 5, neuron 2): white pawn channel, square f1.
        let layer = ft_layer(&[(5, 2, 300), (70, 2, -150)]);
        let boards = channel_boards(&layer, 2, &Style::default()).unwrap();

        let cell = &boards[0].cells[5];
        assert_eq!(cell.square, Square::from_index(5).unwrap());
        assert_eq!(cell.piece, Some((Piece::new(Color::White, Role::Pawn), 1.0)));
        let accent = cell.accent.unwrap();
        assert_eq!((accent.r, accent.g, accent.a), (0, 255, 1.0));
        assert_eq!(cell.text.as_deref(), Some("5"));
        assert_eq!(cell.feature, Some(5));

        // -150 is feature 70: channel 1 (white knight), square 6.
        let cell = &boards[1].cells[6];
        let accent = cell.accent.unwrap();
        assert_eq!((accent.r, accent.g, accent.a), (255, 0, 0.5));
        assert_eq!(cell.piece.unwrap().1, 0.5);
    }

    #[test]
    fn neuron_out_of_range() {
        let layer = zero_ft_layer();
        let err = channel_boards(&layer, 256, &Style::default()).unwrap_err();
        assert_eq!(
            err,
            ViewError::NeuronOutOfRange {
                neuron: 256,
                count: 256
            }
        );
    }

    #[test]
    fn commands_cover_checker_accent_piece_text() {
        let layer = ft_layer(&[(0, 0, 300)]);
        let boards = channel_boards(&layer, 0, &Style::default()).unwrap();
        let mut pass = RenderPass::new();
        let commands = board_commands(&mut pass, Point::new(0.0, 0.0), &boards[0].cells);

        // 64 checker fills + 64 accents + 64 sprites + 64 labels
        assert_eq!(commands.len(), 256);
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));

        // every cell anchored its feature at its center
        assert_eq!(pass.len(), 64);
        assert_eq!(
            pass.feature_anchor(0),
            Some(Point::new(CELL_SIZE / 2.0, CELL_SIZE / 2.0))
        );
    }

    #[test]
    fn board_layout_rank_zero_on_top() {
        let layer = zero_ft_layer();
        let boards = channel_boards(&layer, 0, &Style::default()).unwrap();
        let mut pass = RenderPass::new();
        board_commands(&mut pass, Point::new(0.0, 0.0), &boards[0].cells);

        // square 8 (a2) sits one row below square 0 (a1)
        let a1 = pass.feature_anchor(0).unwrap();
        let a2 = pass.feature_anchor(8).unwrap();
        assert_eq!(a1.x, a2.x);
        assert_eq!(a2.y - a1.y, CELL_SIZE);
    }
}
