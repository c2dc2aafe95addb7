//! ANSI terminal surface for channel boards.

use nnscope_view::{Cell, ChannelBoard, Rgba};

const LIGHT_SQUARE: (f32, f32, f32) = (240.0, 217.0, 181.0);
const DARK_SQUARE: (f32, f32, f32) = (181.0, 136.0, 99.0);

/// Print one channel board as 8 rows of background-colored cells.
pub fn print_board(board: &ChannelBoard) {
    println!("{} (channel {})", board.piece, board.piece.channel());
    for row in 0..8 {
        let mut line = String::new();
        for col in 0..8 {
            let cell = &board.cells[row * 8 + col];
            let (r, g, b) = cell_color(cell, col + row);
            line.push_str(&format!("\x1b[48;2;{r};{g};{b}m  \x1b[0m"));
        }
        println!("{line}");
    }
    println!();
}

/// Composite the cell accent over its checkerboard square.
fn cell_color(cell: &Cell, parity: usize) -> (u8, u8, u8) {
    let base = if parity % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    };
    match cell.accent {
        Some(Rgba { r, g, b, a }) => {
            let blend = |base: f32, tint: u8| -> u8 {
                (base * (1.0 - a) + f32::from(tint) * a).round() as u8
            };
            (blend(base.0, r), blend(base.1, g), blend(base.2, b))
        }
        None => (base.0 as u8, base.1 as u8, base.2 as u8),
    }
}
