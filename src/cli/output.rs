//! Board rendering and progress feedback for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{connect::ConnectBoard, sliding::SlidingBoard};

/// Boards printed side by side before wrapping
pub const BOARDS_PER_ROW: usize = 6;

// Text rows of one board, top row first, and the row whose right frame edge
// stays open.
struct Block {
    rows: Vec<String>,
    open_row: Option<usize>,
}

impl Block {
    fn width(&self) -> usize {
        self.rows.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }
}

/// Lay out framed boards, at most [`BOARDS_PER_ROW`] per line of boards.
///
/// Boards of different sizes share a line: shorter boards are padded with
/// blank space below their bottom frame so the columns stay aligned.
fn frame_blocks(blocks: &[Block]) -> String {
    blocks
        .chunks(BOARDS_PER_ROW)
        .map(|chunk| {
            let widths: Vec<usize> = chunk.iter().map(Block::width).collect();
            let height = chunk.iter().map(|block| block.rows.len()).max().unwrap_or(0);

            // one frame line per block: top edge, rows, bottom edge, then padding
            let lines: Vec<String> = (0..height + 2)
                .map(|line| {
                    chunk
                        .iter()
                        .zip(&widths)
                        .map(|(block, &width)| frame_line(block, width, line))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect();
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn frame_line(block: &Block, width: usize, line: usize) -> String {
    let rows = block.rows.len();
    if line == 0 || line == rows + 1 {
        return format!(" {} ", "-".repeat(width));
    }
    match block.rows.get(line - 1) {
        Some(text) => {
            let right = if block.open_row == Some(line - 1) { ' ' } else { '|' };
            format!("|{text:<width$}{right}")
        }
        None => " ".repeat(width + 2),
    }
}

/// Render puzzle boards side by side; the exit row is drawn open on the right
pub fn render_puzzle_boards(boards: &[SlidingBoard]) -> String {
    let blocks: Vec<Block> = boards
        .iter()
        .map(|board| Block {
            rows: (0..board.grid().rows())
                .map(|row| board.grid().row(row).collect())
                .collect(),
            open_row: Some(board.config().exit_row),
        })
        .collect();
    frame_blocks(&blocks)
}

/// Render connect boards side by side, top row first
pub fn render_connect_boards(boards: &[ConnectBoard]) -> String {
    let blocks: Vec<Block> = boards
        .iter()
        .map(|board| Block {
            rows: (0..board.config().rows)
                .rev()
                .map(|row| board.row(row).into_iter().collect())
                .collect(),
            open_row: None,
        })
        .collect();
    frame_blocks(&blocks)
}

/// Create a spinner for long searches
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
