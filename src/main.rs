use minefield::board::{Board, DEFAULT_COLS, DEFAULT_ROWS};

fn main() {
    let mut board = Board::new(DEFAULT_COLS, DEFAULT_ROWS);
    minefield::game_loop(&mut board);
}
