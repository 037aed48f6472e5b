use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use itertools::Itertools;

pub const DEFAULT_COLS: usize = 15;
pub const DEFAULT_ROWS: usize = 15;
pub const MINE_DENSITY: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Mine,
    Empty
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub content: Content,
    pub adjacent_mines: u8,
    pub revealed: bool,
    pub flagged: bool,
    pub point: Point
}

impl Cell {
    fn create_empty(point: Point) -> Cell {
        Cell{content: Content::Empty, adjacent_mines: 0, revealed: false, flagged: false, point}
    }

    pub fn is_mine(&self) -> bool {
        match self.content {
            Content::Mine => true,
            Content::Empty => false
        }
    }

    fn to_str(&self) -> String {
        if self.flagged {
            return String::from("▶")
        }
        if !self.revealed {
            return String::from("□")
        }
        match self.content {
            Content::Mine => String::from("X"),
            Content::Empty => {
                if self.adjacent_mines == 0 {
                    String::from("_")
                }
                else {
                    self.adjacent_mines.to_string()
                }
            }
        }
    }
}

/// Grid coordinates as (column, row).
#[derive(Debug, Eq, Clone, Hash, Copy, PartialEq, PartialOrd, Ord)]
pub struct Point(pub usize, pub usize);

pub struct BoardSize {
    width: usize,
    height: usize
}

impl BoardSize {
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.0 < self.width && point.1 < self.height
    }

    pub fn points(&self) -> Vec<Point> {
        (0..self.area()).filter_map(|x| self.point_from_integer(x)).collect()
    }

    pub fn point_from_integer(&self, x: usize) -> Option<Point> {
        if x >= self.area() {
            return None
        }
        Some(Point(x % self.width, x / self.width))
    }

    pub fn neighbor_points(&self, point: &Point) -> Vec<Point> {
        (-1i32..=1).cartesian_product(-1i32..=1)
            .filter(|&(i, j)| i != 0 || j != 0)
            .map(|(i, j)| (point.0 as i32 + i, point.1 as i32 + j))
            .filter(|&(x, y)| x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height)
            .map(|(x, y)| Point(x as usize, y as usize))
            .collect()
    }
}

fn blank_field(size: &BoardSize) -> Vec<Vec<Cell>> {
    let mut field = Vec::with_capacity(size.height);
    for row in 0..size.height {
        let mut row_vec = Vec::with_capacity(size.width);
        for col in 0..size.width {
            row_vec.push(Cell::create_empty(Point(col, row)));
        }
        field.push(row_vec);
    }
    field
}

pub struct Board {
    size: BoardSize,
    field: Vec<Vec<Cell>>,
    mine_count: usize,
    tiles_revealed: usize,
    state: GameState,
    rng: StdRng,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl Board {
    pub fn new(width: usize, height: usize) -> Board {
        Board::from_rng(width, height, StdRng::from_entropy())
    }

    /// Same layout for the same seed, so games are replayable.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Board {
        Board::from_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn from_rng(width: usize, height: usize, rng: StdRng) -> Board {
        let size = BoardSize{width, height};
        let mut board = Board {
            field: blank_field(&size),
            size,
            mine_count: 0,
            tiles_revealed: 0,
            state: GameState::Playing,
            rng,
        };
        board.reset();
        board
    }

    /// Hand-placed mines instead of the density rule. Every point must be on
    /// the board.
    pub fn with_mines(width: usize, height: usize, mines: &[Point]) -> Board {
        let size = BoardSize{width, height};
        let mut board = Board {
            field: blank_field(&size),
            size,
            mine_count: mines.len(),
            tiles_revealed: 0,
            state: GameState::Playing,
            rng: StdRng::seed_from_u64(0),
        };
        for point in mines {
            board.retrieve_cell_mutable(point).content = Content::Mine;
        }
        board.count_adjacent_mines();
        board
    }

    pub fn reset(&mut self) {
        self.field = blank_field(&self.size);
        self.mine_count = (self.size.area() as f64 * MINE_DENSITY) as usize;
        self.place_mines();
        self.count_adjacent_mines();
        self.tiles_revealed = 0;
        self.state = GameState::Playing;
    }

    fn place_mines(&mut self) {
        // mine_count stays well under area at 10% density, so rejection
        // sampling terminates after a handful of redraws
        let mut remaining = self.mine_count;
        while remaining > 0 {
            let col = self.rng.gen_range(0, self.size.width);
            let row = self.rng.gen_range(0, self.size.height);
            let cell = self.retrieve_cell_mutable(&Point(col, row));
            if cell.is_mine() {
                continue;
            }
            cell.content = Content::Mine;
            remaining -= 1;
        }
    }

    fn count_adjacent_mines(&mut self) {
        for point in self.size.points() {
            let count = self.size.neighbor_points(&point).iter()
                .filter(|neighbor| self.retrieve_cell(neighbor).is_mine())
                .count();
            self.retrieve_cell_mutable(&point).adjacent_mines = count as u8;
        }
    }

    pub fn reveal(&mut self, point: &Point) {
        if self.state != GameState::Playing || !self.size.contains(point) {
            return;
        }
        // worklist flood; flagged and already-revealed cells drop out, so
        // each cell is processed at most once
        let mut pending = vec![*point];
        while let Some(current) = pending.pop() {
            let cell = &mut self.field[current.1][current.0];
            if cell.revealed || cell.flagged {
                continue;
            }
            cell.revealed = true;
            if cell.is_mine() {
                self.state = GameState::Lost;
                return;
            }
            let adjacent = cell.adjacent_mines;
            self.tiles_revealed += 1;
            if adjacent == 0 {
                pending.extend(self.size.neighbor_points(&current));
            }
        }
        if self.tiles_revealed >= self.size.area() - self.mine_count {
            self.state = GameState::Won;
        }
    }

    pub fn toggle_flag(&mut self, point: &Point) {
        if self.state != GameState::Playing || !self.size.contains(point) {
            return;
        }
        let cell = self.retrieve_cell_mutable(point);
        if cell.revealed {
            return;
        }
        cell.flagged = !cell.flagged;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn tiles_revealed(&self) -> usize {
        self.tiles_revealed
    }

    pub fn size(&self) -> &BoardSize {
        &self.size
    }

    pub fn cell(&self, point: &Point) -> Option<&Cell> {
        if self.size.contains(point) {
            Some(self.retrieve_cell(point))
        }
        else {
            None
        }
    }

    fn retrieve_cell(&self, point: &Point) -> &Cell {
        &self.field[point.1][point.0]
    }

    fn retrieve_cell_mutable(&mut self, point: &Point) -> &mut Cell {
        &mut self.field[point.1][point.0]
    }

    fn to_string(&self) -> String {
        let mut result = "   ".to_owned();
        for col in 0..self.size.width {
            result += &(col % 10).to_string();
        }
        result += "\n";
        for (row_index, row) in self.field.iter().enumerate() {
            result += &format!("{:>2} ", row_index);
            for cell in row {
                result += &cell.to_str()[..];
            }
            result += "\n";
        }
        result
    }
}

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
mod cell_tests {
    use super::*;

    #[test]
    fn fresh_cell_is_hidden() {
        let cell = Cell::create_empty(Point(3, 4));
        assert!(!cell.revealed);
        assert!(!cell.flagged);
        assert!(!cell.is_mine());
        assert_eq!(cell.point, Point(3, 4));
    }

    #[test]
    fn glyphs_follow_cell_state() {
        let mut cell = Cell::create_empty(Point(0, 0));
        assert_eq!(cell.to_str(), "□");
        cell.flagged = true;
        assert_eq!(cell.to_str(), "▶");
        cell.flagged = false;
        cell.revealed = true;
        assert_eq!(cell.to_str(), "_");
        cell.adjacent_mines = 3;
        assert_eq!(cell.to_str(), "3");
        cell.content = Content::Mine;
        assert_eq!(cell.to_str(), "X");
    }
}
