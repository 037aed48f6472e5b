#[cfg(test)]
#[macro_use]
extern crate proptest;

pub mod board;
mod interaction;

use std::time::Instant;

use board::{Board, GameState};
use interaction::Action;

pub fn game_loop(board: &mut Board) {
    let mut started = Instant::now();
    let mut ended: Option<Instant> = None;
    loop {
        println!("{}", board);
        match board.state() {
            GameState::Playing => {
                println!("{} mines, {} tiles revealed", board.mine_count(), board.tiles_revealed());
            }
            GameState::Won => {
                println!("YOU WIN!");
                print_time_played(started, ended);
                println!("Type 'restart' to play again!");
            }
            GameState::Lost => {
                println!("YOU LOSE!");
                print_time_played(started, ended);
                println!("Type 'restart' to play again!");
            }
        }
        match interaction::get_move() {
            Action::Reveal(point) => board.reveal(&point),
            Action::Flag(point) => board.toggle_flag(&point),
            Action::Restart => {
                board.reset();
                started = Instant::now();
                ended = None;
            }
            Action::Quit => break,
        }
        if board.state() != GameState::Playing && ended.is_none() {
            ended = Some(Instant::now());
        }
    }
}

fn print_time_played(started: Instant, ended: Option<Instant>) {
    let end = ended.unwrap_or_else(Instant::now);
    let total = end.duration_since(started).as_secs();
    println!("Time played: {} minutes, {} seconds.", total / 60, total % 60);
}
