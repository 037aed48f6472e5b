use regex::Regex;
use std::io;
use super::board::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal(Point),
    Flag(Point),
    Restart,
    Quit
}

pub fn get_move() -> Action {
    loop {
        println!("Enter a move: reveal X Y | flag X Y | restart | quit");
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return Action::Quit,
            Ok(_) => {}
        }
        match action_from_string(&input) {
            Some(action) => return action,
            None => println!("Must be of the form: reveal X Y, flag X Y, restart or quit")
        }
    }
}

fn action_from_string(input: &str) -> Option<Action> {
    let trimmed = input.trim();
    if trimmed == "restart" {
        return Some(Action::Restart)
    }
    if trimmed == "quit" {
        return Some(Action::Quit)
    }
    let re = Regex::new(r"^(reveal|flag)\s+(\d+)\s+(\d+)$").unwrap();
    let cap = re.captures(trimmed)?;
    let x: usize = cap[2].parse().ok()?;
    let y: usize = cap[3].parse().ok()?;
    let point = Point(x, y);
    match &cap[1] {
        "reveal" => Some(Action::Reveal(point)),
        _ => Some(Action::Flag(point))
    }
}

#[cfg(test)]
mod interaction_tests {
    use super::*;

    #[test]
    fn parses_reveal_and_flag_moves() {
        assert_eq!(action_from_string("reveal 3 4\n"), Some(Action::Reveal(Point(3, 4))));
        assert_eq!(action_from_string("flag 0 14"), Some(Action::Flag(Point(0, 14))));
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(action_from_string("restart\n"), Some(Action::Restart));
        assert_eq!(action_from_string("  quit  "), Some(Action::Quit));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(action_from_string("poke 1 2"), None);
        assert_eq!(action_from_string("reveal one two"), None);
        assert_eq!(action_from_string("reveal 1"), None);
        assert_eq!(action_from_string("reveal -1 2"), None);
        assert_eq!(action_from_string(""), None);
    }
}
