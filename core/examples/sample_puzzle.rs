//! Example demonstrates parsing a small puzzle document and playing a few
//! answers into it.
//!
//! > RUST_LOG=trace cargo run -p puzcw-core --example sample_puzzle
use puzcw_core::{Channel, Direction, Puzzle};

const DOCUMENT: &str = concat!(
    "ACROSS&DOWN\0",
    "CATO.OWEB----.----Mini NY Times\0",
    "Anonymous\0",
    "Public domain\0",
    "Feline\0",
    "Bovine\0",
    "Top of the middle column\0",
    "Tobacco container, casually\0",
    "Ring shape\0",
    "Another ring shape\0",
    "Spider's home\0",
    "Fifth letter\0",
);

fn main() {
    env_logger::init();

    let mut puzzle = match Puzzle::from_text(DOCUMENT) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Could not parse puzzle: {}", e);
            return;
        }
    };

    println!(
        "Dimensions: {}x{}",
        puzzle.grid().width(),
        puzzle.grid().height()
    );

    println!("\nAcross clues:");
    for clue in puzzle.across_clues() {
        println!("{}: {}", clue.number, clue.text);
    }
    println!("\nDown clues:");
    for clue in puzzle.down_clues() {
        println!("{}: {}", clue.number, clue.text);
    }

    let moves = [
        (1, Direction::Across, "cat"),
        (1, Direction::Down, "cow"),
        (6, Direction::Across, "wet"),
        (2, Direction::Down, "axe"),
        (9, Direction::Down, "zzz"),
    ];
    for (number, direction, word) in moves {
        if let Err(e) = puzzle.submit(number, direction, word) {
            println!("{} {} {:?}: {}", number, direction, word, e);
        }
    }
    if let Err(e) = puzzle.ghost(6, Direction::Across, "web") {
        println!("ghost failed: {}", e);
    }

    println!("\nBoard:\n{}", puzzle.grid());
    let ghosts: String = puzzle.grid().rows()[2]
        .iter()
        .filter_map(|cell| cell.guess(Channel::Ghost))
        .collect();
    println!("Pencilled in 6 across: {}", ghosts);
    println!("Completion: {}%", puzzle.completion_percentage());
    println!("Solved: {}", puzzle.is_complete());
}
