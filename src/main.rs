use std::collections::HashMap;

use colored::Colorize;

use blufftable_rs::games::bluff::{BluffGame, ChangeType, EventKind};

// Time units fed to the engine per scheduling step
const TICK: i32 = 250;

fn main() {
    simulate(200);
    demo_game(7);
}

// Let the heuristics play every seat and report how the table shakes out
fn simulate(games: usize) {
    let mut wins: HashMap<usize, usize> = HashMap::new();
    let mut total_turns = 0;

    for _ in 0..games {
        let mut game = BluffGame::new();
        game.no_changes = true;
        while game.winner.is_none() {
            game.tick(TICK);
            total_turns += game
                .events
                .iter()
                .filter(|e| e.kind == EventKind::Played)
                .count();
            game.events.clear();
        }
        *wins
            .entry(game.winner.expect("the game just finished"))
            .or_insert(0) += 1;
    }

    println!("{}", format!("simulated {} games", games).bold());
    for seat in 0..3 {
        println!(
            "seat {}: {} wins",
            seat,
            wins.get(&seat).copied().unwrap_or(0)
        );
    }
    println!(
        "{}",
        format!(
            "average plays per game: {:.1}",
            total_turns as f64 / games as f64
        )
        .green()
    );
}

// Replay a single seeded game, narrating the table talk as it happens
fn demo_game(seed: u64) {
    let mut game = BluffGame::from_seed(seed);
    while game.winner.is_none() {
        game.tick(TICK);
        for change in game.changes.iter().flatten() {
            if change.change_type == ChangeType::Message {
                if let Some(message) = &change.message {
                    if !message.is_empty() {
                        println!("{}", message.cyan());
                    }
                }
            }
        }
        game.changes = vec![];
        game.events.clear();
    }
    println!(
        "{}",
        serde_json::to_string(&game.snapshot()).expect("the snapshot serializes")
    );
}
