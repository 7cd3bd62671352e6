//! CLI video poker example.
//!
//! Also hosts the save-file collaborator: the engine itself only ever sees
//! the starting credit amount.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use vprs::{Game, GameOptions, GameState, GameVariant};

/// Persisted bankroll record, stored as JSON beside the executable.
#[derive(Debug, Serialize, Deserialize)]
struct SaveData {
    credits: u32,
    last_played: u64,
}

impl SaveData {
    fn path() -> PathBuf {
        PathBuf::from("savegame.json")
    }

    /// Loads the save file, falling back to 100 credits when the file is
    /// absent, corrupt, or holds an empty bankroll.
    fn load(path: &Path) -> Self {
        let fallback = Self {
            credits: 100,
            last_played: 0,
        };
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(data) if data.credits > 0 => data,
                _ => fallback,
            },
            Err(_) => fallback,
        }
    }

    fn save(path: &Path, credits: u32) {
        let data = Self {
            credits,
            last_played: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        };
        if let Ok(json) = serde_json::to_string(&data) {
            if let Err(err) = std::fs::write(path, json) {
                eprintln!("Could not save game: {err}");
            }
        }
    }
}

fn main() {
    env_logger::init();

    println!("Video poker CLI example (type 'q' to quit)");

    let save_path = SaveData::path();
    let save = SaveData::load(&save_path);

    let variant = match prompt_line("Game: [1] Jacks or Better  [2] Deuces Wild  [3] Double Double Bonus: ").as_str() {
        "2" => GameVariant::DeucesWild,
        "3" => GameVariant::DoubleDoubleBonus,
        _ => GameVariant::JacksOrBetter,
    };

    let options = GameOptions::default().with_initial_credits(save.credits);
    let mut game = Game::from_entropy(variant, options);

    println!("Playing {} with {} credits.", variant.name(), game.credits());
    print_paytable(&game);

    loop {
        if game.credits() == 0 {
            println!("Bankroll empty - topping up.");
            game.reset();
        }

        let Some(bet) = prompt_usize(&format!("Bet (1-5, you have {}, 0 to quit): ", game.credits()))
        else {
            break;
        };
        if bet == 0 {
            break;
        }

        if let Err(err) = game.place_bet(bet.min(5) as u32) {
            println!("Bet error: {err}");
            continue;
        }

        print_hand(&game);

        loop {
            let line = prompt_line("Toggle holds (e.g. '1 4'), empty to draw: ");
            if line.is_empty() {
                break;
            }
            if line == "q" {
                finish(&save_path, &game);
                return;
            }
            for token in line.split_whitespace() {
                match token.parse::<usize>() {
                    Ok(n @ 1..=5) => {
                        if let Err(err) = game.toggle_hold(n - 1) {
                            println!("Hold error: {err}");
                        }
                    }
                    _ => println!("Ignoring '{token}'."),
                }
            }
            print_hand(&game);
        }

        if let Err(err) = game.draw() {
            println!("Draw error: {err}");
            continue;
        }

        print_hand(&game);
        if game.last_win() > 0 {
            println!("{} - you win {}!", game.last_hand_rank(), game.last_win());
            double_up_loop(&mut game);
        } else {
            println!("Game over.");
        }
    }

    finish(&save_path, &game);
}

/// Offers double-up rounds until the player collects or loses.
fn double_up_loop(game: &mut Game) {
    loop {
        match prompt_line(&format!(
            "Double {} credits? [d]ouble / [c]ollect: ",
            game.last_win()
        ))
        .as_str()
        {
            "d" | "double" => {}
            _ => {
                let _ = game.collect();
                println!("Collected. Credits: {}", game.credits());
                return;
            }
        }

        if let Err(err) = game.start_double_up() {
            println!("Double-up error: {err}");
            return;
        }

        let banker = game.hand()[0];
        println!("Banker shows {banker}. Pick a higher card.");

        let Some(pick) = prompt_usize("Your pick (2-5): ") else {
            let _ = game.collect();
            return;
        };

        // On-screen positions 2-5 are hand indices 1-4.
        match game.play_double_up(pick.saturating_sub(1)) {
            Ok(outcome) => {
                println!("You picked {}.", game.hand()[pick - 1]);
                if outcome.is_win() {
                    println!("Win! Pending {} credits.", game.last_win());
                } else {
                    println!("Lost the double-up.");
                    let _ = game.collect();
                    return;
                }
            }
            Err(err) => {
                println!("Pick error: {err}");
            }
        }
    }
}

fn finish(save_path: &Path, game: &Game) {
    SaveData::save(save_path, game.credits());
    println!("Saved {} credits. Goodbye.", game.credits());
}

fn print_hand(game: &Game) {
    let held = game.held();
    let winning = if game.state() == GameState::GameOver {
        game.winning_cards(game.last_hand_rank())
    } else {
        Vec::new()
    };

    let mut line = String::new();
    for (index, card) in game.hand().iter().enumerate() {
        let mark = if winning.contains(card) {
            '*'
        } else if held[index] {
            '+'
        } else {
            ' '
        };
        line.push_str(&format!("[{card}{mark}] "));
    }
    println!("{line}");
}

fn print_paytable(game: &Game) {
    println!("--- {} ---", game.variant().name());
    for row in game.paytable() {
        let payouts: Vec<String> = row.payouts.iter().map(ToString::to_string).collect();
        println!("{:<22} {}", row.name, payouts.join(" / "));
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::from("q");
    }
    line.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number."),
        }
    }
}
