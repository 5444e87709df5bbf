use colored::Colorize;

use wk_core::{Die, Game};

pub fn run(faces: &str, times: usize, weights: &[String], seed: Option<u64>) -> Result<(), String> {
    let face_list = super::parse_faces(faces)?;
    let mut die = Die::new(face_list).map_err(|e| e.to_string())?;
    for (face, weight) in super::parse_weight_overrides(weights)? {
        die.set_weight(&face, weight).map_err(|e| e.to_string())?;
    }
    let snapshot = die.snapshot();

    // A roll is a one-die game; the seed takes the same path as in `play`.
    let mut game = Game::new(vec![die], super::game_config(seed)).map_err(|e| e.to_string())?;
    game.play(times).map_err(|e| e.to_string())?;
    let results = game.results().map_err(|e| e.to_string())?;

    let outcomes: Vec<String> = results
        .rows()
        .iter()
        .flat_map(|row| row.iter().map(ToString::to_string))
        .collect();

    println!(
        "  {} {}",
        "Rolled".bold(),
        format!("({times} rolls{})", seed_label(seed)).dimmed()
    );
    println!("  [{}]", outcomes.join(", "));
    println!();

    let mut table = super::new_table(vec!["Face".to_string(), "Weight".to_string()]);
    for (face, weight) in snapshot {
        table.add_row(vec![face.to_string(), weight.to_string()]);
    }
    println!("{table}");
    Ok(())
}

fn seed_label(seed: Option<u64>) -> String {
    seed.map_or_else(String::new, |seed| format!(", seed={seed}"))
}
