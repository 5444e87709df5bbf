use colored::Colorize;
use serde_json::json;

use wk_core::{Analyzer, ComboTable};

pub fn run(
    faces: &str,
    dice: usize,
    rolls: usize,
    weights: &[String],
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mut game = super::build_game(faces, dice, weights, seed)?;
    game.play(rolls).map_err(|e| e.to_string())?;
    let analyzer = Analyzer::new(&game).map_err(|e| e.to_string())?;

    let jackpots = analyzer.jackpot();
    let face_counts = analyzer.face_counts_per_roll();
    let combos = analyzer.combo_count();
    let perms = analyzer.permutation_count();

    if json {
        let doc = json!({
            "rolls": rolls,
            "dice": dice,
            "jackpot": jackpots,
            "face_counts": face_counts,
            "combinations": combos,
            "permutations": perms,
        });
        let doc = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
        println!("{doc}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Analysis".bold(),
        format!("({dice} dice, {rolls} rolls)").dimmed()
    );
    println!();
    println!("  Jackpots: {jackpots} of {rolls} rolls");
    println!();

    println!("  {}", "Face counts per roll".bold().underline());
    let mut header = vec!["Roll".to_string()];
    header.extend(face_counts.faces.iter().map(ToString::to_string));
    let mut table = super::new_table(header);
    for (roll, row) in face_counts.rows.iter().enumerate() {
        let mut cells = vec![roll.to_string()];
        cells.extend(row.iter().map(ToString::to_string));
        table.add_row(cells);
    }
    println!("{table}");
    println!();

    print_combo_table("Combinations", &combos);
    println!();
    print_combo_table("Permutations", &perms);
    Ok(())
}

fn print_combo_table(title: &str, combos: &ComboTable) {
    println!("  {}", title.bold().underline());
    let mut table = super::new_table(vec!["Faces".to_string(), "Count".to_string()]);
    for entry in &combos.entries {
        let faces: Vec<String> = entry.faces.iter().map(ToString::to_string).collect();
        table.add_row(vec![faces.join(", "), entry.count.to_string()]);
    }
    println!("{table}");
}
