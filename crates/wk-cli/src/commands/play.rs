use colored::Colorize;

use wk_core::{Layout, PlayView};

pub fn run(
    faces: &str,
    dice: usize,
    rolls: usize,
    weights: &[String],
    layout: &str,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let layout = Layout::parse(layout).map_err(|e| e.to_string())?;
    let mut game = super::build_game(faces, dice, weights, seed)?;
    game.play(rolls).map_err(|e| e.to_string())?;
    let view = game.show(layout).map_err(|e| e.to_string())?;

    if json {
        let doc = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
        println!("{doc}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Play".bold(),
        format!("({dice} dice, {rolls} rolls, {layout} layout)").dimmed()
    );
    println!();
    match view {
        PlayView::Wide(table) => println!("{}", super::wide_table(&table)),
        PlayView::Narrow(table) => println!("{}", super::narrow_table(&table)),
    }
    Ok(())
}
