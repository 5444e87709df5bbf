pub mod analyze;
pub mod play;
pub mod roll;

use comfy_table::{ContentArrangement, Table};

use wk_core::{Die, Face, Game, GameConfig, NarrowTable, PlayTable};

/// Parse a comma-separated face list.
///
/// The list is numeric when every item parses as an integer, textual
/// otherwise.
fn parse_faces(spec: &str) -> Result<Vec<Face>, String> {
    let items: Vec<&str> = spec
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        return Err(format!("no faces in '{spec}'"));
    }
    let numeric: Result<Vec<i64>, _> = items.iter().map(|item| item.parse::<i64>()).collect();
    match numeric {
        Ok(nums) => Ok(nums.into_iter().map(Face::Num).collect()),
        Err(_) => Ok(items.into_iter().map(Face::from).collect()),
    }
}

/// Parse a single face the same way face lists are parsed.
fn parse_face(spec: &str) -> Face {
    let spec = spec.trim();
    spec.parse::<i64>().map_or_else(|_| Face::from(spec), Face::Num)
}

/// Parse "FACE=WEIGHT" overrides for a single die.
fn parse_weight_overrides(specs: &[String]) -> Result<Vec<(Face, f64)>, String> {
    specs
        .iter()
        .map(|spec| {
            let (face, weight) = spec
                .split_once('=')
                .ok_or_else(|| format!("expected FACE=WEIGHT, got '{spec}'"))?;
            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| format!("invalid weight in '{spec}'"))?;
            Ok((parse_face(face), weight))
        })
        .collect()
}

/// Parse "DIE:FACE=WEIGHT" overrides for a game.
fn parse_game_overrides(specs: &[String]) -> Result<Vec<(usize, Face, f64)>, String> {
    specs
        .iter()
        .map(|spec| {
            let (die, rest) = spec
                .split_once(':')
                .ok_or_else(|| format!("expected DIE:FACE=WEIGHT, got '{spec}'"))?;
            let die: usize = die
                .trim()
                .parse()
                .map_err(|_| format!("invalid die index in '{spec}'"))?;
            let (face, weight) = rest
                .split_once('=')
                .ok_or_else(|| format!("expected DIE:FACE=WEIGHT, got '{spec}'"))?;
            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| format!("invalid weight in '{spec}'"))?;
            Ok((die, parse_face(face), weight))
        })
        .collect()
}

fn game_config(seed: Option<u64>) -> GameConfig {
    match seed {
        Some(seed) => GameConfig::default().with_seed(seed),
        None => GameConfig::default(),
    }
}

/// Build a game of `count` same-faced dice with per-die weight overrides.
fn build_game(
    faces: &str,
    count: usize,
    overrides: &[String],
    seed: Option<u64>,
) -> Result<Game, String> {
    let faces = parse_faces(faces)?;
    let mut dice = Vec::with_capacity(count);
    for _ in 0..count {
        dice.push(Die::new(faces.clone()).map_err(|e| e.to_string())?);
    }
    for (die, face, weight) in parse_game_overrides(overrides)? {
        let die = dice
            .get_mut(die)
            .ok_or_else(|| format!("die index {die} out of range (have {count} dice)"))?;
        die.set_weight(&face, weight).map_err(|e| e.to_string())?;
    }
    Game::new(dice, game_config(seed)).map_err(|e| e.to_string())
}

fn new_table(header: Vec<String>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Render a wide play table.
fn wide_table(play: &PlayTable) -> Table {
    let mut header = vec!["Roll".to_string()];
    header.extend((0..play.num_dice()).map(|die| format!("Die {die}")));
    let mut table = new_table(header);
    for (roll, row) in play.rows().iter().enumerate() {
        let mut cells = vec![roll.to_string()];
        cells.extend(row.iter().map(ToString::to_string));
        table.add_row(cells);
    }
    table
}

/// Render a narrow play table.
fn narrow_table(play: &NarrowTable) -> Table {
    let mut table = new_table(vec![
        "Roll".to_string(),
        "Die".to_string(),
        "Outcome".to_string(),
    ]);
    for record in play.rows() {
        table.add_row(vec![
            record.roll.to_string(),
            record.die.to_string(),
            record.outcome.to_string(),
        ]);
    }
    table
}
