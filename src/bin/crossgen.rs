use clap::{Arg, Command};
use crossgen::{load_words, render, solve, Grid};

fn main() -> Result<(), String> {
    let matches = Command::new("crossgen")
        .arg(
            Arg::new("structure")
                .short('s')
                .long("structure")
                .value_name("FILE")
                .help("Grid structure file; '*' marks blocked cells")
                .required(true),
        )
        .arg(
            Arg::new("words")
                .short('w')
                .long("words")
                .value_name("FILE")
                .help("Word list, one candidate per line")
                .required(true),
        )
        .get_matches();

    let structure_path = matches
        .get_one::<String>("structure")
        .ok_or("structure not included")?;
    let structure_input = std::fs::read_to_string(structure_path)
        .map_err(|e| format!("failed to read {}: {}", structure_path, e))?;
    let grid = Grid::parse(&structure_input).map_err(|e| e.to_string())?;

    let words_path = matches
        .get_one::<String>("words")
        .ok_or("words not included")?;
    let words_input = std::fs::read_to_string(words_path)
        .map_err(|e| format!("failed to read {}: {}", words_path, e))?;
    let vocabulary = load_words(&words_input);

    match solve(&grid, &vocabulary) {
        Some(assignment) => print!("{}", render(&grid, &assignment)),
        None => println!("No solution."),
    }
    Ok(())
}
