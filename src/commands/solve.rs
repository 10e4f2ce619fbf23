//! Interactive solve mode
//!
//! The solver suggests guesses; the player answers with the clue the real
//! game showed. Malformed clue text is re-prompted locally; contradictory
//! clues abort the session.

use crate::core::{Clue, Word};
use crate::output::format_clue;
use crate::solver::{SolveError, Solver, SolverConfig, SolverStatus};
use std::io::{self, Write};

/// Run the interactive prompt loop
///
/// # Errors
///
/// Returns an error on I/O failure, on a contradictory clue, or when the
/// session setup is invalid.
pub fn run_solve(dictionary: &[Word], config: &SolverConfig) -> Result<(), String> {
    println!("\nInteractive solver ({} words loaded)", dictionary.len());
    println!("After each guess, enter the clue the game showed:");
    println!("  g = letter in the correct position");
    println!("  y = letter in the word, wrong position");
    println!("  - = letter not in the word");
    println!("Type 'win' if the guess was the answer, 'quit' to exit.\n");

    let mut solver = Solver::new(dictionary, config).map_err(|e| e.to_string())?;

    while solver.status() == SolverStatus::Active {
        let guess = solver.current_guess().clone();
        println!(
            "Guess {}: {}  ({} candidates remaining)",
            solver.iterations() + 1,
            guess.text().to_uppercase(),
            solver.pool_len()
        );

        let clue = match prompt_clue(&guess).map_err(|e| e.to_string())? {
            Some(clue) => clue,
            None => {
                println!("Bye!");
                return Ok(());
            }
        };

        println!("         {}", format_clue(&clue));

        match solver.advance(&clue) {
            Ok(_) => {}
            Err(e @ SolveError::Contradiction(_)) => {
                return Err(format!("{e}. The clues entered are inconsistent."));
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    match solver.status() {
        SolverStatus::Solved => {
            let answer = solver
                .state()
                .solution()
                .map_or_else(|| solver.current_guess().text().to_string(), |w| w.text().to_string());
            println!(
                "\nSolved in {} guesses: {}",
                solver.iterations(),
                answer.to_uppercase()
            );
        }
        SolverStatus::Impossible => {
            println!("\nNo dictionary word is consistent with those clues.");
            println!("Either a clue was mistyped or the answer is not in the word list.");
        }
        SolverStatus::Active => unreachable!("loop exits only on a terminal status"),
    }

    Ok(())
}

/// Read clue markers for a guess, re-prompting until they parse
///
/// Returns `None` when the player quits.
fn prompt_clue(guess: &Word) -> io::Result<Option<Clue>> {
    loop {
        print!("clue> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(None),
            "win" | "solved" => return Ok(Some(Clue::solved(guess))),
            text => match Clue::parse(guess, text) {
                Ok(clue) => return Ok(Some(clue)),
                Err(e) => println!("{e}. Try again."),
            },
        }
    }
}
