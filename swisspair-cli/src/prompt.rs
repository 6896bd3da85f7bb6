//! Interactive result capture from a terminal

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use swisspair_core::{Match, Outcome, Pairing};
use swisspair_tournament::ResultSource;

/// Asks for each table's outcome until a valid answer is given
///
/// `1` = White wins, `2` = Black wins, `d` = draw, `q` = quit.
pub struct PromptResults<R, W> {
    input: R,
    output: W,
    /// Wait for Enter before asking for a round's results
    pause: bool,
}

impl<R: BufRead, W: Write> PromptResults<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pause: false,
        }
    }

    /// Wait for Enter before each round's results
    pub fn with_pause(mut self) -> Self {
        self.pause = true;
        self
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read result")?;
        if read == 0 {
            bail!("Input closed before all results were entered");
        }
        Ok(line)
    }

    fn ask(&mut self, table: usize, white: &str, black: &str) -> Result<Outcome> {
        writeln!(self.output, "\nTable {}: {} vs {}", table, white, black)?;
        loop {
            write!(
                self.output,
                "Enter the winner (1 for {}, 2 for {}, 'd' for draw, or 'q' to quit): ",
                white, black
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            match parse_answer(&line) {
                Some(Answer::Outcome(outcome)) => return Ok(outcome),
                Some(Answer::Quit) => bail!("Tournament aborted by user"),
                None => {
                    writeln!(self.output, "Invalid input. Please enter '1', '2', 'd', or 'q'.")?
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> ResultSource for PromptResults<R, W> {
    fn collect(&mut self, round: u32, matches: &[Match]) -> Result<Vec<Outcome>> {
        if self.pause {
            write!(
                self.output,
                "Press Enter when you're ready to enter the results for round {}...",
                round
            )?;
            self.output.flush()?;
            self.read_line()?;
        }

        let mut outcomes = Vec::with_capacity(matches.len());
        for m in matches {
            let outcome = match &m.pairing {
                Pairing::Game { white, black } => self.ask(m.table, white, black)?,
                Pairing::Bye { player } => {
                    writeln!(self.output, "\n{} has a bye this round.", player)?;
                    Outcome::Bye
                }
            };
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}

#[derive(Debug, PartialEq)]
enum Answer {
    Outcome(Outcome),
    Quit,
}

fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" => Some(Answer::Outcome(Outcome::WhiteWins)),
        "2" => Some(Answer::Outcome(Outcome::BlackWins)),
        "d" => Some(Answer::Outcome(Outcome::Draw)),
        "q" => Some(Answer::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tables() -> Vec<Match> {
        vec![
            Match {
                round: 1,
                table: 1,
                pairing: Pairing::Game {
                    white: "Ana".to_string(),
                    black: "Bo".to_string(),
                },
            },
            Match {
                round: 1,
                table: 2,
                pairing: Pairing::Game {
                    white: "Cy".to_string(),
                    black: "Dee".to_string(),
                },
            },
            Match {
                round: 1,
                table: 3,
                pairing: Pairing::Bye {
                    player: "Eve".to_string(),
                },
            },
        ]
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("1\n"), Some(Answer::Outcome(Outcome::WhiteWins)));
        assert_eq!(parse_answer(" 2 "), Some(Answer::Outcome(Outcome::BlackWins)));
        assert_eq!(parse_answer("D"), Some(Answer::Outcome(Outcome::Draw)));
        assert_eq!(parse_answer("Q"), Some(Answer::Quit));
        assert_eq!(parse_answer("3"), None);
    }

    #[test]
    fn test_collect_reprompts_on_invalid_input() {
        let input = Cursor::new("x\n2\nd\n");
        let mut output = Vec::new();
        let outcomes = PromptResults::new(input, &mut output)
            .collect(1, &tables())
            .unwrap();

        assert_eq!(
            outcomes,
            vec![Outcome::BlackWins, Outcome::Draw, Outcome::Bye]
        );
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Invalid input"));
        assert!(text.contains("Eve has a bye this round."));
    }

    #[test]
    fn test_collect_with_pause() {
        let input = Cursor::new("\n1\n1\n");
        let mut output = Vec::new();
        let outcomes = PromptResults::new(input, &mut output)
            .with_pause()
            .collect(4, &tables())
            .unwrap();

        assert_eq!(outcomes[0], Outcome::WhiteWins);
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Press Enter when you're ready to enter the results for round 4"));
    }

    #[test]
    fn test_collect_quit() {
        let input = Cursor::new("q\n");
        let err = PromptResults::new(input, Vec::new())
            .collect(1, &tables())
            .unwrap_err();
        assert!(err.to_string().contains("aborted"));
    }

    #[test]
    fn test_collect_input_closed() {
        let input = Cursor::new("1\n");
        let err = PromptResults::new(input, Vec::new())
            .collect(1, &tables())
            .unwrap_err();
        assert!(err.to_string().contains("Input closed"));
    }
}
