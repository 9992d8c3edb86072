//! Interactive prompt for finding similar movies from a terminal.

use std::io::{self, BufRead, Write};

use crate::services::Recommender;

pub const PROMPT: &str =
    "🎬 Enter a movie title, type 'list' to see some movies, or 'exit' to quit: ";
pub const NOT_FOUND_MESSAGE: &str =
    "❌ Movie not found in dataset! Please check the spelling and try again.";

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    List,
    Recommend(&'a str),
    Empty,
}

impl<'a> Command<'a> {
    /// Keywords are matched trimmed; a title is kept as typed, minus the line ending
    pub fn parse(line: &'a str) -> Self {
        let keyword = line.trim();
        if keyword.is_empty() {
            Command::Empty
        } else if keyword.eq_ignore_ascii_case("exit") {
            Command::Exit
        } else if keyword.eq_ignore_ascii_case("list") {
            Command::List
        } else {
            Command::Recommend(line.trim_end_matches(['\n', '\r']))
        }
    }
}

/// Settings for a prompt session
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub num_recommendations: usize,
    pub sample_size: usize,
}

impl Session {
    /// Runs the prompt loop until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(
        &self,
        recommender: &Recommender,
        mut input: R,
        output: &mut W,
    ) -> io::Result<()> {
        writeln!(
            output,
            "✅ Dataset loaded successfully! Total movies: {}",
            recommender.len()
        )?;

        let mut line = String::new();
        loop {
            write!(output, "\n{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            match Command::parse(&line) {
                Command::Exit => {
                    writeln!(output, "👋 Exiting... Enjoy your movies!")?;
                    break;
                }
                Command::List => self.show_sample(recommender, output)?,
                Command::Empty => continue,
                Command::Recommend(title) => {
                    self.show_recommendations(recommender, title, output)?
                }
            }
        }

        Ok(())
    }

    fn show_sample<W: Write>(&self, recommender: &Recommender, output: &mut W) -> io::Result<()> {
        writeln!(output, "\n🎥 Sample movie titles from dataset:")?;
        writeln!(output, "-----------------------------------")?;
        for title in recommender.sample_titles(self.sample_size) {
            writeln!(output, "  {title}")?;
        }
        writeln!(
            output,
            "\n👉 Remember: you need to type the full title exactly as shown (including year)."
        )
    }

    fn show_recommendations<W: Write>(
        &self,
        recommender: &Recommender,
        title: &str,
        output: &mut W,
    ) -> io::Result<()> {
        if !recommender.contains(title) {
            tracing::debug!(title, "Unknown title entered");
            return writeln!(output, "\n{NOT_FOUND_MESSAGE}");
        }

        writeln!(output, "\nRecommended movies similar to '{title}':")?;
        for (rank, movie) in recommender
            .recommend(title, self.num_recommendations)
            .iter()
            .enumerate()
        {
            writeln!(output, "{}. {}", rank + 1, movie)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, MovieRecord};

    fn recommender() -> Recommender {
        Recommender::build(Dataset::from(vec![
            MovieRecord::new("A", "Action"),
            MovieRecord::new("B", "Action"),
            MovieRecord::new("C", "Comedy"),
        ]))
    }

    fn run(input: &str, session: Session) -> String {
        let mut output = Vec::new();
        session
            .run(&recommender(), input.as_bytes(), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn session() -> Session {
        Session {
            num_recommendations: 5,
            sample_size: 2,
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("EXIT\n"), Command::Exit);
        assert_eq!(Command::parse("  List "), Command::List);
        assert_eq!(Command::parse("\n"), Command::Empty);
        assert_eq!(Command::parse("Heat (1995)\r\n"), Command::Recommend("Heat (1995)"));
        assert_eq!(Command::parse(" Heat (1995) \n"), Command::Recommend(" Heat (1995) "));
    }

    #[test]
    fn test_recommendations_are_numbered() {
        let output = run("A\nexit\n", session());
        assert!(output.contains("Total movies: 3"));
        assert!(output.contains("Recommended movies similar to 'A':\n1. B\n2. C\n"));
        assert!(output.contains("Enjoy your movies!"));
    }

    #[test]
    fn test_padded_title_is_looked_up_as_typed() {
        let recommender = Recommender::build(Dataset::from(vec![
            MovieRecord::new(" Heat (1995)", "Action|Crime"),
            MovieRecord::new("Casino (1995)", "Crime|Drama"),
        ]));
        let mut output = Vec::new();
        session()
            .run(&recommender, " Heat (1995)\nexit\n".as_bytes(), &mut output)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("similar to ' Heat (1995)':\n1. Casino (1995)\n"));
        assert!(!output.contains(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_unknown_title() {
        let output = run("Nonexistent Movie\nexit\n", session());
        assert!(output.contains(NOT_FOUND_MESSAGE));
        assert!(!output.contains("Recommended movies"));
    }

    #[test]
    fn test_list_shows_sample() {
        let output = run("list\nexit\n", session());
        assert!(output.contains("Sample movie titles from dataset:"));
        let listed = output.lines().filter(|l| l.starts_with("  ")).count();
        assert_eq!(listed, 2);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let output = run("A\n", session());
        assert_eq!(output.matches(PROMPT).count(), 2);
        assert!(!output.contains("Enjoy your movies!"));
    }
}
