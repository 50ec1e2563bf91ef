//! Interactive menu session driving a [`CaseFile`]
//!
//! The session owns the case file for its whole lifetime. Lines come from a
//! [`Prompt`] and every message goes to a `Write` sink, so the same loop runs
//! over a terminal editor in the binary and over a [`Script`] in tests.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::case_file::{CaseFile, Recorded};

/// Source of input lines.
pub trait Prompt {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A fixed list of input lines, consumed front to back.
///
/// Prompts are not echoed.
#[derive(Debug, Clone, Default)]
pub struct Script {
    lines: VecDeque<String>,
}

impl Script {
    /// Create a script from its lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not read yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Prompt for Script {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1 - record a clue and its suspect
    Record,
    /// 2 - look a clue up
    Find,
    /// 3 - list clues in order
    ListClues,
    /// 4 - list associations by bucket
    ListAssociations,
    /// 5 - show the most cited suspect
    TopSuspect,
    /// 0 - leave
    Quit,
}

impl MenuChoice {
    /// Parse a menu line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<i64>().ok()? {
            1 => Some(Self::Record),
            2 => Some(Self::Find),
            3 => Some(Self::ListClues),
            4 => Some(Self::ListAssociations),
            5 => Some(Self::TopSuspect),
            0 => Some(Self::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\
=== Detective Quest - Master Level ===
1 - Record a new clue and suspect
2 - Find a clue
3 - List all clues
4 - Show clue -> suspect associations
5 - Show most cited suspect
0 - Quit";

/// Strip the line terminator and anything after an embedded NUL.
///
/// Nothing else is trimmed: leading or trailing spaces are part of a name
/// and an empty line is a valid name.
pub fn clean_input(line: &str) -> &str {
    let line = line.split('\0').next().unwrap_or_default();
    line.trim_end_matches(&['\n', '\r'][..])
}

/// The menu loop.
pub struct Session<P, W> {
    case: CaseFile,
    prompt: P,
    out: W,
}

impl<P: Prompt, W: Write> Session<P, W> {
    /// Create a session over `case`.
    pub fn new(case: CaseFile, prompt: P, out: W) -> Self {
        Self { case, prompt, out }
    }

    /// The case file gathered so far.
    pub fn case_file(&self) -> &CaseFile {
        &self.case
    }

    /// End the session, handing back the case file and output sink.
    pub fn into_parts(self) -> (CaseFile, W) {
        (self.case, self.out)
    }

    /// Run until the user quits or input runs out.
    ///
    /// # Errors
    ///
    /// Any I/O error from the prompt or the output sink.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to Detective Quest - Master Level")?;

        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{MENU}")?;
            self.out.flush()?;

            let Some(line) = self.prompt.read_line("Choose an option: ")? else {
                break;
            };

            let keep_going = match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => false,
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.out, "Invalid option! Try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.out, "Closing the case file. Goodbye!")?;
        self.out.flush()
    }

    /// Carry out one menu entry. Returns `false` if input ran out midway.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        tracing::trace!(?choice, "menu choice");
        match choice {
            MenuChoice::Record => self.record(),
            MenuChoice::Find => self.find(),
            MenuChoice::ListClues => self.list_clues().map(|()| true),
            MenuChoice::ListAssociations => self.list_associations().map(|()| true),
            MenuChoice::TopSuspect => self.top_suspect().map(|()| true),
            MenuChoice::Quit => Ok(false),
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self
            .prompt
            .read_line(prompt)?
            .map(|line| clean_input(&line).to_string()))
    }

    fn record(&mut self) -> io::Result<bool> {
        let Some(clue) = self.ask("Enter the clue: ")? else {
            return Ok(false);
        };
        let Some(suspect) = self.ask("Enter the associated suspect: ")? else {
            return Ok(false);
        };

        match self.case.record(&clue, &suspect) {
            Ok(Recorded::NewClue) => writeln!(self.out, "Clue and suspect recorded.")?,
            Ok(Recorded::KnownClue) => writeln!(
                self.out,
                "Clue already known. Linking suspect in the association table."
            )?,
            Err(e) => {
                tracing::warn!(error = %e, "record rejected");
                writeln!(self.out, "Not recorded: {e}")?;
            }
        }
        Ok(true)
    }

    fn find(&mut self) -> io::Result<bool> {
        let Some(clue) = self.ask("Enter the clue to find: ")? else {
            return Ok(false);
        };

        if self.case.find_clue(&clue) {
            writeln!(self.out, "Clue '{clue}' found in the index.")?;
            let suspects: Vec<&str> = self.case.suspects_of(&clue).collect();
            writeln!(self.out, "Suspects: {}", suspects.join(", "))?;
        } else {
            writeln!(self.out, "Clue '{clue}' not found.")?;
        }
        Ok(true)
    }

    fn list_clues(&mut self) -> io::Result<()> {
        writeln!(self.out, "Clues in alphabetical order:")?;
        for clue in self.case.clues() {
            writeln!(self.out, "- {clue}")?;
        }
        Ok(())
    }

    fn list_associations(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Clue -> suspect associations:")?;
        for bucket in self.case.associations() {
            writeln!(self.out, "Bucket {}:", bucket.index())?;
            for association in bucket {
                writeln!(
                    self.out,
                    "  Clue: {:<20} | Suspect: {}",
                    association.clue, association.suspect
                )?;
            }
        }
        Ok(())
    }

    fn top_suspect(&mut self) -> io::Result<()> {
        match self.case.top_suspect() {
            Some(top) => {
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "Most cited suspect: {} with {} associated clues.",
                    top.suspect, top.count
                )
            }
            None => writeln!(self.out, "No suspects recorded."),
        }
    }
}
