//! The selection menu.
//!
//! Input is consumed as whitespace-separated tokens, one per round: blank
//! lines are skipped and `1 0` on one line launches HSBC and then exits. A
//! known number either launches a creator or exits; any other token prints
//! `Invalid choice.` and shows the menu again. End of input ends the loop
//! quietly.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use dp_core::{Error, Result};
use log::debug;

use crate::creator::{client_code, Creator};

/// The selection number that leaves the menu.
pub const EXIT_SELECTION: i64 = 0;

/// One parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Run the client code with this creator.
    Launch(Creator),
    /// Leave the menu.
    Exit,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let selection: i64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidChoice(trimmed.to_string()))?;
        if selection == EXIT_SELECTION {
            return Ok(MenuChoice::Exit);
        }
        Creator::from_selection(selection)
            .map(MenuChoice::Launch)
            .ok_or_else(|| Error::InvalidChoice(trimmed.to_string()))
    }
}

fn write_menu<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    for creator in Creator::ALL {
        writeln!(out, "{} {}", creator.selection(), creator.label())?;
    }
    writeln!(out, "{EXIT_SELECTION} Exit")?;
    writeln!(out, "Enter your choice:")?;
    out.flush()?;
    Ok(())
}

/// Whitespace-separated tokens read lazily from a line-oriented source.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// The next token, reading more lines as needed. `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
    }
}

/// Run the menu until the user exits or `input` is exhausted.
///
/// All user-facing text goes to `out`; only I/O failures are returned as
/// errors.
pub fn run_menu<R: BufRead, W: Write>(input: R, mut out: W) -> Result<()> {
    let mut tokens = Tokens::new(input);
    loop {
        write_menu(&mut out)?;

        let Some(token) = tokens.next_token()? else {
            debug!("end of input, leaving menu");
            return Ok(());
        };

        match token.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                writeln!(out, "Exiting.")?;
                out.flush()?;
                return Ok(());
            }
            Ok(MenuChoice::Launch(creator)) => {
                if creator == Creator::Axis {
                    writeln!(out)?;
                }
                writeln!(out, "{}", creator.launch_message())?;
                client_code(&creator, &mut out)?;
            }
            Err(err) => {
                debug!("rejected menu input: {err}");
                writeln!(out, "Invalid choice.")?;
            }
        }
    }
}
