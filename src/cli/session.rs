//! Menu-driven interactive session.

use super::loader::read_line;
use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::models::Record;
use crate::search::StrategyKind;
use crate::store::RecordStore;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Search the records
    FindPerson,
    /// List every record
    PrintPeople,
    /// End the session
    Exit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 3] = [Self::FindPerson, Self::PrintPeople, Self::Exit];

    /// Get the number users type to pick this entry.
    pub fn code(&self) -> u8 {
        match self {
            Self::FindPerson => 1,
            Self::PrintPeople => 2,
            Self::Exit => 0,
        }
    }

    /// Get the menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FindPerson => "Find a person",
            Self::PrintPeople => "Print all people",
            Self::Exit => "Exit",
        }
    }

    /// Parse a menu selection, returning `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        let code: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|action| action.code() == code)
    }
}

/// Interactive session over a loaded record store.
pub struct Session<R, W> {
    store: RecordStore,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session.
    pub fn new(store: RecordStore, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            store,
            input,
            output,
            format,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        while let Some(action) = self.prompt_menu()? {
            debug!(?action, "Menu action selected");
            match action {
                MenuAction::FindPerson => self.find_person()?,
                MenuAction::PrintPeople => self.print_people()?,
                MenuAction::Exit => {
                    writeln!(self.output, "\nBye!")?;
                    break;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Consume the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu until a valid entry is chosen; `None` at end of input.
    fn prompt_menu(&mut self) -> CliResult<Option<MenuAction>> {
        loop {
            writeln!(self.output, "\n=== Menu ===")?;
            for action in MenuAction::ALL {
                writeln!(self.output, "{}. {}", action.code(), action.label())?;
            }
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match MenuAction::parse(&line) {
                Some(action) => return Ok(Some(action)),
                None => writeln!(self.output, "\nIncorrect option! Try again.")?,
            }
        }
    }

    fn find_person(&mut self) -> CliResult<()> {
        let names: Vec<&str> = StrategyKind::ALL_KINDS
            .iter()
            .map(StrategyKind::name)
            .collect();
        writeln!(
            self.output,
            "\nSelect a matching strategy: {}",
            names.join(", ")
        )?;
        let Some(selector) = self.read_line()? else {
            return Ok(());
        };
        let kind = match selector.parse::<StrategyKind>() {
            Ok(kind) => kind,
            Err(e) => {
                warn!("{}", e);
                writeln!(self.output, "\n{}", e)?;
                return Ok(());
            }
        };

        writeln!(
            self.output,
            "\nEnter a name or email to search all suitable people."
        )?;
        let Some(query) = self.read_line()? else {
            return Ok(());
        };

        let found = self.store.find_records(kind, query.trim());
        if found.is_empty() {
            writeln!(self.output, "No matching people found.")?;
            return Ok(());
        }
        write_records(&mut self.output, self.format, &found)
    }

    fn print_people(&mut self) -> CliResult<()> {
        writeln!(self.output, "\n=== List of people ===")?;
        let all: Vec<&Record> = self.store.records().iter().collect();
        write_records(&mut self.output, self.format, &all)
    }

    fn read_line(&mut self) -> CliResult<Option<String>> {
        self.output.flush()?;
        read_line(&mut self.input)
    }
}

fn write_records(
    output: &mut impl Write,
    format: OutputFormat,
    records: &[&Record],
) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(output, "{}", record)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, records)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
