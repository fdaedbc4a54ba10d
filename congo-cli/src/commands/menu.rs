//! `congo` / `congo menu` — the interactive numbered menu.
//!
//! Input is line based. Results go to the output writer, registry errors to the
//! error writer; neither kind of registry error ends the loop. End of input ends
//! the session quietly.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use congo_core::{Item, ItemId, Registry, RegistryError};

use super::list::{self, ListFormat};
use super::selftest::SelfTest;

/// One numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    FindItem,
    RemoveItem,
    ListItems,
    TestDuplicate,
    TestNotFound,
    Exit,
}

impl MenuChoice {
    /// Parse a trimmed choice line; `None` for anything that is not 1-7.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u8>().ok()? {
            1 => Some(Self::AddItem),
            2 => Some(Self::FindItem),
            3 => Some(Self::RemoveItem),
            4 => Some(Self::ListItems),
            5 => Some(Self::TestDuplicate),
            6 => Some(Self::TestNotFound),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Stop,
}

/// A menu session over arbitrary line input and output streams.
pub struct Session<R, W, E> {
    input: R,
    out: W,
    err: E,
    registry: Registry,
    format: ListFormat,
    /// Colour the `Error:` prefix; only set when the error stream is a terminal.
    err_color: bool,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(input: R, out: W, err: E, format: ListFormat) -> Self {
        Self {
            input,
            out,
            err,
            registry: Registry::new(),
            format,
            err_color: false,
        }
    }

    pub fn with_error_color(mut self, enabled: bool) -> Self {
        self.err_color = enabled;
        self
    }

    #[cfg(test)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run until Exit is chosen or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("end of input, leaving menu");
                return Ok(());
            };

            let step = match MenuChoice::parse(&line) {
                Some(choice) => {
                    tracing::debug!(?choice, "menu selection");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.out, "Invalid choice. Try again.")?;
                    Step::Continue
                }
            };
            if step == Step::Stop {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Step> {
        match choice {
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::FindItem => self.find_item(),
            MenuChoice::RemoveItem => self.remove_item(),
            MenuChoice::ListItems => {
                self.list_items()?;
                Ok(Step::Continue)
            }
            MenuChoice::TestDuplicate => {
                SelfTest::DuplicateAddition.run_and_report(&mut self.out)?;
                Ok(Step::Continue)
            }
            MenuChoice::TestNotFound => {
                SelfTest::ItemNotFound.run_and_report(&mut self.out)?;
                Ok(Step::Continue)
            }
            MenuChoice::Exit => {
                writeln!(self.out, "Thank you for using the storage management system!")?;
                Ok(Step::Stop)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    fn add_item(&mut self) -> Result<Step> {
        let Some(id) = self.prompt("Enter item ID: ")? else {
            return Ok(Step::Stop);
        };
        let Some(description) = self.prompt("Enter item description: ")? else {
            return Ok(Step::Stop);
        };
        let Some(location) = self.prompt("Enter item location: ")? else {
            return Ok(Step::Stop);
        };

        match self.registry.add_item(Item::new(id, description, location)) {
            Ok(()) => writeln!(self.out, "Item added successfully.")?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(Step::Continue)
    }

    fn find_item(&mut self) -> Result<Step> {
        let Some(id) = self.prompt("Enter item ID to find: ")? else {
            return Ok(Step::Stop);
        };

        match self.registry.find_by_id(&ItemId::from(id)) {
            Ok(item) => writeln!(
                self.out,
                "Found: {} at {}",
                item.description(),
                item.location()
            )?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(Step::Continue)
    }

    fn remove_item(&mut self) -> Result<Step> {
        let Some(id) = self.prompt("Enter item ID to remove: ")? else {
            return Ok(Step::Stop);
        };

        match self.registry.remove_item(&ItemId::from(id)) {
            Ok(_) => writeln!(self.out, "Item removed successfully.")?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(Step::Continue)
    }

    fn list_items(&mut self) -> Result<()> {
        let items = self.registry.list_by_description();
        let rendered = list::render(&items, self.format)?;
        writeln!(self.out)?;
        writeln!(self.out, "Items in Description Order:")?;
        write!(self.out, "{rendered}")?;
        writeln!(self.out)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // I/O helpers
    // -----------------------------------------------------------------------

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "        Congo Storage Management System")?;
        writeln!(self.out, "===============================================")?;
        writeln!(self.out, "1. Add Item")?;
        writeln!(self.out, "2. Find Item by ID")?;
        writeln!(self.out, "3. Remove Item")?;
        writeln!(self.out, "4. List Items by Description")?;
        writeln!(self.out, "5. Run Duplicate Addition Test")?;
        writeln!(self.out, "6. Run Item Not Found Test")?;
        writeln!(self.out, "7. Exit")?;
        write!(self.out, "Enter choice: ")?;
        self.out.flush().context("failed to flush output")?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush().context("failed to flush output")?;
        self.read_line()
    }

    /// Next input line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn report_error(&mut self, err: &RegistryError) -> Result<()> {
        tracing::debug!(error = %err, "registry rejected request");
        if self.err_color {
            writeln!(self.err, "{} {err}", "Error:".red().bold())?;
        } else {
            writeln!(self.err, "Error: {err}")?;
        }
        Ok(())
    }
}

/// Run a session on the process's stdin / stdout / stderr.
pub fn run(format: ListFormat) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let err_color = stderr.is_terminal();
    let mut session = Session::new(stdin.lock(), stdout.lock(), stderr.lock(), format)
        .with_error_color(err_color);
    session.run()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
