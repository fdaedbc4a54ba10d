//! Built-in demonstration self-tests (menu actions 5 and 6, `congo selftest`).
//!
//! Each run builds its own throwaway [`Registry`]; the interactive session's
//! registry is never touched.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use congo_core::{Item, ItemId, Registry, RegistryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfTest {
    /// Adding a second item under an existing id must fail with `DuplicateItem`.
    DuplicateAddition,
    /// Looking up an unknown id must fail with `ItemNotFound`.
    ItemNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfTestOutcome {
    /// Carries the message of the expected error.
    Passed { message: String },
    Failed { reason: String },
}

impl SelfTestOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, SelfTestOutcome::Passed { .. })
    }
}

impl SelfTest {
    pub const ALL: [SelfTest; 2] = [SelfTest::DuplicateAddition, SelfTest::ItemNotFound];

    pub fn name(self) -> &'static str {
        match self {
            SelfTest::DuplicateAddition => "testDuplicateAddition",
            SelfTest::ItemNotFound => "testItemNotFound",
        }
    }

    pub fn run(self) -> SelfTestOutcome {
        let mut registry = Registry::new();
        let outcome = match self {
            SelfTest::DuplicateAddition => duplicate_addition(&mut registry),
            SelfTest::ItemNotFound => item_not_found(&registry),
        };
        tracing::debug!(test = self.name(), passed = outcome.passed(), "self-test finished");
        outcome
    }

    /// Run and write `Running …` plus the outcome line to `out`.
    pub fn run_and_report(self, out: &mut impl Write) -> io::Result<SelfTestOutcome> {
        writeln!(out)?;
        writeln!(out, "Running {}...", self.name())?;
        let outcome = self.run();
        match &outcome {
            SelfTestOutcome::Passed { message } => {
                writeln!(out, "{} {message}", "Passed:".green().bold())?
            }
            SelfTestOutcome::Failed { reason } => {
                writeln!(out, "{} {reason}", "Test Failed:".red().bold())?
            }
        }
        Ok(outcome)
    }
}

fn duplicate_addition(registry: &mut Registry) -> SelfTestOutcome {
    if let Err(err) = registry.add_item(Item::new("ID1", "Test Item", "Shelf A")) {
        return SelfTestOutcome::Failed {
            reason: format!("first addition was rejected: {err}"),
        };
    }
    match registry.add_item(Item::new("ID1", "Duplicate Test Item", "Shelf B")) {
        Err(err @ RegistryError::DuplicateItem { .. }) => SelfTestOutcome::Passed {
            message: err.to_string(),
        },
        Err(other) => SelfTestOutcome::Failed {
            reason: format!("unexpected error: {other}"),
        },
        Ok(()) => SelfTestOutcome::Failed {
            reason: "DuplicateItem error not returned.".to_string(),
        },
    }
}

fn item_not_found(registry: &Registry) -> SelfTestOutcome {
    match registry.find_by_id(&ItemId::from("NON_EXISTENT_ID")) {
        Err(err @ RegistryError::ItemNotFound { .. }) => SelfTestOutcome::Passed {
            message: err.to_string(),
        },
        Err(other) => SelfTestOutcome::Failed {
            reason: format!("unexpected error: {other}"),
        },
        Ok(_) => SelfTestOutcome::Failed {
            reason: "ItemNotFound error not returned.".to_string(),
        },
    }
}

/// `congo selftest`: run every self-test, fail if any did.
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut failed = 0usize;
    for test in SelfTest::ALL {
        let outcome = test
            .run_and_report(&mut out)
            .context("failed to write self-test report")?;
        if !outcome.passed() {
            failed += 1;
        }
    }
    out.flush().context("failed to flush stdout")?;

    if failed > 0 {
        bail!("{failed} of {} self-tests failed", SelfTest::ALL.len());
    }
    Ok(())
}
