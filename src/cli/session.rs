//! Interactive expense session
//!
//! A session owns one in-memory store. Each input line is a command that
//! stands in for a user action (submitting the form, clicking edit or delete,
//! sorting, filtering) and is followed by the same re-render the action would
//! trigger.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_register};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_instant, Expense, ExpenseId, ExpenseRecord};
use crate::reports::CategorySummary;
use crate::store::{CommitOutcome, ExpenseStore};

use super::tokenize::split_line;

/// One parsed session line
#[derive(Parser, Debug)]
#[command(
    name = "expenses",
    no_binary_name = true,
    disable_version_flag = true,
    disable_help_flag = true,
    subcommand_required = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Session commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Submit an expense (replaces the one being edited, otherwise adds it)
    #[command(alias = "submit")]
    Add {
        /// What the expense was for
        #[arg(allow_hyphen_values = true)]
        name: String,
        /// Amount (e.g. "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date (YYYY-MM-DD)
        date: String,
        /// Category label
        #[arg(allow_hyphen_values = true)]
        category: String,
    },

    /// Load an expense for editing; the next 'add' replaces it
    Edit {
        /// Expense ID (e.g. "exp-3" or "3")
        id: String,
    },

    /// Abandon the pending edit
    Cancel,

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// Sort by date, alternating oldest-first and newest-first
    Sort,

    /// Show expenses dated within a range (both ends included)
    Filter {
        /// First date (YYYY-MM-DD)
        start: String,
        /// Last date (YYYY-MM-DD)
        end: String,
    },

    /// Show all expenses
    #[command(alias = "ls")]
    List,

    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },

    /// Show the total of all expenses
    Total,

    /// Show totals per category
    Summary,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Quit,
}

/// What a session line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Blank line or `#` comment
    Blank,
    /// A request for help, with the rendered help text
    Help(String),
    /// A command to execute
    Command(SessionCommand),
}

/// Parse a session line
pub fn parse_command(line: &str) -> ExpenseResult<SessionInput> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(SessionInput::Blank);
    }

    let words = split_line(trimmed)?;
    match SessionLine::try_parse_from(words) {
        Ok(parsed) => Ok(SessionInput::Command(parsed.command)),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Ok(SessionInput::Help(e.to_string()))
            }
            _ => {
                let message = e.to_string();
                Err(ExpenseError::Command(
                    message.trim_start_matches("error: ").trim_end().to_string(),
                ))
            }
        },
    }
}

/// An expense tracking session over an in-memory store
pub struct Session<'a> {
    store: ExpenseStore,
    settings: &'a Settings,
}

impl<'a> Session<'a> {
    /// Start a session with an empty store
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            store: ExpenseStore::new(),
            settings,
        }
    }

    /// The session's store
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Read and execute commands until end of input or `quit`
    ///
    /// Used for scripts and piped input. Command mistakes and unknown ids are
    /// reported on `out` and the session carries on; only I/O failures end it
    /// early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> ExpenseResult<()> {
        info!(interactive = false, "Session started");

        for line in input.lines() {
            if self.handle_line(&line?, out)? == SessionFlow::Quit {
                break;
            }
        }

        info!(expenses = self.store.len(), "Session ended");
        Ok(())
    }

    /// Interactive loop on a line editor with history
    ///
    /// Ctrl-C and Ctrl-D end the session like `quit`.
    pub fn run_interactive<W: Write>(
        &mut self,
        editor: &mut DefaultEditor,
        out: &mut W,
    ) -> ExpenseResult<()> {
        info!(interactive = true, "Session started");

        while let Some(line) = next_edited_line(editor.readline(&self.settings.prompt))? {
            if !line.trim().is_empty() {
                editor.add_history_entry(line.as_str())?;
            }
            if self.handle_line(&line, out)? == SessionFlow::Quit {
                break;
            }
        }

        info!(expenses = self.store.len(), "Session ended");
        Ok(())
    }

    /// Execute a line, reporting recoverable errors on `out`
    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> ExpenseResult<SessionFlow> {
        match self.execute_line(line, out) {
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "Command rejected");
                writeln!(out, "{}", e)?;
                Ok(SessionFlow::Continue)
            }
            result => result,
        }
    }

    /// Parse and execute a single line
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> ExpenseResult<SessionFlow> {
        match parse_command(line)? {
            SessionInput::Command(command) => self.execute(command, out),
            SessionInput::Help(text) => {
                write!(out, "{}", text)?;
                Ok(SessionFlow::Continue)
            }
            SessionInput::Blank => Ok(SessionFlow::Continue),
        }
    }

    /// Execute a parsed command
    pub fn execute<W: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut W,
    ) -> ExpenseResult<SessionFlow> {
        debug!(?command, "Executing session command");

        match command {
            SessionCommand::Add {
                name,
                amount,
                date,
                category,
            } => {
                let expense = Expense::from_input(&name, &amount, &date, &category);
                match self.store.commit_edit(expense) {
                    CommitOutcome::Added(id) => writeln!(out, "Added {}", id)?,
                    CommitOutcome::Replaced(id) => writeln!(out, "Updated {}", id)?,
                }
                self.render_after_change(out)?;
            }

            SessionCommand::Edit { id } => {
                let id = parse_id(&id)?;
                let expense = self
                    .store
                    .begin_edit(id)
                    .cloned()
                    .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

                write!(out, "{}", format_expense_details(&ExpenseRecord::new(id, expense)))?;
                writeln!(
                    out,
                    "Editing {}. The next 'add' replaces it; 'cancel' abandons the edit.",
                    id
                )?;
            }

            SessionCommand::Cancel => match self.store.edit_state().target() {
                Some(id) => {
                    self.store.cancel_edit();
                    writeln!(out, "Edit of {} cancelled.", id)?;
                }
                None => writeln!(out, "No edit in progress.")?,
            },

            SessionCommand::Delete { id } => {
                let id = parse_id(&id)?;
                self.store
                    .remove(id)
                    .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

                writeln!(out, "Deleted {}", id)?;
                self.render_after_change(out)?;
            }

            SessionCommand::Sort => {
                let direction = self.store.next_sort_direction();
                self.store.sort_by_date_toggled();

                writeln!(out, "Sorted by date ({})", direction)?;
                self.render_after_change(out)?;
            }

            SessionCommand::Filter { start, end } => {
                let filtered = match (parse_instant(&start), parse_instant(&end)) {
                    (Some(start), Some(end)) => self.store.filter_by_date_range(start, end),
                    _ => {
                        // An unreadable bound matches nothing
                        warn!(%start, %end, "Unreadable filter bound");
                        Vec::new()
                    }
                };

                writeln!(out, "Expenses from {} to {}:", start, end)?;
                write!(out, "{}", format_expense_register(&filtered, self.settings.name_width))?;
                writeln!(out, "Filtered total: {}", ExpenseStore::total_of(&filtered))?;
            }

            SessionCommand::List => {
                write!(
                    out,
                    "{}",
                    format_expense_register(self.store.records(), self.settings.name_width)
                )?;
            }

            SessionCommand::Show { id } => {
                let id = parse_id(&id)?;
                let expense = self
                    .store
                    .get(id)
                    .cloned()
                    .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

                write!(out, "{}", format_expense_details(&ExpenseRecord::new(id, expense)))?;
            }

            SessionCommand::Total => {
                writeln!(out, "Total: {}", self.store.total())?;
            }

            SessionCommand::Summary => {
                write!(out, "{}", CategorySummary::generate(&self.store).format_terminal())?;
            }

            SessionCommand::Quit => return Ok(SessionFlow::Quit),
        }

        Ok(SessionFlow::Continue)
    }

    /// Full re-render: register, total, and category breakdown
    fn render_after_change<W: Write>(&self, out: &mut W) -> ExpenseResult<()> {
        if !self.settings.render_after_change {
            return Ok(());
        }

        write!(
            out,
            "{}",
            format_expense_register(self.store.records(), self.settings.name_width)
        )?;

        let summary = CategorySummary::generate(&self.store);
        if !summary.is_empty() {
            writeln!(out, "By category:")?;
            summary.write_lines(out)?;
        }

        Ok(())
    }
}

/// The next line from the editor, or `None` once the user leaves
fn next_edited_line(read: Result<String, ReadlineError>) -> ExpenseResult<Option<String>> {
    match read {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_id(text: &str) -> ExpenseResult<ExpenseId> {
    text.parse()
        .map_err(|_| ExpenseError::Command(format!("Invalid expense ID: {}", text)))
}
