//! Interactive entry surface
//!
//! A line-oriented console over any reader/writer pair. It gates access with
//! the shared secret, then reads commands, fills forms field by field and
//! re-renders the affected table after every change.

pub mod command;
pub mod render;

pub use command::Command;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::auth::AccessGate;
use crate::common::traits::CategoryCollection;
use crate::config::EntryConfig;
use crate::error::Result;
use crate::export::{ExportFormat, ExportOutcome, Exporter};
use crate::schema::{Category, FieldSpec, UNSELECTED};
use crate::session::{RowDraft, Session};

/// Console session over an input and an output stream
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    gate: AccessGate,
    session: Session,
    exporter: Exporter,
    export_dir: PathBuf,
    default_format: ExportFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Console configured from an [`EntryConfig`], starting a fresh session
    pub fn new(input: R, output: W, config: &EntryConfig) -> Self {
        Self {
            input,
            output,
            gate: AccessGate::new(config.access_secret.clone()),
            session: Session::new(),
            exporter: config.exporter(),
            export_dir: config.export_dir.clone(),
            default_format: config.default_format,
        }
    }

    /// Replace the exporter, e.g. to pin the date used in file names
    #[must_use]
    pub fn with_exporter(mut self, exporter: Exporter) -> Self {
        self.exporter = exporter;
        self
    }

    /// The session driven by this console
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Output stream written so far
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consume the console, returning its output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        if !self.unlock()? {
            return Ok(());
        }

        writeln!(self.output, "Phenopacket entry. Type help for commands.")?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Err(e) = self.execute(command) {
                        writeln!(self.output, "Error: {e}")?;
                    }
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }

        log::info!(
            "Session ended with {} rows entered",
            self.session.store().total_rows()
        );
        Ok(())
    }

    /// Ask for the secret until it matches; end of input denies access
    fn unlock(&mut self) -> Result<bool> {
        if !self.gate.is_configured() {
            writeln!(self.output, "Access is not configured.")?;
            return Ok(false);
        }

        loop {
            write!(self.output, "Enter password: ")?;
            self.output.flush()?;
            let Some(candidate) = self.read_line()? else {
                writeln!(self.output, "Access denied.")?;
                return Ok(false);
            };
            if self.gate.attempt(&candidate) {
                return Ok(true);
            }
            writeln!(self.output, "Incorrect password.")?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Run one command against the session
    pub fn execute(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Help => writeln!(self.output, "{}", command::HELP)?,
            Command::Categories => render::render_catalog(&mut self.output)?,
            Command::Add(category) => self.add(category)?,
            Command::Show(Some(category)) => self.show(category)?,
            Command::Show(None) => {
                let categories = self.session.store().non_empty_categories();
                if categories.is_empty() {
                    writeln!(self.output, "No rows entered yet.")?;
                }
                for category in categories {
                    self.show(category)?;
                }
            }
            Command::Select(category, index) => {
                self.session.select(category, index)?;
                self.show(category)?;
            }
            Command::Delete(category) => {
                if self.session.delete_selected(category).is_none() {
                    writeln!(self.output, "No row selected in {category}.")?;
                }
                self.show(category)?;
            }
            Command::Remove(category, index) => {
                self.session.remove(category, index);
                self.show(category)?;
            }
            Command::Export(format) => self.export(format.unwrap_or(self.default_format))?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn show(&mut self, category: Category) -> Result<()> {
        render::render_table(
            &mut self.output,
            category,
            self.session.store().rows(category),
            self.session.selected(category),
        )
    }

    fn add(&mut self, category: Category) -> Result<()> {
        writeln!(self.output, "{category} (empty input keeps the shown value)")?;
        let Some(draft) = self.fill_form(category)? else {
            writeln!(self.output, "Form abandoned.")?;
            return Ok(());
        };
        let id = self.session.submit(draft)?;
        writeln!(self.output, "Added {id} to {category}.")?;
        self.show(category)
    }

    /// Prompt for every field of a form; `None` if input ends first
    fn fill_form(&mut self, category: Category) -> Result<Option<RowDraft>> {
        let mut draft = self.session.draft(category);

        for field in category.fields() {
            let current = draft.get(field.name).unwrap_or_default().to_string();
            if !draft.is_editable(field.name) {
                writeln!(self.output, "  {}: {current} (current individual)", field.name)?;
                continue;
            }

            loop {
                if let Some(choices) = field.kind.choices() {
                    writeln!(self.output, "  {}:", field.name)?;
                    render::render_choices(&mut self.output, choices)?;
                }
                write!(self.output, "  {} [{current}]: ", field.name)?;
                self.output.flush()?;

                let Some(answer) = self.read_line()? else {
                    return Ok(None);
                };
                let answer = answer.trim();
                if answer.is_empty() {
                    break;
                }

                match draft.set(field.name, resolve_answer(field, answer)) {
                    Ok(()) => break,
                    Err(e) => writeln!(self.output, "  {e}")?,
                }
            }
        }
        Ok(Some(draft))
    }

    fn export(&mut self, format: ExportFormat) -> Result<()> {
        match self.session.export(&self.exporter, format)? {
            ExportOutcome::NothingToExport => {
                writeln!(self.output, "No data to export yet.")?;
            }
            ExportOutcome::Artifact(artifact) => {
                let path = artifact.write_to_dir(&self.export_dir)?;
                writeln!(
                    self.output,
                    "Exported {} rows to {}",
                    artifact.rows,
                    path.display()
                )?;
            }
        }
        Ok(())
    }
}

/// Map a typed answer onto a field value
///
/// For choice fields a number picks from the listed options (`0` is
/// unselected) and labels match case-insensitively. Anything else is passed
/// through for validation.
fn resolve_answer(field: &FieldSpec, answer: &str) -> String {
    let Some(choices) = field.kind.choices() else {
        return answer.to_string();
    };

    if let Ok(number) = answer.parse::<usize>() {
        return match number {
            0 => UNSELECTED.to_string(),
            n => choices
                .get(n - 1)
                .map_or_else(|| answer.to_string(), |choice| (*choice).to_string()),
        };
    }

    choices
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(answer))
        .map_or_else(|| answer.to_string(), |choice| (*choice).to_string())
}
