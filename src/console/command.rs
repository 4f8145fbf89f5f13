//! Console command parsing

use std::str::FromStr;

use crate::error::{EntryError, Result};
use crate::export::ExportFormat;
use crate::schema::Category;

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  individual                  fill the Individual form
  add <category>              fill a form and add the row
  show [<category>|all]       show entered rows
  select <category> <index>   select a row for deletion
  delete <category>           delete the selected row
  remove <category> <index>   delete a row by index
  export [csv|xlsx]           export everything entered so far
  categories                  list categories and their fields
  help                        show this help
  quit                        end the session";

/// One console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the help text
    Help,
    /// List categories and fields
    Categories,
    /// Fill and submit a form
    Add(Category),
    /// Show one category, or every non-empty one
    Show(Option<Category>),
    /// Select a row for deletion
    Select(Category, usize),
    /// Delete the selected row
    Delete(Category),
    /// Delete a row by index
    Remove(Category, usize),
    /// Export, optionally overriding the configured format
    Export(Option<ExportFormat>),
    /// End the session
    Quit,
}

fn invalid(message: impl Into<String>) -> EntryError {
    EntryError::InvalidCommand(message.into())
}

/// Split "<category words> <index>" into its parts
fn category_and_index(args: &[&str], usage: &str) -> Result<(Category, usize)> {
    let (index, category) = args.split_last().ok_or_else(|| invalid(usage))?;
    if category.is_empty() {
        return Err(invalid(usage));
    }
    let index = index
        .parse::<usize>()
        .map_err(|_| invalid(format!("{index:?} is not a row index ({usage})")))?;
    Ok((category.join(" ").parse()?, index))
}

fn category(args: &[&str], usage: &str) -> Result<Category> {
    if args.is_empty() {
        return Err(invalid(usage));
    }
    args.join(" ").parse()
}

impl FromStr for Command {
    type Err = EntryError;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = words.split_first() else {
            return Err(invalid("empty command"));
        };

        match verb.to_lowercase().as_str() {
            "help" | "?" => Ok(Self::Help),
            "categories" => Ok(Self::Categories),
            "individual" => Ok(Self::Add(Category::Individual)),
            "add" => Ok(Self::Add(category(args, "usage: add <category>")?)),
            "show" => match args {
                [] => Ok(Self::Show(None)),
                [all] if all.eq_ignore_ascii_case("all") => Ok(Self::Show(None)),
                _ => Ok(Self::Show(Some(args.join(" ").parse()?))),
            },
            "select" => {
                let (category, index) =
                    category_and_index(args, "usage: select <category> <index>")?;
                Ok(Self::Select(category, index))
            }
            "delete" => Ok(Self::Delete(category(args, "usage: delete <category>")?)),
            "remove" => {
                let (category, index) =
                    category_and_index(args, "usage: remove <category> <index>")?;
                Ok(Self::Remove(category, index))
            }
            "export" | "download" => match args {
                [] => Ok(Self::Export(None)),
                [format] => Ok(Self::Export(Some(format.parse()?))),
                _ => Err(invalid("usage: export [csv|xlsx]")),
            },
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(invalid(format!("unknown command {other:?}, try help"))),
        }
    }
}
