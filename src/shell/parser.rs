//! Turns a typed line into a [`ShellCommand`].
//!
//! Catalog mutations are mapped straight onto the store's [`Command`] set; the
//! remaining variants are view-only actions handled by the session.

use crate::{
    core::{
        actions::RentalPeriod,
        query::{PriceBound, SortMode},
        store::Command,
    },
    entities::Color,
    errors::{Error, Result},
};

/// Everything the user can type at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Re-render the current page
    List,
    /// A state transition for the catalog store
    Catalog(Command),
    /// Raw price text; unparseable input leaves the bound alone
    PriceText(PriceBound, String),
    /// Placeholder booking for the open bag
    Book(Option<RentalPeriod>),
    /// Placeholder contact for the open bag
    Contact,
    /// Pickup, payment and rental notes
    Info,
    /// Command reference
    Help,
    /// End the session
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
/// Returns `Error::UnknownCommand` for an unrecognised first word and
/// `Error::InvalidArgument` / `Error::InvalidRentalPeriod` when a known command
/// gets arguments it cannot use.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    let Some((word, rest)) = split_command(line) else {
        return Ok(None);
    };

    let command = match word.to_lowercase().as_str() {
        "list" | "ls" | "show" => ShellCommand::List,
        "search" | "find" => ShellCommand::Catalog(Command::SetSearchText(rest.to_string())),
        "color" | "colour" => {
            let color = rest
                .parse::<Color>()
                .map_err(|message| invalid("color", message))?;
            ShellCommand::Catalog(Command::ToggleColor(color))
        }
        "min" => ShellCommand::PriceText(PriceBound::Min, rest.to_string()),
        "max" => ShellCommand::PriceText(PriceBound::Max, rest.to_string()),
        "sort" => {
            let mode = rest
                .parse::<SortMode>()
                .map_err(|message| invalid("sort", message))?;
            ShellCommand::Catalog(Command::SetSortMode(mode))
        }
        "reset" => ShellCommand::Catalog(Command::ResetFilters),
        "page" => {
            let page = rest
                .parse::<usize>()
                .map_err(|_| invalid("page", format!("'{rest}' is not a page number")))?;
            ShellCommand::Catalog(Command::SetPage(page))
        }
        "next" => ShellCommand::Catalog(Command::NextPage),
        "prev" | "previous" => ShellCommand::Catalog(Command::PrevPage),
        "details" | "detail" | "open" => {
            let id = rest
                .parse::<u32>()
                .map_err(|_| invalid("details", format!("'{rest}' is not a bag id")))?;
            ShellCommand::Catalog(Command::SelectRecord(Some(id)))
        }
        "close" => ShellCommand::Catalog(Command::SelectRecord(None)),
        "clear" => ShellCommand::Catalog(Command::ClearSelection),
        "book" => ShellCommand::Book(parse_period(rest)?),
        "contact" => ShellCommand::Contact,
        "info" => ShellCommand::Info,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => {
            return Err(Error::UnknownCommand {
                input: word.to_string(),
            });
        }
    };

    Ok(Some(command))
}

fn split_command(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(
        line.split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim())),
    )
}

fn parse_period(rest: &str) -> Result<Option<RentalPeriod>> {
    let dates: Vec<&str> = rest.split_whitespace().collect();
    match dates.as_slice() {
        [] => Ok(None),
        [start, end] => RentalPeriod::parse(start, end).map(Some),
        _ => Err(invalid(
            "book",
            "expected no dates or a start and end date (YYYY-MM-DD)".to_string(),
        )),
    }
}

fn invalid(command: &'static str, message: String) -> Error {
    Error::InvalidArgument { command, message }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   \t").unwrap().is_none());
    }

    #[test]
    fn test_search_keeps_inner_spacing_and_allows_empty() {
        assert_eq!(
            parse("search  gold  clutch "),
            ShellCommand::Catalog(Command::SetSearchText("gold  clutch".to_string()))
        );
        assert_eq!(
            parse("search"),
            ShellCommand::Catalog(Command::SetSearchText(String::new()))
        );
    }

    #[test]
    fn test_filter_commands() {
        assert_eq!(
            parse("color gold"),
            ShellCommand::Catalog(Command::ToggleColor(Color::Gold))
        );
        assert_eq!(
            parse("MIN 100"),
            ShellCommand::PriceText(PriceBound::Min, "100".to_string())
        );
        assert_eq!(
            parse("max lots"),
            ShellCommand::PriceText(PriceBound::Max, "lots".to_string())
        );
        assert_eq!(
            parse("sort price-desc"),
            ShellCommand::Catalog(Command::SetSortMode(SortMode::PriceDescending))
        );
        assert_eq!(parse("reset"), ShellCommand::Catalog(Command::ResetFilters));
    }

    #[test]
    fn test_paging_and_selection_commands() {
        assert_eq!(parse("page 0"), ShellCommand::Catalog(Command::SetPage(0)));
        assert_eq!(parse("next"), ShellCommand::Catalog(Command::NextPage));
        assert_eq!(parse("prev"), ShellCommand::Catalog(Command::PrevPage));
        assert_eq!(
            parse("details 12"),
            ShellCommand::Catalog(Command::SelectRecord(Some(12)))
        );
        assert_eq!(
            parse("close"),
            ShellCommand::Catalog(Command::SelectRecord(None))
        );
        assert_eq!(parse("clear"), ShellCommand::Catalog(Command::ClearSelection));
    }

    #[test]
    fn test_book_dates() {
        assert_eq!(parse("book"), ShellCommand::Book(None));
        let ShellCommand::Book(Some(period)) = parse("book 2026-11-01 2026-11-02") else {
            panic!("expected a rental period");
        };
        assert_eq!(period.days(), 2);

        assert!(matches!(
            parse_line("book 2026-11-01"),
            Err(Error::InvalidArgument { command: "book", .. })
        ));
        assert!(matches!(
            parse_line("book 2026-11-02 2026-11-01"),
            Err(Error::InvalidRentalPeriod { .. })
        ));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            parse_line("color purple"),
            Err(Error::InvalidArgument { command: "color", .. })
        ));
        assert!(matches!(
            parse_line("page two"),
            Err(Error::InvalidArgument { command: "page", .. })
        ));
        assert!(matches!(
            parse_line("details"),
            Err(Error::InvalidArgument {
                command: "details",
                ..
            })
        ));
        assert!(matches!(
            parse_line("sort oldest"),
            Err(Error::InvalidArgument { command: "sort", .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("rent 5").unwrap_err();
        assert!(matches!(err, Error::UnknownCommand { ref input } if input == "rent"));
    }
}
