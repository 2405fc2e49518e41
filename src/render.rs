//! Text rendering for the menu, the catalog listing and the issued history.
//!
//! Every function here is pure: it builds a `String` and leaves printing to the
//! caller.

use crate::catalog::Command;

const RULE: &str = "------------------------------------------------------------";

const MENU_ENTRIES: [(&str, &str); 6] = [
    ("i", "Issue a random command"),
    ("u", "Undo the last command"),
    ("r", "Redo the last undone command"),
    ("l", "List all possible commands from JSON"),
    ("h", "Show command history"),
    ("q", "Quit"),
];

/// Static help text listing every recognized menu symbol.
pub fn render_menu() -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Welcome to General Cavazos Commander App\n");
    out.push_str(RULE);
    out.push('\n');
    for (symbol, summary) in MENU_ENTRIES {
        out.push_str(&format!("{symbol}  {summary}\n"));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Numbered table of the catalog, numbering from 0 in load order.
///
/// `None` and an empty slice both render the "no commands" notice.
pub fn render_catalog(commands: Option<&[Command]>) -> String {
    let commands = match commands {
        Some(c) if !c.is_empty() => c,
        _ => return "No commands to display.\n".to_string(),
    };

    let rows: String = commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("{:02}\t{}\n", i, cmd))
        .collect();
    format!("Number\tCommand\n------\t---------------\n{rows}")
}

/// Numbered list of issued commands, numbering from 1.
///
/// Items are printed in the order given; callers pass them most recent first.
pub fn render_history<'a, I>(items: Option<I>) -> String
where
    I: IntoIterator<Item = &'a Command>,
{
    let rows: String = items
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(i, cmd)| format!("{}. {}\n", i + 1, cmd))
        .collect();
    if rows.is_empty() {
        return "No commands have been issued yet.\n".to_string();
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_symbol() {
        let menu = render_menu();
        assert!(menu.contains("Welcome to General Cavazos Commander App"));
        for symbol in ["i", "u", "r", "l", "h", "q"] {
            assert!(
                menu.lines().any(|l| l.starts_with(&format!("{symbol}  "))),
                "menu is missing {symbol}"
            );
        }
    }

    #[test]
    fn test_catalog_rows_are_zero_padded_from_zero() {
        let commands: Vec<Command> = vec!["march".into(), "retreat".into()];
        assert_eq!(
            render_catalog(Some(&commands)),
            "Number\tCommand\n------\t---------------\n00\tmarch\n01\tretreat\n"
        );
    }

    #[test]
    fn test_empty_or_absent_catalog_renders_notice() {
        assert_eq!(render_catalog(Some(&[][..])), "No commands to display.\n");
        assert_eq!(render_catalog(None), "No commands to display.\n");
    }

    #[test]
    fn test_history_is_numbered_from_one() {
        let items: Vec<Command> = vec!["flank".into(), "retreat".into()];
        assert_eq!(render_history(Some(&items)), "1. flank\n2. retreat\n");
    }

    #[test]
    fn test_empty_or_absent_history_renders_notice() {
        let empty: Vec<Command> = Vec::new();
        assert_eq!(
            render_history(Some(&empty)),
            "No commands have been issued yet.\n"
        );
        assert_eq!(
            render_history::<&Vec<Command>>(None),
            "No commands have been issued yet.\n"
        );
    }
}
