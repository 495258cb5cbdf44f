use colored::Colorize;
use console::Term;
use itemz::api::{CmdMessage, CmdResult, MessageLevel};
use itemz::error::Result;
use itemz::model::Item;

const SEPARATOR_WIDTH: usize = 20;

const BANNER: &str = r#"
  ____   ____    _   _   ____       ____   _       ___
 / ___| |  _ \  | | | | |  _ \     / ___| | |     |_ _|
| |     | |_) | | | | | | | | |   | |     | |      | |
| |___  |  _ <  | |_| | | |_| |   | |___  | |___   | |
 \____| |_| \_\  \___/  |____/     \____| |_____| |___|
"#;

/// Clear the screen and draw the banner. Skipped when stdout is not a terminal.
pub(super) fn show_banner() {
    let term = Term::stdout();
    if !term.is_term() {
        return;
    }
    let _ = term.clear_screen();
    println!("{}", BANNER.yellow());
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// Messages first, then each item as pretty JSON.
pub(super) fn print_result(result: &CmdResult) -> Result<()> {
    print_messages(&result.messages);
    for item in &result.items {
        println!("{}", item_json(item)?.cyan());
    }
    Ok(())
}

pub(super) fn print_item_list(result: &CmdResult) {
    if result.items.is_empty() {
        print_messages(&result.messages);
        return;
    }
    println!("{}", "Items:".green());
    for item in &result.items {
        for line in item_lines(item) {
            println!("{}", line.cyan());
        }
    }
}

fn item_json(item: &Item) -> Result<String> {
    Ok(serde_json::to_string_pretty(item)?)
}

fn item_lines(item: &Item) -> Vec<String> {
    vec![
        format!("ID: {}", item.id),
        format!("Name: {}", item.name),
        format!("Description: {}", item.description),
        "-".repeat(SEPARATOR_WIDTH),
    ]
}
