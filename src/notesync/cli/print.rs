use colored::Colorize;
use notesync::commands::{CmdMessage, CmdResult, MessageLevel};
use notesync::error::NotesError;
use notesync::index::DisplayNote;
use notesync::state::ClientState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const EDIT_MARKER: &str = "✎";

pub fn print_result(result: &CmdResult) {
    if let Some(notes) = &result.listed_notes {
        print_notes(notes);
    }
    print_messages(&result.messages);
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_error(err: &NotesError) {
    eprintln!("{} {}", "Error:".red().bold(), err);
}

pub fn print_notes(notes: &[DisplayNote]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }

    for dn in notes {
        let marker = if dn.editing { EDIT_MARKER } else { " " };
        let left = format!("{} {:>3}. ", marker, dn.position);
        let name = dn.note.name.as_str();
        let used = left.width() + name.width() + 2;
        let description = truncate_to_width(&dn.note.description, LINE_WIDTH.saturating_sub(used));

        println!(
            "{}{}  {}",
            left.yellow(),
            name.bold(),
            description.dimmed()
        );
    }
}

pub fn prompt(state: &ClientState) -> String {
    match state.editing() {
        Some(note) => format!("[editing {}]> ", note.name),
        None => "> ".to_string(),
    }
}

fn truncate_to_width(text: &str, max: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.width() <= max {
        return single_line;
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in single_line.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_descriptions() {
        let text = "a".repeat(50);
        let truncated = truncate_to_width(&text, 10);
        assert_eq!(truncated.width(), 10);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn keeps_short_descriptions_on_one_line() {
        assert_eq!(truncate_to_width("milk\neggs", 40), "milk eggs");
    }

    #[test]
    fn counts_wide_characters() {
        let truncated = truncate_to_width("日本語のメモです", 7);
        assert!(truncated.width() <= 7);
    }
}
