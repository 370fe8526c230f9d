//! Console output formatter for chat turns

use colored::Colorize;
use somdet_domain::{PersonaTemplate, Role, Turn};

const USER_LABEL: &str = "คุณ";

/// Formats turns and persona texts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Persona header shown at the top of the chat
    pub fn header() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "═".repeat(46).blue()));
        output.push_str(&format!("  {}\n", PersonaTemplate::NAME.bold()));
        output.push_str(&format!("  {}\n", PersonaTemplate::TAGLINE.dimmed()));
        output.push_str(&format!("{}\n", "═".repeat(46).blue()));
        output
    }

    /// Greeting shown while the conversation is empty
    pub fn greeting() -> String {
        let lines = PersonaTemplate::greeting();
        let mut output = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                output.push_str(&format!("{}\n", line.bold()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
        output
    }

    /// Input hint and command reminder shown above the first prompt
    pub fn input_hint() -> String {
        format!(
            "{}\n{}\n",
            PersonaTemplate::INPUT_HINT.dimmed(),
            "/help for commands, /quit to exit".dimmed()
        )
    }

    /// One turn, labelled with its speaker
    pub fn format_turn(turn: &Turn) -> String {
        let label = match turn.role() {
            Role::User => format!("{} ›", USER_LABEL).cyan().bold(),
            Role::Model => format!("{} ›", PersonaTemplate::NAME).yellow().bold(),
        };
        format!("{}\n{}\n", label, turn.content())
    }

    /// All turns in display order, separated by blank lines
    pub fn format_conversation(turns: &[Turn]) -> String {
        turns
            .iter()
            .map(Self::format_turn)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Transcript as pretty JSON
    pub fn format_json(turns: &[Turn]) -> String {
        serde_json::to_string_pretty(turns).unwrap_or_else(|_| "[]".to_string())
    }
}
