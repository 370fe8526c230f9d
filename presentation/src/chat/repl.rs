//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::progress::reporter::SpinnerProgress;
use crate::ConsoleFormatter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use somdet_application::{ConversationController, SubmitOutcome};
use tracing::debug;

const PROMPT: &str = "> ";

/// What the loop does after a slash command
#[derive(Debug, PartialEq, Eq)]
enum CommandResult {
    Continue,
    Exit,
}

/// Interactive chat REPL
///
/// Lines are read one at a time and each submission is awaited before the
/// next prompt, so no input is accepted while a reply is outstanding.
/// History is kept in memory only.
pub struct ChatRepl {
    controller: ConversationController,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(controller: ConversationController) -> Self {
        Self {
            controller,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Set whether to show the spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let input = line.trim();

                    // Skip empty lines
                    if input.is_empty() {
                        continue;
                    }

                    if input.starts_with('/') {
                        match self.handle_command(input) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => continue,
                        }
                    }

                    let _ = rl.add_history_entry(input);

                    self.process_message(&line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("แล้วพบกันใหม่ครับ");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        print!("{}", ConsoleFormatter::header());
        println!();
        if self.controller.is_empty() {
            print!("{}", ConsoleFormatter::greeting());
            println!();
        }
        print!("{}", ConsoleFormatter::input_hint());
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /history          - Show the conversation so far");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    fn handle_command(&self, cmd: &str) -> CommandResult {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("แล้วพบกันใหม่ครับ");
                CommandResult::Exit
            }
            "/help" | "/h" | "/?" => {
                Self::print_help();
                CommandResult::Continue
            }
            "/history" => {
                println!();
                let turns = self.controller.turns();
                if turns.is_empty() {
                    println!("{}", "(no messages yet)".dimmed());
                } else {
                    println!("{}", ConsoleFormatter::format_conversation(&turns));
                }
                CommandResult::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandResult::Continue
            }
        }
    }

    async fn process_message(&self, text: &str) {
        println!();

        let outcome = if self.config.show_progress {
            let progress = SpinnerProgress::new();
            self.controller.submit_with_progress(text, &progress).await
        } else {
            self.controller.submit(text).await
        };

        match outcome {
            SubmitOutcome::Replied(turn) => {
                println!("{}", ConsoleFormatter::format_turn(&turn));
            }
            SubmitOutcome::Rejected(reason) => {
                debug!("Submission rejected: {:?}", reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use somdet_application::{FetchError, ReplyFetcher};
    use somdet_domain::{Role, Turn};
    use std::sync::Arc;

    struct EchoFetcher;

    #[async_trait]
    impl ReplyFetcher for EchoFetcher {
        async fn fetch(&self, user_text: &str) -> Result<String, FetchError> {
            Ok(format!("echo: {}", user_text))
        }
    }

    fn repl() -> ChatRepl {
        ChatRepl::new(ConversationController::new(Arc::new(EchoFetcher))).with_progress(false)
    }

    #[test]
    fn test_quit_commands_exit() {
        let repl = repl();
        for cmd in ["/quit", "/exit", "/q"] {
            assert_eq!(repl.handle_command(cmd), CommandResult::Exit);
        }
    }

    #[test]
    fn test_other_commands_continue() {
        let repl = repl();
        for cmd in ["/help", "/h", "/?", "/history", "/unknown"] {
            assert_eq!(repl.handle_command(cmd), CommandResult::Continue);
        }
    }

    #[tokio::test]
    async fn test_process_message_records_turns() {
        let repl = repl();
        repl.process_message("hello").await;

        let turns = repl.controller.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], Turn::user("hello"));
        assert_eq!(turns[1].role(), Role::Model);
        assert_eq!(turns[1].content(), "echo: hello");
    }

    #[test]
    fn test_with_config_overrides_progress() {
        let repl = repl().with_config(ReplConfig {
            show_progress: true,
        });
        assert!(repl.config.show_progress);
    }
}
