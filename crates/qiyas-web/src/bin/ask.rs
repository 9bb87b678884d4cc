//! Interactive terminal client: asks the backend through the relay and
//! prints each answer as plain text.
//!
//! Run with: cargo run -p qiyas-web --bin qiyas-ask

use std::io::Write;

use qiyas_config::Config;
use qiyas_web::{
    presentation::{AskCycle, Templates},
    relay::Relay,
};
use tokio::io::{AsyncBufReadExt, BufReader};

fn is_exit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q")
}

fn prompt() -> std::io::Result<()> {
    print!("\nYour question: ");
    std::io::stdout().flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    qiyas_web::logging::init_tracing(&config.log.filter)?;

    let relay = Relay::new(&config.backend)?;
    let templates = Templates::new()?;

    println!("\nWelcome to the Islamic AI Assistant!");
    println!("You can ask questions about Islamic topics. Type 'quit' to exit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let question = line.trim();

        if is_exit(question) {
            break;
        }
        if question.is_empty() {
            println!("Please ask a question.");
            prompt()?;
            continue;
        }

        let mut cycle = AskCycle::new(question);
        cycle.submit(&relay).await;
        print!("{}", templates.render_text(&cycle)?);
        prompt()?;
    }

    println!("\nThank you for using the Islamic AI Assistant. Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_words_are_case_insensitive() {
        assert!(is_exit("quit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit("Q"));
        assert!(!is_exit("quite"));
        assert!(!is_exit(""));
    }
}
