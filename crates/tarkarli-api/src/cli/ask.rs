//! One-shot question to the relay, printed to the terminal.

use anyhow::Result;
use console::style;

use tarkarli_types::chat::{ChatRequest, ChatResponseBody, ChatTurn};

use crate::state::AppState;

/// Relay a single user turn and print the reply.
///
/// Goes through the same prompt assembly, upstream call and fallback path as
/// the HTTP endpoint.
pub async fn ask(
    state: &AppState,
    message: String,
    location: Option<String>,
    json: bool,
) -> Result<()> {
    let request = ChatRequest::new(vec![ChatTurn::user(message)], location)?;
    let reply = state.relay.reply(&request).await;

    if json {
        let body: ChatResponseBody = reply.into();
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("🏝").bold(), reply.text);
    if let Some(diagnostic) = &reply.diagnostic {
        println!();
        println!(
            "  {} {}",
            style("⚠").yellow(),
            style(&diagnostic.error).yellow()
        );
        if let Some(details) = &diagnostic.details {
            println!("    {}", style(details).dim());
        }
    }
    println!();

    Ok(())
}
