//! Prompt assembly for the travel assistant.
//!
//! The system instruction is a fixed persona block, optionally followed by a
//! single clause carrying the caller's location. The conversation itself is
//! cut to a trailing window (10 turns by default) with roles mapped onto the
//! upstream schema (`assistant` becomes `model`).

use tarkarli_types::chat::ChatRequest;
use tarkarli_types::llm::{
    relay_safety_settings, CompletionRequest, Message, MessageRole, SamplingParams,
};

/// Number of trailing turns forwarded upstream unless configured otherwise.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Fixed persona of the assistant. Static per deployment, never derived from
/// user input.
pub const TARKARLI_PERSONA: &str = "\
You are the Tarkarli Travel Assistant, a friendly local guide for Tarkarli, \
Malvan and the Sindhudurg coast of Maharashtra, India.

What you know:
- Tarkarli Beach: white sand, clear water with visibility up to 20 feet in season, \
scuba diving, snorkelling, parasailing, banana boat and jet-ski rides.
- Devbagh Beach and the Karli river sangam, backwater boat rides, dolphin spotting \
in the early morning, and Tsunami Island.
- Sindhudurg Fort, built by Chhatrapati Shivaji Maharaj in 1664 on an island off \
Malvan, reached by ferry from Malvan jetty.
- Malvani cuisine: fish thali, sol kadhi, kombdi vade, bombil and surmai fry, \
local homestays serving home-cooked meals.
- Best season is October to May; water sports stop during the monsoon (June to \
September). Nearest railway stations are Kudal and Sindhudurg; nearest airports \
are Chipi (Sindhudurg) and Goa.
- Our platform offers tour packages, homestay and resort bookings, reviews and \
favourites for these destinations.

How you answer:
- Be warm, concise and practical. Keep answers under 150 words.
- Use short paragraphs or bullet points for itineraries and lists.
- Mention prices only as approximate ranges and suggest checking the package page \
for current rates.
- Discuss travel, sightseeing, food, stays, transport, weather, safety and bookings \
in the Konkan region.
- If asked about unrelated topics, politely steer the conversation back to \
planning a trip to Tarkarli.
- Never invent bookings, confirmations or personal data about the user.";

/// Builds upstream completion requests from validated chat requests.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    model: String,
    history_window: usize,
}

impl PromptAssembler {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    /// Override the trailing window size. A window of zero is treated as one
    /// so the latest turn always reaches the model.
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window.max(1);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    /// Build the system instruction: persona block plus optional location clause.
    pub fn system_instruction(location_hint: Option<&str>) -> String {
        match location_hint {
            Some(location) => format!(
                "{TARKARLI_PERSONA}\n\nThe user is currently located in {location}. \
                 Use this to personalise travel advice such as distance, routes and travel time."
            ),
            None => TARKARLI_PERSONA.to_string(),
        }
    }

    /// Assemble the full completion request.
    ///
    /// Turns older than the trailing window are dropped silently; order is
    /// preserved.
    pub fn build(&self, request: &ChatRequest) -> CompletionRequest {
        let turns = request.turns();
        let start = turns.len().saturating_sub(self.history_window);

        let messages = turns[start..]
            .iter()
            .map(|turn| Message {
                role: MessageRole::from(turn.role),
                content: turn.content.clone(),
            })
            .collect();

        CompletionRequest {
            model: self.model.clone(),
            system: Self::system_instruction(request.location_hint()),
            messages,
            sampling: SamplingParams::RELAY,
            safety: relay_safety_settings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarkarli_types::chat::ChatTurn;

    fn conversation(len: usize) -> ChatRequest {
        let turns = (0..len)
            .map(|i| {
                if i % 2 == 0 {
                    ChatTurn::user(format!("question {i}"))
                } else {
                    ChatTurn::assistant(format!("answer {i}"))
                }
            })
            .collect();
        ChatRequest::new(turns, None).unwrap()
    }

    #[test]
    fn keeps_only_trailing_window() {
        let assembler = PromptAssembler::new("gemini-1.5-flash");
        let request = assembler.build(&conversation(15));

        assert_eq!(request.messages.len(), 10);
        assert_eq!(request.messages[0].content, "answer 5");
        assert_eq!(request.messages[9].content, "question 14");
    }

    #[test]
    fn short_history_is_forwarded_whole() {
        let assembler = PromptAssembler::new("gemini-1.5-flash");
        let request = assembler.build(&conversation(3));
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[0].content, "question 0");
    }

    #[test]
    fn maps_assistant_to_model_role() {
        let assembler = PromptAssembler::new("gemini-1.5-flash");
        let request = assembler.build(&conversation(2));
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[1].role, MessageRole::Model);
    }

    #[test]
    fn location_clause_is_appended() {
        let assembler = PromptAssembler::new("gemini-1.5-flash");
        let req = ChatRequest::new(vec![ChatTurn::user("hi")], Some("Pune".into())).unwrap();
        let request = assembler.build(&req);

        assert!(request.system.starts_with(TARKARLI_PERSONA));
        assert!(request.system.contains("currently located in Pune"));
    }

    #[test]
    fn no_location_means_persona_only() {
        let assembler = PromptAssembler::new("gemini-1.5-flash");
        let request = assembler.build(&conversation(1));
        assert_eq!(request.system, TARKARLI_PERSONA);
    }

    #[test]
    fn fixed_sampling_and_safety() {
        let assembler = PromptAssembler::new("gemini-1.5-flash");
        let request = assembler.build(&conversation(1));
        assert_eq!(request.sampling, SamplingParams::RELAY);
        assert_eq!(request.safety.len(), 4);
        assert_eq!(request.model, "gemini-1.5-flash");
    }

    #[test]
    fn custom_window_is_clamped_to_one() {
        let assembler = PromptAssembler::new("m").with_history_window(0);
        assert_eq!(assembler.history_window(), 1);
        let request = assembler.build(&conversation(4));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].content, "answer 3");
    }
}
