//! Canned replies used when the upstream model cannot answer.
//!
//! Keyword groups are tested in order against the lowercased text of the
//! latest user turn; the first group with a matching substring wins.

/// Sent when no upstream credential is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "I'm sorry, but the AI travel assistant is not \
configured right now. Please try again later or contact our support team for help \
planning your Tarkarli trip.";

/// Sent when no keyword group matches.
pub const GENERIC_FALLBACK: &str = "I'm having a little trouble connecting right now, \
but I'd love to help you plan your Tarkarli trip! Ask me about the beaches, scuba \
diving and water sports, Malvani food, Sindhudurg Fort, or the best time to visit.";

const BEACH_REPLY: &str = "Tarkarli Beach is famous for its white sand and crystal-clear \
water, with visibility of up to 20 feet between October and May. It's one of the best \
spots in Maharashtra for scuba diving and snorkelling, and you can also try parasailing, \
banana boat and jet-ski rides. Don't miss the boat trip to Devbagh sangam and Tsunami Island!";

const FOOD_REPLY: &str = "Malvani cuisine is a highlight of any Tarkarli trip! Try a \
fresh fish thali with surmai or bombil fry, kombdi vade, and a glass of sol kadhi. Most \
homestays serve home-cooked Malvani meals, and the family-run restaurants near Malvan \
market are local favourites.";

const FORT_REPLY: &str = "Sindhudurg Fort was built by Chhatrapati Shivaji Maharaj in \
1664 on a rocky island just off Malvan. A short ferry ride from Malvan jetty takes you \
there; inside you can see the imprints of Shivaji Maharaj's hand and foot and a temple \
dedicated to him. Plan about two hours for the visit.";

const SEASON_REPLY: &str = "The best time to visit Tarkarli is from October to May, \
when the sea is calm and water sports are open. December to February has the most \
pleasant weather. During the monsoon (June to September) scuba diving and boat rides are \
suspended because the sea gets rough, though the coast is lush and green.";

/// Ordered keyword table: first matching group wins.
///
/// No keyword may contain a keyword of an earlier group, or it would never
/// reach its own group. That rules out "sea" ("season") and "eat"
/// ("weather").
const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (
        &[
            "beach",
            "tarkarli",
            "swim",
            "scuba",
            "snorkel",
            "water sport",
            "devbagh",
        ],
        BEACH_REPLY,
    ),
    (
        &[
            "food",
            "restaurant",
            "cuisine",
            "malvani",
            "dish",
            "thali",
            "fish",
        ],
        FOOD_REPLY,
    ),
    (
        &["fort", "sindhudurg", "history", "shivaji"],
        FORT_REPLY,
    ),
    (
        &[
            "time", "season", "visit", "when", "weather", "monsoon", "month",
        ],
        SEASON_REPLY,
    ),
];

/// Deterministic keyword matcher over the latest user turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackResponder;

impl FallbackResponder {
    pub fn new() -> Self {
        Self
    }

    /// Pick the canned reply for `user_text`.
    pub fn respond(&self, user_text: &str) -> &'static str {
        let text = user_text.to_lowercase();
        KEYWORD_GROUPS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
            .map(|(_, reply)| *reply)
            .unwrap_or(GENERIC_FALLBACK)
    }

    /// Reply shown when the upstream has no credential.
    pub fn not_configured(&self) -> &'static str {
        NOT_CONFIGURED_MESSAGE
    }
}
