use crate::state::GameState;

/// Labels the engine sometimes embeds at the tail of the reasoning text.
/// Anything from the first such label onward is boilerplate, not reasoning.
const TRAILING_LABELS: [&str; 4] = ["Позиция:", "Рекомендация:", "Position:", "Recommendation:"];

/// A parsed advisory. Display convenience only; never feeds game logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub action: String,
    pub reasoning: String,
}

/// Decomposes one advisory string of the form `"<Action>: <reasoning>"`.
/// Without a colon the whole string is the action and the reasoning is
/// empty. Trailing labeled sub-fields are stripped from the reasoning.
pub fn parse(text: &str) -> Advice {
    match text.find(':') {
        None => Advice {
            action: text.trim().to_string(),
            reasoning: String::new(),
        },
        Some(colon) => {
            let action = text[..colon].trim().to_string();
            let mut reasoning = text[colon + 1..].trim();
            for label in TRAILING_LABELS {
                if let Some(at) = find_ignore_case(reasoning, label) {
                    reasoning = reasoning[..at].trim_end();
                }
            }
            Advice {
                action,
                reasoning: reasoning.to_string(),
            }
        }
    }
}

pub fn from_snapshot(state: &GameState) -> Option<Advice> {
    state
        .recommendation
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(parse)
}

/// Byte offset of the first case-insensitive occurrence of `needle`.
/// Char-by-char comparison keeps this correct for non-ASCII text, where
/// lowercasing first would shift byte offsets.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .map(|(at, _)| at)
        .find(|&at| starts_with_ignore_case(&haystack[at..], needle))
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut chars = text.chars();
    prefix.chars().all(|expected| {
        chars
            .next()
            .is_some_and(|got| got.to_lowercase().eq(expected.to_lowercase()))
    })
}
