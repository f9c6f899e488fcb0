const HAPPY_QUOTE: &str = "Счастье зависит от нас самих. — Аристотель";
const SAD_QUOTE: &str =
    "Не то, что происходит с тобой, а то, как ты реагируешь на это, имеет значение. — Эпиктет";
const ANGRY_QUOTE: &str =
    "Лучший способ отомстить врагу — не быть похожим на него. — Марк Аврелий";
const NEUTRAL_QUOTE: &str = "Принимай события такими, какие они есть. — Марк Аврелий";
const DEFAULT_QUOTE: &str =
    "Людям свойственно ошибаться, но только мудрецам свойственно учиться на своих ошибках. — Сенека";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoicReply {
    pub comment: String,
    pub quote: &'static str,
}

/// Produces the comment and quote returned with a new entry.
///
/// Not yet implemented as real analysis: `text` is ignored and `mood` is matched
/// exactly against the four known moods, falling back to Seneca.
pub fn generate_stoic_comment(_text: &str, mood: &str) -> StoicReply {
    let comment = format!(
        "Ваше настроение '{}' — это естественная часть человеческого опыта. \
         Стоики учили, что наши эмоции не должны управлять нами.",
        mood
    );

    StoicReply {
        comment,
        quote: quote_for_mood(mood),
    }
}

fn quote_for_mood(mood: &str) -> &'static str {
    match mood {
        "happy" => HAPPY_QUOTE,
        "sad" => SAD_QUOTE,
        "angry" => ANGRY_QUOTE,
        "neutral" => NEUTRAL_QUOTE,
        _ => DEFAULT_QUOTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_quote() {
        let reply = generate_stoic_comment("Sunny day", "happy");
        assert_eq!(reply.quote, HAPPY_QUOTE);
    }

    #[test]
    fn test_known_moods_have_distinct_quotes() {
        let quotes: Vec<_> = ["happy", "sad", "angry", "neutral"]
            .iter()
            .map(|mood| generate_stoic_comment("", mood).quote)
            .collect();

        for (i, quote) in quotes.iter().enumerate() {
            assert_ne!(*quote, DEFAULT_QUOTE);
            assert!(!quotes[i + 1..].contains(quote));
        }
    }

    #[test]
    fn test_unknown_mood_falls_back_to_seneca() {
        let reply = generate_stoic_comment("whatever", "unknown_mood");
        assert_eq!(reply.quote, DEFAULT_QUOTE);
        assert!(reply.quote.ends_with("Сенека"));
    }

    #[test]
    fn test_mood_match_is_case_sensitive() {
        assert_eq!(generate_stoic_comment("", "Happy").quote, DEFAULT_QUOTE);
    }

    #[test]
    fn test_comment_contains_mood_verbatim() {
        for mood in ["happy", "unknown_mood", "  weird Mood!  ", ""] {
            let reply = generate_stoic_comment("text", mood);
            assert!(reply.comment.contains(&format!("'{}'", mood)));
        }
    }

    #[test]
    fn test_text_does_not_affect_reply() {
        assert_eq!(
            generate_stoic_comment("one", "sad"),
            generate_stoic_comment("completely different", "sad")
        );
    }
}
