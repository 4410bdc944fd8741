//! System prompt construction for the health assistant.
//!
//! The system prompt is a pure function of the response language. It
//! is regenerated before every completion call so a settings change is
//! always honored on the next submission.

use std::fmt;

use crate::{Message, Role};

/// Response languages supported by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
    Gujarati,
    Rajasthani,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Marathi,
        Language::Gujarati,
        Language::Rajasthani,
    ];

    /// Language name as interpolated into the system prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
            Language::Gujarati => "Gujarati",
            Language::Rajasthani => "Rajasthani",
        }
    }

    /// Region-qualified tag passed to the speech-to-text service.
    /// Rajasthani has no tag of its own; Hindi is the closest match.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::English => "en-IN",
            Language::Hindi | Language::Rajasthani => "hi-IN",
            Language::Marathi => "mr-IN",
            Language::Gujarati => "gu-IN",
        }
    }

    /// Parse a language name, falling back to English for anything
    /// unrecognized. The assistant favors availability over strictness.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "hindi" => Language::Hindi,
            "marathi" => Language::Marathi,
            "gujarati" => Language::Gujarati,
            "rajasthani" => Language::Rajasthani,
            _ => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the system message for the given response language.
///
/// Deterministic and side-effect free. The policy string restricts the
/// assistant to health topics, fixes the refusal line for anything
/// else, mandates the five-part reply outline, and carries the
/// no-diagnosis disclaimer.
pub fn build_system_prompt(language: Language) -> Message {
    let content = format!(
        "You are Sehat, a helpful health assistant. \
         IMPORTANT: Only answer health-related questions. \
         If the question is not health-related, reply: \
         'I can only help with health-related guidance.' \
         Always reply in {}. \
         Response format:\n\
         1) Short overview\n\
         2) Home care\n\
         3) Safe OTC medicines\n\
         4) Ayurvedic options\n\
         5) When to see a doctor.\n\
         Supportive tone, no diagnosis, not a substitute for professional care.",
        language.name()
    );
    Message {
        role: Role::System,
        content,
    }
}

/// The assistant greeting seeded into every fresh conversation.
pub fn greeting() -> Message {
    Message {
        role: Role::Assistant,
        content: "Hi, I'm Sehat. Tell me a disease or symptom and I'll share \
                  remedies and guidance. (Not medical advice.)"
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_is_deterministic() {
        let a = build_system_prompt(Language::Hindi);
        let b = build_system_prompt(Language::Hindi);
        assert_eq!(a, b);
        assert_eq!(a.role, Role::System);
    }

    #[test]
    fn system_prompt_interpolates_language() {
        for lang in Language::ALL {
            let msg = build_system_prompt(lang);
            assert!(msg.content.contains(&format!("Always reply in {}.", lang)));
        }
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(Language::from_name("Klingon"), Language::English);
        assert_eq!(Language::from_name(""), Language::English);
        assert_eq!(Language::from_name("  hindi "), Language::Hindi);
        assert_eq!(Language::from_name("GUJARATI"), Language::Gujarati);
    }

    #[test]
    fn speech_tags_are_region_qualified() {
        assert_eq!(Language::English.speech_tag(), "en-IN");
        assert_eq!(Language::Marathi.speech_tag(), "mr-IN");
        // Rajasthani maps to the closest available tag
        assert_eq!(Language::Rajasthani.speech_tag(), "hi-IN");
    }

    #[test]
    fn greeting_is_an_assistant_message() {
        let msg = greeting();
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.content.contains("Not medical advice"));
    }
}
