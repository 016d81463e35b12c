//! Ordered scoring rules derived from commit message shape.
//!
//! Rules are evaluated in order; the first whose predicate matches wins.
//! The last rule always matches, so every message lands in exactly one
//! category. A conventional-prefixed one-word message is still scored by the
//! prefix rules, never as "too short" (prefix checks come first).

/// Conventional Commit prefixes the engine recognizes.
pub const CONVENTIONAL_PREFIXES: [&str; 4] = ["feat:", "fix:", "docs:", "chore:"];

/// Messages at or beyond this many characters count as long.
pub const LONG_MESSAGE_CHARS: usize = 70;

/// Messages below this many words count as too short.
pub const MIN_CONTEXT_WORDS: usize = 3;

/// Scoring category, one per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
  /// Conventional prefix and concise.
  ConventionalConcise,
  /// Conventional prefix but long.
  ConventionalLong,
  /// No prefix and too few words to carry context.
  TooShort,
  /// Everything else.
  Unstructured,
}

/// Shape facts extracted once per message; predicates only look at these.
#[derive(Debug, Clone, Copy)]
pub struct MessageShape {
  pub conventional: bool,
  pub char_count: usize,
  pub word_count: usize,
}

impl MessageShape {
  /// Extract shape facts. Prefix and word count are taken from the trimmed,
  /// lowercased message; the character count is of the message as given.
  pub fn of(message: &str) -> Self {
    let normalized = message.trim().to_lowercase();
    let conventional = CONVENTIONAL_PREFIXES
      .iter()
      .any(|p| normalized.starts_with(p));
    Self {
      conventional,
      char_count: message.chars().count(),
      word_count: normalized.split_whitespace().count(),
    }
  }
}

/// One scoring rule: predicate, inclusive score range, fixed feedback.
pub struct Rule {
  pub category: Category,
  pub applies: fn(&MessageShape) -> bool,
  pub score_range: (u8, u8),
  pub feedback: &'static str,
}

/// The rule table, in evaluation order. The final rule is a catch-all.
pub static RULES: [Rule; 4] = [
  Rule {
    category: Category::ConventionalConcise,
    applies: |s| s.conventional && s.char_count < LONG_MESSAGE_CHARS,
    score_range: (8, 10),
    feedback: "Excellent! Clear intent and concise formatting (Conventional Commit style).",
  },
  Rule {
    category: Category::ConventionalLong,
    applies: |s| s.conventional,
    score_range: (6, 8),
    feedback: "Good action verb used, but the message might be slightly too long.",
  },
  Rule {
    category: Category::TooShort,
    applies: |s| s.word_count < MIN_CONTEXT_WORDS,
    score_range: (1, 3),
    feedback: "Too short! Message lacks context and clarity. Score reduced.",
  },
  Rule {
    category: Category::Unstructured,
    applies: |_| true,
    score_range: (4, 6),
    feedback: "The message lacks a clear action verb or formatting prefix. Needs improvement for readability.",
  },
];

/// First matching rule for a message shape.
pub fn select(shape: &MessageShape) -> &'static Rule {
  RULES
    .iter()
    .find(|rule| (rule.applies)(shape))
    .unwrap_or(&RULES[RULES.len() - 1])
}
