use std::fmt;

/// Word and character totals of a text.
///
/// Characters are counted inside words only: whitespace never contributes,
/// so `"ab  cd"` has 2 words and 4 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCounts {
    pub words: usize,
    pub characters: usize,
}

impl TextCounts {
    pub fn of(text: &str) -> Self {
        text.split_whitespace()
            .fold(Self::default(), |acc, word| Self {
                words: acc.words + 1,
                characters: acc.characters + word.chars().count(),
            })
    }
}

impl fmt::Display for TextCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Words: {} Characters: {}", self.words, self.characters)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/count.rs"]
mod tests;
