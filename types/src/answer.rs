//! Player answers to "Is this a prime?".

/// A recognized answer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Quit,
}

impl Answer {
    /// Parse a raw input line. Matching ignores case and surrounding whitespace.
    ///
    /// Returns `None` for anything unrecognized so the caller can re-prompt.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(Answer::Yes),
            "n" | "no" => Some(Answer::No),
            "quit" => Some(Answer::Quit),
            _ => None,
        }
    }

    /// The guess this answer makes, or `None` for [`Answer::Quit`].
    #[must_use]
    pub fn guess(self) -> Option<bool> {
        match self {
            Answer::Yes => Some(true),
            Answer::No => Some(false),
            Answer::Quit => None,
        }
    }
}
