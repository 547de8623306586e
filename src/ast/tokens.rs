/// One segment of a relation expression after splitting on a separator.
///
/// Segments are classified before the parser recurses into them, so the parser
/// never has to look at raw brackets again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A relation name
    ///
    /// # Examples
    /// ```text
    /// movies
    /// *
    /// ^
    /// ```
    Plain(String),

    /// A bracketed list of chains, stored without its outer brackets
    ///
    /// # Examples
    /// ```text
    /// [pets, children]      => Array("pets, children")
    /// [movies.[actors]]     => Array("movies.[actors]")
    /// ```
    Array(String),
}

impl Token {
    /// Classify a trimmed segment.
    ///
    /// A segment is an array token when it is at least two characters long and
    /// is wrapped in `[` and `]`. Everything else, including an empty segment,
    /// is a plain token.
    pub fn classify(segment: &str) -> Token {
        let is_array =
            segment.chars().count() >= 2 && segment.starts_with('[') && segment.ends_with(']');

        if is_array {
            Token::Array(segment[1..segment.len() - 1].to_string())
        } else {
            Token::Plain(segment.to_string())
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Token::Array(_))
    }
}
