use super::error::GrammarError;

//─────────────────────────────────────────────────────────────────────────────
// Token classification for path expressions. The body of an expression (the
// text between the `^` and `$` anchors) is a flat sequence of single-character
// tokens; the builder consumes them through a `TokenStream` cursor.
//─────────────────────────────────────────────────────────────────────────────

/// A grid position. `x` grows eastward, `y` grows northward.
pub type Position = (i32, i32);

/// One of the four compass steps an expression is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Returns the direction spelled by `c`, if any.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Unit offset of a single step in this direction.
    pub fn delta(self) -> Position {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Returns the room reached by stepping from `from`.
    pub fn step(self, from: Position) -> Position {
        let (dx, dy) = self.delta();
        (from.0 + dx, from.1 + dy)
    }
}

/// The classification of a single body character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Step(Direction),
    GroupOpen,   // (
    Alternative, // |
    GroupClose,  // )
}

impl Token {
    pub fn classify(c: char) -> Option<Self> {
        match c {
            '(' => Some(Token::GroupOpen),
            '|' => Some(Token::Alternative),
            ')' => Some(Token::GroupClose),
            _ => Direction::from_char(c).map(Token::Step),
        }
    }
}

/// A token together with the byte offset it was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Classifies every character of `body`.
///
/// `offset` is the byte offset of `body` inside the full expression, so that
/// reported positions refer to the text the user wrote.
///
/// # Errors
/// Returns `GrammarError::UnexpectedCharacter` for the first character that is
/// not a direction or a group delimiter.
pub fn tokenize(body: &str, offset: usize) -> Result<Vec<Spanned>, GrammarError> {
    body.char_indices()
        .map(|(index, c)| {
            let position = offset + index;
            Token::classify(c)
                .map(|token| Spanned { token, position })
                .ok_or(GrammarError::UnexpectedCharacter { position, found: c })
        })
        .collect()
}

/// Forward-only cursor over an immutable token sequence.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Spanned>,
    index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Tokenizes a bare body (no anchors) starting at offset 0.
    #[cfg(test)]
    pub fn from_body(body: &str) -> Result<Self, GrammarError> {
        Ok(Self::new(tokenize(body, 0)?))
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> Option<Spanned> {
        self.tokens.get(self.index).copied()
    }

    /// Returns the current token and advances past it.
    pub fn next_token(&mut self) -> Option<Spanned> {
        let current = self.peek()?;
        self.index += 1;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_token_kind() {
        assert_eq!(Token::classify('N'), Some(Token::Step(Direction::North)));
        assert_eq!(Token::classify('W'), Some(Token::Step(Direction::West)));
        assert_eq!(Token::classify('('), Some(Token::GroupOpen));
        assert_eq!(Token::classify('|'), Some(Token::Alternative));
        assert_eq!(Token::classify(')'), Some(Token::GroupClose));
        assert_eq!(Token::classify('^'), None);
        assert_eq!(Token::classify('n'), None);
    }

    #[test]
    fn tokenize_reports_offset_positions() {
        let tokens = tokenize("N(E|)", 1).unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
        assert_eq!(tokens[1].token, Token::GroupOpen);
    }

    #[test]
    fn tokenize_rejects_unknown_characters() {
        let err = tokenize("NEX", 1).unwrap_err();
        assert_eq!(
            err,
            GrammarError::UnexpectedCharacter {
                position: 3,
                found: 'X'
            }
        );
    }

    #[test]
    fn stream_walks_forward_once() {
        let mut stream = TokenStream::from_body("N)").unwrap();
        assert_eq!(stream.peek().map(|t| t.position), Some(0));
        assert_eq!(
            stream.next_token().map(|t| t.token),
            Some(Token::Step(Direction::North))
        );
        assert_eq!(
            stream.next_token(),
            Some(Spanned {
                token: Token::GroupClose,
                position: 1
            })
        );
        assert_eq!(stream.peek(), None);
        assert_eq!(stream.next_token(), None);
    }

    #[test]
    fn opposite_steps_cancel_out() {
        let start = (3, -2);
        assert_eq!(Direction::South.step(Direction::North.step(start)), start);
        assert_eq!(Direction::West.step(Direction::East.step(start)), start);
    }
}
