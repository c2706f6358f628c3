//! Single look-ahead character stream.

/// Wraps a character source with one slot of look-ahead.
///
/// The source is only pulled when the slot is empty, so a source that
/// blocks (interactive input) blocks at most once per character, inside
/// `peek` or `next`.
pub struct CharStream<S: Iterator<Item = char>> {
    source: S,
    /// `Some(None)` records that the source has ended.
    peeked: Option<Option<char>>,
    /// Offset, in characters, of the next character `next` returns.
    offset: u32,
}

impl<S: Iterator<Item = char>> CharStream<S> {
    pub fn new(source: S) -> Self {
        CharStream {
            source,
            peeked: None,
            offset: 0,
        }
    }

    /// The next character without consuming it. Idempotent.
    pub fn peek(&mut self) -> Option<char> {
        let source = &mut self.source;
        *self.peeked.get_or_insert_with(|| source.next())
    }

    /// Offset of the next character.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl<S: Iterator<Item = char>> Iterator for CharStream<S> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.source.next(),
        };
        if c.is_some() {
            self.offset += 1;
        }
        c
    }
}
