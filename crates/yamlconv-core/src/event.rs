//! Structural event vocabulary shared by the decoder, encoder, parser
//! adapter, and emitter.
//!
//! The codec never touches YAML text directly: the external parser produces
//! this stream and the emitter consumes it. Styles on scalars and the flow
//! flag on sequences are representation hints; they carry no semantic weight
//! beyond the plain/non-plain distinction the decoder's type inference uses.

/// On-wire representation of a scalar.
///
/// Only `Plain` scalars are eligible for type inference on decode; every
/// other style decodes unconditionally as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

impl ScalarStyle {
    pub fn is_plain(self) -> bool {
        matches!(self, ScalarStyle::Plain)
    }
}

/// One structural event in a YAML stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    StreamStart,
    StreamEnd,
    Scalar {
        value: String,
        style: ScalarStyle,
    },
    /// `flow` is the encoder's layout choice (`[a, b, c]` vs one item per
    /// line). The decoder ignores it.
    SequenceStart {
        flow: bool,
    },
    SequenceEnd,
    MappingStart,
    MappingEnd,
    /// A freestanding `# ...` comment, not attached to any sibling.
    Comment(String),
}

impl Event {
    /// Shorthand for a scalar event.
    pub fn scalar(value: impl Into<String>, style: ScalarStyle) -> Event {
        Event::Scalar {
            value: value.into(),
            style,
        }
    }

    /// Shorthand for a plain-style scalar event.
    pub fn plain(value: impl Into<String>) -> Event {
        Event::scalar(value, ScalarStyle::Plain)
    }
}

/// Pull-style lookahead over an event slice.
///
/// The decoder and emitter both walk events through this cursor; each
/// recursion step either consumes at least one event or returns on an end
/// event, which is what bounds the codec's loops.
#[derive(Debug)]
pub struct EventCursor<'a> {
    events: &'a [Event],
    pos: usize,
}

impl<'a> EventCursor<'a> {
    pub fn new(events: &'a [Event]) -> EventCursor<'a> {
        EventCursor { events, pos: 0 }
    }

    /// The next event without consuming it.
    pub fn peek(&self) -> Option<&'a Event> {
        self.events.get(self.pos)
    }

    /// Consume and return the next event.
    pub fn next(&mut self) -> Option<&'a Event> {
        let ev = self.events.get(self.pos)?;
        self.pos += 1;
        Some(ev)
    }

    /// Discard any run of comment events at the cursor.
    pub fn skip_comments(&mut self) {
        while matches!(self.peek(), Some(Event::Comment(_))) {
            self.pos += 1;
        }
    }
}
