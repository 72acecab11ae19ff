//! Renderer from the event vocabulary to YAML text.
//!
//! Counterpart of [`crate::parser`]: the encoder chooses *styles* (plain vs
//! quoted scalars, flow vs block sequences) and this module turns them into
//! punctuation and indentation. It also owns final representation safety: a
//! plain-style scalar whose text would not survive as a YAML plain scalar
//! (empty, leading indicator, embedded `: `, control characters, ...) is
//! demoted to a quoted form. Demotion never changes the decoded value — for
//! strings it changes nothing at all, and the texts the encoder emits for
//! null/bool/number nodes are always plain-safe.
//!
//! Layout rules: two-space indentation, `[a, b]` flow sequences, compact
//! block items (`- key: value` with siblings aligned beneath), and
//! `|-`/`|`/`|+` literal blocks whose chomping indicator reproduces the
//! exact trailing-newline count.

use crate::event::{Event, EventCursor, ScalarStyle};

/// Render an event stream as YAML text.
///
/// Total: unknown or malformed event sequences render as much as they can
/// and stop, matching the codec's best-effort posture.
pub fn emit(events: &[Event]) -> String {
    let mut emitter = Emitter {
        cursor: EventCursor::new(events),
        out: String::new(),
    };
    emitter.document();
    emitter.out
}

struct Emitter<'a> {
    cursor: EventCursor<'a>,
    out: String,
}

impl Emitter<'_> {
    fn document(&mut self) {
        loop {
            match self.cursor.peek() {
                None => break,
                Some(Event::StreamStart) | Some(Event::StreamEnd) => {
                    self.cursor.next();
                }
                Some(Event::Comment(text)) => {
                    self.cursor.next();
                    self.comment_line(text, 0);
                }
                Some(_) => self.root_node(),
            }
        }
    }

    fn root_node(&mut self) {
        match self.cursor.peek() {
            Some(Event::Scalar { value, style }) => {
                let (value, style) = (value.clone(), *style);
                self.cursor.next();
                if is_block_scalar(style) && literal_safe(&value) {
                    self.literal_block(&value, 1);
                } else {
                    self.scalar_inline(&value, style, false);
                    self.out.push('\n');
                }
            }
            Some(Event::SequenceStart { flow: true }) => {
                self.flow_node();
                self.out.push('\n');
            }
            Some(Event::SequenceStart { flow: false }) => {
                self.cursor.next();
                if self.close_if_empty_sequence() {
                    self.out.push_str("[]\n");
                } else {
                    self.block_sequence_body(0, false);
                }
            }
            Some(Event::MappingStart) => {
                self.cursor.next();
                if self.close_if_empty_mapping() {
                    self.out.push_str("{}\n");
                } else {
                    self.block_mapping_body(0, false);
                }
            }
            _ => {
                // Stray end event at the root: drop it and move on.
                self.cursor.next();
            }
        }
    }

    /// Entries of a mapping whose MappingStart is already consumed.
    ///
    /// With `line_open` the first entry continues the current line (the
    /// compact `- key: value` form); later entries start at `indent`.
    fn block_mapping_body(&mut self, indent: usize, mut line_open: bool) {
        loop {
            match self.cursor.peek() {
                Some(Event::MappingEnd) => {
                    self.cursor.next();
                    break;
                }
                Some(Event::Comment(text)) => {
                    let text = text.clone();
                    self.cursor.next();
                    if line_open {
                        // `- # note` is valid: the item's value follows on
                        // the lines below at the entry indent.
                        self.out.push_str("# ");
                        self.out.push_str(&sanitize_comment(&text));
                        self.out.push('\n');
                        line_open = false;
                    } else {
                        self.comment_line(&text, indent);
                    }
                }
                Some(Event::Scalar { value, style }) => {
                    let (key, style) = (value.clone(), *style);
                    self.cursor.next();
                    if !line_open {
                        self.indent(indent);
                    }
                    line_open = false;
                    self.scalar_inline(&key, style, false);
                    self.out.push(':');
                    self.value_after_colon(indent);
                }
                // Truncated stream or a non-scalar key: stop rendering
                // this mapping.
                _ => break,
            }
        }
    }

    /// The value position after `key:` has been written (cursor is at the
    /// value's first event). Writes through the end of the entry's line(s).
    fn value_after_colon(&mut self, indent: usize) {
        match self.cursor.peek() {
            Some(Event::Scalar { value, style }) => {
                let (value, style) = (value.clone(), *style);
                self.cursor.next();
                if is_block_scalar(style) && literal_safe(&value) {
                    self.out.push(' ');
                    self.literal_block(&value, indent + 1);
                } else {
                    self.out.push(' ');
                    self.scalar_inline(&value, style, false);
                    self.out.push('\n');
                }
            }
            Some(Event::SequenceStart { flow: true }) => {
                self.out.push(' ');
                self.flow_node();
                self.out.push('\n');
            }
            Some(Event::SequenceStart { flow: false }) => {
                self.cursor.next();
                if self.close_if_empty_sequence() {
                    self.out.push_str(" []\n");
                } else {
                    self.out.push('\n');
                    self.block_sequence_body(indent + 1, false);
                }
            }
            Some(Event::MappingStart) => {
                self.cursor.next();
                if self.close_if_empty_mapping() {
                    self.out.push_str(" {}\n");
                } else {
                    self.out.push('\n');
                    self.block_mapping_body(indent + 1, false);
                }
            }
            // Missing value: leave the key bound to an empty node.
            _ => self.out.push('\n'),
        }
    }

    /// Items of a sequence whose SequenceStart is already consumed.
    fn block_sequence_body(&mut self, indent: usize, mut line_open: bool) {
        loop {
            match self.cursor.peek() {
                Some(Event::SequenceEnd) => {
                    self.cursor.next();
                    break;
                }
                Some(Event::Comment(text)) => {
                    let text = text.clone();
                    self.cursor.next();
                    if line_open {
                        self.out.push_str("# ");
                        self.out.push_str(&sanitize_comment(&text));
                        self.out.push('\n');
                        line_open = false;
                    } else {
                        self.comment_line(&text, indent);
                    }
                }
                None => break,
                Some(_) => {
                    if !line_open {
                        self.indent(indent);
                    }
                    line_open = false;
                    self.out.push_str("- ");
                    self.item_after_dash(indent);
                }
            }
        }
    }

    /// The item after a `- ` marker on the current line.
    fn item_after_dash(&mut self, indent: usize) {
        match self.cursor.peek() {
            Some(Event::Scalar { value, style }) => {
                let (value, style) = (value.clone(), *style);
                self.cursor.next();
                if is_block_scalar(style) && literal_safe(&value) {
                    self.literal_block(&value, indent + 1);
                } else {
                    self.scalar_inline(&value, style, false);
                    self.out.push('\n');
                }
            }
            Some(Event::SequenceStart { flow: true }) => {
                self.flow_node();
                self.out.push('\n');
            }
            Some(Event::SequenceStart { flow: false }) => {
                self.cursor.next();
                if self.close_if_empty_sequence() {
                    self.out.push_str("[]\n");
                } else {
                    self.block_sequence_body(indent + 1, true);
                }
            }
            Some(Event::MappingStart) => {
                self.cursor.next();
                if self.close_if_empty_mapping() {
                    self.out.push_str("{}\n");
                } else {
                    self.block_mapping_body(indent + 1, true);
                }
            }
            _ => self.out.push('\n'),
        }
    }

    /// Render the node at the cursor in flow context (single line).
    fn flow_node(&mut self) {
        match self.cursor.peek() {
            Some(Event::Scalar { value, style }) => {
                let (value, style) = (value.clone(), *style);
                self.cursor.next();
                self.scalar_inline(&value, style, true);
            }
            Some(Event::SequenceStart { .. }) => {
                self.cursor.next();
                self.out.push('[');
                let mut first = true;
                loop {
                    self.cursor.skip_comments();
                    match self.cursor.peek() {
                        Some(Event::SequenceEnd) => {
                            self.cursor.next();
                            break;
                        }
                        None => break,
                        _ => {
                            if !first {
                                self.out.push_str(", ");
                            }
                            first = false;
                            self.flow_node();
                        }
                    }
                }
                self.out.push(']');
            }
            Some(Event::MappingStart) => {
                self.cursor.next();
                self.out.push('{');
                let mut first = true;
                loop {
                    self.cursor.skip_comments();
                    match self.cursor.peek() {
                        Some(Event::MappingEnd) => {
                            self.cursor.next();
                            break;
                        }
                        Some(Event::Scalar { value, style }) => {
                            let (key, style) = (value.clone(), *style);
                            self.cursor.next();
                            if !first {
                                self.out.push_str(", ");
                            }
                            first = false;
                            self.scalar_inline(&key, style, true);
                            self.out.push_str(": ");
                            self.flow_node();
                        }
                        _ => break,
                    }
                }
                self.out.push('}');
            }
            _ => {
                self.cursor.next();
            }
        }
    }

    /// Write a single-line scalar in its final representation, demoting
    /// unsafe plain text and quote styles that cannot hold the content.
    fn scalar_inline(&mut self, value: &str, style: ScalarStyle, in_flow: bool) {
        let has_control = value.chars().any(|c| c.is_control());
        match style {
            ScalarStyle::Plain if plain_safe(value, in_flow) => self.out.push_str(value),
            ScalarStyle::DoubleQuoted => self.double_quoted(value),
            // Literal/folded in an inline position, control characters, or
            // unsafe plain text: double quotes can represent anything.
            _ if has_control || is_block_scalar(style) => self.double_quoted(value),
            _ => self.single_quoted(value),
        }
    }

    fn single_quoted(&mut self, value: &str) {
        self.out.push('\'');
        for ch in value.chars() {
            if ch == '\'' {
                self.out.push_str("''");
            } else {
                self.out.push(ch);
            }
        }
        self.out.push('\'');
    }

    fn double_quoted(&mut self, value: &str) {
        self.out.push('"');
        for ch in value.chars() {
            match ch {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if c.is_control() => {
                    self.out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    /// Write `|-`/`|`/`|+` and the content lines at `content_indent`. The
    /// chomping indicator encodes the trailing-newline count exactly.
    fn literal_block(&mut self, value: &str, content_indent: usize) {
        let stripped = value.trim_end_matches('\n');
        let trailing = value.len() - stripped.len();
        self.out.push('|');
        match trailing {
            0 => self.out.push('-'),
            1 => {}
            _ => self.out.push('+'),
        }
        self.out.push('\n');
        for line in stripped.split('\n') {
            if !line.is_empty() {
                self.indent(content_indent);
                self.out.push_str(line);
            }
            self.out.push('\n');
        }
        for _ in 1..trailing {
            self.out.push('\n');
        }
    }

    fn comment_line(&mut self, text: &str, indent: usize) {
        self.indent(indent);
        self.out.push_str("# ");
        self.out.push_str(&sanitize_comment(text));
        self.out.push('\n');
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str("  ");
        }
    }

    /// Consume a SequenceEnd if it immediately follows; used to render `[]`.
    fn close_if_empty_sequence(&mut self) -> bool {
        if matches!(self.cursor.peek(), Some(Event::SequenceEnd)) {
            self.cursor.next();
            true
        } else {
            false
        }
    }

    fn close_if_empty_mapping(&mut self) -> bool {
        if matches!(self.cursor.peek(), Some(Event::MappingEnd)) {
            self.cursor.next();
            true
        } else {
            false
        }
    }
}

fn is_block_scalar(style: ScalarStyle) -> bool {
    matches!(style, ScalarStyle::Literal | ScalarStyle::Folded)
}

/// A multi-line comment would break out of its `# ` line; keep it on one.
fn sanitize_comment(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

/// Can this text stand as a plain scalar without being re-tokenized as
/// punctuation, a comment, or a document marker?
///
/// The test is conservative: quoting a borderline string costs two
/// characters and changes nothing semantically, while a false negative
/// would corrupt the document. It must stay permissive enough that the
/// encoder's null/bool/number texts (`null`, `true`, `-1.5`, `2.0`, `inf`)
/// always pass, since quoting those *would* change their decoded type.
fn plain_safe(s: &str, in_flow: bool) -> bool {
    if s.is_empty() || s != s.trim() {
        return false;
    }
    let first = s.chars().next().unwrap();
    if matches!(
        first,
        '!' | '&' | '*' | '%' | '@' | '`' | '"' | '\'' | '#' | '|' | '>' | ',' | '[' | ']' | '{'
            | '}'
    ) {
        return false;
    }
    // `-`, `?`, `:` are indicators only when followed by a space or alone.
    if matches!(first, '-' | '?' | ':') && (s.len() == 1 || s.as_bytes()[1] == b' ') {
        return false;
    }
    if s.starts_with("---") || s.starts_with("...") {
        return false;
    }
    if s.contains(": ") || s.ends_with(':') || s.contains(" #") {
        return false;
    }
    if s.chars().any(|c| c.is_control()) {
        return false;
    }
    if in_flow && s.contains([',', '[', ']', '{', '}', ':']) {
        return false;
    }
    true
}

/// Literal blocks infer their indentation from the first non-empty content
/// line, so that line must not start with whitespace; carriage returns and
/// other control characters (tabs aside) would be normalized away.
fn literal_safe(value: &str) -> bool {
    let stripped = value.trim_end_matches('\n');
    if stripped.is_empty() {
        return false;
    }
    if value
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\t')
    {
        return false;
    }
    for line in stripped.split('\n') {
        if !line.is_empty() {
            return !line.starts_with(' ') && !line.starts_with('\t');
        }
    }
    true
}
