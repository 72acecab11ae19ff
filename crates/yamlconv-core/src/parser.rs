//! Adapter from YAML text to the event vocabulary in [`crate::event`].
//!
//! The heavy lifting (tokenizing, indentation, quoting, escapes) belongs to
//! `yaml-rust2`; this module only drives its pull parser and maps each
//! library event onto ours. The codec itself never reads raw characters.

use crate::error::Result;
use crate::event::{Event, ScalarStyle};
use yaml_rust2::parser::{Event as YamlEvent, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Scan YAML text into an event stream.
///
/// Parses a single document; trailing documents in a multi-document stream
/// are ignored (multi-document support is out of scope). Comments never
/// appear in the output because the upstream scanner discards them.
pub fn scan(input: &str) -> Result<Vec<Event>> {
    let mut parser = Parser::new_from_str(input);
    let mut collector = EventCollector::default();
    parser.load(&mut collector, false)?;
    Ok(collector.events)
}

/// Receiver that flattens `yaml-rust2` events into our vocabulary.
#[derive(Default)]
struct EventCollector {
    events: Vec<Event>,
}

impl MarkedEventReceiver for EventCollector {
    fn on_event(&mut self, ev: YamlEvent, _marker: Marker) {
        match ev {
            YamlEvent::Nothing | YamlEvent::DocumentStart | YamlEvent::DocumentEnd => {}
            YamlEvent::StreamStart => self.events.push(Event::StreamStart),
            YamlEvent::StreamEnd => self.events.push(Event::StreamEnd),
            YamlEvent::Scalar(value, style, _anchor_id, _tag) => self.events.push(Event::Scalar {
                value,
                style: convert_style(style),
            }),
            YamlEvent::SequenceStart(_anchor_id, _tag) => {
                self.events.push(Event::SequenceStart { flow: false });
            }
            YamlEvent::SequenceEnd => self.events.push(Event::SequenceEnd),
            YamlEvent::MappingStart(_anchor_id, _tag) => self.events.push(Event::MappingStart),
            YamlEvent::MappingEnd => self.events.push(Event::MappingEnd),
            // Aliases are out of scope; degrade to null rather than fail.
            YamlEvent::Alias(_anchor_id) => self.events.push(Event::plain("null")),
        }
    }
}

fn convert_style(style: TScalarStyle) -> ScalarStyle {
    match style {
        TScalarStyle::SingleQuoted => ScalarStyle::SingleQuoted,
        TScalarStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
        TScalarStyle::Literal => ScalarStyle::Literal,
        TScalarStyle::Folded => ScalarStyle::Folded,
        // Plain, and whatever the scanner may grow: eligible for inference.
        _ => ScalarStyle::Plain,
    }
}
