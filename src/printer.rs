use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::message::Message;

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug)]
pub enum SerializationFormat {
    Text,
    Json,
}

pub struct Printer<W> {
    writer: W,
    format: SerializationFormat,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W, format: SerializationFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_once(&mut self, messages: &[Message]) -> Result<()> {
        match self.format {
            SerializationFormat::Json => {
                writeln!(self.writer, "{}", serde_json::to_string_pretty(&messages)?)?;
            }
            SerializationFormat::Text => {
                writeln!(self.writer, "Found {} error(s).", messages.len())?;
                for message in messages {
                    writeln!(self.writer, "{message}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rustpython_parser::ast::Location;

    use super::{Printer, SerializationFormat};
    use crate::ast::types::Range;
    use crate::checks::{Check, CheckKind};
    use crate::message::Message;

    fn message() -> Message {
        Message::from_check(
            Check::new(
                CheckKind::GherkinNotCompliant("No Gherkin doc found".to_string()),
                Range::new(Location::new(1, 0), Location::new(1, 0)),
            ),
            "RULE.py".to_string(),
        )
    }

    #[test]
    fn text_output_counts_errors() -> Result<()> {
        let mut buffer: Vec<u8> = vec![];
        Printer::new(&mut buffer, SerializationFormat::Text).write_once(&[message()])?;
        let output = String::from_utf8(buffer)?;
        assert!(output.starts_with("Found 1 error(s)."));
        assert!(output.contains("Gherkin is not compliant: \"No Gherkin doc found\""));
        Ok(())
    }

    #[test]
    fn json_output_round_trips() -> Result<()> {
        let mut buffer: Vec<u8> = vec![];
        Printer::new(&mut buffer, SerializationFormat::Json).write_once(&[message()])?;
        let messages: Vec<Message> = serde_json::from_slice(&buffer)?;
        assert_eq!(messages, vec![message()]);
        Ok(())
    }
}
