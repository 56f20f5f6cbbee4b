//! JSON metadata sink.
//!
//! The default dry-run destination: one JSON object per secret on the
//! given writer. Redaction is carried by [`Secret`]'s serde attributes,
//! so the value cannot appear here.

use std::io::Write;

use super::Sink;
use crate::core::secret::Secret;
use crate::error::Result;

/// Writes secret metadata (never the value) as newline-delimited JSON.
pub struct MetadataPrinter<W: Write> {
    writer: W,
}

impl<W: Write> MetadataPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl MetadataPrinter<std::io::Stdout> {
    /// Printer on stdout, the default sink when `--commit` is absent.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Sink for MetadataPrinter<W> {
    fn handle(&mut self, secret: &Secret) -> Result<()> {
        serde_json::to_writer(&mut self.writer, secret)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_one_json_object_per_line() {
        let mut printer = MetadataPrinter::new(Vec::new());

        printer
            .handle(&Secret {
                name: "hi".to_string(),
                value: "should be suppressed".to_string(),
                description: String::new(),
                pattern: String::new(),
            })
            .unwrap();

        assert_eq!(
            String::from_utf8(printer.writer).unwrap(),
            "{\"name\":\"hi\"}\n"
        );
    }

    #[test]
    fn test_metadata_fields_appear_but_the_value_never_does() {
        let mut printer = MetadataPrinter::new(Vec::new());

        printer
            .handle(&Secret {
                name: "/db".to_string(),
                value: "p@ssw0rd".to_string(),
                description: "database password".to_string(),
                pattern: "^.*$".to_string(),
            })
            .unwrap();

        let out = String::from_utf8(printer.writer).unwrap();
        assert_eq!(
            out,
            "{\"name\":\"/db\",\"description\":\"database password\",\"pattern\":\"^.*$\"}\n"
        );
        assert!(!out.contains("p@ssw0rd"));
    }
}
