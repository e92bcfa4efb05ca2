pub mod error;
mod raw;

pub use error::ParseError;

use crate::Document;
use crate::parser::raw::RawDocument;

/// Loader entry point.
pub struct Parser {
    source: String,
    file_id: usize,
}

impl Parser {
    pub fn new(source: String, file_id: usize) -> Self {
        Parser { source, file_id }
    }

    /// Parse raw Draft.js JSON into a Document.
    /// `null` and `{}` load as an empty document.
    pub fn parse(&self) -> Result<Document, Vec<ParseError>> {
        let raw: Option<RawDocument> = serde_json::from_str(&self.source)
            .map_err(|e| vec![ParseError::from_json(&e, &self.source, self.file_id)])?;
        Ok(raw.map(RawDocument::into_document).unwrap_or_default())
    }
}

/// Parse a document from a JSON string, discarding location information.
pub fn parse_str(source: &str) -> Result<Document, ParseError> {
    Parser::new(source.to_string(), 0)
        .parse()
        .map_err(|mut errors| errors.remove(0))
}
