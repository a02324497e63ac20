#![forbid(unsafe_code)]

//! JSON listing formatter
//!
//! Prints listings in the same four-space pretty layout used for the task
//! document, so `list` output can be pasted back into the file.

use crate::store::codec;
use crate::store::manager::Listing;

/// JSON formatter for listings
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        JsonFormatter
    }

    /// Format a listing as pretty JSON
    ///
    /// A whole-document listing renders the full document object; a
    /// single-category listing renders just that category's task array.
    pub fn format(&self, listing: &Listing) -> Result<String, serde_json::Error> {
        match listing {
            Listing::All(document) => codec::encode(document),
            Listing::Category(_, tasks) => codec::encode(tasks),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
