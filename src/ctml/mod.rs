//! # CTML Reader Module
//!
//! Parses a CTML document into an owned element tree and offers the small set of
//! lookups the translators need (first child by tag, children by tag, child text,
//! attributes).
//!
//! ## CTML Structure
//!
//! ```text
//! ctml
//! ├── phase* (id)
//! │   ├── elementArray
//! │   ├── speciesArray
//! │   ├── thermo (model)
//! │   ├── kinetics (model)
//! │   └── transport (model)
//! ├── speciesData
//! │   └── species* (name)
//! │       ├── atomArray
//! │       ├── note
//! │       ├── thermo
//! │       │   └── NASA* (Tmin, Tmax)
//! │       │       └── floatArray
//! │       └── transport (model)
//! └── reactionData
//!     └── reaction* (id, type, duplicate)
//!         ├── equation
//!         └── rateCoeff
//!             ├── Arrhenius* (name)
//!             ├── efficiencies
//!             └── falloff (type)
//! ```

mod element;
mod helpers;

pub use element::{parse_document, Element};
pub use helpers::{parse_float, parse_float_list, parse_pairs, split_list};

/// Errors that can occur while reading a CTML document
#[derive(Debug, thiserror::Error)]
pub enum CtmlError {
    /// Malformed XML
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// I/O error reading the document
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Element or attribute text that is not valid UTF-8
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Document is well-formed text but not a usable element tree
    #[error("Invalid CTML structure: {0}")]
    InvalidStructure(String),

    /// A required child element is absent
    #[error("Missing <{child}> element in <{parent}>")]
    MissingElement {
        /// Tag of the element that was searched
        parent: String,
        /// Tag of the child that was expected
        child: String,
    },

    /// A required attribute is absent
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        /// Tag of the element carrying the attribute
        element: String,
        /// Attribute name
        attribute: String,
    },

    /// Text that should hold a number does not parse as one
    #[error("Invalid number '{value}' in {context}")]
    InvalidNumber {
        /// Where the value was read from
        context: String,
        /// The offending text
        value: String,
    },

    /// A `key:value` token that does not split into exactly two parts
    #[error("Invalid entry '{value}' in {context}")]
    InvalidEntry {
        /// Where the token was read from
        context: String,
        /// The offending token
        value: String,
    },
}
