//! Language selection for a text editor's syntax highlighting.
//!
//! The core is [`classify`]: given raw document text, with no file name,
//! guess the language it is written in.  Around it sit the extension table
//! ([`language_for_extension`]), the display-name layer ([`display_name`],
//! [`list_all_languages`]) and the small persistence collaborators the editor
//! shell uses to remember documents between runs ([`session`]).
//!
//! ```
//! use hilite::{classify, Language};
//!
//! assert_eq!(classify("#!/usr/bin/env python\nprint('hi')\n"), Some(Language::Python));
//! assert_eq!(classify(r#"{"a": 1, "b": [1,2,3]}"#), Some(Language::Json));
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod detect;
pub mod document;
pub mod error;
pub mod languages;
pub mod registry;
pub mod session;

pub use config::ClassifierConfig;
pub use detect::{classify, Classifier};
pub use document::{Document, DocumentCounter};
pub use error::{HiliteError, Result};
pub use languages::{
    display_name, display_name_for_path, language_for_extension, language_for_extension_in,
    list_all_languages, list_all_languages_in, Language, LanguageId, NORMAL_TEXT,
};
pub use registry::{BuiltinRegistry, HighlightingRegistry};
