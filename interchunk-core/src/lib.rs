//! Intra-chunk to inter-chunk conversion for Shakti Standard Format (SSF)
//!
//! Input sentences carry dependency relations on individual tokens: the head
//! token of each chunk names, through its `drel` feature, the head token of
//! the chunk it depends on. This crate lifts those relations onto the chunks
//! themselves and writes the result back as a nested SSF bracket tree.
//!
//! # Architecture
//!
//! - **Domain layer**: sentence records, tokens, feature structures, chunks
//! - **Application layer**: the token/chunk decoder and inter-chunk encoder
//! - **API layer**: document-level conversion used by the CLI
//!
//! # Example
//!
//! ```rust
//! use interchunk_core::Converter;
//!
//! let text = "<Sentence id=\"1\">\n\
//!     1\tराम\tNN\t<fs af='राम,n,m,sg,3,d,0,0' chunkType='head:NP1'>\n\
//!     </Sentence>";
//!
//! let document = Converter::default().convert_text(text).unwrap();
//! assert_eq!(
//!     document.render(),
//!     "<Sentence id='1'>\n\
//!      1\t((\tNP\t<fs name='NP1'>\n\
//!      1.1\tराम\tNN\t<fs af='राम,n,m,sg,3,d,0,0' name='राम'>\n\
//!      \t))\n\
//!      </Sentence>\n"
//! );
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod error;

pub use api::{Config, ConfigBuilder, ConversionStats, ConvertedDocument, Converter};
pub use application::{DecodedSentence, HeadPolicy, InterChunkEncoder};
pub use domain::{extract_sentences, Chunk, HeadIndex, SentenceExtractor, SentenceRecord, Token};
pub use error::{ConvertError, Result};
