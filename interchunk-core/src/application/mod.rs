//! Application layer: decoding sentence bodies into chunks and encoding them
//! as inter-chunk trees

pub mod decoder;
pub mod encoder;

pub use decoder::{decode_lines, decode_sentence, decode_token_line, ChunkGrouper, DecodedSentence};
pub use encoder::{EncodedSentence, HeadPolicy, InterChunkEncoder};
