//! Document adapters.
//!
//! - `LocalFileDocumentSink` - writes printable reports to a local directory

mod local_file_sink;

pub use local_file_sink::LocalFileDocumentSink;
