// Adapters layer: concrete implementations for external systems (files, http, codecs).

pub mod format;
pub mod http;
pub mod storage;

pub use format::OutputFormat;
pub use http::{HttpPartsLookup, HttpSource};
pub use storage::{FileSource, LocalStorage};
