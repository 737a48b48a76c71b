//! Resource-style readers over host state.
//!
//! Each resource wraps a single on-disk status file behind the
//! `FileSource` capability and interprets it with the delimited key-value
//! parser from `conform-core`. Reads are one-shot snapshots: a resource
//! loads lazily on first access and never rereads.

pub mod bond;
pub mod source;

pub use bond::Bond;
pub use source::{FileSource, LocalFile};
