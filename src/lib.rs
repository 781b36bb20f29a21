//! In-memory BAM alignment record: typed field access, copy-on-write
//! mutation, and SAM/MsgPack serialization.
//!
//! This crate covers a single record's buffer layout and semantics; reading
//! a file, decompressing a BGZF block, and walking a reference dictionary
//! are the job of whatever sits above it, reached through the collaborator
//! traits in [`collab`].

pub mod cigar;
pub mod collab;
pub mod endian;
pub mod error;
pub mod msgpack;
pub mod record;
pub mod sam;
pub mod seq;
pub mod tags;

pub use cigar::CigarOp;
pub use collab::{reg2bin, MsgPackSink, NoReferences, ReferenceSequences, RecordWriter};
pub use error::Error;
pub use record::Record;
pub use seq::SequenceView;
pub use tags::TagValue;
