//! SAM text rendering for a single record.
//!
//! This is deliberately thin: a record has no header and no knowledge of a
//! reference-sequence dictionary, so every reference name is resolved
//! through the caller-supplied [`ReferenceSequences`] collaborator, falling
//! back to `*` when it can't answer.

use std::io::{self, Write};

use crate::collab::ReferenceSequences;
use crate::record::Record;
use crate::tags::TagValue;

/// Writes one SAM text line (no trailing newline) for `record`.
pub fn write<W: Write>(record: &Record, refs: &dyn ReferenceSequences, out: &mut W) -> io::Result<()> {
    write!(out, "{}", record.name())?;
    write!(out, "\t{}", record.flag())?;
    write!(out, "\t{}", ref_name(refs, record.ref_id()))?;
    write!(out, "\t{}", record.position() + 1)?;
    write!(out, "\t{}", record.mapping_quality())?;
    write!(out, "\t{}", record.cigar_string())?;
    write!(out, "\t{}", mate_ref_field(record, refs))?;
    write!(out, "\t{}", record.mate_position() + 1)?;
    write!(out, "\t{}", record.template_length())?;
    write!(out, "\t{}", sequence_field(record))?;
    write!(out, "\t{}", quality_field(record))?;

    for entry in record.tags() {
        let (key, value) = entry.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        write!(out, "\t{}{}:{}", key[0] as char, key[1] as char, TagDisplay(&value))?;
    }
    Ok(())
}

/// Convenience wrapper around [`write`] that renders straight to a `String`.
pub fn to_string(record: &Record, refs: &dyn ReferenceSequences) -> String {
    let mut buf = Vec::new();
    write(record, refs, &mut buf).expect("writing to a Vec<u8> never fails");
    String::from_utf8(buf).expect("SAM fields are ASCII or valid UTF-8 text")
}

fn ref_name(refs: &dyn ReferenceSequences, ref_id: i32) -> String {
    if ref_id < 0 {
        return "*".to_string();
    }
    refs.name(ref_id).map(str::to_string).unwrap_or_else(|| "*".to_string())
}

fn mate_ref_field(record: &Record, refs: &dyn ReferenceSequences) -> String {
    let ref_id = record.ref_id();
    let mate_ref_id = record.mate_ref_id();
    if ref_id >= 0 && mate_ref_id == ref_id {
        return "=".to_string();
    }
    ref_name(refs, mate_ref_id)
}

fn sequence_field(record: &Record) -> String {
    if record.sequence_length() == 0 {
        return "*".to_string();
    }
    record.sequence().to_string()
}

fn quality_field(record: &Record) -> String {
    let quals = record.base_qualities();
    if quals.is_empty() || quals[0] == 0xFF {
        return "*".to_string();
    }
    quals.iter().map(|&q| ((q as u16 + 33) as u8) as char).collect()
}

/// Renders one tag's value half (`TYPE:VALUE`), following the SAM
/// convention that every integer width collapses to type letter `i`.
struct TagDisplay<'a>(&'a TagValue);

impl std::fmt::Display for TagDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            TagValue::Char(v) => write!(f, "A:{}", *v as char),
            TagValue::Int8(v) => write!(f, "i:{v}"),
            TagValue::UInt8(v) => write!(f, "i:{v}"),
            TagValue::Int16(v) => write!(f, "i:{v}"),
            TagValue::UInt16(v) => write!(f, "i:{v}"),
            TagValue::Int32(v) => write!(f, "i:{v}"),
            TagValue::UInt32(v) => write!(f, "i:{v}"),
            TagValue::Float(v) => write!(f, "f:{v}"),
            TagValue::Text(s) => write!(f, "Z:{s}"),
            TagValue::Hex(s) => write!(f, "H:{s}"),
            TagValue::ArrayInt8(v) => write_array(f, 'c', v),
            TagValue::ArrayUInt8(v) => write_array(f, 'C', v),
            TagValue::ArrayInt16(v) => write_array(f, 's', v),
            TagValue::ArrayUInt16(v) => write_array(f, 'S', v),
            TagValue::ArrayInt32(v) => write_array(f, 'i', v),
            TagValue::ArrayUInt32(v) => write_array(f, 'I', v),
            TagValue::ArrayFloat(v) => write_array(f, 'f', v),
        }
    }
}

fn write_array<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    subtype: char,
    values: &[T],
) -> std::fmt::Result {
    write!(f, "B:{subtype}")?;
    for v in values {
        write!(f, ",{v}")?;
    }
    Ok(())
}
