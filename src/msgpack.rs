//! MsgPack emission for a single record, reduced to the primitive pack
//! operations of [`MsgPackSink`]. Framing, buffering, and the actual
//! MsgPack wire encoding live in whatever packer the caller plugs in.

use std::io;

use crate::collab::MsgPackSink;
use crate::record::Record;
use crate::tags::TagValue;

/// Packs `record` as the 13-element array described for this crate's
/// MsgPack representation: name, flag, ref_id, 1-based position, mapping
/// quality, CIGAR lengths, CIGAR op characters, mate ref_id, 1-based mate
/// position, template length, sequence text, quality bytes, and a tag map
/// in the record's own iteration order.
pub fn pack(record: &Record, sink: &mut dyn MsgPackSink) -> io::Result<()> {
    sink.begin_array(13)?;

    sink.pack_str(record.name())?;
    sink.pack_int(record.flag() as i64)?;
    sink.pack_int(record.ref_id() as i64)?;
    sink.pack_int(record.position() as i64 + 1)?;
    sink.pack_int(record.mapping_quality() as i64)?;

    let ops: Vec<_> = record.cigar().collect();
    sink.begin_array(ops.len())?;
    for op in &ops {
        sink.pack_int(op.length() as i64)?;
    }
    sink.begin_array(ops.len())?;
    for op in &ops {
        sink.pack_str(&op.op_char().to_string())?;
    }

    sink.pack_int(record.mate_ref_id() as i64)?;
    sink.pack_int(record.mate_position() as i64 + 1)?;
    sink.pack_int(record.template_length() as i64)?;
    sink.pack_str(&record.sequence().to_string())?;
    sink.pack_bytes(record.base_qualities())?;

    let count = record
        .tag_count()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    sink.begin_map(count)?;
    for entry in record.tags() {
        let (key, value) = entry.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let key_str = format!("{}{}", key[0] as char, key[1] as char);
        sink.pack_str(&key_str)?;
        pack_value(sink, &value)?;
    }

    Ok(())
}

fn pack_value(sink: &mut dyn MsgPackSink, value: &TagValue) -> io::Result<()> {
    match value {
        TagValue::Char(v) => sink.pack_str(&(*v as char).to_string()),
        TagValue::Int8(v) => sink.pack_int(*v as i64),
        TagValue::UInt8(v) => sink.pack_int(*v as i64),
        TagValue::Int16(v) => sink.pack_int(*v as i64),
        TagValue::UInt16(v) => sink.pack_int(*v as i64),
        TagValue::Int32(v) => sink.pack_int(*v as i64),
        TagValue::UInt32(v) => sink.pack_int(*v as i64),
        TagValue::Float(v) => sink.pack_f32(*v),
        TagValue::Text(s) | TagValue::Hex(s) => sink.pack_str(s),
        TagValue::ArrayInt8(v) => pack_int_array(sink, v.iter().map(|x| *x as i64)),
        TagValue::ArrayUInt8(v) => pack_int_array(sink, v.iter().map(|x| *x as i64)),
        TagValue::ArrayInt16(v) => pack_int_array(sink, v.iter().map(|x| *x as i64)),
        TagValue::ArrayUInt16(v) => pack_int_array(sink, v.iter().map(|x| *x as i64)),
        TagValue::ArrayInt32(v) => pack_int_array(sink, v.iter().map(|x| *x as i64)),
        TagValue::ArrayUInt32(v) => pack_int_array(sink, v.iter().map(|x| *x as i64)),
        TagValue::ArrayFloat(v) => {
            sink.begin_array(v.len())?;
            for x in v {
                sink.pack_f32(*x)?;
            }
            Ok(())
        }
    }
}

fn pack_int_array(sink: &mut dyn MsgPackSink, values: impl ExactSizeIterator<Item = i64>) -> io::Result<()> {
    sink.begin_array(values.len())?;
    for v in values {
        sink.pack_int(v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cigar::CigarOp;

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl MsgPackSink for RecordingSink {
        fn begin_array(&mut self, len: usize) -> io::Result<()> {
            self.calls.push(format!("array({len})"));
            Ok(())
        }
        fn begin_map(&mut self, len: usize) -> io::Result<()> {
            self.calls.push(format!("map({len})"));
            Ok(())
        }
        fn pack_int(&mut self, value: i64) -> io::Result<()> {
            self.calls.push(format!("int({value})"));
            Ok(())
        }
        fn pack_str(&mut self, value: &str) -> io::Result<()> {
            self.calls.push(format!("str({value})"));
            Ok(())
        }
        fn pack_bytes(&mut self, value: &[u8]) -> io::Result<()> {
            self.calls.push(format!("bytes(len={})", value.len()));
            Ok(())
        }
        fn pack_f32(&mut self, value: f32) -> io::Result<()> {
            self.calls.push(format!("f32({value})"));
            Ok(())
        }
    }

    #[test]
    fn scenario_s5_shape_and_header_fields() {
        let ops = [CigarOp::new(22, 'M').unwrap()];
        let mut tag_bytes = Vec::new();
        let mut push = |key: [u8; 2], v: TagValue| {
            tag_bytes.push(key[0]);
            tag_bytes.push(key[1]);
            tag_bytes.push(v.type_byte());
            v.encode_payload(&mut tag_bytes);
        };
        push(*b"X0", TagValue::Int32(24));
        push(*b"X1", TagValue::Text("abcd".to_string()));
        push(*b"X2", TagValue::ArrayInt32(vec![1, 2, 3]));

        let record = Record::build("readname", "AGCTGACTACGTAATAGCCCTA", &ops, &tag_bytes).unwrap();

        let mut sink = RecordingSink::default();
        pack(&record, &mut sink).unwrap();

        assert_eq!(sink.calls[0], "array(13)");
        assert_eq!(sink.calls[1], "str(readname)");
        assert!(sink.calls.contains(&"array(1)".to_string())); // cigar lengths/chars
        assert!(sink.calls.contains(&"int(22)".to_string()));
        assert!(sink.calls.contains(&"str(M)".to_string()));
        assert!(sink.calls.contains(&"str(AGCTGACTACGTAATAGCCCTA)".to_string()));
        assert!(sink.calls.contains(&"map(3)".to_string()));
    }
}
