use std::borrow::Cow;
use std::convert::TryFrom;

use std::io;

use log::warn;

use crate::cigar::{reference_span, CigarOp};
use crate::collab::{reg2bin, RecordWriter};
use crate::error::Error;
use crate::seq::{self, SequenceView};
use crate::tags::{self, TagValue};

/// Segment unmapped (SAM flag bit 0x4).
const FLAG_UNMAPPED: u16 = 0x4;

const OFF_REF_ID: usize = 0;
const OFF_POSITION: usize = 4;
const OFF_L_READ_NAME: usize = 8;
const OFF_MAPQ: usize = 9;
const OFF_BIN: usize = 10;
const OFF_N_CIGAR_OP: usize = 12;
const OFF_FLAG: usize = 14;
const OFF_L_SEQ: usize = 16;
const OFF_NEXT_REF_ID: usize = 20;
const OFF_NEXT_POS: usize = 24;
const OFF_TLEN: usize = 28;
const HEADER_LEN: usize = 32;

/// A lazy, zero-allocation iterator over a record's packed CIGAR words.
#[derive(Clone)]
pub struct CigarOps<'a> {
    data: &'a [u8],
}

impl<'a> Iterator for CigarOps<'a> {
    type Item = CigarOp;

    fn next(&mut self) -> Option<CigarOp> {
        if self.data.len() < 4 {
            return None;
        }
        let raw = crate::endian::read_u32(&self.data[..4]);
        self.data = &self.data[4..];
        Some(CigarOp::from_raw(raw))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.data.len() / 4;
        (n, Some(n))
    }
}

impl<'a> ExactSizeIterator for CigarOps<'a> {}

/// A single BAM alignment record.
///
/// Wraps a contiguous byte buffer laid out exactly as the wire format: fixed
/// header fields, a NUL-terminated name, packed CIGAR, packed nucleotides,
/// per-base qualities, and a tag stream, all computed by offset arithmetic
/// from the header alone. `Record<'a>` borrows its buffer from a reader
/// until the first mutation, at which point [`Cow::to_mut`] duplicates it;
/// this `Cow<'a, [u8]>` *is* the copy-on-write manager — there is no
/// separate borrowed/owned flag to track or to scrub before serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    buf: Cow<'a, [u8]>,
}

impl<'a> Record<'a> {
    /// Wraps an externally supplied buffer as a borrowed, read-only record.
    /// Validates that the fixed header is present and that every
    /// variable-length region it describes actually fits in `data`; never
    /// panics on a short or corrupt buffer.
    pub fn from_bytes(data: &'a [u8]) -> Result<Record<'a>, Error> {
        if data.len() < HEADER_LEN {
            return Err(Error::BadLength {
                field: "header",
                value: data.len() as i64,
            });
        }
        let name_len = data[OFF_L_READ_NAME] as usize;
        if name_len < 2 {
            return Err(Error::BadLength {
                field: "name_length",
                value: name_len as i64,
            });
        }
        let n_cigar_op = crate::endian::read_u16(&data[OFF_N_CIGAR_OP..OFF_N_CIGAR_OP + 2]) as usize;
        let l_seq = crate::endian::read_u32(&data[OFF_L_SEQ..OFF_L_SEQ + 4]) as usize;
        let tags_offset = HEADER_LEN + name_len + 4 * n_cigar_op + (l_seq + 1) / 2 + l_seq;
        if data.len() < tags_offset {
            return Err(Error::BadLength {
                field: "buffer",
                value: data.len() as i64,
            });
        }
        Ok(Record {
            buf: Cow::Borrowed(data),
        })
    }

    /// Assembles a fresh, owned record from a name, an ASCII base string, a
    /// CIGAR, and a pre-encoded tag stream (as produced by
    /// [`TagValue::encode_payload`] callers, or simply empty). Quality
    /// values default to 0xFF (unknown); `ref_id`/`position`/mate fields
    /// default to unset; `bin` is computed immediately.
    pub fn build(
        name: &str,
        sequence: &str,
        cigar: &[CigarOp],
        tag_bytes: &[u8],
    ) -> Result<Record<'static>, Error> {
        if name.is_empty() || name.len() > 254 {
            return Err(Error::BadLength {
                field: "name",
                value: name.len() as i64,
            });
        }
        if sequence.len() > 255 {
            return Err(Error::BadLength {
                field: "sequence",
                value: sequence.len() as i64,
            });
        }
        if cigar.len() > u16::MAX as usize {
            return Err(Error::BadLength {
                field: "n_cigar_op",
                value: cigar.len() as i64,
            });
        }

        let l_seq = sequence.len();
        let mut buf = Vec::with_capacity(
            HEADER_LEN + name.len() + 1 + 4 * cigar.len() + (l_seq + 1) / 2 + l_seq + tag_bytes.len(),
        );
        buf.extend_from_slice(&(-1i32).to_le_bytes()); // ref_id
        buf.extend_from_slice(&(-1i32).to_le_bytes()); // position
        buf.push((name.len() + 1) as u8); // l_read_name
        buf.push(0); // mapq
        buf.extend_from_slice(&0u16.to_le_bytes()); // bin, fixed up below
        buf.extend_from_slice(&(cigar.len() as u16).to_le_bytes()); // n_cigar_op
        buf.extend_from_slice(&0u16.to_le_bytes()); // flag
        buf.extend_from_slice(&(l_seq as u32).to_le_bytes()); // l_seq
        buf.extend_from_slice(&(-1i32).to_le_bytes()); // next_ref_id
        buf.extend_from_slice(&(-1i32).to_le_bytes()); // next_pos
        buf.extend_from_slice(&0i32.to_le_bytes()); // tlen
        buf.extend_from_slice(name.as_bytes());
        buf.push(0);
        for op in cigar {
            buf.extend_from_slice(&op.to_raw().to_le_bytes());
        }
        buf.extend(seq::pack(sequence));
        buf.extend(std::iter::repeat(0xFFu8).take(l_seq));
        buf.extend_from_slice(tag_bytes);

        let mut record = Record {
            buf: Cow::Owned(buf),
        };
        record.recalculate_bin();
        Ok(record)
    }

    fn ensure_owned(&mut self) -> &mut Vec<u8> {
        self.buf.to_mut()
    }

    // ---- offset arithmetic, derived fresh from the header every call ----

    fn name_len(&self) -> usize {
        self.buf[OFF_L_READ_NAME] as usize
    }

    fn n_cigar_op(&self) -> usize {
        crate::endian::read_u16(&self.buf[OFF_N_CIGAR_OP..OFF_N_CIGAR_OP + 2]) as usize
    }

    fn l_seq(&self) -> usize {
        crate::endian::read_u32(&self.buf[OFF_L_SEQ..OFF_L_SEQ + 4]) as usize
    }

    fn cigar_offset(&self) -> usize {
        HEADER_LEN + self.name_len()
    }

    fn seq_offset(&self) -> usize {
        self.cigar_offset() + 4 * self.n_cigar_op()
    }

    fn qual_offset(&self) -> usize {
        self.seq_offset() + (self.l_seq() + 1) / 2
    }

    fn tags_offset(&self) -> usize {
        self.qual_offset() + self.l_seq()
    }

    // ---- fixed-field reads, O(1), no allocation ----

    pub fn ref_id(&self) -> i32 {
        crate::endian::read_i32(&self.buf[OFF_REF_ID..OFF_REF_ID + 4])
    }

    pub fn position(&self) -> i32 {
        crate::endian::read_i32(&self.buf[OFF_POSITION..OFF_POSITION + 4])
    }

    pub fn bin(&self) -> u16 {
        crate::endian::read_u16(&self.buf[OFF_BIN..OFF_BIN + 2])
    }

    pub fn mapping_quality(&self) -> u8 {
        self.buf[OFF_MAPQ]
    }

    pub fn flag(&self) -> u16 {
        crate::endian::read_u16(&self.buf[OFF_FLAG..OFF_FLAG + 2])
    }

    pub fn is_unmapped(&self) -> bool {
        self.flag() & FLAG_UNMAPPED != 0
    }

    pub fn sequence_length(&self) -> usize {
        self.l_seq()
    }

    pub fn mate_ref_id(&self) -> i32 {
        crate::endian::read_i32(&self.buf[OFF_NEXT_REF_ID..OFF_NEXT_REF_ID + 4])
    }

    pub fn mate_position(&self) -> i32 {
        crate::endian::read_i32(&self.buf[OFF_NEXT_POS..OFF_NEXT_POS + 4])
    }

    pub fn template_length(&self) -> i32 {
        crate::endian::read_i32(&self.buf[OFF_TLEN..OFF_TLEN + 4])
    }

    pub fn name(&self) -> &str {
        let start = HEADER_LEN;
        let end = start + self.name_len() - 1; // exclude the NUL
        std::str::from_utf8(&self.buf[start..end]).unwrap_or("")
    }

    pub fn cigar(&self) -> CigarOps<'_> {
        let start = self.cigar_offset();
        let end = start + 4 * self.n_cigar_op();
        CigarOps {
            data: &self.buf[start..end],
        }
    }

    pub fn cigar_string(&self) -> String {
        if self.n_cigar_op() == 0 {
            return "*".to_string();
        }
        self.cigar().map(|op| op.to_string()).collect()
    }

    /// Sum of reference-consuming CIGAR op lengths, or 0 if the record is
    /// unmapped (independent of whether a CIGAR is actually present — an
    /// unmapped record's CIGAR, if any, is preserved verbatim but never
    /// contributes to `bin`).
    pub fn bases_covered(&self) -> u32 {
        if self.is_unmapped() {
            return 0;
        }
        let ops: Vec<CigarOp> = self.cigar().collect();
        reference_span(&ops)
    }

    pub fn raw_sequence_bytes(&self) -> &[u8] {
        let start = self.seq_offset();
        let end = self.qual_offset();
        &self.buf[start..end]
    }

    pub fn sequence(&self) -> SequenceView<'_> {
        SequenceView::new(self.raw_sequence_bytes(), 0, self.l_seq())
    }

    pub fn base_qualities(&self) -> &[u8] {
        let start = self.qual_offset();
        let end = self.tags_offset();
        &self.buf[start..end]
    }

    // ---- fixed-field writes ----

    pub fn set_ref_id(&mut self, value: i32) {
        crate::endian::write_i32(&mut self.ensure_owned()[OFF_REF_ID..OFF_REF_ID + 4], value);
    }

    pub fn set_position(&mut self, value: i32) {
        crate::endian::write_i32(&mut self.ensure_owned()[OFF_POSITION..OFF_POSITION + 4], value);
        self.recalculate_bin();
    }

    pub fn set_mapping_quality(&mut self, value: u8) {
        self.ensure_owned()[OFF_MAPQ] = value;
    }

    /// Sets `flag` directly. Per the companion index's documented (if
    /// surprising) contract, this never recomputes `bin` even though
    /// `bases_covered` depends on the unmapped bit; a caller that flips that
    /// bit and wants `bin` to stay accurate must call
    /// [`Record::recalculate_bin`] explicitly. Flipping the bit logs a
    /// warning so the staleness is at least observable.
    pub fn set_flag(&mut self, value: u16) {
        let was_unmapped = self.is_unmapped();
        self.ensure_owned()[OFF_FLAG..OFF_FLAG + 2].copy_from_slice(&value.to_le_bytes());
        if was_unmapped != (value & FLAG_UNMAPPED != 0) {
            warn!(
                "flag write flipped the unmapped bit on {:?}; bin was not recomputed",
                self.name()
            );
        }
    }

    pub fn set_mate_ref_id(&mut self, value: i32) {
        crate::endian::write_i32(
            &mut self.ensure_owned()[OFF_NEXT_REF_ID..OFF_NEXT_REF_ID + 4],
            value,
        );
    }

    pub fn set_mate_position(&mut self, value: i32) {
        crate::endian::write_i32(&mut self.ensure_owned()[OFF_NEXT_POS..OFF_NEXT_POS + 4], value);
    }

    pub fn set_template_length(&mut self, value: i32) {
        crate::endian::write_i32(&mut self.ensure_owned()[OFF_TLEN..OFF_TLEN + 4], value);
    }

    /// Recomputes `bin` from the current `position` and `bases_covered()`.
    /// Called automatically by the `position` and `cigar` setters; exposed
    /// publicly so a caller can opt back in after a `flag` write that
    /// changed mappedness.
    pub fn recalculate_bin(&mut self) {
        let start = self.position();
        let end = start + self.bases_covered() as i32;
        let bin = reg2bin(start, end);
        self.ensure_owned()[OFF_BIN..OFF_BIN + 2].copy_from_slice(&bin.to_le_bytes());
    }

    /// Rewrites the read name, updating `l_read_name` and shifting every
    /// following region.
    pub fn set_name(&mut self, name: &str) -> Result<(), Error> {
        if name.is_empty() || name.len() > 254 {
            return Err(Error::BadLength {
                field: "name",
                value: name.len() as i64,
            });
        }
        let old_len = self.name_len();
        let mut new_bytes = Vec::with_capacity(name.len() + 1);
        new_bytes.extend_from_slice(name.as_bytes());
        new_bytes.push(0);
        let buf = self.ensure_owned();
        buf.splice(HEADER_LEN..HEADER_LEN + old_len, new_bytes);
        buf[OFF_L_READ_NAME] = (name.len() + 1) as u8;
        Ok(())
    }

    /// Replaces the CIGAR, shifting sequence/quality/tags accordingly, then
    /// recomputes `bin`.
    pub fn set_cigar(&mut self, ops: &[CigarOp]) -> Result<(), Error> {
        if ops.len() > u16::MAX as usize {
            return Err(Error::BadLength {
                field: "n_cigar_op",
                value: ops.len() as i64,
            });
        }
        let start = self.cigar_offset();
        let old_len = 4 * self.n_cigar_op();
        let mut new_bytes = Vec::with_capacity(4 * ops.len());
        for op in ops {
            new_bytes.extend_from_slice(&op.to_raw().to_le_bytes());
        }
        let buf = self.ensure_owned();
        buf.splice(start..start + old_len, new_bytes);
        buf[OFF_N_CIGAR_OP..OFF_N_CIGAR_OP + 2].copy_from_slice(&(ops.len() as u16).to_le_bytes());
        self.recalculate_bin();
        Ok(())
    }

    /// Replaces the sequence, repacking nibbles and resetting every quality
    /// value to 0xFF (unknown). Does not touch `bin` — sequence length has
    /// no bearing on `bases_covered`.
    pub fn set_sequence(&mut self, bases: &str) -> Result<(), Error> {
        if bases.len() > 255 {
            return Err(Error::BadLength {
                field: "sequence",
                value: bases.len() as i64,
            });
        }
        let old_l_seq = self.l_seq();
        let seq_start = self.seq_offset();
        let old_packed_len = (old_l_seq + 1) / 2;
        let new_packed = seq::pack(bases);
        let new_l_seq = bases.len();

        let buf = self.ensure_owned();
        buf.splice(seq_start..seq_start + old_packed_len, new_packed);
        buf[OFF_L_SEQ..OFF_L_SEQ + 4].copy_from_slice(&(new_l_seq as u32).to_le_bytes());

        let qual_start = seq_start + (new_l_seq + 1) / 2;
        let new_quals = std::iter::repeat(0xFFu8).take(new_l_seq);
        self.ensure_owned()
            .splice(qual_start..qual_start + old_l_seq, new_quals);
        Ok(())
    }

    /// Overwrites the per-base quality array. The new array must be exactly
    /// `sequence_length()` bytes; this never resizes the record.
    pub fn set_base_qualities(&mut self, qualities: &[u8]) -> Result<(), Error> {
        if qualities.len() != self.l_seq() {
            return Err(Error::BadLength {
                field: "quality_length",
                value: qualities.len() as i64,
            });
        }
        let start = self.qual_offset();
        let end = start + qualities.len();
        self.ensure_owned()[start..end].copy_from_slice(qualities);
        Ok(())
    }

    // ---- tag storage ----

    /// Looks up a tag by its two-byte key.
    pub fn tag_get(&self, key: &[u8]) -> Result<Option<TagValue>, Error> {
        let key = parse_key(key)?;
        let offset = self.tags_offset();
        for entry in tags::TagIter::new(&self.buf[offset..]) {
            let (k, v) = entry?;
            if k == key {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }

    /// Inserts, replaces, or deletes a tag. `value = None` deletes; a miss
    /// with `value = None` is a no-op.
    pub fn tag_set(&mut self, key: &[u8], value: Option<TagValue>) -> Result<(), Error> {
        let key = parse_key(key)?;
        let offset = self.tags_offset();
        let found = tags::find_entry(&self.buf[offset..], key)?;

        match (found, value) {
            (Some((s, e)), None) => {
                let buf = self.ensure_owned();
                buf.drain(offset + s..offset + e);
            }
            (Some((s, e)), Some(v)) => {
                let old_payload_len = (e - s) - 3;
                let new_payload_len = v.payload_len();
                let buf = self.ensure_owned();
                if old_payload_len == new_payload_len {
                    let mut payload = Vec::with_capacity(new_payload_len);
                    v.encode_payload(&mut payload);
                    buf[offset + s + 2] = v.type_byte();
                    buf[offset + s + 3..offset + e].copy_from_slice(&payload);
                } else {
                    let mut entry = vec![key[0], key[1], v.type_byte()];
                    v.encode_payload(&mut entry);
                    buf.splice(offset + s..offset + e, entry);
                }
            }
            (None, Some(v)) => {
                let mut entry = vec![key[0], key[1], v.type_byte()];
                v.encode_payload(&mut entry);
                self.ensure_owned().extend_from_slice(&entry);
            }
            (None, None) => {}
        }
        Ok(())
    }

    /// Removes every tag, truncating the buffer back to the tags offset.
    pub fn remove_all_tags(&mut self) {
        let offset = self.tags_offset();
        self.ensure_owned().truncate(offset);
    }

    /// Yields `(key, value)` pairs in stream order.
    pub fn tags(&self) -> tags::TagIter<'_> {
        tags::TagIter::new(&self.buf[self.tags_offset()..])
    }

    /// Number of tag entries; O(N) in the number of tags.
    pub fn tag_count(&self) -> Result<usize, Error> {
        tags::count_entries(&self.buf[self.tags_offset()..])
    }

    /// Writes this record's wire encoding: a 4-byte little-endian block
    /// size followed by the buffer itself. There's no borrowed-flag byte to
    /// normalize first — the `Cow` never materializes one — so this is just
    /// two writes.
    pub fn write_to<W: RecordWriter>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i32(self.buf.len() as i32)?;
        writer.write_bytes(&self.buf)?;
        Ok(())
    }
}

fn parse_key(key: &[u8]) -> Result<[u8; 2], Error> {
    if key.len() != 2 {
        return Err(Error::BadKey(key.len()));
    }
    Ok([key[0], key[1]])
}

impl<'a> TryFrom<&'a [u8]> for Record<'a> {
    type Error = Error;

    fn try_from(data: &'a [u8]) -> Result<Self, Error> {
        Record::from_bytes(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s1() -> Record<'static> {
        let ops = [CigarOp::new(22, 'M').unwrap()];
        Record::build("readname", "AGCTGACTACGTAATAGCCCTA", &ops, &[]).unwrap()
    }

    #[test]
    fn scenario_s1_sequence_mutation() {
        let mut rec = s1();
        assert_eq!(rec.sequence_length(), 22);
        assert_eq!(rec.cigar_string(), "22M");

        rec.set_sequence("AGCTGGCTACGTAATAGCCCT").unwrap();
        assert_eq!(rec.sequence().slice(0..8).to_string(), "AGCTGGCT");
        assert_eq!(rec.base_qualities()[20], 0xFF);
    }

    #[test]
    fn scenario_s2_tag_roundtrip() {
        let mut rec = s1();
        rec.tag_set(b"RG", Some(TagValue::Int32(15))).unwrap();
        assert_eq!(rec.tag_get(b"RG").unwrap(), Some(TagValue::Int32(15)));

        rec.tag_set(b"X1", Some(TagValue::ArrayInt32(vec![1, 2, 3, 4, 5])))
            .unwrap();
        assert_eq!(
            rec.tag_get(b"X1").unwrap(),
            Some(TagValue::ArrayInt32(vec![1, 2, 3, 4, 5]))
        );

        rec.tag_set(b"RG", Some(TagValue::Float(5.6))).unwrap();
        match rec.tag_get(b"RG").unwrap() {
            Some(TagValue::Float(v)) => assert!((v - 5.6).abs() < 1e-5),
            other => panic!("expected float, got {other:?}"),
        }

        let before = rec.tag_count().unwrap();
        rec.tag_set(b"X1", None).unwrap();
        assert_eq!(rec.tag_count().unwrap(), before - 1);
        assert_eq!(rec.tag_get(b"X1").unwrap(), None);
    }

    #[test]
    fn scenario_s3_cigar_mutation_updates_bin() {
        let mut rec = s1();
        rec.set_position(1000);
        let ops = [CigarOp::new(20, 'M').unwrap(), CigarOp::new(2, 'X').unwrap()];
        rec.set_cigar(&ops).unwrap();
        assert_eq!(rec.cigar_string(), "20M2X");
        assert_eq!(rec.bases_covered(), 22);
        assert_eq!(rec.bin(), reg2bin(1000, 1022));
    }

    fn encode_tag(key: [u8; 2], value: &TagValue) -> Vec<u8> {
        let mut out = vec![key[0], key[1], value.type_byte()];
        value.encode_payload(&mut out);
        out
    }

    #[test]
    fn scenario_s4_builder_with_raw_tags() {
        let mut tag_bytes = Vec::new();
        tag_bytes.extend(encode_tag(*b"X0", &TagValue::Int32(24)));
        tag_bytes.extend(encode_tag(*b"X1", &TagValue::Text("abcd".to_string())));
        tag_bytes.extend(encode_tag(*b"X2", &TagValue::ArrayInt32(vec![1, 2, 3])));

        let ops = [CigarOp::new(22, 'M').unwrap()];
        let rec = Record::build("readname", "AGCTGACTACGTAATAGCCCTA", &ops, &tag_bytes).unwrap();

        assert_eq!(rec.tag_get(b"X0").unwrap(), Some(TagValue::Int32(24)));
        assert_eq!(
            rec.tag_get(b"X1").unwrap(),
            Some(TagValue::Text("abcd".to_string()))
        );
        assert_eq!(
            rec.tag_get(b"X2").unwrap(),
            Some(TagValue::ArrayInt32(vec![1, 2, 3]))
        );
        assert_eq!(rec.tag_count().unwrap(), 3);
    }

    #[test]
    fn records_from_identical_inputs_compare_equal() {
        let ops = [CigarOp::new(22, 'M').unwrap()];
        let a = Record::build("readname", "AGCTGACTACGTAATAGCCCTA", &ops, &[]).unwrap();
        let b = Record::build("readname", "AGCTGACTACGTAATAGCCCTA", &ops, &[]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mutating_a_borrowed_copy_does_not_touch_the_shared_buffer() {
        let owned = s1();
        let shared: &[u8] = owned.buf.as_ref();
        let mut borrowed = Record::from_bytes(shared).unwrap();
        borrowed.set_mapping_quality(42);
        assert_eq!(Record::from_bytes(shared).unwrap().mapping_quality(), 0);
        assert_eq!(borrowed.mapping_quality(), 42);
    }

    #[test]
    fn truncated_header_is_an_error_not_a_panic() {
        let data = [0u8; 10];
        assert_eq!(
            Record::from_bytes(&data),
            Err(Error::BadLength {
                field: "header",
                value: 10
            })
        );
    }

    #[test]
    fn truncated_variable_region_is_an_error_not_a_panic() {
        let full = s1();
        let bytes: &[u8] = full.buf.as_ref();
        let truncated = &bytes[..bytes.len() - 5];
        assert!(matches!(
            Record::from_bytes(truncated),
            Err(Error::BadLength { field: "buffer", .. })
        ));
    }

    #[test]
    fn scenario_s6_wire_round_trip() {
        let rec = s1();
        let mut out = Vec::new();
        rec.write_to(&mut out).unwrap();

        let (len_bytes, body) = out.split_at(4);
        let len = crate::endian::read_i32(len_bytes);
        assert_eq!(len as usize, body.len());

        let roundtripped = Record::from_bytes(body).unwrap();
        assert_eq!(rec, roundtripped);
    }

    #[test]
    fn unmapped_flag_zeroes_bases_covered_but_preserves_cigar() {
        let mut rec = s1();
        rec.set_flag(FLAG_UNMAPPED);
        assert!(rec.is_unmapped());
        assert_eq!(rec.bases_covered(), 0);
        assert_eq!(rec.cigar_string(), "22M");
    }
}
