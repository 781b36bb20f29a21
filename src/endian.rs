//! Little-endian field access.
//!
//! The wire format is always little-endian; rather than detect the host's
//! endianness and swap header/CIGAR/tag words in place when it differs (as a
//! C implementation over a native-endian struct would), every multi-byte
//! read or write in this crate goes through [`byteorder`]'s explicit
//! `LittleEndian` primitives. That makes the record's in-memory
//! representation endian-pure by construction: there is no native-endian
//! intermediate state to swap into or out of, on any host, so a record
//! decoded on a big-endian machine and re-encoded there reproduces the
//! original little-endian bytes with no adapter step at all (§4.7's
//! round-trip contract holds trivially rather than by a runtime branch).

use byteorder::{ByteOrder, LittleEndian};

pub fn read_i32(buf: &[u8]) -> i32 {
    LittleEndian::read_i32(buf)
}

pub fn read_u32(buf: &[u8]) -> u32 {
    LittleEndian::read_u32(buf)
}

pub fn read_u16(buf: &[u8]) -> u16 {
    LittleEndian::read_u16(buf)
}

pub fn write_i32(buf: &mut [u8], v: i32) {
    LittleEndian::write_i32(buf, v)
}

pub fn write_u32(buf: &mut [u8], v: u32) {
    LittleEndian::write_u32(buf, v)
}

pub fn write_u16(buf: &mut [u8], v: u16) {
    LittleEndian::write_u16(buf, v)
}
