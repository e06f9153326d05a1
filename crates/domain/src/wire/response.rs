//! Locally synthesized responses for blocked queries.
//!
//! Each encoder copies the question bytes of the original query unchanged and
//! writes a fixed header recipe in front of them. Capacity is checked once up
//! front, so a failed encode never leaves a partial message in `out`.

use super::cursor::WireWriter;
use super::errors::WireError;
use super::header::{Header, HEADER_LEN};
use super::question::question_span;
use crate::response_mode::ResponseMode;
use std::net::Ipv4Addr;

pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

/// Pointer name (2) + type (2) + class (2) + TTL (4) + RDLENGTH (2) + IPv4 (4).
pub const ANSWER_RECORD_LEN: usize = 16;

/// Compression pointer to offset 12, where the copied question name starts.
const POINTER_TO_QUESTION: u16 = 0xC00C;
const TYPE_A: u16 = 1;
const CLASS_IN: u16 = 1;

/// QR + AA in byte 2, RA in byte 3. RD is copied from the query.
const SYNTHETIC_FLAGS: u16 = 0x8480;
/// QR + RD in byte 2, RA in byte 3. RCODE is or-ed in.
const ERROR_FLAGS: u16 = 0x8180;
const FLAG_RD: u16 = 0x0100;

/// Builds an authoritative A answer pointing the queried name at `address`.
///
/// `address` is dotted IPv4 text; anything else fails with
/// [`WireError::InvalidSyntheticAddress`].
pub fn encode_synthetic_address(
    query: &[u8],
    out: &mut [u8],
    address: &str,
    ttl: u32,
) -> Result<usize, WireError> {
    let address: Ipv4Addr = address
        .parse()
        .map_err(|_| WireError::InvalidSyntheticAddress(address.to_string()))?;
    encode_synthetic_address_v4(query, out, address, ttl)
}

pub fn encode_synthetic_address_v4(
    query: &[u8],
    out: &mut [u8],
    address: Ipv4Addr,
    ttl: u32,
) -> Result<usize, WireError> {
    let request = Header::read(query)?;
    let question = &query[question_span(query)?];

    let mut writer = WireWriter::new(out);
    writer.ensure(HEADER_LEN + question.len() + ANSWER_RECORD_LEN)?;

    Header {
        id: request.id,
        flags: SYNTHETIC_FLAGS | (request.flags & FLAG_RD),
        qdcount: request.qdcount,
        ancount: 1,
        nscount: 0,
        arcount: 0,
    }
    .write(&mut writer)?;
    writer.write_bytes(question)?;

    writer.write_u16(POINTER_TO_QUESTION)?;
    writer.write_u16(TYPE_A)?;
    writer.write_u16(CLASS_IN)?;
    writer.write_u32(ttl)?;
    writer.write_u16(4)?;
    writer.write_bytes(&address.octets())?;

    Ok(writer.finish())
}

/// NXDOMAIN: header and question only.
pub fn encode_name_error(query: &[u8], out: &mut [u8]) -> Result<usize, WireError> {
    encode_error_response(query, out, RCODE_NXDOMAIN)
}

/// REFUSED: identical to NXDOMAIN apart from the response code.
pub fn encode_refused(query: &[u8], out: &mut [u8]) -> Result<usize, WireError> {
    encode_error_response(query, out, RCODE_REFUSED)
}

fn encode_error_response(query: &[u8], out: &mut [u8], rcode: u8) -> Result<usize, WireError> {
    let id = Header::read_id(query)?;
    let question = &query[question_span(query)?];

    let mut writer = WireWriter::new(out);
    writer.ensure(HEADER_LEN + question.len())?;

    Header {
        id,
        flags: ERROR_FLAGS | u16::from(rcode & 0x0F),
        qdcount: 1,
        ancount: 0,
        nscount: 0,
        arcount: 0,
    }
    .write(&mut writer)?;
    writer.write_bytes(question)?;

    Ok(writer.finish())
}

/// Dispatches to the encoder selected by `mode`.
pub fn encode_blocked_response(
    query: &[u8],
    out: &mut [u8],
    mode: &ResponseMode,
    ttl: u32,
) -> Result<usize, WireError> {
    match mode {
        ResponseMode::SyntheticAddress(address) => {
            encode_synthetic_address_v4(query, out, *address, ttl)
        }
        ResponseMode::NameError => encode_name_error(query, out),
        ResponseMode::Refused => encode_refused(query, out),
    }
}
