//! DNS wire format (RFC 1035 §4.1) for the single-question, uncompressed
//! queries the relay accepts.
//!
//! Every read and write goes through [`WireReader`] / [`WireWriter`], which
//! reject out-of-range offsets instead of panicking.

mod cursor;
mod errors;
mod header;
mod question;
mod response;

pub use cursor::{WireReader, WireWriter};
pub use errors::WireError;
pub use header::{Header, HEADER_LEN};
pub use question::{
    decode_question, encode_question, parse_query, question_span, DecodedQuestion,
    NameTermination, NAME_CAPACITY,
};
pub use response::{
    encode_blocked_response, encode_name_error, encode_refused, encode_synthetic_address,
    encode_synthetic_address_v4, ANSWER_RECORD_LEN, RCODE_NXDOMAIN, RCODE_REFUSED,
};

/// Largest datagram the relay reads or writes.
pub const MAX_MESSAGE_LEN: usize = 1500;
