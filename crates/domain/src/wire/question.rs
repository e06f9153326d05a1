use super::cursor::{WireReader, WireWriter};
use super::errors::WireError;
use super::header::HEADER_LEN;
use super::MAX_MESSAGE_LEN;
use crate::record_type::RecordType;
use std::ops::Range;

/// Size of the decoded-name buffer. The dotted name plus its trailing
/// separator must stay strictly below this many bytes.
pub const NAME_CAPACITY: usize = 256;

const MAX_LABEL_LEN: usize = 63;

/// Why the label scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTermination {
    /// Zero-length label reached.
    Terminated,
    /// Input ended before the zero-length label.
    Truncated,
    /// The next label would not fit in [`NAME_CAPACITY`]; the name keeps the
    /// labels decoded so far.
    CapacityReached,
}

/// Question section of a query, decoded from offset 12.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuestion {
    /// Dot-joined labels, no trailing dot. Empty when nothing was decoded.
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
    /// Offset of the first byte after QCLASS, or of the scan position when
    /// type and class were not present.
    pub question_end: usize,
    pub termination: NameTermination,
    /// True when QTYPE and QCLASS followed the terminating label.
    pub has_type_class: bool,
}

impl DecodedQuestion {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_code(self.qtype)
    }

    /// Mnemonic for log lines, `TYPE<n>` for codes without one.
    pub fn type_label(&self) -> String {
        match self.record_type() {
            Some(record_type) => record_type.as_str().to_string(),
            None => format!("TYPE{}", self.qtype),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.termination == NameTermination::Terminated && self.has_type_class
    }
}

/// Walks the length-prefixed labels starting at offset 12.
///
/// Never fails: problems show up as an empty `name`, a non-`Terminated`
/// termination or missing type/class. Compression pointers are not followed;
/// their first byte is read as an ordinary label length.
pub fn decode_question(buf: &[u8]) -> DecodedQuestion {
    let mut reader = WireReader::at(buf, HEADER_LEN);
    let mut name: Vec<u8> = Vec::with_capacity(64);

    // The scan position stays on the length octet that ended the walk.
    let termination = loop {
        let mut next = reader.clone();
        let label_len = match next.read_u8() {
            Ok(0) => break NameTermination::Terminated,
            Ok(len) => len as usize,
            Err(_) => break NameTermination::Truncated,
        };
        if name.len() + label_len + 1 >= NAME_CAPACITY {
            break NameTermination::CapacityReached;
        }
        name.extend_from_slice(next.read_up_to(label_len));
        name.push(b'.');
        reader = next;
    };

    if name.last() == Some(&b'.') {
        name.pop();
    }
    let name = String::from_utf8_lossy(&name).into_owned();

    let scan_end = reader.position();
    let type_class = if termination == NameTermination::Terminated {
        read_type_class(&mut reader).ok()
    } else {
        None
    };

    match type_class {
        Some((qtype, qclass)) => DecodedQuestion {
            name,
            qtype,
            qclass,
            question_end: reader.position(),
            termination,
            has_type_class: true,
        },
        None => DecodedQuestion {
            name,
            qtype: 0,
            qclass: 0,
            question_end: scan_end,
            termination,
            has_type_class: false,
        },
    }
}

fn read_type_class(reader: &mut WireReader<'_>) -> Result<(u16, u16), WireError> {
    if reader.remaining() < 5 {
        return Err(WireError::MalformedInput("question type/class missing"));
    }
    reader.skip(1)?;
    Ok((reader.read_u16()?, reader.read_u16()?))
}

/// Decodes the question of an incoming query, rejecting anything the relay
/// cannot act on.
///
/// An empty name is a failure, which also rejects root-domain queries.
pub fn parse_query(buf: &[u8]) -> Result<DecodedQuestion, WireError> {
    if buf.len() < HEADER_LEN {
        return Err(WireError::MalformedInput("message shorter than DNS header"));
    }
    if buf.len() > MAX_MESSAGE_LEN {
        return Err(WireError::MalformedInput("message exceeds 1500 bytes"));
    }

    let question = decode_question(buf);
    if question.name.is_empty() {
        return Err(WireError::MalformedInput("no question name"));
    }

    match question.termination {
        NameTermination::Truncated => {
            Err(WireError::MalformedInput("question name not terminated"))
        }
        NameTermination::Terminated if !question.has_type_class => {
            Err(WireError::MalformedInput("question type/class missing"))
        }
        _ => Ok(question),
    }
}

/// Byte range of the question section (QNAME, terminator, QTYPE, QCLASS) as
/// the response encoders copy it.
///
/// The name ends at the first zero byte after the header, which must be
/// followed by the four type/class bytes.
pub fn question_span(buf: &[u8]) -> Result<Range<usize>, WireError> {
    if buf.len() < HEADER_LEN {
        return Err(WireError::MalformedInput("message shorter than DNS header"));
    }

    let terminator = buf[HEADER_LEN..]
        .iter()
        .position(|&b| b == 0)
        .map(|offset| HEADER_LEN + offset)
        .ok_or(WireError::MalformedInput("question name not terminated"))?;

    if terminator + 4 >= buf.len() {
        return Err(WireError::MalformedInput("question type/class missing"));
    }

    Ok(HEADER_LEN..terminator + 5)
}

/// Writes an uncompressed question for `name`. A trailing dot is accepted.
pub fn encode_question(
    name: &str,
    qtype: u16,
    qclass: u16,
    writer: &mut WireWriter<'_>,
) -> Result<(), WireError> {
    for label in name.split('.').filter(|label| !label.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(WireError::MalformedInput("label longer than 63 bytes"));
        }
        writer.write_u8(label.len() as u8)?;
        writer.write_bytes(label.as_bytes())?;
    }
    writer.write_u8(0)?;
    writer.write_u16(qtype)?;
    writer.write_u16(qclass)
}
