#![allow(dead_code)]
use ferrous_sinkhole_domain::wire::{encode_question, Header, WireWriter, MAX_MESSAGE_LEN};

/// Query for `example.com` A/IN with RD set, byte for byte.
pub const EXAMPLE_COM_QUERY: [u8; 29] = [
    0x12, 0x34, // ID
    0x01, 0x00, // Flags (RD)
    0x00, 0x01, // QDCOUNT
    0x00, 0x00, // ANCOUNT
    0x00, 0x00, // NSCOUNT
    0x00, 0x00, // ARCOUNT
    0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', //
    0x03, b'c', b'o', b'm', //
    0x00, // end of QNAME
    0x00, 0x01, // TYPE A
    0x00, 0x01, // CLASS IN
];

pub struct QueryBuilder {
    id: u16,
    flags: u16,
    name: String,
    qtype: u16,
    qclass: u16,
}

impl QueryBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            name: name.to_string(),
            qtype: 1,
            qclass: 1,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn qclass(mut self, qclass: u16) -> Self {
        self.qclass = qclass;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = vec![0u8; MAX_MESSAGE_LEN];
        let mut writer = WireWriter::new(&mut buf);
        Header {
            id: self.id,
            flags: self.flags,
            qdcount: 1,
            ..Header::default()
        }
        .write(&mut writer)
        .unwrap();
        encode_question(&self.name, self.qtype, self.qclass, &mut writer).unwrap();
        let len = writer.finish();
        buf.truncate(len);
        buf
    }
}

/// 12-byte query header followed by `question` verbatim.
pub fn raw_query(question: &[u8]) -> Vec<u8> {
    let mut buf = EXAMPLE_COM_QUERY[..12].to_vec();
    buf.extend_from_slice(question);
    buf
}

/// A label of `len` copies of `byte`, length-prefixed.
pub fn label(byte: u8, len: usize) -> Vec<u8> {
    let mut out = vec![len as u8];
    out.extend(std::iter::repeat(byte).take(len));
    out
}
