#![allow(dead_code)]

mod mock_forwarder;

pub use mock_forwarder::*;

use ferrous_sinkhole_domain::wire::{encode_question, Header, WireWriter};
use ferrous_sinkhole_domain::{Blocklist, RelaySettings, ResponseMode, MAX_MESSAGE_LEN};
use std::sync::Arc;
use std::time::Duration;

pub fn build_query(id: u16, name: &str, qtype: u16) -> Vec<u8> {
    let mut buf = vec![0u8; MAX_MESSAGE_LEN];
    let mut writer = WireWriter::new(&mut buf);
    Header {
        id,
        flags: 0x0100,
        qdcount: 1,
        ..Header::default()
    }
    .write(&mut writer)
    .unwrap();
    encode_question(name, qtype, 1, &mut writer).unwrap();
    let len = writer.finish();
    buf.truncate(len);
    buf
}

pub fn settings(mode: ResponseMode, blocked: &[&str]) -> Arc<RelaySettings> {
    Arc::new(RelaySettings {
        upstream: "127.0.0.1:53".parse().unwrap(),
        upstream_timeout: Duration::from_secs(2),
        mode,
        ttl: 60,
        blocklist: Arc::new(Blocklist::new(blocked)),
    })
}
