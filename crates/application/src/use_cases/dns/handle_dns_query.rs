use crate::ports::UpstreamForwarder;
use ferrous_sinkhole_domain::wire::{encode_blocked_response, parse_query, Header};
use ferrous_sinkhole_domain::{DecodedQuestion, DomainError, RelaySettings, MAX_MESSAGE_LEN};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Block,
    Allow,
}

/// What to send back to the requester for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Answered locally with the configured blocked response.
    Blocked {
        question: DecodedQuestion,
        response: Vec<u8>,
    },
    /// Relayed upstream. `response` is the upstream reply, verbatim.
    Forwarded {
        question: DecodedQuestion,
        response: Vec<u8>,
    },
}

impl QueryOutcome {
    pub fn response(&self) -> &[u8] {
        match self {
            Self::Blocked { response, .. } | Self::Forwarded { response, .. } => response,
        }
    }

    pub fn question(&self) -> &DecodedQuestion {
        match self {
            Self::Blocked { question, .. } | Self::Forwarded { question, .. } => question,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Decode → match → answer locally or relay upstream.
///
/// Every `Err` means the requester gets no reply: malformed queries are
/// dropped rather than echoed, and upstream failures surface to the client
/// as a timeout.
pub struct HandleDnsQueryUseCase {
    settings: Arc<RelaySettings>,
    forwarder: Arc<dyn UpstreamForwarder>,
}

impl HandleDnsQueryUseCase {
    pub fn new(settings: Arc<RelaySettings>, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self {
            settings,
            forwarder,
        }
    }

    pub fn decide(&self, question: &DecodedQuestion) -> FilterDecision {
        if self.settings.blocklist.is_blocked(&question.name) {
            FilterDecision::Block
        } else {
            FilterDecision::Allow
        }
    }

    pub async fn execute(&self, packet: &[u8]) -> Result<QueryOutcome, DomainError> {
        let start = Instant::now();
        let question = parse_query(packet).map_err(DomainError::MalformedQuery)?;

        info!(
            domain = %question.name,
            record_type = %question.type_label(),
            class = question.qclass,
            "DNS query"
        );

        match self.decide(&question) {
            FilterDecision::Block => {
                let response = self.encode_blocked(packet)?;
                info!(
                    domain = %question.name,
                    mode = %self.settings.mode,
                    "Blocked"
                );
                Ok(QueryOutcome::Blocked { question, response })
            }
            FilterDecision::Allow => {
                let response = self.forwarder.forward(packet).await?;

                // Upstream replies are relayed as-is; a mismatched id is only reported.
                if Header::read_id(&response).ok() != Header::read_id(packet).ok() {
                    warn!(
                        domain = %question.name,
                        upstream = %self.forwarder.upstream_name(),
                        "Upstream reply id does not match query"
                    );
                }

                debug!(
                    domain = %question.name,
                    upstream = %self.forwarder.upstream_name(),
                    bytes = response.len(),
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "Relayed upstream reply"
                );
                Ok(QueryOutcome::Forwarded { question, response })
            }
        }
    }

    /// Builds the configured blocked response for `packet`.
    pub fn encode_blocked(&self, packet: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut out = vec![0u8; MAX_MESSAGE_LEN];
        let len = encode_blocked_response(packet, &mut out, &self.settings.mode, self.settings.ttl)
            .map_err(DomainError::EncodeFailed)?;
        out.truncate(len);
        Ok(out)
    }
}
