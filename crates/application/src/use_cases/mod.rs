pub mod dns;

pub use dns::{FilterDecision, HandleDnsQueryUseCase, QueryOutcome};
