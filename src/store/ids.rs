use chrono::{SecondsFormat, Utc};

const RANDOM_BITS_MASK: u64 = (1 << 52) - 1;

/// Generates an opaque record id: a random hex component followed by the hex
/// millisecond clock. Not cryptographically secure.
pub fn new_id() -> String {
    let random = rand::random::<u64>() & RANDOM_BITS_MASK;
    format!("{:x}{:x}", random, now_ms())
}

/// Current instant as ISO-8601 UTC with millisecond precision, e.g.
/// `2024-05-01T12:00:00.000Z`. Lexicographic order equals chronological order.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
