//! Attempt numbers: which pre-authored set or synthesis window to serve.
//!
//! An attempt is either supplied by the caller (the `x-quiz-attempt`
//! header) or derived from the topic, level and the current UTC day, so the
//! same request made on the same day always gets the same content.

use chrono::{DateTime, Utc};

use crate::models::{Level, Topic};

/// Request header carrying an explicit attempt number.
pub const ATTEMPT_HEADER: &str = "x-quiz-attempt";

/// Derived attempts fall in `1..=ATTEMPT_BOUND`.
pub const ATTEMPT_BOUND: u32 = 4;

const SECONDS_PER_DAY: i64 = 86_400;

/// Pick the attempt number for a request.
pub fn compute_attempt(
    topic: &Topic,
    level: Level,
    now: DateTime<Utc>,
    explicit: Option<&str>,
) -> u32 {
    match explicit {
        Some(raw) => parse_attempt(raw),
        None => derive_attempt(topic.key(), level, now),
    }
}

/// Coerce a caller-supplied attempt to a positive integer, defaulting to 1.
pub fn parse_attempt(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(attempt) if attempt > 0 => attempt,
        _ => 1,
    }
}

/// Deterministic attempt for `(topic, level, day)`.
pub fn derive_attempt(topic_key: &str, level: Level, now: DateTime<Utc>) -> u32 {
    let seed = format!("{topic_key}-{level}-{}", day_bucket(now));
    seed_hash(&seed).unsigned_abs() % ATTEMPT_BOUND + 1
}

/// Days since the Unix epoch, in UTC.
pub fn day_bucket(now: DateTime<Utc>) -> i64 {
    now.timestamp().div_euclid(SECONDS_PER_DAY)
}

/// `h = h * 31 + unit` over UTF-16 code units, wrapping at 32 bits.
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Index into `count` rotating items for `attempt` (1-based).
pub fn set_index(attempt: u32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (attempt.max(1) as usize - 1) % count
}
