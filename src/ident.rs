//! Prefixed entity id generation.
//!
//! Ids correlate repeatable entities (experience, education, skill group,
//! project) across updates and removals, and serve as stable keys for UI
//! diffing. They combine a millisecond timestamp with a random component,
//! so collisions only need to be overwhelmingly improbable; there is no
//! persisted counter to coordinate.

use chrono::Utc;
use uuid::Uuid;

/// Generate a unique id of the form `{prefix}-{millis_base36}-{rand}`.
///
/// The prefix is a human-readable category tag (`exp`, `edu`, `sk`,
/// `proj`) kept purely for debuggability; uniqueness comes from the
/// timestamp plus five base-36 characters drawn from a v4 UUID.
pub fn create_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let rand = Uuid::new_v4().as_u128();
    format!(
        "{}-{}-{}",
        prefix,
        to_base36(millis),
        &to_base36_padded(rand as u64, 5)[..5]
    )
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

fn to_base36_padded(n: u64, width: usize) -> String {
    let mut s = to_base36(n);
    while s.len() < width {
        s.insert(0, '0');
    }
    s
}
