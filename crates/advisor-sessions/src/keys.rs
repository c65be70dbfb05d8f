//! Redis key layout for session records.
//!
//! Keys are `<prefix>:session:<session_id>`. The prefix must match the one
//! the login service writes with.

/// Key holding the record for one session.
pub fn session(prefix: &str, session_id: &str) -> String {
    format!("{}:session:{}", prefix, session_id)
}
