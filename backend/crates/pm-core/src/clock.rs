use chrono::{DateTime, SubsecRound, Utc};

/// Current time at millisecond precision, the resolution the SQLite store keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
