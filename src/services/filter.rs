use chrono::{NaiveDateTime, NaiveTime};

/// A slot is acceptable when it starts strictly before `cutoff` on its own day.
pub fn is_acceptable(slot: NaiveDateTime, cutoff: NaiveTime) -> bool {
    slot < slot.date().and_time(cutoff)
}
