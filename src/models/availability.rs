use serde::{Deserialize, Deserializer, Serialize};

use super::timestamp::SlotTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeSlot {
    pub time_slot: SlotTime,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_leave_time_required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub leave_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_standard_availability: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_promotions: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub standard_availability_fee_amount: f64,
}

/// Body of `GET /api/Restaurant/{id}/AvailabilitySearch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_slots: Vec<TimeSlot>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub promotions: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub standard_availability_may_require_credit_card: bool,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AvailabilityResponse {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
