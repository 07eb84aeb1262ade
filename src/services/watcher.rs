use crate::models::{AvailabilityResponse, SlotTime};
use crate::services::filter::is_acceptable;
use crate::state::AppState;

/// What happened for one restaurant during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantOutcome {
    Failed {
        restaurant: String,
        error: String,
    },
    NoSlots {
        restaurant: String,
    },
    Checked {
        restaurant: String,
        accepted: usize,
        rejected: usize,
        notified: usize,
        notify_failures: usize,
    },
}

impl RestaurantOutcome {
    pub fn restaurant(&self) -> &str {
        match self {
            RestaurantOutcome::Failed { restaurant, .. }
            | RestaurantOutcome::NoSlots { restaurant }
            | RestaurantOutcome::Checked { restaurant, .. } => restaurant,
        }
    }
}

pub fn notification_message(restaurant: &str, slot: &SlotTime) -> String {
    format!("found slot at {restaurant}: {slot}")
}

/// Queries every configured restaurant in order and notifies for each
/// acceptable slot. A failing restaurant is logged and skipped.
pub async fn run(state: &AppState) -> Vec<RestaurantOutcome> {
    let config = &state.config;
    let mut outcomes = Vec::with_capacity(config.restaurant_names.len());

    for restaurant in &config.restaurant_names {
        let outcome = match state
            .availability
            .search(restaurant, &config.reservation_date, &config.covers)
            .await
        {
            Ok(resp) => process_response(state, restaurant, resp).await,
            Err(e) => {
                tracing::error!(restaurant = %restaurant, "availability search failed: {e}");
                RestaurantOutcome::Failed {
                    restaurant: restaurant.clone(),
                    error: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, RestaurantOutcome::Failed { .. }))
        .count();
    tracing::info!(
        restaurants = outcomes.len(),
        failed,
        "availability check complete"
    );

    outcomes
}

async fn process_response(
    state: &AppState,
    restaurant: &str,
    resp: AvailabilityResponse,
) -> RestaurantOutcome {
    let config = &state.config;

    if resp.time_slots.is_empty() {
        tracing::info!(
            "no slots found at {restaurant} for {}",
            config.reservation_date
        );
        return RestaurantOutcome::NoSlots {
            restaurant: restaurant.to_string(),
        };
    }

    let (mut accepted, mut rejected, mut notified, mut notify_failures) = (0, 0, 0, 0);

    for slot in &resp.time_slots {
        let time = slot.time_slot;
        if !is_acceptable(time.naive(), config.cutoff) {
            tracing::info!("unacceptable timeslot at {restaurant}: {time}");
            rejected += 1;
            continue;
        }

        tracing::info!("found slot at {restaurant}: {time}");
        accepted += 1;

        if config.disable_pushover {
            continue;
        }

        let message = notification_message(restaurant, &time);
        match state
            .messaging
            .send_message(&config.pushover_recipient, &message)
            .await
        {
            Ok(()) => notified += 1,
            Err(e) => {
                tracing::warn!(restaurant = %restaurant, slot = %time, "failed to send notification: {e:#}");
                notify_failures += 1;
            }
        }
    }

    RestaurantOutcome::Checked {
        restaurant: restaurant.to_string(),
        accepted,
        rejected,
        notified,
        notify_failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_message() {
        let slot = SlotTime::parse("2024-12-21T19:30:00").unwrap();
        assert_eq!(
            notification_message("ChesilRectory", &slot),
            "found slot at ChesilRectory: 2024-12-21T19:30:00"
        );
    }

    #[test]
    fn test_outcome_restaurant() {
        let outcome = RestaurantOutcome::NoSlots {
            restaurant: "Ox".to_string(),
        };
        assert_eq!(outcome.restaurant(), "Ox");
    }
}
