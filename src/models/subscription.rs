use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subscription state mirrored from the payment provider. Lifecycle
/// updates (webhooks, billing) happen upstream; this service only checks
/// whether AI review is unlocked for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub user_id: Uuid,
    pub status: String,
    pub current_period_end: Option<NaiveDateTime>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_status_unlocks() {
        let mut sub = Subscription {
            user_id: Uuid::new_v4(),
            status: "active".to_string(),
            current_period_end: None,
        };
        assert!(sub.is_active());

        sub.status = "past_due".to_string();
        assert!(!sub.is_active());
        sub.status = "canceled".to_string();
        assert!(!sub.is_active());
    }
}
