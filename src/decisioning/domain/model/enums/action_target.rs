use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionTarget {
    Deal { deal_id: String },
    Invoice { invoice_id: String },
    Account { account_id: String },
    Contact { contact_id: String },
    Lead { lead_id: String },
    Booking { booking_id: String },
}

impl ActionTarget {
    pub fn target_id(&self) -> &str {
        match self {
            Self::Deal { deal_id } => deal_id,
            Self::Invoice { invoice_id } => invoice_id,
            Self::Account { account_id } => account_id,
            Self::Contact { contact_id } => contact_id,
            Self::Lead { lead_id } => lead_id,
            Self::Booking { booking_id } => booking_id,
        }
    }
}
