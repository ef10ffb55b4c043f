use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Quantity, ServiceId};

/// One selected service with its computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: ServiceId,
    pub name: String,
    pub quantity: Quantity,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// The payload handed to the host after every change.
///
/// Field names follow the host's camelCase convention:
/// `{"totalAmount": 200.0, "selectedServices": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub selected_services: Vec<LineItem>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.selected_services.is_empty()
    }

    pub fn line(&self, id: ServiceId) -> Option<&LineItem> {
        self.selected_services.iter().find(|line| line.id == id)
    }

    /// Total without trailing fractional zeros, e.g. `200` rather than `200.00`.
    pub fn total_display(&self) -> String {
        self.total_amount.normalize().to_string()
    }
}
