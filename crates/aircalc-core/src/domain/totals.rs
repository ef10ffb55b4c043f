//! Totals engine.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::entities::{Catalog, LineItem, QuantityMap, Summary};

/// Derive line items and the grand total.
///
/// Line items follow catalog order. Ids in `quantities` that the catalog does
/// not know are skipped. Amounts beyond the `Decimal` range saturate to
/// [`Decimal::MAX`].
pub fn compute_summary(catalog: &Catalog, quantities: &QuantityMap) -> Summary {
    for (id, _) in quantities.iter().filter(|(id, _)| !catalog.contains(*id)) {
        debug!(service_id = %id, "Skipping quantity for unknown service");
    }

    let selected_services: Vec<LineItem> = catalog
        .iter()
        .filter_map(|service| {
            let quantity = quantities.get(service.id);
            if quantity.is_zero() {
                return None;
            }
            Some(LineItem {
                id: service.id,
                name: service.name.clone(),
                quantity,
                price: service.price,
                total: line_total(service.price, quantity.get()),
            })
        })
        .collect();

    let total_amount = selected_services
        .iter()
        .fold(Decimal::ZERO, |acc, line| match acc.checked_add(line.total) {
            Some(sum) => sum,
            None => {
                warn!(service_id = %line.id, "Grand total overflowed, saturating");
                Decimal::MAX
            }
        });

    Summary {
        total_amount,
        selected_services,
    }
}

fn line_total(price: Decimal, quantity: u32) -> Decimal {
    price
        .checked_mul(Decimal::from(quantity))
        .unwrap_or_else(|| {
            warn!(%price, quantity, "Line total overflowed, saturating");
            Decimal::MAX
        })
}
