//! Property tests over arbitrary catalogs, quantity maps and input text.

use aircalc_core::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

const NAME_HEADS: &[&str] = &[
    "Mounting",
    "Installation of",
    "Монтаж",
    "Maintenance",
    "Site-visit",
    "Выезд",
    "Cable-route",
    "Drilling",
    "Conduit",
    "Freon",
    "Bracket",
    "Drainage pump",
];

fn unit() -> impl Strategy<Value = Unit> {
    prop_oneof![Just(Unit::Item), Just(Unit::Meter), Just(Unit::HeightWork)]
}

fn name() -> impl Strategy<Value = String> {
    (prop::sample::select(NAME_HEADS), "[a-z]{0,10}")
        .prop_map(|(head, tail)| format!("{head} {tail}"))
}

/// Up to 20 services with unique ids and prices below one million.
fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::btree_map(1u32..200, (name(), 0i64..100_000_000, unit()), 0..20).prop_map(
        |entries| {
            let services = entries
                .into_iter()
                .map(|(id, (name, cents, unit))| Service::new(id, name, Decimal::new(cents, 2), unit))
                .collect();
            Catalog::new(services).unwrap()
        },
    )
}

/// Ids range past the catalog's so some entries are stale.
fn quantities() -> impl Strategy<Value = QuantityMap> {
    prop::collection::vec((1u32..300, 0u32..10_000), 0..30).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, qty)| (ServiceId::new(id).unwrap(), Quantity::new(qty)))
            .collect()
    })
}

proptest! {
    #[test]
    fn total_is_sum_of_price_times_quantity(catalog in catalog(), quantities in quantities()) {
        let summary = compute_summary(&catalog, &quantities);

        let expected: Decimal = quantities
            .iter()
            .filter_map(|(id, qty)| catalog.find(id).map(|s| s.price * Decimal::from(qty.get())))
            .sum();
        prop_assert_eq!(summary.total_amount, expected);

        let known = quantities.iter().filter(|(id, _)| catalog.contains(*id)).count();
        prop_assert_eq!(summary.selected_services.len(), known);

        for line in &summary.selected_services {
            prop_assert!(!line.quantity.is_zero());
            prop_assert_eq!(line.total, line.price * Decimal::from(line.quantity.get()));
        }
    }

    #[test]
    fn lines_follow_catalog_order(catalog in catalog(), quantities in quantities()) {
        let summary = compute_summary(&catalog, &quantities);
        let expected: Vec<ServiceId> = catalog
            .iter()
            .map(|s| s.id)
            .filter(|id| !quantities.get(*id).is_zero())
            .collect();
        let actual: Vec<ServiceId> = summary.selected_services.iter().map(|l| l.id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn summary_is_idempotent(catalog in catalog(), quantities in quantities()) {
        prop_assert_eq!(
            compute_summary(&catalog, &quantities),
            compute_summary(&catalog, &quantities)
        );
    }

    #[test]
    fn buckets_are_disjoint_and_exhaustive(catalog in catalog()) {
        let categories = categorize(&catalog);
        prop_assert_eq!(categories.len(), catalog.len());

        let mut seen: Vec<ServiceId> = Vec::new();
        for (category, services) in categories.iter() {
            for service in services {
                prop_assert_eq!(Category::classify(&service.name), category);
                seen.push(service.id);
            }
        }
        seen.sort();
        let mut all: Vec<ServiceId> = catalog.iter().map(|s| s.id).collect();
        all.sort();
        prop_assert_eq!(seen, all);
    }

    #[test]
    fn any_text_input_is_stored_normalized(input in ".{0,24}") {
        let catalog = Catalog::new(vec![
            Service::new(1, "Mounting unit", Decimal::from(100), Unit::Item),
        ])
        .unwrap();
        let id = ServiceId::new(1).unwrap();
        let mut session = CalculatorSession::new(catalog);

        let summary = session.set_quantity_input(id, &input);

        let stored = session.quantity(id);
        prop_assert_eq!(stored, Quantity::from_input(&input));
        prop_assert_eq!(summary.total_amount, Decimal::from(100) * Decimal::from(stored.get()));
        prop_assert!(summary.selected_services.iter().all(|l| !l.quantity.is_zero()));
    }

    #[test]
    fn negative_input_is_zero(digits in "[0-9]{1,15}", suffix in "[a-z.]{0,4}") {
        prop_assert_eq!(Quantity::from_input(&format!("-{digits}{suffix}")), Quantity::ZERO);
    }

    #[test]
    fn plain_integer_input_round_trips(n in any::<u32>()) {
        prop_assert_eq!(Quantity::from_input(&n.to_string()), Quantity::new(n));
    }

    #[test]
    fn huge_amounts_saturate_instead_of_panicking(
        parts in prop::collection::vec((any::<u32>(), any::<u32>(), any::<u32>(), 0u32..=28), 1..6),
        qty in any::<u32>(),
    ) {
        let services = parts
            .iter()
            .enumerate()
            .map(|(i, (lo, mid, hi, scale))| {
                let id = u32::try_from(i).unwrap() + 1;
                let price = Decimal::from_parts(*lo, *mid, *hi, false, *scale);
                Service::new(id, format!("Service {id}"), price, Unit::Item)
            })
            .collect();
        let catalog = Catalog::new(services).unwrap();
        let quantities: QuantityMap = catalog
            .iter()
            .map(|s| (s.id, Quantity::new(qty)))
            .collect();

        let summary = compute_summary(&catalog, &quantities);

        prop_assert!(!summary.total_amount.is_sign_negative());
        if summary.selected_services.iter().any(|line| line.total == Decimal::MAX) {
            prop_assert_eq!(summary.total_amount, Decimal::MAX);
        }
    }
}
