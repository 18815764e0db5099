mod common;

use common::bundled_categories;
use spending_chart::core::services::AggregationService;
use spending_chart::domain::Transaction;

#[test]
fn equal_sums_keep_first_seen_order_across_runs() {
    let input = vec![
        Transaction::new("groceries", "Food", 100.0, 1),
        Transaction::new("snack", "Food", 50.0, 2),
        Transaction::new("metro", "Transport", 150.0, 3),
    ];
    for _ in 0..5 {
        let result = AggregationService::group_by_category(&input);
        let summary: Vec<(&str, f64)> = result
            .iter()
            .map(|c| (c.category.as_str(), c.amount))
            .collect();
        assert_eq!(summary, vec![("Food", 150.0), ("Transport", 150.0)]);
    }
}

#[test]
fn bundled_dataset_aggregates_into_descending_categories() {
    let categories = bundled_categories();
    assert_eq!(categories.len(), 9);
    assert_eq!(categories[0].category, "Продукты");
    assert_eq!(categories[0].amount, 7220.0);
    assert_eq!(categories[8].category, "Подписки");
    assert!(categories
        .windows(2)
        .all(|pair| pair[0].amount >= pair[1].amount));
    assert_eq!(AggregationService::total(&categories), 26360.0);
}

#[test]
fn bundled_dataset_keeps_every_transaction() {
    let categories = bundled_categories();
    let count: usize = categories.iter().map(|c| c.transactions.len()).sum();
    assert_eq!(count, 20);
    for category in &categories {
        assert!(category
            .transactions
            .iter()
            .all(|txn| txn.category == category.category));
    }
}

#[test]
fn bundled_categories_get_distinct_colors() {
    let categories = bundled_categories();
    let mut colors: Vec<u32> = categories.iter().map(|c| c.color.0).collect();
    colors.sort_unstable();
    colors.dedup();
    assert_eq!(colors.len(), categories.len());
}

mod properties {
    use proptest::prelude::*;
    use spending_chart::core::services::AggregationService;
    use spending_chart::domain::Transaction;

    fn transactions() -> impl Strategy<Value = Vec<Transaction>> {
        prop::collection::vec(
            (0usize..6, -1_000i64..100_000).prop_map(|(category, amount)| {
                // Whole amounts keep the sums exact regardless of grouping.
                Transaction::new("t", format!("cat-{category}"), amount as f64, 0)
            }),
            0..64,
        )
    }

    proptest! {
        #[test]
        fn grouping_preserves_the_total(input in transactions()) {
            let grouped = AggregationService::group_by_category(&input);
            prop_assert_eq!(
                AggregationService::total(&grouped),
                AggregationService::total(&input)
            );
            let kept: usize = grouped.iter().map(|c| c.transactions.len()).sum();
            prop_assert_eq!(kept, input.len());
        }

        #[test]
        fn grouping_is_deterministic(input in transactions()) {
            prop_assert_eq!(
                AggregationService::group_by_category(&input),
                AggregationService::group_by_category(&input)
            );
        }
    }
}
