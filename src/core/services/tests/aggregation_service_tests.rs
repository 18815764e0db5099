use crate::core::palette::{color_for, CATEGORY_PALETTE};
use crate::core::services::AggregationService;
use crate::domain::{CategoryData, Transaction};

fn txn(name: &str, category: &str, amount: f64) -> Transaction {
    Transaction::new(name, category, amount, 1_623_153_200)
}

#[test]
fn empty_input_yields_empty_result() {
    assert!(AggregationService::group_by_category(&[]).is_empty());
    assert_eq!(AggregationService::total::<CategoryData>(&[]), 0.0);
}

#[test]
fn empty_total_is_positive_zero() {
    let total = AggregationService::total::<CategoryData>(&[]);
    assert!(total.is_sign_positive());
    assert_eq!(format!("{total:.2}"), "0.00");
}

#[test]
fn groups_by_exact_category_name() {
    let input = vec![
        txn("a", "Food", 10.0),
        txn("b", "food", 20.0),
        txn("c", "Food", 5.0),
    ];
    let result = AggregationService::group_by_category(&input);
    assert_eq!(result.len(), 2);
    let food = result.iter().find(|c| c.category == "Food").unwrap();
    assert_eq!(food.amount, 15.0);
    assert_eq!(food.transactions.len(), 2);
}

#[test]
fn sorts_descending_and_keeps_first_seen_order_for_ties() {
    let input = vec![
        txn("lunch", "Food", 100.0),
        txn("dinner", "Food", 50.0),
        txn("bus", "Transport", 150.0),
        txn("film", "Fun", 200.0),
    ];
    let result = AggregationService::group_by_category(&input);
    let names: Vec<&str> = result.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["Fun", "Food", "Transport"]);

    for _ in 0..5 {
        let again = AggregationService::group_by_category(&input);
        assert_eq!(again, result);
    }
}

#[test]
fn colors_follow_first_seen_position() {
    let input = vec![
        txn("a", "Small", 1.0),
        txn("b", "Large", 99.0),
    ];
    let result = AggregationService::group_by_category(&input);
    assert_eq!(result[0].category, "Large");
    assert_eq!(result[0].color, color_for(1));
    assert_eq!(result[1].color, color_for(0));
}

#[test]
fn colors_wrap_around_palette() {
    let input: Vec<Transaction> = (0..CATEGORY_PALETTE.len() + 2)
        .map(|i| txn("t", &format!("cat{i}"), 1.0))
        .collect();
    let result = AggregationService::group_by_category(&input);
    let wrapped = result
        .iter()
        .find(|c| c.category == format!("cat{}", CATEGORY_PALETTE.len()))
        .unwrap();
    assert_eq!(wrapped.color, CATEGORY_PALETTE[0]);
}

#[test]
fn keeps_zero_and_negative_amounts() {
    let input = vec![
        txn("refund", "Shop", -30.0),
        txn("free", "Gift", 0.0),
        txn("buy", "Shop", 100.0),
    ];
    let result = AggregationService::group_by_category(&input);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].amount, 70.0);
    assert_eq!(result[1].amount, 0.0);
}

#[test]
fn total_matches_input_sum_exactly() {
    let input = vec![
        txn("a", "A", 1200.0),
        txn("b", "B", 3400.0),
        txn("c", "A", 450.0),
        txn("d", "C", 780.0),
    ];
    let expected: f64 = input.iter().map(|t| t.amount).sum();
    let result = AggregationService::group_by_category(&input);
    assert_eq!(AggregationService::total(&result), expected);
}

#[test]
fn transactions_keep_input_order_within_category() {
    let input = vec![
        txn("first", "Food", 1.0),
        txn("other", "Fuel", 1.0),
        txn("second", "Food", 1.0),
    ];
    let result = AggregationService::group_by_category(&input);
    let food = result.iter().find(|c| c.category == "Food").unwrap();
    let names: Vec<&str> = food.transactions.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}
