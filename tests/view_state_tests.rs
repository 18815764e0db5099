mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{bundled_categories, categories, laid_out_view};
use spending_chart::chart::{MeasureSpec, MotionAction, MotionEvent, PieChartView, SavedState};
use spending_chart::config::ChartConfig;

const TOP_OF_DISC: (f32, f32) = (200.0, 120.0);

#[test]
fn selection_survives_recreation_through_saved_state() {
    let mut view = laid_out_view(bundled_categories());
    assert!(view.on_touch_event(MotionEvent::down(TOP_OF_DISC.0, TOP_OF_DISC.1)));
    assert_eq!(view.selected_index(), 0);
    let blob = view.save_instance_state(b"base-view");

    let mut recreated = laid_out_view(bundled_categories());
    assert_eq!(recreated.selected_index(), -1);
    let base = recreated.restore_instance_state(&blob);

    assert_eq!(base, b"base-view");
    assert_eq!(recreated.selected_index(), 0);
    assert_eq!(
        recreated.selected_category().map(|c| c.category.as_str()),
        Some("Продукты")
    );
    assert_eq!(recreated.center_label(), "26360 RUB");
    assert!(recreated.is_dirty());
}

#[test]
fn foreign_state_is_handed_back_untouched() {
    let mut view = laid_out_view(categories(&[("Food", 10.0)]));
    view.on_touch_event(MotionEvent::down(TOP_OF_DISC.0, TOP_OF_DISC.1));
    let foreign = b"some other view's state".to_vec();

    assert_eq!(view.restore_instance_state(&foreign), foreign);
    assert_eq!(view.selected_index(), 0);
}

#[test]
fn truncated_state_is_rejected() {
    let mut view = laid_out_view(categories(&[("Food", 10.0)]));
    let blob = view.save_instance_state(b"base");
    let cut = &blob[..blob.len() - 2];
    assert!(SavedState::decode(cut).is_err());
    assert_eq!(view.restore_instance_state(cut), cut);
}

#[test]
fn listener_receives_the_tapped_category() {
    let seen: Rc<RefCell<Vec<(String, f64)>>> = Rc::default();
    let mut view = laid_out_view(categories(&[("Food", 150.0), ("Transport", 150.0)]));
    let sink = Rc::clone(&seen);
    view.set_on_sector_click_listener(move |category| {
        sink.borrow_mut()
            .push((category.category.clone(), category.amount));
    });

    // Right of center is 90 degrees into the first half.
    assert!(view.on_touch_event(MotionEvent::down(300.0, 200.0)));
    // Left of center is in the second half.
    assert!(view.on_touch_event(MotionEvent::down(100.0, 200.0)));
    // Outside the disc.
    assert!(!view.on_touch_event(MotionEvent::down(5.0, 5.0)));

    assert_eq!(
        *seen.borrow(),
        vec![("Food".to_string(), 150.0), ("Transport".to_string(), 150.0)]
    );
    assert_eq!(view.selected_index(), -1);
}

#[test]
fn only_touch_down_selects() {
    let mut view = laid_out_view(categories(&[("Food", 10.0)]));
    for action in [MotionAction::Move, MotionAction::Up, MotionAction::Cancel] {
        assert!(!view.on_touch_event(MotionEvent::new(action, 200.0, 120.0)));
    }
    assert_eq!(view.selection(), None);
}

#[test]
fn stale_selection_is_kept_but_not_resolved() {
    let mut view = laid_out_view(categories(&[("A", 1.0), ("B", 1.0), ("C", 1.0)]));
    // Upper left of center lies in the last third.
    assert!(view.on_touch_event(MotionEvent::down(100.0, 150.0)));
    assert_eq!(view.selected_index(), 2);

    view.set_data(categories(&[("A", 1.0)]));
    assert_eq!(view.selected_index(), 2);
    assert!(view.selected_category().is_none());
}

#[test]
fn empty_data_clears_selection_and_total() {
    let mut view = laid_out_view(categories(&[("A", 5.0)]));
    view.on_touch_event(MotionEvent::down(TOP_OF_DISC.0, TOP_OF_DISC.1));
    view.set_data(Vec::new());
    assert_eq!(view.selected_index(), -1);
    assert_eq!(view.total(), 0.0);
    assert_eq!(view.center_label(), "0 RUB");
    assert!(view.total().is_sign_positive());

    let mut recreated = laid_out_view(categories(&[("A", 5.0)]));
    recreated.restore_instance_state(&view.save_instance_state(b""));
    assert_eq!(recreated.center_label(), "0 RUB");
}

#[test]
fn measurement_is_square_with_a_minimum() {
    let mut view = PieChartView::new(ChartConfig::default());
    view.set_data(categories(&[("A", 5.0)]));
    assert!(view.is_layout_requested());
    assert_eq!(
        view.on_measure(MeasureSpec::AtMost(1080), MeasureSpec::AtMost(1920)),
        (400, 400)
    );
    assert!(!view.is_layout_requested());
    assert_eq!(
        view.on_measure(MeasureSpec::Exactly(300), MeasureSpec::Unspecified),
        (300, 300)
    );
}
