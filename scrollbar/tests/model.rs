use scrollbar::{Effect, Orientation, ScrollBar, ScrollBarOptions, ValueModel};

fn rendered_bar(options: ScrollBarOptions) -> ScrollBar {
    let mut bar = ScrollBar::new(options);
    bar.attach();
    bar.render();
    bar
}

fn assert_invariants(bar: &ScrollBar) {
    assert!(bar.max_value() >= 0.0);
    assert!(bar.page_size() >= 0.0);
    assert!(bar.value() >= 0.0);
    assert!(bar.value() <= bar.max_value());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_defaults() {
    let bar = ScrollBar::default();
    assert_eq!(bar.orientation(), Orientation::Vertical);
    assert_eq!(bar.value(), 0.0);
    assert_eq!(bar.max_value(), 100.0);
    assert_eq!(bar.page_size(), 10.0);
    assert!(!bar.needs_redraw());
}

#[test]
fn test_options_are_clamped() {
    let bar = ScrollBar::new(
        ScrollBarOptions::new()
            .value(500.0)
            .max_value(-20.0)
            .page_size(-1.0),
    );
    assert_eq!(bar.max_value(), 0.0);
    assert_eq!(bar.value(), 0.0);
    assert_eq!(bar.page_size(), 0.0);
}

#[test]
fn test_attach_requests_initial_redraw() {
    let mut bar = ScrollBar::default();
    assert_eq!(bar.attach(), vec![Effect::RequestRedraw]);
    assert!(bar.needs_redraw());
    // Second attach is a no-op
    assert!(bar.attach().is_empty());
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_value_clamps_to_range() {
    let mut bar = rendered_bar(ScrollBarOptions::new());

    bar.set_value(150.0);
    assert_eq!(bar.value(), 100.0);

    bar.set_value(-3.0);
    assert_eq!(bar.value(), 0.0);
    assert_invariants(&bar);
}

#[test]
fn test_shrinking_max_pulls_value_down() {
    let mut bar = rendered_bar(ScrollBarOptions::new().value(80.0).max_value(100.0));

    bar.set_max_value(50.0);
    assert_eq!(bar.max_value(), 50.0);
    assert_eq!(bar.value(), 50.0);
    assert_invariants(&bar);
}

#[test]
fn test_growing_max_keeps_value() {
    let mut bar = rendered_bar(ScrollBarOptions::new().value(80.0));
    bar.set_max_value(400.0);
    assert_eq!(bar.value(), 80.0);
}

#[test]
fn test_negative_max_and_page_clamp_to_zero() {
    let mut bar = rendered_bar(ScrollBarOptions::new().value(30.0));

    bar.set_max_value(-10.0);
    assert_eq!(bar.max_value(), 0.0);
    assert_eq!(bar.value(), 0.0);

    bar.set_page_size(-4.0);
    assert_eq!(bar.page_size(), 0.0);
    assert_invariants(&bar);
}

#[test]
fn test_invariants_hold_across_assignment_sequence() {
    let mut bar = rendered_bar(ScrollBarOptions::new());
    let writes = [
        (0, 42.0),
        (1, 30.0),
        (0, 99.0),
        (2, 500.0),
        (1, -1.0),
        (0, 7.0),
        (1, 1000.0),
        (0, 999.0),
        (2, -8.0),
        (1, 12.5),
    ];

    for (property, amount) in writes {
        match property {
            0 => bar.set_value(amount),
            1 => bar.set_max_value(amount),
            _ => bar.set_page_size(amount),
        };
        assert_invariants(&bar);
    }
}

#[test]
fn test_non_finite_writes_are_ignored() {
    let mut bar = rendered_bar(ScrollBarOptions::new().value(20.0));

    assert!(bar.set_value(f64::NAN).is_empty());
    assert!(bar.set_value(f64::INFINITY).is_empty());
    assert!(bar.set_max_value(f64::NAN).is_empty());
    assert!(bar.set_page_size(f64::INFINITY).is_empty());

    assert_eq!(bar.value(), 20.0);
    assert_eq!(bar.max_value(), 100.0);
    assert_eq!(bar.page_size(), 10.0);
}

// ============================================================================
// Redraw requests
// ============================================================================

#[test]
fn test_no_op_writes_schedule_nothing() {
    let mut bar = rendered_bar(ScrollBarOptions::new().value(20.0));

    assert!(bar.set_value(20.0).is_empty());
    assert!(bar.set_max_value(100.0).is_empty());
    assert!(bar.set_page_size(10.0).is_empty());
    assert!(bar.set_orientation(Orientation::Vertical).is_empty());
    assert!(!bar.needs_redraw());
}

#[test]
fn test_clamped_write_equal_to_current_is_no_op() {
    let mut bar = rendered_bar(ScrollBarOptions::new().value(100.0));
    assert!(bar.set_value(250.0).is_empty());
    assert!(!bar.needs_redraw());
}

#[test]
fn test_redraw_requests_coalesce() {
    let mut bar = rendered_bar(ScrollBarOptions::new());

    assert_eq!(bar.set_value(5.0), vec![Effect::RequestRedraw]);
    assert!(bar.set_value(6.0).is_empty());
    assert!(bar.set_page_size(20.0).is_empty());
    assert!(bar.needs_redraw());

    bar.render();
    assert!(!bar.needs_redraw());
    assert_eq!(bar.set_value(7.0), vec![Effect::RequestRedraw]);
}

// ============================================================================
// ValueModel
// ============================================================================

#[test]
fn test_model_scrollable_only_when_page_smaller_than_max() {
    assert!(ValueModel::new(0.0, 100.0, 10.0).is_scrollable());
    assert!(!ValueModel::new(0.0, 100.0, 100.0).is_scrollable());
    assert!(!ValueModel::new(0.0, 50.0, 100.0).is_scrollable());
    assert!(!ValueModel::new(0.0, 0.0, 0.0).is_scrollable());
}

#[test]
fn test_model_percentages() {
    let model = ValueModel::new(25.0, 200.0, 50.0);
    assert_eq!(model.thumb_percentages(), Some((12.5, 25.0)));

    let degenerate = ValueModel::new(0.0, 50.0, 100.0);
    assert_eq!(degenerate.thumb_percentages(), None);
}
