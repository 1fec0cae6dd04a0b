use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use stock_chart_wasm::domain::chart::{Viewport, MIN_VISIBLE_BARS};

fn viewport(count: usize, width: f32) -> Viewport {
    Viewport { visible_bar_count: count, scrolled_by: 0.0, surface_width: width }
}

#[test]
fn factor_two_halves_the_window() {
    let zoomed = viewport(100, 1000.0).zoomed(2.0, 500);
    assert_eq!(zoomed.visible_bar_count, 50);
}

#[test]
fn zooming_in_clamps_to_minimum() {
    let zoomed = viewport(30, 1000.0).zoomed(4.0, 500);
    assert_eq!(zoomed.visible_bar_count, MIN_VISIBLE_BARS);
}

#[test]
fn zooming_out_clamps_to_batch_size() {
    let zoomed = viewport(100, 1000.0).zoomed(0.1, 300);
    assert_eq!(zoomed.visible_bar_count, 300);
}

#[test]
fn tiny_batch_wins_over_minimum() {
    let zoomed = viewport(100, 1000.0).zoomed(4.0, 5);
    assert_eq!(zoomed.visible_bar_count, 5);
}

#[test]
fn degenerate_factors_are_ignored() {
    let start = viewport(100, 1000.0);
    assert_eq!(start.zoomed(0.0, 500).visible_bar_count, 100);
    assert_eq!(start.zoomed(-1.0, 500).visible_bar_count, 100);
    assert_eq!(start.zoomed(f32::NAN, 500).visible_bar_count, 100);
    assert_eq!(start.zoomed(f32::INFINITY, 500).visible_bar_count, 100);
}

#[quickcheck]
fn count_stays_within_bounds(count: usize, factor: f32, total: usize) -> TestResult {
    if !factor.is_finite() || factor <= 0.0 || total == 0 {
        return TestResult::discard();
    }
    let count = count % 10_000;
    let total = total % 10_000 + 1;
    let zoomed = viewport(count, 1000.0).zoomed(factor, total);
    let lower = MIN_VISIBLE_BARS.min(total);
    TestResult::from_bool(
        zoomed.visible_bar_count >= lower && zoomed.visible_bar_count <= total,
    )
}

#[quickcheck]
fn count_is_monotone_in_the_factor(a: f32, b: f32) -> TestResult {
    if !a.is_finite() || !b.is_finite() || a <= 0.0 || b <= 0.0 {
        return TestResult::discard();
    }
    let (small, large) = if a <= b { (a, b) } else { (b, a) };
    let start = viewport(100, 1000.0);
    TestResult::from_bool(
        start.zoomed(small, 500).visible_bar_count >= start.zoomed(large, 500).visible_bar_count,
    )
}
