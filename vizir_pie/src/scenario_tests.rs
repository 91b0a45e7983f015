// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;

use core::f64::consts::PI;

use kurbo::{Point, Rect};

use crate::hit_test::{angle_of, is_inside, slice_at, slice_at_point};
use crate::{
    ChartGeometry, Datum, FULL_CIRCLE, PieChart, PieChartConfig, PointerEvent, SelectionChange,
    SelectionController, SelectionState, Slice, partition,
};

fn slices(values: &[f64]) -> Vec<Slice> {
    let data: Vec<Datum> = values.iter().copied().map(Datum::from).collect();
    partition(&data).unwrap()
}

fn square() -> ChartGeometry {
    ChartGeometry::new(Rect::new(0.0, 0.0, 100.0, 100.0))
}

/// A point at `degrees` clockwise from top, `fraction` of the radius away from the center.
fn polar(geometry: &ChartGeometry, degrees: f64, fraction: f64) -> Point {
    let c = geometry.center();
    let r = geometry.radius() * fraction;
    let theta = degrees * (PI / 180.0);
    Point::new(c.x + r * theta.sin(), c.y - r * theta.cos())
}

/// Deterministic xorshift so the data sets are reproducible.
fn pseudo_random_values(seed: u64, len: usize) -> Vec<f64> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // Mix in exact zeros and wide magnitudes.
            match state % 7 {
                0 => 0.0,
                1 => (state % 1000) as f64 * 1e6,
                _ => (state % 1000) as f64 / 10.0,
            }
        })
        .collect()
}

#[test]
fn partitions_cover_the_circle_without_gaps() {
    for seed in 1..200_usize {
        let values = pseudo_random_values(seed as u64, 1 + seed % 12);
        let s = slices(&values);
        if values.iter().all(|&v| v == 0.0) {
            assert!(s.is_empty(), "seed {seed}: zero total is empty");
            continue;
        }
        assert_eq!(s.len(), values.len(), "seed {seed}: one slice per value");
        assert_eq!(s[0].start_angle(), 0.0, "seed {seed}: starts at top");
        assert_eq!(
            s.last().unwrap().end_angle(),
            FULL_CIRCLE,
            "seed {seed}: closes the circle"
        );
        for (i, pair) in s.windows(2).enumerate() {
            assert_eq!(
                pair[0].end_angle(),
                pair[1].start_angle(),
                "seed {seed}: gap after slice {i}"
            );
        }
        let sum: f64 = s.iter().map(Slice::normalized_value).sum();
        assert!((sum - 1.0).abs() < 1e-9, "seed {seed}: shares sum to {sum}");
        for (slice, &value) in s.iter().zip(&values) {
            assert_eq!(slice.value(), value, "seed {seed}: order preserved");
            assert!(
                slice.start_angle() <= slice.end_angle(),
                "seed {seed}: ordered bounds"
            );
        }
    }
}

#[test]
fn scenario_four_equal_quarters() {
    let s = slices(&[25.0, 25.0, 25.0, 25.0]);
    let expected = [(0.0, 90.0), (90.0, 180.0), (180.0, 270.0), (270.0, 360.0)];
    for (slice, (start, end)) in s.iter().zip(expected) {
        assert_eq!(slice.start_angle(), start, "start");
        assert_eq!(slice.end_angle(), end, "end");
        assert_eq!(slice.normalized_value(), 0.25, "share");
    }
}

#[test]
fn scenario_single_value() {
    let s = slices(&[100.0]);
    assert_eq!(s.len(), 1, "one slice");
    assert_eq!((s[0].start_angle(), s[0].end_angle()), (0.0, 360.0), "full circle");
    assert_eq!(s[0].normalized_value(), 1.0, "whole share");
}

#[test]
fn scenario_all_zero_values_have_no_nan() {
    let s = slices(&[0.0, 0.0]);
    assert!(s.is_empty(), "zero-total policy is an empty partition");

    let mut chart = PieChart::new(PieChartConfig::new("Empty"), [0.0, 0.0]);
    chart.set_geometry(square().rect);
    assert_eq!(
        chart.pointer(PointerEvent::Down(Point::new(50.0, 50.0))),
        None,
        "nothing selectable"
    );
    assert_eq!(chart.header_text(), "Empty", "title stays up");
}

#[test]
fn scenario_touch_at_center() {
    let g = square();
    let s = slices(&[50.0, 50.0]);
    let center = g.center();
    assert!(is_inside(center, &g), "center is inside");
    assert_eq!(angle_of(center, &g), 0.0, "documented default angle");
    assert_eq!(slice_at(angle_of(center, &g), &s), Some(0), "first slice");

    let mut c = SelectionController::new();
    let change = c.handle(PointerEvent::Down(center), &s, &g);
    assert_eq!(
        change,
        Some(SelectionChange {
            previous: None,
            current: Some(0)
        }),
        "deterministic selection"
    );
}

#[test]
fn scenario_move_outside_after_selection() {
    let g = square();
    let s = slices(&[50.0, 50.0]);
    let mut c = SelectionController::new();
    c.handle(PointerEvent::Down(polar(&g, 45.0, 0.5)), &s, &g);
    assert_eq!(c.selected(), Some(0), "active on the first slice");

    let changes = c.handle_all(
        [
            PointerEvent::Move(polar(&g, 45.0, 1.5)),
            PointerEvent::Move(polar(&g, 100.0, 2.0)),
        ],
        &s,
        &g,
    );
    assert_eq!(changes.len(), 1, "exactly one notification: {changes:?}");
    assert!(changes[0].exited(), "active to idle");
    assert_eq!(c.state(), SelectionState::IDLE, "idle outputs");
}

#[test]
fn boundary_radius_is_inside() {
    let g = square();
    for degrees in [0.0, 90.0, 180.0, 270.0] {
        assert!(is_inside(polar(&g, degrees, 1.0), &g), "on the rim at {degrees}");
    }
    assert!(
        !is_inside(Point::new(100.0 + 1e-9, 50.0), &g),
        "just past the rim"
    );
}

#[test]
fn sweeping_clockwise_visits_slices_in_order() {
    let g = square();
    let s = slices(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
    let mut previous = 0;
    for step in 0..720 {
        let degrees = f64::from(step) * 0.5;
        let index = slice_at_point(polar(&g, degrees, 0.8), &g, &s)
            .unwrap_or_else(|| panic!("{degrees} should hit a slice"));
        assert!(index >= previous, "{degrees}: went back from {previous} to {index}");
        previous = index;
    }
    assert_eq!(previous, s.len() - 1, "ends on the last slice");
    let wrapped = slice_at_point(polar(&g, 360.0, 0.8), &g, &s);
    assert_eq!(wrapped, Some(0), "a full turn is back at the first slice");
}

#[test]
fn dragging_inside_one_slice_notifies_once() {
    let g = square();
    let s = slices(&[40.0, 60.0]);
    let mut c = SelectionController::new();
    let mut events = Vec::new();
    events.push(PointerEvent::Down(polar(&g, 10.0, 0.3)));
    for step in 0..50 {
        let t = f64::from(step) / 50.0;
        events.push(PointerEvent::Move(polar(&g, 10.0 + 120.0 * t, 0.2 + 0.7 * t)));
    }
    let changes = c.handle_all(events, &s, &g);
    assert_eq!(changes.len(), 1, "only the entry: {changes:?}");
    assert!(changes[0].entered(), "idle to active");
}

#[test]
fn resizing_is_picked_up_by_the_next_event() {
    let mut chart = PieChart::new(PieChartConfig::new("Resize"), [1.0, 1.0]);
    chart.set_geometry(Rect::new(0.0, 0.0, 100.0, 100.0));
    let p = Point::new(150.0, 50.0);
    assert_eq!(chart.pointer(PointerEvent::Down(p)), None, "outside the small pie");
    chart.set_geometry(Rect::new(0.0, 0.0, 300.0, 300.0));
    assert!(
        chart.pointer(PointerEvent::Move(p)).unwrap().entered(),
        "inside after resize"
    );
}
