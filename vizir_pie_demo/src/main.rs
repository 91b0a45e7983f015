// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-selection demo for `vizir_pie`.
//!
//! Replays a scripted drag over two pie charts, prints every selection change (the moments a
//! host would play selection haptics), and writes one card per change to
//! `vizir_pie_demo.svg`. Run with `RUST_LOG=trace` to see the library's own logging.
mod svg;

use core::f64::consts::PI;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use vizir_pie::{
    ChartForm, ChartGeometry, Datum, PieChart, PieChartConfig, PointerEvent, SelectionChange,
    ValueFormat,
};

fn main() {
    env_logger::init();

    let mut sheet = svg::ContactSheet::new(4);
    let mut cell = Rect::ZERO;

    for chart in [tagged_chart(), empty_chart()] {
        let size = chart.config().card_size();
        cell = cell.union(Rect::new(0.0, 0.0, size.width, size.height));
        replay_drag(chart, &mut sheet);
    }

    let svg = sheet.to_svg_string(cell);
    std::fs::write("vizir_pie_demo.svg", svg).expect("write vizir_pie_demo.svg");
    println!("wrote vizir_pie_demo.svg ({} cards)", sheet.len());
}

fn tagged_chart() -> PieChart {
    let data = [
        Datum::new(56.0).with_color(css::RED),
        Datum::new(78.0).with_color(css::ROYAL_BLUE),
        Datum::new(53.0),
        Datum::new(65.0).with_color(css::GOLD),
        Datum::new(54.0),
    ];
    let config = PieChartConfig::new("Title")
        .with_legend("Legend")
        .with_form(ChartForm::Medium)
        .with_value_format(ValueFormat::parse("%.0f units").expect("valid value format"));
    PieChart::new(config, data)
}

fn empty_chart() -> PieChart {
    PieChart::new(
        PieChartConfig::new("No data").with_drop_shadow(false),
        [0.0, 0.0],
    )
}

/// A drag that starts at the center, circles the pie once, leaves it, and lifts.
fn drag_gesture(geometry: &ChartGeometry) -> Vec<PointerEvent> {
    let c = geometry.center();
    let r = geometry.radius();
    let at = |degrees: f64, fraction: f64| {
        let theta = degrees * (PI / 180.0);
        Point::new(
            c.x + r * fraction * theta.sin(),
            c.y - r * fraction * theta.cos(),
        )
    };

    let mut events = vec![PointerEvent::Down(c)];
    events.extend((0..=36).map(|step| PointerEvent::Move(at(f64::from(step) * 10.0, 0.6))));
    events.push(PointerEvent::Move(at(0.0, 1.4)));
    events.push(PointerEvent::Up);
    events
}

fn replay_drag(mut chart: PieChart, sheet: &mut svg::ContactSheet) {
    chart.set_geometry(svg::pie_area(&chart));
    let title = chart.config().title.clone();
    sheet.capture(&chart, format!("{title}: idle"));

    let events = drag_gesture(&chart.geometry());
    log::debug!(
        "{title}: replaying {} pointer events over {} slices",
        events.len(),
        chart.slices().len()
    );
    for event in events {
        let Some(change) = chart.pointer(event) else {
            continue;
        };
        let header = chart.header_text();
        println!("{title}: {} -> header {header:?}", describe(change));
        sheet.capture(&chart, format!("{title}: {}", describe(change)));
    }

    if chart.slices().is_empty() {
        println!("{title}: no slices, the drag never selected anything");
    }
}

fn describe(change: SelectionChange) -> String {
    match (change.previous, change.current) {
        (None, Some(i)) => format!("enter slice {i}"),
        (Some(i), None) => format!("leave slice {i}"),
        (Some(a), Some(b)) => format!("slice {a} -> {b}"),
        (None, None) => "no change".to_string(),
    }
}
