// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `vizir_pie_demo`.

use kurbo::{Point, Rect};
use peniko::Color;
use vizir_pie::PieChart;

/// Gap between the card edge and its contents.
const PADDING: f64 = 12.0;
/// Height reserved for the header line.
const HEADER_HEIGHT: f64 = 28.0;
/// Height reserved for the legend line.
const LEGEND_HEIGHT: f64 = 24.0;
/// Height reserved for the caption under each card.
const CAPTION_HEIGHT: f64 = 20.0;

/// The pie's drawing area inside a card whose top-left corner is at the origin.
pub(crate) fn pie_area(chart: &PieChart) -> Rect {
    let size = chart.config().card_size();
    let bottom = if chart.config().legend.is_some() {
        LEGEND_HEIGHT
    } else {
        PADDING
    };
    Rect::new(
        PADDING,
        PADDING + HEADER_HEIGHT,
        size.width - PADDING,
        size.height - bottom,
    )
}

/// A grid of chart cards, each captured at one moment of a gesture.
#[derive(Debug, Default)]
pub(crate) struct ContactSheet {
    panels: Vec<(String, String)>,
    columns: usize,
}

impl ContactSheet {
    pub(crate) fn new(columns: usize) -> Self {
        Self {
            panels: Vec::new(),
            columns: columns.max(1),
        }
    }

    /// Captures the chart's current state under `caption`.
    pub(crate) fn capture(&mut self, chart: &PieChart, caption: impl Into<String>) {
        self.panels.push((caption.into(), card_svg(chart)));
    }

    pub(crate) fn len(&self) -> usize {
        self.panels.len()
    }

    pub(crate) fn to_svg_string(&self, cell: Rect) -> String {
        let cell_w = cell.width() + 2.0 * PADDING;
        let cell_h = cell.height() + CAPTION_HEIGHT + 2.0 * PADDING;
        let rows = self.panels.len().div_ceil(self.columns).max(1);
        let width = cell_w * self.columns.min(self.panels.len()).max(1) as f64;
        let height = cell_h * rows as f64;

        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="sans-serif">"#
        ));
        out.push('\n');
        out.push_str(&format!(
            r##"<rect x="0" y="0" width="{width}" height="{height}" fill="#f2f2f7"/>"##
        ));
        out.push('\n');

        for (i, (caption, card)) in self.panels.iter().enumerate() {
            let col = i % self.columns;
            let row = i / self.columns;
            let origin = Point::new(col as f64 * cell_w + PADDING, row as f64 * cell_h + PADDING);
            out.push_str(&format!(
                r#"<g transform="translate({} {})">"#,
                origin.x, origin.y
            ));
            out.push('\n');
            out.push_str(card);
            out.push_str(&format!(
                r##"<text x="{}" y="{}" font-size="11" text-anchor="middle" fill="#555555">{}</text>"##,
                0.5 * cell.width(),
                cell.height() + 0.75 * CAPTION_HEIGHT,
                escape_xml(caption)
            ));
            out.push_str("\n</g>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

fn card_svg(chart: &PieChart) -> String {
    let config = chart.config();
    let style = &config.style;
    let size = config.card_size();
    let mut out = String::new();

    let shadow = config.drop_shadow_radius();
    if shadow > 0.0 {
        out.push_str(&format!(
            r#"<rect x="0" y="{}" width="{}" height="{}" rx="20""#,
            0.25 * shadow,
            size.width,
            size.height
        ));
        write_paint_attr(&mut out, "fill", style.drop_shadow.with_alpha(0.35));
        out.push_str("/>\n");
    }
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" rx="20""#,
        size.width, size.height
    ));
    write_paint_attr(&mut out, "fill", style.background);
    out.push_str("/>\n");

    out.push_str(&format!(
        r#"<text x="{PADDING}" y="{}" font-size="15" font-weight="bold""#,
        PADDING + 0.6 * HEADER_HEIGHT
    ));
    write_paint_attr(&mut out, "fill", style.text);
    out.push('>');
    out.push_str(&escape_xml(&chart.header_text()));
    out.push_str("</text>\n");

    // The selected wedge is drawn last so its enlarged outline stays on top.
    let selected = chart.selection().selected_index;
    let order = (0..chart.slices().len())
        .filter(|&i| Some(i) != selected)
        .chain(selected);
    for i in order {
        let (Some(path), Some(fill)) = (chart.slice_path(i, 0.1), chart.slice_fill(i)) else {
            continue;
        };
        out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
        write_paint_attr(&mut out, "fill", fill);
        write_paint_attr(&mut out, "stroke", style.background);
        out.push_str(r#" stroke-width="2"/>"#);
        out.push('\n');
    }

    if chart.slices().is_empty() {
        let circle = chart.circle_bounds();
        let c = circle.center();
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke-dasharray="4 4""#,
            c.x,
            c.y,
            0.5 * circle.width()
        ));
        write_paint_attr(&mut out, "stroke", style.legend_text);
        out.push_str("/>\n");
    }

    if let Some(legend) = &config.legend {
        out.push_str(&format!(
            r#"<text x="{PADDING}" y="{}" font-size="13""#,
            size.height - 0.35 * LEGEND_HEIGHT
        ));
        write_paint_attr(&mut out, "fill", style.legend_text);
        out.push('>');
        out.push_str(&escape_xml(legend));
        out.push_str("</text>\n");
    }

    out
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
