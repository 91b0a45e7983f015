// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart color styles.

use peniko::Color;
use peniko::color::palette::css;

/// Colors used by a pie chart and its frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    /// Card background.
    pub background: Color,
    /// Fill for slices without their own color.
    pub accent: Color,
    /// Title and value text.
    pub text: Color,
    /// Legend text and the chart icon.
    pub legend_text: Color,
    /// Color of the card's drop shadow.
    pub drop_shadow: Color,
}

impl ChartStyle {
    /// The stock pie style: white card, orange accent.
    pub const fn pie_style_one() -> Self {
        Self {
            background: css::WHITE,
            accent: Color::from_rgb8(0xEC, 0x23, 0x01),
            text: css::BLACK,
            legend_text: Color::from_rgb8(0xA7, 0xA6, 0xA8),
            drop_shadow: Color::from_rgb8(0x8E, 0x8E, 0x93),
        }
    }

    /// Sets the accent color.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::pie_style_one()
    }
}
