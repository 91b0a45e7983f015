// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration with explicit defaults.

extern crate alloc;

use alloc::string::String;

use crate::{ChartStyle, ValueFormat};

/// Scale factor applied to the highlighted slice.
pub const HIGHLIGHT_SCALE: f64 = 1.1;

/// Drop shadow blur radius when shadows are enabled.
pub const DROP_SHADOW_RADIUS: f64 = 12.0;

/// A width/height pair in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Preset chart card sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartForm {
    /// 180 x 120.
    Small,
    /// 180 x 240.
    #[default]
    Medium,
    /// 360 x 120.
    Large,
    /// 360 x 240.
    ExtraLarge,
}

impl ChartForm {
    /// The card size for this form.
    pub const fn size(self) -> Size {
        match self {
            Self::Small => Size::new(180.0, 120.0),
            Self::Medium => Size::new(180.0, 240.0),
            Self::Large => Size::new(360.0, 120.0),
            Self::ExtraLarge => Size::new(360.0, 240.0),
        }
    }

    /// The form used when this one hosts a pie.
    ///
    /// `Large` is too short for a legible pie, so it is promoted to `ExtraLarge`.
    pub const fn for_pie(self) -> Self {
        match self {
            Self::Large => Self::ExtraLarge,
            other => other,
        }
    }
}

/// Options for one pie chart card.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartConfig {
    /// Header text shown while nothing is selected.
    pub title: String,
    /// Optional legend line below the pie.
    pub legend: Option<String>,
    /// Card size preset.
    pub form: ChartForm,
    /// Whether the card casts a drop shadow.
    pub drop_shadow: bool,
    /// Format of the value shown while a slice is selected.
    pub value_format: ValueFormat,
    /// Colors.
    pub style: ChartStyle,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            legend: None,
            form: ChartForm::Medium,
            drop_shadow: true,
            value_format: ValueFormat::default(),
            style: ChartStyle::default(),
        }
    }
}

impl PieChartConfig {
    /// Creates a config with the given title and default options.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the legend line.
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Sets the size preset.
    pub fn with_form(mut self, form: ChartForm) -> Self {
        self.form = form;
        self
    }

    /// Enables or disables the drop shadow.
    pub fn with_drop_shadow(mut self, drop_shadow: bool) -> Self {
        self.drop_shadow = drop_shadow;
        self
    }

    /// Sets the value format.
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    /// Sets the color style.
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// The card size after pie-specific form promotion.
    pub fn card_size(&self) -> Size {
        self.form.for_pie().size()
    }

    /// Blur radius of the drop shadow (zero when disabled).
    pub fn drop_shadow_radius(&self) -> f64 {
        if self.drop_shadow {
            DROP_SHADOW_RADIUS
        } else {
            0.0
        }
    }
}
