// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart composition.
//!
//! [`PieChart`] owns everything one chart instance needs: its configuration, its data and the
//! derived slices, the latest drawing area, and its selection controller. It is the seam between
//! the pure geometry in this crate and a host that draws, lays out and plays haptics:
//! - the host feeds it data, resizes and pointer events,
//! - it hands back slice outlines, fills, highlight scales and the header text.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::Color;

use crate::{
    ChartGeometry, Datum, HIGHLIGHT_SCALE, PieChartConfig, PieError, PointerEvent, SectorSpec,
    SelectionChange, SelectionController, SelectionState, Slice, SlicePartitioner,
};

/// One interactive pie chart.
#[derive(Clone, Debug)]
pub struct PieChart {
    config: PieChartConfig,
    partitioner: SlicePartitioner,
    data: Vec<Datum>,
    slices: Vec<Slice>,
    geometry: ChartGeometry,
    selection: SelectionController,
}

impl PieChart {
    /// Creates a chart from anything convertible to [`Datum`]s.
    ///
    /// Invalid data produces an empty chart (see [`Self::set_data`]).
    pub fn new<D: Into<Datum>>(config: PieChartConfig, data: impl IntoIterator<Item = D>) -> Self {
        let mut chart = Self {
            config,
            partitioner: SlicePartitioner::new(),
            data: Vec::new(),
            slices: Vec::new(),
            geometry: ChartGeometry::default(),
            selection: SelectionController::new(),
        };
        chart.set_data(data);
        chart
    }

    /// Creates a chart from caller-defined items, mapping each through `interpreter`.
    pub fn from_interpreted<T>(
        config: PieChartConfig,
        items: &[T],
        interpreter: impl FnMut(&T) -> Datum,
    ) -> Self {
        Self::new(config, items.iter().map(interpreter))
    }

    /// Replaces the partitioner and recomputes the slices.
    pub fn with_partitioner(mut self, partitioner: SlicePartitioner) -> Self {
        self.partitioner = partitioner;
        let data = core::mem::take(&mut self.data);
        self.set_data(data);
        self
    }

    /// The chart configuration.
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    /// The data last supplied, whether or not it could be partitioned.
    pub fn data(&self) -> &[Datum] {
        &self.data
    }

    /// The current partition.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// The latest drawing area.
    pub fn geometry(&self) -> ChartGeometry {
        self.geometry
    }

    /// The current selection outputs.
    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    /// Replaces the data, or returns the validation error and leaves the chart untouched.
    ///
    /// On success, a selection that no longer fits the new slices falls back to idle and the
    /// change is returned.
    pub fn try_set_data<D: Into<Datum>>(
        &mut self,
        data: impl IntoIterator<Item = D>,
    ) -> Result<Option<SelectionChange>, PieError> {
        let data: Vec<Datum> = data.into_iter().map(Into::into).collect();
        let slices = self.partitioner.partition(&data)?;
        self.data = data;
        self.slices = slices;
        Ok(self.selection.reconcile(&self.slices))
    }

    /// Replaces the data.
    ///
    /// Invalid data is logged and leaves the chart without slices, so it renders neutral instead
    /// of failing the host. The data is still kept, so a more lenient partitioner can be applied
    /// later.
    pub fn set_data<D: Into<Datum>>(
        &mut self,
        data: impl IntoIterator<Item = D>,
    ) -> Option<SelectionChange> {
        let data: Vec<Datum> = data.into_iter().map(Into::into).collect();
        self.slices = match self.partitioner.partition(&data) {
            Ok(slices) => slices,
            Err(err) => {
                log::warn!("pie chart {:?} rejected its data: {err}", self.config.title);
                Vec::new()
            }
        };
        self.data = data;
        self.selection.reconcile(&self.slices)
    }

    /// Updates the drawing area. Later pointer events are resolved against it.
    pub fn set_geometry(&mut self, geometry: impl Into<ChartGeometry>) {
        let geometry = geometry.into();
        if let Err(err) = geometry.validate() {
            log::debug!("pie chart {:?}: {err}", self.config.title);
        }
        self.geometry = geometry;
    }

    /// Feeds one pointer event, returning the selection change it caused, if any.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<SelectionChange> {
        self.selection.handle(event, &self.slices, &self.geometry)
    }

    /// The header line: the title while idle, the formatted value while a slice is selected.
    pub fn header_text(&self) -> String {
        let state = self.selection.state();
        if state.is_displaying {
            self.config.value_format.format(state.displayed_value)
        } else {
            self.config.title.clone()
        }
    }

    /// Fill color of slice `index`: its own color, or the style accent.
    pub fn slice_fill(&self, index: usize) -> Option<Color> {
        let slice = self.slices.get(index)?;
        Some(slice.color().unwrap_or(self.config.style.accent))
    }

    /// Scale factor for slice `index` (enlarged while selected).
    pub fn slice_scale(&self, index: usize) -> f64 {
        if self.selection.selected() == Some(index) {
            HIGHLIGHT_SCALE
        } else {
            1.0
        }
    }

    /// The wedge for slice `index` in the current drawing area, including its highlight scale.
    ///
    /// Zero-width slices and degenerate drawing areas have no wedge.
    pub fn slice_sector(&self, index: usize) -> Option<SectorSpec> {
        let slice = self.slices.get(index)?;
        if slice.is_degenerate() || self.geometry.is_degenerate() {
            return None;
        }
        let sector = SectorSpec::new(
            self.geometry.center(),
            self.geometry.radius(),
            slice.start_angle(),
            slice.end_angle(),
        );
        Some(sector.scaled(self.slice_scale(index)))
    }

    /// Outline of slice `index`, see [`Self::slice_sector`].
    pub fn slice_path(&self, index: usize, tolerance: f64) -> Option<BezPath> {
        self.slice_sector(index)
            .map(|sector| sector.with_tolerance(tolerance).path())
    }

    /// Bounds of the pie's inscribed circle in the current drawing area.
    pub fn circle_bounds(&self) -> Rect {
        let c = self.geometry.center();
        let r = self.geometry.radius();
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }
}
