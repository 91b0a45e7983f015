// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch/drag selection over a pie.
//!
//! [`SelectionController`] is a fold over a single pointer stream. Each `Down`/`Move` resolves the
//! pointer to a slice through [`crate::hit_test`]; `Up` clears the selection. A
//! [`SelectionChange`] is returned only when the resolved index differs from the previous one, so
//! a drag that stays inside one slice notifies once, on entry. Hosts use that notification to
//! drive selection haptics.
//!
//! The controller never caches geometry or slices: the host passes the current ones with every
//! event.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::{ChartGeometry, Slice, hit_test};

/// A pointer event from the host's single pointer stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer touched down at a location.
    Down(Point),
    /// The pointer moved while down.
    Move(Point),
    /// The pointer lifted (or the gesture was cancelled).
    Up,
}

/// The selection outputs consumed by the rendering layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectionState {
    /// Highlighted slice, if any.
    pub selected_index: Option<usize>,
    /// The highlighted slice's value, or `0.0` when idle.
    pub displayed_value: f64,
    /// Whether a value is being shown in place of the title.
    pub is_displaying: bool,
}

impl SelectionState {
    /// The idle state: nothing highlighted.
    pub const IDLE: Self = Self {
        selected_index: None,
        displayed_value: 0.0,
        is_displaying: false,
    };
}

/// An edge-triggered selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// Index before the event (`None` when idle).
    pub previous: Option<usize>,
    /// Index after the event (`None` when idle).
    pub current: Option<usize>,
}

impl SelectionChange {
    /// Idle to active.
    pub fn entered(&self) -> bool {
        self.previous.is_none() && self.current.is_some()
    }

    /// Active to idle.
    pub fn exited(&self) -> bool {
        self.previous.is_some() && self.current.is_none()
    }

    /// Active on one slice to active on another.
    pub fn moved(&self) -> bool {
        self.previous.is_some() && self.current.is_some()
    }
}

/// Turns pointer events into a slice selection for one chart instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionController {
    selected: Option<usize>,
    displayed_value: f64,
}

impl SelectionController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current outputs.
    pub fn state(&self) -> SelectionState {
        match self.selected {
            Some(index) => SelectionState {
                selected_index: Some(index),
                displayed_value: self.displayed_value,
                is_displaying: true,
            },
            None => SelectionState::IDLE,
        }
    }

    /// Highlighted slice, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Applies one pointer event against the current slices and geometry.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        slices: &[Slice],
        geometry: &ChartGeometry,
    ) -> Option<SelectionChange> {
        let next = match event {
            PointerEvent::Down(point) | PointerEvent::Move(point) => {
                hit_test::slice_at_point(point, geometry, slices)
            }
            PointerEvent::Up => None,
        };
        self.select(next, slices)
    }

    /// Applies a sequence of events, returning every change in order.
    pub fn handle_all(
        &mut self,
        events: impl IntoIterator<Item = PointerEvent>,
        slices: &[Slice],
        geometry: &ChartGeometry,
    ) -> Vec<SelectionChange> {
        events
            .into_iter()
            .filter_map(|event| self.handle(event, slices, geometry))
            .collect()
    }

    /// Re-validates the selection after the slices were recomputed.
    ///
    /// A selection that no longer refers to a selectable slice falls back to idle (and reports
    /// the change); otherwise the displayed value is refreshed silently.
    pub fn reconcile(&mut self, slices: &[Slice]) -> Option<SelectionChange> {
        let index = self.selected?;
        match slices.get(index) {
            Some(slice) if !slice.is_degenerate() => {
                self.displayed_value = slice.value();
                None
            }
            _ => self.select(None, slices),
        }
    }

    /// Returns to idle without reporting a change.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn select(&mut self, next: Option<usize>, slices: &[Slice]) -> Option<SelectionChange> {
        let resolved = next.and_then(|i| {
            let slice = slices.get(i).filter(|s| !s.is_degenerate())?;
            Some((i, slice.value()))
        });
        let current = resolved.map(|(i, _)| i);
        self.displayed_value = resolved.map_or(0.0, |(_, value)| value);

        let previous = self.selected;
        if previous == current {
            return None;
        }
        self.selected = current;
        log::trace!("pie selection changed: {previous:?} -> {current:?}");
        Some(SelectionChange { previous, current })
    }
}
