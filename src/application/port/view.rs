// SPDX-License-Identifier: MPL-2.0
//! Paint port for the rendered control surface.

use crate::ui::view::ControlsView;

/// Thin host adapter that turns a [`ControlsView`] into pixels, markup or text.
pub trait ViewSink {
    fn apply(&mut self, view: &ControlsView);
}
