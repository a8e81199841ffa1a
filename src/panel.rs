//! Color map panel: a gradient strip flanked by two range entries.
//!
//! The panel owns the color map it displays. Editing either entry and
//! committing it rebuilds the map over the new bounds with the map's own
//! style, replaces the old instance and re-renders both the strip and the
//! dependent 3-D view.

use tracing::info;

use crate::colormaps::ColorMap;
use crate::format::{format_bound_value, parse_bound_text};
use crate::render::{DrawSurface, GradientStrip, HostWidget, RasterSurface};

/// Which end of the range an entry edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundEdge {
    /// The lower bound (left entry)
    Left,
    /// The upper bound (right entry)
    Right,
}

/// A 3-D view colored by the panel's map
pub trait SceneView {
    /// Rebuild and redraw everything that depends on the color map
    fn request_rebuild(&mut self);
}

/// Text of one range entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundEntry {
    pub text: String,
}

/// Strip, range entries and the color map they share
#[derive(Debug)]
pub struct ColorMapPanel<W: HostWidget> {
    label: Option<String>,
    map: ColorMap,
    strip: GradientStrip<W>,
    left: BoundEntry,
    right: BoundEntry,
    visible: bool,
}

impl<W: HostWidget> ColorMapPanel<W> {
    /// Create a panel showing `map` in `widget`. Entries stay empty until
    /// [`show`](Self::show) is called.
    pub fn new(map: ColorMap, widget: W, label: Option<String>) -> Self {
        Self {
            label,
            map,
            strip: GradientStrip::new(widget),
            left: BoundEntry::default(),
            right: BoundEntry::default(),
            visible: false,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn map(&self) -> &ColorMap {
        &self.map
    }

    pub fn strip(&self) -> &GradientStrip<W> {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut GradientStrip<W> {
        &mut self.strip
    }

    pub fn entry(&self, edge: BoundEdge) -> &BoundEntry {
        match edge {
            BoundEdge::Left => &self.left,
            BoundEdge::Right => &self.right,
        }
    }

    /// Replace the text of an entry, as typing does
    pub fn set_entry_text(&mut self, edge: BoundEdge, text: impl Into<String>) {
        let entry = match edge {
            BoundEdge::Left => &mut self.left,
            BoundEdge::Right => &mut self.right,
        };
        entry.text = text.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Fill the entries with the current bounds and make the panel visible
    pub fn show(&mut self) {
        if let (Some(min), Some(max)) = (self.map.min_value(), self.map.max_value()) {
            self.left.text = format_bound_value(min);
            self.right.text = format_bound_value(max);
        }
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Re-render the strip at the widget's current size
    pub fn refresh(&mut self) -> Option<&RasterSurface> {
        self.strip.refresh(Some(&self.map))
    }

    /// Draw callback for the strip widget
    pub fn draw(&mut self, target: &mut dyn DrawSurface) {
        self.strip.draw(Some(&self.map), target);
    }

    /// Swap in a different map, dropping the current one
    pub fn replace_map(&mut self, map: ColorMap) {
        self.map = map;
    }

    /// Rebuild the map with one bound taken from `text`.
    ///
    /// The left edge replaces the minimum and keeps the maximum; the right
    /// edge does the opposite. Text without a finite numeric prefix reads as 0.
    pub fn reset_bounds(
        &mut self,
        edge: BoundEdge,
        text: &str,
        view: &mut dyn SceneView,
    ) -> &ColorMap {
        let value = parse_bound_text(text);
        let (Some(old_min), Some(old_max)) = (self.map.min_value(), self.map.max_value()) else {
            return &self.map;
        };
        let (min_value, max_value) = match edge {
            BoundEdge::Left => (value, old_max),
            BoundEdge::Right => (old_min, value),
        };

        info!(
            operation = "reset_bounds",
            edge = ?edge,
            text = text,
            old_min,
            old_max,
            min_value,
            max_value,
            "Rebuilding color map"
        );

        self.map = self.map.with_bounds(min_value, max_value);
        view.request_rebuild();

        self.hide();
        self.refresh();
        self.show();
        &self.map
    }

    /// Commit the current text of an entry, as pressing Enter does
    pub fn commit(&mut self, edge: BoundEdge, view: &mut dyn SceneView) -> &ColorMap {
        let text = self.entry(edge).text.clone();
        self.reset_bounds(edge, &text, view)
    }
}
