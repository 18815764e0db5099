//! The interactive pie chart view.
//!
//! The view owns its dataset and selection. Hosts feed it layout passes, touch
//! events and paint requests; mutations only request a redraw, and the host
//! paints on its next frame after checking [`PieChartView::take_redraw_request`].

use std::rc::Rc;

use tracing::{debug, warn};

use crate::chart::canvas::Canvas;
use crate::chart::geometry::{hit_test, layout_sectors, Point, Sector};
use crate::chart::measure::{measure_square, ChartFrame, MeasureSpec};
use crate::chart::renderer::{format_center_label, ChartScene, PieRenderer};
use crate::chart::state::{SavedState, NO_SELECTION};
use crate::config::ChartConfig;
use crate::core::services::AggregationService;
use crate::domain::CategoryData;

/// Callback invoked with the category whose sector was tapped.
pub type SectorClickListener = Box<dyn FnMut(&CategoryData)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEvent {
    pub action: MotionAction,
    pub x: f32,
    pub y: f32,
}

impl MotionEvent {
    pub fn new(action: MotionAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(MotionAction::Down, x, y)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

pub struct PieChartView {
    config: ChartConfig,
    categories: Rc<[CategoryData]>,
    total: f64,
    center_label: String,
    frame: ChartFrame,
    selected: Option<usize>,
    listener: Option<SectorClickListener>,
    needs_redraw: bool,
    needs_layout: bool,
}

impl Default for PieChartView {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl PieChartView {
    pub fn new(config: ChartConfig) -> Self {
        let center_label = format_center_label(0.0, &config.currency_suffix);
        Self {
            config,
            categories: Rc::from(Vec::new()),
            total: 0.0,
            center_label,
            frame: ChartFrame::default(),
            selected: None,
            listener: None,
            needs_redraw: true,
            needs_layout: true,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replaces the whole dataset.
    ///
    /// The selection is kept as-is, even if it now points past the end of the
    /// list, unless the new data has nothing to draw.
    pub fn set_data(&mut self, categories: Vec<CategoryData>) {
        self.categories = Rc::from(categories);
        self.total = AggregationService::total(&self.categories[..]);
        self.center_label = format_center_label(self.total, &self.config.currency_suffix);
        if layout_sectors(&self.categories, self.config.start_angle_deg).is_empty() {
            self.selected = None;
        }
        debug!(
            categories = self.categories.len(),
            total = self.total,
            "chart data replaced"
        );
        self.invalidate();
        self.request_layout();
    }

    pub fn categories(&self) -> &[CategoryData] {
        &self.categories
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn center_label(&self) -> &str {
        &self.center_label
    }

    pub fn set_on_sector_click_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&CategoryData) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Square measurement honouring the configured minimum size.
    pub fn on_measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> (i32, i32) {
        let side = measure_square(width, height, self.config.min_size_px());
        self.needs_layout = false;
        (side, side)
    }

    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        self.frame = ChartFrame::from_size(width, height, &self.config);
        self.invalidate();
    }

    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    /// Sectors for the current dataset.
    pub fn sectors(&self) -> Vec<Sector> {
        layout_sectors(&self.categories, self.config.start_angle_deg)
    }

    pub fn on_draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let sectors = self.sectors();
        PieRenderer::new(&self.config).draw(
            canvas,
            &ChartScene {
                categories: &self.categories,
                sectors: &sectors,
                frame: &self.frame,
                selected: self.selected,
                center_label: &self.center_label,
            },
        );
        self.needs_redraw = false;
    }

    /// Handles a touch event, returning `true` when it selected a sector.
    ///
    /// Only touch-down events are considered. A tap inside a sector selects it
    /// and notifies the listener; any other tap clears the selection.
    pub fn on_touch_event(&mut self, event: MotionEvent) -> bool {
        if event.action != MotionAction::Down {
            return false;
        }

        let sectors = self.sectors();
        let hit = hit_test(
            &sectors,
            self.frame.center,
            self.frame.radius,
            event.position(),
            self.config.start_angle_deg,
        );

        match hit {
            Some(index) => {
                debug!(index, x = event.x, y = event.y, "sector selected");
                self.selected = Some(index);
                self.invalidate();
                if let (Some(listener), Some(category)) =
                    (self.listener.as_mut(), self.categories.get(index))
                {
                    listener(category);
                }
                true
            }
            None => {
                debug!(x = event.x, y = event.y, "tap missed every sector");
                self.selected = None;
                self.invalidate();
                false
            }
        }
    }

    /// Selected index, or `-1` when nothing is selected.
    pub fn selected_index(&self) -> i32 {
        self.selected
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(NO_SELECTION)
    }

    pub fn selection(&self) -> Option<usize> {
        self.selected
    }

    /// The selected category, if the selection still points into the data.
    pub fn selected_category(&self) -> Option<&CategoryData> {
        self.selected.and_then(|index| self.categories.get(index))
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.invalidate();
        }
    }

    /// Requests a repaint on the next frame.
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    pub fn request_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn is_layout_requested(&self) -> bool {
        self.needs_layout
    }

    pub fn is_dirty(&self) -> bool {
        self.needs_redraw
    }

    /// Returns whether a repaint was requested and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Wraps the base view's state together with the selection and center label.
    pub fn save_instance_state(&self, base: &[u8]) -> Vec<u8> {
        SavedState::new(base.to_vec(), self.selected, self.center_label.clone()).encode()
    }

    /// Restores state written by [`Self::save_instance_state`] and returns the
    /// embedded base state.
    ///
    /// A blob this view did not write is returned unchanged for the base view to
    /// restore, and the selection keeps its current value.
    pub fn restore_instance_state(&mut self, blob: &[u8]) -> Vec<u8> {
        match SavedState::decode(blob) {
            Ok(state) => {
                self.selected = state.selected();
                self.center_label = state.center_label;
                self.invalidate();
                state.base
            }
            Err(err) => {
                warn!(error = %err, "ignoring unrecognised saved state");
                blob.to_vec()
            }
        }
    }
}
