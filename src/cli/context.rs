//! Shell state: the chart view plus the host-side wiring around it.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};

use strsim::levenshtein;
use tracing::{info, warn};

use crate::chart::{MeasureSpec, PieChartView, RecordingCanvas};
use crate::cli::commands;
use crate::cli::detail_view::category_details;
use crate::cli::errors::{CliError, CommandError};
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::config::{ChartConfig, ConfigManager};
use crate::core::services::AggregationService;
use crate::domain::{CategoryData, Displayable, Transaction};
use crate::utils::persistence;

/// Default host viewport, a portrait phone screen.
pub const DEFAULT_VIEWPORT: (i32, i32) = (1080, 1920);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub last_command: Option<String>,
    pub(crate) registry: CommandRegistry,
    config: ChartConfig,
    view: PieChartView,
    viewport: (i32, i32),
    categories: Vec<CategoryData>,
    selections: Receiver<CategoryData>,
    selection_sender: Sender<CategoryData>,
    last_frame: RecordingCanvas,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = match ConfigManager::new().and_then(|manager| manager.load()) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "falling back to default chart configuration");
                ChartConfig::default()
            }
        };
        Ok(Self::with_config(mode, config))
    }

    pub fn with_config(mode: CliMode, config: ChartConfig) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let (selection_sender, selections) = mpsc::channel();
        let view = build_view(&config, &selection_sender);
        let mut context = Self {
            mode,
            running: true,
            last_command: None,
            registry,
            config,
            view,
            viewport: DEFAULT_VIEWPORT,
            categories: Vec::new(),
            selections,
            selection_sender,
            last_frame: RecordingCanvas::new(),
        };
        let dataset = context.config.dataset_path.clone();
        context.load_dataset(dataset.as_deref());
        context.pump_frame();
        context
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn view(&self) -> &PieChartView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PieChartView {
        &mut self.view
    }

    pub fn viewport(&self) -> (i32, i32) {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.viewport = (width, height);
        self.view.request_layout();
    }

    /// Loads transactions from `path` (or the bundled dataset), aggregates them
    /// and hands the result to the view. Unreadable data degrades to an empty chart.
    pub fn load_dataset(&mut self, path: Option<&Path>) -> usize {
        let loaded = match path {
            Some(path) => persistence::load_transactions_from_file(path),
            None => persistence::load_bundled_transactions(),
        };
        let transactions: Vec<Transaction> = match loaded {
            Ok(transactions) => transactions,
            Err(err) => {
                warn!(error = %err, "dataset could not be loaded");
                output::warning(format!("Could not load dataset: {err}. Showing empty chart."));
                Vec::new()
            }
        };
        self.categories = AggregationService::group_by_category(&transactions);
        self.view.set_data(self.categories.clone());
        info!(
            transactions = transactions.len(),
            categories = self.categories.len(),
            "dataset loaded"
        );
        transactions.len()
    }

    /// Runs the host frame: a layout pass if one was requested, then a paint if
    /// the view asked for one. Returns whether a paint happened.
    pub fn pump_frame(&mut self) -> bool {
        if self.view.is_layout_requested() {
            let (width, height) = self.viewport;
            let (w, h) = self
                .view
                .on_measure(MeasureSpec::AtMost(width), MeasureSpec::AtMost(height));
            if (w, h) != (self.view.frame().width, self.view.frame().height) {
                self.view.on_size_changed(w, h);
            }
        }
        if self.view.take_redraw_request() {
            self.last_frame.clear();
            self.view.on_draw(&mut self.last_frame);
            return true;
        }
        false
    }

    pub fn last_frame(&self) -> &RecordingCanvas {
        &self.last_frame
    }

    /// Prints the details of every category the view reported since the last call.
    pub fn show_pending_details(&mut self) -> usize {
        let mut shown = 0;
        while let Ok(category) = self.selections.try_recv() {
            info!(category = %category.display_label(), "showing sector details");
            output::block(category_details(&category, &self.config.currency_suffix).render());
            shown += 1;
        }
        shown
    }

    /// Tears the view down and rebuilds it the way a configuration change would,
    /// carrying state across through the saved-state blob.
    pub fn recreate_view(&mut self) {
        let (width, height) = self.viewport;
        let base = format!("{width}x{height}");
        let blob = self.view.save_instance_state(base.as_bytes());

        let mut fresh = build_view(&self.config, &self.selection_sender);
        fresh.set_data(self.categories.clone());
        let base = fresh.restore_instance_state(&blob);
        if let Some((w, h)) = parse_viewport(&base) {
            self.viewport = (w, h);
        }
        self.view = fresh;
        self.view.request_layout();
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let result = if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        };
        self.pump_frame();
        result
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        match self.view.selected_category() {
            Some(category) => format!("chart [{}]> ", category.category),
            None => "chart> ".to_string(),
        }
    }
}

fn build_view(config: &ChartConfig, sender: &Sender<CategoryData>) -> PieChartView {
    let mut view = PieChartView::new(config.clone());
    let sender = sender.clone();
    view.set_on_sector_click_listener(move |category| {
        // The receiver lives as long as the shell, so a failed send only
        // happens during teardown.
        let _ = sender.send(category.clone());
    });
    view
}

fn parse_viewport(base: &[u8]) -> Option<(i32, i32)> {
    let text = std::str::from_utf8(base).ok()?;
    let (w, h) = text.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}
