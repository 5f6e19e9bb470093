use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, Key, RichText, ScrollArea, TopBottomPanel, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{Arc, mpsc, mpsc::Receiver, mpsc::TryRecvError},
        time::Duration,
    },
};

use crate::{
    Cli,
    app::{AppState, BootstrapState, EditingState, FailedState, PhaseView, StatusMessage},
    config::DF,
    data::{BootstrapResult, LimitsSource, LogSink, SimulatedSource, SubmitSink, spawn_bootstrap},
    store::{IntervalCommand, IntervalStore},
    ui::{
        ChartView, ChartVisibility, FormOutcome, PeriodForm, UI_CONFIG, UI_TEXT, render_bootstrap,
    },
    utils::{AppInstant, SystemClock},
};

#[cfg(not(target_arch = "wasm32"))]
use crate::data::FileSource;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) chart_visibility: ChartVisibility, // persists across sessions.
    #[serde(skip)]
    pub(crate) store: IntervalStore,
    #[serde(skip)]
    pub(crate) chart_view: ChartView,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<BootstrapResult>>,
    #[serde(skip)]
    pub(crate) submit_sink: Box<dyn SubmitSink>,
    #[serde(skip)]
    pub(crate) status: Option<StatusMessage>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            chart_visibility: ChartVisibility::default(),
            store: IntervalStore::new(Arc::new(SystemClock)),
            chart_view: ChartView::new(),
            state: AppState::default(),
            data_rx: None,
            submit_sink: Box::new(LogSink),
            status: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        match Self::limits_source(&args) {
            Ok(source) => {
                app.state = AppState::Bootstrapping(BootstrapState {
                    started: AppInstant::now(),
                    source_name: source.name(),
                });
                let (data_tx, data_rx) = mpsc::channel();
                app.data_rx = Some(data_rx);
                spawn_bootstrap(source, data_tx);
            }
            Err(e) => {
                log::error!("No limits source: {:#}", e);
                app.state = AppState::Failed(FailedState {
                    message: format!("{:#}", e),
                });
            }
        }

        app
    }

    fn limits_source(args: &Cli) -> anyhow::Result<Box<dyn LimitsSource>> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &args.snapshot {
            return Ok(Box::new(FileSource::new(path.clone())));
        }

        let mut source = SimulatedSource::demo()?;
        if let Some(ms) = args.delay_ms {
            source = source.with_delay(Duration::from_millis(ms));
        }
        Ok(Box::new(source))
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // Typing into a limit field must not toggle layers.
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::Num1) {
                self.chart_visibility.upper = !self.chart_visibility.upper;
            }
            if i.key_pressed(Key::Num2) {
                self.chart_visibility.lower = !self.chart_visibility.lower;
            }
            if i.key_pressed(Key::Num3) {
                self.chart_visibility.band = !self.chart_visibility.band;
            }
            if i.key_pressed(Key::Num4) {
                self.chart_visibility.grid = !self.chart_visibility.grid;
            }
        });
    }

    pub(crate) fn tick_bootstrap_state(
        &mut self,
        ctx: &Context,
        state: &mut BootstrapState,
    ) -> AppState {
        ctx.request_repaint();
        if let Some(next_state) = self.finalize_bootstrap_if_ready() {
            return next_state;
        }
        render_bootstrap(ctx, state);
        AppState::Bootstrapping(state.clone())
    }

    pub(crate) fn finalize_bootstrap_if_ready(&mut self) -> Option<AppState> {
        let outcome = match self.data_rx.as_ref()?.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err("Bootstrap task ended without a result".to_string())
            }
        };
        // One-shot channel: drop the receiver so a late sender has nowhere to write.
        self.data_rx = None;

        match outcome {
            Ok(periods) => {
                if DF.log_bootstrap {
                    log::info!("Bootstrap complete with {} periods.", periods.len());
                }
                self.store.dispatch(IntervalCommand::Load(periods));
                self.drain_store_queue();
                Some(AppState::Editing(EditingState))
            }
            Err(message) => {
                log::error!("Bootstrap failed: {}", message);
                Some(AppState::Failed(FailedState { message }))
            }
        }
    }

    /// EDITING PHASE MAIN LOOP
    pub(crate) fn tick_editing_state(&mut self, ctx: &Context) {
        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_status_panel(ctx);

        let mut outcome = FormOutcome::default();
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.chart_view
                        .show(ui, &self.store, &self.chart_visibility);
                    ui.add_space(16.0);
                    outcome = PeriodForm::new(&self.store).show(ui);
                });
            });

        let FormOutcome {
            commands,
            save_requested,
        } = outcome;
        if !commands.is_empty() {
            self.status = None;
            for cmd in commands {
                self.store.dispatch(cmd);
            }
            self.drain_store_queue();
        }
        if save_requested {
            self.submit();
        }
    }

    fn drain_store_queue(&mut self) {
        for e in self.store.process_pending() {
            log::warn!("Store rejected command: {}", e);
        }
    }

    /// Hand the current limits to the submit sink, unless a field is invalid.
    pub(crate) fn submit(&mut self) {
        if self.store.has_errors() {
            self.status = Some(StatusMessage::Warning(UI_TEXT.status_fix_errors.clone()));
            return;
        }
        let snapshot = self.store.snapshot();
        self.status = Some(match self.submit_sink.submit(&snapshot) {
            Ok(()) => StatusMessage::Info(format!(
                "{} {} {}",
                UI_TEXT.status_saved,
                snapshot.limits.len(),
                UI_TEXT.status_periods
            )),
            Err(e) => {
                log::error!("Submit failed: {:#}", e);
                StatusMessage::Warning(format!("{}: {}", UI_TEXT.status_save_failed, e))
            }
        });
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                    ui.separator();
                    ui.label(RichText::new(&UI_TEXT.tb_heading).color(UI_CONFIG.colors.subdued));
                    let vis = &mut self.chart_visibility;
                    ui.checkbox(&mut vis.upper, UI_TEXT.tb_upper.as_str());
                    ui.checkbox(&mut vis.lower, UI_TEXT.tb_lower.as_str());
                    ui.checkbox(&mut vis.band, UI_TEXT.tb_band.as_str());
                    ui.checkbox(&mut vis.grid, UI_TEXT.tb_grid.as_str());
                    ui.label(
                        RichText::new(&UI_TEXT.tb_shortcuts)
                            .small()
                            .color(UI_CONFIG.colors.subdued),
                    );
                });
            });
    }

    fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("{} {}", self.store.len(), UI_TEXT.status_periods));
                    if DF.log_series_cache {
                        ui.separator();
                        ui.label(format!(
                            "rev {} | series rebuilds {}",
                            self.store.revision(),
                            self.chart_view.rebuilds()
                        ));
                    }
                    match &self.status {
                        Some(StatusMessage::Info(text)) => {
                            ui.separator();
                            ui.label(RichText::new(text).color(UI_CONFIG.colors.label));
                        }
                        Some(StatusMessage::Warning(text)) => {
                            ui.separator();
                            ui.label(RichText::new(text).color(UI_CONFIG.colors.warning));
                        }
                        None => {}
                    }
                });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Editing(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_store_commands {
            log::info!("SAVE [App]: visibility = {:?}", self.chart_visibility);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
