use eframe::egui::Context;

use crate::{
    app::{
        App,
        phases::PhaseView,
        state::{AppState, FailedState},
    },
    ui::render_failed,
};

impl PhaseView for FailedState {
    fn tick(&mut self, _app: &mut App, ctx: &Context) -> AppState {
        render_failed(ctx, self);
        AppState::Failed(self.clone())
    }
}
