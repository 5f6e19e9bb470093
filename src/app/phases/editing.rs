use eframe::egui::Context;

use crate::app::{
    App,
    phases::phase_view::PhaseView,
    state::{AppState, EditingState},
};

impl PhaseView for EditingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_editing_state(ctx);
        AppState::Editing(EditingState)
    }
}
