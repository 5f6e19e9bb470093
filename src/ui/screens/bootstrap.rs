use {
    crate::{
        app::{BootstrapState, FailedState},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{CentralPanel, Context, RichText, Spinner},
};

pub(crate) fn render_bootstrap(ctx: &Context, state: &BootstrapState) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(
                    RichText::new(&UI_TEXT.ls_title)
                        .size(24.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!("{} {}", UI_TEXT.ls_fetching, state.source_name))
                        .italics()
                        .color(UI_CONFIG.colors.subdued),
                );
                ui.add_space(20.0);
                ui.add(Spinner::new().size(32.0));
                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!(
                        "{:.1}s {}",
                        state.started.elapsed().as_secs_f32(),
                        UI_TEXT.ls_elapsed
                    ))
                    .small()
                    .color(UI_CONFIG.colors.subdued),
                );
            });
        });
}

pub(crate) fn render_failed(ctx: &Context, state: &FailedState) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(
                    RichText::new(&UI_TEXT.ls_failed_title)
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.error),
                );
                ui.add_space(10.0);
                ui.label(RichText::new(&state.message).monospace());
                ui.add_space(10.0);
                ui.label(RichText::new(&UI_TEXT.ls_failed_hint).color(UI_CONFIG.colors.subdued));
            });
        });
}
