use {
    crate::{
        domain::{FieldEdit, Period, PeriodField},
        store::{FieldErrors, IntervalCommand, IntervalStore},
        ui::{UI_CONFIG, UI_TEXT},
    },
    chrono::NaiveDate,
    eframe::egui::{Button, Grid, RichText, TextEdit, Ui},
    egui_extras::DatePickerButton,
};

/// What the form asked for this frame.
#[derive(Debug, Default, PartialEq)]
pub struct FormOutcome {
    pub commands: Vec<IntervalCommand>,
    pub save_requested: bool,
}

/// One editable row per period, then Add and Save.
///
/// The form never mutates the store. Edits come back as commands so the
/// caller can dispatch them after the frame's borrow of the store ends.
pub struct PeriodForm<'a> {
    store: &'a IntervalStore,
    today: NaiveDate,
}

impl<'a> PeriodForm<'a> {
    pub fn new(store: &'a IntervalStore) -> Self {
        Self {
            store,
            today: store.clock().today(),
        }
    }

    pub fn show(&self, ui: &mut Ui) -> FormOutcome {
        let mut outcome = FormOutcome::default();

        Grid::new("period_form")
            .num_columns(5)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new(&UI_TEXT.col_start_date).strong());
                ui.label(RichText::new(&UI_TEXT.col_lower).strong());
                ui.label(RichText::new(&UI_TEXT.col_upper).strong());
                ui.label("");
                ui.label("");
                ui.end_row();

                for (index, period) in self.store.periods().iter().enumerate() {
                    let errors = self.store.field_errors(index);
                    // Ids follow the period, not its row, so focus survives a reorder.
                    ui.push_id(period.id, |ui| {
                        self.render_row(ui, index, period, &errors, &mut outcome.commands);
                    });
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let can_add = self.store.is_ready() && !self.store.is_empty();
            let add = ui
                .add_enabled(can_add, Button::new(UI_TEXT.btn_add.as_str()))
                .on_disabled_hover_text(&UI_TEXT.hover_add_disabled);
            if add.clicked() {
                outcome.commands.push(IntervalCommand::Append);
            }
            if ui.button(UI_TEXT.btn_save.as_str()).clicked() {
                outcome.save_requested = true;
            }
        });

        outcome
    }

    fn render_row(
        &self,
        ui: &mut Ui,
        index: usize,
        period: &Period,
        errors: &FieldErrors,
        commands: &mut Vec<IntervalCommand>,
    ) {
        ui.vertical(|ui| {
            let mut date = period.start_date;
            let picker = ui.add(
                DatePickerButton::new(&mut date)
                    .id_salt("start_date")
                    .calendar_week(false),
            );
            if picker.changed() {
                // Future dates are not allowed.
                commands.push(IntervalCommand::Edit {
                    index,
                    edit: FieldEdit::StartDate(date.min(self.today)),
                });
            }
            error_label(ui, errors, PeriodField::StartDate);
        });

        ui.vertical(|ui| {
            let mut lower = period.lower_limit.raw().to_string();
            if limit_input(ui, &mut lower) {
                commands.push(IntervalCommand::Edit {
                    index,
                    edit: FieldEdit::LowerLimit(lower),
                });
            }
            error_label(ui, errors, PeriodField::LowerLimit);
        });

        ui.vertical(|ui| {
            let mut upper = period.upper_limit.raw().to_string();
            if limit_input(ui, &mut upper) {
                commands.push(IntervalCommand::Edit {
                    index,
                    edit: FieldEdit::UpperLimit(upper),
                });
            }
            error_label(ui, errors, PeriodField::UpperLimit);
        });

        let can_remove = self.store.len() > 1;
        let remove = ui
            .add_enabled(can_remove, Button::new(UI_TEXT.btn_remove.as_str()))
            .on_disabled_hover_text(&UI_TEXT.hover_remove_disabled);
        if remove.clicked() {
            commands.push(IntervalCommand::Remove(index));
        }

        if period.is_inverted() {
            ui.label(
                RichText::new(&UI_TEXT.hint_inverted)
                    .small()
                    .color(UI_CONFIG.colors.warning),
            );
        } else {
            ui.label("");
        }
    }
}

/// Returns true when the text changed this frame.
fn limit_input(ui: &mut Ui, text: &mut String) -> bool {
    ui.add(
        TextEdit::singleline(text)
            .desired_width(UI_CONFIG.limit_field_width)
            .char_limit(3),
    )
    .changed()
}

fn error_label(ui: &mut Ui, errors: &FieldErrors, field: PeriodField) {
    if let Some(message) = errors.message(field) {
        ui.label(RichText::new(message).small().color(UI_CONFIG.colors.error));
    }
}
