use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    pub ls_title: String,
    pub ls_fetching: String,
    pub ls_elapsed: String,
    pub ls_failed_title: String,
    pub ls_failed_hint: String,

    pub col_start_date: String,
    pub col_lower: String,
    pub col_upper: String,
    pub btn_add: String,
    pub btn_save: String,
    pub btn_remove: String,
    pub hover_add_disabled: String,
    pub hover_remove_disabled: String,
    pub hint_inverted: String,

    pub tb_heading: String,
    pub tb_upper: String,
    pub tb_lower: String,
    pub tb_band: String,
    pub tb_grid: String,
    pub tb_shortcuts: String,

    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub plot_unavailable: String,

    pub status_periods: String,
    pub status_saved: String,
    pub status_fix_errors: String,
    pub status_save_failed: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Zone Two Heart Rate".to_string(),

    ls_title: "Loading".to_string(),
    ls_fetching: "Fetching heart-rate limits from".to_string(),
    ls_elapsed: "elapsed".to_string(),
    ls_failed_title: "Could not load heart-rate limits".to_string(),
    ls_failed_hint: "Restart the app to try again.".to_string(),

    col_start_date: "Start date".to_string(),
    col_lower: "Lower (bpm)".to_string(),
    col_upper: "Upper (bpm)".to_string(),
    btn_add: "Add".to_string(),
    btn_save: "Save".to_string(),
    btn_remove: "Remove".to_string(),
    hover_add_disabled: "Available once the limits have loaded".to_string(),
    hover_remove_disabled: "At least one period is required".to_string(),
    hint_inverted: "upper limit is below lower limit".to_string(),

    tb_heading: "Layers".to_string(),
    tb_upper: "Upper".to_string(),
    tb_lower: "Lower".to_string(),
    tb_band: "Band".to_string(),
    tb_grid: "Grid".to_string(),
    tb_shortcuts: "Keys 1-4 toggle layers".to_string(),

    plot_x_axis: "Date".to_string(),
    plot_y_axis: "bpm".to_string(),
    plot_unavailable: "Chart unavailable".to_string(),

    status_periods: "periods".to_string(),
    status_saved: "Saved".to_string(),
    status_fix_errors: "Fix the highlighted fields before saving".to_string(),
    status_save_failed: "Save failed".to_string(),
});
