mod alert;
mod confirm;
mod export;
mod panels;
mod lifecycle;
mod status_bar;
mod toast;
mod toolbar;

use self::alert::AlertState;
use self::confirm::ConfirmDialogState;
use self::toast::ToastManager;
use crate::services::client::HttpTableApi;
use crate::services::table::TableManager;
use crate::ui_egui::dialogs::column_prompt::ColumnPromptState;

const MIN_ROOT_WIDTH: f32 = 640.0;
const MIN_ROOT_HEIGHT: f32 = 420.0;
const TIMELINE_PANEL_HEIGHT: f32 = 260.0;

pub struct TimelineTableApp {
    /// Rows, columns, selection and pending writes
    manager: TableManager<HttpTableApi>,
    api_base_url: String,
    toast_manager: ToastManager,
    confirm_dialog: ConfirmDialogState,
    alert: AlertState,
    column_prompt: ColumnPromptState,
    is_dark: bool,
    /// Set when the initial load failed; cleared by a successful reload
    load_error: Option<String>,
}

impl eframe::App for TimelineTableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}

impl TimelineTableApp {
    pub fn min_root_size() -> [f32; 2] {
        [MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]
    }
}
