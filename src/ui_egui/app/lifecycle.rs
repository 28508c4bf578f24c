use std::time::Instant;

use anyhow::Result;

use super::alert::AlertState;
use super::confirm::ConfirmDialogState;
use super::toast::ToastManager;
use super::TimelineTableApp;
use crate::models::settings::ClientSettings;
use crate::services::client::HttpTableApi;
use crate::services::table::TableManager;
use crate::ui_egui::dialogs::column_prompt::ColumnPromptState;

impl TimelineTableApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &ClientSettings) -> Result<Self> {
        let api = HttpTableApi::from_settings(settings)?;
        let manager = TableManager::from_settings(api, settings);

        let is_dark = match dark_light::detect() {
            dark_light::Mode::Dark => true,
            dark_light::Mode::Light | dark_light::Mode::Default => false,
        };
        cc.egui_ctx.set_visuals(if is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let mut app = Self {
            manager,
            api_base_url: settings.api_base_url.clone(),
            toast_manager: ToastManager::new(),
            confirm_dialog: ConfirmDialogState::new(),
            alert: AlertState::default(),
            column_prompt: ColumnPromptState::default(),
            is_dark,
            load_error: None,
        };
        app.load_table();
        Ok(app)
    }

    /// Write back pending edits and fetch columns and rows again.
    pub(super) fn load_table(&mut self) {
        match self.manager.reload() {
            Ok(()) => {
                let summary = self.manager.summary();
                log::info!(
                    "Loaded {} row(s) and {} custom column(s) from {}",
                    summary.rows,
                    self.manager.columns().custom().len(),
                    self.api_base_url
                );
                self.load_error = None;
            }
            Err(err) => {
                log::error!("Failed to load table from {}: {}", self.api_base_url, err);
                self.load_error = Some(format!(
                    "Could not load the table from {}: {}",
                    self.api_base_url, err
                ));
            }
        }
    }

    /// True while a modal window is waiting for the user.
    pub(super) fn is_blocked(&self) -> bool {
        self.alert.is_open() || self.confirm_dialog.is_open() || self.column_prompt.is_open()
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let sent = self.manager.flush_due(now);
        if sent > 0 {
            log::debug!("Flushed {} pending row write(s)", sent);
        }
        if let Some(wait) = self.manager.next_flush_in(now) {
            ctx.request_repaint_after(wait);
        }

        self.render_toolbar(ctx);
        self.render_status_bar(ctx);
        self.render_timeline_panel(ctx);
        self.render_grid_panel(ctx);

        self.handle_column_prompt(ctx);
        self.handle_confirm_dialog(ctx);
        self.alert.render(ctx);
        self.toast_manager.render(ctx, self.is_dark);
    }

    pub(super) fn handle_exit(&mut self) {
        let sent = self.manager.flush_all();
        let unsynced = self.manager.summary().unsynced;
        if unsynced > 0 {
            log::warn!("Exiting with {} row(s) not saved to the server", unsynced);
        } else {
            log::info!("Flushed {} pending write(s) on exit", sent);
        }
    }
}
