use egui::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPromptMode {
    Add,
    Delete,
}

impl ColumnPromptMode {
    fn title(&self) -> &'static str {
        match self {
            ColumnPromptMode::Add => "Add Column",
            ColumnPromptMode::Delete => "Delete Column",
        }
    }

    fn submit_text(&self) -> &'static str {
        match self {
            ColumnPromptMode::Add => "Add",
            ColumnPromptMode::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnPromptResult {
    /// Still open, or not shown at all
    Open,
    Submitted { mode: ColumnPromptMode, name: String },
    Cancelled,
}

/// Asks for a column name.
#[derive(Debug, Default)]
pub struct ColumnPromptState {
    mode: Option<ColumnPromptMode>,
    name: String,
    focus_pending: bool,
}

impl ColumnPromptState {
    pub fn open(&mut self, mode: ColumnPromptMode) {
        self.mode = Some(mode);
        self.name.clear();
        self.focus_pending = true;
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    fn close(&mut self) {
        self.mode = None;
        self.name.clear();
    }

    fn submit(&mut self) -> ColumnPromptResult {
        match self.mode {
            Some(mode) if !self.name.trim().is_empty() => {
                let name = std::mem::take(&mut self.name);
                self.close();
                ColumnPromptResult::Submitted { mode, name }
            }
            _ => ColumnPromptResult::Open,
        }
    }

    /// `custom_columns` are offered as quick picks when deleting.
    pub fn render(&mut self, ctx: &Context, custom_columns: &[String]) -> ColumnPromptResult {
        let Some(mode) = self.mode else {
            return ColumnPromptResult::Open;
        };

        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(mode.title())
            .id(egui::Id::new("column_prompt"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);
                ui.label("Column name:");
                let response = ui.text_edit_singleline(&mut self.name);
                if self.focus_pending {
                    response.request_focus();
                    self.focus_pending = false;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }

                if mode == ColumnPromptMode::Delete && !custom_columns.is_empty() {
                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        ui.weak("Custom columns:");
                        for column in custom_columns {
                            if ui.small_button(column).clicked() {
                                self.name = column.clone();
                            }
                        }
                    });
                }

                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_submit = !self.name.trim().is_empty();
                    if ui
                        .add_enabled(can_submit, egui::Button::new(mode.submit_text()))
                        .clicked()
                    {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            cancelled = true;
        }

        if cancelled {
            self.close();
            return ColumnPromptResult::Cancelled;
        }
        if submitted {
            return self.submit();
        }
        ColumnPromptResult::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_not_submitted() {
        let mut prompt = ColumnPromptState::default();
        prompt.open(ColumnPromptMode::Add);
        prompt.name = "   ".to_string();

        assert_eq!(prompt.submit(), ColumnPromptResult::Open);
        assert!(prompt.is_open());
    }

    #[test]
    fn test_submit_closes_prompt() {
        let mut prompt = ColumnPromptState::default();
        prompt.open(ColumnPromptMode::Delete);
        prompt.name = "owner".to_string();

        assert_eq!(
            prompt.submit(),
            ColumnPromptResult::Submitted {
                mode: ColumnPromptMode::Delete,
                name: "owner".to_string()
            }
        );
        assert!(!prompt.is_open());
    }
}
