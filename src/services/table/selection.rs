use super::{TableManager, TimelineCache};
use crate::models::event::EventRow;
use crate::services::client::TableApi;
use crate::services::timeline::{derive_layout, TimelineInput, TimelineLayout};

impl<A: TableApi> TableManager<A> {
    pub fn is_selected(&self, id: i64) -> bool {
        self.state.selection.contains(&id)
    }

    /// Selected row ids in ascending order.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.state.selection.iter().copied().collect()
    }

    /// Selected rows in display order.
    pub fn selected_rows(&self) -> impl Iterator<Item = &EventRow> {
        self.state
            .rows
            .iter()
            .filter(|row| self.state.selection.contains(&row.id))
    }

    /// True when there is at least one row and every row is selected.
    pub fn all_selected(&self) -> bool {
        !self.state.rows.is_empty() && self.state.selection.len() == self.state.rows.len()
    }

    /// Select or deselect one row. Unknown ids are ignored.
    pub fn set_selected(&mut self, id: i64, selected: bool) {
        if self.row(id).is_none() {
            log::debug!("Ignoring selection of unknown row {}", id);
            return;
        }

        let changed = if selected {
            self.color_for(id);
            self.state.selection.insert(id)
        } else {
            self.state.selection.remove(&id)
        };

        if changed {
            self.invalidate_timeline();
        }
    }

    pub fn toggle_selected(&mut self, id: i64) {
        let selected = self.is_selected(id);
        self.set_selected(id, !selected);
    }

    /// The header checkbox: select every row, or none.
    pub fn select_all(&mut self, selected: bool) {
        if selected {
            let ids: Vec<i64> = self.state.rows.iter().map(|row| row.id).collect();
            for id in ids {
                self.color_for(id);
                self.state.selection.insert(id);
            }
        } else {
            self.state.selection.clear();
        }
        self.invalidate_timeline();
    }

    pub fn clear_selection(&mut self) {
        self.select_all(false);
    }

    /// Timeline of the selected rows, derived again only after a selection
    /// change, an edit to a selected row or a viewport resize.
    pub fn timeline(&mut self, viewport_width: f32) -> &TimelineLayout {
        let revision = self.state.timeline_revision;
        let cache = match self.timeline_cache.take() {
            Some(cache) if cache.revision == revision && cache.viewport_width == viewport_width => {
                cache
            }
            _ => {
                let inputs = self.timeline_inputs();
                TimelineCache {
                    revision,
                    viewport_width,
                    layout: derive_layout(&inputs, viewport_width),
                }
            }
        };

        &self.timeline_cache.insert(cache).layout
    }

    fn timeline_inputs(&mut self) -> Vec<TimelineInput> {
        let selected: Vec<(i64, String, _, _)> = self
            .selected_rows()
            .map(|row| {
                (
                    row.id,
                    row.title.clone(),
                    row.start_datetime,
                    row.end_datetime,
                )
            })
            .collect();

        selected
            .into_iter()
            .map(|(row_id, title, start, end)| TimelineInput {
                row_id,
                title,
                start,
                end,
                color: self.color_for(row_id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::utils::color::ItemColor;
    use std::time::Duration;

    fn manager_with_rows(ids: &[i64]) -> TableManager<crate::services::client::MockTableApi> {
        let rows = ids.iter().map(|id| event_row(*id, "row")).collect();
        let mut manager = TableManager::new(loaded_api(Vec::new(), rows), Duration::from_millis(300));
        manager.initialize().unwrap();
        manager
    }

    #[test]
    fn test_toggle_and_select_all() {
        let mut manager = manager_with_rows(&[1, 2, 3]);

        manager.toggle_selected(2);
        assert!(manager.is_selected(2));
        assert!(!manager.all_selected());

        manager.select_all(true);
        assert!(manager.all_selected());

        manager.toggle_selected(2);
        assert_eq!(manager.selected_ids(), vec![1, 3]);

        manager.clear_selection();
        assert!(manager.selected_ids().is_empty());
    }

    #[test]
    fn test_unknown_rows_are_not_selected() {
        let mut manager = manager_with_rows(&[1]);
        let revision = manager.timeline_revision();

        manager.set_selected(99, true);

        assert!(!manager.is_selected(99));
        assert_eq!(manager.timeline_revision(), revision);
    }

    #[test]
    fn test_selection_changes_invalidate_timeline() {
        let mut manager = manager_with_rows(&[1, 2]);
        assert!(manager.timeline(800.0).is_empty());

        manager.set_selected(1, true);
        assert_eq!(manager.timeline(800.0).items.len(), 1);

        manager.set_selected(2, true);
        let layout = manager.timeline(800.0);
        assert_eq!(layout.items.len(), 2);
        assert_eq!(layout.items[0].color, ItemColor::for_id(1));
    }

    #[test]
    fn test_timeline_cached_until_revision_changes() {
        let mut manager = manager_with_rows(&[1]);
        manager.set_selected(1, true);

        let revision = manager.timeline_revision();
        let first = manager.timeline(800.0).clone();
        let second = manager.timeline(800.0).clone();

        assert_eq!(first, second);
        assert_eq!(manager.timeline_revision(), revision);
        assert_ne!(manager.timeline(1200.0).width, 0.0);
    }
}
