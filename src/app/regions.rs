//! The two output regions and the clear-results control.
//!
//! [`Regions`] holds everything the lookup writes: the list region (matching
//! countries plus a selection cursor) and the detail region (one country). At
//! most one of them is non-empty; every write goes through a method that
//! empties the other.

use crate::domain::CountryRecord;

/// List and detail output regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    /// Countries shown in the list region, in API order.
    ///
    /// Items are addressed by index, so two countries with the same display
    /// name remain distinct.
    pub list: Vec<CountryRecord>,

    /// Zero-based cursor into `list`.
    pub selected_index: usize,

    /// Country shown in the detail region.
    pub detail: Option<CountryRecord>,

    /// Whether the clear-results control is attached.
    ///
    /// Attached every time a detail panel is rendered, removed by any clear.
    pub clear_control: bool,
}

impl Regions {
    /// Empties both regions and removes the clear-results control.
    pub fn clear(&mut self) {
        self.list.clear();
        self.selected_index = 0;
        self.detail = None;
        self.clear_control = false;
    }

    /// Replaces the regions with a selectable list.
    pub fn show_list(&mut self, records: Vec<CountryRecord>) {
        self.clear();
        self.list = records;
    }

    /// Replaces the regions with a detail panel and attaches the clear control.
    pub fn show_detail(&mut self, record: CountryRecord) {
        self.clear();
        self.detail = Some(record);
        self.clear_control = true;
    }

    /// Opens the list item at `index` as a detail panel.
    ///
    /// Returns `false` (leaving the regions untouched) when no such item exists.
    pub fn open_item(&mut self, index: usize) -> bool {
        if index >= self.list.len() {
            return false;
        }
        let record = self.list.swap_remove(index);
        self.show_detail(record);
        true
    }

    /// Returns `true` when neither region shows anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty() && self.detail.is_none()
    }

    /// Moves the list cursor down within the first `visible` items, wrapping
    /// to the top.
    pub fn move_selection_down(&mut self, visible: usize) {
        let len = visible.min(self.list.len());
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the list cursor up within the first `visible` items, wrapping to
    /// the last of them.
    pub fn move_selection_up(&mut self, visible: usize) {
        let len = visible.min(self.list.len());
        if len == 0 {
            return;
        }
        if self.selected_index == 0 || self.selected_index >= len {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Pulls the cursor back onto the first `visible` items.
    pub fn clamp_selection(&mut self, visible: usize) {
        let len = visible.min(self.list.len());
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<CountryRecord> {
        names.iter().map(|n| CountryRecord::new(*n)).collect()
    }

    #[test]
    fn test_show_list_and_detail_are_exclusive() {
        let mut regions = Regions::default();
        regions.show_detail(CountryRecord::new("Peru"));
        assert!(regions.clear_control);

        regions.show_list(records(&["Niger", "Nigeria"]));
        assert!(regions.detail.is_none());
        assert!(!regions.clear_control);
        assert_eq!(regions.list.len(), 2);
    }

    #[test]
    fn test_open_item_uses_index_not_name() {
        let mut regions = Regions::default();
        let mut list = records(&["Congo", "Congo", "Gabon"]);
        list[1].capital = Some("Kinshasa".to_string());
        regions.show_list(list);

        assert!(regions.open_item(1));
        assert!(regions.list.is_empty());
        assert!(regions.clear_control);
        assert_eq!(
            regions.detail.as_ref().and_then(CountryRecord::capital),
            Some("Kinshasa")
        );
    }

    #[test]
    fn test_open_item_out_of_range() {
        let mut regions = Regions::default();
        regions.show_list(records(&["Niger", "Nigeria"]));
        assert!(!regions.open_item(2));
        assert_eq!(regions.list.len(), 2);
    }

    #[test]
    fn test_selection_wraps() {
        let mut regions = Regions::default();
        regions.show_list(records(&["a", "b", "c"]));
        regions.move_selection_up(3);
        assert_eq!(regions.selected_index, 2);
        regions.move_selection_down(3);
        assert_eq!(regions.selected_index, 0);
    }

    #[test]
    fn test_selection_stays_within_visible_items() {
        let mut regions = Regions::default();
        regions.show_list(records(&["a", "b", "c", "d", "e"]));

        regions.move_selection_down(2);
        regions.move_selection_down(2);
        assert_eq!(regions.selected_index, 0);

        regions.move_selection_up(2);
        assert_eq!(regions.selected_index, 1);

        regions.selected_index = 4;
        regions.clamp_selection(2);
        assert_eq!(regions.selected_index, 1);
    }
}
