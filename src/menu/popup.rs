use crate::foundation::error::{LayoutError, LayoutResult};

/// Fixed frame constraints of the menu button and its popover.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MenuMetrics {
    /// Minimum width of the title button.
    pub button_min_width: f64,
    /// Minimum width of a popover row.
    pub item_min_width: f64,
    /// Maximum width of a popover row.
    pub item_max_width: f64,
    /// Preferred height of a popover row.
    pub item_ideal_height: f64,
    /// Maximum popover width; rows scroll past it.
    pub popover_max_width: f64,
    /// Maximum popover height; rows scroll past it.
    pub popover_max_height: f64,
    /// Corner radius the popover is clipped to.
    pub corner_radius: f64,
}

impl MenuMetrics {
    /// Metrics used unless a menu overrides them.
    pub const STANDARD: Self = Self {
        button_min_width: 100.0,
        item_min_width: 125.0,
        item_max_width: 300.0,
        item_ideal_height: 65.0,
        popover_max_width: 350.0,
        popover_max_height: 225.0,
        corner_radius: 10.0,
    };
}

impl Default for MenuMetrics {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One row of the popover. Rows without a tag close the menu but select nothing.
pub struct MenuItem<T> {
    /// Text shown in the row.
    pub label: String,
    /// Value the selection takes when this row is chosen.
    #[serde(default)]
    pub tag: Option<T>,
}

impl<T> MenuItem<T> {
    /// Row that selects `tag`.
    pub fn tagged(label: impl Into<String>, tag: T) -> Self {
        Self {
            label: label.into(),
            tag: Some(tag),
        }
    }

    /// Row that only closes the menu.
    pub fn untagged(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tag: None,
        }
    }
}

/// Headless state of a titled button that opens a popover of tagged rows.
#[derive(Clone, Debug)]
pub struct PopupMenu<T> {
    /// Button title.
    pub title: String,
    selection: T,
    items: Vec<MenuItem<T>>,
    showing: bool,
    /// Frame constraints for the button and popover.
    pub metrics: MenuMetrics,
}

impl<T: Clone + PartialEq> PopupMenu<T> {
    /// Closed menu with no rows and an initial selection.
    pub fn new(title: impl Into<String>, selection: T) -> Self {
        Self {
            title: title.into(),
            selection,
            items: Vec::new(),
            showing: false,
            metrics: MenuMetrics::STANDARD,
        }
    }

    /// Append a row.
    pub fn item(mut self, item: MenuItem<T>) -> Self {
        self.items.push(item);
        self
    }

    /// Rows in display order.
    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    /// Currently selected value.
    pub fn selection(&self) -> &T {
        &self.selection
    }

    /// Whether the popover is presented.
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Button tapped: present the popover.
    pub fn open(&mut self) {
        self.showing = true;
    }

    /// Hide the popover without changing the selection.
    pub fn dismiss(&mut self) {
        self.showing = false;
    }

    /// Row `index` tapped. Applies its tag, if any, and closes the popover.
    /// Returns whether the selection changed.
    pub fn choose(&mut self, index: usize) -> LayoutResult<bool> {
        let Some(item) = self.items.get(index) else {
            return Err(LayoutError::validation(format!(
                "menu '{}' has no item at index {index} ({} items)",
                self.title,
                self.items.len()
            )));
        };
        let changed = match &item.tag {
            Some(tag) if *tag != self.selection => {
                self.selection = tag.clone();
                true
            }
            _ => false,
        };
        tracing::debug!(menu = %self.title, index, changed, "menu item chosen");
        self.showing = false;
        Ok(changed)
    }

    /// First row whose tag matches the current selection.
    pub fn selected_item(&self) -> Option<&MenuItem<T>> {
        self.items
            .iter()
            .find(|item| item.tag.as_ref() == Some(&self.selection))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/menu/popup.rs"]
mod tests;
