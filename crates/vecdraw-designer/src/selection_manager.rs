/// Manages the single-shape selection of a [`Canvas`](crate::Canvas).
///
/// The selection is an index into the canvas collection, never a reference
/// or a flag on the shape. The canvas validates indices before handing them
/// over and reports removals so the stored index keeps pointing at the same
/// shape.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Option<usize>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecdraw_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_index(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Replaces the selection. The previous shape loses its highlight implicitly.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Updates the selection after the shape at `removed` left the collection.
    ///
    /// Returns `true` when the removed shape was the selected one.
    pub fn shape_removed(&mut self, removed: usize) -> bool {
        match self.selected {
            Some(index) if index == removed => {
                self.selected = None;
                true
            }
            Some(index) if index > removed => {
                self.selected = Some(index - 1);
                false
            }
            _ => false,
        }
    }
}
