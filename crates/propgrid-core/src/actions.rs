//! Label-to-action dispatch for combo-box rows.

use std::collections::BTreeMap;
use std::fmt;

/// A zero-argument action bound to a combo-box entry.
pub type Action = Box<dyn FnMut()>;

/// A map from display label to action.
///
/// Labels are kept sorted so the combo-box entries are stable from frame to
/// frame.
#[derive(Default)]
pub struct ActionMap {
    actions: BTreeMap<String, Action>,
}

impl ActionMap {
    /// Creates an empty action map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under `label`, replacing any previous entry.
    pub fn insert(&mut self, label: impl Into<String>, action: impl FnMut() + 'static) -> &mut Self {
        self.actions.insert(label.into(), Box::new(action));
        self
    }

    /// Whether `label` has a registered action.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.actions.contains_key(label)
    }

    /// Iterates over the labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the map has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs the action bound to `label`.
    ///
    /// A lookup miss is a silent no-op; the return value reports whether an
    /// action ran.
    pub fn invoke(&mut self, label: &str) -> bool {
        match self.actions.get_mut(label) {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ActionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionMap")
            .field("labels", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_labels_are_sorted() {
        let mut map = ActionMap::new();
        map.insert("zebra", || {})
            .insert("apple", || {})
            .insert("mango", || {});

        let labels: Vec<&str> = map.labels().collect();
        assert_eq!(labels, ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_invoke_runs_the_mapped_action_once() {
        let apple_count = Rc::new(Cell::new(0));
        let mango_count = Rc::new(Cell::new(0));

        let mut map = ActionMap::new();
        let counter = Rc::clone(&apple_count);
        map.insert("apple", move || counter.set(counter.get() + 1));
        let counter = Rc::clone(&mango_count);
        map.insert("mango", move || counter.set(counter.get() + 1));

        assert!(map.invoke("apple"));
        assert_eq!(apple_count.get(), 1);
        assert_eq!(mango_count.get(), 0);
    }

    #[test]
    fn test_invoke_miss_is_a_silent_no_op() {
        let mut map = ActionMap::new();
        map.insert("apple", || {});

        assert!(!map.invoke("pear"));
        assert!(!ActionMap::new().invoke("anything"));
    }

    #[test]
    fn test_insert_replaces_existing_action() {
        let count = Rc::new(Cell::new(0));

        let mut map = ActionMap::new();
        map.insert("apple", || {});
        let counter = Rc::clone(&count);
        map.insert("apple", move || counter.set(counter.get() + 1));

        assert_eq!(map.len(), 1);
        assert!(map.invoke("apple"));
        assert_eq!(count.get(), 1);
    }
}
