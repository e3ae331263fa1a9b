// Navigation state - the visited-directory stack and current location
use std::path::{Path, PathBuf};

/// Where the picker currently is and how it got there.
///
/// `stack` is empty exactly while the top-level storage-root list is
/// showing. Created when the dialog opens, mutated only by click-driven
/// transitions, dropped when the dialog closes.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current_path: PathBuf,
    stack: Vec<PathBuf>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// True while the storage-root list is showing.
    pub fn at_root(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push the current location and move into `next`.
    pub fn descend(&mut self, next: PathBuf) {
        let prev = std::mem::replace(&mut self.current_path, next);
        self.stack.push(prev);
    }

    /// Pop the stack into the current location. Returns false when the
    /// root list is already showing.
    pub fn ascend(&mut self) -> bool {
        match self.stack.pop() {
            Some(prev) => {
                self.current_path = prev;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        let nav = NavigationState::new();
        assert!(nav.at_root());
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn ascend_then_descend_restores_state() {
        let mut nav = NavigationState::new();
        nav.descend(PathBuf::from("/data"));
        nav.descend(PathBuf::from("/data/music"));
        assert_eq!(nav.depth(), 2);

        assert!(nav.ascend());
        assert_eq!(nav.current_path(), Path::new("/data"));
        assert_eq!(nav.depth(), 1);

        nav.descend(PathBuf::from("/data/music"));
        assert_eq!(nav.current_path(), Path::new("/data/music"));
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn ascend_at_root_is_a_no_op() {
        let mut nav = NavigationState::new();
        assert!(!nav.ascend());
        assert!(nav.at_root());
    }
}
