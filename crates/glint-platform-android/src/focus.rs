//! Focus queries over externally owned view subtrees.

use crate::hierarchy::{traverse_hierarchy, View};

/// Returns true when `root` or any of its descendants holds input focus.
///
/// The self-check runs before the children; children are searched in index
/// order and the walk stops at the first focused node. A `None` root has
/// no focus. The embedding calls this before detaching or hiding a
/// subtree to decide whether focus must be relinquished first.
pub fn subtree_has_focus(root: Option<&dyn View>) -> bool {
    traverse_hierarchy(root, |view| view.has_focus())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestView {
        focused: bool,
        children: Vec<TestView>,
        probe: Option<(Rc<RefCell<Vec<&'static str>>>, &'static str)>,
    }

    impl TestView {
        fn leaf(focused: bool) -> Self {
            Self {
                focused,
                children: Vec::new(),
                probe: None,
            }
        }

        fn group(children: Vec<TestView>) -> Self {
            Self {
                focused: false,
                children,
                probe: None,
            }
        }

        fn probed(focused: bool, log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Self {
            Self {
                focused,
                children: Vec::new(),
                probe: Some((log.clone(), tag)),
            }
        }
    }

    impl View for TestView {
        fn has_focus(&self) -> bool {
            if let Some((log, tag)) = &self.probe {
                log.borrow_mut().push(tag);
            }
            self.focused
        }

        fn child_count(&self) -> usize {
            self.children.len()
        }

        fn child_at(&self, index: usize) -> Option<&dyn View> {
            self.children.get(index).map(|child| child as &dyn View)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn null_view_has_no_focus() {
        assert!(!subtree_has_focus(None));
    }

    #[test]
    fn focused_leaf_reports_focus() {
        let view = TestView::leaf(true);
        assert!(subtree_has_focus(Some(&view)));
    }

    #[test]
    fn unfocused_leaf_reports_no_focus() {
        let view = TestView::leaf(false);
        assert!(!subtree_has_focus(Some(&view)));
    }

    #[test]
    fn group_without_focus_anywhere_reports_none() {
        let tree = TestView::group(vec![
            TestView::leaf(false),
            TestView::group(vec![TestView::leaf(false), TestView::leaf(false)]),
        ]);
        assert!(!subtree_has_focus(Some(&tree)));
    }

    #[test]
    fn deeply_nested_last_child_focus_is_found() {
        // Focus sits at depth 3, last child at every level.
        let tree = TestView::group(vec![
            TestView::leaf(false),
            TestView::group(vec![
                TestView::leaf(false),
                TestView::group(vec![TestView::leaf(false), TestView::leaf(true)]),
            ]),
        ]);
        assert!(subtree_has_focus(Some(&tree)));
    }

    #[test]
    fn search_visits_children_in_order_and_stops_at_first_match() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tree = TestView::group(vec![
            TestView::probed(false, &log, "first"),
            TestView::probed(true, &log, "second"),
            TestView::probed(true, &log, "third"),
        ]);

        assert!(subtree_has_focus(Some(&tree)));
        // The third child is never probed once the second reports focus.
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }
}
