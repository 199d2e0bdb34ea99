//! Tests for the dom module.

#[cfg(test)]
mod tests {
    use crate::dom::{Document, Layout, Window};
    use crate::event::{Kind, Status, Target};
    use crate::time::Instant;
    use crate::{Event, Rectangle, Size, mouse};

    use std::cell::RefCell;
    use std::rc::Rc;

    fn press(target: impl Into<Target>) -> Event {
        Event::mouse_down(target, mouse::Button::Left, Instant::now())
    }

    #[test]
    fn test_append_moves_attached_node() {
        let mut doc = Document::default();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_element("span");

        assert!(doc.append_child(a, child));
        assert!(doc.append_child(b, child));

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn test_refuses_cycles() {
        let mut doc = Document::default();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");

        assert!(doc.append_child(outer, inner));
        assert!(!doc.append_child(inner, outer));
        assert_eq!(doc.parent(outer), None);
    }

    #[test]
    fn test_insert_before_and_replace() {
        let mut doc = Document::default();
        let body = doc.body();
        let first = doc.create_element("div");
        let second = doc.create_element("div");
        let wrapper = doc.create_element("div");

        assert!(doc.append_child(body, first));
        assert!(doc.insert_before(body, second, first));
        assert_eq!(doc.children(body), &[second, first]);

        assert!(doc.replace_child(body, wrapper, first));
        assert_eq!(doc.children(body), &[second, wrapper]);
        assert_eq!(doc.parent(first), None);

        assert!(doc.append_child(wrapper, first));
        assert!(doc.is_connected(first));
    }

    #[test]
    fn test_classes_split_on_whitespace() {
        let mut doc = Document::default();
        let node = doc.create_element("div");

        doc.add_class(node, "menu  extra");
        doc.add_class(node, "menu");

        assert_eq!(
            doc.node(node).map(|n| n.classes().to_vec()),
            Some(vec!["menu".to_owned(), "extra".to_owned()])
        );

        doc.set_class(node, "extra", false);
        assert!(!doc.has_class(node, "extra"));
    }

    #[test]
    fn test_scroll_top_is_clamped() {
        let mut doc = Document::default();
        let node = doc.create_element("div");

        doc.set_layout(
            node,
            Layout::new(Rectangle::from_edges(0.0, 0.0, 100.0, 200.0)).scroll_height(500.0),
        );

        doc.set_scroll_top(node, 1000.0);
        assert_eq!(doc.scroll_top(node), 300.0);

        doc.set_scroll_top(node, -20.0);
        assert_eq!(doc.scroll_top(node), 0.0);
    }

    #[test]
    fn test_mouse_events_bubble_to_window() {
        let mut doc = Document::new(Window::new(Size::new(800.0, 600.0)));
        let body = doc.body();
        let node = doc.create_element("div");
        let _ = doc.append_child(body, node);

        let seen = Rc::new(RefCell::new(Vec::new()));

        for (target, name) in [
            (Target::Window, "window"),
            (Target::Node(body), "body"),
            (Target::Node(node), "node"),
        ] {
            let seen = Rc::clone(&seen);
            let _ = doc.add_listener(target, Kind::MouseDown, move |_, _| {
                seen.borrow_mut().push(name);
            });
        }

        let status = doc.dispatch(&press(node));

        assert_eq!(*seen.borrow(), vec!["node", "body", "window"]);
        assert_eq!(status, Status::Ignored);
    }

    #[test]
    fn test_scroll_does_not_bubble() {
        let mut doc = Document::default();
        let body = doc.body();
        let node = doc.create_element("div");
        let _ = doc.append_child(body, node);

        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let _ = doc.add_listener(Target::Window, Kind::Scroll, move |_, _| {
            *counter.borrow_mut() += 1;
        });

        let _ = doc.dispatch(&Event::scroll(node, Instant::now()));
        assert_eq!(*count.borrow(), 0);

        let _ = doc.dispatch(&Event::scroll(Target::Window, Instant::now()));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_listener_added_during_dispatch_sees_event_further_up() {
        let mut doc = Document::default();
        let body = doc.body();
        let node = doc.create_element("div");
        let _ = doc.append_child(body, node);

        let hits = Rc::new(RefCell::new(0));
        let outer_hits = Rc::clone(&hits);

        let _ = doc.add_listener(node, Kind::MouseDown, move |doc, event| {
            event.prevent_default();
            let hits = Rc::clone(&outer_hits);
            let _ = doc.add_listener(Target::Window, Kind::MouseDown, move |_, _| {
                *hits.borrow_mut() += 1;
            });
        });

        let status = doc.dispatch(&press(node));

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(status, Status::Captured);
    }

    #[test]
    fn test_listener_removed_during_dispatch_is_skipped() {
        let mut doc = Document::default();
        let body = doc.body();
        let node = doc.create_element("div");
        let _ = doc.append_child(body, node);

        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let window_listener = doc.add_listener(Target::Window, Kind::MouseDown, move |_, _| {
            *counter.borrow_mut() += 1;
        });

        let _ = doc.add_listener(node, Kind::MouseDown, move |doc, _| {
            let _ = doc.remove_listener(window_listener);
        });

        let _ = doc.dispatch(&press(node));

        assert_eq!(*hits.borrow(), 0);
        assert!(!doc.has_listener(window_listener));
        assert!(!doc.remove_listener(window_listener));
        assert_eq!(doc.listener_count(Target::Window, Kind::MouseDown), 0);
    }

    #[test]
    fn test_remove_node_frees_subtree_and_listeners() {
        let mut doc = Document::default();
        let body = doc.body();
        let before = doc.node_count();

        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        let _ = doc.append_child(body, outer);
        let _ = doc.append_child(outer, inner);

        let on_inner = doc.add_listener(inner, Kind::MouseDown, |_, _| {});
        let on_window = doc.add_listener(Target::Window, Kind::MouseDown, |_, _| {});

        assert!(doc.remove_node(outer));

        assert!(doc.node(outer).is_none());
        assert!(doc.node(inner).is_none());
        assert!(doc.children(body).is_empty());
        assert_eq!(doc.node_count(), before);

        assert!(!doc.has_listener(on_inner));
        assert!(doc.has_listener(on_window));

        assert!(!doc.remove_node(outer));
        assert!(!doc.remove_node(body));
        assert!(doc.node(body).is_some());
    }
}
