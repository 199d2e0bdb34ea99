//! Tests for the menu_bar module.

#[cfg(test)]
mod tests {
    use crate::core::dom::{Layout, Position, Window};
    use crate::core::event::{Kind, Target};
    use crate::core::time::Instant;
    use crate::core::{Document, Event, NodeId, Rectangle, Size};
    use crate::menu::{Context, Dropdown, DropdownOptions, Element, MenuItem, MenuItemSpec, class};
    use crate::testing::{self, TestView};
    use crate::{EditorView, MenuBar, MenuBarOptions, Selection};

    const MENU_HEIGHT: f32 = 40.0;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";

    fn item(label: &str) -> Element<TestView> {
        MenuItem::new(MenuItemSpec::<TestView>::new(|_, _, _, _| {}).label(label))
            .expect("valid item")
            .into()
    }

    fn mount(document: &mut Document, cx: &Context<TestView>, floating: bool) -> MenuBar<TestView> {
        let content = vec![vec![item("Bold"), item("Italic")], vec![item("Undo")]];
        let bar = MenuBar::new(cx, document, MenuBarOptions::new(content).floating(floating));

        document.set_bounds(bar.menu(), Rectangle::from_edges(0.0, 0.0, 800.0, MENU_HEIGHT));
        bar
    }

    fn scroll_window(document: &mut Document, wrapper: NodeId, top: f32, bottom: f32) {
        document.set_bounds(wrapper, Rectangle::from_edges(0.0, top, 800.0, bottom));
        let _ = document.dispatch(&Event::scroll(Target::Window, Instant::now()));
    }

    fn scroll_listeners(document: &Document, targets: &[Target]) -> usize {
        targets
            .iter()
            .map(|&target| document.listener_count(target, Kind::Scroll))
            .sum()
    }

    #[test]
    fn test_mount_wraps_editor() {
        let (mut document, cx) = testing::setup();
        let editor = cx.view().dom();
        let bar = mount(&mut document, &cx, false);

        let wrapper = bar.wrapper();
        assert_eq!(document.children(document.body()), &[wrapper]);
        assert_eq!(document.children(wrapper), &[bar.menu(), editor]);
        assert!(document.has_class(wrapper, class::MENUBAR_WRAPPER));
        assert!(document.has_class(bar.menu(), class::MENUBAR));

        // Two items, a separator and another item.
        let slots = document.children(bar.menu());
        assert_eq!(slots.len(), 4);
        assert!(document.has_class(slots[2], class::SEPARATOR));
    }

    #[test]
    fn test_destroy_restores_editor() {
        let (mut document, cx) = testing::setup();
        let editor = cx.view().dom();
        let bar = mount(&mut document, &cx, true);

        let body = document.body();
        assert_eq!(scroll_listeners(&document, &[Target::Window, Target::Node(body)]), 2);

        bar.destroy(&mut document);

        assert_eq!(document.children(body), &[editor]);
        assert_eq!(scroll_listeners(&document, &[Target::Window, Target::Node(body)]), 0);
    }

    #[test]
    fn test_destroy_tears_down_open_dropdown() {
        let (mut document, cx) = testing::setup();
        let editor = cx.view().dom();
        let nodes = document.node_count();

        let dropdown = Dropdown::new(
            vec![item("Paragraph"), item("Code")],
            DropdownOptions::new("Type..."),
        );
        let content = vec![vec![item("Bold")], vec![dropdown.into()]];
        let bar = MenuBar::new(&cx, &mut document, MenuBarOptions::new(content));

        let slots = document.children(bar.menu()).to_vec();
        let wrap = document.children(slots[2])[0];
        let label = document.children(wrap)[0];

        let _ = document.dispatch(&testing::press(label));
        assert_eq!(document.children(wrap).len(), 2);
        assert_eq!(document.listener_count(Target::Window, Kind::MouseDown), 1);

        let wrapper = bar.wrapper();
        bar.destroy(&mut document);

        assert_eq!(document.listener_count(Target::Window, Kind::MouseDown), 0);
        assert_eq!(document.listener_count(label, Kind::MouseDown), 0);
        assert!(document.node(wrapper).is_none());
        assert!(document.node(label).is_none());
        assert_eq!(document.children(document.body()), &[editor]);
        assert_eq!(document.node_count(), nodes);
    }

    #[test]
    fn test_float_boundary() {
        let (mut document, cx) = testing::setup();
        let bar = mount(&mut document, &cx, true);
        let wrapper = bar.wrapper();

        scroll_window(&mut document, wrapper, -5.0, MENU_HEIGHT + 5.0);
        assert!(!bar.is_floating());
        assert_eq!(bar.spacer(), None);

        scroll_window(&mut document, wrapper, -5.0, MENU_HEIGHT + 50.0);
        assert!(bar.is_floating());
    }

    #[test]
    fn test_float_and_dock_round_trip() {
        let (mut document, cx) = testing::setup();
        let editor = cx.view().dom();
        let bar = mount(&mut document, &cx, true);
        let (wrapper, menu) = (bar.wrapper(), bar.menu());

        let docked = document.style(menu).cloned();

        scroll_window(&mut document, wrapper, -100.0, 1000.0);
        assert!(bar.is_floating());

        let spacer = bar.spacer().expect("spacer while floating");
        assert_eq!(document.children(wrapper), &[spacer, menu, editor]);
        assert!(document.has_class(spacer, class::MENUBAR_SPACER));
        assert_eq!(
            document.style(spacer).and_then(|style| style.height),
            Some(MENU_HEIGHT)
        );

        let style = document.style(menu).cloned().expect("menu style");
        assert_eq!(style.position, Position::Fixed);
        assert_eq!(style.left, Some(0.0));
        assert_eq!(style.width, Some(800.0));
        assert_eq!(style.top, None);

        scroll_window(&mut document, wrapper, 10.0, 1000.0);
        assert!(!bar.is_floating());
        assert_eq!(bar.spacer(), None);
        assert_eq!(document.children(wrapper), &[menu, editor]);
        assert_eq!(document.style(menu).cloned(), docked);
    }

    #[test]
    fn test_repeated_float_and_dock_frees_spacers() {
        let (mut document, cx) = testing::setup();
        let bar = mount(&mut document, &cx, true);
        let wrapper = bar.wrapper();
        let nodes = document.node_count();

        for _ in 0..20 {
            scroll_window(&mut document, wrapper, -100.0, 1000.0);
            let spacer = bar.spacer().expect("spacer while floating");

            scroll_window(&mut document, wrapper, 10.0, 1000.0);
            assert!(document.node(spacer).is_none());
        }

        assert_eq!(document.node_count(), nodes);
    }

    #[test]
    fn test_float_in_scrolled_ancestor() {
        let (mut document, cx) = testing::setup();
        let scroller = document.create_element("div");
        let _ = document.append_child(document.body(), scroller);
        let _ = document.append_child(scroller, cx.view().dom());
        document.set_bounds(scroller, Rectangle::from_edges(0.0, 100.0, 820.0, 700.0));

        let bar = mount(&mut document, &cx, true);
        let (wrapper, menu) = (bar.wrapper(), bar.menu());

        let body = document.body();
        assert_eq!(
            scroll_listeners(
                &document,
                &[Target::Window, Target::Node(scroller), Target::Node(body)]
            ),
            3
        );

        document.set_bounds(wrapper, Rectangle::from_edges(10.0, 90.0, 810.0, 2000.0));
        let _ = document.dispatch(&Event::scroll(scroller, Instant::now()));

        assert!(bar.is_floating());
        assert_eq!(document.style(menu).and_then(|style| style.top), Some(100.0));

        // A 2px border on each side.
        document.set_layout(
            wrapper,
            Layout::new(Rectangle::from_edges(10.0, 50.0, 810.0, 2000.0))
                .client_size(Size::new(796.0, 1946.0)),
        );
        let _ = document.dispatch(&Event::scroll(scroller, Instant::now()));

        let style = document.style(menu).cloned().expect("menu style");
        assert!(bar.is_floating());
        assert_eq!(style.left, Some(12.0));
        assert_eq!(style.top, Some(100.0));
        assert!(!style.is_hidden());
    }

    #[test]
    fn test_hidden_below_viewport() {
        let (mut document, cx) = testing::setup();
        let scroller = document.create_element("div");
        let _ = document.append_child(document.body(), scroller);
        let _ = document.append_child(scroller, cx.view().dom());
        document.set_bounds(scroller, Rectangle::from_edges(0.0, 900.0, 800.0, 3000.0));

        let bar = mount(&mut document, &cx, true);
        let (wrapper, menu) = (bar.wrapper(), bar.menu());

        document.set_bounds(wrapper, Rectangle::from_edges(0.0, 850.0, 800.0, 3000.0));
        let _ = document.dispatch(&Event::scroll(scroller, Instant::now()));
        assert!(bar.is_floating());
        assert!(!document.is_hidden(menu));

        let _ = document.dispatch(&Event::scroll(scroller, Instant::now()));
        assert!(document.is_hidden(menu));
    }

    #[test]
    fn test_hidden_when_viewport_shrinks() {
        let (mut document, cx) = testing::setup();
        let scroller = document.create_element("div");
        let _ = document.append_child(document.body(), scroller);
        let _ = document.append_child(scroller, cx.view().dom());
        document.set_bounds(scroller, Rectangle::from_edges(0.0, 100.0, 820.0, 700.0));

        let bar = mount(&mut document, &cx, true);
        let (wrapper, menu) = (bar.wrapper(), bar.menu());

        document.set_bounds(wrapper, Rectangle::from_edges(10.0, 90.0, 810.0, 2000.0));
        let _ = document.dispatch(&Event::scroll(scroller, Instant::now()));
        assert!(bar.is_floating());

        let _ = document.dispatch(&Event::scroll(scroller, Instant::now()));
        assert!(!document.is_hidden(menu));

        document.set_window(Window::new(Size::new(1024.0, 80.0)));
        bar.update_float(&mut document, Some(scroller));
        assert!(bar.is_floating());
        assert!(document.is_hidden(menu));

        document.set_window(Window::new(Size::new(1024.0, 768.0)));
        bar.update_float(&mut document, Some(scroller));
        assert!(!document.is_hidden(menu));
    }

    #[test]
    fn test_detached_wrapper_drops_scroll_listeners() {
        let (mut document, cx) = testing::setup();
        let bar = mount(&mut document, &cx, true);
        let body = document.body();
        let targets = [Target::Window, Target::Node(body)];

        assert_eq!(scroll_listeners(&document, &targets), 2);

        let _ = document.detach(bar.wrapper());
        let _ = document.dispatch(&Event::scroll(Target::Window, Instant::now()));

        assert_eq!(scroll_listeners(&document, &targets), 0);
        assert!(!bar.is_floating());
    }

    #[test]
    fn test_never_floats_on_ios() {
        let mut document = Document::new(
            Window::new(Size::new(390.0, 844.0)).user_agent(IPHONE),
        );
        let view = TestView::new(&mut document);
        let cx = Context::new(std::rc::Rc::new(view), crate::MenuEvents::new());

        let bar = mount(&mut document, &cx, true);

        assert_eq!(document.listener_count(Target::Window, Kind::Scroll), 0);

        scroll_window(&mut document, bar.wrapper(), -100.0, 1000.0);
        assert!(!bar.is_floating());
    }

    #[test]
    fn test_height_stabilization() {
        let (mut document, cx) = testing::setup();
        let mut bar = mount(&mut document, &cx, false);
        let menu = bar.menu();

        bar.update(&mut document);
        assert_eq!(bar.max_height(), MENU_HEIGHT);
        assert_eq!(
            document.style(menu).and_then(|style| style.min_height),
            Some(MENU_HEIGHT)
        );

        document.set_bounds(menu, Rectangle::from_edges(0.0, 0.0, 800.0, 30.0));
        bar.update(&mut document);
        assert_eq!(bar.max_height(), MENU_HEIGHT);

        document.set_bounds(menu, Rectangle::from_edges(0.0, 0.0, 600.0, 30.0));
        bar.update(&mut document);
        assert_eq!(bar.max_height(), 30.0);
        assert_eq!(
            document.style(menu).and_then(|style| style.min_height),
            Some(30.0)
        );
    }

    #[test]
    fn test_caret_scrolls_out_from_under_floating_bar() {
        let (mut document, cx) = testing::setup();
        let scroller = document.create_element("div");
        let _ = document.append_child(document.body(), scroller);
        let _ = document.append_child(scroller, cx.view().dom());
        document.set_layout(
            scroller,
            Layout::new(Rectangle::from_edges(0.0, 0.0, 800.0, 500.0)).scroll_height(2000.0),
        );
        document.set_scroll_top(scroller, 300.0);

        let mut bar = mount(&mut document, &cx, true);
        scroll_window(&mut document, bar.wrapper(), -100.0, 1000.0);
        assert!(bar.is_floating());

        cx.view().set_selection(Some(Selection::new(vec![
            Rectangle::from_edges(10.0, 100.0, 12.0, 116.0),
            Rectangle::from_edges(10.0, 30.0, 12.0, 46.0),
        ])));
        bar.update(&mut document);
        assert_eq!(document.scroll_top(scroller), 290.0);

        // The head of an inverted selection is its first rectangle.
        cx.view().set_selection(Some(
            Selection::new(vec![
                Rectangle::from_edges(10.0, 100.0, 12.0, 116.0),
                Rectangle::from_edges(10.0, 30.0, 12.0, 46.0),
            ])
            .inverted(true),
        ));
        bar.update(&mut document);
        assert_eq!(document.scroll_top(scroller), 290.0);
    }
}
