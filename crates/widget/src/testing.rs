//! A fake editor for unit tests.
use crate::core::dom::Window;
use crate::core::time::Instant;
use crate::core::{Document, Event, NodeId, Size, mouse};
use crate::menu::{Context, Element, MenuItem, MenuItemSpec};
use crate::{EditorView, MenuEvents, Selection};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct TestState {
    pub(crate) strong: bool,
    pub(crate) locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    ToggleStrong,
}

#[derive(Debug)]
pub(crate) struct TestView {
    dom: NodeId,
    state: Cell<TestState>,
    dispatched: RefCell<Vec<Command>>,
    selection: RefCell<Option<Selection>>,
}

impl TestView {
    pub(crate) fn new(document: &mut Document) -> Self {
        let dom = document.create_element("div");
        document.add_class(dom, "editor");
        let _ = document.append_child(document.body(), dom);

        Self {
            dom,
            state: Cell::new(TestState::default()),
            dispatched: RefCell::new(Vec::new()),
            selection: RefCell::new(None),
        }
    }

    pub(crate) fn set_state(&self, state: TestState) {
        self.state.set(state);
    }

    pub(crate) fn set_selection(&self, selection: Option<Selection>) {
        *self.selection.borrow_mut() = selection;
    }

    pub(crate) fn dispatched(&self) -> Vec<Command> {
        self.dispatched.borrow().clone()
    }
}

impl EditorView for TestView {
    type State = TestState;
    type Transaction = Command;

    fn state(&self) -> TestState {
        self.state.get()
    }

    fn dispatch(&self, transaction: Command) {
        let mut state = self.state.get();

        match transaction {
            Command::ToggleStrong => state.strong = !state.strong,
        }

        self.state.set(state);
        self.dispatched.borrow_mut().push(transaction);
    }

    fn dom(&self) -> NodeId {
        self.dom
    }

    fn translate(&self, text: &str) -> String {
        match text {
            "Bold" => "Gras".to_owned(),
            "Toggle bold" => "Mettre en gras".to_owned(),
            _ => text.to_owned(),
        }
    }

    fn selection(&self, _document: &Document) -> Option<Selection> {
        self.selection.borrow().clone()
    }
}

pub(crate) fn setup() -> (Document, Context<TestView>) {
    let mut document = Document::new(Window::new(Size::new(1024.0, 768.0)));
    let view = TestView::new(&mut document);

    (document, Context::new(Rc::new(view), MenuEvents::new()))
}

pub(crate) fn press(target: NodeId) -> Event {
    press_at(target, Instant::now())
}

pub(crate) fn press_at(target: NodeId, time: Instant) -> Event {
    Event::mouse_down(target, mouse::Button::Left, time)
}

/// An item that is only shown while `shown` is set.
pub(crate) fn toggled_item(label: &str, shown: &Rc<Cell<bool>>) -> Element<TestView> {
    let shown = Rc::clone(shown);

    MenuItem::new(
        MenuItemSpec::<TestView>::new(|_, _, _, _| {})
            .label(label)
            .selectable(move |_| shown.get()),
    )
    .expect("valid item")
    .into()
}

/// An item recording how often it was activated.
pub(crate) fn counting_item(label: &str, count: &Rc<Cell<usize>>) -> Element<TestView> {
    let count = Rc::clone(count);

    MenuItem::new(
        MenuItemSpec::<TestView>::new(move |_, _, _, _| count.set(count.get() + 1)).label(label),
    )
    .expect("valid item")
    .into()
}
