// Retained document model that navigation reads and mutates.
// A rendering surface mirrors it; tests drive it directly through `dispatch`.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::modules::selector::Selector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// Inline display style. `None` on the element means "whatever the stylesheet says".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Flex,
    Block,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Click,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub scroll_top: u32,
    pub last_scroll: Option<ScrollBehavior>,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            scroll_top: 0,
            last_scroll: None,
        }
    }

    pub fn scroll_to(&mut self, top: u32, behavior: ScrollBehavior) {
        self.scroll_top = top;
        self.last_scroll = Some(behavior);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    display: Option<Display>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = (!id.is_empty()).then(|| id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn display(&self) -> Option<Display> {
        self.display
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = Some(display);
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Some(Display::None)
    }
}

#[derive(Debug)]
pub struct Event {
    pub target: NodeId,
    pub signal: Signal,
    default_prevented: bool,
}

impl Event {
    fn new(target: NodeId, signal: Signal) -> Self {
        Self {
            target,
            signal,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub type Listener = Rc<dyn Fn(&mut Document, &mut Event)>;

struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

pub struct Document {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    listeners: HashMap<NodeId, Vec<(Signal, Listener)>>,
    ready_state: ReadyState,
    viewport: Viewport,
}

impl Document {
    /// An empty document that is still loading.
    pub fn new(viewport_width: u32) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            listeners: HashMap::new(),
            ready_state: ReadyState::Loading,
            viewport: Viewport::new(viewport_width),
        }
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Appends `element` as the last child of `parent`, or as a new root.
    pub fn append(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = parent.filter(|p| p.0 < self.nodes.len());
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0).map(|n| &n.element)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0).map(|n| &mut n.element)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    /// Own text followed by every descendant's, in document order.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        if let Some(n) = self.nodes.get(node.0) {
            out.push_str(&n.element.text);
            for child in &n.children {
                self.collect_text(*child, out);
            }
        }
    }

    fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        order
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.query_selector(&Selector::Id(id.to_string()))
    }

    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|node| selector.matches(&self.nodes[node.0].element))
    }

    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|node| selector.matches(&self.nodes[node.0].element))
            .collect()
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.remove_class(class);
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    pub fn add_listener(&mut self, node: NodeId, signal: Signal, listener: Listener) {
        self.listeners.entry(node).or_default().push((signal, listener));
    }

    pub fn listener_count(&self, node: NodeId, signal: Signal) -> usize {
        self.listeners
            .get(&node)
            .map(|ls| ls.iter().filter(|(s, _)| *s == signal).count())
            .unwrap_or(0)
    }

    /// Runs the listeners bound to `node` for `signal`, in registration order.
    pub fn dispatch(&mut self, node: NodeId, signal: Signal) -> Event {
        let mut event = Event::new(node, signal);
        let listeners: Vec<Listener> = self
            .listeners
            .get(&node)
            .map(|ls| {
                ls.iter()
                    .filter(|(s, _)| *s == signal)
                    .map(|(_, l)| Rc::clone(l))
                    .collect()
            })
            .unwrap_or_default();
        for listener in listeners {
            listener(self, &mut event);
        }
        event
    }

    pub fn click(&mut self, node: NodeId) -> Event {
        self.dispatch(node, Signal::Click)
    }

    /// Sets the form value, then signals the change.
    pub fn input(&mut self, node: NodeId, value: &str) -> Event {
        if let Some(el) = self.element_mut(node) {
            el.set_value(value);
        }
        self.dispatch(node, Signal::Input)
    }
}
