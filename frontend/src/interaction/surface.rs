use crate::error::SiteError;

use super::style::Style;

/// Rendering capability consumed by the notification center and the reveal
/// scheduler.
pub trait DisplaySurface {
    type Node: Clone;

    /// Creates a toast node carrying `text` and attaches it to the page.
    fn create_toast(&mut self, class_name: &str, text: &str, style: &Style) -> Result<Self::Node, SiteError>;

    fn apply_style(&mut self, node: &Self::Node, style: &Style);

    /// Detaches `node`. Returns `false` when it was already gone.
    fn detach(&mut self, node: &Self::Node) -> bool;
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Default, Clone)]
    pub struct FakeNode {
        pub class_name: String,
        pub text: String,
        pub style: BTreeMap<&'static str, String>,
        pub attached: bool,
    }

    #[derive(Default)]
    struct State {
        nodes: Vec<FakeNode>,
        unavailable: bool,
    }

    /// In-memory surface. Clones share the same node store.
    #[derive(Clone, Default)]
    pub struct FakeSurface {
        state: Rc<RefCell<State>>,
    }

    impl FakeSurface {
        pub fn unavailable() -> Self {
            let surface = Self::default();
            surface.state.borrow_mut().unavailable = true;
            surface
        }

        /// Adds an externally owned element, e.g. a card on the page.
        pub fn element(&self) -> usize {
            let mut state = self.state.borrow_mut();
            state.nodes.push(FakeNode {
                attached: true,
                ..FakeNode::default()
            });
            state.nodes.len() - 1
        }

        pub fn node(&self, id: usize) -> FakeNode {
            self.state.borrow().nodes[id].clone()
        }

        pub fn style_of(&self, id: usize, property: &str) -> Option<String> {
            self.state.borrow().nodes[id].style.get(property).cloned()
        }

        pub fn remove_externally(&self, id: usize) {
            self.state.borrow_mut().nodes[id].attached = false;
        }

        pub fn attached_toasts(&self) -> Vec<FakeNode> {
            self.state
                .borrow()
                .nodes
                .iter()
                .filter(|n| n.attached && n.class_name.starts_with("notification"))
                .cloned()
                .collect()
        }

        pub fn toasts_created(&self) -> usize {
            self.state
                .borrow()
                .nodes
                .iter()
                .filter(|n| n.class_name.starts_with("notification"))
                .count()
        }
    }

    impl DisplaySurface for FakeSurface {
        type Node = usize;

        fn create_toast(&mut self, class_name: &str, text: &str, style: &Style) -> Result<usize, SiteError> {
            let mut state = self.state.borrow_mut();
            if state.unavailable {
                return Err(SiteError::EnvironmentUnsupported("document.body"));
            }
            state.nodes.push(FakeNode {
                class_name: class_name.to_string(),
                text: text.to_string(),
                style: style.iter().map(|(p, v)| (p, v.to_string())).collect(),
                attached: true,
            });
            Ok(state.nodes.len() - 1)
        }

        fn apply_style(&mut self, node: &usize, style: &Style) {
            let mut state = self.state.borrow_mut();
            for (property, value) in style.iter() {
                state.nodes[*node].style.insert(property, value.to_string());
            }
        }

        fn detach(&mut self, node: &usize) -> bool {
            let mut state = self.state.borrow_mut();
            std::mem::replace(&mut state.nodes[*node].attached, false)
        }
    }
}
