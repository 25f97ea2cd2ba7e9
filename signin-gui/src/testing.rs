//! Rendered form that can be queried and typed into, like a user would.

use crate::{
    props::Props,
    query::{self, ByRole, QueryError, TextMatch},
    tree::{Node, Role},
    views,
};

pub struct Screen {
    root: Node,
}

impl Screen {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Renders the sign-in form for the given props.
    pub fn render(props: &Props) -> Self {
        Self::new(views::user_authentication(props))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn get_by_role(&self, role: Role, by: ByRole) -> Result<&Node, QueryError> {
        query::get_by_role(&self.root, role, &by)
    }

    pub fn query_by_role(&self, role: Role, by: ByRole) -> Result<Option<&Node>, QueryError> {
        query::query_by_role(&self.root, role, &by)
    }

    pub fn get_all_by_role(&self, role: Role, by: ByRole) -> Result<Vec<&Node>, QueryError> {
        query::get_all_by_role(&self.root, role, &by)
    }

    pub fn get_by_label_text(&self, text: TextMatch) -> Result<&Node, QueryError> {
        query::get_by_label_text(&self.root, &text)
    }

    pub fn get_by_text(&self, text: TextMatch, selector: Option<Role>) -> Result<&Node, QueryError> {
        query::get_by_text(&self.root, &text, selector)
    }

    pub fn accessible_description(&self, node: &Node) -> Option<String> {
        query::accessible_description(&self.root, node)
    }

    /// Types `text` one character at a time into the input named by `label`.
    pub fn type_text(&mut self, label: TextMatch, text: &str) -> Result<(), QueryError> {
        let query = format!("label {}", label);
        let id = self
            .get_by_label_text(label)?
            .id
            .clone()
            .ok_or_else(|| QueryError::NotFound(query.clone()))?;
        let input = self
            .root
            .find_by_id_mut(&id)
            .and_then(Node::input_mut)
            .ok_or_else(|| QueryError::NotAnInput(query.clone()))?;
        if input.disabled {
            return Err(QueryError::Disabled(query));
        }
        for c in text.chars() {
            input.value.push(c);
        }
        Ok(())
    }
}
