//! Queries over an element tree, the way a user or assistive technology
//! finds things on screen: by role and accessible name, by label, by text.

use std::fmt;

use thiserror::Error;

use crate::tree::{Kind, Node, Role};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element with {0}")]
    NotFound(String),
    #[error("found {count} elements with {query}, expected one")]
    Multiple { query: String, count: usize },
    #[error("element with {0} is not an input")]
    NotAnInput(String),
    #[error("element with {0} is disabled")]
    Disabled(String),
}

/// Text matcher.
///
/// `Exact` compares whitespace-normalized text, `Contains` is a
/// case-insensitive substring search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    Contains(String),
}

impl TextMatch {
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    pub fn contains(text: impl Into<String>) -> Self {
        Self::Contains(text.into())
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = normalize(text);
        match self {
            TextMatch::Exact(expected) => text == normalize(expected),
            TextMatch::Contains(expected) => text
                .to_lowercase()
                .contains(&normalize(expected).to_lowercase()),
        }
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(text) => write!(f, "{:?}", text),
            TextMatch::Contains(text) => write!(f, "/{}/i", text),
        }
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Filters of a role query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByRole {
    pub name: Option<TextMatch>,
    pub level: Option<u8>,
    pub description: Option<TextMatch>,
}

impl ByRole {
    pub fn name(mut self, name: TextMatch) -> Self {
        self.name = Some(name);
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn description(mut self, description: TextMatch) -> Self {
        self.description = Some(description);
        self
    }

    fn describe(&self, role: Role) -> String {
        let mut query = format!("role {:?}", role);
        if let Some(name) = &self.name {
            query.push_str(&format!(" and name {}", name));
        }
        if let Some(level) = self.level {
            query.push_str(&format!(" and level {}", level));
        }
        if let Some(description) = &self.description {
            query.push_str(&format!(" and description {}", description));
        }
        query
    }
}

/// Accessible name of `node`.
///
/// Inputs are named by the label pointing at their id, other roles by their
/// text content.
pub fn accessible_name(root: &Node, node: &Node) -> Option<String> {
    match &node.kind {
        Kind::Input(_) => {
            let id = node.id.as_deref()?;
            root.descendants().into_iter().find_map(|n| match &n.kind {
                Kind::Label { target } if target == id => Some(n.text_content()),
                _ => None,
            })
        }
        Kind::Heading(_) | Kind::Button { .. } | Kind::Alert | Kind::Paragraph => {
            Some(node.text_content())
        }
        Kind::Form | Kind::Group | Kind::Label { .. } => None,
    }
}

/// Accessible description of `node`, the text of the node it is described by.
pub fn accessible_description(root: &Node, node: &Node) -> Option<String> {
    let id = node.input()?.described_by.as_deref()?;
    root.find_by_id(id).map(Node::text_content)
}

fn matches_role(root: &Node, node: &Node, role: Role, by: &ByRole) -> bool {
    if node.role() != Some(role) {
        return false;
    }
    if let Some(level) = by.level {
        if node.heading_level() != Some(level) {
            return false;
        }
    }
    if let Some(name) = &by.name {
        if !accessible_name(root, node).is_some_and(|n| name.matches(&n)) {
            return false;
        }
    }
    if let Some(description) = &by.description {
        if !accessible_description(root, node).is_some_and(|d| description.matches(&d)) {
            return false;
        }
    }
    true
}

fn single<'a>(nodes: Vec<&'a Node>, query: String) -> Result<Option<&'a Node>, QueryError> {
    match nodes.len() {
        0 => Ok(None),
        1 => Ok(nodes.into_iter().next()),
        count => Err(QueryError::Multiple { query, count }),
    }
}

fn required<'a>(
    nodes: Vec<&'a Node>,
    query: impl Fn() -> String,
) -> Result<&'a Node, QueryError> {
    single(nodes, query())?.ok_or_else(|| QueryError::NotFound(query()))
}

pub fn all_by_role<'a>(root: &'a Node, role: Role, by: &ByRole) -> Vec<&'a Node> {
    root.descendants()
        .into_iter()
        .filter(|node| matches_role(root, node, role, by))
        .collect()
}

/// Every node matching the query, fails when there is none.
pub fn get_all_by_role<'a>(
    root: &'a Node,
    role: Role,
    by: &ByRole,
) -> Result<Vec<&'a Node>, QueryError> {
    let nodes = all_by_role(root, role, by);
    if nodes.is_empty() {
        return Err(QueryError::NotFound(by.describe(role)));
    }
    Ok(nodes)
}

/// The single node matching the query.
pub fn get_by_role<'a>(root: &'a Node, role: Role, by: &ByRole) -> Result<&'a Node, QueryError> {
    required(all_by_role(root, role, by), || by.describe(role))
}

/// Like [`get_by_role`] but a missing node is not an error.
pub fn query_by_role<'a>(
    root: &'a Node,
    role: Role,
    by: &ByRole,
) -> Result<Option<&'a Node>, QueryError> {
    single(all_by_role(root, role, by), by.describe(role))
}

/// The single node named by a label whose text matches.
pub fn get_by_label_text<'a>(root: &'a Node, text: &TextMatch) -> Result<&'a Node, QueryError> {
    let nodes = root
        .descendants()
        .into_iter()
        .filter_map(|node| match &node.kind {
            Kind::Label { target } if text.matches(&node.text_content()) => {
                root.find_by_id(target)
            }
            _ => None,
        })
        .collect();
    required(nodes, || format!("label {}", text))
}

/// The single node whose own text matches, optionally restricted to a role.
pub fn get_by_text<'a>(
    root: &'a Node,
    text: &TextMatch,
    selector: Option<Role>,
) -> Result<&'a Node, QueryError> {
    let nodes = root
        .descendants()
        .into_iter()
        .filter(|node| node.text.is_some() && text.matches(node.own_text()))
        .filter(|node| selector.is_none() || node.role() == selector)
        .collect();
    required(nodes, || match selector {
        Some(role) => format!("text {} and role {:?}", text, role),
        None => format!("text {}", text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ButtonType, Input};

    fn tree() -> Node {
        Node::new(Kind::Form)
            .push(Node::new(Kind::Heading(1)).text("Welcome  back"))
            .push(Node::new(Kind::Heading(2)).text("Welcome"))
            .push(
                Node::new(Kind::Label {
                    target: "code".to_string(),
                })
                .text("Code"),
            )
            .push(
                Node::new(Kind::Input(Input {
                    described_by: Some("hint".to_string()),
                    ..Default::default()
                }))
                .id("code"),
            )
            .push(Node::new(Kind::Paragraph).id("hint").text("Six digits"))
            .push(
                Node::new(Kind::Button {
                    kind: ButtonType::Submit,
                    disabled: false,
                })
                .text("Send"),
            )
            .push(
                Node::new(Kind::Button {
                    kind: ButtonType::Button,
                    disabled: false,
                })
                .text("Resend"),
            )
    }

    #[test]
    fn text_match() {
        assert!(TextMatch::exact("Sign in").matches("  Sign   in "));
        assert!(!TextMatch::exact("Sign in").matches("sign in"));
        assert!(TextMatch::contains("SIGN IN").matches("Please sign in now"));
        assert!(!TextMatch::contains("sign up").matches("Please sign in now"));
        assert_eq!(TextMatch::contains("sign in").to_string(), "/sign in/i");
    }

    #[test]
    fn role_queries() {
        let root = tree();
        let heading = get_by_role(
            &root,
            Role::Heading,
            &ByRole::default()
                .name(TextMatch::contains("welcome"))
                .level(2),
        )
        .unwrap();
        assert_eq!(heading.own_text(), "Welcome");

        assert_eq!(
            get_by_role(
                &root,
                Role::Heading,
                &ByRole::default().name(TextMatch::contains("welcome"))
            ),
            Err(QueryError::Multiple {
                query: "role Heading and name /welcome/i".to_string(),
                count: 2,
            })
        );
        assert_eq!(
            get_all_by_role(&root, Role::Button, &ByRole::default())
                .unwrap()
                .len(),
            2
        );
        assert!(matches!(
            get_by_role(&root, Role::Alert, &ByRole::default()),
            Err(QueryError::NotFound(_))
        ));
        assert_eq!(query_by_role(&root, Role::Alert, &ByRole::default()), Ok(None));
    }

    #[test]
    fn inputs_are_named_by_their_label_and_described_by_id() {
        let root = tree();
        let input = get_by_role(
            &root,
            Role::TextBox,
            &ByRole::default()
                .name(TextMatch::exact("Code"))
                .description(TextMatch::exact("Six digits")),
        )
        .unwrap();
        assert_eq!(input.id.as_deref(), Some("code"));
        assert_eq!(
            get_by_label_text(&root, &TextMatch::contains("code")).unwrap(),
            input
        );
        assert!(get_by_label_text(&root, &TextMatch::contains("email")).is_err());
    }

    #[test]
    fn text_queries_use_own_text_and_selector() {
        let root = tree();
        let hint = get_by_text(&root, &TextMatch::contains("digits"), Some(Role::Paragraph));
        assert_eq!(hint.unwrap().id.as_deref(), Some("hint"));
        assert!(get_by_text(&root, &TextMatch::contains("digits"), Some(Role::Alert)).is_err());
        // The form only holds text through its children.
        assert!(get_by_text(&root, &TextMatch::contains("send"), Some(Role::Form)).is_err());
    }
}
