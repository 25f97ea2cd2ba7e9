//! Element tree produced by the views.
//!
//! The tree carries the structure and accessibility attributes of what is
//! drawn, independently of the backend drawing it (iced widgets or HTML).

/// Accessibility role of a node, as exposed to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Form,
    Heading,
    Paragraph,
    TextBox,
    Alert,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Submit,
    Button,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Submit => "submit",
            ButtonType::Button => "button",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    pub input_type: InputType,
    pub name: String,
    pub value: String,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    /// Id of the node whose text describes this input.
    pub described_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Fields submitted together, the submit action belongs to the caller.
    Form,
    /// Layout only grouping, no role.
    Group,
    Heading(u8),
    Paragraph,
    /// Visible label naming the node with id `target`.
    Label { target: String },
    Input(Input),
    Alert,
    Button { kind: ButtonType, disabled: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: Kind,
    pub id: Option<String>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            id: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn push(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_maybe(self, child: Option<Node>) -> Self {
        match child {
            Some(child) => self.push(child),
            None => self,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self.kind {
            Kind::Form => Some(Role::Form),
            Kind::Heading(_) => Some(Role::Heading),
            Kind::Paragraph => Some(Role::Paragraph),
            Kind::Input(_) => Some(Role::TextBox),
            Kind::Alert => Some(Role::Alert),
            Kind::Button { .. } => Some(Role::Button),
            Kind::Group | Kind::Label { .. } => None,
        }
    }

    /// Text held directly by this node, without its children.
    pub fn own_text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Text of this node followed by the text of all its descendants.
    pub fn text_content(&self) -> String {
        let mut content = self.own_text().to_string();
        for child in &self.children {
            content.push_str(&child.text_content());
        }
        content
    }

    /// This node and all its descendants, in document order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.descendants());
        }
        nodes
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.descendants()
            .into_iter()
            .find(|node| node.id.as_deref() == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    pub fn input(&self) -> Option<&Input> {
        match &self.kind {
            Kind::Input(input) => Some(input),
            _ => None,
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut Input> {
        match &mut self.kind {
            Kind::Input(input) => Some(input),
            _ => None,
        }
    }

    /// Current value of an input node.
    pub fn value(&self) -> Option<&str> {
        self.input().map(|input| input.value.as_str())
    }

    pub fn is_disabled(&self) -> bool {
        match &self.kind {
            Kind::Input(input) => input.disabled,
            Kind::Button { disabled, .. } => *disabled,
            _ => false,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.input().map(|input| input.invalid).unwrap_or(false)
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            Kind::Heading(level) => Some(level.clamp(1, 6)),
            _ => None,
        }
    }
}
