//! HTML rendering of the element tree.

use maud::{html, Markup, Render, DOCTYPE};

use crate::{
    props::Props,
    tree::{Kind, Node},
    views,
};

impl Render for Node {
    fn render(&self) -> Markup {
        let id = self.id.as_deref();
        let content = html! {
            @if let Some(text) = &self.text {
                (text)
            }
            @for child in &self.children {
                (child)
            }
        };
        match &self.kind {
            Kind::Form => html! { form id=[id] method="post" { (content) } },
            Kind::Group => html! { div id=[id] { (content) } },
            Kind::Heading(level) => match (*level).clamp(1, 6) {
                1 => html! { h1 id=[id] { (content) } },
                2 => html! { h2 id=[id] { (content) } },
                3 => html! { h3 id=[id] { (content) } },
                4 => html! { h4 id=[id] { (content) } },
                5 => html! { h5 id=[id] { (content) } },
                _ => html! { h6 id=[id] { (content) } },
            },
            Kind::Paragraph => html! { p id=[id] { (content) } },
            Kind::Label { target } => html! { label id=[id] for=(target) { (content) } },
            Kind::Input(input) => html! {
                input
                    type=(input.input_type.as_str())
                    id=[id]
                    name=(input.name)
                    value=(input.value)
                    placeholder=[input.placeholder.as_deref()]
                    autocomplete=[input.autocomplete.as_deref()]
                    disabled[input.disabled]
                    aria-invalid=[input.invalid.then_some("true")]
                    aria-describedby=[input.described_by.as_deref()];
            },
            Kind::Alert => html! { p id=[id] role="alert" { (content) } },
            Kind::Button { kind, disabled } => html! {
                button id=[id] type=(kind.as_str()) disabled[*disabled] { (content) }
            },
        }
    }
}

/// Sign-in form as an HTML fragment.
pub fn render(props: &Props) -> Markup {
    views::user_authentication(props).render()
}

/// Standalone page holding the sign-in form.
pub fn page(props: &Props) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (views::TITLE) }
            }
            body {
                main { (render(props)) }
            }
        }
    }
}
