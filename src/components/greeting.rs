//! Greeting Component
//!
//! A presentational heading that interpolates a subject name and a language
//! label into a fixed greeting template.

use gpui::{
    div, prelude::*, px, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::constants::HEADING_TEXT_SIZE;
use crate::theme::colors::GreeterColors;

/// Input contract for [`Greeting`]: both fields are required.
///
/// Values are interpolated verbatim; empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingProps {
    pub subject_name: SharedString,
    pub spoken_language: SharedString,
}

impl GreetingProps {
    pub fn new(
        subject_name: impl Into<SharedString>,
        spoken_language: impl Into<SharedString>,
    ) -> Self {
        Self {
            subject_name: subject_name.into(),
            spoken_language: spoken_language.into(),
        }
    }
}

/// Produce the greeting text for the given props.
///
/// Pure and total: same props always yield byte-identical output, and no
/// string input can fail.
pub fn greeting_text(props: &GreetingProps) -> String {
    format!(
        "Hi {} from React Typescript where we speak {}!",
        props.subject_name, props.spoken_language
    )
}

/// A heading-level greeting card
#[derive(IntoElement)]
pub struct Greeting {
    props: GreetingProps,
}

impl Greeting {
    /// Create a new greeting from its props
    pub fn new(props: GreetingProps) -> Self {
        Self { props }
    }
}

impl RenderOnce for Greeting {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .text_size(px(HEADING_TEXT_SIZE))
            .font_weight(FontWeight::BOLD)
            .text_color(GreeterColors::heading())
            .child(greeting_text(&self.props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolates_both_fields() {
        let text = greeting_text(&GreetingProps::new("Ada", "Gaelic"));
        assert_eq!(text, "Hi Ada from React Typescript where we speak Gaelic!");
    }

    #[test]
    fn test_fields_follow_template_anchors() {
        let text = greeting_text(&GreetingProps::new("Morag", "Doric"));
        assert!(text.starts_with("Hi Morag"));
        assert!(text.ends_with("we speak Doric!"));
    }

    #[test]
    fn test_idempotent_for_identical_props() {
        let props = GreetingProps::new("Phil", "Scottish");
        assert_eq!(greeting_text(&props), greeting_text(&props));
    }

    #[test]
    fn test_empty_strings_are_interpolated_as_is() {
        let text = greeting_text(&GreetingProps::new("", ""));
        assert_eq!(text, "Hi  from React Typescript where we speak !");
    }

    #[test]
    fn test_arbitrary_content_is_not_escaped() {
        let text = greeting_text(&GreetingProps::new("<b>Phil</b>", "  Scots  "));
        assert_eq!(
            text,
            "Hi <b>Phil</b> from React Typescript where we speak   Scots  !"
        );
    }
}
