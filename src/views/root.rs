//! Root View - Main Window Content
//!
//! The root view is the window's top-level container. It renders exactly one
//! greeting card with the application's fixed subject and language.

use gpui::{div, prelude::*, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::components::greeting::{Greeting, GreetingProps};
use crate::constants::{DEFAULT_SPOKEN_LANGUAGE, DEFAULT_SUBJECT_NAME};
use crate::theme::colors::GreeterColors;

/// Main window view containing the greeting card
pub struct RootView;

impl RootView {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Props for the single greeting this view renders
    fn greeting_props() -> GreetingProps {
        GreetingProps::new(DEFAULT_SUBJECT_NAME, DEFAULT_SPOKEN_LANGUAGE)
    }
}

impl Render for RootView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(GreeterColors::background())
            .flex()
            .items_center()
            .justify_center()
            .child(Greeting::new(Self::greeting_props()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::greeting::greeting_text;

    #[test]
    fn test_default_greeting_text() {
        let text = greeting_text(&RootView::greeting_props());
        assert_eq!(text, "Hi Phil from React Typescript where we speak Scottish!");
    }
}
