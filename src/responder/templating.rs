//! Placeholder substitution for authored answers and questions.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::PersonContext;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(first_name|name|title|email|location)\}").expect("valid token regex")
});

/// Replace `{first_name}`, `{name}`, `{title}`, `{email}` and `{location}`
/// with values from `person`, in a single pass. Other braces are left alone.
pub fn render_template(text: &str, person: &PersonContext) -> String {
    TOKEN
        .replace_all(text, |caps: &Captures<'_>| match &caps[1] {
            "first_name" => person.first_name().to_string(),
            "name" => person.name.clone(),
            "title" => person.title.clone(),
            "email" => person.email.clone().unwrap_or_default(),
            "location" => person.location.clone().unwrap_or_default(),
            other => format!("{{{other}}}"),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> PersonContext {
        PersonContext {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            email: Some("ada@example.com".to_string()),
            location: None,
        }
    }

    #[test]
    fn substitutes_known_tokens() {
        let rendered = render_template(
            "{first_name}'s title is {title}; write to {email}.",
            &person(),
        );
        assert_eq!(rendered, "Ada's title is Analyst; write to ada@example.com.");
    }

    #[test]
    fn missing_optional_fields_render_empty() {
        assert_eq!(render_template("Based in {location}.", &person()), "Based in .");
    }

    #[test]
    fn unknown_tokens_are_untouched() {
        assert_eq!(render_template("{nickname} {}", &person()), "{nickname} {}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let person = PersonContext::new("{title} Smith", "Engineer");
        assert_eq!(render_template("{name}", &person), "{title} Smith");
    }

    #[test]
    fn template_mode_uses_owner_phrase() {
        let person = PersonContext::new("[YOUR FULL NAME]", "[YOUR TITLE]");
        assert_eq!(
            render_template("Ask about {first_name}'s work", &person),
            "Ask about the portfolio owner's work"
        );
    }
}
