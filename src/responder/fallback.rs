//! Canned replies for input that matches no Q&A record.

use crate::types::PersonContext;

/// Pick a greeting, help or generic reply. `input` must already be lower-cased.
pub fn fallback_response(input: &str, person: &PersonContext) -> String {
    let PersonContext { name, title, .. } = person;

    if input.contains("hello") || input.contains("hi") {
        return format!(
            "Hello! I'm here to help you learn about {name}, a {title}. Feel free to ask about \
             their skills, experience, projects, or anything else you'd like to know!"
        );
    }

    if input.contains("help") {
        return format!(
            "I can help you learn about {name}'s background, technical skills, work experience, \
             projects, and expertise areas. Try asking about their current role, technologies \
             they work with, or their experience in specific areas."
        );
    }

    format!(
        "I'd be happy to help you learn more about {name}! Try asking about their experience, \
         skills, projects, or use one of the suggested questions."
    )
}
