//! Loading the portfolio document.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{error::Result, types::Portfolio};

pub const BUNDLED_PORTFOLIO: &str = include_str!("../data/portfolio.json");

pub fn parse_portfolio(raw: &str) -> Result<Portfolio> {
    Ok(serde_json::from_str(raw)?)
}

/// Load from `path` when given, otherwise the portfolio compiled into the binary.
pub fn load_portfolio(path: Option<&Path>) -> Result<Portfolio> {
    let portfolio = match path {
        Some(path) => {
            debug!("Loading portfolio from {}", path.display());
            parse_portfolio(&fs::read_to_string(path)?)?
        }
        None => {
            debug!("Loading bundled portfolio");
            parse_portfolio(BUNDLED_PORTFOLIO)?
        }
    };

    info!(
        "Loaded portfolio for {} ({} experience entries, {} projects)",
        portfolio.personal_info.name,
        portfolio.resume.experience.len(),
        portfolio.projects.len()
    );
    Ok(portfolio)
}

/// Plain-text profile summary for the terminal.
pub fn profile_summary(portfolio: &Portfolio) -> String {
    let info = &portfolio.personal_info;
    let mut lines = vec![format!("{} - {}", info.name, info.title)];

    if !info.about_me.is_empty() {
        lines.push(String::new());
        lines.extend(info.about_me.iter().cloned());
    }

    let contacts: Vec<String> = info
        .contacts
        .iter()
        .filter_map(|contact| {
            let value = contact.value.as_deref()?;
            let label = contact
                .title
                .as_deref()
                .or(contact.title_key.as_deref().and_then(|key| key.rsplit('.').next()))
                .unwrap_or("contact");
            Some(format!("  {label}: {value}"))
        })
        .collect();
    if !contacts.is_empty() {
        lines.push(String::new());
        lines.push("Contact:".to_string());
        lines.extend(contacts);
    }

    if !portfolio.resume.experience.is_empty() {
        lines.push(String::new());
        lines.push("Experience:".to_string());
        lines.extend(portfolio.resume.experience.iter().map(|exp| {
            format!("  {} | {} at {}", exp.timeframe, exp.position, exp.company)
        }));
    }

    if !portfolio.resume.education.is_empty() {
        lines.push(String::new());
        lines.push("Education:".to_string());
        lines.extend(portfolio.resume.education.iter().map(|edu| {
            format!("  {} | {}, {}", edu.timeframe, edu.degree, edu.institution)
        }));
    }

    if !portfolio.skills.technical.is_empty() {
        let skills: Vec<&str> = portfolio
            .skills
            .technical
            .iter()
            .map(|skill| skill.name.as_str())
            .collect();
        lines.push(String::new());
        lines.push(format!("Skills: {}", skills.join(", ")));
    }

    lines.join("\n")
}
