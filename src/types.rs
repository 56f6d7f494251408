//! Portfolio data model, deserialized from the bundled portfolio JSON.

use serde::{Deserialize, Serialize};

/// Rendered in place of the first name while the portfolio is still a template.
pub const TEMPLATE_OWNER: &str = "the portfolio owner";

const EMAIL_KEY: &str = "contacts.email";
const LOCATION_KEY: &str = "contacts.location";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub expertise_areas: Vec<ExpertiseArea>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub resume: Resume,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub title: String,
    #[serde(default)]
    pub about_me: Vec<String>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub socials: Vec<Social>,
}

/// A contact line; labels are either literal or keys into a label table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    pub platform: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<Skill>,
    #[serde(default)]
    pub soft: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    pub icon: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertiseArea {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub avatar: String,
    pub name: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub timeframe: String,
    pub degree: String,
    pub institution: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub timeframe: String,
    pub position: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub category: String,
    pub title: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Identity data used to fill answer templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonContext {
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub location: Option<String>,
}

impl PersonContext {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: None,
            location: None,
        }
    }

    /// True while the name is still an unfilled `[PLACEHOLDER]`.
    pub fn is_template(&self) -> bool {
        self.name.contains('[')
    }

    /// First word of the name, or [`TEMPLATE_OWNER`] in template mode.
    pub fn first_name(&self) -> &str {
        if self.is_template() {
            return TEMPLATE_OWNER;
        }
        self.name.split_whitespace().next().unwrap_or(TEMPLATE_OWNER)
    }
}

impl From<&PersonalInfo> for PersonContext {
    fn from(info: &PersonalInfo) -> Self {
        let contact_value = |key: &str| {
            info.contacts
                .iter()
                .find(|contact| contact.title_key.as_deref() == Some(key))
                .and_then(|contact| contact.value.clone())
        };

        Self {
            name: info.name.clone(),
            title: info.title.clone(),
            email: contact_value(EMAIL_KEY),
            location: contact_value(LOCATION_KEY),
        }
    }
}
