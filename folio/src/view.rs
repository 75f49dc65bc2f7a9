use shared_http::api::{Resume, UserInfo};

use crate::format::DateStyle;

/// Header text when no user is known or the cached name is empty.
pub const FALLBACK_NAME: &str = "User";

/// What the saved-resumes section shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResumeView<'a> {
    Loading,
    Grid(&'a [Resume]),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Picture(String),
    Placeholder,
}

/// Profile header content. Always renderable, with or without a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub display_name: String,
    pub email: String,
    pub avatar: Avatar,
}

impl ProfileSummary {
    pub fn from_user(user: Option<&UserInfo>) -> Self {
        let display_name = user
            .map(|u| u.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME)
            .to_string();

        let avatar = match user.and_then(|u| u.picture.as_deref()) {
            Some(url) if !url.trim().is_empty() => Avatar::Picture(url.to_string()),
            _ => Avatar::Placeholder,
        };

        Self {
            display_name,
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            avatar,
        }
    }
}

/// One card in the saved-resumes grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeCard {
    pub key: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub saved_on: String,
}

impl ResumeCard {
    pub fn new(resume: &Resume, style: DateStyle) -> Self {
        Self {
            key: resume.id.clone(),
            title: resume.name.clone(),
            email: resume.email.clone(),
            phone: resume.phone.clone(),
            location: resume.location.clone(),
            summary: resume.summary.clone(),
            skills: resume.skills.clone(),
            saved_on: style.format_timestamp(&resume.saved_at),
        }
    }

    /// Cards for a grid, in list order.
    pub fn for_grid(resumes: &[Resume], style: DateStyle) -> Vec<Self> {
        resumes.iter().map(|r| Self::new(r, style)).collect()
    }
}
