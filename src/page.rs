//! View models and HTML rendering for the single portfolio page.

use askama::Template;

/// The one page this crate renders: hero, optional error banner, project
/// grid, empty-state message, contact section.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    /// A fetch failure, already formatted for display. When set, the error
    /// banner renders and the empty-state message is suppressed.
    pub error: Option<String>,
    pub projects: Vec<ProjectCard>,
}

impl HomePage {
    pub fn new(projects: Vec<ProjectCard>) -> Self {
        Self { error: None, projects }
    }

    /// Degraded page after a failed fetch: banner plus an empty grid.
    pub fn failed(message: String) -> Self {
        Self { error: Some(message), projects: Vec::new() }
    }
}

/// One project, flattened for display.
pub struct ProjectCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Absent when the CMS has no thumbnail attached; the template then
    /// omits the image block entirely instead of emitting a broken `<img>`.
    pub image: Option<CardImage>,
    /// External project URL; `None` hides the link button.
    pub link: Option<String>,
}

pub struct CardImage {
    pub src: String,
    pub alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> ProjectCard {
        ProjectCard {
            id: 1,
            title: title.to_string(),
            description: "A thing I made".to_string(),
            tags: vec!["Web Dev".to_string(), "UI/UX".to_string()],
            image: None,
            link: None,
        }
    }

    #[test]
    fn error_banner_renders_and_empty_state_is_suppressed() {
        let page = HomePage::failed("content store responded 500 Internal Server Error".to_string());
        let html = page.render().unwrap();
        assert!(html.contains("error-banner"));
        assert!(html.contains("500"));
        assert!(!html.contains("empty-state"));
        assert!(page.projects.is_empty());
    }

    #[test]
    fn empty_list_without_error_renders_empty_state() {
        let html = HomePage::new(Vec::new()).render().unwrap();
        assert!(html.contains("empty-state"));
        assert!(!html.contains("error-banner"));
    }

    #[test]
    fn card_without_image_omits_the_image_block() {
        let html = HomePage::new(vec![card("Demo")]).render().unwrap();
        assert!(!html.contains("<img"));
        assert!(html.contains("Demo"));
        assert!(html.contains("A thing I made"));
        assert!(html.contains("Web Dev"));
        assert!(html.contains("UI/UX"));
        assert!(!html.contains("project-link"));
    }

    #[test]
    fn card_with_image_and_link_renders_both() {
        let mut c = card("Demo");
        c.image = Some(CardImage {
            src: "http://localhost:1337/uploads/shot.png".to_string(),
            alt: "Screenshot".to_string(),
        });
        c.link = Some("https://example.com".to_string());
        let html = HomePage::new(vec![c]).render().unwrap();
        assert!(html.contains(r#"src="http://localhost:1337/uploads/shot.png""#));
        assert!(html.contains(r#"alt="Screenshot""#));
        assert!(html.contains(r#"href="https://example.com""#));
    }

    #[test]
    fn titles_are_html_escaped() {
        let mut c = card("safe");
        c.title = "<script>alert(1)</script>".to_string();
        let html = HomePage::new(vec![c]).render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
