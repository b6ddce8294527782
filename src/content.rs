//! Static page copy. Every field can be replaced from the config file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub tagline: Vec<String>,
    pub background: Vec<String>,
    pub skills: Vec<String>,
    pub footer: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alexandros Chariton".to_string(),
            greeting: "Hi friend!".to_string(),
            tagline: vec![
                "I'm a full-stack developer who speaks fluent code and dreams in algorithms."
                    .to_string(),
                "Building the future, one commit at a time.".to_string(),
            ],
            background: vec![
                "Passionate developer with 5+ years of experience building scalable \
                 applications and machine learning solutions. I love exploring the \
                 intersection of AI and traditional software development."
                    .to_string(),
                "When I'm not coding, you can find me contributing to open source projects, \
                 writing technical blog posts, or experimenting with the latest ML frameworks."
                    .to_string(),
            ],
            skills: [
                "JavaScript/TypeScript",
                "Python",
                "React",
                "Node.js",
                "Machine Learning",
                "Docker",
                "AWS",
                "PostgreSQL",
                "TensorFlow",
                "PyTorch",
                "Git",
                "Linux",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            footer: "\u{a9} 2024 Alexandros Chariton. Built with \u{2764} and lots of \u{2615}"
                .to_string(),
        }
    }
}

/// A hand-picked project card, shown ahead of the fetched repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticProject {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stars: Option<u32>,
    #[serde(default)]
    pub forks: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
}

pub fn default_projects() -> Vec<StaticProject> {
    vec![
        StaticProject {
            name: "ai-code-reviewer".to_string(),
            description: "Automated code review using LLMs".to_string(),
            language: Some("TypeScript".to_string()),
            stars: Some(142),
            forks: Some(23),
            url: None,
        },
        StaticProject {
            name: "data-pipeline-optimizer".to_string(),
            description: "ML pipeline optimization toolkit".to_string(),
            language: Some("Python".to_string()),
            stars: Some(89),
            forks: Some(16),
            url: None,
        },
        StaticProject {
            name: "neural-network-viz".to_string(),
            description: "Interactive neural network visualizer".to_string(),
            language: Some("JavaScript".to_string()),
            stars: Some(267),
            forks: Some(45),
            url: None,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

pub fn default_contact(github_user: &str) -> Vec<ContactLink> {
    vec![
        ContactLink {
            label: "GitHub".to_string(),
            url: format!("https://github.com/{github_user}"),
        },
        ContactLink {
            label: "Email Me".to_string(),
            url: format!("mailto:{github_user}@users.noreply.github.com"),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assistant {
    #[serde(default = "enabled")]
    pub enabled: bool,
    pub title: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub url: String,
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Talk to My AI Assistant".to_string(),
            description: "Get instant help and insights about my work, projects, and expertise."
                .to_string(),
            capabilities: vec![
                "Questions about my projects and experience".to_string(),
                "Technical discussions and advice".to_string(),
                "Collaboration opportunities".to_string(),
                "General programming questions".to_string(),
            ],
            url: "https://chat.openai.com/g/g-your-custom-gpt-id".to_string(),
        }
    }
}

fn enabled() -> bool {
    true
}
