//! Built-in seed data and presentation defaults.
//!
//! A fresh session renders this example document immediately, before any
//! stored data has been loaded; the persistence adapter also falls back to
//! it when storage is empty or unreadable, and merges partially stored
//! documents over it so every field is always present.

use once_cell::sync::Lazy;

use crate::model::{
    Education, Experience, PersonalInfo, Project, ResumeDocument, Settings, SkillGroup,
};

/// Default accent color (the first entry of [`PRESET_ACCENTS`]).
pub const DEFAULT_ACCENT: &str = "#2563eb";

/// Preset accent palette offered as a convenience; arbitrary hex values
/// are accepted as well.
pub const PRESET_ACCENTS: [&str; 8] = [
    "#2563eb", "#dc2626", "#059669", "#7c3aed", "#d97706", "#0891b2", "#be185d", "#4b5563",
];

static SEED: Lazy<ResumeDocument> = Lazy::new(build_seed);

/// The built-in example document shown on first run.
pub fn seed_document() -> ResumeDocument {
    SEED.clone()
}

/// Default presentation settings: executive template, blue accent.
pub fn default_settings() -> Settings {
    Settings::default()
}

fn build_seed() -> ResumeDocument {
    ResumeDocument {
        personal_info: PersonalInfo {
            full_name: "Jordan Mitchell".to_string(),
            title: "Senior Software Engineer".to_string(),
            email: "jordan@mitchell.dev".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            location: "San Francisco, CA".to_string(),
            website: "mitchell.dev".to_string(),
            summary: "Experienced software engineer with 8+ years building scalable web \
                      applications and distributed systems. Passionate about developer \
                      experience, performance optimization, and mentoring engineering teams."
                .to_string(),
        },
        experience: vec![
            Experience {
                id: "exp-1".to_string(),
                company: "Vercel".to_string(),
                position: "Senior Software Engineer".to_string(),
                start_date: "2022-03".to_string(),
                end_date: String::new(),
                current: true,
                description: "Leading frontend infrastructure initiatives and contributing to \
                              the Next.js framework."
                    .to_string(),
                highlights: vec![
                    "Architected a new incremental build system reducing deploy times by 60%"
                        .to_string(),
                    "Led migration of internal tools to Next.js App Router, improving DX \
                     across 12 teams"
                        .to_string(),
                    "Mentored 4 junior engineers through structured growth programs".to_string(),
                ],
            },
            Experience {
                id: "exp-2".to_string(),
                company: "Stripe".to_string(),
                position: "Software Engineer".to_string(),
                start_date: "2019-06".to_string(),
                end_date: "2022-02".to_string(),
                current: false,
                description: "Built and maintained payment processing infrastructure serving \
                              millions of transactions."
                    .to_string(),
                highlights: vec![
                    "Designed real-time fraud detection pipeline processing 10K+ events/second"
                        .to_string(),
                    "Reduced API latency by 35% through strategic caching and query optimization"
                        .to_string(),
                    "Shipped Stripe Terminal SDK used by 50K+ merchants globally".to_string(),
                ],
            },
        ],
        education: vec![
            Education {
                id: "edu-1".to_string(),
                institution: "Stanford University".to_string(),
                degree: "M.S.".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2017".to_string(),
                end_date: "2019".to_string(),
                gpa: "3.9".to_string(),
            },
            Education {
                id: "edu-2".to_string(),
                institution: "UC Berkeley".to_string(),
                degree: "B.S.".to_string(),
                field: "Electrical Engineering & Computer Science".to_string(),
                start_date: "2013".to_string(),
                end_date: "2017".to_string(),
                gpa: "3.7".to_string(),
            },
        ],
        skills: vec![
            SkillGroup {
                id: "sk-1".to_string(),
                category: "Languages".to_string(),
                items: ["TypeScript", "Python", "Rust", "Go", "SQL"]
                    .map(String::from)
                    .to_vec(),
            },
            SkillGroup {
                id: "sk-2".to_string(),
                category: "Frameworks".to_string(),
                items: ["React", "Next.js", "Node.js", "FastAPI", "TailwindCSS"]
                    .map(String::from)
                    .to_vec(),
            },
            SkillGroup {
                id: "sk-3".to_string(),
                category: "Infrastructure".to_string(),
                items: ["AWS", "Docker", "Kubernetes", "Terraform", "CI/CD"]
                    .map(String::from)
                    .to_vec(),
            },
        ],
        projects: vec![Project {
            id: "proj-1".to_string(),
            name: "DevMetrics".to_string(),
            description: "Open-source developer productivity dashboard with GitHub and Linear \
                          integrations."
                .to_string(),
            url: "github.com/jmitchell/devmetrics".to_string(),
            highlights: vec![
                "2.5K+ GitHub stars, featured in JavaScript Weekly".to_string(),
                "Built with Next.js, tRPC, and Drizzle ORM".to_string(),
            ],
        }],
        profile_image: String::new(),
        show_profile_image: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemplateName;

    #[test]
    fn test_seed_shape() {
        let doc = seed_document();
        assert_eq!(doc.personal_info.full_name, "Jordan Mitchell");
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.education.len(), 2);
        assert_eq!(doc.skills.len(), 3);
        assert_eq!(doc.projects.len(), 1);
        assert!(doc.profile_image.is_empty());
        assert!(!doc.show_profile_image);
    }

    #[test]
    fn test_seed_current_entry_has_no_end_date() {
        let doc = seed_document();
        let current = &doc.experience[0];
        assert!(current.current);
        assert!(current.end_date.is_empty());
    }

    #[test]
    fn test_default_settings() {
        let settings = default_settings();
        assert_eq!(settings.template, TemplateName::Executive);
        assert_eq!(settings.accent_color, DEFAULT_ACCENT);
        assert_eq!(PRESET_ACCENTS[0], DEFAULT_ACCENT);
    }
}
