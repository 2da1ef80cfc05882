//! Contract checks that hold across all four templates, regardless of
//! their individual layouts.

use resumepad::defaults::seed_document;
use resumepad::model::{ResumeDocument, TemplateName};
use resumepad::render::{render, PRINT_AREA_ID};

fn render_all(doc: &ResumeDocument) -> Vec<(TemplateName, String)> {
    TemplateName::ALL
        .iter()
        .map(|&t| (t, render(doc, t, "#2563eb").html))
        .collect()
}

#[test]
fn test_every_template_wraps_output_in_the_print_area_root() {
    for (template, html) in render_all(&seed_document()) {
        assert!(
            html.starts_with(&format!("<div id=\"{}\"", PRINT_AREA_ID)),
            "{:?} missing print area root",
            template
        );
        assert!(html.ends_with("</div>"), "{:?} not closed", template);
    }
}

#[test]
fn test_current_role_shows_present_in_every_template() {
    let doc = seed_document();
    assert!(doc.experience[0].current);

    for (template, html) in render_all(&doc) {
        assert!(
            html.contains("Present"),
            "{:?} does not show the ongoing role",
            template
        );
    }
}

#[test]
fn test_empty_sections_are_omitted_entirely() {
    let mut doc = seed_document();
    doc.projects.clear();
    doc.skills.clear();

    for (template, html) in render_all(&doc) {
        assert!(
            !html.contains("Projects"),
            "{:?} renders a Projects header with no projects",
            template
        );
        assert!(
            !html.contains("Skills"),
            "{:?} renders a Skills header with no skills",
            template
        );
    }
}

#[test]
fn test_blank_entry_still_renders_its_section() {
    let mut doc = seed_document();
    doc.projects.truncate(1);
    let proj = &mut doc.projects[0];
    proj.name.clear();
    proj.description.clear();
    proj.url.clear();
    proj.highlights.clear();

    // A just-added blank entry must keep its section visible so the user
    // sees where their input will land.
    for (template, html) in render_all(&doc) {
        assert!(
            html.contains("Projects"),
            "{:?} hides the section for a blank entry",
            template
        );
    }
}

#[test]
fn test_profile_image_requires_both_payload_and_toggle() {
    let payload = "data:image/png;base64,QUJD";
    let image_templates = [TemplateName::Modern, TemplateName::Bold];

    let mut doc = seed_document();
    doc.profile_image = payload.to_string();
    doc.show_profile_image = false;
    for &t in &image_templates {
        assert!(!render(&doc, t, "#2563eb").html.contains(payload));
    }

    doc.show_profile_image = true;
    doc.profile_image.clear();
    for &t in &image_templates {
        assert!(!render(&doc, t, "#2563eb").html.contains("<img"));
    }

    doc.profile_image = payload.to_string();
    for &t in &image_templates {
        assert!(render(&doc, t, "#2563eb").html.contains(payload));
    }
}

#[test]
fn test_user_content_is_escaped_in_every_template() {
    let mut doc = seed_document();
    doc.personal_info.full_name = "<script>alert(1)</script>".to_string();
    doc.experience[0].highlights[0] = "a < b & \"c\"".to_string();

    for (template, html) in render_all(&doc) {
        assert!(
            !html.contains("<script>"),
            "{:?} fails to escape markup in user content",
            template
        );
        assert!(html.contains("&lt;script&gt;"), "{:?}", template);
    }
}

#[test]
fn test_rendering_is_deterministic_across_calls() {
    let doc = seed_document();
    for &t in TemplateName::ALL.iter() {
        assert_eq!(render(&doc, t, "#7c3aed"), render(&doc, t, "#7c3aed"));
    }
}

#[test]
fn test_accent_color_flows_into_every_template() {
    let doc = seed_document();
    for &t in TemplateName::ALL.iter() {
        assert!(render(&doc, t, "#ff5500").html.contains("#ff5500"));
    }
}
