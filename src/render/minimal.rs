//! Minimal template: plain left-aligned header, dot-separated contact
//! line, letterspaced accent section titles, square accent bullets.
//! No profile image by design.

use super::executive::degree_line;
use super::format::{contact_items, date_range, format_date};
use super::html::{div, esc};
use crate::model::ResumeDocument;

pub(super) fn render(doc: &ResumeDocument, accent: &str) -> String {
    let info = &doc.personal_info;
    let mut out = String::new();

    out.push_str(&div(
        "font-size:26px;font-weight:500;color:#1a1a1a;letter-spacing:-0.5px",
        &esc(&info.full_name),
    ));

    if !info.title.is_empty() {
        out.push_str(&div(
            "font-size:12px;color:#4a4a4a;margin-top:2px;font-weight:400",
            &esc(&info.title),
        ));
    }

    let contacts = contact_items(info);
    if !contacts.is_empty() {
        let line = contacts
            .iter()
            .map(|c| esc(c))
            .collect::<Vec<_>>()
            .join("&nbsp;&nbsp;·&nbsp;&nbsp;");
        out.push_str(&div("font-size:10px;color:#888;margin-top:8px", &line));
    }

    if !info.summary.is_empty() {
        out.push_str(&div(
            "font-size:11px;color:#4a4a4a;line-height:1.65;margin-top:28px",
            &esc(&info.summary),
        ));
    }

    if !doc.experience.is_empty() {
        let mut section = title("Experience", accent);
        for exp in &doc.experience {
            let mut entry = div(
                "display:flex;justify-content:space-between;align-items:baseline",
                &(div("font-weight:600;font-size:13px", &esc(&exp.position))
                    + &div(
                        "font-size:10px;color:#888",
                        &esc(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                    )),
            );
            entry.push_str(&div(
                "font-size:11px;color:#4a4a4a;margin-bottom:4px",
                &esc(&exp.company),
            ));
            if !exp.description.is_empty() {
                entry.push_str(&div(
                    "font-size:11px;color:#4a4a4a;margin-bottom:4px",
                    &esc(&exp.description),
                ));
            }
            entry.push_str(&bullet_lines(&exp.highlights, accent));
            section.push_str(&div("margin-bottom:18px", &entry));
        }
        out.push_str(&section_block(&section));
    }

    if !doc.education.is_empty() {
        let mut section = title("Education", accent);
        for edu in &doc.education {
            let mut entry = div(
                "display:flex;justify-content:space-between;align-items:baseline",
                &(div("font-weight:600;font-size:13px", &esc(&edu.institution))
                    + &div(
                        "font-size:10px;color:#888",
                        &format!(
                            "{} – {}",
                            esc(&format_date(&edu.start_date)),
                            esc(&format_date(&edu.end_date))
                        ),
                    )),
            );
            entry.push_str(&div(
                "font-size:11px;color:#4a4a4a",
                &degree_line(&edu.degree, &edu.field, &edu.gpa),
            ));
            section.push_str(&div("margin-bottom:12px", &entry));
        }
        out.push_str(&section_block(&section));
    }

    if !doc.skills.is_empty() {
        let mut section = title("Skills", accent);
        for group in &doc.skills {
            let items = group
                .items
                .iter()
                .map(|i| esc(i))
                .collect::<Vec<_>>()
                .join(", ");
            section.push_str(&div(
                "margin-bottom:6px",
                &format!(
                    "<span style=\"font-weight:600;font-size:11px\">{}: </span>\
                     <span style=\"font-size:11px;color:#4a4a4a\">{}</span>",
                    esc(&group.category),
                    items
                ),
            ));
        }
        out.push_str(&section_block(&section));
    }

    if !doc.projects.is_empty() {
        let mut section = title("Projects", accent);
        for proj in &doc.projects {
            let mut name = esc(&proj.name);
            if !proj.url.is_empty() {
                name.push_str(&format!(
                    "<span style=\"font-weight:400;font-size:10px;color:#888;margin-left:8px\">{}</span>",
                    esc(&proj.url)
                ));
            }
            let mut entry = div("font-weight:600;font-size:12px", &name);
            if !proj.description.is_empty() {
                entry.push_str(&div(
                    "font-size:11px;color:#4a4a4a;margin-top:2px",
                    &esc(&proj.description),
                ));
            }
            entry.push_str(&bullet_lines(&proj.highlights, accent));
            section.push_str(&div("margin-bottom:14px", &entry));
        }
        out.push_str(&section_block(&section));
    }

    div(
        "width:816px;min-height:1056px;background:#ffffff;color:#1a1a1a;\
         font-family:'DM Sans',sans-serif;font-size:12px;line-height:1.55;\
         padding:56px;box-sizing:border-box",
        &out,
    )
}

fn title(label: &str, accent: &str) -> String {
    div(
        &format!(
            "font-size:11px;font-weight:600;text-transform:uppercase;\
             letter-spacing:3px;color:{};margin-bottom:14px",
            accent
        ),
        label,
    )
}

fn section_block(inner: &str) -> String {
    format!("<section style=\"margin-top:32px\">{}</section>", inner)
}

/// Highlight lines with the template's square accent bullets instead of a
/// native list.
fn bullet_lines(highlights: &[String], accent: &str) -> String {
    if highlights.is_empty() {
        return String::new();
    }
    let lines: String = highlights
        .iter()
        .map(|h| {
            div(
                "display:flex;align-items:flex-start;margin-bottom:3px;\
                 font-size:11px;color:#4a4a4a",
                &format!(
                    "<span style=\"width:5px;height:5px;background:{};display:inline-block;\
                     margin-right:8px;flex-shrink:0;margin-top:6px\"></span><span>{}</span>",
                    accent,
                    esc(h)
                ),
            )
        })
        .collect();
    div("margin-top:4px", &lines)
}
