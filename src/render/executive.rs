//! Executive template: centered serif header, pipe-separated contact
//! line, ruled uppercase section headers. No profile image by design.

use super::format::{contact_items, date_range, format_date};
use super::html::{div, esc, ul};
use crate::model::ResumeDocument;

const HIGHLIGHTS: &str = "margin:4px 0 0 0;padding-left:16px;font-size:11px;color:#4a4a4a";

pub(super) fn render(doc: &ResumeDocument, accent: &str) -> String {
    let info = &doc.personal_info;
    let mut out = String::new();

    // Name
    out.push_str(&div(
        "text-align:center;font-family:'Cormorant Garamond',serif;font-size:32px;\
         font-weight:600;letter-spacing:1px;color:#1a1a1a",
        &esc(&info.full_name),
    ));

    if !info.title.is_empty() {
        out.push_str(&div(
            "text-align:center;font-size:13px;color:#4a4a4a;margin-top:4px;letter-spacing:0.5px",
            &esc(&info.title),
        ));
    }

    // Horizontal rule
    out.push_str(&div(
        &format!("height:1px;background:{};margin:16px 0;opacity:0.6", accent),
        "",
    ));

    let contacts = contact_items(info);
    if !contacts.is_empty() {
        let line = contacts
            .iter()
            .map(|c| esc(c))
            .collect::<Vec<_>>()
            .join("<span style=\"margin:0 10px;color:#ccc\">|</span>");
        out.push_str(&div(
            "text-align:center;font-size:10px;color:#4a4a4a;margin-bottom:24px",
            &line,
        ));
    }

    if !info.summary.is_empty() {
        out.push_str(&div(
            "font-size:11px;color:#4a4a4a;font-style:italic;line-height:1.65;\
             margin:0 auto 28px;text-align:center;max-width:600px",
            &esc(&info.summary),
        ));
    }

    if !doc.experience.is_empty() {
        let mut section = header("Experience", accent);
        for exp in &doc.experience {
            let mut entry = div(
                "display:flex;justify-content:space-between;align-items:baseline",
                &(div("font-weight:600;font-size:13px", &esc(&exp.position))
                    + &div(
                        "font-size:10px;color:#4a4a4a",
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
            if !exp.highlights.is_empty() {
                entry.push_str(&ul(HIGHLIGHTS, &exp.highlights));
            }
            section.push_str(&div("margin-bottom:16px", &entry));
        }
        out.push_str(&section_block(&section));
    }

    if !doc.education.is_empty() {
        let mut section = header("Education", accent);
        for edu in &doc.education {
            let mut entry = div(
                "display:flex;justify-content:space-between;align-items:baseline",
                &(div("font-weight:600;font-size:13px", &esc(&edu.institution))
                    + &div(
                        "font-size:10px;color:#4a4a4a",
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
        let mut section = header("Skills", accent);
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
        let mut section = header("Projects", accent);
        for proj in &doc.projects {
            let mut name = esc(&proj.name);
            if !proj.url.is_empty() {
                name.push_str(&format!(
                    "<span style=\"font-weight:400;font-size:10px;color:{};margin-left:8px\">{}</span>",
                    accent,
                    esc(&proj.url)
                ));
            }
            let mut entry = div("font-weight:600;font-size:13px", &name);
            if !proj.description.is_empty() {
                entry.push_str(&div(
                    "font-size:11px;color:#4a4a4a;margin-bottom:4px",
                    &esc(&proj.description),
                ));
            }
            if !proj.highlights.is_empty() {
                entry.push_str(&ul(HIGHLIGHTS, &proj.highlights));
            }
            section.push_str(&div("margin-bottom:12px", &entry));
        }
        out.push_str(&section_block(&section));
    }

    div(
        "width:816px;min-height:1056px;background:#ffffff;color:#1a1a1a;\
         font-family:'DM Sans',sans-serif;font-size:12px;line-height:1.5;\
         padding:60px 56px;box-sizing:border-box",
        &out,
    )
}

fn header(label: &str, accent: &str) -> String {
    div(
        &format!(
            "font-family:'Cormorant Garamond',serif;font-size:15px;font-weight:600;\
             text-transform:uppercase;letter-spacing:2px;color:#1a1a1a;\
             border-bottom:1px solid {};padding-bottom:4px;margin-bottom:14px",
            accent
        ),
        label,
    )
}

fn section_block(inner: &str) -> String {
    format!("<section style=\"margin-bottom:24px\">{}</section>", inner)
}

pub(super) fn degree_line(degree: &str, field: &str, gpa: &str) -> String {
    let mut line = esc(degree);
    if !field.is_empty() {
        line.push_str(&format!(" in {}", esc(field)));
    }
    if !gpa.is_empty() {
        line.push_str(&format!(" · GPA: {}", esc(gpa)));
    }
    line
}
