//! Bold template: accent top bar, serif display header with an optional
//! square profile image, two-column body with pill date badges and skill
//! chips.

use super::format::{contact_items, date_range, format_date, hex_to_rgba};
use super::html::{div, esc, ul};
use crate::model::ResumeDocument;

const HIGHLIGHTS: &str = "margin:4px 0 0 0;padding-left:16px;font-size:11px;color:#4a4a4a";
const SERIF: &str = "font-family:'Playfair Display',serif";

pub(super) fn render(doc: &ResumeDocument, accent: &str) -> String {
    let mut out = div(&format!("height:8px;background:{}", accent), "");
    out.push_str(&header_band(doc, accent));
    out.push_str(&div(
        "display:flex;padding:28px 48px 48px;gap:36px;box-sizing:border-box",
        &(left_column(doc, accent) + &right_column(doc, accent)),
    ));

    div(
        "width:816px;min-height:1056px;background:#ffffff;color:#1a1a1a;\
         font-family:'DM Sans',sans-serif;font-size:12px;line-height:1.5;\
         box-sizing:border-box",
        &out,
    )
}

fn header_band(doc: &ResumeDocument, accent: &str) -> String {
    let info = &doc.personal_info;
    let mut band = String::new();

    if doc.show_profile_image && !doc.profile_image.is_empty() {
        band.push_str(&div(
            &format!(
                "width:80px;height:80px;border-radius:8px;overflow:hidden;\
                 flex-shrink:0;border:2px solid {}",
                accent
            ),
            &format!(
                "<img src=\"{}\" alt=\"\" style=\"width:100%;height:100%;object-fit:cover\">",
                esc(&doc.profile_image)
            ),
        ));
    }

    let mut text = div(
        &format!("{};font-size:32px;font-weight:700;color:#1a1a1a;line-height:1.1", SERIF),
        &esc(&info.full_name),
    );
    if !info.title.is_empty() {
        text.push_str(&div(
            &format!("font-size:13px;font-weight:500;color:{};margin-top:4px", accent),
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
        text.push_str(&div("font-size:10px;color:#888;margin-top:8px", &line));
    }
    if !info.summary.is_empty() {
        text.push_str(&div(
            "font-size:11px;color:#4a4a4a;line-height:1.65;margin-top:16px;max-width:620px",
            &esc(&info.summary),
        ));
    }
    band.push_str(&div("flex:1;min-width:0", &text));

    div(
        "padding:36px 48px 0;display:flex;gap:24px;align-items:flex-start",
        &band,
    )
}

fn left_column(doc: &ResumeDocument, accent: &str) -> String {
    let mut out = String::new();

    if !doc.experience.is_empty() {
        let mut section = header("Experience", accent);
        for exp in &doc.experience {
            let mut entry = div(
                "display:flex;justify-content:space-between;align-items:center;margin-bottom:4px",
                &(div(
                    &format!("{};font-weight:700;font-size:14px;color:#1a1a1a", SERIF),
                    &esc(&exp.position),
                ) + &format!(
                    "<span style=\"font-size:9px;font-weight:600;color:#fff;background:{};\
                     padding:2px 8px;border-radius:3px;white-space:nowrap\">{}</span>",
                    accent,
                    esc(&date_range(&exp.start_date, &exp.end_date, exp.current))
                )),
            );
            entry.push_str(&div(
                "font-size:11px;font-weight:600;color:#4a4a4a;margin-bottom:4px",
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
            section.push_str(&div("margin-bottom:20px", &entry));
        }
        out.push_str(&format!("<section>{}</section>", section));
    }

    div("flex:1 1 60%", &out)
}

fn right_column(doc: &ResumeDocument, accent: &str) -> String {
    let mut out = String::new();

    if !doc.skills.is_empty() {
        let mut section = header("Skills", accent);
        for group in &doc.skills {
            let chips: String = group
                .items
                .iter()
                .map(|item| {
                    format!(
                        "<span style=\"font-size:9px;padding:2px 8px;border-radius:3px;\
                         background:{};color:#1a1a1a\">{}</span>",
                        hex_to_rgba(accent, 0.1),
                        esc(item)
                    )
                })
                .collect();
            section.push_str(&div(
                "margin-bottom:10px",
                &(div(
                    "font-size:11px;font-weight:700;color:#1a1a1a;margin-bottom:4px",
                    &esc(&group.category),
                ) + &div("display:flex;flex-wrap:wrap;gap:4px", &chips)),
            ));
        }
        out.push_str(&section_block(&section));
    }

    if !doc.education.is_empty() {
        let mut section = header("Education", accent);
        for edu in &doc.education {
            let mut dates = format!(
                "{} – {}",
                esc(&format_date(&edu.start_date)),
                esc(&format_date(&edu.end_date))
            );
            if !edu.gpa.is_empty() {
                dates.push_str(&format!(" · GPA: {}", esc(&edu.gpa)));
            }
            let mut degree = esc(&edu.degree);
            if !edu.field.is_empty() {
                degree.push_str(&format!(" in {}", esc(&edu.field)));
            }
            section.push_str(&div(
                "margin-bottom:12px",
                &(div(&format!("{};font-weight:700;font-size:12px;color:#1a1a1a", SERIF), &degree)
                    + &div("font-size:10px;color:#4a4a4a", &esc(&edu.institution))
                    + &div("font-size:9px;color:#888", &dates)),
            ));
        }
        out.push_str(&section_block(&section));
    }

    if !doc.projects.is_empty() {
        let mut section = header("Projects", accent);
        for proj in &doc.projects {
            let mut entry = div(
                &format!("{};font-weight:700;font-size:12px;color:#1a1a1a", SERIF),
                &esc(&proj.name),
            );
            if !proj.url.is_empty() {
                entry.push_str(&div(
                    &format!("font-size:9px;color:{};margin-bottom:2px", accent),
                    &esc(&proj.url),
                ));
            }
            if !proj.description.is_empty() {
                entry.push_str(&div(
                    "font-size:11px;color:#4a4a4a;margin-top:2px",
                    &esc(&proj.description),
                ));
            }
            if !proj.highlights.is_empty() {
                entry.push_str(&ul(
                    "margin:4px 0 0 0;padding-left:14px;font-size:10px;color:#4a4a4a",
                    &proj.highlights,
                ));
            }
            section.push_str(&div("margin-bottom:14px", &entry));
        }
        out.push_str(&section_block(&section));
    }

    div("flex:1 1 40%;min-width:0", &out)
}

fn header(label: &str, accent: &str) -> String {
    div(
        &format!(
            "{};font-size:15px;font-weight:700;color:#1a1a1a;\
             padding-left:12px;border-left:3px solid {};margin-bottom:14px",
            SERIF, accent
        ),
        label,
    )
}

fn section_block(inner: &str) -> String {
    format!("<section style=\"margin-bottom:24px\">{}</section>", inner)
}
