//! Modern template: 30% accent-tinted sidebar (profile image, contact,
//! skills chips, education) next to a 70% main column (about, experience
//! and project cards).

use super::format::{date_range, format_date, hex_to_rgba};
use super::html::{div, esc, ul};
use crate::model::{PersonalInfo, ResumeDocument};

const HIGHLIGHTS: &str = "margin:4px 0 0 0;padding-left:16px;font-size:11px;color:#4a4a4a";

pub(super) fn render(doc: &ResumeDocument, accent: &str) -> String {
    let body = sidebar(doc, accent) + &main_column(doc, accent);
    div(
        "width:816px;min-height:1056px;background:#ffffff;color:#1a1a1a;\
         font-family:'Outfit',sans-serif;font-size:12px;line-height:1.5;\
         display:flex;box-sizing:border-box",
        &body,
    )
}

fn sidebar(doc: &ResumeDocument, accent: &str) -> String {
    let info = &doc.personal_info;
    let mut out = String::new();

    if doc.show_profile_image && !doc.profile_image.is_empty() {
        out.push_str(&div(
            &format!(
                "width:90px;height:90px;border-radius:50%;overflow:hidden;\
                 margin-bottom:16px;border:3px solid {}",
                accent
            ),
            &format!(
                "<img src=\"{}\" alt=\"\" style=\"width:100%;height:100%;object-fit:cover\">",
                esc(&doc.profile_image)
            ),
        ));
    }

    out.push_str(&div(
        "font-size:24px;font-weight:700;line-height:1.2;color:#1a1a1a;margin-bottom:4px",
        &esc(&info.full_name),
    ));

    if !info.title.is_empty() {
        out.push_str(&div(
            &format!("font-size:12px;font-weight:500;color:{};margin-bottom:24px", accent),
            &esc(&info.title),
        ));
    }

    out.push_str(&contact_block(info, accent));

    if !doc.skills.is_empty() {
        let mut block = sidebar_header("Skills", accent);
        for group in &doc.skills {
            let chips: String = group
                .items
                .iter()
                .map(|item| {
                    format!(
                        "<span style=\"font-size:9px;padding:3px 8px;border-radius:999px;\
                         background:{};color:#1a1a1a\">{}</span>",
                        hex_to_rgba(accent, 0.12),
                        esc(item)
                    )
                })
                .collect();
            block.push_str(&div(
                "margin-bottom:12px",
                &(div(
                    "font-size:11px;font-weight:600;margin-bottom:6px;color:#1a1a1a",
                    &esc(&group.category),
                ) + &div("display:flex;flex-wrap:wrap;gap:4px", &chips)),
            ));
        }
        out.push_str(&div("margin-bottom:28px", &block));
    }

    if !doc.education.is_empty() {
        let mut block = sidebar_header("Education", accent);
        for edu in &doc.education {
            let mut degree = esc(&edu.degree);
            if !edu.field.is_empty() {
                degree.push_str(&format!(" in {}", esc(&edu.field)));
            }
            let mut dates = format!(
                "{} – {}",
                esc(&format_date(&edu.start_date)),
                esc(&format_date(&edu.end_date))
            );
            if !edu.gpa.is_empty() {
                dates.push_str(&format!(" · GPA: {}", esc(&edu.gpa)));
            }
            block.push_str(&div(
                "margin-bottom:12px",
                &(div("font-size:11px;font-weight:600;color:#1a1a1a", &degree)
                    + &div("font-size:10px;color:#4a4a4a", &esc(&edu.institution))
                    + &div("font-size:9px;color:#888", &dates)),
            ));
        }
        out.push_str(&div("margin-bottom:28px", &block));
    }

    div(
        &format!(
            "width:30%;background:{};padding:48px 24px;box-sizing:border-box",
            hex_to_rgba(accent, 0.07)
        ),
        &out,
    )
}

fn contact_block(info: &PersonalInfo, accent: &str) -> String {
    let icons = ["✉", "☎", "◎", "◆"];
    let values = [&info.email, &info.phone, &info.location, &info.website];
    let rows: String = icons
        .iter()
        .zip(values)
        .filter(|(_, v)| !v.is_empty())
        .map(|(icon, value)| {
            div(
                "font-size:10px;color:#4a4a4a;margin-bottom:8px;display:flex;\
                 align-items:center;gap:8px",
                &format!(
                    "<span style=\"color:{};font-size:11px\">{}</span>\
                     <span style=\"word-break:break-all\">{}</span>",
                    accent,
                    icon,
                    esc(value)
                ),
            )
        })
        .collect();
    if rows.is_empty() {
        return String::new();
    }
    div(
        "margin-bottom:28px",
        &(sidebar_header("Contact", accent) + &rows),
    )
}

fn main_column(doc: &ResumeDocument, accent: &str) -> String {
    let info = &doc.personal_info;
    let mut out = String::new();

    if !info.summary.is_empty() {
        out.push_str(&div(
            "margin-bottom:28px",
            &(main_header("About", accent)
                + &div("font-size:11px;color:#4a4a4a;line-height:1.65", &esc(&info.summary))),
        ));
    }

    if !doc.experience.is_empty() {
        let mut block = main_header("Experience", accent);
        for exp in &doc.experience {
            let mut card = div(
                "display:flex;justify-content:space-between;align-items:baseline",
                &(div("font-weight:600;font-size:13px;color:#1a1a1a", &esc(&exp.position))
                    + &div(
                        "font-size:10px;color:#888",
                        &esc(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                    )),
            );
            card.push_str(&div(
                &format!("font-size:11px;color:{};font-weight:500;margin-bottom:6px", accent),
                &esc(&exp.company),
            ));
            if !exp.description.is_empty() {
                card.push_str(&div(
                    "font-size:11px;color:#4a4a4a;margin-bottom:4px",
                    &esc(&exp.description),
                ));
            }
            if !exp.highlights.is_empty() {
                card.push_str(&ul(HIGHLIGHTS, &exp.highlights));
            }
            block.push_str(&div(
                "margin-bottom:18px;padding:12px 14px;border-radius:6px;background:#fafafa",
                &card,
            ));
        }
        out.push_str(&div("margin-bottom:28px", &block));
    }

    if !doc.projects.is_empty() {
        let mut block = main_header("Projects", accent);
        for proj in &doc.projects {
            let mut name = esc(&proj.name);
            if !proj.url.is_empty() {
                name.push_str(&format!(
                    "<span style=\"font-weight:400;font-size:9px;color:{};margin-left:8px\">{}</span>",
                    accent,
                    esc(&proj.url)
                ));
            }
            let mut card = div("font-weight:600;font-size:12px;color:#1a1a1a", &name);
            if !proj.description.is_empty() {
                card.push_str(&div(
                    "font-size:11px;color:#4a4a4a;margin-top:4px",
                    &esc(&proj.description),
                ));
            }
            if !proj.highlights.is_empty() {
                card.push_str(&ul(HIGHLIGHTS, &proj.highlights));
            }
            block.push_str(&div(
                "margin-bottom:14px;padding:12px 14px;border-radius:6px;background:#fafafa",
                &card,
            ));
        }
        out.push_str(&div("margin-bottom:28px", &block));
    }

    div("width:70%;padding:48px 36px;box-sizing:border-box", &out)
}

fn sidebar_header(label: &str, accent: &str) -> String {
    div(
        &format!(
            "font-size:11px;font-weight:700;text-transform:uppercase;\
             letter-spacing:1.5px;color:{};margin-bottom:10px",
            accent
        ),
        label,
    )
}

fn main_header(label: &str, accent: &str) -> String {
    div(
        &format!("font-size:15px;font-weight:700;color:{};margin-bottom:12px", accent),
        label,
    )
}
