use crate::types::ComposedResume;
use crate::util;

/// Render a composed resume as Markdown. Deterministic: the same resume
/// always produces the same text.
pub fn render(resume: &ComposedResume) -> String {
    let mut lines: Vec<String> = Vec::new();
    let personal = &resume.personal;

    lines.push(format!("# {}", personal.name));
    lines.push(format!("**{}**", personal.headline));
    let contacts: Vec<String> = personal
        .contacts
        .iter()
        .map(|(channel, value)| format!("{}: {}", util::title_case(channel), value))
        .collect();
    lines.push(contacts.join(" | "));
    lines.push(String::new());

    lines.push("## Professional Summary".to_string());
    lines.push(resume.summary.clone());
    lines.push(String::new());

    lines.push("## Technical Skills".to_string());
    for section in &resume.skills {
        lines.push(format!(
            "- **{}:** {}",
            section.category,
            section.skills.join(", ")
        ));
    }
    lines.push(String::new());

    lines.push("## Work Experience".to_string());
    for block in &resume.experience {
        lines.push(format!("### {} — {}", block.title, block.company));
        lines.push(format!("*{}*", block.period));
        lines.push(String::new());
        for resp in &block.responsibilities {
            lines.push(format!("- {}", resp));
        }
        if !block.achievements.is_empty() {
            lines.push("  ".to_string());
            lines.push("_Achievements:_".to_string());
            for achievement in &block.achievements {
                lines.push(format!("  - {}", achievement));
            }
        }
        lines.push(String::new());
    }

    format!("{}\n", lines.join("\n").trim_end())
}
