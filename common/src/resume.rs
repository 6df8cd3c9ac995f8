use api::{Experience, PersonalInfo, PortfolioContent, SkillCategory};

// resume formatting
//
// turns the portfolio content into an ordered list of typed items.  how those items land on a
// page is the renderer's business (the webapp prints them)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentItem {
    Text(String),
    Heading(String),
    Subheading(String),
    Bullet(String),
    Space(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeSection {
    pub title: &'static str,
    pub items: Vec<ContentItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeHeader {
    pub name: Option<String>,
    pub title: String,
    // email | phone | location, empty parts skipped
    pub contact: String,
    pub links: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resume {
    pub header: ResumeHeader,
    pub sections: Vec<ResumeSection>,
}

pub const RESUME_FILE_NAME: &str = "resume.pdf";

const DEFAULT_TITLE: &str = "Software Developer";

const DEFAULT_SUMMARY: &str = "Passionate software developer with over 5 years of experience in building scalable web applications and analyzing complex systems. Specializing in full-stack development with a strong foundation in system design and architecture.";

pub fn default_skills() -> Vec<SkillCategory> {
    let category = |title: &str, items: &[&str]| SkillCategory {
        title: title.to_owned(),
        items: items.iter().map(|i| i.to_string()).collect(),
    };

    vec![
        category(
            "Frontend",
            &["React", "Vue.js", "TypeScript", "Tailwind CSS", "HTML5/CSS3"],
        ),
        category(
            "Backend",
            &["Node.js", "REST API", "C#", ".NET MVC", "PHP", "Laravel"],
        ),
        category("Database", &["PostgreSQL", "MongoDB", "Redis", "MySQL"]),
        category("DevOps & Tools", &["Docker", "Git", "CI/CD", "AWS", "Linux"]),
        category(
            "System Analysis",
            &["UML", "Requirements Analysis", "System Design", "Agile/Scrum"],
        ),
    ]
}

pub fn format_resume(content: &PortfolioContent) -> Resume {
    Resume {
        header: format_header(&content.personal_info),
        sections: vec![
            ResumeSection {
                title: "PERSONAL INFORMATION",
                items: format_personal_info(&content.personal_info),
            },
            ResumeSection {
                title: "SKILLS",
                items: format_skills(content.skills.as_deref()),
            },
            ResumeSection {
                title: "WORK EXPERIENCE",
                items: format_experience(&content.experiences),
            },
        ],
    }
}

// only a missing or empty string counts as absent, whitespace is printed as given
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn format_header(info: &PersonalInfo) -> ResumeHeader {
    let contact = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter_map(non_empty)
        .collect::<Vec<_>>()
        .join(" | ");

    let links = [&info.github, &info.linkedin]
        .into_iter()
        .filter_map(non_empty)
        .collect::<Vec<_>>();

    ResumeHeader {
        name: non_empty(&info.name).map(str::to_owned),
        title: non_empty(&info.title).unwrap_or(DEFAULT_TITLE).to_owned(),
        contact,
        links: if links.is_empty() {
            None
        } else {
            Some(links.join(" | "))
        },
    }
}

pub fn format_personal_info(info: &PersonalInfo) -> Vec<ContentItem> {
    let summary = non_empty(&info.summary).unwrap_or(DEFAULT_SUMMARY);
    vec![ContentItem::Text(summary.to_owned())]
}

pub fn format_skills(skills: Option<&[SkillCategory]>) -> Vec<ContentItem> {
    let defaults;
    let skills = match skills {
        Some(skills) => skills,
        None => {
            defaults = default_skills();
            defaults.as_slice()
        }
    };

    skills
        .iter()
        .flat_map(|category| {
            [
                ContentItem::Heading(category.title.clone()),
                ContentItem::Text(category.items.join(", ")),
                ContentItem::Space(3),
            ]
        })
        .collect()
}

pub fn format_experience(experiences: &[Experience]) -> Vec<ContentItem> {
    let mut items = Vec::new();

    for (idx, exp) in experiences.iter().enumerate() {
        items.push(ContentItem::Heading(format!("{} - {}", exp.title, exp.company)));
        items.push(ContentItem::Subheading(exp.period.clone()));
        items.push(ContentItem::Space(2));

        if let Some(description) = non_empty(&exp.description) {
            items.push(ContentItem::Text(description.to_owned()));
            items.push(ContentItem::Space(2));
        }

        for project in exp.projects.iter() {
            items.push(ContentItem::Bullet(format!(
                "{}: {}",
                project.title, project.description
            )));
        }

        // spacing between entries, not after the last one
        if idx + 1 < experiences.len() {
            items.push(ContentItem::Space(5));
        }
    }

    items
}

// plain text rendering, used for the downloadable copy and for tests
pub fn render_text(resume: &Resume) -> String {
    let mut out = String::new();

    if let Some(name) = &resume.header.name {
        out.push_str(name);
        out.push('\n');
    }
    out.push_str(&resume.header.title);
    out.push('\n');
    if !resume.header.contact.is_empty() {
        out.push_str(&resume.header.contact);
        out.push('\n');
    }
    if let Some(links) = &resume.header.links {
        out.push_str(links);
        out.push('\n');
    }

    for section in resume.sections.iter() {
        out.push('\n');
        out.push_str(section.title);
        out.push('\n');

        for item in section.items.iter() {
            match item {
                ContentItem::Text(text) | ContentItem::Heading(text) | ContentItem::Subheading(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                ContentItem::Bullet(text) => {
                    out.push_str("• ");
                    out.push_str(text);
                    out.push('\n');
                }
                ContentItem::Space(_) => {}
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use api::ExperienceProject;
    use pretty_assertions::assert_eq;

    use super::*;

    fn experience(title: &str, description: Option<&str>, projects: &[(&str, &str)]) -> Experience {
        Experience {
            title: title.to_owned(),
            company: "Acme".to_owned(),
            period: "2020 - 2023".to_owned(),
            description: description.map(str::to_owned),
            projects: projects
                .iter()
                .map(|(t, d)| ExperienceProject {
                    title: t.to_string(),
                    description: d.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn header_skips_empty_contact_parts() {
        let info = PersonalInfo {
            name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            phone: Some("".into()),
            location: Some("London".into()),
            ..PersonalInfo::default()
        };

        let header = format_header(&info);
        assert_eq!(header.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(header.title, "Software Developer");
        assert_eq!(header.contact, "ada@example.com | London");
        assert_eq!(header.links, None);
    }

    #[test]
    fn missing_summary_uses_default() {
        let items = format_personal_info(&PersonalInfo::default());
        assert_eq!(items, vec![ContentItem::Text(DEFAULT_SUMMARY.to_owned())]);
    }

    #[test]
    fn blank_summary_and_description_are_kept() {
        let info = PersonalInfo {
            summary: Some("  ".into()),
            ..PersonalInfo::default()
        };
        assert_eq!(
            format_personal_info(&info),
            vec![ContentItem::Text("  ".into())]
        );

        let items = format_experience(&[experience("Engineer", Some(" "), &[])]);
        assert_eq!(items[3], ContentItem::Text(" ".into()));
        assert_eq!(items[4], ContentItem::Space(2));
    }

    #[test]
    fn missing_skills_use_defaults() {
        let items = format_skills(None);

        assert_eq!(items.len(), default_skills().len() * 3);
        assert_eq!(items[0], ContentItem::Heading("Frontend".into()));
        assert_eq!(
            items[1],
            ContentItem::Text("React, Vue.js, TypeScript, Tailwind CSS, HTML5/CSS3".into())
        );
        assert_eq!(items[2], ContentItem::Space(3));
    }

    #[test]
    fn experience_layout() {
        let items = format_experience(&[
            experience("Engineer", Some("Built things"), &[("Engine", "analytical")]),
            experience("Lead", None, &[]),
        ]);

        assert_eq!(
            items,
            vec![
                ContentItem::Heading("Engineer - Acme".into()),
                ContentItem::Subheading("2020 - 2023".into()),
                ContentItem::Space(2),
                ContentItem::Text("Built things".into()),
                ContentItem::Space(2),
                ContentItem::Bullet("Engine: analytical".into()),
                ContentItem::Space(5),
                ContentItem::Heading("Lead - Acme".into()),
                ContentItem::Subheading("2020 - 2023".into()),
                ContentItem::Space(2),
            ]
        );
    }

    #[test]
    fn no_experience_is_empty() {
        assert!(format_experience(&[]).is_empty());
    }

    #[test]
    fn sections_in_order_and_text_rendering() {
        let content = PortfolioContent {
            personal_info: PersonalInfo {
                name: Some("Ada".into()),
                github: Some("github.com/ada".into()),
                summary: Some("Mathematician.".into()),
                ..PersonalInfo::default()
            },
            skills: Some(vec![SkillCategory {
                title: "Math".into(),
                items: vec!["Analysis".into()],
            }]),
            experiences: vec![experience("Engineer", None, &[("Notes", "first program")])],
            projects: vec![],
        };

        let resume = format_resume(&content);
        let titles: Vec<_> = resume.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["PERSONAL INFORMATION", "SKILLS", "WORK EXPERIENCE"]);

        let text = render_text(&resume);
        assert!(text.starts_with("Ada\nSoftware Developer\ngithub.com/ada\n"));
        assert!(text.contains("Mathematician."));
        assert!(text.contains("• Notes: first program"));
    }
}
