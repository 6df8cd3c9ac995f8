use dioxus::prelude::*;

use api::SkillCategory;
use common::resume::default_skills;

#[derive(Clone, PartialEq, Props)]
pub struct SkillGridProps {
    skills: Option<Vec<SkillCategory>>,
}

// content without a skills list falls back to the same defaults the resume uses
#[component]
pub fn SkillGrid(props: SkillGridProps) -> Element {
    let skills = props.skills.unwrap_or_else(default_skills);

    rsx! {
        div { class: "skills-grid", "data-reveal": "skills",
            for category in skills.iter() {
                div {
                    key: "{category.title}",
                    class: "card reveal slide-up reveal-item",
                    h3 { "{category.title}" }
                    div { class: "skill-items",
                        for item in category.items.iter() {
                            span { class: "tag", "{item}" }
                        }
                    }
                }
            }
        }
    }
}
