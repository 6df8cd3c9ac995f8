use dioxus::prelude::*;

use api::Experience;

#[derive(Clone, PartialEq, Props)]
pub struct ExperienceTimelineProps {
    experiences: Vec<Experience>,
}

// tabbed timeline: one tab per position, the selected one shown in full
#[component]
pub fn ExperienceTimeline(props: ExperienceTimelineProps) -> Element {
    let experiences = props.experiences;
    let mut selected = use_signal(|| 0usize);

    if experiences.is_empty() {
        return rsx! {
            p { class: "timeline-empty", "No experience listed yet." }
        };
    }

    let current = selected().min(experiences.len() - 1);
    let shown = experiences[current].clone();

    rsx! {
        div { class: "timeline", "data-reveal": "experience",
            div { class: "timeline-tabs", role: "tablist", aria_label: "Positions",
                for (idx , exp) in experiences.iter().enumerate() {
                    button {
                        key: "{idx}",
                        id: "experience-tab-{idx}",
                        class: if idx == current { "timeline-tab active" } else { "timeline-tab" },
                        r#type: "button",
                        role: "tab",
                        aria_selected: "{idx == current}",
                        aria_controls: "experience-panel",
                        onclick: move |_| selected.set(idx),
                        "{exp.company}"
                    }
                }
            }

            div {
                id: "experience-panel",
                class: "timeline-panel reveal slide-up reveal-item",
                role: "tabpanel",
                aria_labelledby: "experience-tab-{current}",
                h3 { "{shown.title} @ {shown.company}" }
                p { class: "timeline-period", "{shown.period}" }
                if let Some(description) = &shown.description {
                    p { "{description}" }
                }
                if !shown.projects.is_empty() {
                    ul {
                        for project in shown.projects.iter() {
                            li {
                                strong { "{project.title}: " }
                                "{project.description}"
                            }
                        }
                    }
                }
            }
        }
    }
}
