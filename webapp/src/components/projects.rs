use dioxus::prelude::*;

use api::Project;
use common::filter::{FILTER_USAGE_TYPE, Filter, ProjectFilter, count_label};

use crate::common::analytics::track;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectGridProps {
    projects: Vec<Project>,
}

#[component]
pub fn ProjectGrid(props: ProjectGridProps) -> Element {
    let projects = props.projects;
    let mut filter = use_signal({
        let projects = projects.clone();
        move || ProjectFilter::new(&projects)
    });

    let mut select = move |choice: Filter| {
        if filter.peek().is_active(&choice) {
            return;
        }
        filter.with_mut(|f| f.select(choice.clone()));
        track(|a| a.track_filter_usage(FILTER_USAGE_TYPE, choice.as_str()));
    };

    let state = filter.read().clone();
    let count = count_label(state.visible().len());
    let technologies: Vec<String> = state.technologies().map(str::to_owned).collect();

    let button_class = |choice: &Filter| {
        if state.is_active(choice) {
            "btn btn-secondary filter-btn active"
        } else {
            "btn btn-secondary filter-btn"
        }
    };

    rsx! {
        div { class: "filter-bar", role: "group", aria_label: "Filter projects by technology",
            button {
                class: button_class(&Filter::All),
                r#type: "button",
                aria_pressed: "{state.is_active(&Filter::All)}",
                onclick: move |_| select(Filter::All),
                "All"
            }
            for tech in technologies {
                button {
                    key: "{tech}",
                    class: button_class(&Filter::Tech(tech.clone())),
                    r#type: "button",
                    aria_pressed: "{state.is_active(&Filter::Tech(tech.clone()))}",
                    onclick: {
                        let tech = tech.clone();
                        move |_| select(Filter::Tech(tech.clone()))
                    },
                    "{tech}"
                }
            }
        }

        p { class: "project-count", aria_live: "polite", "{count}" }

        div { class: "projects-grid", "data-reveal": "projects",
            for (idx , project) in projects.iter().enumerate() {
                ProjectCard {
                    key: "{idx}",
                    project: project.clone(),
                    hidden: !state.is_visible(idx),
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
    hidden: bool,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        article {
            class: "card project-card reveal slide-up reveal-item",
            hidden: props.hidden,
            h3 { "{project.title}" }
            p { "{project.description}" }

            div { class: "project-techs",
                for tech in project.technologies.iter() {
                    span { class: "tag", "{tech}" }
                }
            }

            if let Some(link) = project.link.clone() {
                a {
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: {
                        let link = link.clone();
                        let title = project.title.clone();
                        move |_| track(|a| a.track_external_link(&link, Some(&title)))
                    },
                    "View project"
                }
            }
        }
    }
}
