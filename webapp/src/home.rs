use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::{GetContentReq, PersonalInfo, PortfolioContent, get_content};

use crate::{
    Route,
    common::analytics::track,
    components::{
        contact::ContactFormBox, experience::ExperienceTimeline, projects::ProjectGrid,
        reveal::use_reveal, sections::use_section_highlighter, skills::SkillGrid,
    },
};

#[derive(Clone, PartialEq, Props)]
struct ExternalLinkProps {
    href: String,
    #[props(into)]
    label: String,
}

#[component]
fn ExternalLink(props: ExternalLinkProps) -> Element {
    let href = props.href;
    let label = props.label;

    rsx! {
        a {
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            onclick: {
                let href = href.clone();
                let label = label.clone();
                move |_| track(|a| a.track_external_link(&href, Some(&label)))
            },
            "{label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct InfoProps {
    info: PersonalInfo,
}

#[component]
fn Hero(props: InfoProps) -> Element {
    let info = props.info;
    let name = info.name.clone().unwrap_or_else(|| String::from("Welcome"));
    let title = info.title.clone().unwrap_or_default();

    rsx! {
        section { id: "home", class: "page-section hero",
            div { class: "container reveal", "data-reveal": "hero",
                h1 { class: "hero-title", "{name}" }
                p { class: "hero-subtitle", "{title}" }
                div { class: "hero-actions",
                    a {
                        class: "btn btn-primary",
                        href: "#projects",
                        onclick: move |_| track(|a| a.track_button_click("view_projects", Some("View Projects"))),
                        "View Projects"
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "#contact",
                        onclick: move |_| track(|a| a.track_button_click("contact_me", Some("Contact Me"))),
                        "Contact Me"
                    }
                    Link {
                        class: "btn btn-secondary",
                        to: Route::ResumePage {},
                        onclick: move |_| track(|a| a.track_button_click("resume", Some("Resume"))),
                        "Resume"
                    }
                }
            }
        }
    }
}

#[component]
fn About(props: InfoProps) -> Element {
    let info = props.info;
    let summary = info.summary.clone().unwrap_or_default();

    rsx! {
        section { id: "about", class: "page-section",
            div { class: "container reveal", "data-reveal": "about",
                h2 { class: "section-title", "About" }
                div { class: "about-grid",
                    p { "{summary}" }
                    ul { class: "contact-list",
                        if let Some(location) = &info.location {
                            li { "{location}" }
                        }
                        if let Some(email) = &info.email {
                            li {
                                a { href: "mailto:{email}", "{email}" }
                            }
                        }
                        if let Some(github) = &info.github {
                            li {
                                ExternalLink { href: github.clone(), label: "GitHub" }
                            }
                        }
                        if let Some(linkedin) = &info.linkedin {
                            li {
                                ExternalLink { href: linkedin.clone(), label: "LinkedIn" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ContentProps {
    content: PortfolioContent,
}

#[component]
fn Sections(props: ContentProps) -> Element {
    let content = props.content;

    rsx! {
        Hero { info: content.personal_info.clone() }
        About { info: content.personal_info.clone() }

        section { id: "skills", class: "page-section",
            div { class: "container",
                h2 { class: "section-title", "Skills" }
                SkillGrid { skills: content.skills.clone() }
            }
        }

        section { id: "experience", class: "page-section",
            div { class: "container",
                h2 { class: "section-title", "Experience" }
                ExperienceTimeline { experiences: content.experiences.clone() }
            }
        }

        section { id: "projects", class: "page-section",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                ProjectGrid { projects: content.projects.clone() }
            }
        }

        section { id: "contact", class: "page-section",
            div { class: "container",
                h2 { class: "section-title", "Contact" }
                p { "Have a question or want to work together? Send me a message." }
                ContactFormBox {}
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let content_future = use_resource(move || async move { get_content(&GetContentReq {}).await });

    // sections and reveal targets exist once the content has rendered
    use_section_highlighter(move || matches!(&*content_future.read(), Some(Ok(_))));
    use_reveal(move || matches!(&*content_future.read(), Some(Ok(_))));

    match &*content_future.read() {
        Some(Ok(resp)) => rsx! {
            Sections { content: resp.content.clone() }
        },
        Some(Err(err)) => rsx! {
            div { class: "container page-section",
                h2 { class: "section-title", "Something went wrong" }
                p { "The portfolio could not be loaded: {err}" }
            }
        },
        None => rsx! {
            div { class: "container page-section",
                p { "Loading..." }
            }
        },
    }
}
