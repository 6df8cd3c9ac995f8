use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::{GetContentReq, get_content};
use common::resume::{ContentItem, RESUME_FILE_NAME, format_resume, render_text};

use crate::{
    Route,
    common::{analytics::track, dom::print_page},
};

const TEXT_FILE_NAME: &str = "resume.txt";

fn render_item(item: &ContentItem) -> Element {
    match item {
        ContentItem::Text(text) => rsx! {
            p { "{text}" }
        },
        ContentItem::Heading(text) => rsx! {
            h3 { "{text}" }
        },
        ContentItem::Subheading(text) => rsx! {
            p { class: "timeline-period", "{text}" }
        },
        ContentItem::Bullet(text) => rsx! {
            li { "{text}" }
        },
        ContentItem::Space(size) => rsx! {
            div { style: "height: {size * 2}px;" }
        },
    }
}

// printable resume built from the same content as the home page
//
// the browser's print dialog produces the pdf; a plain text copy can be downloaded directly
#[component]
pub fn ResumePage() -> Element {
    let content_future = use_resource(move || async move { get_content(&GetContentReq {}).await });

    let resume = match &*content_future.read() {
        Some(Ok(resp)) => format_resume(&resp.content),
        Some(Err(err)) => {
            return rsx! {
                div { class: "resume",
                    p { "The resume could not be loaded: {err}" }
                    Link { to: Route::Home {}, "Back to portfolio" }
                }
            };
        }
        None => {
            return rsx! {
                div { class: "resume",
                    p { "Loading..." }
                }
            };
        }
    };

    let text = render_text(&resume);
    let download = format!(
        "data:text/plain;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(&text))
    );
    let header = resume.header.clone();

    rsx! {
        article { class: "resume",
            div { class: "resume-actions hero-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        track(|a| a.track_download(RESUME_FILE_NAME, "pdf"));
                        print_page();
                    },
                    "Print / Save as PDF"
                }
                a {
                    class: "btn btn-secondary",
                    href: "{download}",
                    download: TEXT_FILE_NAME,
                    onclick: move |_| track(|a| a.track_download(TEXT_FILE_NAME, "txt")),
                    "Download as Text"
                }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Back to portfolio" }
            }

            header { class: "resume-header",
                if let Some(name) = &header.name {
                    h1 { "{name}" }
                }
                p { "{header.title}" }
                if !header.contact.is_empty() {
                    p { "{header.contact}" }
                }
                if let Some(links) = &header.links {
                    p { "{links}" }
                }
            }

            for section in resume.sections.iter() {
                section { key: "{section.title}",
                    h2 { "{section.title}" }
                    for item in section.items.iter() {
                        {render_item(item)}
                    }
                }
            }
        }
    }
}
