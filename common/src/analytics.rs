use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, error, instrument};

use crate::storage::KeyValueStore;

// analytics
//
// tracking is strictly best-effort: every call is a no-op unless tracking is enabled, a tracking
// id is configured, the visitor has not opted out, and a sink is attached.  nothing here may
// change how the rest of the page behaves
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    // e.g. G-XXXXXXXXXX; no id means nothing is ever sent
    pub tracking_id: Option<String>,
    pub enabled: bool,
    // log every decision at debug level
    pub debug: bool,
    // storage key holding "true" once the visitor opts out
    pub opt_out_key: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            tracking_id: None,
            enabled: true,
            debug: false,
            opt_out_key: String::from("analytics_opt_out"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: Map<String, Value>,
}

impl AnalyticsEvent {
    // every event carries a category, a label and a value, plus whatever is specific to it
    fn new(name: &'static str, category: &str, label: &str, value: i64, extra: Value) -> Self {
        let mut params = Map::new();
        params.insert("event_category".into(), json!(category));
        params.insert("event_label".into(), json!(label));
        params.insert("value".into(), json!(value));

        if let Value::Object(extra) = extra {
            params.extend(extra);
        }

        AnalyticsEvent { name, params }
    }

    pub fn page_view(path: &str, title: &str) -> Self {
        let mut params = Map::new();
        params.insert("page_path".into(), json!(path));
        params.insert("page_title".into(), json!(title));

        AnalyticsEvent {
            name: "page_view",
            params,
        }
    }

    pub fn section_view(section_id: &str, section_name: Option<&str>) -> Self {
        let name = section_name.unwrap_or(section_id);
        Self::new(
            "section_view",
            "engagement",
            name,
            1,
            json!({ "section_id": section_id }),
        )
    }

    pub fn button_click(button_name: &str, button_label: Option<&str>) -> Self {
        Self::new(
            "button_click",
            "interaction",
            button_label.unwrap_or(button_name),
            0,
            json!({ "button_name": button_name }),
        )
    }

    pub fn form_submission(form_name: &str, success: bool) -> Self {
        Self::new(
            "form_submission",
            "engagement",
            form_name,
            if success { 1 } else { 0 },
            json!({ "form_name": form_name, "success": success }),
        )
    }

    pub fn theme_toggle(theme: &str) -> Self {
        Self::new(
            "theme_toggle",
            "interaction",
            theme,
            0,
            json!({ "theme": theme }),
        )
    }

    pub fn filter_usage(filter_type: &str, filter_value: &str) -> Self {
        Self::new(
            "filter_usage",
            "interaction",
            &format!("{filter_type}: {filter_value}"),
            0,
            json!({ "filter_type": filter_type, "filter_value": filter_value }),
        )
    }

    pub fn file_download(file_name: &str, file_type: &str) -> Self {
        Self::new(
            "file_download",
            "engagement",
            file_name,
            1,
            json!({ "file_name": file_name, "file_type": file_type }),
        )
    }

    pub fn external_link(url: &str, link_text: Option<&str>) -> Self {
        Self::new(
            "external_link_click",
            "outbound",
            link_text.unwrap_or(url),
            1,
            json!({ "url": url }),
        )
    }
}

// where events end up, gtag in the browser
pub trait AnalyticsSink {
    fn send(&mut self, tracking_id: &str, event: &AnalyticsEvent) -> anyhow::Result<()>;

    fn consent_denied(&mut self) -> anyhow::Result<()>;
}

#[derive(Debug)]
pub struct AnalyticsTracker<S, K> {
    config: AnalyticsConfig,
    store: S,
    sink: Option<K>,
    opted_out: bool,
}

impl<S: KeyValueStore, K: AnalyticsSink> AnalyticsTracker<S, K> {
    pub fn new(config: AnalyticsConfig, store: S, sink: Option<K>) -> Self {
        let opted_out = read_opt_out(&store, &config.opt_out_key);

        if config.debug {
            debug!(
                enabled = config.enabled,
                opted_out,
                tracking_id = ?config.tracking_id,
                "analytics initialized"
            );
        }

        AnalyticsTracker {
            config,
            store,
            sink,
            opted_out,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn opted_out(&self) -> bool {
        self.opted_out
    }

    pub fn can_track(&self) -> bool {
        self.config.enabled && !self.opted_out && self.config.tracking_id.is_some()
    }

    // returns true when this choice turned tracking on, i.e. the page still has to load the sink
    #[instrument(level = "debug", skip(self))]
    pub fn set_opt_out(&mut self, opt_out: bool) -> bool {
        let could_track = self.can_track();
        let value = if opt_out { "true" } else { "false" };

        // an unwritable store still honours the choice for this page
        if let Err(err) = self.store.set(&self.config.opt_out_key, value) {
            error!("failed to store analytics opt-out preference: {err}");
        }
        self.opted_out = opt_out;

        if opt_out {
            if let Some(sink) = self.sink.as_mut() {
                if let Err(err) = sink.consent_denied() {
                    error!("failed to revoke analytics consent: {err}");
                }
            }
        }

        !could_track && self.can_track()
    }

    // returns true if the event was handed to the sink
    pub fn track(&mut self, event: AnalyticsEvent) -> bool {
        if !self.can_track() {
            if self.config.debug {
                debug!(event = event.name, "tracking disabled, skipping event");
            }
            return false;
        }

        let (Some(tracking_id), Some(sink)) = (self.config.tracking_id.as_deref(), self.sink.as_mut())
        else {
            return false;
        };

        match sink.send(tracking_id, &event) {
            Ok(()) => {
                if self.config.debug {
                    debug!(event = event.name, params = ?event.params, "event tracked");
                }
                true
            }
            Err(err) => {
                error!("failed to track {}: {err}", event.name);
                false
            }
        }
    }

    pub fn track_page_view(&mut self, path: &str, title: &str) -> bool {
        self.track(AnalyticsEvent::page_view(path, title))
    }

    pub fn track_section_view(&mut self, section_id: &str, section_name: Option<&str>) -> bool {
        self.track(AnalyticsEvent::section_view(section_id, section_name))
    }

    pub fn track_button_click(&mut self, button_name: &str, button_label: Option<&str>) -> bool {
        self.track(AnalyticsEvent::button_click(button_name, button_label))
    }

    pub fn track_form_submission(&mut self, form_name: &str, success: bool) -> bool {
        self.track(AnalyticsEvent::form_submission(form_name, success))
    }

    pub fn track_theme_toggle(&mut self, theme: &str) -> bool {
        self.track(AnalyticsEvent::theme_toggle(theme))
    }

    pub fn track_filter_usage(&mut self, filter_type: &str, filter_value: &str) -> bool {
        self.track(AnalyticsEvent::filter_usage(filter_type, filter_value))
    }

    pub fn track_download(&mut self, file_name: &str, file_type: &str) -> bool {
        self.track(AnalyticsEvent::file_download(file_name, file_type))
    }

    pub fn track_external_link(&mut self, url: &str, link_text: Option<&str>) -> bool {
        self.track(AnalyticsEvent::external_link(url, link_text))
    }
}

// a storage failure counts as "not opted out", matching what the visitor saw before
fn read_opt_out<S: KeyValueStore>(store: &S, key: &str) -> bool {
    match store.get(key) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(err) => {
            error!("failed to read analytics opt-out preference: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: Vec<(String, AnalyticsEvent)>,
        denied: usize,
        failing: bool,
    }

    impl AnalyticsSink for RecordingSink {
        fn send(&mut self, tracking_id: &str, event: &AnalyticsEvent) -> anyhow::Result<()> {
            if self.failing {
                anyhow::bail!("gtag missing");
            }
            self.events.push((tracking_id.to_owned(), event.clone()));
            Ok(())
        }

        fn consent_denied(&mut self) -> anyhow::Result<()> {
            self.denied += 1;
            Ok(())
        }
    }

    fn config() -> AnalyticsConfig {
        AnalyticsConfig {
            tracking_id: Some("G-TEST".to_owned()),
            ..AnalyticsConfig::default()
        }
    }

    fn tracker(store: MemoryStore) -> AnalyticsTracker<MemoryStore, RecordingSink> {
        AnalyticsTracker::new(config(), store, Some(RecordingSink::default()))
    }

    #[test]
    fn tracks_when_allowed() {
        let mut t = tracker(MemoryStore::new());

        assert!(t.can_track());
        assert!(t.track_theme_toggle("light"));

        let sink = t.sink.as_ref().unwrap();
        let (id, event) = &sink.events[0];
        assert_eq!(id, "G-TEST");
        assert_eq!(event.name, "theme_toggle");
        assert_eq!(event.params["event_category"], "interaction");
        assert_eq!(event.params["event_label"], "light");
        assert_eq!(event.params["theme"], "light");
    }

    #[test]
    fn no_tracking_id_means_no_tracking() {
        let mut t: AnalyticsTracker<_, RecordingSink> = AnalyticsTracker::new(
            AnalyticsConfig::default(),
            MemoryStore::new(),
            Some(RecordingSink::default()),
        );

        assert!(!t.can_track());
        assert!(!t.track_page_view("/", "Home"));
        assert!(t.sink.as_ref().unwrap().events.is_empty());
    }

    #[test]
    fn missing_sink_is_a_noop() {
        let mut t: AnalyticsTracker<_, RecordingSink> =
            AnalyticsTracker::new(config(), MemoryStore::new(), None);

        assert!(t.can_track());
        assert!(!t.track_button_click("cta", None));
    }

    #[test]
    fn opt_out_is_persisted_and_read_back() {
        let mut t = tracker(MemoryStore::new());
        t.set_opt_out(true);

        assert!(t.opted_out());
        assert!(!t.track_download("resume.pdf", "pdf"));
        assert_eq!(t.sink.as_ref().unwrap().denied, 1);
        assert_eq!(t.store.peek("analytics_opt_out"), Some("true"));

        let reloaded = tracker(t.store.clone());
        assert!(reloaded.opted_out());
        assert!(!reloaded.can_track());
    }

    #[test]
    fn opting_back_in_does_not_revoke_consent() {
        let mut t = tracker(MemoryStore::new());
        assert!(!t.set_opt_out(false));

        assert!(!t.opted_out());
        assert_eq!(t.sink.as_ref().unwrap().denied, 0);
        assert!(t.can_track());
    }

    #[test]
    fn opting_in_after_load_reports_tracking_turned_on() {
        let mut store = MemoryStore::new();
        store.set("analytics_opt_out", "true").unwrap();

        let mut t = tracker(store);
        assert!(!t.can_track());

        assert!(t.set_opt_out(false));
        assert!(t.can_track());
        assert!(!t.set_opt_out(false));
        assert!(!t.set_opt_out(true));
    }

    #[test]
    fn unreadable_storage_counts_as_not_opted_out() {
        let t = tracker(MemoryStore::failing());
        assert!(!t.opted_out());
    }

    #[test]
    fn failed_opt_out_write_still_stops_tracking() {
        let mut t = tracker(MemoryStore::failing());
        t.set_opt_out(true);

        assert!(t.opted_out());
        assert!(!t.can_track());
        assert!(!t.track_page_view("/", "Home"));
        assert!(t.sink.as_ref().unwrap().events.is_empty());
        assert_eq!(t.sink.as_ref().unwrap().denied, 1);
    }

    #[test]
    fn sink_failure_is_swallowed() {
        let mut t = AnalyticsTracker::new(
            config(),
            MemoryStore::new(),
            Some(RecordingSink {
                failing: true,
                ..RecordingSink::default()
            }),
        );

        assert!(!t.track_external_link("https://example.com", Some("Example")));
    }

    #[test]
    fn event_metadata() {
        let filter = AnalyticsEvent::filter_usage("project_technology", "Rust");
        assert_eq!(filter.params["event_label"], "project_technology: Rust");
        assert_eq!(filter.params["filter_value"], "Rust");

        let form = AnalyticsEvent::form_submission("contact", false);
        assert_eq!(form.params["value"], 0);
        assert_eq!(form.params["success"], false);

        let section = AnalyticsEvent::section_view("about", None);
        assert_eq!(section.params["event_label"], "about");
        assert_eq!(section.params["section_id"], "about");

        let link = AnalyticsEvent::external_link("https://github.com", None);
        assert_eq!(link.name, "external_link_click");
        assert_eq!(link.params["event_label"], "https://github.com");
    }
}
