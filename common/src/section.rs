use tracing::debug;

// active-section highlighting
//
// intersection callbacks report sections entering and leaving the viewport in whatever order the
// browser batches them.  rather than letting the last callback win, the active section is the
// topmost (first in document order) section currently intersecting.  when nothing intersects,
// e.g. while a tall section fills the screen between its own thresholds, the previous choice
// is kept
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: String,
    pub viewport_entry: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub const LINK_CLASS: &str = "nav-link";
pub const ACTIVE_LINK_CLASS: &str = "nav-link active";

#[derive(Clone, Debug, Default)]
pub struct SectionHighlighter {
    // document order, fixed at construction
    sections: Vec<SectionEntry>,
    active: Option<usize>,
}

impl SectionHighlighter {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = ids
            .into_iter()
            .map(|id| SectionEntry {
                id: id.into(),
                viewport_entry: false,
            })
            .collect();

        SectionHighlighter {
            sections,
            active: None,
        }
    }

    pub fn sections(&self) -> &[SectionEntry] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|idx| self.sections[idx].id.as_str())
    }

    // record one intersection report
    //
    // unknown ids are ignored: the markup may carry sections we were not configured for
    pub fn observe(&mut self, id: &str, intersecting: bool) -> Option<Transition> {
        let Some(entry) = self.sections.iter_mut().find(|s| s.id == id) else {
            debug!(id, "intersection report for unregistered section");
            return None;
        };
        entry.viewport_entry = intersecting;

        self.recompute()
    }

    // apply a whole batch of reports before deciding, which is how the browser delivers them
    pub fn observe_batch<'a, I>(&mut self, reports: I) -> Option<Transition>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        for (id, intersecting) in reports {
            if let Some(entry) = self.sections.iter_mut().find(|s| s.id == id) {
                entry.viewport_entry = intersecting;
            }
        }

        self.recompute()
    }

    pub fn reset(&mut self) {
        for entry in self.sections.iter_mut() {
            entry.viewport_entry = false;
        }
        self.active = None;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    pub fn link_class(&self, id: &str) -> &'static str {
        if self.is_active(id) {
            ACTIVE_LINK_CLASS
        } else {
            LINK_CLASS
        }
    }

    fn recompute(&mut self) -> Option<Transition> {
        let topmost = self.sections.iter().position(|s| s.viewport_entry);

        let next = match topmost {
            Some(idx) => Some(idx),
            None => self.active,
        };

        if next == self.active {
            return None;
        }

        let from = self.active().map(str::to_owned);
        self.active = next;
        let to = self.active().map(str::to_owned);

        debug!(?from, ?to, "active section changed");
        Some(Transition { from, to })
    }
}

// "#about" -> "about", for matching nav link hrefs against section ids
pub fn fragment_id(href: &str) -> Option<&str> {
    href.split_once('#')
        .map(|(_, frag)| frag)
        .filter(|frag| !frag.is_empty())
}
