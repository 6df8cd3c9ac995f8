use std::collections::BTreeSet;

use api::Project;

// project filtering by technology tag
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Tech(String),
}

impl Filter {
    // the value reported as filter_usage
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Tech(tech) => tech,
        }
    }
}

pub const FILTER_USAGE_TYPE: &str = "project_technology";

#[derive(Clone, Debug)]
pub struct ProjectFilter {
    projects: Vec<BTreeSet<String>>,
    technologies: BTreeSet<String>,
    active: Filter,
}

impl ProjectFilter {
    pub fn new(projects: &[Project]) -> Self {
        let projects: Vec<BTreeSet<String>> = projects
            .iter()
            .map(|p| {
                p.technologies
                    .iter()
                    .map(|t| t.trim())
                    .filter(|t| !t.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .collect();

        let technologies = projects.iter().flatten().cloned().collect();

        ProjectFilter {
            projects,
            technologies,
            active: Filter::All,
        }
    }

    // sorted, deduplicated
    pub fn technologies(&self) -> impl Iterator<Item = &str> {
        self.technologies.iter().map(String::as_str)
    }

    pub fn active(&self) -> &Filter {
        &self.active
    }

    pub fn is_active(&self, filter: &Filter) -> bool {
        &self.active == filter
    }

    pub fn is_visible(&self, index: usize) -> bool {
        match &self.active {
            Filter::All => index < self.projects.len(),
            Filter::Tech(tech) => self
                .projects
                .get(index)
                .is_some_and(|techs| techs.contains(tech)),
        }
    }

    // switch filters and return the indices of the projects that remain visible
    pub fn select(&mut self, filter: Filter) -> Vec<usize> {
        self.active = filter;
        self.visible()
    }

    pub fn visible(&self) -> Vec<usize> {
        (0..self.projects.len())
            .filter(|idx| self.is_visible(*idx))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        String::from("1 project")
    } else {
        format!("{count} projects")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(title: &str, techs: &[&str]) -> Project {
        Project {
            title: title.to_owned(),
            description: String::new(),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            link: None,
        }
    }

    fn sample() -> ProjectFilter {
        ProjectFilter::new(&[
            project("site", &["Rust", "WASM"]),
            project("api", &[" Rust ", "PostgreSQL", ""]),
            project("app", &["TypeScript"]),
        ])
    }

    #[test]
    fn technologies_are_sorted_unique_and_trimmed() {
        let filter = sample();
        let techs: Vec<_> = filter.technologies().collect();
        assert_eq!(techs, vec!["PostgreSQL", "Rust", "TypeScript", "WASM"]);
    }

    #[test]
    fn all_shows_everything() {
        let mut filter = sample();
        assert_eq!(filter.select(Filter::All), vec![0, 1, 2]);
        assert!(filter.is_active(&Filter::All));
    }

    #[test]
    fn tech_filter_narrows() {
        let mut filter = sample();

        assert_eq!(filter.select(Filter::Tech("Rust".into())), vec![0, 1]);
        assert!(filter.is_active(&Filter::Tech("Rust".into())));
        assert!(!filter.is_active(&Filter::All));
        assert!(!filter.is_visible(2));

        assert_eq!(filter.select(Filter::Tech("Haskell".into())), Vec::<usize>::new());
    }

    #[test]
    fn out_of_range_is_never_visible() {
        let filter = sample();
        assert!(!filter.is_visible(7));
    }

    #[test]
    fn labels() {
        assert_eq!(count_label(0), "0 projects");
        assert_eq!(count_label(1), "1 project");
        assert_eq!(count_label(12), "12 projects");
        assert_eq!(Filter::All.as_str(), "all");
        assert_eq!(Filter::Tech("Rust".into()).as_str(), "Rust");
    }
}
