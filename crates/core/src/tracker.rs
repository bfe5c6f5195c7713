//! Active navigation highlighting.
//!
//! The page is partitioned vertically into [`Section`]s. On every scroll tick
//! the tracker takes a fresh layout snapshot, finds the section under
//! `scroll_y + header_offset` and marks the nav link pointing at it. Every
//! other link is cleared, so at most one link is ever active.
//!
//! Both collaborators are injected: a [`SectionLayout`] that measures the
//! live layout and a set of [`NavLinkView`]s the tracker can flag. A missing
//! section or a link without a fragment simply never matches.

use tracing::debug;

/// Read-only snapshot of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Distance from the document top, in CSS pixels.
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open: `[top, top + height)`.
    #[inline]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Source of the live section layout.
pub trait SectionLayout {
    /// Measures all sections in document order.
    fn snapshot(&self) -> Vec<Section>;
}

impl SectionLayout for Vec<Section> {
    fn snapshot(&self) -> Vec<Section> {
        self.clone()
    }
}

/// A navigation link the tracker can flag.
pub trait NavLinkView {
    /// Id of the section this link points at, if any.
    fn target(&self) -> Option<&str>;
    fn set_active(&mut self, active: bool);
}

/// Extracts the fragment of an `href` (`"#about"` or `"/index.html#about"` → `"about"`).
pub fn fragment_target(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// First section containing `position`.
///
/// Sections partition the page, so the first match is the only one in practice.
pub fn locate(sections: &[Section], position: f64) -> Option<&Section> {
    sections.iter().find(|s| s.contains(position))
}

pub struct ActiveSectionTracker<S, L> {
    layout: S,
    links: Vec<L>,
    header_offset: f64,
    active: Option<String>,
}

impl<S: SectionLayout, L: NavLinkView> ActiveSectionTracker<S, L> {
    pub fn new(layout: S, links: Vec<L>, header_offset: f64) -> Self {
        Self {
            layout,
            links,
            header_offset,
            active: None,
        }
    }

    /// Re-evaluates the active section for `scroll_y` and updates every link.
    ///
    /// Returns the id of the active section, or `None` when the position lies
    /// above the first section or below the last.
    pub fn update(&mut self, scroll_y: f64) -> Option<&str> {
        let position = scroll_y + self.header_offset;
        let sections = self.layout.snapshot();
        let current = locate(&sections, position).map(|s| s.id.as_str());

        let mut claimed = false;
        for link in &mut self.links {
            let matches = !claimed && current.is_some() && link.target() == current;
            claimed |= matches;
            link.set_active(matches);
        }

        if self.active.as_deref() != current {
            debug!(
                from = self.active.as_deref().unwrap_or("-"),
                to = current.unwrap_or("-"),
                position,
                "active section changed"
            );
            self.active = current.map(str::to_owned);
        }
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn links(&self) -> &[L] {
        &self.links
    }

    pub fn layout(&self) -> &S {
        &self.layout
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestLink {
        href: String,
        active: bool,
        writes: u32,
    }

    impl TestLink {
        fn new(href: &str) -> Self {
            Self {
                href: href.to_string(),
                active: false,
                writes: 0,
            }
        }
    }

    impl NavLinkView for TestLink {
        fn target(&self) -> Option<&str> {
            fragment_target(&self.href)
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
            self.writes += 1;
        }
    }

    fn page() -> Vec<Section> {
        vec![Section::new("home", 0.0, 800.0), Section::new("about", 800.0, 800.0)]
    }

    fn active_hrefs(t: &ActiveSectionTracker<Vec<Section>, TestLink>) -> Vec<&str> {
        t.links()
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect()
    }

    fn tracker() -> ActiveSectionTracker<Vec<Section>, TestLink> {
        ActiveSectionTracker::new(page(), vec![TestLink::new("#home"), TestLink::new("#about")], 0.0)
    }

    #[test]
    fn scenario_positions() {
        let mut t = tracker();

        assert_eq!(t.update(850.0), Some("about"));
        assert_eq!(active_hrefs(&t), vec!["#about"]);

        assert_eq!(t.update(0.0), Some("home"));
        assert_eq!(active_hrefs(&t), vec!["#home"]);

        assert_eq!(t.update(2000.0), None);
        assert!(active_hrefs(&t).is_empty());
    }

    #[test]
    fn header_offset_shifts_the_probe() {
        let mut t = ActiveSectionTracker::new(
            page(),
            vec![TestLink::new("#home"), TestLink::new("#about")],
            100.0,
        );
        assert_eq!(t.update(699.0), Some("home"));
        assert_eq!(t.update(700.0), Some("about"));
        assert_eq!(t.header_offset(), 100.0);
    }

    #[test]
    fn ranges_are_half_open() {
        let mut t = tracker();
        assert_eq!(t.update(799.999), Some("home"));
        assert_eq!(t.update(800.0), Some("about"));
        assert_eq!(t.update(1600.0), None);
    }

    #[test]
    fn above_first_section_clears_links() {
        let layout = vec![Section::new("home", 200.0, 400.0)];
        let mut t = ActiveSectionTracker::new(layout, vec![TestLink::new("#home")], 0.0);
        assert_eq!(t.update(300.0), Some("home"));
        assert_eq!(t.update(10.0), None);
        assert!(!t.links()[0].active);
    }

    #[test]
    fn repeated_updates_are_stable() {
        let mut t = tracker();
        for _ in 0..3 {
            assert_eq!(t.update(850.0), Some("about"));
            assert_eq!(active_hrefs(&t), vec!["#about"]);
        }
        assert_eq!(t.active(), Some("about"));
    }

    #[test]
    fn every_inner_position_activates_exactly_its_section() {
        let layout = vec![
            Section::new("home", 0.0, 640.0),
            Section::new("services", 640.0, 1200.0),
            Section::new("process", 1840.0, 900.0),
            Section::new("contact", 2740.0, 500.0),
        ];
        let links = layout
            .iter()
            .map(|s| TestLink::new(&format!("#{}", s.id)))
            .collect();
        let mut t = ActiveSectionTracker::new(layout.clone(), links, 0.0);

        let mut y = 0.0;
        while y < 3240.0 {
            let expected = layout.iter().find(|s| s.contains(y)).map(|s| s.id.clone());
            let got = t.update(y).map(str::to_owned);
            assert_eq!(got, expected, "y={y}");
            let active = active_hrefs(&t);
            assert_eq!(active.len(), 1, "y={y}");
            assert_eq!(active[0], format!("#{}", expected.unwrap()));
            y += 37.5;
        }
    }

    #[test]
    fn links_without_sections_are_ignored() {
        let links = vec![
            TestLink::new("#home"),
            TestLink::new("#missing"),
            TestLink::new("/blog"),
            TestLink::new("#"),
        ];
        let mut t = ActiveSectionTracker::new(page(), links, 0.0);
        assert_eq!(t.update(10.0), Some("home"));
        assert_eq!(active_hrefs(&t), vec!["#home"]);
        assert!(t.links().iter().all(|l| l.writes == 1));
    }

    #[test]
    fn duplicate_links_keep_single_active() {
        let links = vec![TestLink::new("#about"), TestLink::new("index.html#about")];
        let mut t = ActiveSectionTracker::new(page(), links, 0.0);
        assert_eq!(t.update(900.0), Some("about"));
        assert_eq!(active_hrefs(&t), vec!["#about"]);
    }

    #[test]
    fn empty_layout_is_a_no_op() {
        let mut t: ActiveSectionTracker<Vec<Section>, TestLink> =
            ActiveSectionTracker::new(Vec::new(), Vec::new(), 100.0);
        assert_eq!(t.update(500.0), None);
        assert_eq!(t.update(f64::NAN), None);
    }

    #[test]
    fn fragment_parsing() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("/index.html#contact"), Some("contact"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/about"), None);
    }
}
