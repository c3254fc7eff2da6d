use chrono::NaiveDate;

use crate::coords::coordinates_for;
use crate::date_filter::is_future_event;
use crate::dedup::deduplicate;
use crate::sources::EventSource;
use crate::types::{Category, Event, Source};

/// Raw fields for one event as supplied by a source table.
#[derive(Debug, Clone)]
pub struct EventDraft<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub time: Option<&'a str>,
    pub city: &'a str,
    pub venue: Option<&'a str>,
    pub category: Category,
    pub subcategory: Option<&'a str>,
    pub source: Source,
    pub description: Option<&'a str>,
    pub age: Option<&'a str>,
    pub age_group: Option<&'a str>,
}

impl<'a> EventDraft<'a> {
    pub fn new(
        title: &'a str,
        date: &'a str,
        city: &'a str,
        category: Category,
        source: Source,
    ) -> Self {
        Self {
            title,
            date,
            time: None,
            city,
            venue: None,
            category,
            subcategory: None,
            source,
            description: None,
            age: None,
            age_group: None,
        }
    }

    pub fn time(mut self, time: &'a str) -> Self {
        self.time = Some(time);
        self
    }

    pub fn venue(mut self, venue: impl Into<Option<&'a str>>) -> Self {
        self.venue = venue.into();
        self
    }

    pub fn subcategory(mut self, subcategory: &'a str) -> Self {
        self.subcategory = Some(subcategory);
        self
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn age(mut self, age: &'a str) -> Self {
        self.age = Some(age);
        self
    }

    pub fn age_group(mut self, age_group: &'a str) -> Self {
        self.age_group = Some(age_group);
        self
    }
}

/// Turns a draft into an [`Event`], or `None` when its date is already past.
///
/// Never fails otherwise: unknown cities simply get no coordinates.
pub fn build_event(draft: EventDraft<'_>, today: NaiveDate) -> Option<Event> {
    if !is_future_event(Some(draft.date), today) {
        log::debug!("Dropping past event '{}' ({})", draft.title, draft.date);
        return None;
    }

    let coords = coordinates_for(draft.city);

    Some(Event {
        title: draft.title.to_string(),
        date: draft.date.to_string(),
        time: draft.time.map(str::to_string),
        location: format!("{}, IA", draft.city),
        venue: draft.venue.map(str::to_string),
        category: draft.category.slug().to_string(),
        subcategory: draft.subcategory.map(str::to_string),
        source: draft.source.name.to_string(),
        source_url: draft.source.url.to_string(),
        description: draft.description.map(str::to_string),
        city: Some(draft.city.to_string()),
        teams: None,
        age_group: draft.age_group.or(draft.age).map(str::to_string),
        registration_url: None,
        latitude: coords.map(|c| c.latitude),
        longitude: coords.map(|c| c.longitude),
    })
}

/// Ordered accumulator for one run. Owns every event built so far.
#[derive(Debug)]
pub struct EventCatalogue {
    today: NaiveDate,
    events: Vec<Event>,
}

impl EventCatalogue {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            events: Vec::new(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Builds and appends the event. Returns `false` if it was dropped as past.
    pub fn add(&mut self, draft: EventDraft<'_>) -> bool {
        match build_event(draft, self.today) {
            Some(event) => {
                self.events.push(event);
                true
            }
            None => false,
        }
    }

    pub fn load(&mut self, source: &dyn EventSource) {
        log::info!("Adding {} events...", source.name());
        source.load(self);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consumes the catalogue, returning its events with duplicates removed.
    pub fn finish(self) -> Vec<Event> {
        deduplicate(self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SOURCE: Source = Source::new("src", "url");

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tbk_draft() -> EventDraft<'static> {
        EventDraft::new(
            "Test Event",
            "January 3, 2026",
            "Bettendorf",
            Category::Sports,
            TEST_SOURCE,
        )
        .time("8:00 AM")
        .venue("TBK")
        .subcategory("test")
    }

    #[test]
    fn test_upcoming_event_is_built_with_coordinates() {
        let event = build_event(tbk_draft(), date(2026, 1, 1)).expect("event should be kept");

        assert_eq!(event.title, "Test Event");
        assert_eq!(event.city.as_deref(), Some("Bettendorf"));
        assert_eq!(event.location, "Bettendorf, IA");
        assert_eq!(event.latitude, Some(41.5503));
        assert_eq!(event.longitude, Some(-90.4857));
        assert_eq!(event.time.as_deref(), Some("8:00 AM"));
        assert_eq!(event.venue.as_deref(), Some("TBK"));
        assert_eq!(event.category, "sports");
        assert_eq!(event.subcategory.as_deref(), Some("test"));
        assert_eq!(event.source, "src");
        assert_eq!(event.source_url, "url");
        assert_eq!(event.description, None);
        assert_eq!(event.teams, None);
        assert_eq!(event.registration_url, None);
    }

    #[test]
    fn test_past_event_is_dropped() {
        let mut catalogue = EventCatalogue::new(date(2026, 2, 1));

        assert!(!catalogue.add(tbk_draft()));
        assert!(catalogue.is_empty());
    }

    #[test]
    fn test_unknown_city_has_neither_coordinate() {
        let draft = EventDraft::new(
            "RAGBRAI",
            "July 2026",
            "Across Iowa",
            Category::Community,
            TEST_SOURCE,
        );
        let event = build_event(draft, date(2026, 1, 1)).expect("event should be kept");

        assert_eq!(event.location, "Across Iowa, IA");
        assert_eq!(event.latitude, None);
        assert_eq!(event.longitude, None);
    }

    #[test]
    fn test_age_group_takes_precedence_over_age() {
        let today = date(2026, 1, 1);

        let both = tbk_draft().age("Youth").age_group("All ages");
        let event = build_event(both, today).unwrap();
        assert_eq!(event.age_group.as_deref(), Some("All ages"));

        let age_only = tbk_draft().age("Youth");
        let event = build_event(age_only, today).unwrap();
        assert_eq!(event.age_group.as_deref(), Some("Youth"));

        let event = build_event(tbk_draft(), today).unwrap();
        assert_eq!(event.age_group, None);
    }

    #[test]
    fn test_catalogue_keeps_insertion_order_and_dedups_on_finish() {
        let mut catalogue = EventCatalogue::new(date(2026, 1, 1));
        let fair = |title: &'static str| {
            EventDraft::new(title, "July 2026", "Knoxville", Category::Fair, TEST_SOURCE)
                .time("All day")
        };

        assert!(catalogue.add(fair("Fair A")));
        assert!(catalogue.add(fair("Fair B")));
        assert!(catalogue.add(fair("Fair A")));
        assert_eq!(catalogue.len(), 3);

        let events = catalogue.finish();
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Fair A", "Fair B"]);
    }
}
