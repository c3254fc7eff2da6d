pub mod catalogue;
pub mod coords;
pub mod date_filter;
pub mod dedup;
pub mod export;
pub mod sources;
pub mod summary;
pub mod types;

pub use catalogue::{EventCatalogue, EventDraft, build_event};
pub use export::ExportError;
pub use sources::{EventSource, default_sources};
pub use types::{Category, Event, Source};

use chrono::NaiveDate;

/// Loads every provider in order and returns the deduplicated events.
pub fn collect_events(today: NaiveDate, sources: &[Box<dyn EventSource>]) -> Vec<Event> {
    log::info!("Today: {}", today);

    let mut catalogue = EventCatalogue::new(today);
    for source in sources {
        catalogue.load(source.as_ref());
    }

    let events = catalogue.finish();
    log::info!("Total events: {}", events.len());
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Duplicates;

    impl EventSource for Duplicates {
        fn name(&self) -> &'static str {
            "duplicate"
        }

        fn load(&self, catalogue: &mut EventCatalogue) {
            let source = Source::new("src", "url");
            for _ in 0..2 {
                catalogue.add(
                    EventDraft::new("Fair A", "July 2026", "Knoxville", Category::Fair, source)
                        .time("All day"),
                );
            }
        }
    }

    #[test]
    fn test_custom_source_duplicates_collapse() {
        let sources: Vec<Box<dyn EventSource>> = vec![Box::new(Duplicates)];
        let events = collect_events(date(2026, 1, 1), &sources);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].latitude, Some(41.3208));
    }

    #[test]
    fn test_full_catalogue_invariants() {
        let events = collect_events(date(2026, 1, 1), &default_sources());
        assert!(!events.is_empty());

        let mut keys = std::collections::HashSet::new();
        for event in &events {
            assert_eq!(event.latitude.is_some(), event.longitude.is_some());
            if let Some(city) = &event.city {
                assert_eq!(event.location, format!("{city}, IA"));
            }
            assert!(keys.insert(dedup::dedup_key(event)), "duplicate {}", event);
        }
    }

    #[test]
    fn test_entries_sharing_only_a_title_are_kept() {
        // Different dates and cities.
        let events = collect_events(date(2026, 1, 1), &default_sources());
        let monster_jam = events.iter().filter(|e| e.title == "Monster Jam").count();
        assert_eq!(monster_jam, 2);

        let total_loaded: usize = default_sources()
            .iter()
            .map(|s| {
                let mut catalogue = EventCatalogue::new(date(2026, 1, 1));
                catalogue.load(s.as_ref());
                catalogue.len()
            })
            .sum();
        assert!(events.len() <= total_loaded);
    }

    #[test]
    fn test_past_entries_are_filtered_by_reference_date() {
        let early = collect_events(date(2026, 1, 1), &default_sources());
        let late = collect_events(date(2026, 10, 1), &default_sources());

        assert!(late.len() < early.len());
        assert!(late.iter().all(|e| e.title != "New Year's Pickleball Tournament"));
        // No month token, always kept.
        assert!(late.iter().any(|e| e.title == "Battle By The River Rodeo"));
        assert!(late.iter().any(|e| e.title == "Kenny Wayne Shepherd Band"));
    }

    #[test]
    fn test_output_is_deterministic_for_fixed_date() {
        let today = date(2026, 3, 1);
        let scraped_at: NaiveDateTime = today.and_hms_opt(0, 0, 0).unwrap();

        let render = || {
            let events = collect_events(today, &default_sources());
            let mut json = Vec::new();
            let mut csv = Vec::new();
            export::write_json_to(&mut json, &events, scraped_at).unwrap();
            export::write_csv_to(&mut csv, &events).unwrap();
            (json, csv)
        };

        assert_eq!(render(), render());
    }
}
