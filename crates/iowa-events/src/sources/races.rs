use crate::catalogue::{EventCatalogue, EventDraft};
use crate::sources::EventSource;
use crate::types::{Category, Source};

pub struct MajorRaces;

const DAM_TO_DSM: Source = Source::new("Dam to DSM", "https://www.damtodsm.com/");
const BIX_7: Source = Source::new("Bix 7", "https://bix7.com/");
const LHF_RACE: Source = Source::new("LHF Race", "https://www.lhf.org/");
const RIPROAR: Source = Source::new("RipRoar Events", "https://www.damtodsm.com/");

/// (title, date, time, city, venue, source)
const RACES: &[(&str, &str, &str, &str, &str, Source)] = &[
    ("EMC Dam to DSM Half Marathon", "May 30, 2026", "7:00 AM", "Des Moines", "Saylorville Dam to Downtown", DAM_TO_DSM),
    ("Quad-City Times Bix 7", "July 25, 2026", "8:00 AM", "Davenport", "Downtown Davenport", BIX_7),
    ("Jr Bix", "July 24, 2026", "6:00 PM", "Davenport", "Downtown Davenport", BIX_7),
    ("Quick Bix 2-Mile", "July 25, 2026", "8:00 AM", "Davenport", "Downtown Davenport", BIX_7),
    ("Sr Bix", "July 21, 2026", "Evening", "Davenport", "Downtown", BIX_7),
    ("Brady Street Sprints", "July 23, 2026", "7:00 PM", "Davenport", "Brady Street", BIX_7),
    ("Living History Farms Race", "November 2026", "All day", "Urbandale", "Living History Farms", LHF_RACE),
    ("Des Moines Turkey Trot", "November 26, 2026", "8:00 AM", "Des Moines", "Downtown", RIPROAR),
    ("Des Moines Women's Half Marathon", "2026", "Morning", "Des Moines", "Downtown", RIPROAR),
];

impl EventSource for MajorRaces {
    fn name(&self) -> &'static str {
        "major race"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, city, venue, source) in RACES {
            catalogue.add(
                EventDraft::new(title, date, city, Category::Running, source)
                    .time(time)
                    .venue(venue)
                    .subcategory("race"),
            );
        }
    }
}
