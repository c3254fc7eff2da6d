use crate::catalogue::{EventCatalogue, EventDraft};
use crate::sources::EventSource;
use crate::types::{Category, Source};

pub struct Adventureland;

const ADVENTURELAND: Source = Source::new("Adventureland", "https://www.adventurelandresort.com/");

const ADVENTURELAND_EVENTS: &[(&str, &str, &str, &str)] = &[
    ("Adventureland Season Opens", "May 16, 2026", "10:00 AM", "opening"),
    ("Paul Bunyan Lumberjack Show", "June 1-14, 2026", "All day", "show"),
    ("Canine Stars Stunt Dog Show", "June 17-30, 2026", "All day", "show"),
    ("Father's Day Belly Flop Contest", "June 20, 2026", "All day", "contest"),
    ("America's 250th Birthday Fireworks", "July 4, 2026", "9:00 PM", "fireworks"),
    ("Daniel Tiger Meet & Greets", "July 2026 (Sundays/Mondays)", "All day", "kids"),
    ("Neon Nights at Adventure Bay", "July 10 - August 15, 2026", "Evening", "waterpark"),
    ("Oktoberfest", "September 2026", "All day", "festival"),
    ("Phantom Fall Fest", "September 26 - October 31, 2026", "All day", "halloween"),
];

impl EventSource for Adventureland {
    fn name(&self) -> &'static str {
        "Adventureland"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, subcategory) in ADVENTURELAND_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Altoona", Category::Family, ADVENTURELAND)
                    .time(time)
                    .venue("Adventureland")
                    .subcategory(subcategory)
                    .age_group("All ages"),
            );
        }
    }
}

/// Blank Park Zoo, Science Center of Iowa and Living History Farms.
pub struct FamilyAttractions;

const BLANK_PARK_ZOO: Source = Source::new("Blank Park Zoo", "https://www.blankparkzoo.com/");
const SCIENCE_CENTER: Source = Source::new("Science Center of Iowa", "https://www.sciowa.org/");
const LIVING_HISTORY_FARMS: Source = Source::new("Living History Farms", "https://www.lhf.org/");

/// (source, city, venue, events as (title, date, time, subcategory))
type VenueTable = (Source, &'static str, &'static str, &'static [(&'static str, &'static str, &'static str, &'static str)]);

const ATTRACTIONS: &[VenueTable] = &[
    (
        BLANK_PARK_ZOO,
        "Des Moines",
        "Blank Park Zoo",
        &[
            ("Zoo Brew", "Summer 2026", "Evening", "adults"),
            ("Boo at the Zoo", "October 2026", "All day", "family"),
            ("Wild Lights", "November-December 2026", "Evening", "holiday"),
        ],
    ),
    (
        SCIENCE_CENTER,
        "Des Moines",
        "Science Center of Iowa",
        &[
            ("Science Center Exhibits", "2026", "All day", "exhibit"),
            ("Summer Science Camps", "June-August 2026", "All day", "camp"),
        ],
    ),
    (
        LIVING_HISTORY_FARMS,
        "Urbandale",
        "Living History Farms",
        &[
            ("Opening Day", "May 2026", "9:00 AM", "opening"),
            ("Independence Day Celebration", "July 4, 2026", "All day", "holiday"),
            ("Fall Harvest Festival", "October 2026", "All day", "festival"),
            ("Legends & Lanterns Halloween", "October 2026", "Evening", "halloween"),
        ],
    ),
];

impl EventSource for FamilyAttractions {
    fn name(&self) -> &'static str {
        "family attraction"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(source, city, venue, events) in ATTRACTIONS {
            for &(title, date, time, subcategory) in events {
                catalogue.add(
                    EventDraft::new(title, date, city, Category::Family, source)
                        .time(time)
                        .venue(venue)
                        .subcategory(subcategory),
                );
            }
        }
    }
}
