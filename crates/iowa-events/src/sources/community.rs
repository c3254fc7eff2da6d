use crate::catalogue::{EventCatalogue, EventDraft};
use crate::sources::EventSource;
use crate::types::{Category, Source};

/// Economic Alliance calendar, CR Events Live concerts and Hawkeye Downs.
pub struct CedarRapids;

const CR_ALLIANCE: Source = Source::new(
    "Cedar Rapids Economic Alliance",
    "https://www.cedarrapids.org/events-calendar/",
);
const CR_EVENTS_LIVE: Source = Source::new("CR Events Live", "https://www.creventslive.com/");
const HAWKEYE_DOWNS: Source = Source::new("Hawkeye Downs", "https://www.hawkeyedowns.org/");

const CR_CHAMBER_EVENTS: &[(&str, &str, &str)] = &[
    ("Economic Alliance Annual Meeting", "January 29, 2026", "11:30 AM - 1:00 PM"),
    ("Capitol Conversations", "January 30, 2026", "7:30 AM - 9:00 AM"),
    ("Impact CR: Orchestra Iowa Happy Hour", "February 4, 2026", "5:00 PM - 7:00 PM"),
    ("Collective Voice Day at the Capitol", "February 11, 2026", "1:00 PM - 7:00 PM"),
    ("February BizMix", "February 19, 2026", "4:00 PM - 6:00 PM"),
    ("Cedar Rapids Restaurant Week", "February 20 - March 1, 2026", "All day"),
    ("Hiawatha Business Summit", "February 24, 2026", "8:00 AM - 9:00 AM"),
    ("March BizMix at CR Kernels", "March 19, 2026", "4:00 PM - 6:00 PM"),
    ("Celebration of Agriculture", "March 26, 2026", "5:30 PM - 9:00 PM"),
    ("Cedar Rapids Freedom Festival", "July 2026", "All day"),
];

const CR_CONCERTS: &[(&str, &str, &str, &str)] = &[
    ("Fitz and The Tantrums", "January 29, 2026", "8:00 PM", "Riverside Casino"),
    ("Dane Cook Comedy", "February 13, 2026", "8:00 PM", "Riverside Casino"),
    ("Warrant ft. Firehouse", "February 14, 2026", "8:00 PM", "Riverside Casino"),
    ("Carly Pearce", "March 7, 2026", "8:00 PM", "Riverside Casino"),
    ("Tracy Lawrence", "March 26, 2026", "8:00 PM", "Riverside Casino"),
    ("Skillet", "March 27, 2026", "8:00 PM", "Riverside Casino"),
    ("Sevendust", "April 17, 2026", "7:00 PM", "Riverside Casino"),
    ("Jeff Foxworthy", "June 13, 2026", "8:00 PM", "Riverside Casino"),
    ("Kenny Wayne Shepherd Band", "November 20, 2026", "8:00 PM", "Riverside Casino"),
];

const HAWKEYE_DOWNS_EVENTS: &[(&str, &str, &str)] = &[
    ("Made for Her Women's Market", "March 14, 2026", "10:00 AM - 4:00 PM"),
    ("AACA Auto Parts Swap Meet", "March 2026", "All day"),
    ("Gun Show", "May 29-31, 2026", "9:00 AM - 5:00 PM"),
    ("Midwest Shredfest Drift Event", "May 30-31, 2026", "12:00 PM"),
];

impl EventSource for CedarRapids {
    fn name(&self) -> &'static str {
        "Cedar Rapids"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time) in CR_CHAMBER_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Cedar Rapids", Category::Community, CR_ALLIANCE)
                    .time(time)
                    .subcategory("chamber"),
            );
        }

        for &(title, date, time, venue) in CR_CONCERTS {
            catalogue.add(
                EventDraft::new(
                    title,
                    date,
                    "Cedar Rapids",
                    Category::Entertainment,
                    CR_EVENTS_LIVE,
                )
                .time(time)
                .venue(venue)
                .subcategory("concert"),
            );
        }

        for &(title, date, time) in HAWKEYE_DOWNS_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Cedar Rapids", Category::Community, HAWKEYE_DOWNS)
                    .time(time)
                    .venue("Hawkeye Downs")
                    .subcategory("expo"),
            );
        }
    }
}

pub struct SiouxCity;

const EXPLORE_SIOUXLAND: Source =
    Source::new("Explore Siouxland", "https://exploresiouxland.com/events/");

/// (title, date, time, venue, subcategory)
const SIOUX_CITY_EVENTS: &[(&str, &str, &str, &str, &str)] = &[
    ("Charlie Berens Comedy", "January 23, 2026", "7:00 PM", "Orpheum Theatre", "comedy"),
    ("Sioux City Musketeers Hockey", "January 23, 2026", "7:05 PM", "Tyson Events Center", "hockey"),
    ("Cardboard Sled Races", "February 1, 2026", "12:00 PM", "Cone Park", "family"),
    ("Sioux City Symphony", "February 7, 2026", "7:00 PM", "Orpheum Theatre", "music"),
    ("The Offspring with Bad Religion", "February 7, 2026", "7:00 PM", "Tyson Events Center", "concert"),
    ("Monster Jam", "February 20-21, 2026", "7:00 PM", "Tyson Events Center", "entertainment"),
    ("Pride Appreciation", "June 4, 2026", "7:00 PM", "Downtown", "community"),
    ("Saturday in the Park", "July 2026", "All day", "Grandview Park", "festival"),
    ("ArtSplash", "September 2026", "All day", "Downtown", "arts"),
];

impl EventSource for SiouxCity {
    fn name(&self) -> &'static str {
        "Sioux City"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, venue, subcategory) in SIOUX_CITY_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Sioux City", Category::Community, EXPLORE_SIOUXLAND)
                    .time(time)
                    .venue(venue)
                    .subcategory(subcategory),
            );
        }
    }
}

pub struct DubuqueChamber;

const DUBUQUE: Source = Source::new("Dubuque Chamber", "https://www.dubuquechamber.com");

const DUBUQUE_EVENTS: &[(&str, &str, &str, &str, &str)] = &[
    ("Winter Bounce at Five Flags", "January 23-25, 2026", "All day", "Five Flags Center", "family"),
    ("Beer with a Boss", "January 29, 2026", "Evening", "Various", "networking"),
    ("YP Next Up - Leadership", "February 19, 2026", "6:30 PM", "University of Dubuque", "professional"),
    ("Five Flags Movie Series", "Winter 2026", "Evening", "Five Flags Theater", "entertainment"),
    ("Packers Tailgate Tour - Field of Dreams", "April 16, 2026", "All day", "Field of Dreams", "sports"),
];

impl EventSource for DubuqueChamber {
    fn name(&self) -> &'static str {
        "Dubuque"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, venue, subcategory) in DUBUQUE_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Dubuque", Category::Community, DUBUQUE)
                    .time(time)
                    .venue(venue)
                    .subcategory(subcategory),
            );
        }
    }
}

/// Catch Des Moines, the West Des Moines Chamber and the Urbandale Chamber.
pub struct DesMoinesMetro;

const CATCH_DES_MOINES: Source =
    Source::new("Catch Des Moines", "https://www.catchdesmoines.com/events/");
const WDM_CHAMBER: Source = Source::new("WDM Chamber", "https://wdmchamber.org/");
const URBANDALE_CHAMBER: Source =
    Source::new("Urbandale Chamber", "https://uniquelyurbandale.com/");

const CATCH_DES_MOINES_EVENTS: &[(&str, &str, &str, &str, &str)] = &[
    ("Drake Relays", "April 23-26, 2026", "All day", "Drake Stadium", "track"),
    ("Des Moines Arts Festival", "June 26-28, 2026", "All day", "Western Gateway Park", "arts"),
    ("Principal Charity Classic (PGA)", "June 2026", "All day", "Wakonda Club", "golf"),
    ("World Food & Music Festival", "September 2026", "All day", "Western Gateway Park", "festival"),
    ("Holidazzle", "November-December 2026", "Evening", "Downtown", "holiday"),
];

const WDM_CHAMBER_EVENTS: &[(&str, &str, &str, Option<&str>)] = &[
    ("Rush Hour: Aura Restaurant", "January 2026", "5:00 PM - 7:00 PM", Some("Aura Restaurant")),
    ("WDM Annual Dinner - Mission: Possible", "February 26, 2026", "6:00 PM", Some("Val Air Ballroom")),
    ("Breakfast B4 Business (monthly)", "2026", "7:30 AM", Some("Various")),
    ("Tri-Chamber Golf Outing", "August 24, 2026", "All day", Some("Beaver Creek Golf Course")),
    ("Best of the West Awards", "December 1, 2026", "5:00 PM - 7:00 PM", None),
];

const URBANDALE_CHAMBER_EVENTS: &[(&str, &str, &str)] = &[
    ("Membership Luncheon", "January 2026", "12:00 PM"),
    ("Talk with Officials", "January 31, 2026", "Morning"),
    ("genYP Events", "2026 Monthly", "Various"),
];

impl EventSource for DesMoinesMetro {
    fn name(&self) -> &'static str {
        "Des Moines metro"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, venue, subcategory) in CATCH_DES_MOINES_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Des Moines", Category::Community, CATCH_DES_MOINES)
                    .time(time)
                    .venue(venue)
                    .subcategory(subcategory),
            );
        }

        for &(title, date, time, venue) in WDM_CHAMBER_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "West Des Moines", Category::Community, WDM_CHAMBER)
                    .time(time)
                    .venue(venue)
                    .subcategory("chamber"),
            );
        }

        for &(title, date, time) in URBANDALE_CHAMBER_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Urbandale", Category::Community, URBANDALE_CHAMBER)
                    .time(time)
                    .subcategory("chamber"),
            );
        }
    }
}

pub struct AnkenyChamber;

const ANKENY: Source = Source::new("Ankeny Chamber", "https://www.ankeny.org/");

const ANKENY_EVENTS: &[(&str, &str, &str, &str, &str)] = &[
    ("AYP St. Patrick's Day Party", "March 12, 2026", "5:30 PM - 7:30 PM", "Ankeny Chamber", "networking"),
    ("Ankeny Chamber SummerFest", "July 10-12, 2026", "All day", "The District at Prairie Trail", "festival"),
    ("SummerFest Carnival", "July 9, 2026", "4:00 PM - 9:00 PM", "The District", "carnival"),
    ("SummerFest Grand Parade", "July 11, 2026", "10:00 AM", "Ankeny", "parade"),
    ("SummerFest Fireworks", "July 11, 2026", "10:00 PM", "Prairie Trail", "fireworks"),
    ("Witches Night Out", "October 2026", "Evening", "Various", "festival"),
];

impl EventSource for AnkenyChamber {
    fn name(&self) -> &'static str {
        "Ankeny"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, venue, subcategory) in ANKENY_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Ankeny", Category::Community, ANKENY)
                    .time(time)
                    .venue(venue)
                    .subcategory(subcategory),
            );
        }
    }
}

pub struct StatewideFestivals;

const TRAVEL_IOWA: Source = Source::new("Travel Iowa", "https://www.traveliowa.com/events/");

/// (title, date, time, city, subcategory)
const FESTIVALS: &[(&str, &str, &str, &str, &str)] = &[
    ("Clear Lake Kite Festival", "February 2026", "All day", "Clear Lake", "festival"),
    ("Tulip Time Festival", "May 2026", "All day", "Pella", "festival"),
    ("Tivoli Fest", "May 2026", "All day", "Elk Horn", "festival"),
    ("Sioux Center Summer Celebration", "June 4-6, 2026", "All day", "Sioux Center", "festival"),
    ("Iowa City Jazz Festival", "July 3-5, 2026", "All day", "Iowa City", "music"),
    ("AJ's Independence Day (Clear Lake)", "July 4, 2026", "All day", "Clear Lake", "festival"),
    ("Hinterland Music Festival", "July 30 - August 2, 2026", "All day", "St. Charles", "music"),
    ("Iowa Irish Fest", "July 31 - August 2, 2026", "All day", "Waterloo", "festival"),
    ("National Balloon Classic", "August 2026", "All day", "Indianola", "festival"),
    ("Bix Beiderbecke Jazz Festival", "August 2026", "All day", "Davenport", "music"),
    ("RAGBRAI", "July 2026", "All week", "Across Iowa", "cycling"),
    ("Iowa Games Summer", "July 2026", "All day", "Ames", "multi-sport"),
    ("Iowa Games Winter", "February 2026", "All day", "Various", "multi-sport"),
];

impl EventSource for StatewideFestivals {
    fn name(&self) -> &'static str {
        "statewide festival"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, city, subcategory) in FESTIVALS {
            catalogue.add(
                EventDraft::new(title, date, city, Category::Community, TRAVEL_IOWA)
                    .time(time)
                    .subcategory(subcategory),
            );
        }
    }
}
