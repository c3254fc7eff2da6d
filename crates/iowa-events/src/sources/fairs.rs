use crate::catalogue::{EventCatalogue, EventDraft};
use crate::sources::EventSource;
use crate::types::{Category, Source};

pub struct CountyFairs;

const IOWA_FAIRS: Source = Source::new("Iowa Fairs Association", "https://iowafairs.com/");

/// (fair, dates, host town)
const FAIRS: &[(&str, &str, &str)] = &[
    ("Wapello County Regional Fair", "June 17-21, 2026", "Eldon"),
    ("Linn County Fair", "June 24-29, 2026", "Central City"),
    ("Winneshiek County Fair", "July 8-12, 2026", "Decorah"),
    ("Ringgold County Fair", "July 7-12, 2026", "Mount Ayr"),
    ("Shelby County Fair", "July 8-12, 2026", "Harlan"),
    ("Lee County Fair", "July 9-14, 2026", "Donnellson"),
    ("Sioux County Youth Fair", "July 10-17, 2026", "Sioux Center"),
    ("Marion County Fair", "July 11-17, 2026", "Knoxville"),
    ("Polk County 4-H & FFA Fair", "July 12-18, 2026", "Des Moines"),
    ("Tama County Fair", "July 13-19, 2026", "Gladbrook"),
    ("Poweshiek County Fair", "July 14-19, 2026", "Grinnell"),
    ("Southern Iowa Fair (Mahaska)", "July 14-19, 2026", "Oskaloosa"),
    ("Story County 4-H Fair", "July 15-19, 2026", "Nevada"),
    ("Taylor County Fair", "July 15-19, 2026", "Bedford"),
    ("Van Buren County Fair", "July 15-20, 2026", "Keosauqua"),
    ("Pottawattamie County Fair", "July 15-20, 2026", "Avoca"),
    ("Madison County Fair", "July 16-20, 2026", "Winterset"),
    ("Muscatine County Fair", "July 16-20, 2026", "West Liberty"),
    ("Palo Alto County Fair", "July 16-20, 2026", "Emmetsburg"),
    ("Pocahontas County Fair", "July 16-21, 2026", "Pocahontas"),
    ("Lyon County Fair", "July 19-24, 2026", "Rock Rapids"),
    ("O'Brien County Fair", "July 19-24, 2026", "Primghar"),
    ("Lucas County Fair", "July 19-23, 2026", "Chariton"),
    ("Page County Fair", "July 21-27, 2026", "Clarinda"),
    ("Great Jones County Fair", "July 22-26, 2026", "Monticello"),
    ("Louisa County Fair", "July 22-29, 2026", "Columbus Junction"),
    ("Westfair (Pottawattamie)", "July 22-27, 2026", "Council Bluffs"),
    ("Plymouth County Fair", "July 23-27, 2026", "Le Mars"),
    ("Union County Fair", "July 23-29, 2026", "Afton"),
    ("Kossuth County Fair", "July 27 - August 2, 2026", "Algona"),
    ("Sac County Fair", "July 28 - August 1, 2026", "Sac City"),
    ("Mississippi Valley Fair (Scott)", "August 4-9, 2026", "Davenport"),
    ("Iowa State Fair", "August 13-23, 2026", "Des Moines"),
    ("Clay County Fair", "September 12-20, 2026", "Spencer"),
];

impl EventSource for CountyFairs {
    fn name(&self) -> &'static str {
        "county fair"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, city) in FAIRS {
            let venue = format!("{city} Fairgrounds");
            catalogue.add(
                EventDraft::new(title, date, city, Category::Fair, IOWA_FAIRS)
                    .time("All day")
                    .venue(venue.as_str())
                    .subcategory("county_fair")
                    .age_group("All ages"),
            );
        }
    }
}
