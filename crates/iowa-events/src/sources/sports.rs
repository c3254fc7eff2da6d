use crate::catalogue::{EventCatalogue, EventDraft};
use crate::sources::EventSource;
use crate::types::{Category, Source};

pub struct TbkSportsComplex;

const TBK: Source = Source::new(
    "TBK Bank Sports Complex",
    "https://www.tbkbanksportscomplex.com/events/",
);

/// (title, date, time, subcategory, age group)
const TBK_EVENTS: &[(&str, &str, &str, &str, &str)] = &[
    ("New Year's Pickleball Tournament", "January 3, 2026", "8:00 AM", "pickleball", "All ages"),
    ("1v1 Goalkeeper Tournament", "January 2-4, 2026", "All day", "soccer", "8-18 yrs"),
    ("Blizzard Bash Indoor Softball", "January 9-11, 2026", "All day", "softball", "All ages"),
    ("LOVB Challenge Volleyball", "January 10, 2026", "All day", "volleyball", "10U+"),
    ("MLK Classic Indoor Softball", "January 16-17, 2026", "All day", "softball", "All ages"),
    ("MLK Classic Weekend 2", "January 18-19, 2026", "All day", "softball", "All ages"),
    ("Winter Soccer Futsal", "January 23-25, 2026", "All day", "soccer", "9U-19U"),
    ("Frozen Ropes Frenzy Softball", "January 30 - February 1, 2026", "All day", "softball", "All ages"),
    ("Winter Warm-Up Softball", "January 30 - February 2, 2026", "All day", "softball", "All ages"),
    ("President's Day Slugfest", "February 13-16, 2026", "All day", "softball", "All ages"),
    ("High School Warm-Up Softball", "February 27 - March 1, 2026", "All day", "softball", "High School"),
    ("LOVB Challenge #8", "February 28, 2026", "All day", "volleyball", "All ages"),
    ("GameTime Basketball", "May 2-3, 2026", "8:15 AM", "basketball", "Youth"),
    ("GameTime Basketball", "May 30-31, 2026", "8:15 AM", "basketball", "Youth"),
    ("GameTime Basketball", "June 13-14, 2026", "8:15 AM", "basketball", "Youth"),
    ("Summer Basketball Tournament", "June 27-28, 2026", "8:15 AM", "basketball", "All ages"),
    ("Great River Classic Soccer", "September 24-26, 2026", "8:00 AM", "soccer", "Youth"),
];

impl EventSource for TbkSportsComplex {
    fn name(&self) -> &'static str {
        "TBK Bank Sports Complex"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, subcategory, age_group) in TBK_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Bettendorf", Category::KidsAthletics, TBK)
                    .time(time)
                    .venue("TBK Bank Sports Complex")
                    .subcategory(subcategory)
                    .age_group(age_group),
            );
        }
    }
}

pub struct XtreamArena;

const XTREAM: Source = Source::new("Xtream Arena", "https://xtreamarena.com/");

const XTREAM_EVENTS: &[(&str, &str, &str, &str)] = &[
    ("Iowa Heartlanders vs Toledo", "January 16, 2026", "7:00 PM", "hockey"),
    ("Iowa Heartlanders Y2K Night", "January 30, 2026", "7:00 PM", "hockey"),
    ("Iowa Heartlanders EmpowerHER Night", "January 31, 2026", "6:00 PM", "hockey"),
    ("Iowa Heartlanders Video Game Night", "February 1, 2026", "3:00 PM", "hockey"),
    ("Iowa Heartlanders vs Kalamazoo", "February 11, 2026", "7:00 PM", "hockey"),
    ("Iowa Heartlanders Hockey For All Night", "February 13, 2026", "7:00 PM", "hockey"),
    ("Iowa Heartlanders ARTlanders Night", "February 14, 2026", "6:00 PM", "hockey"),
    ("Iowa Heartlanders vs Wichita", "February 18, 2026", "7:00 PM", "hockey"),
    ("Iowa Heartlanders Margaritaville Night", "February 20, 2026", "7:00 PM", "hockey"),
    ("Iowa Heartlanders Cornfed Night", "February 21, 2026", "6:00 PM", "hockey"),
    ("NCAA Women's Wrestling Championships", "March 6, 2026", "10:00 AM", "wrestling"),
    ("MVC Women's Basketball Championship", "March 12-15, 2026", "All day", "basketball"),
    ("Battle By The River Rodeo", "2026", "Evening", "rodeo"),
];

impl EventSource for XtreamArena {
    fn name(&self) -> &'static str {
        "Xtream Arena"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, subcategory) in XTREAM_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Coralville", Category::Sports, XTREAM)
                    .time(time)
                    .venue("Xtream Arena")
                    .subcategory(subcategory),
            );
        }
    }
}

/// Wells Fargo Arena / Casey's Center.
pub struct IowaEventsCenter;

const EVENTS_CENTER: Source = Source::new(
    "Iowa Events Center",
    "https://www.iowaeventscenter.com/events/",
);

const EVENTS_CENTER_EVENTS: &[(&str, &str, &str, &str)] = &[
    ("Iowa Wild vs Toronto Marlies", "January 16, 2026", "7:00 PM", "hockey"),
    ("Iowa Wild vs Toronto Marlies", "January 17, 2026", "6:00 PM", "hockey"),
    ("Iowa Wolves vs Long Island Nets", "January 18, 2026", "7:00 PM", "basketball"),
    ("Iowa Wolves vs Long Island Nets", "January 19, 2026", "4:00 PM", "basketball"),
    ("IHSAA State Wrestling Tournament", "February 19-21, 2026", "All day", "wrestling"),
    ("IGHSAU State Basketball Tournament", "March 2-7, 2026", "All day", "basketball"),
    ("IHSAA State Basketball Tournament", "March 9-14, 2026", "All day", "basketball"),
    ("Iowa Barnstormers Arena Football", "Spring 2026", "7:00 PM", "football"),
    ("Monster Jam", "April 11-12, 2026", "1:00 PM & 7:00 PM", "entertainment"),
];

impl EventSource for IowaEventsCenter {
    fn name(&self) -> &'static str {
        "Wells Fargo Arena / Casey's Center"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, subcategory) in EVENTS_CENTER_EVENTS {
            catalogue.add(
                EventDraft::new(title, date, "Des Moines", Category::Sports, EVENTS_CENTER)
                    .time(time)
                    .venue("Wells Fargo Arena")
                    .subcategory(subcategory),
            );
        }
    }
}

pub struct IowaHawkeyes;

const HAWKEYES: Source = Source::new("Iowa Hawkeyes", "https://hawkeyesports.com/");

const HAWKEYES_GAMES: &[(&str, &str, &str)] = &[
    ("Iowa Football vs Northern Illinois", "September 5, 2026", "TBD"),
    ("Iowa Football vs Iowa State", "September 12, 2026", "TBD"),
    ("Iowa Football vs UNI", "September 19, 2026", "TBD"),
];

impl EventSource for IowaHawkeyes {
    fn name(&self) -> &'static str {
        "Hawkeyes"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time) in HAWKEYES_GAMES {
            catalogue.add(
                EventDraft::new(title, date, "Iowa City", Category::CollegeSports, HAWKEYES)
                    .time(time)
                    .venue("Kinnick Stadium")
                    .subcategory("football"),
            );
        }
    }
}

pub struct HighSchoolTournaments;

const IHSAA: Source = Source::new("IHSAA/IGHSAU", "https://www.iahsaa.org");

/// (title, date, time, city, venue, subcategory, division)
const HIGH_SCHOOL_EVENTS: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    ("IHSAA State Wrestling", "February 2026", "All day", "Des Moines", "Wells Fargo Arena", "wrestling", "Boys"),
    ("IGHSAU State Basketball", "March 2026", "All day", "Des Moines", "Wells Fargo Arena", "basketball", "Girls"),
    ("IHSAA State Basketball", "March 2026", "All day", "Des Moines", "Wells Fargo Arena", "basketball", "Boys"),
    ("IHSAA/IGHSAU State Track", "May 2026", "All day", "Des Moines", "Drake Stadium", "track", "All"),
    ("IHSAA State Baseball", "July 2026", "All day", "Des Moines", "Principal Park", "baseball", "Boys"),
    ("IGHSAU State Softball", "July 2026", "All day", "Fort Dodge", "Harlan Rogers Park", "softball", "Girls"),
    ("IGHSAU State Volleyball", "November 2026", "All day", "Cedar Rapids", "Xtream Arena", "volleyball", "Girls"),
    ("IHSAA State Football", "November 2026", "All day", "Cedar Falls", "UNI-Dome", "football", "Boys"),
];

impl EventSource for HighSchoolTournaments {
    fn name(&self) -> &'static str {
        "high school state tournament"
    }

    fn load(&self, catalogue: &mut EventCatalogue) {
        for &(title, date, time, city, venue, subcategory, division) in HIGH_SCHOOL_EVENTS {
            let age_group = format!("High School {division}");
            catalogue.add(
                EventDraft::new(title, date, city, Category::HighSchoolSports, IHSAA)
                    .time(time)
                    .venue(venue)
                    .subcategory(subcategory)
                    .age_group(&age_group),
            );
        }
    }
}
