//! Literal event tables, one [`EventSource`] per provider.

mod attractions;
mod community;
mod fairs;
mod races;
mod sports;

use crate::catalogue::EventCatalogue;

pub use attractions::{Adventureland, FamilyAttractions};
pub use community::{
    AnkenyChamber, CedarRapids, DesMoinesMetro, DubuqueChamber, SiouxCity, StatewideFestivals,
};
pub use fairs::CountyFairs;
pub use races::MajorRaces;
pub use sports::{HighSchoolTournaments, IowaEventsCenter, IowaHawkeyes, TbkSportsComplex, XtreamArena};

/// A provider of catalogue entries.
pub trait EventSource {
    /// Human readable provider name used in progress logs.
    fn name(&self) -> &'static str;

    /// Submits every entry of this provider to the catalogue.
    fn load(&self, catalogue: &mut EventCatalogue);
}

/// Every shipped provider, in load order. Earlier providers win on duplicates.
pub fn default_sources() -> Vec<Box<dyn EventSource>> {
    vec![
        Box::new(TbkSportsComplex),
        Box::new(XtreamArena),
        Box::new(IowaEventsCenter),
        Box::new(Adventureland),
        Box::new(MajorRaces),
        Box::new(CountyFairs),
        Box::new(CedarRapids),
        Box::new(SiouxCity),
        Box::new(DubuqueChamber),
        Box::new(DesMoinesMetro),
        Box::new(AnkenyChamber),
        Box::new(StatewideFestivals),
        Box::new(IowaHawkeyes),
        Box::new(HighSchoolTournaments),
        Box::new(FamilyAttractions),
    ]
}
