use std::collections::HashMap;

use crate::types::Event;

const TOP_CITIES: usize = 15;
const SAMPLE_SIZE: usize = 10;

/// Console overview of a finished catalogue.
#[derive(Debug)]
pub struct CatalogueSummary {
    pub total: usize,
    pub by_category: Vec<(String, usize)>,
    pub top_cities: Vec<(String, usize)>,
    pub sample: Vec<String>,
}

impl CatalogueSummary {
    pub fn from_events(events: &[Event]) -> CatalogueSummary {
        let mut top_cities = count_descending(events.iter().filter_map(|e| e.city.as_deref()));
        top_cities.truncate(TOP_CITIES);

        CatalogueSummary {
            total: events.len(),
            by_category: count_descending(events.iter().map(|e| e.category.as_str())),
            top_cities,
            sample: events
                .iter()
                .take(SAMPLE_SIZE)
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// Counts occurrences, most frequent first. Ties keep first-seen order.
fn count_descending<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        let i = *index.entry(key).or_insert_with(|| {
            counts.push((key.to_string(), 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

impl std::fmt::Display for CatalogueSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "\n{rule}")?;
        writeln!(f, "IOWA EVENTS CATALOGUE")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total events: {}", self.total)?;

        writeln!(f, "\nBy Category:")?;
        for (category, count) in &self.by_category {
            writeln!(f, "  {}: {}", category, count)?;
        }

        writeln!(f, "\nTop {} Cities:", TOP_CITIES)?;
        for (city, count) in &self.top_cities {
            writeln!(f, "  {}: {}", city, count)?;
        }

        writeln!(f, "\nSample Events:")?;
        for line in &self.sample {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}
