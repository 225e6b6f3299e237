use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Largest number of seats a single district elects.
pub const MAX_DISTRICT_SIZE: u32 = 6;

/// Districts of one magnitude within a jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictSizeGroup {
    pub size: u32,
    pub count: u32,
    pub representative_population: u64,
}

/// How a jurisdiction's seats are split into multi-member districts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictSizes {
    districts: u32,
    groups: BTreeMap<u32, DistrictSizeGroup>, // keyed by size
}

impl DistrictSizes {
    /// Rebuild from size → count and size → population tables (as stored in a report).
    /// Sizes missing a population entry get 0.
    pub fn from_tables(counts: &BTreeMap<u32, u32>, populations: &BTreeMap<u32, u64>) -> Self {
        let groups: BTreeMap<u32, DistrictSizeGroup> = counts.iter()
            .filter(|&(&size, &count)| size > 0 && count > 0)
            .map(|(&size, &count)| (size, DistrictSizeGroup {
                size,
                count,
                representative_population: populations.get(&size).copied().unwrap_or(0),
            }))
            .collect();
        let districts = groups.values().map(|g| g.count).sum();
        Self { districts, groups }
    }

    /// Total number of districts.
    #[inline] pub fn districts(&self) -> u32 { self.districts }

    /// Total seats across all districts.
    pub fn seats(&self) -> u32 { self.groups.values().map(|g| g.size * g.count).sum() }

    /// Groups in ascending size order.
    pub fn groups(&self) -> impl Iterator<Item = &DistrictSizeGroup> + Clone + '_ { self.groups.values() }

    #[inline] pub fn get(&self, size: u32) -> Option<&DistrictSizeGroup> { self.groups.get(&size) }

    #[inline] pub fn len(&self) -> usize { self.groups.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    #[inline] pub fn smallest(&self) -> Option<&DistrictSizeGroup> { self.groups.values().next() }

    #[inline] pub fn largest(&self) -> Option<&DistrictSizeGroup> { self.groups.values().next_back() }

    /// size → count table.
    pub fn count_table(&self) -> BTreeMap<u32, u32> {
        self.groups.values().map(|g| (g.size, g.count)).collect()
    }

    /// size → representative population table.
    pub fn population_table(&self) -> BTreeMap<u32, u64> {
        self.groups.values().map(|g| (g.size, g.representative_population)).collect()
    }
}

/// Split `seats` into districts of at most `MAX_DISTRICT_SIZE` seats.
#[inline]
pub fn classify(seats: u32, population: u64) -> Result<DistrictSizes> {
    classify_with_max(seats, population, MAX_DISTRICT_SIZE)
}

/// Split `seats` into districts of at most `max_size` seats.
///
/// Aims for `max(1, round(seats / max_size))` districts, sizing each in turn as
/// `round(remaining / slots_left)`. Seats still left once the target is reached form
/// extra districts, so the sizes always add up to `seats`.
pub fn classify_with_max(seats: u32, population: u64, max_size: u32) -> Result<DistrictSizes> {
    if seats == 0 || max_size == 0 { return Err(Error::InvalidSeats) }

    let target = ((seats as f64 / max_size as f64).round() as u32).max(1);
    let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
    let mut remaining = seats;

    for slot in 0..target {
        if remaining == 0 { break }
        let slots_left = (target - slot) as f64;
        let size = ((remaining as f64 / slots_left).round() as u32)
            .clamp(1, max_size)
            .min(remaining);
        *counts.entry(size).or_default() += 1;
        remaining -= size;
    }

    while remaining > 0 {
        let size = remaining.min(max_size);
        *counts.entry(size).or_default() += 1;
        remaining -= size;
    }

    let groups: BTreeMap<u32, DistrictSizeGroup> = counts.into_iter()
        .map(|(size, count)| {
            let share = (size * count) as f64 / seats as f64;
            let representative_population = (population as f64 * share / count as f64).round() as u64;
            (size, DistrictSizeGroup { size, count, representative_population })
        })
        .collect();
    let districts = groups.values().map(|g| g.count).sum();

    Ok(DistrictSizes { districts, groups })
}
