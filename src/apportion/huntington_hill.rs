use std::collections::HashSet;

use crate::{error::{Error, Result}, types::Jurisdiction};

/// Seats per jurisdiction, kept in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apportionment {
    seats: Vec<(String, u32)>,
}

impl Apportionment {
    /// Seats awarded to `name`, if it took part.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.seats.iter().find(|(n, _)| n == name).map(|&(_, s)| s)
    }

    /// (name, seats) pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.seats.iter().map(|(n, s)| (n.as_str(), *s))
    }

    #[inline] pub fn len(&self) -> usize { self.seats.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.seats.is_empty() }

    /// Sum of all awarded seats.
    #[inline] pub fn total(&self) -> u32 { self.seats.iter().map(|(_, s)| s).sum() }
}

/// Huntington-Hill priority of a jurisdiction currently holding `seats` seats.
#[inline]
pub fn priority(population: u64, seats: u32) -> f64 {
    let seats = seats as f64;
    population as f64 / (seats * (seats + 1.0)).sqrt()
}

/// Apportion `total_seats` across `jurisdictions` with the Huntington-Hill method.
///
/// Every jurisdiction starts with one seat. Each remaining seat goes to the jurisdiction
/// with the strictly largest priority; on an exact tie the one listed first wins.
pub fn huntington_hill(jurisdictions: &[Jurisdiction], total_seats: u32) -> Result<Apportionment> {
    if jurisdictions.is_empty() { return Err(Error::NoJurisdictions) }
    if (total_seats as usize) < jurisdictions.len() {
        return Err(Error::InsufficientSeats { seats: total_seats, jurisdictions: jurisdictions.len() });
    }

    let mut seen = HashSet::with_capacity(jurisdictions.len());
    for j in jurisdictions {
        if !seen.insert(j.name.as_str()) {
            return Err(Error::DuplicateJurisdiction(j.name.clone()));
        }
    }

    let mut seats = vec![1u32; jurisdictions.len()];
    let mut remaining = total_seats - jurisdictions.len() as u32;

    while remaining > 0 {
        let mut best = 0;
        let mut best_priority = f64::NEG_INFINITY;
        for (i, j) in jurisdictions.iter().enumerate() {
            let p = priority(j.population, seats[i]);
            if p > best_priority {
                best_priority = p;
                best = i;
            }
        }

        seats[best] += 1;
        remaining -= 1;
    }

    debug_assert_eq!(seats.iter().sum::<u32>(), total_seats, "seat count not conserved");

    Ok(Apportionment {
        seats: jurisdictions.iter().map(|j| j.name.clone()).zip(seats).collect(),
    })
}
