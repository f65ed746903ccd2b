//! Route data returned by every solver.
//!
//! A [`Route`] is an ordered list of [`Hop`]s in forward order. The first hop
//! is always the start marker `(0, 0, 0)`. A hop whose origin equals its
//! destination is a *stop*: the traveller halts at that port before moving on.
//! What a hop's `cost` means depends on the route's [`HopConvention`].

use serde::Serialize;

/// One move (or stop) along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub origin: usize,
    pub destination: usize,
    pub cost: u64,
}

impl Hop {
    #[inline]
    pub const fn new(origin: usize, destination: usize, cost: u64) -> Self {
        Self {
            origin,
            destination,
            cost,
        }
    }

    /// The `(0, 0, 0)` marker every non-empty route starts with.
    #[inline]
    pub const fn start() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub fn is_stop(&self) -> bool {
        self.origin == self.destination
    }
}

/// How to read [`Hop::cost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HopConvention {
    /// Cost of this move alone.
    Incremental,
    /// Total cost accrued on arrival at the hop's destination.
    Cumulative,
}

/// Ordered hops from port 0 to port N-1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub hops: Vec<Hop>,
    pub convention: HopConvention,
}

impl Route {
    pub fn new(hops: Vec<Hop>, convention: HopConvention) -> Self {
        Self { hops, convention }
    }

    /// Number of hops, stops and the start marker included.
    #[inline]
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Hops that actually move forward.
    pub fn travel_hops(&self) -> impl Iterator<Item = &Hop> + '_ {
        self.hops.iter().filter(|hop| !hop.is_stop())
    }

    /// Ports visited, starting at 0.
    pub fn ports(&self) -> Vec<usize> {
        if self.hops.is_empty() {
            return Vec::new();
        }
        std::iter::once(0)
            .chain(self.travel_hops().map(|hop| hop.destination))
            .collect()
    }

    /// Incremental cost of each travel hop, whatever the convention.
    pub fn increments(&self) -> Vec<u64> {
        match self.convention {
            HopConvention::Incremental => self.travel_hops().map(|hop| hop.cost).collect(),
            HopConvention::Cumulative => {
                let mut previous = 0u64;
                self.travel_hops()
                    .map(|hop| {
                        let delta = hop.cost.saturating_sub(previous);
                        previous = hop.cost;
                        delta
                    })
                    .collect()
            }
        }
    }

    /// Total cost of the route.
    pub fn total_cost(&self) -> u64 {
        match self.convention {
            HopConvention::Incremental => self.travel_hops().map(|hop| hop.cost).sum(),
            HopConvention::Cumulative => self.travel_hops().last().map_or(0, |hop| hop.cost),
        }
    }
}

/// A solver's answer: minimum cost, the route achieving it, and how much
/// work the strategy did to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub cost: u64,
    pub route: Route,
    /// Candidate sequences, recursive calls or table cells, per strategy.
    pub evaluations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_has_no_ports() {
        let r = Route::new(Vec::new(), HopConvention::Incremental);
        assert!(r.is_empty());
        assert!(r.ports().is_empty());
        assert_eq!(r.total_cost(), 0);
    }

    #[test]
    fn cumulative_increments_skip_stops() {
        let r = Route::new(
            vec![
                Hop::start(),
                Hop::new(0, 1, 3),
                Hop::new(1, 1, 3),
                Hop::new(1, 2, 7),
            ],
            HopConvention::Cumulative,
        );
        assert_eq!(r.len(), 4);
        assert_eq!(r.ports(), vec![0, 1, 2]);
        assert_eq!(r.increments(), vec![3, 4]);
        assert_eq!(r.total_cost(), 7);
    }

    #[test]
    fn incremental_total_is_sum() {
        let r = Route::new(
            vec![Hop::start(), Hop::new(0, 2, 5), Hop::new(2, 4, 6)],
            HopConvention::Incremental,
        );
        assert_eq!(r.increments(), vec![5, 6]);
        assert_eq!(r.total_cost(), 11);
        assert_eq!(r.ports(), vec![0, 2, 4]);
    }
}
