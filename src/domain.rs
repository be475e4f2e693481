/// Infiltration domain snapshot: per-bin wetting fronts and saturated slugs.
///
/// The domain is advanced in time by an external timestep routine; profile
/// rendering reads it as a frozen snapshot and never mutates it. Callers
/// serialize advancement and rendering on the same instance. The shared
/// bin parameter table ([`SoilBins`]) is owned outside the domain and passed
/// alongside it to every operation.
use smallvec::SmallVec;

use crate::retention::SoilBins;

/// A saturated parcel of water inside one bin, bounded above by drier soil
/// and below by the bin's own wetting front. Depths in meters, positive
/// downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slug {
    pub top: f64,
    pub bot: f64,
}

/// Slugs owned by one bin, ordered by creation time, not by depth.
pub type SlugList = SmallVec<[Slug; 2]>;

/// Snapshot of the bin/slug infiltration state for one soil layer.
///
/// Front and slug arrays are 1-based like the bin table: index 0 is padding
/// and bin 1, which never carries a front, is skipped by the renderer.
#[derive(Debug, Clone)]
pub struct Domain {
    pub layer_top_depth: f64,
    pub layer_bottom_depth: f64,
    /// Depth of each bin's wetting front measured from the surface.
    pub surface_front: Vec<f64>,
    /// Depth of each bin's wetting front rising from the water table;
    /// meaningful only when groundwater is simulated.
    pub groundwater_front: Vec<f64>,
    /// Per-bin slug collections.
    pub slugs: Vec<SlugList>,
    pub yes_groundwater: bool,
    /// Ambient water content below the deepest front when groundwater is
    /// not simulated.
    pub initial_water_content: f64,
}

impl Domain {
    /// Create a domain at rest: surface fronts at the layer top, no slugs,
    /// and (with groundwater) groundwater fronts at capillary-fringe
    /// equilibrium above the water table.
    pub fn new(
        bins: &SoilBins,
        layer_top_depth: f64,
        layer_bottom_depth: f64,
        yes_groundwater: bool,
        initial_water_content: f64,
        water_table: f64,
    ) -> Self {
        let n = bins.num_bins();
        let mut groundwater_front = vec![layer_bottom_depth; n + 1];
        if yes_groundwater {
            for ii in 1..=n {
                groundwater_front[ii] = water_table - bins.capillary_suction(ii);
            }
        }

        Self {
            layer_top_depth,
            layer_bottom_depth,
            surface_front: vec![layer_top_depth; n + 1],
            groundwater_front,
            slugs: vec![SlugList::new(); n + 1],
            yes_groundwater,
            initial_water_content,
        }
    }

    pub fn num_bins(&self) -> usize {
        self.surface_front.len() - 1
    }

    /// Append a slug to a bin's collection.
    pub fn push_slug(&mut self, bin: usize, top: f64, bot: f64) {
        self.slugs[bin].push(Slug { top, bot });
    }

    /// Panic if the snapshot violates the orderings the renderer relies on:
    /// bounds ordered, surface fronts no deeper than the next-drier bin's,
    /// groundwater fronts no shallower than the next-drier bin's, slugs
    /// ordered top-above-bottom inside the layer.
    ///
    /// Debug aid for the seam with the timestep routine; the renderer itself
    /// never validates its input.
    pub fn check_invariants(&self) {
        assert!(
            self.layer_top_depth < self.layer_bottom_depth,
            "layer top {} must lie above layer bottom {}",
            self.layer_top_depth,
            self.layer_bottom_depth
        );

        let n = self.num_bins();
        for ii in 2..=n {
            let front = self.surface_front[ii];
            assert!(
                front >= self.layer_top_depth && front <= self.layer_bottom_depth,
                "surface front of bin {ii} at {front} outside the layer"
            );
            if ii > 2 {
                assert!(
                    front <= self.surface_front[ii - 1],
                    "surface front of bin {ii} deeper than bin {}",
                    ii - 1
                );
            }
            if self.yes_groundwater {
                let gw = self.groundwater_front[ii];
                assert!(
                    gw <= self.layer_bottom_depth,
                    "groundwater front of bin {ii} at {gw} below the layer"
                );
                if ii > 2 {
                    assert!(
                        gw >= self.groundwater_front[ii - 1],
                        "groundwater front of bin {ii} shallower than bin {}",
                        ii - 1
                    );
                }
            }
            for slug in &self.slugs[ii] {
                assert!(
                    slug.top < slug.bot,
                    "slug in bin {ii} has top {} at or below bottom {}",
                    slug.top,
                    slug.bot
                );
                assert!(
                    slug.top >= self.layer_top_depth && slug.bot <= self.layer_bottom_depth,
                    "slug [{}, {}] in bin {ii} outside the layer",
                    slug.top,
                    slug.bot
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retention::{RetentionCurve, VanGenuchten};

    fn test_bins() -> SoilBins {
        let curve = RetentionCurve::VanGenuchten(VanGenuchten::new(3.6, 1.56).unwrap());
        SoilBins::discretize(curve, 10, 0.43, 0.03).unwrap()
    }

    // -- Construction --

    #[test]
    fn new_starts_fronts_at_layer_top() {
        let bins = test_bins();
        let d = Domain::new(&bins, 0.0, 1.5, false, 0.08, 1.5);
        assert_eq!(d.num_bins(), 10);
        for ii in 1..=10 {
            assert_eq!(d.surface_front[ii], 0.0);
            assert!(d.slugs[ii].is_empty());
        }
    }

    #[test]
    fn new_groundwater_fronts_at_capillary_equilibrium() {
        let bins = test_bins();
        let d = Domain::new(&bins, 0.0, 1.5, true, 0.08, 1.5);
        for ii in 1..=10 {
            assert_eq!(d.groundwater_front[ii], 1.5 - bins.capillary_suction(ii));
        }
        // Wetter bins sit closer to the water table.
        for ii in 2..=10 {
            assert!(d.groundwater_front[ii] >= d.groundwater_front[ii - 1]);
        }
    }

    #[test]
    fn push_slug_appends_in_creation_order() {
        let bins = test_bins();
        let mut d = Domain::new(&bins, 0.0, 1.5, false, 0.08, 1.5);
        d.push_slug(3, 0.4, 0.45);
        d.push_slug(3, 0.2, 0.25);
        assert_eq!(d.slugs[3].len(), 2);
        assert_eq!(d.slugs[3][0], Slug { top: 0.4, bot: 0.45 });
        assert_eq!(d.slugs[3][1], Slug { top: 0.2, bot: 0.25 });
    }

    // -- Invariants --

    #[test]
    fn fresh_domain_passes_invariants() {
        let bins = test_bins();
        Domain::new(&bins, 0.0, 1.5, false, 0.08, 1.5).check_invariants();
        Domain::new(&bins, 0.0, 1.5, true, 0.08, 1.5).check_invariants();
    }

    #[test]
    fn advanced_fronts_pass_invariants() {
        let bins = test_bins();
        let mut d = Domain::new(&bins, 0.0, 1.5, false, 0.08, 1.5);
        // Drier bins run deeper.
        for ii in 2..=10 {
            d.surface_front[ii] = 1.0 - 0.08 * ii as f64;
        }
        d.push_slug(5, 0.9, 1.0);
        d.check_invariants();
    }

    #[test]
    #[should_panic(expected = "deeper than bin")]
    fn inverted_surface_fronts_fail_invariants() {
        let bins = test_bins();
        let mut d = Domain::new(&bins, 0.0, 1.5, false, 0.08, 1.5);
        d.surface_front[2] = 0.2;
        d.surface_front[3] = 0.6;
        d.check_invariants();
    }

    #[test]
    #[should_panic(expected = "top")]
    fn inverted_slug_fails_invariants() {
        let bins = test_bins();
        let mut d = Domain::new(&bins, 0.0, 1.5, false, 0.08, 1.5);
        d.push_slug(4, 0.5, 0.4);
        d.check_invariants();
    }

    #[test]
    #[should_panic(expected = "outside the layer")]
    fn out_of_layer_front_fails_invariants() {
        let bins = test_bins();
        let mut d = Domain::new(&bins, 0.0, 1.5, false, 0.08, 1.5);
        d.surface_front[2] = 2.0;
        d.check_invariants();
    }
}
