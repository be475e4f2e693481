/// Profile assembly: merge per-bin fronts and slugs into one breakpoint
/// sequence.
///
/// Bins are scanned from 2 upward (bin 1 never carries a front) and each
/// contributes its surface front, its slugs, and (when simulated) its
/// groundwater front. Insertion order matters: it is what lets the
/// equal-depth tie-break resolve coincident fronts toward the physically
/// wetter value.
use super::breakpoint::Profile;
use crate::domain::Domain;
use crate::error::ProfileResult;
use crate::retention::SoilBins;

/// Build the depth-ascending breakpoint profile for a domain snapshot.
///
/// Returns the profile together with the effective porosity (the saturated
/// bin's water content). The profile covers `[layer_top_depth,
/// layer_bottom_depth]`: it opens with the head entry at the layer top and
/// always closes with a terminal breakpoint at the layer bottom.
pub fn build_profile(domain: &Domain, bins: &SoilBins) -> ProfileResult<(Profile, f64)> {
    let num_bins = bins.num_bins();
    let effective_porosity = bins.water_content(num_bins);
    let mut profile = Profile::new(domain.layer_top_depth, effective_porosity);

    for ii in 2..=num_bins {
        // Surface front, only while it sits inside the layer.
        let front = domain.surface_front[ii];
        if front > domain.layer_top_depth && front <= domain.layer_bottom_depth {
            profile.insert(
                front,
                bins.water_content(ii),
                -bins.capillary_suction(ii),
                domain.yes_groundwater,
            )?;
        }

        // Slugs: the top boundary carries the previous bin's state (the
        // drier soil above the parcel), the bottom this bin's own.
        for slug in &domain.slugs[ii] {
            profile.insert(
                slug.top,
                bins.water_content(ii - 1),
                -bins.capillary_suction(ii - 1),
                domain.yes_groundwater,
            )?;
            profile.insert(
                slug.bot,
                bins.water_content(ii),
                -bins.capillary_suction(ii),
                domain.yes_groundwater,
            )?;
        }

        // Groundwater front rising from the water table.
        if domain.yes_groundwater && domain.groundwater_front[ii] > domain.layer_top_depth {
            profile.insert(
                domain.groundwater_front[ii],
                bins.water_content(ii - 1),
                -bins.capillary_suction(ii - 1),
                domain.yes_groundwater,
            )?;
        }
    }

    // Terminal breakpoint at the layer bottom. With groundwater the column
    // ends fully saturated at zero pressure head; without it, everything
    // below the deepest front sits at the undisturbed ambient state: the
    // last bin not exceeding the initial water content.
    if domain.yes_groundwater {
        profile.insert(domain.layer_bottom_depth, effective_porosity, 0.0, true)?;
    } else {
        let mut first_bin = 2;
        while first_bin <= num_bins
            && bins.water_content(first_bin) <= domain.initial_water_content
        {
            first_bin += 1;
        }
        profile.insert(
            domain.layer_bottom_depth,
            bins.water_content(first_bin - 1),
            -bins.capillary_suction(first_bin - 1),
            false,
        )?;
    }

    log::trace!("assembled profile with {} breakpoints", profile.points().len());
    Ok((profile, effective_porosity))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: assert two f64 values are close.
    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    fn two_bin_soil() -> SoilBins {
        // Bin 1 ambient, bin 2 wetted.
        SoilBins::from_tables(&[0.05, 0.20], &[3.0, 0.5]).unwrap()
    }

    fn three_bin_soil() -> SoilBins {
        SoilBins::from_tables(&[0.05, 0.20, 0.33], &[3.0, 0.5, 0.1]).unwrap()
    }

    fn dry_domain(bins: &SoilBins) -> Domain {
        Domain::new(bins, 0.0, 1.0, false, 0.05, 1.0)
    }

    // -- Single surface front --

    #[test]
    fn single_surface_front_profile() {
        let bins = two_bin_soil();
        let mut d = dry_domain(&bins);
        d.surface_front[2] = 0.3;

        let (profile, porosity) = build_profile(&d, &bins).unwrap();
        let pts = profile.points();

        assert_eq!(pts.len(), 3);
        // Head: layer top at saturation.
        assert_eq!(pts[0].depth, 0.0);
        assert_eq!(pts[0].theta, 0.20);
        assert_eq!(pts[0].pressure, 0.0);
        // The wetting front.
        assert_eq!(pts[1].depth, 0.3);
        assert_eq!(pts[1].theta, 0.20);
        assert_approx(pts[1].pressure, -0.5, 1e-12);
        // Terminal: ambient state of bin 1 (the first bin wetter than
        // ambient is bin 2).
        assert_eq!(pts[2].depth, 1.0);
        assert_eq!(pts[2].theta, 0.05);
        assert_approx(pts[2].pressure, -3.0, 1e-12);

        assert_eq!(porosity, 0.20);
    }

    #[test]
    fn front_at_layer_top_is_excluded() {
        let bins = two_bin_soil();
        let d = dry_domain(&bins);
        // Fresh domain: all fronts at the top, nothing penetrated yet.
        let (profile, _) = build_profile(&d, &bins).unwrap();
        assert_eq!(profile.points().len(), 2); // head + terminal only
    }

    #[test]
    fn front_below_layer_bottom_is_excluded() {
        let bins = two_bin_soil();
        let mut d = dry_domain(&bins);
        d.surface_front[2] = 1.5;
        let (profile, _) = build_profile(&d, &bins).unwrap();
        assert_eq!(profile.points().len(), 2);
    }

    #[test]
    fn front_exactly_at_bottom_is_included() {
        let bins = two_bin_soil();
        let mut d = dry_domain(&bins);
        d.surface_front[2] = 1.0;
        let (profile, _) = build_profile(&d, &bins).unwrap();
        // The front merges with the terminal depth; the wetter front value
        // wins the tie-break.
        let pts = profile.points();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1].depth, 1.0);
        assert_eq!(pts[1].theta, 0.20);
    }

    // -- Groundwater front --

    #[test]
    fn groundwater_front_profile() {
        let bins = two_bin_soil();
        let mut d = Domain::new(&bins, 0.0, 1.0, true, 0.05, 1.0);
        d.groundwater_front[2] = 0.8;

        let (profile, _) = build_profile(&d, &bins).unwrap();
        let pts = profile.points();

        assert_eq!(pts.len(), 3);
        // Above the groundwater front of bin 2: bin 1's state.
        assert_eq!(pts[1].depth, 0.8);
        assert_eq!(pts[1].theta, 0.05);
        assert_approx(pts[1].pressure, -3.0, 1e-12);
        // Terminal: full saturation, zero pressure head.
        assert_eq!(pts[2].depth, 1.0);
        assert_eq!(pts[2].theta, 0.20);
        assert_eq!(pts[2].pressure, 0.0);
    }

    #[test]
    fn groundwater_front_above_layer_top_is_excluded() {
        let bins = two_bin_soil();
        let mut d = Domain::new(&bins, 0.0, 1.0, true, 0.05, 1.0);
        d.groundwater_front[2] = -0.5; // capillary rise beyond the layer
        let (profile, _) = build_profile(&d, &bins).unwrap();
        assert_eq!(profile.points().len(), 2);
    }

    // -- Slugs --

    #[test]
    fn two_slugs_alternate_bin_values() {
        let bins = three_bin_soil();
        let mut d = dry_domain(&bins);
        d.push_slug(3, 0.2, 0.25);
        d.push_slug(3, 0.4, 0.45);

        let (profile, _) = build_profile(&d, &bins).unwrap();
        let pts = profile.points();

        assert_eq!(pts.len(), 6);
        let expect = [
            (0.2, 0.20, -0.5),  // slug top: bin 2 state above the parcel
            (0.25, 0.33, -0.1), // slug bottom: bin 3's own state
            (0.4, 0.20, -0.5),
            (0.45, 0.33, -0.1),
        ];
        for (k, &(depth, theta, pressure)) in expect.iter().enumerate() {
            assert_eq!(pts[k + 1].depth, depth);
            assert_eq!(pts[k + 1].theta, theta);
            assert_approx(pts[k + 1].pressure, pressure, 1e-12);
        }
        // Strictly ordered throughout.
        assert!(pts.windows(2).all(|w| w[0].depth < w[1].depth));
    }

    #[test]
    fn slugs_in_creation_order_still_sort_by_depth() {
        let bins = three_bin_soil();
        let mut d = dry_domain(&bins);
        // Deeper slug created first.
        d.push_slug(3, 0.4, 0.45);
        d.push_slug(3, 0.2, 0.25);

        let (profile, _) = build_profile(&d, &bins).unwrap();
        let depths: Vec<f64> = profile.points().iter().map(|p| p.depth).collect();
        assert_eq!(depths, vec![0.0, 0.2, 0.25, 0.4, 0.45, 1.0]);
    }

    // -- Terminal breakpoint / ambient scan --

    #[test]
    fn ambient_scan_picks_last_bin_at_or_below_ambient() {
        let bins = three_bin_soil();
        let mut d = dry_domain(&bins);
        d.initial_water_content = 0.20; // bins 1 and 2 at or below ambient
        d.surface_front[3] = 0.3;

        let (profile, _) = build_profile(&d, &bins).unwrap();
        let last = profile.last();
        assert_eq!(last.depth, 1.0);
        assert_eq!(last.theta, 0.20);
        assert_approx(last.pressure, -0.5, 1e-12);
    }

    #[test]
    fn ambient_above_all_bins_terminates_at_saturation() {
        let bins = three_bin_soil();
        let mut d = dry_domain(&bins);
        d.initial_water_content = 0.5; // wetter than every bin
        let (profile, _) = build_profile(&d, &bins).unwrap();
        assert_eq!(profile.last().theta, 0.33);
    }

    #[test]
    fn terminal_always_at_layer_bottom() {
        let bins = three_bin_soil();
        for yes_groundwater in [false, true] {
            let d = Domain::new(&bins, 0.0, 1.0, yes_groundwater, 0.05, 1.0);
            let (profile, _) = build_profile(&d, &bins).unwrap();
            assert_eq!(profile.last().depth, 1.0);
            for p in profile.points() {
                assert!(p.depth >= 0.0 && p.depth <= 1.0);
            }
        }
    }

    // -- Coincident fronts --

    #[test]
    fn coincident_fronts_collapse_to_wetter_value() {
        let bins = three_bin_soil();
        let mut d = dry_domain(&bins);
        d.surface_front[2] = 0.3;
        d.surface_front[3] = 0.3;

        let (profile, _) = build_profile(&d, &bins).unwrap();
        let pts = profile.points();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1].depth, 0.3);
        assert_eq!(pts[1].theta, 0.33); // bin 3 wins
        assert_approx(pts[1].pressure, -0.1, 1e-12);
    }

    // -- Determinism --

    #[test]
    fn rebuild_is_bit_identical() {
        let bins = three_bin_soil();
        let mut d = dry_domain(&bins);
        d.surface_front[2] = 0.7;
        d.surface_front[3] = 0.3;
        d.push_slug(3, 0.35, 0.42);

        let (a, pa) = build_profile(&d, &bins).unwrap();
        let (b, pb) = build_profile(&d, &bins).unwrap();
        assert_eq!(pa, pb);
        assert_eq!(a.points(), b.points());
    }
}
