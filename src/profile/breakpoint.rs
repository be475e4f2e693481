/// Breakpoint sequence for the assembled moisture profile.
///
/// The working representation of one render call: a depth-ascending,
/// uniformly owned sequence of (depth, water content, pressure head)
/// samples. Index 0 is a synthetic head entry seeded at the layer top with
/// the saturated water content; it anchors the scan so every candidate
/// lands at or after it. The whole sequence is built and dropped inside a
/// single render call.
use crate::epsilon::{epsilon_equal, epsilon_greater};
use crate::error::ProfileResult;

/// One sample of the piecewise-constant profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Depth [m], positive downward.
    pub depth: f64,
    /// Water content at and above this depth, down from the previous entry.
    pub theta: f64,
    /// Pressure head [m]; the negative of capillary suction, zero at full
    /// saturation.
    pub pressure: f64,
}

/// Depth-ascending breakpoint sequence with a synthetic head entry.
///
/// Depths are strictly increasing between consecutive entries; the insert
/// rules collapse equal-depth contributions rather than storing them twice.
#[derive(Debug, Clone)]
pub struct Profile {
    points: Vec<Breakpoint>,
}

impl Profile {
    /// Create a profile holding only the head entry.
    pub fn new(top_depth: f64, saturated_theta: f64) -> Self {
        Self {
            points: vec![Breakpoint {
                depth: top_depth,
                theta: saturated_theta,
                pressure: 0.0,
            }],
        }
    }

    /// Insert a candidate breakpoint, keeping depths strictly increasing.
    ///
    /// The candidate is placed after the last entry whose depth does not
    /// exceed its own. Strictly deeper than that entry (beyond tolerance),
    /// it is spliced in as a new entry. At equal depth within tolerance and
    /// with groundwater disabled, a wetter candidate overwrites the entry in
    /// place, collapsing coincident fronts toward the wetter value; with
    /// groundwater enabled the existing entry wins, since groundwater
    /// candidates arrive already in wetting order. Every other equal-depth
    /// candidate is dropped.
    pub fn insert(
        &mut self,
        depth: f64,
        theta: f64,
        pressure: f64,
        yes_groundwater: bool,
    ) -> ProfileResult<()> {
        let rear = self
            .points
            .partition_point(|p| p.depth <= depth)
            .saturating_sub(1);

        if epsilon_greater(depth, self.points[rear].depth) {
            self.points.try_reserve(1)?;
            self.points.insert(
                rear + 1,
                Breakpoint {
                    depth,
                    theta,
                    pressure,
                },
            );
        } else if !yes_groundwater
            && epsilon_equal(depth, self.points[rear].depth)
            && self.points[rear].theta < theta
        {
            self.points[rear].theta = theta;
            self.points[rear].pressure = pressure;
        }
        Ok(())
    }

    /// All entries in depth order, head included.
    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    /// Deepest entry; the terminal breakpoint once assembly has finished.
    pub fn last(&self) -> &Breakpoint {
        &self.points[self.points.len() - 1]
    }
}
