/// Depth-profile rendering for bin/slug infiltration domains.
///
/// - `breakpoint`: the depth-ascending working sequence and its insert rules
/// - `assembler`: merge fronts and slugs into one breakpoint sequence
/// - `resampler`: sample the sequence onto a fixed 1-D mesh
/// - `render_into()`: both steps in one call
pub mod assembler;
pub mod breakpoint;
pub mod resampler;

pub use assembler::build_profile;
pub use breakpoint::{Breakpoint, Profile};
pub use resampler::resample_onto_mesh;

use crate::domain::Domain;
use crate::error::ProfileResult;
use crate::retention::SoilBins;

/// Render a domain snapshot into per-element water content and pressure
/// head, and return the effective porosity.
///
/// Assembles the breakpoint profile for the snapshot and resamples it onto
/// `mesh_depths` (ascending lower-boundary depths, one per element, none
/// below the layer bottom). Output buffers must match the mesh length and
/// must not be trusted when an error is returned. The call reads the domain
/// only; its working storage is dropped before returning on every path.
pub fn render_into(
    domain: &Domain,
    bins: &SoilBins,
    mesh_depths: &[f64],
    water_content: &mut [f64],
    pressure_head: &mut [f64],
) -> ProfileResult<f64> {
    let (profile, effective_porosity) = build_profile(domain, bins)?;
    resample_onto_mesh(&profile, mesh_depths, water_content, pressure_head);
    log::debug!(
        "rendered {} breakpoints onto {} mesh elements",
        profile.points().len(),
        mesh_depths.len()
    );
    Ok(effective_porosity)
}
