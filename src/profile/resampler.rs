/// Mesh resampling: sample the breakpoint profile onto a fixed 1-D mesh.
///
/// Piecewise-constant rule: each mesh element takes the values of the first
/// breakpoint at or below its lower-boundary depth. A single cursor walks
/// the mesh once, so the merge is O(mesh + breakpoints).
use super::breakpoint::Profile;

/// Sample `profile` onto `mesh_depths`, writing one water content and one
/// pressure head per element.
///
/// `mesh_depths` holds each element's lower-boundary depth, ascending. The
/// comparison is inclusive: an element whose boundary coincides with a
/// breakpoint receives that breakpoint's values. Elements deeper than the
/// final breakpoint keep whatever values the caller left in the output
/// buffers; the mesh must not extend below the layer bottom, where the
/// terminal breakpoint always sits.
pub fn resample_onto_mesh(
    profile: &Profile,
    mesh_depths: &[f64],
    water_content: &mut [f64],
    pressure_head: &mut [f64],
) {
    assert_eq!(
        mesh_depths.len(),
        water_content.len(),
        "mesh and water content must have the same length"
    );
    assert_eq!(
        mesh_depths.len(),
        pressure_head.len(),
        "mesh and pressure head must have the same length"
    );
    debug_assert!(
        mesh_depths.last().map_or(true, |&z| z <= profile.last().depth),
        "mesh extends below the final breakpoint"
    );

    let mut jj = 0;
    for point in profile.points() {
        while jj < mesh_depths.len() && mesh_depths[jj] <= point.depth {
            water_content[jj] = point.theta;
            pressure_head[jj] = point.pressure;
            jj += 1;
        }
        if jj == mesh_depths.len() {
            break;
        }
    }
}
