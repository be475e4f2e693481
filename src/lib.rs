/// wetfront — bin/slug soil-moisture profile rendering.
///
/// Renders the sparse per-bin state of a finite water-content infiltration
/// domain (surface wetting fronts, saturated slugs, groundwater fronts)
/// into a single depth-ordered, piecewise-constant profile of water content
/// and pressure head, and resamples that profile onto an arbitrary fixed
/// 1-D mesh. Front advancement itself lives in the timestep routine that
/// mutates the [`domain::Domain`] between renders.
pub mod domain;
pub mod epsilon;
pub mod error;
pub mod profile;
pub mod retention;

pub use domain::{Domain, Slug};
pub use error::{ProfileError, ProfileResult};
pub use profile::{render_into, Breakpoint, Profile};
pub use retention::{BrooksCorey, RetentionCurve, SoilBins, VanGenuchten};
