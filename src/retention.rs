/// Soil-moisture retention curves and their bin discretization.
///
/// A retention curve relates capillary suction to effective saturation.
/// `SoilBins` discretizes a curve into the shared per-bin parameter table
/// the profile renderer reads: one water content and one capillary suction
/// per bin, from the driest active bin up to full saturation. The table is
/// owned outside the domain and passed alongside it, since several layers
/// may share one soil.

/// Van Genuchten retention model.
///
/// Suction is expressed as a positive head [m]; `alpha` is in [1/m] and
/// `n` (> 1) is the dimensionless shape parameter, with `m = 1 - 1/n`.
#[derive(Debug, Clone, Copy)]
pub struct VanGenuchten {
    pub alpha: f64,
    pub n: f64,
}

impl VanGenuchten {
    pub fn new(alpha: f64, n: f64) -> Result<Self, String> {
        if alpha <= 0.0 {
            return Err(format!("van Genuchten alpha must be positive, got {alpha}"));
        }
        if n <= 1.0 {
            return Err(format!("van Genuchten n must exceed 1, got {n}"));
        }
        Ok(Self { alpha, n })
    }

    fn m(&self) -> f64 {
        1.0 - 1.0 / self.n
    }

    /// Capillary suction head at effective saturation `se` in (0, 1].
    ///
    /// Zero at full saturation.
    pub fn suction(&self, se: f64) -> f64 {
        (se.powf(-1.0 / self.m()) - 1.0).powf(1.0 / self.n) / self.alpha
    }

    /// Water content at a positive suction head (the forward curve).
    ///
    /// Used to derive an initial water content from an initial tension.
    pub fn water_content_at_suction(
        &self,
        suction: f64,
        porosity: f64,
        residual_water_content: f64,
    ) -> f64 {
        if suction <= 0.0 {
            return porosity;
        }
        let ah = (self.alpha * suction).powf(self.n);
        residual_water_content + (porosity - residual_water_content) * (1.0 + ah).powf(-self.m())
    }
}

/// Brooks–Corey retention model.
///
/// `psi_b` is the bubbling pressure head [m], `lambda` the pore-size
/// distribution index. Suction at full saturation is `psi_b`, not zero.
#[derive(Debug, Clone, Copy)]
pub struct BrooksCorey {
    pub lambda: f64,
    pub psi_b: f64,
}

impl BrooksCorey {
    pub fn new(lambda: f64, psi_b: f64) -> Result<Self, String> {
        if lambda <= 0.0 {
            return Err(format!("Brooks-Corey lambda must be positive, got {lambda}"));
        }
        if psi_b <= 0.0 {
            return Err(format!(
                "Brooks-Corey bubbling pressure must be positive, got {psi_b}"
            ));
        }
        Ok(Self { lambda, psi_b })
    }

    /// Capillary suction head at effective saturation `se` in (0, 1].
    pub fn suction(&self, se: f64) -> f64 {
        self.psi_b * se.powf(-1.0 / self.lambda)
    }
}

/// Retention model selection, matching the original parameter set which
/// carries both models and a switch.
#[derive(Debug, Clone, Copy)]
pub enum RetentionCurve {
    VanGenuchten(VanGenuchten),
    BrooksCorey(BrooksCorey),
}

impl RetentionCurve {
    /// Capillary suction head at effective saturation `se` in (0, 1].
    pub fn suction(&self, se: f64) -> f64 {
        match self {
            RetentionCurve::VanGenuchten(vg) => vg.suction(se),
            RetentionCurve::BrooksCorey(bc) => bc.suction(se),
        }
    }
}

/// Shared per-bin parameter table: water content and capillary suction for
/// bins 1..=num_bins, driest to fully saturated.
///
/// Bin numbers index directly (a leading padding entry keeps the 1-based
/// convention of the bin arrays); bin `num_bins` holds the effective
/// porosity. Water content rises strictly with bin number, suction falls.
#[derive(Debug, Clone)]
pub struct SoilBins {
    num_bins: usize,
    water_content: Vec<f64>,
    capillary_suction: Vec<f64>,
}

impl SoilBins {
    /// Discretize a retention curve into `num_bins` bins.
    ///
    /// Water contents are evenly spaced between the residual water content
    /// and the porosity; each bin's suction is the curve evaluated at that
    /// bin's effective saturation `bin / num_bins`.
    pub fn discretize(
        curve: RetentionCurve,
        num_bins: usize,
        porosity: f64,
        residual_water_content: f64,
    ) -> Result<Self, String> {
        if num_bins < 2 {
            return Err(format!("need at least 2 bins, got {num_bins}"));
        }
        if !(porosity > 0.0 && porosity < 1.0) {
            return Err(format!("porosity must lie in (0, 1), got {porosity}"));
        }
        if !(residual_water_content >= 0.0 && residual_water_content < porosity) {
            return Err(format!(
                "residual water content must lie in [0, porosity), got {residual_water_content}"
            ));
        }

        let mut water_content = vec![0.0; num_bins + 1];
        let mut capillary_suction = vec![0.0; num_bins + 1];
        for ii in 1..=num_bins {
            let se = ii as f64 / num_bins as f64;
            water_content[ii] = residual_water_content + se * (porosity - residual_water_content);
            capillary_suction[ii] = curve.suction(se);
        }

        Ok(Self {
            num_bins,
            water_content,
            capillary_suction,
        })
    }

    /// Build the table from externally computed values, driest bin first.
    ///
    /// Both slices are 0-based with one entry per bin; the 1-based bin
    /// numbering is applied internally.
    pub fn from_tables(water_content: &[f64], capillary_suction: &[f64]) -> Result<Self, String> {
        if water_content.len() != capillary_suction.len() {
            return Err(format!(
                "expected matching table lengths, got {} and {}",
                water_content.len(),
                capillary_suction.len()
            ));
        }
        let num_bins = water_content.len();
        if num_bins < 2 {
            return Err(format!("need at least 2 bins, got {num_bins}"));
        }
        if water_content.windows(2).any(|w| w[0] >= w[1]) {
            return Err("bin water contents must be strictly increasing".to_string());
        }

        let mut wc = Vec::with_capacity(num_bins + 1);
        let mut cs = Vec::with_capacity(num_bins + 1);
        wc.push(0.0);
        cs.push(0.0);
        wc.extend_from_slice(water_content);
        cs.extend_from_slice(capillary_suction);

        Ok(Self {
            num_bins,
            water_content: wc,
            capillary_suction: cs,
        })
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Water content of a bin, 1-based.
    pub fn water_content(&self, bin: usize) -> f64 {
        self.water_content[bin]
    }

    /// Capillary suction of a bin, 1-based.
    pub fn capillary_suction(&self, bin: usize) -> f64 {
        self.capillary_suction[bin]
    }

    /// Water content of the fully saturated bin.
    pub fn effective_porosity(&self) -> f64 {
        self.water_content[self.num_bins]
    }
}
