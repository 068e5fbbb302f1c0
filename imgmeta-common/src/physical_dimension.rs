/// Pixel density as stored in image headers
///
/// PNG's `pHYs` chunk gives pixels per meter, JFIF gives pixels per inch or
/// per centimeter. Both can also carry a unitless aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct PixelDensity {
    pub x: u32,
    pub y: u32,
    pub unit: DensityUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DensityUnit {
    /// The x/y values only define the pixel aspect ratio
    Aspect,
    PerInch,
    PerCentimeter,
    PerMeter,
}

impl DensityUnit {
    /// Factor to convert a density in this unit to dots per inch
    const fn dpi_factor(self) -> Option<f64> {
        match self {
            Self::Aspect => None,
            Self::PerInch => Some(1.),
            Self::PerCentimeter => Some(2.54),
            Self::PerMeter => Some(0.0254),
        }
    }
}

impl PixelDensity {
    pub fn new(x: u32, y: u32, unit: DensityUnit) -> Self {
        Self { x, y, unit }
    }

    /// Density in dots per inch, `None` for unitless densities
    ///
    /// ```
    /// # use imgmeta_common::physical_dimension::*;
    /// let density = PixelDensity::new(100, 100, DensityUnit::PerCentimeter);
    /// assert_eq!(density.dots_per_inch(), Some((254., 254.)));
    /// ```
    pub fn dots_per_inch(self) -> Option<(f64, f64)> {
        let factor = self.unit.dpi_factor()?;
        Some((f64::from(self.x) * factor, f64::from(self.y) * factor))
    }
}
