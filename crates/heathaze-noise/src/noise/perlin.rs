//! Cyclical Perlin noise over a wrap-around gradient grid.

use tracing::debug;

use super::gradient::{AngleSource, RandomAngles};
use super::{lerp, smoothstep, wrap_floor, wrap_index, Noise2D};
use crate::error::NoiseError;

/// Tolerance on gradient length accepted by [`PerlinNoise2D::from_gradients`].
const UNIT_TOLERANCE: f64 = 1e-9;

/// 2D gradient noise on a toroidal grid of unit gradients.
///
/// The field has period `width` along x and `height` along y. The grid is
/// fixed at construction and sampling never mutates it, so a field can be
/// shared across threads freely.
#[derive(Debug, Clone)]
pub struct PerlinNoise2D {
    width: u32,
    height: u32,
    /// Row-major, `height * width` unit vectors.
    gradients: Vec<[f64; 2]>,
}

impl PerlinNoise2D {
    /// Build a field, drawing one angle per cell from `source`.
    ///
    /// Cells are filled row by row, left to right.
    pub fn new<S>(width: u32, height: u32, source: &mut S) -> Result<Self, NoiseError>
    where
        S: AngleSource + ?Sized,
    {
        check_dimensions(width, height)?;

        let cells = width as usize * height as usize;
        let gradients = (0..cells)
            .map(|_| {
                let theta = source.next_angle();
                [theta.cos(), theta.sin()]
            })
            .collect();

        debug!(width, height, "built perlin gradient grid");
        Ok(Self {
            width,
            height,
            gradients,
        })
    }

    /// Build a reproducible field from a seed.
    pub fn seeded(width: u32, height: u32, seed: u32) -> Result<Self, NoiseError> {
        Self::new(width, height, &mut RandomAngles::seeded(seed))
    }

    /// Build a field seeded from system entropy.
    pub fn from_entropy(width: u32, height: u32) -> Result<Self, NoiseError> {
        Self::new(width, height, &mut RandomAngles::from_entropy())
    }

    /// Build a field from explicit row-major gradient vectors.
    ///
    /// Every vector must have unit length.
    pub fn from_gradients(
        width: u32,
        height: u32,
        gradients: Vec<[f64; 2]>,
    ) -> Result<Self, NoiseError> {
        check_dimensions(width, height)?;

        let cells = width as usize * height as usize;
        if gradients.len() != cells {
            return Err(NoiseError::gradient(
                gradients.len().min(cells),
                format!(
                    "expected {} gradients for a {}x{} grid, got {}",
                    cells,
                    width,
                    height,
                    gradients.len()
                ),
            ));
        }

        for (index, [gx, gy]) in gradients.iter().enumerate() {
            let len = (gx * gx + gy * gy).sqrt();
            if !len.is_finite() || (len - 1.0).abs() > UNIT_TOLERANCE {
                return Err(NoiseError::gradient(
                    index,
                    format!("length {} is not 1", len),
                ));
            }
        }

        Ok(Self {
            width,
            height,
            gradients,
        })
    }

    /// Horizontal node count, and the field's period along x.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Vertical node count, and the field's period along y.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Gradient stored for lattice point `(ix, iy)`, wrapped onto the grid.
    #[inline]
    pub fn gradient(&self, ix: i64, iy: i64) -> [f64; 2] {
        self.cell(wrap_index(ix, self.width), wrap_index(iy, self.height))
    }

    #[inline]
    fn cell(&self, col: usize, row: usize) -> [f64; 2] {
        self.gradients[row * self.width as usize + col]
    }

    /// Dot product of the cell's gradient with the offset from its corner.
    #[inline]
    fn corner(&self, col: usize, row: usize, dx: f64, dy: f64) -> f64 {
        let [gx, gy] = self.cell(col, row);
        gx * dx + gy * dy
    }
}

impl Noise2D for PerlinNoise2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();

        // Lattice corners are reduced onto the grid before any integer math,
        // so coordinates beyond the i64 range stay valid.
        let x0 = wrap_floor(xf, self.width);
        let y0 = wrap_floor(yf, self.height);
        let x1 = (x0 + 1) % self.width as usize;
        let y1 = (y0 + 1) % self.height as usize;

        let fx = x - xf;
        let fy = y - yf;

        let n00 = self.corner(x0, y0, fx, fy);
        let n10 = self.corner(x1, y0, fx - 1.0, fy);
        let n01 = self.corner(x0, y1, fx, fy - 1.0);
        let n11 = self.corner(x1, y1, fx - 1.0, fy - 1.0);

        let u = smoothstep(fx);
        let v = smoothstep(fy);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::FixedAngles;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            PerlinNoise2D::seeded(0, 4, 1),
            Err(NoiseError::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(PerlinNoise2D::seeded(4, 0, 1).is_err());
    }

    #[test]
    fn test_gradients_are_unit_length() {
        let noise = PerlinNoise2D::seeded(8, 5, 42).unwrap();
        for iy in 0..5 {
            for ix in 0..8 {
                let [gx, gy] = noise.gradient(ix, iy);
                assert!(((gx * gx + gy * gy).sqrt() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_gradient_lookup_wraps() {
        let noise = PerlinNoise2D::seeded(3, 2, 5).unwrap();
        assert_eq!(noise.gradient(-1, 0), noise.gradient(2, 0));
        assert_eq!(noise.gradient(4, -3), noise.gradient(1, 1));
    }

    #[test]
    fn test_cells_filled_row_major() {
        let mut source = FixedAngles::new(vec![0.0, FRAC_PI_2]);
        let noise = PerlinNoise2D::new(3, 1, &mut source).unwrap();
        // Third cell wraps back to the first angle.
        assert_eq!(noise.gradient(0, 0), [1.0, 0.0]);
        assert_eq!(noise.gradient(2, 0), [1.0, 0.0]);
        let [gx, gy] = noise.gradient(1, 0);
        assert!(gx.abs() < 1e-15 && (gy - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_from_gradients_rejects_non_unit() {
        let err = PerlinNoise2D::from_gradients(1, 2, vec![[1.0, 0.0], [2.0, 0.0]]).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidGradient { index: 1, .. }));
    }

    #[test]
    fn test_from_gradients_rejects_wrong_length() {
        let err = PerlinNoise2D::from_gradients(2, 2, vec![[1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidGradient { .. }));
    }

    #[test]
    fn test_single_cell_grid() {
        let noise = PerlinNoise2D::seeded(1, 1, 3).unwrap();
        let a = noise.sample(0.3, 0.7);
        let b = noise.sample(5.3, -2.3);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_huge_coordinates_do_not_overflow() {
        let noise = PerlinNoise2D::seeded(4, 4, 1).unwrap();
        for (x, y) in [
            (1.0e19, 0.5),
            (0.5, -1.0e300),
            (f64::MAX, f64::MAX),
            (f64::MIN, 0.25),
            (9.3e18, -9.3e18),
        ] {
            let v = noise.sample(x, y);
            assert!((-1.0..=1.0).contains(&v), "sample({}, {}) = {}", x, y, v);
        }
    }

    #[test]
    fn test_perlin_range() {
        let noise = PerlinNoise2D::seeded(16, 16, 42).unwrap();
        for i in 0..400 {
            for j in 0..400 {
                let v = noise.sample(i as f64 * 0.04, j as f64 * 0.04);
                assert!((-1.0..=1.0).contains(&v), "out of range: {}", v);
            }
        }
    }
}
