//! Hookean springs joining two lattice particles.

use crate::float::Float;
use crate::vec::Vec3;

/// Which part of the lattice topology a spring belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpringKind {
    /// Axis-aligned neighbour.
    Structural,
    /// Face diagonal.
    Shear,
    /// Body diagonal of a 2x2x2 cell.
    Bend,
    /// Added by hand through `SoftBody::add_spring`.
    Custom,
}

/// A damped spring between particles `a` and `b`.
///
/// `stiffness` and `damping` are copied from the body at construction time;
/// changing the body's globals afterwards does not touch existing springs.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
    pub damping: F,
    pub kind: SpringKind,
}

impl<F: Float> Spring<F> {
    /// Build a spring whose rest length is the current distance between the
    /// two positions.
    pub fn between(
        a: usize,
        b: usize,
        pos_a: Vec3<F>,
        pos_b: Vec3<F>,
        stiffness: F,
        damping: F,
        kind: SpringKind,
    ) -> Self {
        Spring {
            a,
            b,
            rest_length: pos_a.distance(pos_b),
            stiffness,
            damping,
            kind,
        }
    }

    /// Current length given a position snapshot.
    pub fn length(&self, positions: &[Vec3<F>]) -> F {
        positions[self.a].distance(positions[self.b])
    }

    /// Signed strain `(length - rest) / rest`. Positive is stretched.
    ///
    /// Zero-rest springs report no strain.
    pub fn strain(&self, positions: &[Vec3<F>]) -> F {
        self.strain_between(positions[self.a], positions[self.b])
    }

    /// Strain for explicit endpoint positions.
    pub fn strain_between(&self, pos_a: Vec3<F>, pos_b: Vec3<F>) -> F {
        if self.rest_length.is_near_zero(F::from_f32(1e-6)) {
            return F::zero();
        }
        (pos_a.distance(pos_b) - self.rest_length) / self.rest_length
    }

    /// The endpoint pair with the smaller index first.
    pub fn unordered_pair(&self) -> (usize, usize) {
        if self.a < self.b { (self.a, self.b) } else { (self.b, self.a) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rest_length_from_initial_positions() {
        let s = Spring::between(
            0, 1,
            Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(3.0, 4.0, 0.0),
            10.0, 1.0, SpringKind::Structural,
        );
        assert!((s.rest_length - 5.0).abs() < 1e-6);
    }

    #[test]
    fn strain_sign() {
        let s = Spring::between(
            0, 1,
            Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0),
            1.0, 0.0, SpringKind::Custom,
        );
        let stretched = vec![Vec3::zero(), Vec3::new(1.5, 0.0, 0.0)];
        let compressed = vec![Vec3::zero(), Vec3::new(0.5, 0.0, 0.0)];
        assert!((s.strain(&stretched) - 0.5).abs() < 1e-6);
        assert!((s.strain(&compressed) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_rest_length_has_no_strain() {
        let p = Vec3::new(1.0f32, 1.0, 1.0);
        let s = Spring::between(0, 1, p, p, 1.0, 0.0, SpringKind::Custom);
        let moved = vec![p, Vec3::zero()];
        assert_eq!(s.strain(&moved), 0.0);
    }

    #[test]
    fn unordered_pair_sorts() {
        let s = Spring::between(5, 2, Vec3::<f32>::zero(), Vec3::zero(), 1.0, 0.0, SpringKind::Custom);
        assert_eq!(s.unordered_pair(), (2, 5));
    }
}
