//! Debug-draw output: what a renderer needs to visualise a soft body.
//!
//! Nothing here renders. The body is turned into line and cube primitives
//! pushed into a [`DebugDrawSink`] supplied by the host renderer.

use crate::float::Float;
use crate::softbody::SoftBody;
use crate::vec::Vec3;

/// Linear RGBA color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        if t.is_nan() || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Scale RGB by `factor`, forcing full opacity.
    pub fn darken(self, factor: f32) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: 1.0,
        }
    }
}

/// Receiver for debug primitives, implemented by the host renderer.
pub trait DebugDrawSink<F: Float> {
    fn draw_line(&mut self, from: Vec3<F>, to: Vec3<F>, color: Color, thickness: F);
    /// `size` is the full edge length along each axis.
    fn draw_cube(&mut self, center: Vec3<F>, size: Vec3<F>, color: Color);
}

/// Colors and sizes used by [`draw_soft_body`].
#[derive(Clone, Debug, PartialEq)]
pub struct DebugDrawStyle<F: Float> {
    pub compressed_color: Color,
    pub neutral_color: Color,
    pub stretched_color: Color,
    /// Strain is clamped to `±max_strain` before blending. Default: 0.5.
    pub max_strain: F,
    pub spring_thickness: F,
    /// Extra thickness per unit of |strain|, relative to `spring_thickness`.
    pub thickness_gain: F,
    pub anchor_color: Color,
    pub slow_color: Color,
    pub fast_color: Color,
    pub particle_size: F,
    pub anchor_size: F,
    /// Outline cube size relative to the particle cube.
    pub outline_scale: F,
    /// RGB multiplier for the outline cube.
    pub outline_darken: f32,
}

impl<F: Float> Default for DebugDrawStyle<F> {
    fn default() -> Self {
        DebugDrawStyle {
            compressed_color: Color::rgba(0.2, 0.4, 1.0, 1.0),
            neutral_color: Color::rgba(0.2, 0.7, 1.0, 1.0),
            stretched_color: Color::rgba(1.0, 0.25, 0.2, 1.0),
            max_strain: F::half(),
            spring_thickness: F::from_f32(0.003),
            thickness_gain: F::from_f32(4.0),
            anchor_color: Color::rgba(1.0, 0.2, 0.2, 1.0),
            slow_color: Color::rgba(1.0, 0.9, 0.6, 1.0),
            fast_color: Color::rgba(1.0, 0.5, 0.1, 1.0),
            particle_size: F::from_f32(0.02),
            anchor_size: F::from_f32(0.03),
            outline_scale: F::from_f32(1.35),
            outline_darken: 0.3,
        }
    }
}

impl<F: Float> DebugDrawStyle<F> {
    /// Color and thickness for a spring at signed `strain`.
    pub fn spring_appearance(&self, strain: F) -> (Color, F) {
        let s = if strain.is_finite() {
            strain.clamp(-self.max_strain, self.max_strain)
        } else {
            F::zero()
        };
        let t = if self.max_strain > F::zero() {
            (s.abs() / self.max_strain).to_f32()
        } else {
            0.0
        };
        let target = if s < F::zero() { self.compressed_color } else { self.stretched_color };
        let color = self.neutral_color.lerp(target, t);
        let thickness = self.spring_thickness * (F::one() + self.thickness_gain * s.abs());
        (color, thickness)
    }

    /// Color for a dynamic particle moving at `speed` when the fastest
    /// particle in the set moves at `max_speed`.
    pub fn particle_color(&self, speed: F, max_speed: F) -> Color {
        let t = if max_speed > F::from_f32(1e-6) {
            (speed / max_speed).to_f32()
        } else {
            0.0
        };
        self.slow_color.lerp(self.fast_color, t)
    }
}

/// Push every spring and particle of `body` into `sink`.
///
/// Each particle is drawn as a larger, darker outline cube followed by the
/// particle cube itself. An empty body draws nothing.
pub fn draw_soft_body<F: Float, S: DebugDrawSink<F>>(
    body: &SoftBody<F>,
    style: &DebugDrawStyle<F>,
    sink: &mut S,
) {
    let particles = body.particles();
    if particles.is_empty() {
        return;
    }

    for spring in body.springs() {
        let from = particles[spring.a].position;
        let to = particles[spring.b].position;
        let (color, thickness) = style.spring_appearance(spring.strain_between(from, to));
        sink.draw_line(from, to, color, thickness);
    }

    let max_speed = particles
        .iter()
        .filter(|p| !p.is_pinned())
        .map(|p| p.speed())
        .fold(F::zero(), |m, s| m.max(s));

    for p in particles {
        let (size, color) = if p.is_anchor {
            (style.anchor_size, style.anchor_color)
        } else {
            (style.particle_size, style.particle_color(p.speed(), max_speed))
        };
        let outline = Vec3::splat(size * style.outline_scale);
        sink.draw_cube(p.position, outline, color.darken(style.outline_darken));
        sink.draw_cube(p.position, Vec3::splat(size), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_at_rest() {
        let style = DebugDrawStyle::<f32>::default();
        let (color, thickness) = style.spring_appearance(0.0);
        assert_eq!(color, style.neutral_color);
        assert!((thickness - style.spring_thickness).abs() < 1e-9);
    }

    #[test]
    fn strain_clamped_at_half() {
        let style = DebugDrawStyle::<f32>::default();
        let (c1, t1) = style.spring_appearance(0.5);
        let (c2, t2) = style.spring_appearance(3.0);
        assert_eq!(c1, c2);
        assert_eq!(t1, t2);
        assert_eq!(c2, style.stretched_color);
        let (c3, _) = style.spring_appearance(-0.9);
        assert_eq!(c3, style.compressed_color);
    }

    #[test]
    fn thickness_grows_with_strain() {
        let style = DebugDrawStyle::<f32>::default();
        let (_, small) = style.spring_appearance(0.1);
        let (_, large) = style.spring_appearance(-0.4);
        assert!(large > small);
    }

    #[test]
    fn still_particles_get_slow_color() {
        let style = DebugDrawStyle::<f32>::default();
        assert_eq!(style.particle_color(0.0, 0.0), style.slow_color);
        assert_eq!(style.particle_color(2.0, 2.0), style.fast_color);
    }
}
