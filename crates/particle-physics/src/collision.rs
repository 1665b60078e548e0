//! Collision tests and restitution response
//!
//! Every test works on the motion segment of the current step, `prev` (before
//! integration) to `p` (after). Hits are resolved one at a time: spheres in
//! registry order, then boxes, then the ground plane. Each hit writes the
//! particle immediately, so later tests see the corrected position.

use glam::Vec3;

use crate::collider::{BoxCollider, ColliderSet, SphereCollider};
use crate::constants::COLLISION_EPSILON;
use crate::particle::Particle;

/// Where and how a particle touched a collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub point: Vec3,
    /// Unit surface normal pointing away from the collider
    pub normal: Vec3,
}

/// What the resolver hit during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub sphere_hits: u32,
    pub box_hits: u32,
    pub ground_hit: bool,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.sphere_hits > 0 || self.box_hits > 0 || self.ground_hit
    }
}

/// Reflect `v` about the plane with normal `n` (normalized here)
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    let n = n.normalize();
    v - 2.0 * v.dot(n) * n
}

/// Test the end of the segment against a sphere.
///
/// The contact is pushed out along the ray from the segment midpoint through
/// the centre, `COLLISION_EPSILON` beyond the surface.
pub fn sphere_contact(prev: Vec3, p: Vec3, sphere: &SphereCollider) -> Option<Contact> {
    let center = sphere.center();
    if p.distance(center) > sphere.radius {
        return None;
    }

    let midpoint = (p + prev) * 0.5;
    let direction = (midpoint - center)
        .try_normalize()
        .or_else(|| (prev - center).try_normalize())
        .unwrap_or(Vec3::Y);

    let point = center + direction * (sphere.radius + COLLISION_EPSILON);
    Some(Contact {
        point,
        normal: direction,
    })
}

/// Separating-axis test of the step against an axis-aligned box.
///
/// The tested segment is centred at `p + d` with half-length `d`, i.e. it
/// spans `p` to `p + (p - prev)`. A hit is reported at `prev`, with the
/// normal of the face nearest to `prev`.
pub fn box_contact(prev: Vec3, p: Vec3, aabb: &BoxCollider) -> Option<Contact> {
    let center = aabb.center();
    let e = aabb.extents();
    let d = (p - prev) * 0.5;
    let c = (p + d) - center;
    let ad = d.abs();

    // Box axes
    if c.x.abs() > e.x + ad.x {
        return None;
    }
    if c.y.abs() > e.y + ad.y {
        return None;
    }
    if c.z.abs() > e.z + ad.z {
        return None;
    }

    // Cross products of the segment direction with each box axis
    if (c.y * d.z - c.z * d.y).abs() > e.y * ad.z + e.z * ad.y {
        return None;
    }
    if (c.z * d.x - c.x * d.z).abs() > e.x * ad.z + e.z * ad.x {
        return None;
    }
    if (c.x * d.y - c.y * d.x).abs() > e.x * ad.y + e.y * ad.x {
        return None;
    }

    let local = prev - center;
    Some(Contact {
        point: prev,
        normal: nearest_face_normal(local, e),
    })
}

/// Normal of the box face closest to `local` (a point relative to the box
/// centre). Ties go to the earlier axis.
fn nearest_face_normal(local: Vec3, extents: Vec3) -> Vec3 {
    let mut best = f32::INFINITY;
    let mut normal = Vec3::X * local.x.signum();

    for axis in 0..3 {
        let distance = (extents[axis] - local[axis].abs()).abs();
        if distance < best {
            best = distance;
            let mut n = Vec3::ZERO;
            n[axis] = local[axis].signum();
            normal = n;
        }
    }

    normal
}

/// Restitution actually applied on a hit
#[inline]
pub fn effective_restitution(coefficient: f32, cor_scale: f32) -> f32 {
    (coefficient * cor_scale).clamp(0.0, 1.0)
}

/// Move the particle to the contact and reflect its velocity
pub fn respond(particle: &mut Particle, contact: &Contact, restitution: f32) {
    particle.set_position(contact.point);
    particle.set_velocity(restitution * reflect(particle.velocity(), contact.normal));
}

/// Clamp a particle that fell through the ground plane `y = 0`.
///
/// Only the vertical velocity is flipped and scaled.
pub fn resolve_ground(particle: &mut Particle, restitution: f32) -> bool {
    if particle.position[1] >= 0.0 {
        return false;
    }
    particle.position[1] = COLLISION_EPSILON;
    particle.velocity[1] *= -restitution;
    true
}

/// Run every collision test for one step, in order
pub fn resolve_collisions(
    particle: &mut Particle,
    prev: Vec3,
    colliders: &ColliderSet<'_>,
    restitution: f32,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    for sphere in colliders.spheres {
        if let Some(contact) = sphere_contact(prev, particle.position(), sphere) {
            respond(particle, &contact, restitution);
            report.sphere_hits += 1;
        }
    }

    for aabb in colliders.boxes {
        if let Some(contact) = box_contact(prev, particle.position(), aabb) {
            respond(particle, &contact, restitution);
            report.box_hits += 1;
        }
    }

    report.ground_hit = resolve_ground(particle, restitution);
    report
}
