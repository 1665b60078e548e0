//! Static collider shapes
//!
//! Both records are padded to 16-byte multiples so they match a std430
//! storage buffer layout.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Sphere collider
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereCollider {
    pub center: [f32; 3],
    pub radius: f32,
}

impl SphereCollider {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center: center.to_array(),
            radius,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }
}

/// Axis-aligned box collider
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BoxCollider {
    pub center: [f32; 3],
    _padding0: f32,
    /// Half-widths along x, y and z
    pub extents: [f32; 3],
    _padding1: f32,
}

impl BoxCollider {
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self {
            center: center.to_array(),
            _padding0: 0.0,
            extents: extents.to_array(),
            _padding1: 0.0,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    pub fn extents(&self) -> Vec3 {
        Vec3::from_array(self.extents)
    }
}

/// Read-only view of the colliders for one frame
#[derive(Clone, Copy, Debug, Default)]
pub struct ColliderSet<'a> {
    pub spheres: &'a [SphereCollider],
    pub boxes: &'a [BoxCollider],
}

impl<'a> ColliderSet<'a> {
    pub fn new(spheres: &'a [SphereCollider], boxes: &'a [BoxCollider]) -> Self {
        Self { spheres, boxes }
    }

    /// Only the ground plane
    pub fn empty() -> Self {
        Self::default()
    }
}
