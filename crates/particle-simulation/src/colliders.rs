//! Owned collider registry

use glam::Vec3;
use particle_physics::{BoxCollider, ColliderSet, SphereCollider};

use crate::error::Result;
use crate::validate::{validate_box, validate_sphere};

/// Static colliders for the simulation.
///
/// Shapes are validated on insertion. The registry is only reachable through
/// `&` while a frame is being dispatched.
#[derive(Clone, Debug, Default)]
pub struct ColliderRegistry {
    spheres: Vec<SphereCollider>,
    boxes: Vec<BoxCollider>,
}

impl ColliderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from existing buffers, validating every shape
    pub fn from_parts(spheres: Vec<SphereCollider>, boxes: Vec<BoxCollider>) -> Result<Self> {
        for (index, sphere) in spheres.iter().enumerate() {
            validate_sphere(index, sphere)?;
        }
        for (index, aabb) in boxes.iter().enumerate() {
            validate_box(index, aabb)?;
        }
        Ok(Self { spheres, boxes })
    }

    /// Returns the index of the new sphere
    pub fn add_sphere(&mut self, center: Vec3, radius: f32) -> Result<usize> {
        let sphere = SphereCollider::new(center, radius);
        let index = self.spheres.len();
        validate_sphere(index, &sphere)?;
        self.spheres.push(sphere);
        Ok(index)
    }

    /// Returns the index of the new box
    pub fn add_box(&mut self, center: Vec3, extents: Vec3) -> Result<usize> {
        let aabb = BoxCollider::new(center, extents);
        let index = self.boxes.len();
        validate_box(index, &aabb)?;
        self.boxes.push(aabb);
        Ok(index)
    }

    pub fn clear(&mut self) {
        self.spheres.clear();
        self.boxes.clear();
    }

    pub fn spheres(&self) -> &[SphereCollider] {
        &self.spheres
    }

    pub fn boxes(&self) -> &[BoxCollider] {
        &self.boxes
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Borrowed view handed to the kernel
    pub fn as_set(&self) -> ColliderSet<'_> {
        ColliderSet::new(&self.spheres, &self.boxes)
    }

    /// Sphere buffer contents for upload
    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }

    /// Box buffer contents for upload
    pub fn box_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.boxes)
    }
}
