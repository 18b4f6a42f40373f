//! Procedural headphones used when the product model cannot be loaded.

use crate::constants::SUBSTITUTE_SCALE;
use crate::mesh::{rgb_hex, Mesh};
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug)]
enum Shape {
    TorusArc { radius: f32, tube: f32, arc: f32 },
    Cylinder { top: f32, bottom: f32, height: f32, segments: u32 },
    Sphere { radius: f32, segments: u32 },
}

#[derive(Clone, Copy, Debug)]
struct Part {
    shape: Shape,
    color: u32,
    position: Vec3,
    rotation: Vec3,
}

const HEADBAND_ARC: f32 = PI * 0.85;
const FLAT: Vec3 = Vec3::new(0.0, 0.0, PI / 2.0); // cylinder axis along X
const LAID: Vec3 = Vec3::new(PI / 2.0, 0.0, 0.0); // torus opening downward

const fn band(tube: f32, color: u32) -> Part {
    Part {
        shape: Shape::TorusArc {
            radius: 2.2,
            tube,
            arc: HEADBAND_ARC,
        },
        color,
        position: Vec3::new(0.0, 0.4, 0.0),
        rotation: LAID,
    }
}

const fn disc(radius: f32, height: f32, segments: u32, color: u32, position: Vec3) -> Part {
    Part {
        shape: Shape::Cylinder {
            top: radius,
            bottom: radius,
            height,
            segments,
        },
        color,
        position,
        rotation: FLAT,
    }
}

const PARTS: [Part; 15] = [
    // headband with inner and outer padding
    band(0.06, 0x2c2c2c),
    band(0.08, 0x1a1a1a),
    band(0.12, 0x404040),
    // ear cups
    Part {
        shape: Shape::Cylinder {
            top: 0.6,
            bottom: 0.55,
            height: 0.3,
            segments: 20,
        },
        color: 0x2c2c2c,
        position: Vec3::new(-1.6, -0.8, 0.0),
        rotation: FLAT,
    },
    Part {
        shape: Shape::Cylinder {
            top: 0.6,
            bottom: 0.55,
            height: 0.3,
            segments: 20,
        },
        color: 0x2c2c2c,
        position: Vec3::new(1.6, -0.8, 0.0),
        rotation: FLAT,
    },
    // cushions
    disc(0.52, 0.12, 20, 0x0d0d0d, Vec3::new(-1.6, -0.8, 0.18)),
    disc(0.52, 0.12, 20, 0x0d0d0d, Vec3::new(1.6, -0.8, 0.18)),
    // speaker grilles
    disc(0.35, 0.02, 16, 0x000000, Vec3::new(-1.6, -0.8, 0.25)),
    disc(0.35, 0.02, 16, 0x000000, Vec3::new(1.6, -0.8, 0.25)),
    // mic boom and head
    Part {
        shape: Shape::Cylinder {
            top: 0.012,
            bottom: 0.012,
            height: 0.8,
            segments: 8,
        },
        color: 0x444444,
        position: Vec3::new(-1.2, -0.3, 0.4),
        rotation: Vec3::new(PI / 8.0, 0.0, 0.0),
    },
    Part {
        shape: Shape::Sphere {
            radius: 0.035,
            segments: 12,
        },
        color: 0x333333,
        position: Vec3::new(-0.8, 0.1, 0.7),
        rotation: Vec3::ZERO,
    },
    // volume controls
    disc(0.06, 0.015, 12, 0x555555, Vec3::new(1.6, -0.4, 0.12)),
    disc(0.06, 0.015, 12, 0x555555, Vec3::new(1.6, -0.55, 0.12)),
    // power button and LED
    disc(0.04, 0.01, 12, 0x666666, Vec3::new(1.6, -0.7, 0.12)),
    Part {
        shape: Shape::Sphere {
            radius: 0.015,
            segments: 8,
        },
        color: 0x00ff00,
        position: Vec3::new(1.6, -0.7, 0.16),
        rotation: Vec3::ZERO,
    },
];

fn build(shape: Shape, color: [f32; 4]) -> Mesh {
    match shape {
        Shape::TorusArc { radius, tube, arc } => Mesh::torus_arc(radius, tube, 8, 24, arc, color),
        Shape::Cylinder {
            top,
            bottom,
            height,
            segments,
        } => Mesh::cylinder(top, bottom, height, segments, color),
        Shape::Sphere { radius, segments } => Mesh::sphere(radius, segments, segments, color),
    }
}

/// Assemble the stand-in headphones, already scaled for the viewer.
pub fn headphones() -> Mesh {
    let group = Mat4::from_scale(Vec3::splat(SUBSTITUTE_SCALE));
    let mut mesh = Mesh::default();
    for part in PARTS.iter() {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            part.rotation.x,
            part.rotation.y,
            part.rotation.z,
        );
        let local = Mat4::from_rotation_translation(rotation, part.position);
        mesh.append(&build(part.shape, rgb_hex(part.color)), group * local);
    }
    log::debug!(
        "[substitute] headphones parts={} triangles={}",
        PARTS.len(),
        mesh.triangle_count()
    );
    mesh
}
