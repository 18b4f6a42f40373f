//! Indexed triangle meshes and the primitive shapes the substitute model is
//! assembled from.

use glam::{Mat3, Mat4, Vec3};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// `0xRRGGBB` to linear-ish RGBA in `[0, 1]`.
#[inline]
pub fn rgb_hex(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

#[inline]
fn unit_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let n = v.normalize_or_zero();
    if n == Vec3::ZERO {
        fallback
    } else {
        n
    }
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append `other` with `transform` applied to positions and normals.
    pub fn append(&mut self, other: &Mesh, transform: Mat4) {
        let base = self.vertices.len() as u32;
        let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
        self.vertices.extend(other.vertices.iter().map(|v| Vertex {
            position: transform.transform_point3(Vec3::from(v.position)).to_array(),
            normal: (normal_matrix * Vec3::from(v.normal))
                .normalize_or_zero()
                .to_array(),
            color: v.color,
        }));
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Apply `transform` in place.
    pub fn transform(&mut self, transform: Mat4) {
        let mut out = Mesh::default();
        out.append(self, transform);
        *self = out;
    }

    /// Replace vertex normals with area-weighted face normals.
    pub fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let pa = Vec3::from(self.vertices[a].position);
            let pb = Vec3::from(self.vertices[b].position);
            let pc = Vec3::from(self.vertices[c].position);
            let n = (pb - pa).cross(pc - pa);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        for (v, n) in self.vertices.iter_mut().zip(acc) {
            v.normal = unit_or(n, Vec3::Y).to_array();
        }
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Torus arc in the XY plane around the Z axis, sweeping `arc` radians
    /// from +X.
    pub fn torus_arc(
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
        arc: f32,
        color: [f32; 4],
    ) -> Mesh {
        let mut mesh = Mesh::default();
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            for i in 0..=tubular_segments {
                let u = i as f32 / tubular_segments as f32 * arc;
                let ring = radius + tube * v.cos();
                let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
                let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
                mesh.vertices.push(Vertex {
                    position: position.to_array(),
                    normal: unit_or(position - center, Vec3::Z).to_array(),
                    color,
                });
            }
        }
        let row = tubular_segments + 1;
        for j in 1..=radial_segments {
            for i in 1..=tubular_segments {
                let a = row * j + i - 1;
                let b = row * (j - 1) + i - 1;
                let c = row * (j - 1) + i;
                let d = row * j + i;
                mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        mesh
    }

    /// Capped cylinder (or frustum) along Y, centered on the origin.
    pub fn cylinder(
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        color: [f32; 4],
    ) -> Mesh {
        let mut mesh = Mesh::default();
        let half = height / 2.0;
        let slope = (radius_bottom - radius_top) / height;

        // side: top ring then bottom ring
        for (y, r) in [(half, radius_top), (-half, radius_bottom)] {
            for x in 0..=radial_segments {
                let theta = x as f32 / radial_segments as f32 * TAU;
                let (s, c) = theta.sin_cos();
                mesh.vertices.push(Vertex {
                    position: [r * s, y, r * c],
                    normal: Vec3::new(s, slope, c).normalize().to_array(),
                    color,
                });
            }
        }
        let row = radial_segments + 1;
        for x in 0..radial_segments {
            let a = x;
            let b = row + x;
            let c = row + x + 1;
            let d = x + 1;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }

        // caps
        for (y, r, up) in [(half, radius_top, true), (-half, radius_bottom, false)] {
            let center = mesh.vertices.len() as u32;
            let normal = if up { [0.0, 1.0, 0.0] } else { [0.0, -1.0, 0.0] };
            mesh.vertices.push(Vertex {
                position: [0.0, y, 0.0],
                normal,
                color,
            });
            for x in 0..=radial_segments {
                let theta = x as f32 / radial_segments as f32 * TAU;
                mesh.vertices.push(Vertex {
                    position: [r * theta.sin(), y, r * theta.cos()],
                    normal,
                    color,
                });
            }
            for x in 0..radial_segments {
                let p0 = center + 1 + x;
                let p1 = p0 + 1;
                if up {
                    mesh.indices.extend_from_slice(&[center, p0, p1]);
                } else {
                    mesh.indices.extend_from_slice(&[center, p1, p0]);
                }
            }
        }
        mesh
    }

    /// UV sphere centered on the origin.
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32, color: [f32; 4]) -> Mesh {
        let mut mesh = Mesh::default();
        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;
            for ix in 0..=width_segments {
                let u = ix as f32 / width_segments as f32;
                let dir = Vec3::new(
                    -(u * TAU).cos() * (v * PI).sin(),
                    (v * PI).cos(),
                    (u * TAU).sin() * (v * PI).sin(),
                );
                mesh.vertices.push(Vertex {
                    position: (dir * radius).to_array(),
                    normal: unit_or(dir, Vec3::Y).to_array(),
                    color,
                });
            }
        }
        let row = width_segments + 1;
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    mesh.indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height_segments - 1 {
                    mesh.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
        mesh
    }
}
