//! Binary glTF (`.glb`) decoding into a single viewer mesh.

use crate::constants::{MODEL_OFFSET, MODEL_SCALE};
use crate::mesh::{Mesh, Vertex};
use glam::{Mat4, Vec3};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("glTF decode failed: {0}")]
    Decode(#[from] gltf::Error),

    #[error("glTF has no scene")]
    NoScene,

    #[error("glTF scene has no triangle geometry")]
    NoGeometry,

    #[error("index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: u32, len: usize },
}

/// Placement applied to a loaded product model before it is shown.
pub fn loaded_model_transform() -> Mat4 {
    Mat4::from_translation(Vec3::from(MODEL_OFFSET)) * Mat4::from_scale(Vec3::splat(MODEL_SCALE))
}

/// Decode every triangle primitive of the default scene, with node
/// transforms applied and the material base colour baked into the vertices.
pub fn decode_glb(bytes: &[u8]) -> Result<Mesh, ModelError> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref();
    let scene = gltf
        .document
        .default_scene()
        .or_else(|| gltf.document.scenes().next())
        .ok_or(ModelError::NoScene)?;

    let mut mesh = Mesh::default();
    for node in scene.nodes() {
        visit(&node, Mat4::IDENTITY, blob, &mut mesh)?;
    }
    if mesh.is_empty() {
        return Err(ModelError::NoGeometry);
    }
    log::info!(
        "[loader] decoded glb vertices={} triangles={}",
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

fn visit(
    node: &gltf::Node,
    parent: Mat4,
    blob: Option<&[u8]>,
    out: &mut Mesh,
) -> Result<(), ModelError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(source) = node.mesh() {
        for primitive in source.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            if let Some(part) = read_primitive(&primitive, blob)? {
                out.append(&part, world);
            }
        }
    }
    for child in node.children() {
        visit(&child, world, blob, out)?;
    }
    Ok(())
}

fn read_primitive(
    primitive: &gltf::Primitive,
    blob: Option<&[u8]>,
) -> Result<Option<Mesh>, ModelError> {
    let reader = primitive.reader(|buffer| match buffer.source() {
        gltf::buffer::Source::Bin => blob,
        gltf::buffer::Source::Uri(_) => None,
    });
    let Some(positions) = reader.read_positions() else {
        return Ok(None);
    };
    let positions: Vec<[f32; 3]> = positions.collect();
    let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|n| n.collect());
    let color = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(ModelError::IndexOutOfRange {
            index,
            len: positions.len(),
        });
    }

    let mut part = Mesh {
        vertices: positions
            .iter()
            .enumerate()
            .map(|(i, p)| Vertex {
                position: *p,
                normal: normals
                    .as_ref()
                    .and_then(|n| n.get(i).copied())
                    .unwrap_or([0.0, 1.0, 0.0]),
                color,
            })
            .collect(),
        indices,
    };
    if normals.is_none() {
        part.recompute_normals();
    }
    Ok(Some(part))
}
