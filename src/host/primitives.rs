use std::f32::consts::TAU;

use crate::error::{Result, SceneError};
use crate::tessellation::{addressable, ensure_segments, tessellate_lat_long, MeshTopology};

/// Subdivided unit plane in XZ, normals up, centered on the origin
pub fn subdivided_plane(subdivisions: [u32; 2]) -> Result<MeshTopology> {
    let [div_x, div_z] = subdivisions;
    let size = ensure_segments("ground plane", div_x, div_z)?;

    let stride = div_x + 1;
    let mut positions = Vec::with_capacity(size.vertices);
    let mut uvs = Vec::with_capacity(size.vertices);

    for z in 0..=div_z {
        let v = z as f32 / div_z as f32;
        for x in 0..=div_x {
            let u = x as f32 / div_x as f32;
            positions.push([u - 0.5, 0.0, v - 0.5]);
            uvs.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity(size.indices);
    for z in 0..div_z {
        for x in 0..div_x {
            let i0 = z * stride + x;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;
            // counter-clockwise seen from +Y
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    Ok(MeshTopology {
        normals: vec![[0.0, 1.0, 0.0]; positions.len()],
        positions,
        uvs: Some(uvs),
        indices,
    })
}

/// Unit-diameter sphere
pub fn unit_sphere(segments: u32) -> Result<MeshTopology> {
    let longitudes = segments.checked_mul(2).ok_or_else(|| SceneError::IndexOverflow {
        shape: "sphere",
        vertices: (segments as u64 + 1).saturating_mul(segments as u64 * 2 + 1),
    })?;
    tessellate_lat_long(0.5, segments, longitudes)
}

/// Unit cube with flat-shaded faces (four vertices per face)
pub fn unit_box() -> MeshTopology {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    let mut mesh = MeshTopology {
        uvs: Some(Vec::with_capacity(24)),
        ..Default::default()
    };
    for (face, (normal, tangent, bitangent)) in FACES.iter().enumerate() {
        let base = (face * 4) as u32;
        for (s, t) in CORNERS {
            let position = [
                0.5 * (normal[0] + s * tangent[0] + t * bitangent[0]),
                0.5 * (normal[1] + s * tangent[1] + t * bitangent[1]),
                0.5 * (normal[2] + s * tangent[2] + t * bitangent[2]),
            ];
            mesh.positions.push(position);
            mesh.normals.push(*normal);
            if let Some(uvs) = mesh.uvs.as_mut() {
                uvs.push([(s + 1.0) * 0.5, (t + 1.0) * 0.5]);
            }
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Unit-height, unit-diameter capped cylinder along Y
pub fn unit_cylinder(segments: u32) -> Result<MeshTopology> {
    if segments < 3 {
        return Err(SceneError::DegenerateTopology {
            shape: "cylinder",
            segments: [segments, 1],
        });
    }

    // side strip plus two fans
    addressable("cylinder", (segments as u64 + 1) * 4)?;

    let radius = 0.5;
    let mut side = MeshTopology {
        uvs: Some(Vec::new()),
        ..Default::default()
    };
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        for (y, v) in [(0.5, 0.0), (-0.5, 1.0)] {
            side.positions.push([radius * cos, y, radius * sin]);
            side.normals.push([cos, 0.0, sin]);
            if let Some(uvs) = side.uvs.as_mut() {
                uvs.push([u, v]);
            }
        }
    }
    for i in 0..segments {
        let top = i * 2;
        let bottom = top + 1;
        side.indices
            .extend_from_slice(&[top, top + 2, bottom, bottom, top + 2, bottom + 2]);
    }

    side.append(cap(radius, 0.5, segments, true))?;
    side.append(cap(radius, -0.5, segments, false))?;
    Ok(side)
}

fn cap(radius: f32, y: f32, segments: u32, facing_up: bool) -> MeshTopology {
    let normal = if facing_up { [0.0, 1.0, 0.0] } else { [0.0, -1.0, 0.0] };
    let mut mesh = MeshTopology {
        uvs: Some(Vec::new()),
        ..Default::default()
    };

    mesh.positions.push([0.0, y, 0.0]);
    mesh.normals.push(normal);
    if let Some(uvs) = mesh.uvs.as_mut() {
        uvs.push([0.5, 0.5]);
    }
    for i in 0..segments {
        let (sin, cos) = (i as f32 / segments as f32 * TAU).sin_cos();
        mesh.positions.push([radius * cos, y, radius * sin]);
        mesh.normals.push(normal);
        if let Some(uvs) = mesh.uvs.as_mut() {
            uvs.push([0.5 + 0.5 * cos, 0.5 + 0.5 * sin]);
        }
    }
    for i in 0..segments {
        let a = 1 + i;
        let b = 1 + (i + 1) % segments;
        if facing_up {
            mesh.indices.extend_from_slice(&[0, b, a]);
        } else {
            mesh.indices.extend_from_slice(&[0, a, b]);
        }
    }
    mesh
}
