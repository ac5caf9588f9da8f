use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::error::{Result, SceneError};

/// Indexed triangle mesh produced by the tessellators and host factories
///
/// Winding is fixed by the generator that built the mesh; callers must not
/// reorder `indices` since it decides which side lights treat as front-facing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshTopology {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Option<Vec<[f32; 2]>>,
    pub indices: Vec<u32>,
}

impl MeshTopology {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Concatenates `other` onto this mesh, rebasing its indices by the
    /// current vertex count. UVs survive only when both sides carry them.
    ///
    /// Fails without touching either mesh when the merged vertex count no
    /// longer fits `u32` indices.
    pub fn append(&mut self, other: MeshTopology) -> Result<()> {
        let total = self.positions.len() as u64 + other.positions.len() as u64;
        addressable("appended mesh", total)?;
        let overflow = SceneError::IndexOverflow {
            shape: "appended mesh",
            vertices: total,
        };
        let base = u32::try_from(self.positions.len()).map_err(|_| overflow.clone())?;
        let indices = other
            .indices
            .iter()
            .map(|&i| i.checked_add(base).ok_or_else(|| overflow.clone()))
            .collect::<Result<Vec<_>>>()?;

        let uvs = match (self.uvs.take(), other.uvs) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend(theirs);
                Some(mine)
            }
            (None, Some(theirs)) if self.positions.is_empty() => Some(theirs),
            _ => None,
        };

        self.positions.extend(other.positions);
        self.normals.extend(other.normals);
        self.indices.extend(indices);
        self.uvs = uvs;
        Ok(())
    }

    /// Checks the structural invariants: parallel attribute arrays, whole
    /// triangles, and every index inside the vertex range.
    pub fn is_well_formed(&self) -> bool {
        let count = self.positions.len();
        self.normals.len() == count
            && self.uvs.as_ref().map_or(true, |uvs| uvs.len() == count)
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < count)
    }
}

/// Largest vertex count whose indices all fit in a `u32`
pub const MAX_VERTICES: u64 = u32::MAX as u64 + 1;

/// Attribute and index lengths of a validated `(rows+1) x (cols+1)` lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridSize {
    pub vertices: usize,
    pub indices: usize,
}

pub(crate) fn addressable(shape: &'static str, vertices: u64) -> Result<usize> {
    if vertices > MAX_VERTICES {
        return Err(SceneError::IndexOverflow { shape, vertices });
    }
    usize::try_from(vertices).map_err(|_| SceneError::IndexOverflow { shape, vertices })
}

/// Rejects zero segments and lattices too large for `u32` indices, before
/// anything is allocated
pub(crate) fn ensure_segments(shape: &'static str, rows: u32, cols: u32) -> Result<GridSize> {
    if rows < 1 || cols < 1 {
        return Err(SceneError::DegenerateTopology {
            shape,
            segments: [rows, cols],
        });
    }

    let vertices = (rows as u64 + 1).saturating_mul(cols as u64 + 1);
    let vertex_len = addressable(shape, vertices)?;
    // rows * cols < vertices <= 2^32 here, so the product cannot overflow u64
    let index_count = rows as u64 * cols as u64 * 6;
    let index_len = usize::try_from(index_count)
        .map_err(|_| SceneError::IndexOverflow { shape, vertices })?;

    Ok(GridSize {
        vertices: vertex_len,
        indices: index_len,
    })
}

/// Two triangles per grid cell over a `(rows+1) x (cols+1)` vertex lattice
fn grid_indices(rows: u32, cols: u32, size: GridSize) -> Vec<u32> {
    let stride = cols + 1;
    let mut indices = Vec::with_capacity(size.indices);
    for row in 0..rows {
        for col in 0..cols {
            let first = row * stride + col;
            let second = first + stride;
            indices.extend_from_slice(&[first, second, first + 1]);
            indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }
    indices
}

/// Latitude/longitude sphere, poles on the Y axis
pub fn tessellate_lat_long(radius: f32, lat_segments: u32, lon_segments: u32) -> Result<MeshTopology> {
    let size = ensure_segments("lat-long sphere", lat_segments, lon_segments)?;

    let mut positions = Vec::with_capacity(size.vertices);
    let mut normals = Vec::with_capacity(size.vertices);
    let mut uvs = Vec::with_capacity(size.vertices);

    for lat in 0..=lat_segments {
        let theta = lat as f32 * PI / lat_segments as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=lon_segments {
            let phi = lon as f32 * TAU / lon_segments as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let direction = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            positions.push((direction * radius).to_array());
            normals.push(direction.to_array());
            uvs.push([
                lon as f32 / lon_segments as f32,
                lat as f32 / lat_segments as f32,
            ]);
        }
    }

    Ok(MeshTopology {
        positions,
        normals,
        uvs: Some(uvs),
        indices: grid_indices(lat_segments, lon_segments, size),
    })
}

/// Torus around the Z axis
pub fn tessellate_torus(
    ring_radius: f32,
    tube_radius: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> Result<MeshTopology> {
    let size = ensure_segments("torus", radial_segments, tubular_segments)?;

    let mut positions = Vec::with_capacity(size.vertices);
    let mut normals = Vec::with_capacity(size.vertices);
    let mut uvs = Vec::with_capacity(size.vertices);

    for i in 0..=radial_segments {
        let angle = i as f32 * TAU / radial_segments as f32;
        let (sin_a, cos_a) = angle.sin_cos();

        for j in 0..=tubular_segments {
            let tubular_angle = j as f32 * TAU / tubular_segments as f32;
            let (sin_t, cos_t) = tubular_angle.sin_cos();

            let distance = ring_radius + tube_radius * cos_t;
            positions.push([distance * cos_a, distance * sin_a, tube_radius * sin_t]);
            normals.push([cos_a * cos_t, sin_a * cos_t, sin_t]);
            uvs.push([
                j as f32 / tubular_segments as f32,
                i as f32 / radial_segments as f32,
            ]);
        }
    }

    Ok(MeshTopology {
        positions,
        normals,
        uvs: Some(uvs),
        indices: grid_indices(radial_segments, tubular_segments, size),
    })
}

/// Two lat-long shells (planet body and ring) merged into one mesh
pub fn tessellate_concentric_shells(
    inner_radius: f32,
    outer_radius: f32,
    thickness: f32,
    segments: u32,
) -> Result<MeshTopology> {
    let shell = ensure_segments("concentric shells", segments, segments)?;
    addressable("concentric shells", shell.vertices as u64 * 2)?;

    let mut mesh = tessellate_lat_long(inner_radius + thickness, segments, segments)?;
    mesh.append(tessellate_lat_long(outer_radius + thickness, segments, segments)?)?;
    Ok(mesh)
}
