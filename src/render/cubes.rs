use super::helpers::{self, PipelineSpec};
use glam::Vec3;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pos: [f32; 3],
    normal: [f32; 3],
}

/// Per-cube instance: world-space center in xyz, edge length in w.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CubeInstance {
    pub(crate) center_scale: [f32; 4],
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x4];

// Edge lines sit a hair outside the faces so they win the depth test.
const EDGE_INFLATE: f32 = 1.002;

/// Unit cube (edge 1) with per-face normals, CCW when seen from outside.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    // (normal, u, v) with u × v == normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = 0.5 * (n + su * u + sv * v);
            vertices.push(Vertex {
                pos: p.to_array(),
                normal: n.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

/// The 12 edges of the unit cube as a line list over its 8 corners.
fn edge_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let corner = |bits: u16| {
        let s = |bit: u16| if bits & bit != 0 { 0.5 } else { -0.5 };
        Vertex {
            pos: (Vec3::new(s(1), s(2), s(4)) * EDGE_INFLATE).to_array(),
            normal: [0.0; 3],
        }
    };
    let vertices: Vec<Vertex> = (0..8).map(corner).collect();
    let mut indices = Vec::with_capacity(24);
    for a in 0..8u16 {
        for bit in [1u16, 2, 4] {
            if a & bit == 0 {
                indices.extend_from_slice(&[a, a | bit]);
            }
        }
    }
    (vertices, indices)
}

pub(crate) struct CubeResources {
    pub(crate) face_pipeline: wgpu::RenderPipeline,
    pub(crate) edge_pipeline: wgpu::RenderPipeline,
    face_vb: wgpu::Buffer,
    face_ib: wgpu::Buffer,
    face_index_count: u32,
    edge_vb: wgpu::Buffer,
    edge_ib: wgpu::Buffer,
    edge_index_count: u32,
    instance_vb: wgpu::Buffer,
    instance_count: u32,
}

pub(crate) fn create_cube_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    instances: &[CubeInstance],
) -> CubeResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("blocks_shader"),
        source: wgpu::ShaderSource::Wgsl(super::blocks_source().into()),
    });
    let buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let face_pipeline = helpers::make_scene_pipeline(
        device,
        layout,
        &shader,
        color_format,
        PipelineSpec {
            label: "cube_faces",
            vs_entry: "vs_cube",
            fs_entry: "fs_cube",
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: true,
            depth_compare: wgpu::CompareFunction::Less,
        },
    );
    let edge_pipeline = helpers::make_scene_pipeline(
        device,
        layout,
        &shader,
        color_format,
        PipelineSpec {
            label: "cube_edges",
            vs_entry: "vs_cube",
            fs_entry: "fs_edge",
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::LineList,
            cull_mode: None,
            blend: None,
            depth_write: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
        },
    );

    let (face_vertices, face_indices) = cube_mesh();
    let (edge_vertices, edge_indices) = edge_mesh();
    let face_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_face_vb"),
        contents: bytemuck::cast_slice(&face_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let face_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_face_ib"),
        contents: bytemuck::cast_slice(&face_indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let edge_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_edge_vb"),
        contents: bytemuck::cast_slice(&edge_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let edge_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_edge_ib"),
        contents: bytemuck::cast_slice(&edge_indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    // An empty word still needs a bindable buffer.
    let fallback = [CubeInstance {
        center_scale: [0.0; 4],
    }];
    let instance_data = if instances.is_empty() {
        &fallback[..]
    } else {
        instances
    };
    let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_instance_vb"),
        contents: bytemuck::cast_slice(instance_data),
        usage: wgpu::BufferUsages::VERTEX,
    });

    CubeResources {
        face_pipeline,
        edge_pipeline,
        face_vb,
        face_ib,
        face_index_count: face_indices.len() as u32,
        edge_vb,
        edge_ib,
        edge_index_count: edge_indices.len() as u32,
        instance_vb,
        instance_count: instances.len() as u32,
    }
}

impl CubeResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));

        rpass.set_pipeline(&self.face_pipeline);
        rpass.set_vertex_buffer(0, self.face_vb.slice(..));
        rpass.set_index_buffer(self.face_ib.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.face_index_count, 0, 0..self.instance_count);

        rpass.set_pipeline(&self.edge_pipeline);
        rpass.set_vertex_buffer(0, self.edge_vb.slice(..));
        rpass.set_index_buffer(self.edge_ib.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.edge_index_count, 0, 0..self.instance_count);
    }
}
