use super::helpers::{self, PipelineSpec};

/// Full-screen pass that paints the equirectangular environment behind the
/// scene, looked up by each pixel's view direction.
pub(crate) struct BackgroundResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_background_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
) -> BackgroundResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("background_shader"),
        source: wgpu::ShaderSource::Wgsl(super::background_source().into()),
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        layout,
        &shader,
        color_format,
        PipelineSpec {
            label: "background",
            vs_entry: "vs_fullscreen",
            fs_entry: "fs_background",
            buffers: &[],
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            blend: None,
            depth_write: false,
            depth_compare: wgpu::CompareFunction::Always,
        },
    );
    BackgroundResources { pipeline }
}

impl BackgroundResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.draw(0..3, 0..1);
    }
}
