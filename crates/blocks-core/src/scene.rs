use crate::config::SceneConfig;
use crate::glyph::Glyph;
use crate::layout::{glyph_cubes, CubePlacement};
use glam::{Mat4, Quat, Vec3};

/// One glyph of the display word, anchored in word space.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphGroup {
    pub glyph: Glyph,
    pub anchor: Vec3,
    pub cubes: Vec<CubePlacement>,
}

/// Lay a word out left-to-right along X, centered on the origin.
///
/// Anchor `i` of `n` sits at `(i - (n - 1) / 2) * pitch`.
pub fn compose_word(text: &str, pitch: f32) -> Vec<GlyphGroup> {
    let glyphs: Vec<Glyph> = text.chars().map(Glyph::resolve).collect();
    let center = (glyphs.len().max(1) - 1) as f32 * 0.5;
    glyphs
        .into_iter()
        .enumerate()
        .map(|(i, glyph)| {
            let anchor = Vec3::new((i as f32 - center) * pitch, 0.0, 0.0);
            GlyphGroup {
                glyph,
                anchor,
                cubes: glyph_cubes(glyph, anchor),
            }
        })
        .collect()
}

/// Displayable word: glyph groups plus the transform that angles the whole
/// word toward the camera.
#[derive(Clone, Debug)]
pub struct Scene {
    pub groups: Vec<GlyphGroup>,
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Scene {
    pub fn compose(config: &SceneConfig) -> Self {
        let groups = compose_word(&config.display_text, config.glyph_pitch);
        log::info!(
            "[scene] composed {:?} into {} glyphs / {} cubes",
            config.display_text,
            groups.len(),
            groups.iter().map(|g| g.cubes.len()).sum::<usize>()
        );
        Self {
            groups,
            rotation: Quat::from_rotation_y(config.group_rotation_y),
            translation: config.group_position,
        }
    }

    /// Word-to-world transform: rotate about the word origin, then translate.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    pub fn cube_count(&self) -> usize {
        self.groups.iter().map(|g| g.cubes.len()).sum()
    }

    /// World-space centers of every cube in the scene.
    pub fn cube_positions(&self) -> Vec<Vec3> {
        let transform = self.transform();
        self.groups
            .iter()
            .flat_map(|g| g.cubes.iter())
            .map(|c| transform.transform_point3(c.position))
            .collect()
    }
}
