// Host-side tests for word composition and the scene transform.

use blocks_core::*;
use glam::{Quat, Vec3};

#[test]
fn default_word_anchors_are_centered_and_evenly_spaced() {
    let groups = compose_word("AMP18", GLYPH_PITCH);
    let xs: Vec<f32> = groups.iter().map(|g| g.anchor.x).collect();
    let expected = [-4.5, -2.25, 0.0, 2.25, 4.5];
    assert_eq!(xs.len(), expected.len());
    for (x, e) in xs.iter().zip(expected) {
        assert!((x - e).abs() < 1e-6, "{x} != {e}");
    }
    assert!(groups.iter().all(|g| g.anchor.y == 0.0 && g.anchor.z == 0.0));
}

#[test]
fn glyph_order_follows_text() {
    let glyphs: Vec<Glyph> = compose_word("AMP18", GLYPH_PITCH)
        .iter()
        .map(|g| g.glyph)
        .collect();
    assert_eq!(
        glyphs,
        vec![Glyph::A, Glyph::M, Glyph::P, Glyph::One, Glyph::Eight]
    );
}

#[test]
fn single_glyph_sits_at_origin() {
    let groups = compose_word("8", GLYPH_PITCH);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].anchor, Vec3::ZERO);
}

#[test]
fn empty_text_composes_nothing() {
    assert!(compose_word("", GLYPH_PITCH).is_empty());
    let scene = Scene::compose(&SceneConfig::default().with_display_text(""));
    assert_eq!(scene.cube_count(), 0);
    assert!(scene.cube_positions().is_empty());
}

#[test]
fn unknown_characters_render_as_default_glyph() {
    let groups = compose_word("a?", GLYPH_PITCH);
    assert!(groups.iter().all(|g| g.glyph == Glyph::DEFAULT));
    assert_eq!(groups[0].cubes.len(), Glyph::DEFAULT.cell_count());
}

#[test]
fn default_scene_has_sixty_cubes() {
    let scene = Scene::compose(&SceneConfig::default());
    assert_eq!(scene.groups.len(), 5);
    assert_eq!(scene.cube_count(), 14 + 13 + 12 + 8 + 13);
    assert_eq!(scene.cube_positions().len(), scene.cube_count());
}

#[test]
fn world_positions_apply_rotation_then_translation() {
    let config = SceneConfig::default();
    let scene = Scene::compose(&config);
    let rotation = Quat::from_rotation_y(config.group_rotation_y);
    let local: Vec<Vec3> = scene
        .groups
        .iter()
        .flat_map(|g| g.cubes.iter().map(|c| c.position))
        .collect();
    for (world, local) in scene.cube_positions().iter().zip(local) {
        let expected = rotation * local + config.group_position;
        assert!((*world - expected).length() < 1e-5);
        // rotation about Y leaves height alone
        assert!((world.y - local.y).abs() < 1e-6);
    }
}

#[test]
fn backdrop_variant_uses_its_own_angle() {
    let showcase = Scene::compose(&SceneConfig::for_variant(Variant::Showcase));
    let backdrop = Scene::compose(&SceneConfig::for_variant(Variant::Backdrop));
    assert_eq!(showcase.cube_count(), backdrop.cube_count());
    assert_ne!(showcase.rotation, backdrop.rotation);
}
