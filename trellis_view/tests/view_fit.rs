// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end fit, focus, and zoom scenarios against a live scene.

use kurbo::Point;
use trellis_geom::Padding;
use trellis_scene::{AttrKey, AttrMap, AttrValue, PrimitiveKind, Scene};
use trellis_view::{Item, ItemKind, ItemRegistry, View, ViewCfg};

fn add_rect(scene: &mut Scene, x: f64, y: f64, w: f64, h: f64) {
    let root = scene.root();
    let mut attrs = AttrMap::new();
    attrs.insert(AttrKey::X, AttrValue::Number(x));
    attrs.insert(AttrKey::Y, AttrValue::Number(y));
    attrs.insert(AttrKey::Width, AttrValue::Number(w));
    attrs.insert(AttrKey::Height, AttrValue::Number(h));
    scene.insert(root, PrimitiveKind::Rect, attrs);
}

fn group_at(scene: &mut Scene, x: f64, y: f64) -> trellis_scene::NodeId {
    let root = scene.root();
    let group = scene.insert(root, PrimitiveKind::Group, AttrMap::new());
    scene.set_local_position(group, x, y);
    group
}

#[test]
fn fit_view_scales_uniformly_and_centers_content() {
    let view = View::new(ViewCfg {
        width: 500.0,
        height: 500.0,
        padding: Padding::from([50.0, 50.0]),
        ..ViewCfg::default()
    });
    let mut scene = Scene::new(500.0, 500.0);
    // Content centered at (10, 150), 1000 wide and 1500 tall.
    add_rect(&mut scene, -490.0, -600.0, 1000.0, 1500.0);

    view.fit_view(&mut scene, None);

    // The taller axis wins: 400 padded pixels over 1500 model units.
    let expected = 400.0 / 1500.0;
    assert!((scene.camera().zoom() - expected).abs() < 1e-9);
    let at_center = scene.point_by_canvas(Point::new(250.0, 250.0));
    assert!((at_center.x - 10.0).abs() < 1e-9);
    assert!((at_center.y - 150.0).abs() < 1e-9);
}

#[test]
fn zoom_about_anchor_pins_the_anchor_and_leaves_bounds_alone() {
    let view = View::new(ViewCfg {
        width: 500.0,
        height: 500.0,
        ..ViewCfg::default()
    });
    let mut scene = Scene::new(500.0, 500.0);
    // Content centered at (100, 100), 150 by 100.
    add_rect(&mut scene, 25.0, 50.0, 150.0, 100.0);
    let bounds_before = scene.world_bounds(scene.root());
    let anchor = Point::new(25.0, 50.0);
    let anchor_canvas_before = scene.canvas_by_point(anchor);

    let applied = view.zoom(&mut scene, 2.0, Some(anchor), None);

    assert_eq!(applied, 2.0);
    assert_eq!(scene.camera().zoom(), 2.0);
    let anchor_canvas_after = scene.canvas_by_point(anchor);
    assert!((anchor_canvas_after.x - anchor_canvas_before.x).abs() < 1e-9);
    assert!((anchor_canvas_after.y - anchor_canvas_before.y).abs() < 1e-9);
    // The camera never touches model geometry.
    assert_eq!(scene.world_bounds(scene.root()), bounds_before);
}

#[test]
fn focus_edge_centers_the_midpoint_of_its_endpoints() {
    let view = View::new(ViewCfg {
        width: 500.0,
        height: 500.0,
        ..ViewCfg::default()
    });
    let mut scene = Scene::new(500.0, 500.0);
    let a = group_at(&mut scene, 10.0, 10.0);
    let b = group_at(&mut scene, 25.0, 40.0);
    let e = group_at(&mut scene, 0.0, 0.0);
    let mut registry = ItemRegistry::new();
    registry.register(Item::new("a", ItemKind::Node, a));
    registry.register(Item::new("b", ItemKind::Node, b));
    registry.register(Item::new(
        "e",
        ItemKind::Edge {
            source: "a".into(),
            target: "b".into(),
        },
        e,
    ));
    view.zoom_to(&mut scene, 2.0, None, None);

    view.focus(&mut scene, &registry, "e", None);

    let at_center = scene.point_by_canvas(view.view_center());
    assert!((at_center.x - 17.5).abs() < 1e-9);
    assert!((at_center.y - 25.0).abs() < 1e-9);
    assert_eq!(scene.camera().zoom(), 2.0);
}

#[test]
fn focus_edge_falls_back_to_the_resolvable_endpoint() {
    let view = View::new(ViewCfg {
        width: 500.0,
        height: 500.0,
        ..ViewCfg::default()
    });
    let mut scene = Scene::new(500.0, 500.0);
    let a = group_at(&mut scene, 10.0, 10.0);
    let e = group_at(&mut scene, 0.0, 0.0);
    let mut registry = ItemRegistry::new();
    registry.register(Item::new("a", ItemKind::Node, a));
    registry.register(Item::new(
        "e",
        ItemKind::Edge {
            source: "a".into(),
            target: "missing".into(),
        },
        e,
    ));

    view.focus(&mut scene, &registry, "e", None);

    let at_center = scene.point_by_canvas(view.view_center());
    assert!((at_center.x - 10.0).abs() < 1e-9);
    assert!((at_center.y - 10.0).abs() < 1e-9);
}

#[test]
fn focus_without_resolvable_endpoints_is_silent() {
    let view = View::new(ViewCfg {
        width: 500.0,
        height: 500.0,
        ..ViewCfg::default()
    });
    let mut scene = Scene::new(500.0, 500.0);
    let e = group_at(&mut scene, 40.0, 40.0);
    let mut registry = ItemRegistry::new();
    registry.register(Item::new(
        "e",
        ItemKind::Edge {
            source: "gone".into(),
            target: "also-gone".into(),
        },
        e,
    ));
    let position = scene.camera().position();

    view.focus(&mut scene, &registry, "e", None);
    view.focus(&mut scene, &registry, "no-such-id", None);

    assert_eq!(scene.camera().position(), position);
}

#[test]
fn focus_items_fits_the_merged_bounds() {
    let view = View::new(ViewCfg {
        width: 600.0,
        height: 300.0,
        ..ViewCfg::default()
    });
    let mut scene = Scene::new(600.0, 300.0);
    let root = scene.root();
    let g1 = scene.insert(root, PrimitiveKind::Group, AttrMap::new());
    let g2 = scene.insert(root, PrimitiveKind::Group, AttrMap::new());
    let mut attrs = AttrMap::new();
    attrs.insert(AttrKey::X, AttrValue::Number(0.0));
    attrs.insert(AttrKey::Y, AttrValue::Number(0.0));
    attrs.insert(AttrKey::Width, AttrValue::Number(100.0));
    attrs.insert(AttrKey::Height, AttrValue::Number(100.0));
    scene.insert(g1, PrimitiveKind::Rect, attrs);
    let mut attrs = AttrMap::new();
    attrs.insert(AttrKey::X, AttrValue::Number(200.0));
    attrs.insert(AttrKey::Y, AttrValue::Number(0.0));
    attrs.insert(AttrKey::Width, AttrValue::Number(100.0));
    attrs.insert(AttrKey::Height, AttrValue::Number(50.0));
    scene.insert(g2, PrimitiveKind::Rect, attrs);
    let first = Item::new("first", ItemKind::Node, g1);
    let second = Item::new("second", ItemKind::Node, g2);

    // Merged bounds (0, 0) to (300, 100): width wins with ratio 2.
    view.focus_items(&mut scene, &[&first, &second], true, None);

    assert!((scene.camera().zoom() - 2.0).abs() < 1e-9);
    let at_center = scene.point_by_canvas(Point::new(300.0, 150.0));
    assert!((at_center.x - 150.0).abs() < 1e-9);
    assert!((at_center.y - 50.0).abs() < 1e-9);
}

#[test]
fn animated_fit_runs_the_zoom_only_after_the_translate() {
    let view = View::new(ViewCfg {
        width: 500.0,
        height: 500.0,
        ..ViewCfg::default()
    });
    let mut scene = Scene::new(500.0, 500.0);
    add_rect(&mut scene, -490.0, -600.0, 1000.0, 1500.0);
    let animate = trellis_view::ViewAnimate::default()
        .with_callback(Box::new(|scene: &mut Scene| {
            scene.set_name(scene.root(), "fit-done");
        }));

    view.fit_view(&mut scene, Some(animate));

    // Translate in flight; zoom not yet scheduled.
    scene.tick(250.0);
    assert_eq!(scene.camera().zoom(), 1.0);
    assert_eq!(scene.name(scene.root()), None);

    // Translate lands exactly; its completion chains the zoom.
    scene.tick(250.0);
    assert_eq!(scene.camera().position(), Point::new(10.0, 150.0));
    assert_eq!(scene.camera().zoom(), 1.0);
    assert_eq!(scene.name(scene.root()), None);

    // Zoom lands exactly and only then the caller's callback fires.
    scene.tick(500.0);
    let expected = 500.0 / 1500.0;
    assert!((scene.camera().zoom() - expected).abs() < 1e-9);
    assert_eq!(scene.name(scene.root()), Some("fit-done"));
    let at_center = scene.point_by_canvas(Point::new(250.0, 250.0));
    assert!((at_center.x - 10.0).abs() < 1e-9);
    assert!((at_center.y - 150.0).abs() < 1e-9);
}
