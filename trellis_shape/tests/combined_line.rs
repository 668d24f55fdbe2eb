// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior of the combined line-with-arrowheads adapter.

use kurbo::Point;
use trellis_scene::{AttrKey, AttrMap, AttrValue, Scene};
use trellis_shape::{arrow, ArrowEnd, ArrowSpec, BodyKind, ClipCfg, Combined, ShapeType};

fn line_attrs(x1: f64, y1: f64, x2: f64, y2: f64) -> AttrMap {
    let mut attrs = AttrMap::new();
    attrs.insert(AttrKey::X1, AttrValue::Number(x1));
    attrs.insert(AttrKey::Y1, AttrValue::Number(y1));
    attrs.insert(AttrKey::X2, AttrValue::Number(x2));
    attrs.insert(AttrKey::Y2, AttrValue::Number(y2));
    attrs
}

fn arrowed_line(scene: &mut Scene) -> Combined {
    let root = scene.root();
    Combined::new(
        scene,
        root,
        BodyKind::Line,
        line_attrs(0.0, 0.0, 30.0, 40.0),
        ArrowSpec::Default,
        ArrowSpec::Default,
    )
}

#[test]
fn stroke_fans_out_to_body_and_both_heads() {
    let mut scene = Scene::new(500.0, 500.0);
    let line = arrowed_line(&mut scene);
    line.set_attr(&mut scene, AttrKey::Stroke, AttrValue::Text("#123456".into()));
    let expected = Some(AttrValue::Text("#123456".into()));
    assert_eq!(line.body().attr(&scene, AttrKey::Stroke), expected);
    assert_eq!(
        line.start_head().unwrap().attr(&scene, AttrKey::Stroke),
        expected
    );
    assert_eq!(
        line.end_head().unwrap().attr(&scene, AttrKey::Stroke),
        expected
    );
    assert_eq!(line.attr(&scene, AttrKey::Stroke), expected);
}

#[test]
fn geometry_only_attrs_stay_on_the_body() {
    let mut scene = Scene::new(500.0, 500.0);
    let line = arrowed_line(&mut scene);
    line.set_attr(&mut scene, AttrKey::X2, AttrValue::Number(60.0));
    assert_eq!(
        line.body().attr(&scene, AttrKey::X2),
        Some(AttrValue::Number(60.0))
    );
    assert_eq!(line.start_head().unwrap().attr(&scene, AttrKey::X2), None);
}

#[test]
fn full_read_strips_position_and_internal_slots() {
    let mut scene = Scene::new(500.0, 500.0);
    let line = arrowed_line(&mut scene);
    let attrs = line.attrs(&scene);
    assert!(!attrs.contains_key(&AttrKey::X));
    assert!(!attrs.contains_key(&AttrKey::Y));
    assert!(attrs.contains_key(&AttrKey::X1));
    assert_eq!(line.start_arrow(), &ArrowSpec::Default);
    assert_eq!(line.end_arrow(), &ArrowSpec::Default);
}

#[test]
fn hit_width_prefers_append_width_then_line_width_then_one() {
    let mut scene = Scene::new(500.0, 500.0);
    let root = scene.root();

    let mut attrs = line_attrs(0.0, 0.0, 10.0, 0.0);
    attrs.insert(AttrKey::LineWidth, AttrValue::Number(4.0));
    attrs.insert(AttrKey::LineAppendWidth, AttrValue::Number(9.0));
    let a = Combined::new(&mut scene, root, BodyKind::Line, attrs, ArrowSpec::None, ArrowSpec::None);
    assert_eq!(
        a.body().attr(&scene, AttrKey::LineAppendWidth),
        Some(AttrValue::Number(9.0))
    );

    let mut attrs = line_attrs(0.0, 0.0, 10.0, 0.0);
    attrs.insert(AttrKey::LineWidth, AttrValue::Number(4.0));
    let b = Combined::new(&mut scene, root, BodyKind::Line, attrs, ArrowSpec::None, ArrowSpec::None);
    assert_eq!(
        b.body().attr(&scene, AttrKey::LineAppendWidth),
        Some(AttrValue::Number(4.0))
    );

    let c = Combined::new(
        &mut scene,
        root,
        BodyKind::Line,
        line_attrs(0.0, 0.0, 10.0, 0.0),
        ArrowSpec::None,
        ArrowSpec::None,
    );
    assert_eq!(
        c.body().attr(&scene, AttrKey::LineAppendWidth),
        Some(AttrValue::Number(1.0))
    );
}

#[test]
fn length_and_point_at_ignore_arrowheads() {
    let mut scene = Scene::new(500.0, 500.0);
    let line = arrowed_line(&mut scene);
    // 3-4-5 triangle scaled by 10.
    assert!((line.total_length(&scene) - 50.0).abs() < 1e-6);
    let mid = line.point_at(&scene, 0.5).unwrap();
    assert!((mid.x - 15.0).abs() < 1e-6);
    assert!((mid.y - 20.0).abs() < 1e-6);
    let start = line.point_at(&scene, 0.0).unwrap();
    assert!(start.distance(Point::new(0.0, 0.0)) < 1e-6);
    let end = line.point_at(&scene, 1.0).unwrap();
    assert!(end.distance(Point::new(30.0, 40.0)) < 1e-6);
}

#[test]
fn tangents_put_the_reference_end_second() {
    let mut scene = Scene::new(500.0, 500.0);
    let line = arrowed_line(&mut scene);
    assert_eq!(
        line.start_tangent(&scene),
        Some([Point::new(30.0, 40.0), Point::new(0.0, 0.0)])
    );
    assert_eq!(
        line.end_tangent(&scene),
        Some([Point::new(0.0, 0.0), Point::new(30.0, 40.0)])
    );
}

#[test]
fn curved_body_tangents_use_the_control_points() {
    let mut scene = Scene::new(500.0, 500.0);
    let root = scene.root();
    let mut attrs = AttrMap::new();
    attrs.insert(
        AttrKey::Path,
        AttrValue::Text("M 0,0 C 10,20 30,20 40,0".into()),
    );
    let curve = Combined::new(
        &mut scene,
        root,
        BodyKind::Path,
        attrs,
        ArrowSpec::None,
        ArrowSpec::None,
    );
    assert_eq!(
        curve.start_tangent(&scene),
        Some([Point::new(10.0, 20.0), Point::new(0.0, 0.0)])
    );
    assert_eq!(
        curve.end_tangent(&scene),
        Some([Point::new(30.0, 20.0), Point::new(40.0, 0.0)])
    );
}

#[test]
fn replacing_an_arrow_updates_head_and_offset() {
    let mut scene = Scene::new(500.0, 500.0);
    let mut line = arrowed_line(&mut scene);
    let old_head = line.end_head().unwrap();
    line.replace_head(
        &mut scene,
        ArrowEnd::End,
        ArrowSpec::Custom {
            path: arrow::triangle(10.0, 15.0),
            d: 4.0,
            style: AttrMap::new(),
        },
    );
    assert!(!scene.is_alive(old_head.node()));
    assert_eq!(line.head_offset(ArrowEnd::End), -8.0);
    let new_head = line.end_head().unwrap();
    assert!(new_head.attr(&scene, AttrKey::Path).is_some());

    line.replace_head(&mut scene, ArrowEnd::End, ArrowSpec::None);
    assert!(line.end_head().is_none());
    assert_eq!(line.head_offset(ArrowEnd::End), 0.0);
}

#[test]
fn prebuilt_head_is_adopted_unchanged() {
    let mut scene = Scene::new(500.0, 500.0);
    let root = scene.root();
    let mut head_attrs = AttrMap::new();
    head_attrs.insert(
        AttrKey::Path,
        AttrValue::Text(arrow::diamond(15.0, 15.0)),
    );
    head_attrs.insert(AttrKey::Fill, AttrValue::Text("#abc".into()));
    let prebuilt =
        trellis_shape::Shape::create_detached(&mut scene, ShapeType::Path, head_attrs).unwrap();
    let line = Combined::new(
        &mut scene,
        root,
        BodyKind::Line,
        line_attrs(0.0, 0.0, 100.0, 0.0),
        ArrowSpec::None,
        ArrowSpec::Drawable(prebuilt),
    );
    let head = line.end_head().unwrap();
    assert_eq!(head.node(), prebuilt.node());
    assert_eq!(scene.parent(head.node()), Some(line.node()));
    // Its own styling survives adoption.
    assert_eq!(
        head.attr(&scene, AttrKey::Fill),
        Some(AttrValue::Text("#abc".into()))
    );
    assert_eq!(line.head_offset(ArrowEnd::End), 0.0);
}

#[test]
fn nan_coordinates_scrub_to_zero() {
    let mut scene = Scene::new(500.0, 500.0);
    let root = scene.root();
    let mut attrs = AttrMap::new();
    attrs.insert(
        AttrKey::Points,
        AttrValue::Points(vec![(0.0, f64::NAN), (10.0, 10.0), (f64::NAN, 20.0)]),
    );
    let poly = Combined::new(
        &mut scene,
        root,
        BodyKind::Polyline,
        attrs,
        ArrowSpec::None,
        ArrowSpec::None,
    );
    assert_eq!(
        poly.body().attr(&scene, AttrKey::Points),
        Some(AttrValue::Points(vec![(0.0, 0.0), (10.0, 10.0), (0.0, 20.0)]))
    );
}

#[test]
fn path_clip_uses_a_plain_shape() {
    let mut scene = Scene::new(500.0, 500.0);
    let line = arrowed_line(&mut scene);
    let clip = line
        .set_clip(
            &mut scene,
            ClipCfg {
                shape_type: ShapeType::Path,
                attrs: {
                    let mut attrs = AttrMap::new();
                    attrs.insert(AttrKey::Path, AttrValue::Text("M 0,0 L 10,0 L 10,10 Z".into()));
                    attrs
                },
            },
        )
        .unwrap();
    assert_eq!(clip.shape_type(), ShapeType::Path);
    assert_eq!(line.clip(&scene), Some(clip.node()));
    // A plain path node has no children of its own, unlike a combined
    // group carrying body and head drawables.
    assert!(scene.children(clip.node()).is_empty());
}

#[test]
fn heads_sit_on_their_endpoints() {
    let mut scene = Scene::new(500.0, 500.0);
    let root = scene.root();
    let line = Combined::new(
        &mut scene,
        root,
        BodyKind::Line,
        line_attrs(0.0, 0.0, 100.0, 0.0),
        ArrowSpec::Default,
        ArrowSpec::Custom {
            path: arrow::triangle(10.0, 15.0),
            d: 5.0,
            style: AttrMap::new(),
        },
    );
    let start = scene
        .local_position(line.start_head().unwrap().node())
        .unwrap();
    assert_eq!(start, Point::new(0.0, 0.0));
    // End head pulled inward by -2 * d along +X.
    let end = scene.local_position(line.end_head().unwrap().node()).unwrap();
    assert_eq!(end, Point::new(90.0, 0.0));
}
