// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round-trip and translation-invariance sweeps over the shape calculators.
//!
//! These exercise the two inverse calculators across a deterministic grid
//! of property values, including awkward ones (tiny extents, negative
//! coordinates, far-from-origin centers).

use kurbo::Vec2;
use tracery_coord::WorldPoint;
use tracery_shape::{
    ShapeKind, ShapeProperties, properties_from_vertices, vertices_from_properties,
};

const EPS: f64 = 1e-9;

fn centers() -> impl Iterator<Item = WorldPoint> {
    [-1000.0, -7.25, 0.0, 3.0, 512.5]
        .into_iter()
        .flat_map(|x| [-300.0, 0.0, 41.75].into_iter().map(move |y| WorldPoint::new(x, y)))
}

fn extents() -> [f64; 4] {
    [0.001, 1.0, 37.5, 4096.0]
}

fn properties_close(a: &ShapeProperties, b: &ShapeProperties) -> bool {
    match (a, b) {
        (
            ShapeProperties::Point { position: pa },
            ShapeProperties::Point { position: pb },
        ) => pa.distance(*pb) < EPS,
        (
            ShapeProperties::Line { start: sa, end: ea },
            ShapeProperties::Line { start: sb, end: eb },
        ) => sa.distance(*sb) < EPS && ea.distance(*eb) < EPS,
        (
            ShapeProperties::Circle {
                center: ca,
                radius: ra,
            },
            ShapeProperties::Circle {
                center: cb,
                radius: rb,
            },
        ) => ca.distance(*cb) < EPS && (ra - rb).abs() < EPS,
        (
            ShapeProperties::Rectangle {
                center: ca,
                width: wa,
                height: ha,
            },
            ShapeProperties::Rectangle {
                center: cb,
                width: wb,
                height: hb,
            },
        )
        | (
            ShapeProperties::Diamond {
                center: ca,
                width: wa,
                height: ha,
            },
            ShapeProperties::Diamond {
                center: cb,
                width: wb,
                height: hb,
            },
        ) => ca.distance(*cb) < EPS && (wa - wb).abs() < EPS && (ha - hb).abs() < EPS,
        _ => false,
    }
}

fn property_grid() -> Vec<ShapeProperties> {
    let mut grid = Vec::new();
    for center in centers() {
        grid.push(ShapeProperties::Point { position: center });
        for extent in extents() {
            grid.push(ShapeProperties::Line {
                start: center,
                end: center + Vec2::new(extent, -extent / 3.0),
            });
            grid.push(ShapeProperties::Circle {
                center,
                radius: extent,
            });
            grid.push(ShapeProperties::Rectangle {
                center,
                width: extent,
                height: extent * 0.4,
            });
            grid.push(ShapeProperties::Diamond {
                center,
                width: extent * 0.4,
                height: extent,
            });
        }
    }
    grid
}

#[test]
fn properties_survive_a_vertex_round_trip() {
    for props in property_grid() {
        let vertices = vertices_from_properties(&props);
        assert_eq!(vertices.len(), props.kind().vertex_count());

        let recovered = properties_from_vertices(props.kind(), &vertices);
        assert!(
            properties_close(&props, &recovered),
            "round trip drifted: {props:?} -> {recovered:?}"
        );
    }
}

#[test]
fn vertices_survive_a_properties_round_trip() {
    for props in property_grid() {
        let vertices = vertices_from_properties(&props);
        let regenerated =
            vertices_from_properties(&properties_from_vertices(props.kind(), &vertices));
        for (a, b) in vertices.iter().zip(regenerated.iter()) {
            assert!(
                a.distance(*b) < EPS,
                "vertex drifted for {:?}: {a:?} -> {b:?}",
                props.kind()
            );
        }
    }
}

#[test]
fn uniform_translation_shifts_properties_by_exactly_the_delta() {
    let delta = Vec2::new(123.25, -41.5);
    for props in property_grid() {
        let mut vertices = vertices_from_properties(&props);
        for v in &mut vertices {
            *v += delta;
        }
        let shifted = properties_from_vertices(props.kind(), &vertices);

        let expected = match props {
            ShapeProperties::Point { position } => ShapeProperties::Point {
                position: position + delta,
            },
            ShapeProperties::Line { start, end } => ShapeProperties::Line {
                start: start + delta,
                end: end + delta,
            },
            ShapeProperties::Circle { center, radius } => ShapeProperties::Circle {
                center: center + delta,
                radius,
            },
            ShapeProperties::Rectangle {
                center,
                width,
                height,
            } => ShapeProperties::Rectangle {
                center: center + delta,
                width,
                height,
            },
            ShapeProperties::Diamond {
                center,
                width,
                height,
            } => ShapeProperties::Diamond {
                center: center + delta,
                width,
                height,
            },
        };
        assert!(
            properties_close(&expected, &shifted),
            "translation drifted: expected {expected:?}, got {shifted:?}"
        );
    }
}
