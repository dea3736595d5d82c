//! Property-based tests for the reader.

mod common;

use common::{document_with, read_str, read_with_chunk_size};
use ggdxf::io::dxf::TokenStream;
use proptest::prelude::*;
use std::io::Cursor;

fn layer_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,11}"
}

fn coordinate() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn vertex() -> impl Strategy<Value = (f64, f64, f64)> {
    (coordinate(), coordinate(), coordinate())
}

#[derive(Debug, Clone)]
enum Shape {
    Point(String, (f64, f64, f64)),
    Polyline(String, i32, Vec<(f64, f64, f64)>),
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (layer_name(), vertex()).prop_map(|(l, v)| Shape::Point(l, v)),
        (layer_name(), 0..256i32, prop::collection::vec(vertex(), 0..8))
            .prop_map(|(l, f, vs)| Shape::Polyline(l, f, vs)),
    ]
}

fn render(shapes: &[Shape]) -> String {
    document_with(|mut b| {
        for shape in shapes {
            b = match shape {
                Shape::Point(layer, (x, y, z)) => b.point(layer, *x, *y, *z),
                Shape::Polyline(layer, flags, vertices) => b.polyline(layer, *flags, vertices),
            };
        }
        b
    })
    .eof()
    .build()
}

proptest! {
    #[test]
    fn prop_entities_round_out_in_order(shapes in prop::collection::vec(shape(), 0..20)) {
        let doc = read_str(&render(&shapes)).unwrap();
        prop_assert_eq!(doc.entities.len(), shapes.len());

        for (entity, shape) in doc.entities.iter().zip(&shapes) {
            match shape {
                Shape::Point(layer, (x, y, z)) => {
                    let point = entity.as_point().unwrap();
                    prop_assert_eq!(&point.common.layer, layer);
                    prop_assert_eq!(point.location.x, *x);
                    prop_assert_eq!(point.location.y, *y);
                    prop_assert_eq!(point.location.z, *z);
                }
                Shape::Polyline(layer, flags, vertices) => {
                    let polyline = entity.as_polyline().unwrap();
                    prop_assert_eq!(&polyline.common.layer, layer);
                    prop_assert_eq!(polyline.raw_flags(), *flags);
                    prop_assert_eq!(polyline.vertices.len(), vertices.len());
                    for (v, (x, y, _)) in polyline.vertices.iter().zip(vertices) {
                        prop_assert_eq!(&v.layer, layer);
                        prop_assert_eq!(v.location.x, *x);
                        prop_assert_eq!(v.location.y, *y);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_parse_is_deterministic(shapes in prop::collection::vec(shape(), 0..10)) {
        let content = render(&shapes);
        let first = read_str(&content).unwrap();
        let second = read_str(&content).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_chunk_size_independent(
        shapes in prop::collection::vec(shape(), 1..6),
        chunk_size in 1usize..64,
    ) {
        let content = render(&shapes);
        let reference = read_str(&content).unwrap();
        let chunked = read_with_chunk_size(&content, chunk_size).unwrap();
        prop_assert_eq!(reference, chunked);
    }

    #[test]
    fn prop_pushback_is_lifo(
        tokens in prop::collection::vec("[A-Z0-9]{1,8}", 1..10),
        tail in "[a-z]{1,8}",
    ) {
        let mut stream = TokenStream::from_reader(Cursor::new(format!("{}\n", tail).into_bytes()));
        for token in &tokens {
            stream.push_back(token.clone());
        }
        prop_assert_eq!(stream.pushback_depth(), tokens.len());
        for token in tokens.iter().rev() {
            prop_assert_eq!(&stream.next().unwrap(), token);
        }
        prop_assert_eq!(stream.next().unwrap(), tail);
        prop_assert!(stream.next().is_err());
    }

    #[test]
    fn prop_truncated_input_is_rejected(
        shapes in prop::collection::vec(shape(), 1..6),
        cut in 0usize..10_000,
    ) {
        let content = render(&shapes);
        let lines: Vec<&str> = content.lines().collect();
        // Rendered documents end with `0 ENDSEC 0 EOF`
        let entities_end = lines.len() - 3;
        prop_assert_eq!(lines[entities_end], "ENDSEC");

        let keep = cut % lines.len();
        let result = read_str(&lines[..keep].join("\n"));
        if keep <= entities_end {
            prop_assert!(result.is_err(), "cut after {} of {} lines parsed", keep, lines.len());
        } else if keep == entities_end + 1 {
            prop_assert!(result.is_ok());
        }
    }
}
