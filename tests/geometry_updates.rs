use egui::{Pos2, pos2, vec2};
use sketchboard::geometry::{moved, normalized, resized};
use sketchboard::rough::RoughOptions;
use sketchboard::{BoardError, Element, Position, Shape};

fn element(shape: Shape, p1: Pos2, p2: Pos2) -> Element {
    Element::new(0, shape, p1, p2, &RoughOptions::default())
}

fn rectangle() -> Element {
    element(Shape::Rectangle, pos2(10.0, 10.0), pos2(50.0, 50.0))
}

#[test]
fn test_move_preserves_rectangle_size() {
    let rect = rectangle();
    // Grabbed at (20, 25)
    let offset = vec2(10.0, 15.0);

    for pointer in [pos2(100.0, 120.0), pos2(-3.5, 7.25), pos2(20.0, 25.0)] {
        let (p1, p2) = moved(&rect, pointer, offset);
        assert_eq!(p1, pointer - offset);
        assert_eq!(p2.x - p1.x, 40.0);
        assert_eq!(p2.y - p1.y, 40.0);
    }
}

#[test]
fn test_move_preserves_line_direction() {
    let line = element(Shape::Line, pos2(100.0, 0.0), pos2(0.0, 30.0));
    let (p1, p2) = moved(&line, pos2(60.0, 60.0), vec2(10.0, 10.0));
    assert_eq!(p1, pos2(50.0, 50.0));
    assert_eq!(p2 - p1, vec2(-100.0, 30.0));
}

#[test]
fn test_move_text_translates_both_corners() {
    let text = element(
        Shape::Text {
            value: "note".to_owned(),
        },
        pos2(10.0, 10.0),
        pos2(40.0, 25.0),
    );
    let (p1, p2) = moved(&text, pos2(105.0, 205.0), vec2(5.0, 5.0));
    assert_eq!((p1, p2), (pos2(100.0, 200.0), pos2(130.0, 215.0)));
}

#[test]
fn test_resize_rectangle_handles() {
    let rect = rectangle();
    assert_eq!(
        resized(&rect, pos2(80.0, 90.0), Position::BottomRight),
        Ok((pos2(10.0, 10.0), pos2(80.0, 90.0)))
    );
    assert_eq!(
        resized(&rect, pos2(0.0, 5.0), Position::TopLeft),
        Ok((pos2(0.0, 5.0), pos2(50.0, 50.0)))
    );
    assert_eq!(
        resized(&rect, pos2(70.0, 0.0), Position::TopRight),
        Ok((pos2(10.0, 0.0), pos2(70.0, 50.0)))
    );
    assert_eq!(
        resized(&rect, pos2(0.0, 70.0), Position::BottomLeft),
        Ok((pos2(0.0, 10.0), pos2(50.0, 70.0)))
    );
}

#[test]
fn test_bottom_right_keeps_first_corner() {
    let rect = rectangle();
    for pointer in [pos2(0.0, 0.0), pos2(-20.0, 300.0), pos2(51.0, 49.0)] {
        let (p1, p2) = resized(&rect, pointer, Position::BottomRight).unwrap();
        assert_eq!(p1, rect.p1());
        assert_eq!(p2, pointer);
    }
}

#[test]
fn test_resize_line_endpoints() {
    let line = element(Shape::Line, pos2(0.0, 0.0), pos2(100.0, 0.0));
    assert_eq!(
        resized(&line, pos2(-10.0, 40.0), Position::Start),
        Ok((pos2(-10.0, 40.0), pos2(100.0, 0.0)))
    );
    assert_eq!(
        resized(&line, pos2(120.0, -5.0), Position::End),
        Ok((pos2(0.0, 0.0), pos2(120.0, -5.0)))
    );
}

#[test]
fn test_resize_rejects_foreign_handles() {
    let line = element(Shape::Line, pos2(0.0, 0.0), pos2(100.0, 0.0));
    assert_eq!(
        resized(&line, pos2(1.0, 1.0), Position::TopLeft),
        Err(BoardError::HandleMismatch {
            shape: "line",
            position: Position::TopLeft,
        })
    );
    assert!(resized(&rectangle(), pos2(1.0, 1.0), Position::Inside).is_err());
    assert!(resized(&rectangle(), pos2(1.0, 1.0), Position::End).is_err());

    let text = element(
        Shape::Text {
            value: "x".to_owned(),
        },
        pos2(0.0, 0.0),
        pos2(10.0, 15.0),
    );
    assert!(resized(&text, pos2(1.0, 1.0), Position::BottomRight).is_err());
}

#[test]
fn test_normalize_rectangle_per_axis() {
    let flipped_x = element(Shape::Rectangle, pos2(50.0, 10.0), pos2(10.0, 50.0));
    assert_eq!(normalized(&flipped_x), (pos2(10.0, 10.0), pos2(50.0, 50.0)));

    let flipped_both = element(Shape::Rectangle, pos2(50.0, 50.0), pos2(10.0, 10.0));
    assert_eq!(normalized(&flipped_both), (pos2(10.0, 10.0), pos2(50.0, 50.0)));

    assert_eq!(normalized(&rectangle()), (pos2(10.0, 10.0), pos2(50.0, 50.0)));
}

#[test]
fn test_normalize_line_keeps_segment() {
    let backwards = element(Shape::Line, pos2(100.0, 0.0), pos2(0.0, 0.0));
    assert_eq!(normalized(&backwards), (pos2(0.0, 0.0), pos2(100.0, 0.0)));

    let vertical = element(Shape::Line, pos2(5.0, 50.0), pos2(5.0, 10.0));
    assert_eq!(normalized(&vertical), (pos2(5.0, 10.0), pos2(5.0, 50.0)));

    // Rising diagonal: x is ordered, the segment must not be mirrored
    let rising = element(Shape::Line, pos2(0.0, 10.0), pos2(10.0, 0.0));
    assert_eq!(normalized(&rising), (pos2(0.0, 10.0), pos2(10.0, 0.0)));
}
