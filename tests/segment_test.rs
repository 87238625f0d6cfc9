use approx::{assert_abs_diff_eq, assert_relative_eq};
use proxim::math::Vector3;
use proxim::primitive::{Segment, SegmentClosest};

#[test]
fn interior_projection_is_perpendicular_to_the_segment() {
    let segment = Segment::new(Vector3::zeros(), Vector3::new(10.0, 0.0, 0.0));
    let query = Vector3::new(3.0, 5.0, 0.0);
    let nearest = segment.nearest_point(&query);
    assert_abs_diff_eq!(nearest.x, 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(nearest.y, 0.0, epsilon = 1e-5);
    // Not clamped, so the offset to the query is perpendicular.
    assert_abs_diff_eq!((query - nearest).dot(&segment.direction()), 0.0, epsilon = 1e-3);
}

#[test]
fn queries_beyond_either_end_clamp_to_endpoints() {
    let segment = Segment::new(Vector3::zeros(), Vector3::new(10.0, 0.0, 0.0));
    let before = segment.nearest_point(&Vector3::new(-5.0, 2.0, 0.0));
    let after = segment.nearest_point(&Vector3::new(15.0, 2.0, 0.0));
    assert_abs_diff_eq!((before - segment.point1).norm(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!((after - segment.point2).norm(), 0.0, epsilon = 1e-6);
    assert_relative_eq!(
        segment.distance_to_point(&Vector3::new(13.0, 4.0, 0.0)),
        5.0,
        epsilon = 1e-5
    );
}

#[test]
fn zero_length_segment_answers_with_its_endpoint() {
    let point = Vector3::new(1.0, 2.0, 3.0);
    let degenerate = Segment::new(point, point);
    let nearest = degenerate.nearest_point(&Vector3::new(4.0, 2.0, 3.0));
    assert_abs_diff_eq!((nearest - point).norm(), 0.0, epsilon = 1e-6);
    assert_relative_eq!(
        degenerate.distance_to_point(&Vector3::new(4.0, 2.0, 3.0)),
        3.0,
        epsilon = 1e-5
    );
}

#[test]
fn interior_feet_survive_when_both_lie_in_domain() {
    let segment1 = Segment::new(Vector3::zeros(), Vector3::new(10.0, 0.0, 0.0));
    let segment2 = Segment::new(Vector3::new(5.0, -3.0, 4.0), Vector3::new(5.0, 3.0, 4.0));
    match segment1.closest_points(&segment2) {
        SegmentClosest::Pair(feet) => {
            assert_abs_diff_eq!((feet.on_first - Vector3::new(5.0, 0.0, 0.0)).norm(), 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!((feet.on_second - Vector3::new(5.0, 0.0, 4.0)).norm(), 0.0, epsilon = 1e-3);
        }
        SegmentClosest::Overlap => panic!("segments are skew"),
    }
}

#[test]
fn out_of_domain_feet_resolve_to_the_nearest_endpoint_pair() {
    let segment1 = Segment::new(Vector3::zeros(), Vector3::new(10.0, 0.0, 0.0));
    let segment2 = Segment::new(Vector3::new(5.0, 3.0, 0.0), Vector3::new(5.0, 10.0, 0.0));
    match segment1.closest_points(&segment2) {
        SegmentClosest::Pair(feet) => {
            assert_abs_diff_eq!((feet.on_first - Vector3::new(5.0, 0.0, 0.0)).norm(), 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!((feet.on_second - Vector3::new(5.0, 3.0, 0.0)).norm(), 0.0, epsilon = 1e-3);
        }
        SegmentClosest::Overlap => panic!("segments are not parallel"),
    }
}

#[test]
fn parallel_disjoint_segments_pick_closest_endpoints() {
    let segment1 = Segment::new(Vector3::zeros(), Vector3::new(5.0, 0.0, 0.0));
    let segment2 = Segment::new(Vector3::new(8.0, 2.0, 0.0), Vector3::new(12.0, 2.0, 0.0));
    match segment1.closest_points(&segment2) {
        SegmentClosest::Pair(feet) => {
            assert_abs_diff_eq!((feet.on_first - segment1.point2).norm(), 0.0, epsilon = 1e-4);
            assert_abs_diff_eq!((feet.on_second - segment2.point1).norm(), 0.0, epsilon = 1e-4);
        }
        SegmentClosest::Overlap => panic!("spans are disjoint"),
    }
}

#[test]
fn parallel_overlapping_spans_report_overlap() {
    let segment1 = Segment::new(Vector3::zeros(), Vector3::new(10.0, 0.0, 0.0));
    let offset = Segment::new(Vector3::new(2.0, 3.0, 0.0), Vector3::new(7.0, 3.0, 0.0));
    let collinear = Segment::new(Vector3::new(3.0, 0.0, 0.0), Vector3::new(8.0, 0.0, 0.0));
    assert!(matches!(
        segment1.closest_points(&offset),
        SegmentClosest::Overlap
    ));
    assert!(matches!(
        segment1.closest_points(&collinear),
        SegmentClosest::Overlap
    ));
}

#[test]
fn degenerate_segment_pairs_reduce_to_point_queries() {
    let segment = Segment::new(Vector3::zeros(), Vector3::new(10.0, 0.0, 0.0));
    let dot = Segment::new(Vector3::new(4.0, 2.0, 0.0), Vector3::new(4.0, 2.0, 0.0));
    match segment.closest_points(&dot) {
        SegmentClosest::Pair(feet) => {
            assert_abs_diff_eq!((feet.on_first - Vector3::new(4.0, 0.0, 0.0)).norm(), 0.0, epsilon = 1e-4);
            assert_abs_diff_eq!((feet.on_second - Vector3::new(4.0, 2.0, 0.0)).norm(), 0.0, epsilon = 1e-4);
        }
        SegmentClosest::Overlap => panic!("a point cannot overlap a segment"),
    }
}
