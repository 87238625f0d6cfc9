use approx::{assert_abs_diff_eq, assert_relative_eq};
use proxim::math::Vector3;
use proxim::primitive::Triangle;

fn right_triangle() -> Triangle {
    Triangle::new(
        Vector3::zeros(),
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 3.0, 0.0),
    )
}

#[test]
fn metrics_of_a_3_4_5_triangle() {
    let triangle = right_triangle();
    assert_relative_eq!(triangle.area(), 6.0, epsilon = 1e-5);
    assert_relative_eq!(triangle.perimeter(), 12.0, epsilon = 1e-5);
    let lengths = triangle.edge_lengths();
    assert_relative_eq!(lengths[0], 4.0, epsilon = 1e-5);
    assert_relative_eq!(lengths[1], 5.0, epsilon = 1e-5);
    assert_relative_eq!(lengths[2], 3.0, epsilon = 1e-5);
    let squared = triangle.edge_lengths_squared();
    assert_relative_eq!(squared[1], 25.0, epsilon = 1e-4);
    assert!(!triangle.is_obtuse());
}

#[test]
fn obtuse_and_flat_triangles_test_obtuse() {
    let obtuse = Triangle::new(
        Vector3::zeros(),
        Vector3::new(10.0, 0.0, 0.0),
        Vector3::new(5.0, 0.1, 0.0),
    );
    assert!(obtuse.is_obtuse());

    let collinear = Triangle::new(
        Vector3::zeros(),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(2.0, 0.0, 0.0),
    );
    assert!(collinear.is_obtuse());
}

#[test]
fn barycenter_is_the_vertex_mean() {
    let center = right_triangle().barycenter();
    assert_abs_diff_eq!(center.x, 4.0 / 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(center.y, 1.0, epsilon = 1e-5);
}

#[test]
fn incenter_of_a_3_4_5_triangle() {
    let triangle = right_triangle();
    let incenter = triangle.incenter();
    assert_abs_diff_eq!(incenter.x, 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(incenter.y, 1.0, epsilon = 1e-5);
    assert_relative_eq!(triangle.inradius(), 1.0, epsilon = 1e-5);
}

#[test]
fn circumcenter_of_a_right_triangle_is_the_hypotenuse_midpoint() {
    let triangle = right_triangle();
    let center = triangle.circumcenter().expect("triangle is proper");
    assert_abs_diff_eq!(center.x, 2.0, epsilon = 1e-4);
    assert_abs_diff_eq!(center.y, 1.5, epsilon = 1e-4);
    assert_relative_eq!(
        triangle.circumradius().expect("triangle is proper"),
        2.5,
        epsilon = 1e-4
    );
}

#[test]
fn circumcenter_of_an_equilateral_triangle_is_its_barycenter() {
    let triangle = Triangle::new(
        Vector3::zeros(),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.5, 3.0_f32.sqrt() * 0.5, 0.0),
    );
    let center = triangle.circumcenter().expect("triangle is proper");
    assert_abs_diff_eq!((center - triangle.barycenter()).norm(), 0.0, epsilon = 1e-5);
    assert_relative_eq!(
        triangle.circumradius().expect("triangle is proper"),
        1.0 / 3.0_f32.sqrt(),
        epsilon = 1e-4
    );
    // All three vertices sit on the circumsphere surface.
    let sphere = triangle.circumsphere().expect("triangle is proper");
    assert_abs_diff_eq!(sphere.distance_to_point(&triangle.c), 0.0, epsilon = 1e-5);
}

#[test]
fn degenerate_triangle_has_no_circumcircle() {
    let collinear = Triangle::new(
        Vector3::zeros(),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(3.0, 3.0, 3.0),
    );
    assert!(collinear.circumcenter().is_none());
    assert!(collinear.circumradius().is_none());
    assert!(collinear.plane().is_none());
    assert_abs_diff_eq!(collinear.area(), 0.0, epsilon = 1e-6);
}

#[test]
fn nearest_point_inside_is_the_plane_projection() {
    let triangle = Triangle::new(
        Vector3::zeros(),
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 4.0, 0.0),
    );
    let nearest = triangle.nearest_point(&Vector3::new(1.0, 1.0, 5.0));
    assert_abs_diff_eq!(nearest.x, 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(nearest.y, 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(nearest.z, 0.0, epsilon = 1e-5);
    assert_relative_eq!(
        triangle.distance_to_point(&Vector3::new(1.0, 1.0, 5.0)),
        5.0,
        epsilon = 1e-5
    );
}

#[test]
fn nearest_point_in_an_edge_region_lands_on_that_edge() {
    let triangle = Triangle::new(
        Vector3::zeros(),
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 4.0, 0.0),
    );
    let nearest = triangle.nearest_point(&Vector3::new(2.0, -3.0, 1.0));
    assert_abs_diff_eq!(nearest.x, 2.0, epsilon = 1e-5);
    assert_abs_diff_eq!(nearest.y, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(nearest.z, 0.0, epsilon = 1e-5);
}

#[test]
fn nearest_point_in_a_vertex_region_lands_on_the_vertex() {
    let triangle = Triangle::new(
        Vector3::zeros(),
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 4.0, 0.0),
    );
    let nearest = triangle.nearest_point(&Vector3::new(-2.0, -2.0, 0.0));
    assert_abs_diff_eq!(nearest.norm(), 0.0, epsilon = 1e-5);

    let past_b = triangle.nearest_point(&Vector3::new(7.0, -1.0, 0.0));
    assert_abs_diff_eq!((past_b - triangle.b).norm(), 0.0, epsilon = 1e-5);
}

#[test]
fn degenerate_triangle_still_answers_nearest_point() {
    let collinear = Triangle::new(
        Vector3::zeros(),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(4.0, 0.0, 0.0),
    );
    let nearest = collinear.nearest_point(&Vector3::new(3.0, 2.0, 0.0));
    assert_abs_diff_eq!(nearest.x, 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(nearest.y, 0.0, epsilon = 1e-5);
}
