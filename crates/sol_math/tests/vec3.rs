mod support;

use sol_math::{convert::axis_to_quat, Scalar, Vec3, Vec4};
use support::{assert_near, assert_within_eps, deg, random_array, random_scalar, rng, TOLERANCE};

fn random_vec3(rng: &mut rand_chacha::ChaCha8Rng) -> Vec3 {
    Vec3::new(random_scalar(rng), random_scalar(rng), random_scalar(rng))
}

#[test]
fn test_vec3_new() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));

    let t = (1.0, 2.0, 3.0);
    assert_eq!(t, Vec3::from(t).into());

    let a = [1.0, 2.0, 3.0];
    let a1: [Scalar; 3] = Vec3::from(a).into();
    assert_eq!(a, a1);

    assert_eq!(Vec3::new(1.0, 0.0, 0.0), Vec3::X);
    assert_eq!(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
    assert_eq!(Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
}

#[test]
fn test_vec3_size() {
    assert_eq!(3 * size_of::<Scalar>(), size_of::<Vec3>());
}

#[test]
fn test_vec3_accessors() {
    let mut v = Vec3::ZERO;
    v.x = 1.0;
    v[1] = 2.0;
    *v.as_array_mut().last_mut().unwrap() = 3.0;
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_vec3_ops() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(a + a, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(a - a, Vec3::ZERO);
    assert_eq!(a * a, Vec3::new(1.0, 4.0, 9.0));
    assert_eq!(a / a, Vec3::ONE);
    assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
    assert_eq!(6.0 / a, Vec3::new(6.0, 3.0, 2.0));
    assert_eq!(4.0 - a, Vec3::new(3.0, 2.0, 1.0));
    assert_eq!(a - 1.0, Vec3::new(0.0, 1.0, 2.0));
    assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
}

#[test]
fn test_vec3_sub_mul_differ_from_add() {
    let mut rng = rng();
    for _ in 0..100 {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        assert_eq!(a.sub(b), Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z));
        assert_eq!(a.mul(b), Vec3::new(a.x * b.x, a.y * b.y, a.z * b.z));
    }
}

#[test]
fn test_vec3_cross() {
    assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);

    let mut rng = rng();
    for _ in 0..100 {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        let c = a.cross(b);
        assert_eq!(b.cross(a), -c);
        let scale = a.mag() * b.mag() * (a.mag() + b.mag());
        assert!(c.dot(a).abs() <= scale * TOLERANCE * 8.0);
        assert!(c.dot(b).abs() <= scale * TOLERANCE * 8.0);
    }
}

#[test]
fn test_vec3_rot_quarter_turn() {
    let q = axis_to_quat(Vec3::Z.extend(deg(90.0)));
    assert_near(Vec3::X.rot(q).as_array(), &[0.0, 1.0, 0.0], TOLERANCE);
    assert_near(Vec3::Y.rot(q).as_array(), &[-1.0, 0.0, 0.0], TOLERANCE);
    assert_near(Vec3::Z.rot(q).as_array(), &[0.0, 0.0, 1.0], TOLERANCE);

    let q = axis_to_quat(Vec3::X.extend(deg(90.0)));
    assert_near(Vec3::Y.rot(q).as_array(), &[0.0, 0.0, 1.0], TOLERANCE);
}

#[test]
fn test_vec3_rot_preserves_length() {
    let mut rng = rng();
    for _ in 0..100 {
        let axis = random_vec3(&mut rng).norm();
        let q = axis_to_quat(axis.extend(random_scalar(&mut rng)));
        let v = random_vec3(&mut rng);
        let r = v.rot(q);
        assert!((r.mag() - v.mag()).abs() <= v.mag() * TOLERANCE * 16.0, "{v:?} by {q:?}");
    }
}

#[test]
fn test_vec3_rot_identity() {
    let v = Vec3::new(4.0, -5.0, 6.0);
    assert_eq!(v.rot(Vec4::W), v);
}

#[test]
fn test_vec3_mag_norm() {
    assert_eq!(Vec3::new(1.0, 4.0, 8.0).mag(), 9.0);
    assert_eq!(Vec3::new(0.0, -7.0, 0.0).norm(), -Vec3::Y);
    let n = Vec3::ZERO.norm();
    assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
}

#[test]
fn test_vec3_avg() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-1.0, 4.0, 0.0);
    assert_eq!(a.avg(b), Vec3::new(0.0, 3.0, 1.5));
    assert_eq!(a.avg(a), a);
    assert_eq!(a.avgf(-3.0), Vec3::new(-1.0, -0.5, 0.0));
}

#[test]
fn test_vec3_avg_is_halved_sum() {
    let mut rng = rng();
    for _ in 0..1000 {
        let a = Vec3::from_array(random_array(&mut rng));
        let b = Vec3::from_array(random_array(&mut rng));
        assert_eq!(a.avg(b), a.add(b).divf(2.0), "{a:?} {b:?}");
    }
}

#[test]
fn test_vec3_add_sub_round_trip() {
    let mut rng = rng();
    for _ in 0..1000 {
        let a = Vec3::from_array(random_array(&mut rng));
        let b = Vec3::from_array(random_array(&mut rng));
        let scale: [Scalar; Vec3::LANES] = core::array::from_fn(|i| a[i].abs() + b[i].abs());
        assert_within_eps(a.add(b).sub(b).as_array(), a.as_array(), &scale);
    }
}

#[test]
fn test_vec3_mul_div_round_trip() {
    let mut rng = rng();
    for _ in 0..1000 {
        let a = Vec3::from_array(random_array(&mut rng));
        let b = Vec3::from_array(random_array(&mut rng));
        assert_within_eps(a.mul(b).div(b).as_array(), a.as_array(), a.as_array());
    }
}
