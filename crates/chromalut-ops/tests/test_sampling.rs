use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use chromalut_grid::{axis_coord, Grid, LutError, MAX_AXIS_SIZE, MIN_AXIS_SIZE};
use chromalut_ops::{
    amplify::amplify,
    interpolation::{sample, sample_cubic, sample_linear, InterpolationMode},
    resize::resize,
    transform::transform,
};

const COORDS: [f32; 11] = [-1.1, -0.3, -0.01, 0.0, 0.1, 0.33, 0.5, 0.9, 1.0, 1.02, 1.1];

fn assert_close(a: &[f32], b: &[f32], epsilon: f32) {
    assert_eq!(a.len(), b.len());
    for (a, b) in a.iter().zip(b) {
        assert_relative_eq!(a, b, epsilon = epsilon);
    }
}

#[test]
fn test_identity_linear_all_sizes() -> Result<(), LutError> {
    for n in MIN_AXIS_SIZE..=MAX_AXIS_SIZE {
        let identity = Grid::identity(n)?;
        for r in COORDS {
            for g in [COORDS[0], COORDS[4], COORDS[8]] {
                for b in [COORDS[1], COORDS[6], COORDS[10]] {
                    let sample = sample_linear(&identity, [r, g, b]);
                    assert_close(&sample, &[r, g, b], 1e-5);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_identity_cubic_all_sizes() -> Result<(), LutError> {
    for n in 4..=MAX_AXIS_SIZE {
        let identity = Grid::identity(n)?;
        for r in COORDS {
            for g in [COORDS[0], COORDS[2], COORDS[9]] {
                for b in [COORDS[1], COORDS[5], COORDS[10]] {
                    let sample = sample_cubic(&identity, [r, g, b])?;
                    assert_close(&sample, &[r, g, b], 1e-5);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_identity_non_cubic_shape() -> Result<(), LutError> {
    let identity = Grid::identity([4, 9, 17])?;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let coord: [f32; 3] = std::array::from_fn(|_| rng.random_range(-1.5..2.5));
        for mode in [InterpolationMode::Linear, InterpolationMode::Cubic] {
            let sample = sample(&identity, coord, mode)?;
            assert_close(&sample, &coord, 1e-5);
        }
    }
    Ok(())
}

#[test]
fn test_cubic_requires_size_four() -> Result<(), LutError> {
    let small = Grid::identity(2)?;
    assert!(matches!(
        sample_cubic(&small, [0.5; 3]),
        Err(LutError::UnsupportedSize(_))
    ));

    let flat = Grid::identity([4, 3, 4])?;
    assert!(matches!(
        sample(&flat, [0.5; 3], InterpolationMode::Cubic),
        Err(LutError::UnsupportedSize(_))
    ));

    let grid = Grid::identity(4)?;
    assert_close(&sample_cubic(&grid, [0.5; 3])?, &[0.5; 3], 1e-6);
    Ok(())
}

#[test]
fn test_cubic_is_smoother_than_linear() -> Result<(), LutError> {
    let grid = Grid::generate(9, |r, g, b| [r * r * r, g * g, (b * 2.0).sin()])?;
    let mut rng = StdRng::seed_from_u64(42);

    let (mut err_linear, mut err_cubic) = (0.0f32, 0.0f32);
    for _ in 0..1000 {
        let [r, g, b]: [f32; 3] = std::array::from_fn(|_| rng.random_range(0.0..1.0));
        let expected = [r * r * r, g * g, (b * 2.0).sin()];

        let linear = sample_linear(&grid, [r, g, b]);
        let cubic = sample_cubic(&grid, [r, g, b])?;
        for c in 0..3 {
            err_linear = err_linear.max((linear[c] - expected[c]).abs());
            err_cubic = err_cubic.max((cubic[c] - expected[c]).abs());
        }
    }

    assert!(err_linear < 0.02, "linear error {err_linear}");
    assert!(err_cubic < err_linear, "cubic {err_cubic} linear {err_linear}");
    Ok(())
}

#[test]
fn test_resize_roundtrip() -> Result<(), LutError> {
    let source = Grid::generate([9, 5, 7], |r, g, b| [r * r, g.sqrt(), (b * 3.0).cos()])?;
    for mode in [InterpolationMode::Linear, InterpolationMode::Cubic] {
        let up = resize(&source, [33, 17, 25], mode)?;
        let down = resize(&up, source.size(), mode)?;
        assert_eq!(down.size(), source.size());
        assert_close(down.as_slice(), source.as_slice(), 1e-5);
    }
    Ok(())
}

fn polynomial(r: f32, g: f32, b: f32) -> [f32; 3] {
    [r * r, g * g * g, 0.5 * b * b + 0.25 * b]
}

#[test]
fn test_resize_roundtrip_unaligned() -> Result<(), LutError> {
    let source = Grid::generate(9, polynomial)?;

    for (mode, tolerance) in [
        (InterpolationMode::Linear, 0.02),
        (InterpolationMode::Cubic, 0.012),
    ] {
        // 20 samples per axis do not line up with the 9 source samples
        let up = resize(&source, 20, mode)?;
        for z in 0..20 {
            for y in 0..20 {
                for x in 0..20 {
                    let [r, g, b] = [axis_coord(x, 20), axis_coord(y, 20), axis_coord(z, 20)];
                    assert_close(up.point(x, y, z), &polynomial(r, g, b), tolerance);
                }
            }
        }

        let down = resize(&up, 9, mode)?;
        assert_close(down.as_slice(), source.as_slice(), tolerance);
    }
    Ok(())
}

#[test]
fn test_transform_with_identity() -> Result<(), LutError> {
    let source = Grid::generate([5, 6, 7], |r, g, b| [r * g, 1.0 - b, g * g * 1.1])?;
    let identity = Grid::identity(11)?;
    for mode in [InterpolationMode::Linear, InterpolationMode::Cubic] {
        let res = transform(&source, &identity, None, mode)?;
        assert_close(res.as_slice(), source.as_slice(), 1e-5);
    }
    Ok(())
}

#[test]
fn test_transform_with_inverse() -> Result<(), LutError> {
    let f = Grid::generate(17, |r, g, b| [r.powf(1.2), g.powf(1.2), b.powf(1.2)])?;
    let f_inv = Grid::generate(17, |r, g, b| {
        [r.powf(1.0 / 1.2), g.powf(1.0 / 1.2), b.powf(1.0 / 1.2)]
    })?;
    let identity = Grid::identity(17)?;

    let res = transform(&f, &f_inv, None, InterpolationMode::Linear)?;
    assert_close(res.as_slice(), identity.as_slice(), 0.01);

    let res = transform(&f, &f_inv, None, InterpolationMode::Cubic)?;
    assert_close(res.as_slice(), identity.as_slice(), 0.02);
    Ok(())
}

#[test]
fn test_amplify_then_transform() -> Result<(), LutError> {
    let source = Grid::generate(7, |r, g, b| [g, b, r])?;
    let weaker = amplify(&source, 0.5)?;
    let identity = Grid::identity(7)?;

    let res = transform(&weaker, &identity, None, InterpolationMode::Linear)?;
    for ((out, src), id) in res.points().zip(source.points()).zip(identity.points()) {
        for c in 0..3 {
            assert_relative_eq!(out[c], (src[c] + id[c]) * 0.5, epsilon = 1e-5);
        }
    }
    Ok(())
}
