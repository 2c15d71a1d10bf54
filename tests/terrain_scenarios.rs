//! Concrete generation scenarios on small grids.

use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use terrain_engine::{Terrain, TerrainConfig, TerrainError};

fn generate(div: u32, extent: (f32, f32, f32, f32), seed: u64) -> Terrain {
    let (min_x, max_x, min_y, max_y) = extent;
    let config = TerrainConfig::new(div, min_x, max_x, min_y, max_y);
    Terrain::generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn two_by_two_grid() {
    let t = generate(2, (0.0, 2.0, 0.0, 2.0), 10);

    assert_eq!(t.vertex_count(), 9);
    assert_eq!(t.triangle_count(), 8);
    assert_eq!(t.triangles().len(), 24);
    assert_eq!(t.edges().len(), 48);

    for row in 0..=2 {
        for col in 0..=2 {
            let v = t.vertex(row, col).unwrap();
            assert_eq!((v.x, v.y), (col as f32, row as f32));
        }
    }

    let h = |row, col| t.height(row, col).unwrap();
    let (bl, br, tl, tr) = (h(0, 0), h(0, 2), h(2, 0), h(2, 2));
    for z in [bl, br, tl, tr] {
        assert!((0.0..0.5).contains(&z));
    }

    // One jitter draw, bounded by roughness * jitter_scale = 0.4
    let center = h(1, 1);
    let jitter = center - 0.25 * (bl + br + tl + tr);
    assert!((-1e-6..0.4).contains(&jitter), "jitter {jitter}");

    // The same jitter lands on every edge midpoint
    let edges = [
        (h(0, 1), bl, br),
        (h(1, 0), bl, tl),
        (h(2, 1), tl, tr),
        (h(1, 2), br, tr),
    ];
    for (mid, a, b) in edges {
        let expected = (center + a + b) / 3.0 + jitter;
        assert!((mid - expected).abs() < 1e-5, "{mid} != {expected}");
    }
}

#[test]
fn single_cell() {
    let t = generate(1, (-1.0, 1.0, -1.0, 1.0), 3);

    assert_eq!(t.vertex_count(), 4);
    assert_eq!(t.triangles(), &[0, 1, 2, 1, 3, 2]);
    assert_eq!(t.edges(), &[0, 1, 1, 2, 2, 0, 1, 3, 3, 2, 2, 1]);

    // No recursion: only the corners are touched
    for z in t.positions().chunks_exact(3).map(|v| v[2]) {
        assert!((0.0..0.5).contains(&z));
    }

    for n in t.normals().chunks_exact(3) {
        let n = Vec3::from_slice(n);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(n.z > 0.0);
    }
}

#[test]
fn flight_demo_size() {
    let config = TerrainConfig::default().with_seed(2024);
    let t = Terrain::from_config(&config).unwrap();
    assert_eq!(t.vertex_count(), 201 * 201);
    assert_eq!(t.triangles().len(), 6 * 200 * 200);
    assert_eq!(t.edges().len(), 12 * 200 * 200);
    assert!(t.normals().iter().all(|v| v.is_finite()));

    let v = t.vertex(200, 200).unwrap();
    assert!((v.x - 5.0).abs() < 1e-5 && (v.y - 5.0).abs() < 1e-5);
    assert_eq!(t.vertex(200, 201), None);
    assert_eq!(t.vertex(201, 200), None);
}

#[test]
fn fixed_seed_is_reproducible() {
    let a = generate(16, (0.0, 1.0, 0.0, 1.0), 99);
    let b = generate(16, (0.0, 1.0, 0.0, 1.0), 99);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.normals(), b.normals());
}

#[test]
fn zero_roughness_gives_smooth_interpolation() {
    let config = TerrainConfig {
        roughness: 0.0,
        ..TerrainConfig::new(4, 0.0, 1.0, 0.0, 1.0)
    };
    let t = Terrain::generate(&config, &mut StdRng::seed_from_u64(5)).unwrap();
    let h = |row, col| t.height(row, col).unwrap();
    let corners = [h(0, 0), h(0, 4), h(4, 0), h(4, 4)];
    let mean = corners.iter().sum::<f32>() / 4.0;
    assert!((h(2, 2) - mean).abs() < 1e-6);
}

#[test]
fn bad_parameters_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = Terrain::generate(&TerrainConfig::new(0, 0.0, 1.0, 0.0, 1.0), &mut rng).unwrap_err();
    assert!(matches!(err, TerrainError::InvalidDivisions(0)));

    let err = Terrain::generate(&TerrainConfig::new(4, 2.0, 1.0, 0.0, 1.0), &mut rng).unwrap_err();
    assert!(matches!(err, TerrainError::EmptyExtent { axis: 'x', .. }));

    let err = Terrain::generate(&TerrainConfig::new(4, 0.0, 1.0, 1.0, 1.0), &mut rng).unwrap_err();
    assert!(matches!(err, TerrainError::EmptyExtent { axis: 'y', .. }));
}
