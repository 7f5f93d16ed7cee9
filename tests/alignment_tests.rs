use scanner_alignment::algorithms::{PairwiseAligner, VoteAligner};
use scanner_alignment::geometry::{rotations, Point3, Rotation};

fn generic_cloud() -> Vec<Point3> {
    // Beacons with no rotational symmetry, so only the true transform can
    // align all of them.
    vec![
        Point3::new(404, -588, -901),
        Point3::new(528, -643, 409),
        Point3::new(-838, 591, 734),
        Point3::new(390, -675, -793),
        Point3::new(-537, -823, -458),
        Point3::new(-485, -357, 347),
        Point3::new(-345, -311, 381),
        Point3::new(-661, -816, -575),
        Point3::new(-876, 649, 763),
        Point3::new(-618, -824, -621),
        Point3::new(553, 345, -567),
        Point3::new(474, 580, 667),
    ]
}

#[test]
fn test_self_alignment_is_identity() {
    let cloud = generic_cloud();
    let aligner = VoteAligner;

    let result = aligner.align(&cloud, &cloud).unwrap();

    assert_eq!(result.coincidences, cloud.len());
    assert_eq!(result.rotation, Rotation::IDENTITY);
    assert_eq!(result.translation, Point3::ZERO);
    assert_eq!(result.algorithm_used, "VoteAligner");
}

#[test]
fn test_recovers_known_transform() {
    let reference = generic_cloud();
    let rotation = rotations()[9];
    let translation = Point3::new(1105, -1205, 1229);

    // Candidate observes the same beacons in its own frame:
    // local = R⁻¹·(world − t), so that world = R·local + t.
    let inverse = rotation.transpose();
    let candidate: Vec<Point3> = reference
        .iter()
        .map(|&w| inverse.apply(w - translation))
        .collect();

    let aligner = VoteAligner;
    let result = aligner.align(&reference, &candidate).unwrap();

    assert_eq!(result.coincidences, reference.len());
    assert_eq!(result.rotation, rotation);
    assert_eq!(result.translation, translation);

    // Applying the recovered transform maps every candidate point onto a
    // reference point.
    let transform = result.transform();
    for &p in &candidate {
        assert!(reference.contains(&transform.apply(p)));
    }
}

#[test]
fn test_partial_overlap_counts_only_shared_points() {
    let shared = generic_cloud();
    let rotation = rotations()[3];
    let translation = Point3::new(68, -1246, -43);
    let inverse = rotation.transpose();

    let mut reference = shared.clone();
    reference.push(Point3::new(9001, 42, -7777));
    reference.push(Point3::new(-8123, 5555, 303));

    let mut candidate: Vec<Point3> = shared
        .iter()
        .map(|&w| inverse.apply(w - translation))
        .collect();
    candidate.push(Point3::new(31337, -2718, 1414));

    let aligner = VoteAligner;
    let result = aligner.align(&reference, &candidate).unwrap();

    assert_eq!(result.coincidences, shared.len());
    assert_eq!(result.rotation, rotation);
    assert_eq!(result.translation, translation);
}

#[test]
fn test_disjoint_clouds_still_return_a_best_guess() {
    // The engine never enforces a minimum overlap; it reports whatever
    // scored best and leaves the interpretation to the caller.
    let reference = vec![Point3::new(0, 0, 0), Point3::new(1, 2, 3)];
    let candidate = vec![Point3::new(100, 200, 300)];

    let aligner = VoteAligner;
    let result = aligner.align(&reference, &candidate).unwrap();

    assert_eq!(result.coincidences, 1);
}

#[test]
fn test_alignment_is_deterministic() {
    let reference = generic_cloud();
    let rotation = rotations()[21];
    let translation = Point3::new(-92, -2380, -20);
    let inverse = rotation.transpose();
    let candidate: Vec<Point3> = reference
        .iter()
        .map(|&w| inverse.apply(w - translation))
        .collect();

    let aligner = VoteAligner;
    let first = aligner.align(&reference, &candidate).unwrap();
    for _ in 0..5 {
        let again = aligner.align(&reference, &candidate).unwrap();
        assert_eq!(again.coincidences, first.coincidences);
        assert_eq!(again.rotation, first.rotation);
        assert_eq!(again.translation, first.translation);
    }
}
