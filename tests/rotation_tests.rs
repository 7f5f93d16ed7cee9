use scanner_alignment::geometry::{rotations, Point3, Rotation};
use std::collections::HashSet;

#[test]
fn test_group_has_exactly_24_members() {
    assert_eq!(rotations().len(), 24);

    let distinct: HashSet<&Rotation> = rotations().iter().collect();
    assert_eq!(distinct.len(), 24);
}

#[test]
fn test_members_are_proper_rotations() {
    for rot in rotations() {
        assert_eq!(rot.determinant(), 1);
        assert!(rot.is_orthogonal());
        for row in rot.matrix() {
            for &entry in row {
                assert!((-1..=1).contains(&entry), "entry {} out of range", entry);
            }
        }
    }
}

#[test]
fn test_group_contains_identity() {
    assert!(rotations().contains(&Rotation::IDENTITY));
}

#[test]
fn test_group_closed_under_composition() {
    let members: HashSet<Rotation> = rotations().iter().copied().collect();
    for a in rotations() {
        for b in rotations() {
            assert!(
                members.contains(&a.compose(b)),
                "product of two group members left the group"
            );
        }
    }
}

#[test]
fn test_rotate_then_inverse_round_trips() {
    let points = vec![
        Point3::new(404, -588, -901),
        Point3::new(528, -643, 409),
        Point3::new(-838, 591, 734),
        Point3::new(7, 0, -3),
    ];

    for rot in rotations() {
        let inverse = rot.transpose();
        for &p in &points {
            assert_eq!(inverse.apply(rot.apply(p)), p);
        }
    }
}

#[test]
fn test_rotations_preserve_manhattan_norm_to_origin() {
    let p = Point3::new(12, -34, 56);
    for rot in rotations() {
        assert_eq!(rot.apply(p).manhattan(&Point3::ZERO), p.manhattan(&Point3::ZERO));
    }
}
