use scanner_alignment::analysis::{build_report, max_manhattan};
use scanner_alignment::config::{FusionConfig, SyntheticConfig};
use scanner_alignment::data::{format_scanners, parse_scanners, SceneGenerator};
use scanner_alignment::fusion::fuse;
use scanner_alignment::geometry::Point3;
use std::collections::HashMap;

fn test_scene_config() -> SyntheticConfig {
    SyntheticConfig {
        scanners: 5,
        shared_beacons: 12,
        unique_beacons: 8,
        range: 1000,
        spacing: 1200,
        seed: 20211219,
    }
}

#[test]
fn test_fuses_full_chain_and_recovers_ground_truth() {
    let config = test_scene_config();
    let scene = SceneGenerator::from_seed(config.seed).generate(&config);

    let outcome = fuse(scene.scanners.clone(), &FusionConfig::default()).unwrap();

    // Every scanner merged; the reference scanner leads with a zero origin.
    assert_eq!(outcome.origins.len(), config.scanners);
    assert_eq!(outcome.rounds, config.scanners - 1);
    assert_eq!(outcome.origins[0].position, Point3::ZERO);

    // Recovered origins match the generator's ground truth, keyed by id
    // since merge order need not follow input order.
    let recovered: HashMap<usize, Point3> = outcome
        .origins
        .iter()
        .map(|o| (o.scanner, o.position))
        .collect();
    for (id, &expected) in scene.origins.iter().enumerate() {
        assert_eq!(recovered[&id], expected, "scanner {} origin", id);
    }

    // The fused map holds exactly the distinct world beacons, each once.
    assert_eq!(outcome.beacons.len(), scene.beacon_count);
}

#[test]
fn test_distant_scanners_merge_transitively() {
    // With spacing 1200 and range 1000, scanners two or more steps apart
    // share nothing directly; they can only merge through the growing map.
    let config = test_scene_config();
    let scene = SceneGenerator::from_seed(7).generate(&config);

    let outcome = fuse(scene.scanners, &FusionConfig::default()).unwrap();
    assert_eq!(outcome.origins.len(), config.scanners);

    let positions = outcome.origin_positions();
    assert_eq!(
        max_manhattan(&positions),
        (config.scanners as i64 - 1) * config.spacing
    );
}

#[test]
fn test_cardinality_invariant_under_rerun_and_permutation() {
    let config = test_scene_config();
    let scene = SceneGenerator::from_seed(99).generate(&config);

    let baseline = fuse(scene.scanners.clone(), &FusionConfig::default()).unwrap();
    let rerun = fuse(scene.scanners.clone(), &FusionConfig::default()).unwrap();
    assert_eq!(baseline.beacons.len(), rerun.beacons.len());
    assert_eq!(baseline.beacons, rerun.beacons);

    // Shuffle everything after the frame-defining scanner.
    let mut permuted = scene.scanners.clone();
    permuted[1..].reverse();
    let shuffled = fuse(permuted, &FusionConfig::default()).unwrap();
    assert_eq!(shuffled.beacons, baseline.beacons);

    let mut base_positions = baseline.origin_positions();
    let mut shuf_positions = shuffled.origin_positions();
    base_positions.sort();
    shuf_positions.sort();
    assert_eq!(base_positions, shuf_positions);
}

#[test]
fn test_report_round_trips_through_scanner_format() {
    // Serialize a synthetic scene to the report text format, parse it back,
    // and fuse the parsed clouds end to end.
    let config = test_scene_config();
    let scene = SceneGenerator::from_seed(5).generate(&config);

    let text = format_scanners(&scene.scanners);
    let parsed = parse_scanners(&text).unwrap();
    assert_eq!(parsed.len(), scene.scanners.len());

    let outcome = fuse(parsed, &FusionConfig::default()).unwrap();
    assert_eq!(outcome.beacons.len(), scene.beacon_count);

    let report = build_report(&outcome, 0.0);
    assert_eq!(report.beacon_count, scene.beacon_count);
    assert_eq!(report.scanners_merged, config.scanners);
    assert_eq!(
        report.max_scanner_distance,
        max_manhattan(&outcome.origin_positions())
    );

    // The report serializes cleanly for downstream consumers.
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"beacon_count\""));
}

#[test]
fn test_strict_threshold_rejects_weak_chain() {
    // Demand more coincidences than the generator guarantees anywhere.
    let config = test_scene_config();
    let scene = SceneGenerator::from_seed(11).generate(&config);

    let strict = FusionConfig {
        min_coincidences: 10_000,
    };
    let err = fuse(scene.scanners, &strict).unwrap_err();
    assert!(err.to_string().contains("unresolvable scanner"));
}
