use crate::analysis::FusionReport;
use crate::fusion::ScannerOrigin;

pub fn print_report(report: &FusionReport) {
    println!("=== Fusion Report ===");
    println!("Distinct beacons: {}", report.beacon_count);
    println!("Max scanner distance (Manhattan): {}", report.max_scanner_distance);
    println!("Scanners merged: {}", report.scanners_merged);
    println!("Processing Time: {:.2}ms", report.processing_time_ms);
    println!();
    print_origin_table(&report.origins);
}

pub fn print_origin_table(origins: &[ScannerOrigin]) {
    println!("| Merge order | Scanner | Position | Coincidences |");
    println!("|-------------|---------|----------|--------------|");

    for (order, origin) in origins.iter().enumerate() {
        println!(
            "| {} | {} | {} | {} |",
            order, origin.scanner, origin.position, origin.coincidences
        );
    }
}
