use super::PointCloud;
use crate::geometry::Point3;
use anyhow::Context;
use std::fmt::Write as _;
use std::path::Path;

/// Load a scanner report file: `--- scanner N ---` headers, one `x,y,z` line
/// per beacon, blank lines ignored.
pub fn load_scanners<P: AsRef<Path>>(path: P) -> crate::Result<Vec<PointCloud>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scanner report {:?}", path))?;
    parse_scanners(&content).with_context(|| format!("failed to parse scanner report {:?}", path))
}

/// Parse the sectioned scanner report format.
pub fn parse_scanners(input: &str) -> crate::Result<Vec<PointCloud>> {
    let mut scanners: Vec<Vec<Point3>> = Vec::new();

    for (lineno, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("---") {
            scanners.push(Vec::new());
            continue;
        }
        let points = scanners
            .last_mut()
            .ok_or_else(|| anyhow::anyhow!("line {}: beacon before any scanner header", lineno + 1))?;
        points.push(parse_point(line).with_context(|| format!("line {}: {:?}", lineno + 1, line))?);
    }

    if scanners.is_empty() {
        anyhow::bail!("report contains no scanner sections");
    }
    for (idx, points) in scanners.iter().enumerate() {
        if points.is_empty() {
            anyhow::bail!("scanner {} reports no beacons", idx);
        }
    }

    Ok(scanners
        .into_iter()
        .enumerate()
        .map(|(id, points)| PointCloud::new(id, points))
        .collect())
}

fn parse_point(line: &str) -> crate::Result<Point3> {
    let mut fields = line.split(',');
    let mut next = |name: &str| -> crate::Result<i64> {
        fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing {} coordinate", name))?
            .trim()
            .parse::<i64>()
            .with_context(|| format!("invalid {} coordinate", name))
    };
    let point = Point3::new(next("x")?, next("y")?, next("z")?);
    if fields.next().is_some() {
        anyhow::bail!("expected exactly 3 coordinates");
    }
    Ok(point)
}

/// Render clouds back into the report format (inverse of `parse_scanners`).
pub fn format_scanners(scanners: &[PointCloud]) -> String {
    let mut out = String::new();
    for cloud in scanners {
        let _ = writeln!(out, "--- scanner {} ---", cloud.id());
        for p in cloud.points() {
            let _ = writeln!(out, "{},{},{}", p.x, p.y, p.z);
        }
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_scanners() {
        let input = "--- scanner 0 ---\n1,2,3\n-4,5,-6\n\n--- scanner 1 ---\n7,8,9\n";
        let scanners = parse_scanners(input).unwrap();
        assert_eq!(scanners.len(), 2);
        assert_eq!(scanners[0].points(), &[Point3::new(1, 2, 3), Point3::new(-4, 5, -6)]);
        assert_eq!(scanners[1].points(), &[Point3::new(7, 8, 9)]);
    }

    #[test]
    fn test_rejects_malformed_coordinate() {
        let input = "--- scanner 0 ---\n1,two,3\n";
        let err = parse_scanners(input).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_rejects_beacon_before_header() {
        assert!(parse_scanners("1,2,3\n").is_err());
    }

    #[test]
    fn test_rejects_empty_section() {
        assert!(parse_scanners("--- scanner 0 ---\n\n--- scanner 1 ---\n1,2,3\n").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let scanners = vec![
            PointCloud::new(0, vec![Point3::new(1, 2, 3)]),
            PointCloud::new(1, vec![Point3::new(-7, 0, 4), Point3::new(9, 9, 9)]),
        ];
        let reparsed = parse_scanners(&format_scanners(&scanners)).unwrap();
        assert_eq!(reparsed.len(), 2);
        assert_eq!(reparsed[1].points(), scanners[1].points());
    }
}
