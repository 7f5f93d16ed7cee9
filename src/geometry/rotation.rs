use super::Point3;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A proper rotation of the cube: a 3×3 matrix with entries in {-1, 0, 1},
/// determinant 1, and R·Rᵗ = I. Exactly 24 such matrices exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rotation {
    m: [[i64; 3]; 3],
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation {
        m: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// Rotate a point: `R·p`.
    pub fn apply(&self, p: Point3) -> Point3 {
        Point3::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2] * p.z,
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2] * p.z,
            self.m[2][0] * p.x + self.m[2][1] * p.y + self.m[2][2] * p.z,
        )
    }

    /// The transpose, which for an orthogonal matrix is also the inverse.
    pub fn transpose(&self) -> Rotation {
        let mut t = [[0i64; 3]; 3];
        for (r, row) in self.m.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                t[c][r] = v;
            }
        }
        Rotation { m: t }
    }

    /// Matrix product `self · other` (apply `other` first, then `self`).
    pub fn compose(&self, other: &Rotation) -> Rotation {
        let mut p = [[0i64; 3]; 3];
        for r in 0..3 {
            for c in 0..3 {
                p[r][c] = (0..3).map(|k| self.m[r][k] * other.m[k][c]).sum();
            }
        }
        Rotation { m: p }
    }

    pub fn determinant(&self) -> i64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    pub fn is_orthogonal(&self) -> bool {
        self.compose(&self.transpose()) == Rotation::IDENTITY
    }

    pub fn matrix(&self) -> &[[i64; 3]; 3] {
        &self.m
    }
}

lazy_static! {
    static ref ROTATIONS: Vec<Rotation> = generate_rotations();
}

/// The full rotation group, computed once on first use and shared read-only
/// for the lifetime of the process. The enumeration order is fixed, which
/// makes "first rotation wins" tie-breaking reproducible across runs.
pub fn rotations() -> &'static [Rotation] {
    &ROTATIONS
}

/// Enumerate all 3^9 = 19683 matrices over {-1, 0, 1} and keep the proper
/// rotations: determinant exactly 1 and orthogonal.
fn generate_rotations() -> Vec<Rotation> {
    const ELEMENTS: [i64; 3] = [-1, 0, 1];

    let mut group = Vec::with_capacity(24);
    for code in 0..19683u32 {
        let mut digits = code;
        let mut m = [[0i64; 3]; 3];
        for row in m.iter_mut() {
            for entry in row.iter_mut() {
                *entry = ELEMENTS[(digits % 3) as usize];
                digits /= 3;
            }
        }
        let candidate = Rotation { m };
        if candidate.determinant() == 1 && candidate.is_orthogonal() {
            group.push(candidate);
        }
    }

    debug_assert_eq!(group.len(), 24);
    group
}
