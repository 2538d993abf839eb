//! License compatibility.

use super::Scorer;
use crate::Result;
use crate::hosting;
use crate::resolve::RepoSpec;

/// Licenses acceptable for downstream use (LGPL-2.1 compatible). An SPDX
/// expression that can be satisfied from this list scores 1.0.
const COMPATIBLE_LICENSES: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "ISC",
    "0BSD",
    "Zlib",
    "Unlicense",
    "CC0-1.0",
    "LGPL-2.1",
    "LGPL-2.1-only",
    "LGPL-2.1-or-later",
    "LGPL-3.0",
    "LGPL-3.0-only",
    "LGPL-3.0-or-later",
    "MPL-2.0",
];

/// Scores whether the repository's declared license is compatible.
///
/// Binary by design: a license either permits use or it does not. A missing
/// or undetectable license scores 0.0.
#[derive(Debug)]
pub struct License {
    client: hosting::Client,
}

impl License {
    #[must_use]
    pub const fn new(client: hosting::Client) -> Self {
        Self { client }
    }
}

impl Scorer for License {
    async fn score(&self, repo: &RepoSpec) -> Result<f64> {
        let declared = self
            .client
            .license(repo)
            .await?
            .and_then(|l| l.license)
            .and_then(|l| l.spdx_id);

        Ok(declared.as_deref().map_or(0.0, |expr| if is_compatible(expr) { 1.0 } else { 0.0 }))
    }
}

/// True if the SPDX expression can be satisfied using only licenses from
/// the allow list. Unparsable expressions (including `NOASSERTION`) are
/// treated as incompatible.
fn is_compatible(expression: &str) -> bool {
    spdx::Expression::parse_mode(expression, spdx::ParseMode::LAX).is_ok_and(|expr| {
        expr.evaluate(|req| match req.license {
            spdx::LicenseItem::Spdx { id, .. } => COMPATIBLE_LICENSES.contains(&id.name),
            spdx::LicenseItem::Other { .. } => false,
        })
    })
}
