/*!
Ranked completion scoreboard over the support matrix.

[LeaderboardBuilder] walks the matrix once for an ordered list of API family
names and folds every version node into a [VersionAggregate]; the finished
[Leaderboard] is immutable and answers every query from the aggregates alone.
Rebuilding from a changed matrix produces a fresh board, so existing readers
are never invalidated.
*/

use std::cmp::Ordering;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::matrix::{ApiVersion, DriverId, Matrix, VersionNumber, PRIMARY_APIS};

#[cfg(test)]
mod tests;

/// Completion totals for one API version: how many extensions and
/// sub-extensions it has, and how many of those each implementation has
/// finished. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionAggregate {
    api_name: String,
    version: VersionNumber,
    total_extensions: usize,
    completed: IndexMap<DriverId, usize>,
}

impl VersionAggregate {
    /// Folds one version node into its aggregate. `roster` is the API's
    /// deduplicated driver list; every roster entry gets an explicit count,
    /// zero included. Markers for drivers outside the roster are ignored.
    fn from_version(node: &ApiVersion, roster: &IndexSet<&str>) -> Self {
        let total_extensions = node
            .extensions
            .iter()
            .map(|ext| 1 + ext.subextensions.len())
            .sum();

        let mut completed = IndexMap::with_capacity(roster.len() + 1);

        let reference_done = node
            .extensions
            .iter()
            .map(|ext| {
                usize::from(ext.status.is_done())
                    + ext
                        .subextensions
                        .iter()
                        .filter(|sub| sub.status.is_done())
                        .count()
            })
            .sum();
        completed.insert(DriverId::Reference, reference_done);

        for name in roster {
            let done = node
                .extensions
                .iter()
                .map(|ext| {
                    usize::from(ext.supports(name))
                        + ext
                            .subextensions
                            .iter()
                            .filter(|sub| sub.supports(name))
                            .count()
                })
                .sum();
            completed.insert(DriverId::driver(*name), done);
        }

        VersionAggregate {
            api_name: node.name.clone(),
            version: node.version.clone(),
            total_extensions,
            completed,
        }
    }

    /// Composed identity, e.g. `"OpenGL 4.6"`.
    pub fn id(&self) -> String {
        format!("{} {}", self.api_name, self.version)
    }

    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    pub fn version(&self) -> &VersionNumber {
        &self.version
    }

    /// Extensions plus sub-extensions tracked by this version.
    pub fn total_extensions(&self) -> usize {
        self.total_extensions
    }

    /// Extensions plus sub-extensions `driver` has finished for this
    /// version. Unknown drivers count zero.
    pub fn completed_by(&self, driver: &DriverId) -> usize {
        self.completed.get(driver).copied().unwrap_or(0)
    }

    /// Whether `driver` has finished every extension of this version. A
    /// version without extensions is trivially fully supported.
    pub fn is_fully_supported_by(&self, driver: &DriverId) -> bool {
        self.completed_by(driver) == self.total_extensions
    }

    /// Implementations this aggregate carries counts for: the reference
    /// first, then the roster in encounter order.
    pub fn drivers(&self) -> impl Iterator<Item = &DriverId> {
        self.completed.keys()
    }
}

/// Leaderboard order for two aggregates.
///
/// When the family names differ, the better [PRIMARY_APIS] rank wins; within
/// one family, higher versions come first. Applied with a stable sort this
/// keeps distinct non-primary families, and equal numeric versions of one
/// family, in their existing relative order.
pub fn compare_by_rank(a: &VersionAggregate, b: &VersionAggregate) -> Ordering {
    if a.api_name == b.api_name {
        b.version.cmp(&a.version)
    } else {
        api_rank(&a.api_name).cmp(&api_rank(&b.api_name))
    }
}

/// Position of `name` in [PRIMARY_APIS]; every other family shares the rank
/// one past the end.
fn api_rank(name: &str) -> usize {
    PRIMARY_APIS
        .iter()
        .position(|primary| *primary == name)
        .unwrap_or(PRIMARY_APIS.len())
}

/// Builds a [Leaderboard] from the matrix for an ordered list of API family
/// names. Families the matrix does not know contribute nothing.
#[derive(Debug)]
pub struct LeaderboardBuilder<'m> {
    matrix: &'m Matrix,
    api_names: Vec<String>,
}

impl<'m> LeaderboardBuilder<'m> {
    pub fn new(matrix: &'m Matrix) -> Self {
        LeaderboardBuilder {
            matrix,
            api_names: Vec::new(),
        }
    }

    /// Adds one API family to the walk.
    pub fn api(mut self, name: impl Into<String>) -> Self {
        self.api_names.push(name.into());
        self
    }

    /// Adds several API families, keeping their order.
    pub fn apis<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.api_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Runs the aggregation pass and fixes the leaderboard order.
    pub fn build(self) -> Leaderboard {
        let mut versions = Vec::new();

        for api_name in &self.api_names {
            let Some(api) = self.matrix.api(api_name) else {
                debug!(api = %api_name, "requested API not in matrix, skipping");
                continue;
            };

            let roster = api.driver_names();
            for node in &api.versions {
                let aggregate = VersionAggregate::from_version(node, &roster);
                trace!(
                    version = %aggregate.id(),
                    total = aggregate.total_extensions,
                    "aggregated version"
                );
                versions.push(aggregate);
            }
        }

        versions.sort_by(compare_by_rank);
        Leaderboard { versions }
    }
}

/// The finished scoreboard: one entry per aggregated version, in the order
/// fixed by [compare_by_rank]. Queries are read-only and never fail; absent
/// data surfaces as `None` or zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    versions: Vec<VersionAggregate>,
}

impl Leaderboard {
    /// Aggregates in leaderboard order.
    pub fn versions(&self) -> &[VersionAggregate] {
        &self.versions
    }

    /// First aggregate whose composed identity ([VersionAggregate::id])
    /// equals `id`.
    pub fn find_version(&self, id: &str) -> Option<&VersionAggregate> {
        self.versions.iter().find(|version| version.id() == id)
    }

    /// Extensions plus sub-extensions tracked across every entry.
    pub fn total_extensions(&self) -> usize {
        self.versions
            .iter()
            .map(VersionAggregate::total_extensions)
            .sum()
    }

    /// Extensions plus sub-extensions `driver` has finished across every
    /// entry. Drivers never seen anywhere total zero.
    pub fn total_completed_by(&self, driver: &DriverId) -> usize {
        self.versions
            .iter()
            .map(|version| version.completed_by(driver))
            .sum()
    }

    /// Every implementation seen in any entry with its summed completed
    /// count, descending by count. Ties keep the encounter order of the
    /// aggregation pass, so repeated builds rank identically.
    pub fn drivers_by_completion(&self) -> Vec<(DriverId, usize)> {
        let mut totals: IndexMap<&DriverId, usize> = IndexMap::new();
        for version in &self.versions {
            for (driver, done) in &version.completed {
                *totals.entry(driver).or_default() += *done;
            }
        }

        totals
            .into_iter()
            .map(|(driver, done)| (driver.clone(), done))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .collect()
    }

    /// Highest version of `api_name` for which `driver` has an unbroken run
    /// of fully supported versions starting at the family's oldest version.
    ///
    /// Walks the family's entries oldest-first (the stored order reversed),
    /// records each fully supported version, and stops at the first one that
    /// is not. `None` when the oldest version already fails or the family
    /// has no entries.
    pub fn latest_fully_supported(
        &self,
        api_name: &str,
        driver: &DriverId,
    ) -> Option<&VersionAggregate> {
        let mut best = None;

        let oldest_first = self
            .versions
            .iter()
            .rev()
            .filter(|version| version.api_name == api_name);

        for version in oldest_first {
            if !version.is_fully_supported_by(driver) {
                break;
            }
            best = Some(version);
        }

        best
    }
}
