//! Filters over bucketed paths.
//!
//! Both filters consume a collection and return a new one. The
//! multiplicity filter is generic over any collection of [`Bucket`]s, so the
//! same predicate narrows the size index and each size's hash groups.

use std::path::Path;

use super::SizeIndex;

/// Something with a member count: a size bucket, a hash group.
pub trait Bucket {
    /// Number of members in this bucket.
    fn member_count(&self) -> usize;
}

impl<K, V> Bucket for (K, Vec<V>) {
    fn member_count(&self) -> usize {
        self.1.len()
    }
}

/// Keep only buckets with at least two members.
///
/// Works for any collection that can be iterated into buckets and rebuilt
/// from them: `BTreeMap<u64, Vec<PathBuf>>`, `HashMap<K, Vec<V>>`,
/// `Vec<HashGroup>`, and so on.
#[must_use]
pub fn select_multiple<M, B>(buckets: M) -> M
where
    M: IntoIterator<Item = B> + FromIterator<B>,
    B: Bucket,
{
    buckets
        .into_iter()
        .filter(|bucket| bucket.member_count() >= 2)
        .collect()
}

/// Keep only paths whose extension equals `extension`.
///
/// An empty extension means "no filtering" and returns the index unchanged.
/// Matching is exact and case-sensitive, so `.log` matches nothing; callers
/// clean up user input first. Buckets left without paths are dropped.
#[must_use]
pub fn select_extension(index: SizeIndex, extension: &str) -> SizeIndex {
    if extension.is_empty() {
        return index;
    }

    index
        .into_iter()
        .filter_map(|(size, paths)| {
            let kept: Vec<_> = paths
                .into_iter()
                .filter(|path| has_extension(path, extension))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some((size, kept))
            }
        })
        .collect()
}

/// Whether `path`'s extension is exactly `extension` (no leading dot).
///
/// The extension is everything after the last `.` of the file name, so a
/// dotfile such as `.bashrc` has the extension `bashrc`.
#[must_use]
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(dot) => name[dot + 1..] == *extension,
        None => false,
    }
}
