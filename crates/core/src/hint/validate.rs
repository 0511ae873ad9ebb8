/// Returns true when `candidate` looks like a relative path with at least
/// two non-empty `/`-separated segments.
///
/// A single leading `/` is tolerated: `/a/b` is accepted even though a plain
/// split would give an empty first segment. The placer strips it before
/// resolving the destination. `.` and `..` segments are not rejected here.
pub fn is_valid_path(candidate: &str) -> bool {
    if !candidate.contains('/') {
        return false;
    }

    let body = candidate.strip_prefix('/').unwrap_or(candidate);
    let segments: Vec<&str> = body.split('/').collect();
    segments.len() >= 2 && segments.iter().all(|segment| !segment.is_empty())
}
