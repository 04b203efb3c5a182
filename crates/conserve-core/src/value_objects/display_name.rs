//! Display name resolution for users with optional organization and supporter profiles
//!
//! A user may own a conservationist (organization) profile, a supporter profile,
//! both, or neither. Empty names count as absent.

/// Name shown for a comment author without any named profile
pub const FALLBACK_DISPLAY_NAME: &str = "User";

fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// Resolve the name shown next to a comment.
///
/// Organization name wins over supporter name; with neither, the
/// [`FALLBACK_DISPLAY_NAME`] is used.
pub fn comment_author_name(org_name: Option<&str>, sup_name: Option<&str>) -> String {
    non_empty(org_name)
        .or_else(|| non_empty(sup_name))
        .unwrap_or(FALLBACK_DISPLAY_NAME)
        .to_string()
}

/// Resolve the name shown on a user profile.
///
/// Profiles prefer the supporter name and fall back to the organization name.
pub fn profile_name(sup_name: Option<&str>, org_name: Option<&str>) -> Option<String> {
    non_empty(sup_name)
        .or_else(|| non_empty(org_name))
        .map(str::to_string)
}
