//! Platform quirks.

/// Returns `true` if the user agent belongs to an iOS device.
///
/// Fixed positioning misbehaves while the on-screen keyboard is shown, so the
/// [`MenuBar`](crate::MenuBar) never floats there.
pub fn is_ios(user_agent: &str) -> bool {
    let edge = has_marker(user_agent, "Edge/", |c| c.is_ascii_digit());
    let mobile = has_marker(user_agent, "Mobile/", |c| c.is_alphanumeric() || c == '_');

    !edge && user_agent.contains("AppleWebKit") && mobile
}

fn has_marker(user_agent: &str, marker: &str, next: impl Fn(char) -> bool) -> bool {
    user_agent.match_indices(marker).any(|(start, _)| {
        user_agent[start + marker.len()..]
            .chars()
            .next()
            .is_some_and(&next)
    })
}
