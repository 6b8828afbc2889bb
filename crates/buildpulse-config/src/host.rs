//! Hostname validation shared by configuration and host resolution.

/// Names that resolve to the local machine and are useless as a host tag.
const LOCAL_HOSTS: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "localhost6.localdomain6",
    "ip6-localhost",
];

const MAX_HOSTNAME_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// Check whether `hostname` is usable as a host identifier.
///
/// Accepts RFC 1123 names: dot-separated labels of ASCII letters, digits and
/// `-`, each 1 to 63 characters, not starting or ending with `-`, at most
/// 255 characters overall. Local aliases such as `localhost` are rejected.
pub fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    let lower = hostname.to_ascii_lowercase();
    if LOCAL_HOSTS.contains(&lower.as_str()) {
        return false;
    }

    hostname.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
