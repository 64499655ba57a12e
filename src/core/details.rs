//! Identity and version tags embedded in a comment block.
//!
//! A block is identified by its `@apiName` and `@apiGroup` tags; the version
//! comes from `@apiVersion`. Two blocks with the same name and group are the
//! same logical API endpoint across versions.

use std::sync::LazyLock;

use regex::Regex;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@apiName\s+(\S+)").unwrap());
static GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@apiGroup\s+(\S+)").unwrap());
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@apiVersion\s+([0-9.]+)").unwrap());

/// Name used when a block carries no `@apiName` tag.
pub const DEFAULT_NAME: &str = "Unnamed";
/// Group used when a block carries no `@apiGroup` tag.
pub const DEFAULT_GROUP: &str = "Ungrouped";

/// The (name, group) pair identifying a logical API endpoint across versions.
///
/// Ordering is lexicographic on name, then group, which fixes the order of
/// endpoints in the written history.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity {
    pub name: String,
    pub group: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }
}

/// Identity and version extracted from one normalized comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDetails {
    pub identity: Identity,
    /// None when the block has no `@apiVersion` tag. Such blocks are never
    /// indexed.
    pub version: Option<String>,
}

/// Extract identity and version from a comment block.
///
/// Missing name/group tags fall back to [`DEFAULT_NAME`]/[`DEFAULT_GROUP`];
/// a missing version tag yields `None`.
pub fn parse_details(comment: &str) -> ApiDetails {
    let capture = |re: &Regex| {
        re.captures(comment)
            .map(|caps| caps[1].to_string())
    };

    ApiDetails {
        identity: Identity {
            name: capture(&NAME_REGEX).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            group: capture(&GROUP_REGEX).unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        },
        version: capture(&VERSION_REGEX),
    }
}
