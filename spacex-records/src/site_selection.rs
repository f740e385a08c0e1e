use std::fmt;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES_VALUE: &str = "ALL";
/// Dropdown label for [`ALL_SITES_VALUE`].
pub const ALL_SITES_LABEL: &str = "All Sites";

/// The launch site chosen in the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value. Only `ALL` means every site; an empty
    /// value is a site name that matches no launch.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The dropdown value for this selection.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(name) => name,
        }
    }

    /// The site name to filter on, or `None` for all sites.
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES_LABEL),
            SiteSelection::Site(name) => f.write_str(name),
        }
    }
}
