//! Launch sites offered by the site dropdown.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Dropdown value meaning "every site".
pub const ALL_SITES: &str = "ALL";

/// The sites listed in the dropdown, in display order.
///
/// This list is hand-maintained and is not derived from the dataset.
pub const LAUNCH_SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// Current value of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value. `"ALL"` is the sentinel; anything else
    /// is taken as a site identifier, known or not.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The raw dropdown value for this selection.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// The selected site, or `None` for the "all sites" sentinel.
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(site) => Some(site),
        }
    }

    /// Whether a record from `launch_site` passes this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::from_value(s))
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        SiteSelection::from_value(&value)
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        selection.value().to_string()
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_all() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(SiteSelection::All.value(), "ALL");
        assert_eq!(SiteSelection::All.site(), None);
    }

    #[test]
    fn test_specific_site() {
        let selection: SiteSelection = "KSC LC-39A".parse().unwrap();
        assert_eq!(selection.site(), Some("KSC LC-39A"));
        assert!(selection.matches("KSC LC-39A"));
        assert!(!selection.matches("CCAFS LC-40"));
        assert_eq!(selection.to_string(), "KSC LC-39A");
    }

    #[test]
    fn test_all_matches_every_site() {
        for site in LAUNCH_SITES {
            assert!(SiteSelection::All.matches(site));
        }
        assert!(SiteSelection::All.matches("somewhere else"));
    }

    #[test]
    fn test_lowercase_all_is_a_site() {
        assert_eq!(
            SiteSelection::from_value("all"),
            SiteSelection::Site("all".to_string())
        );
    }
}
