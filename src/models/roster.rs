//! Roster of managed sites.

use serde::{Deserialize, Serialize};

/// A restaurant or site under the manager's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterEntity {
    /// Stable identifier, used to build generated instance ids.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl RosterEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates an entity identified by its roster position (`rest-{index}`).
    pub fn indexed(index: usize, name: impl Into<String>) -> Self {
        Self::new(format!("rest-{index}"), name)
    }

    /// Builds a roster from plain site names, in order.
    pub fn roster_from_names<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Self::indexed(i, name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_from_names() {
        let roster = RosterEntity::roster_from_names(["Site A", "Site B"]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, "rest-0");
        assert_eq!(roster[1].id, "rest-1");
        assert_eq!(roster[1].name, "Site B");
    }
}
