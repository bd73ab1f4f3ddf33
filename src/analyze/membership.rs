use crate::model::Team;
use std::collections::HashMap;
use tracing::warn;

/// Maps a member's display name to the team that lists them.
///
/// Matching is by display name, so two people sharing a name are
/// indistinguishable. When a name appears in several teams the last one
/// loaded wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipIndex {
    members: HashMap<String, String>,
}

impl MembershipIndex {
    pub fn from_teams<'a>(teams: impl IntoIterator<Item = &'a Team>) -> Self {
        let mut index = Self::default();
        for team in teams {
            index.insert_team(team);
        }
        index
    }

    fn insert_team(&mut self, team: &Team) {
        for member in &team.members {
            if let Some(previous) = self.members.insert(member.clone(), team.name.clone()) {
                if previous != team.name {
                    warn!(
                        "Member {} is listed in both {} and {}; using {}",
                        member, previous, team.name, team.name
                    );
                }
            }
        }
    }

    pub fn team_of(&self, member: &str) -> Option<&str> {
        self.members.get(member).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}
