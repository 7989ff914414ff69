use crate::roster::leadership::TakenSlots;
use crate::{FilterCriteria, Player, RosterError, RosterResult, RosterSettings, TeamLeadership};
use itertools::Itertools;
use log::{debug, info};

#[derive(Debug, Clone)]
struct RosterView {
    criteria: FilterCriteria,
    players: Vec<Player>,
}

/// In-memory roster for one session.
///
/// Every mutation goes through [`Roster::submit_player`], which enforces that each
/// team has at most one captain and at most one vice-captain.
#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    view: Option<RosterView>,
    editing: Option<Player>,
    settings: RosterSettings,
}

impl Roster {
    pub fn new(settings: RosterSettings) -> Self {
        Roster {
            players: Vec::new(),
            view: None,
            editing: None,
            settings,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Distinct team names, in the order they first appear.
    pub fn teams(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.team.as_str()).unique().collect()
    }

    pub fn team_leadership(&self, team: &str) -> TeamLeadership<'_> {
        TeamLeadership::of(&self.players, team)
    }

    // ─── Submission ──────────────────────────────────────────────────

    /// Inserts `candidate`, or replaces the record with the same name when `is_editing`.
    ///
    /// A player never conflicts with their own stored record, so an edit may keep
    /// an existing captain or vice-captain flag.
    pub fn submit_player(&mut self, candidate: Player, is_editing: bool) -> RosterResult<()> {
        let name = candidate.name.clone();

        self.apply_submission(candidate, is_editing)
            .inspect_err(|err| info!("submission of '{}' rejected: {}", name, err))?;

        debug!(
            "player '{}' {}, roster size: {}",
            name,
            if is_editing { "updated" } else { "added" },
            self.players.len()
        );

        self.editing = None;
        self.refresh_view();

        Ok(())
    }

    /// Checks the captain / vice-captain rule for `candidate` without mutating anything.
    ///
    /// Only an edit skips records sharing the candidate's name; an insert has no
    /// stored record of its own, so every existing leader counts.
    pub fn validate(&self, candidate: &Player, is_editing: bool) -> RosterResult<()> {
        let own_name = is_editing.then_some(candidate.name.as_str());
        let slots = TakenSlots::scan(&self.players, &candidate.team, own_name);

        if candidate.is_captain && slots.has_captain {
            return Err(RosterError::CaptainConflict {
                team: candidate.team.clone(),
            });
        }

        if candidate.is_vice_captain && slots.has_vice_captain {
            return Err(RosterError::ViceCaptainConflict {
                team: candidate.team.clone(),
            });
        }

        Ok(())
    }

    fn apply_submission(&mut self, candidate: Player, is_editing: bool) -> RosterResult<()> {
        self.validate(&candidate, is_editing)?;

        if is_editing {
            self.replace(candidate)
        } else {
            self.insert(candidate)
        }
    }

    fn insert(&mut self, candidate: Player) -> RosterResult<()> {
        if self.settings.reject_duplicate_names && self.find(&candidate.name).is_some() {
            return Err(RosterError::DuplicateName {
                name: candidate.name,
            });
        }

        self.players.push(candidate);

        Ok(())
    }

    fn replace(&mut self, candidate: Player) -> RosterResult<()> {
        let mut replaced = 0;

        for player in self.players.iter_mut().filter(|p| p.name == candidate.name) {
            *player = candidate.clone();
            replaced += 1;
        }

        if replaced == 0 {
            return Err(RosterError::NotFound {
                name: candidate.name,
            });
        }

        if replaced > 1 {
            debug!("edit of '{}' replaced {} records", candidate.name, replaced);
        }

        Ok(())
    }

    // ─── Filtering ───────────────────────────────────────────────────

    /// Replaces the current view with the players matching `criteria`.
    pub fn filter(&mut self, criteria: FilterCriteria) -> &[Player] {
        let players = criteria.apply(&self.players);

        debug!(
            "filter {:?} matched {} of {} players",
            criteria,
            players.len(),
            self.players.len()
        );

        &self.view.insert(RosterView { criteria, players }).players
    }

    pub fn clear_filter(&mut self) {
        self.view = None;
    }

    /// Result of the last filter request, if any.
    pub fn view(&self) -> Option<&[Player]> {
        self.view.as_ref().map(|v| v.players.as_slice())
    }

    pub fn active_filter(&self) -> Option<&FilterCriteria> {
        self.view.as_ref().map(|v| &v.criteria)
    }

    pub fn is_filtered(&self) -> bool {
        self.view.is_some()
    }

    /// Players to show: the current view, or the whole roster when the view is
    /// absent or matched nothing.
    pub fn displayed(&self) -> &[Player] {
        match &self.view {
            Some(view) if !view.players.is_empty() => &view.players,
            _ => &self.players,
        }
    }

    fn refresh_view(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.players = view.criteria.apply(&self.players);
        }
    }

    // ─── Editing ─────────────────────────────────────────────────────

    /// Points the editor at a copy of the named player.
    pub fn begin_edit(&mut self, name: &str) -> RosterResult<&Player> {
        let player = self.find(name).cloned().ok_or_else(|| RosterError::NotFound {
            name: name.to_string(),
        })?;

        debug!("editing player '{}'", name);

        Ok(&*self.editing.insert(player))
    }

    pub fn cancel_edit(&mut self) {
        if let Some(player) = self.editing.take() {
            debug!("edit of '{}' cancelled", player.name);
        }
    }

    pub fn editing(&self) -> Option<&Player> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerRole;

    fn player(name: &str, team: &str) -> Player {
        Player::builder().name(name).team(team).build().unwrap()
    }

    fn captain(name: &str, team: &str) -> Player {
        Player::builder().name(name).team(team).captain(true).build().unwrap()
    }

    fn vice_captain(name: &str, team: &str) -> Player {
        Player::builder()
            .name(name)
            .team(team)
            .vice_captain(true)
            .build()
            .unwrap()
    }

    fn assert_leadership_invariant(roster: &Roster) {
        for team in roster.teams() {
            let in_team = roster.players().iter().filter(|p| p.team == team);
            assert!(in_team.clone().filter(|p| p.is_captain).count() <= 1);
            assert!(in_team.filter(|p| p.is_vice_captain).count() <= 1);
        }
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut roster = Roster::default();

        roster.submit_player(player("A", "X"), false).unwrap();
        roster.submit_player(player("B", "Y"), false).unwrap();
        roster.submit_player(player("C", "X"), false).unwrap();

        let names: Vec<&str> = roster.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_second_captain_is_rejected() {
        let mut roster = Roster::default();

        roster.submit_player(captain("A", "X"), false).unwrap();

        let result = roster.submit_player(captain("B", "X"), false);

        assert_eq!(
            result,
            Err(RosterError::CaptainConflict {
                team: "X".to_string()
            })
        );
        assert_eq!(roster.len(), 1);
        assert!(roster.find("A").unwrap().is_captain);
        assert!(roster.find("B").is_none());
    }

    #[test]
    fn test_second_vice_captain_is_rejected() {
        let mut roster = Roster::default();

        roster.submit_player(vice_captain("A", "X"), false).unwrap();

        let result = roster.submit_player(vice_captain("B", "X"), false);

        assert_eq!(
            result,
            Err(RosterError::ViceCaptainConflict {
                team: "X".to_string()
            })
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_captain_conflict_reported_before_vice_captain() {
        let mut roster = Roster::default();
        roster.submit_player(captain("A", "X"), false).unwrap();
        roster.submit_player(vice_captain("B", "X"), false).unwrap();

        let both = Player::builder()
            .name("C")
            .team("X")
            .captain(true)
            .vice_captain(true)
            .build()
            .unwrap();

        assert!(matches!(
            roster.submit_player(both, false),
            Err(RosterError::CaptainConflict { .. })
        ));
    }

    #[test]
    fn test_leaders_of_different_teams_do_not_conflict() {
        let mut roster = Roster::default();

        roster.submit_player(captain("A", "X"), false).unwrap();
        roster.submit_player(captain("B", "Y"), false).unwrap();
        roster.submit_player(captain("C", "x"), false).unwrap();

        assert_eq!(roster.len(), 3);
        assert_leadership_invariant(&roster);
    }

    #[test]
    fn test_one_player_may_hold_both_flags() {
        let mut roster = Roster::default();

        let both = Player::builder()
            .name("A")
            .team("X")
            .captain(true)
            .vice_captain(true)
            .build()
            .unwrap();

        roster.submit_player(both, false).unwrap();

        let leadership = roster.team_leadership("X");
        assert!(leadership.is_complete());
        assert_eq!(leadership.captain, leadership.vice_captain);
    }

    #[test]
    fn test_edit_keeps_own_captaincy() {
        let mut roster = Roster::default();
        roster.submit_player(captain("A", "X"), false).unwrap();

        roster.begin_edit("A").unwrap();
        let result = roster.submit_player(captain("A", "X"), true);

        assert!(result.is_ok());
        assert_eq!(roster.len(), 1);
        assert!(roster.find("A").unwrap().is_captain);
    }

    #[test]
    fn test_edit_replaces_all_fields() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "X"), false).unwrap();
        roster.submit_player(player("B", "X"), false).unwrap();

        let updated = Player::builder()
            .name("A")
            .role(PlayerRole::Bowler)
            .team("Y")
            .vice_captain(true)
            .build()
            .unwrap();

        roster.submit_player(updated.clone(), true).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.players()[0], updated);
        assert_eq!(roster.players()[1].name, "B");
    }

    #[test]
    fn test_edit_cannot_take_another_players_flag() {
        let mut roster = Roster::default();
        roster.submit_player(captain("A", "X"), false).unwrap();
        roster.submit_player(player("B", "X"), false).unwrap();

        let result = roster.submit_player(captain("B", "X"), true);

        assert!(matches!(result, Err(RosterError::CaptainConflict { .. })));
        assert!(!roster.find("B").unwrap().is_captain);
    }

    #[test]
    fn test_moving_captain_to_other_team_frees_the_slot() {
        let mut roster = Roster::default();
        roster.submit_player(captain("A", "X"), false).unwrap();

        roster.submit_player(captain("A", "Y"), true).unwrap();
        roster.submit_player(captain("B", "X"), false).unwrap();

        assert_eq!(roster.team_leadership("X").captain.unwrap().name, "B");
        assert_eq!(roster.team_leadership("Y").captain.unwrap().name, "A");
        assert_leadership_invariant(&roster);
    }

    #[test]
    fn test_edit_of_unknown_player_is_not_found() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "X"), false).unwrap();

        let result = roster.submit_player(player("Z", "X"), true);

        assert_eq!(
            result,
            Err(RosterError::NotFound {
                name: "Z".to_string()
            })
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected_by_default() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "X"), false).unwrap();

        let result = roster.submit_player(player("A", "Y"), false);

        assert!(matches!(result, Err(RosterError::DuplicateName { .. })));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find("A").unwrap().team, "X");
    }

    #[test]
    fn test_duplicate_name_accepted_when_allowed() {
        let mut roster = Roster::new(RosterSettings::allow_duplicate_names());
        roster.submit_player(player("A", "X"), false).unwrap();
        roster.submit_player(player("A", "Y"), false).unwrap();

        assert_eq!(roster.len(), 2);

        roster.submit_player(player("A", "Z"), true).unwrap();

        assert!(roster.players().iter().all(|p| p.team == "Z"));
    }

    #[test]
    fn test_duplicate_insert_cannot_add_second_captain() {
        let mut roster = Roster::new(RosterSettings::allow_duplicate_names());
        roster.submit_player(captain("A", "X"), false).unwrap();

        let result = roster.submit_player(captain("A", "X"), false);

        assert!(matches!(result, Err(RosterError::CaptainConflict { .. })));
        assert_eq!(roster.len(), 1);

        roster.submit_player(vice_captain("A", "X"), false).unwrap();
        assert!(matches!(
            roster.submit_player(vice_captain("A", "X"), false),
            Err(RosterError::ViceCaptainConflict { .. })
        ));
        assert_eq!(roster.len(), 2);
        assert_leadership_invariant(&roster);
    }

    #[test]
    fn test_validate_distinguishes_insert_from_edit() {
        let mut roster = Roster::default();
        roster.submit_player(captain("A", "X"), false).unwrap();

        assert!(roster.validate(&captain("A", "X"), true).is_ok());
        assert!(matches!(
            roster.validate(&captain("A", "X"), false),
            Err(RosterError::CaptainConflict { .. })
        ));
    }

    #[test]
    fn test_length_changes_only_on_successful_insert() {
        let mut roster = Roster::default();
        let submissions = vec![
            captain("A", "X"),
            captain("B", "X"),
            vice_captain("C", "X"),
            vice_captain("D", "X"),
            player("E", "X"),
            captain("F", "Y"),
        ];

        for candidate in submissions {
            let before = roster.len();
            let result = roster.submit_player(candidate, false);
            let expected = if result.is_ok() { before + 1 } else { before };
            assert_eq!(roster.len(), expected);
            assert_leadership_invariant(&roster);
        }

        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_begin_edit_copies_player() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "X"), false).unwrap();

        let editing = roster.begin_edit("A").unwrap().clone();
        assert_eq!(editing, player("A", "X"));

        roster.submit_player(captain("A", "X"), true).unwrap();

        assert!(roster.find("A").unwrap().is_captain);
        assert!(!editing.is_captain);
    }

    #[test]
    fn test_begin_edit_unknown_player() {
        let mut roster = Roster::default();

        assert!(matches!(
            roster.begin_edit("nobody"),
            Err(RosterError::NotFound { .. })
        ));
        assert!(!roster.is_editing());
    }

    #[test]
    fn test_successful_submit_clears_editing() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "X"), false).unwrap();
        roster.begin_edit("A").unwrap();

        roster.submit_player(player("A", "Y"), true).unwrap();

        assert!(roster.editing().is_none());
    }

    #[test]
    fn test_failed_submit_keeps_editing() {
        let mut roster = Roster::default();
        roster.submit_player(captain("A", "X"), false).unwrap();
        roster.submit_player(player("B", "X"), false).unwrap();
        roster.begin_edit("B").unwrap();

        assert!(roster.submit_player(captain("B", "X"), true).is_err());

        assert_eq!(roster.editing().map(|p| p.name.as_str()), Some("B"));
    }

    #[test]
    fn test_cancel_edit_is_idempotent() {
        let mut roster = Roster::default();
        roster.cancel_edit();
        assert!(!roster.is_editing());

        roster.submit_player(player("A", "X"), false).unwrap();
        roster.begin_edit("A").unwrap();
        roster.cancel_edit();
        roster.cancel_edit();

        assert!(!roster.is_editing());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_filter_replaces_view_without_mutating_roster() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "X"), false).unwrap();
        roster.submit_player(player("B", "Y"), false).unwrap();

        let matched = roster.filter(FilterCriteria::new().with_team("Y")).to_vec();

        assert_eq!(matched.len(), 1);
        assert_eq!(roster.view().map(|v| v.len()), Some(1));
        assert_eq!(roster.displayed()[0].name, "B");
        assert_eq!(roster.len(), 2);

        roster.filter(FilterCriteria::new().with_team("X"));
        assert_eq!(roster.displayed()[0].name, "A");
    }

    #[test]
    fn test_empty_filter_returns_full_roster() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "X"), false).unwrap();
        roster.submit_player(player("B", "Y"), false).unwrap();

        let matched = roster.filter(FilterCriteria::default()).to_vec();

        assert_eq!(matched, roster.players().to_vec());
    }

    #[test]
    fn test_displayed_falls_back_when_view_is_empty() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "X"), false).unwrap();

        assert!(roster.filter(FilterCriteria::new().captains()).is_empty());

        assert!(roster.is_filtered());
        assert_eq!(roster.displayed().len(), 1);

        roster.clear_filter();
        assert!(!roster.is_filtered());
        assert!(roster.active_filter().is_none());
    }

    #[test]
    fn test_view_refreshed_after_submit() {
        let mut roster = Roster::default();
        roster.submit_player(captain("A", "X"), false).unwrap();
        roster.submit_player(player("B", "X"), false).unwrap();
        roster.filter(FilterCriteria::new().captains());

        roster.submit_player(captain("C", "Y"), false).unwrap();
        assert_eq!(roster.view().map(|v| v.len()), Some(2));

        roster.submit_player(player("A", "X"), true).unwrap();
        let names: Vec<&str> = roster.displayed().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C"]);
    }

    #[test]
    fn test_teams_in_first_seen_order() {
        let mut roster = Roster::default();
        roster.submit_player(player("A", "Y"), false).unwrap();
        roster.submit_player(player("B", "X"), false).unwrap();
        roster.submit_player(player("C", "Y"), false).unwrap();

        assert_eq!(roster.teams(), vec!["Y", "X"]);
    }
}
