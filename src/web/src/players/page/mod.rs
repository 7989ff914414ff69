pub mod routes;

use crate::views::{FilterFormModel, PlayerFormModel, PlayerListItem};
use crate::RosterAppData;
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use roster::Roster;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "roster/index.html")]
pub struct RosterPageTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub notice: Option<String>,
    pub form: PlayerFormModel,
    pub filter_form: FilterFormModel,
    pub is_filtered: bool,
    pub players: Vec<PlayerListItem>,
    pub teams: Vec<String>,
}

impl RosterPageTemplate {
    pub fn new(roster: &Roster, form: PlayerFormModel, notice: Option<String>) -> Self {
        let editing = roster.editing();

        RosterPageTemplate {
            css_version: crate::common::default_handler::CSS_VERSION,
            title: "Player Management".to_string(),
            notice,
            form,
            filter_form: FilterFormModel::new(roster.active_filter()),
            is_filtered: roster.is_filtered(),
            players: roster
                .displayed()
                .iter()
                .map(|p| PlayerListItem::new(p, editing))
                .collect(),
            teams: roster.teams().into_iter().map(String::from).collect(),
        }
    }
}

pub async fn roster_page_action(State(state): State<RosterAppData>) -> impl IntoResponse {
    let roster = state.roster.read().await;

    RosterPageTemplate::new(
        &roster,
        PlayerFormModel::for_roster_editor(roster.editing()),
        None,
    )
}
