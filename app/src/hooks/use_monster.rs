use dioxus::prelude::*;
use monster_api::prelude::*;

use crate::MonsterState;
use super::BrowserSdk;

pub fn use_controller() -> Controller<BrowserSdk> {
    use_context::<Controller<BrowserSdk>>()
}

/// Re-query the monster for the token id currently entered.
pub async fn refetch_monster(controller: Controller<BrowserSdk>, mut monster: Signal<MonsterState>) {
    let token_id = monster.peek().parsed_token_id();
    match token_id {
        Some(token_id) => {
            let record = controller.query_monster(token_id).await;
            monster.write().record = record;
        }
        None => {
            tracing::debug!("No token id entered, skipping monster query");
        }
    }
}
