use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;
use tracing::info;

use crate::ui_model::AppRoute;

mod backend;
mod document;
mod game;
mod leaderboard;
mod storage;
mod timers;

use game::GamePage;
use leaderboard::LeaderboardPage;

const LOCALSTORAGE_SETTINGS_KEY: &str = "physio.settings.v1";

pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build(),
    );
    info!("Phys.io client starting");

    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    // Unmatched paths render nothing.
    view! {
        <Router>
            <Routes fallback=|| ()>
                <Route path=StaticSegment(AppRoute::Game.segment()) view=GamePage />
                <Route path=StaticSegment(AppRoute::Leaderboard.segment()) view=LeaderboardPage />
            </Routes>
        </Router>
    }
}
