use leptos::prelude::*;
use physio::leaderboard::{builtin_entries, COLUMNS};

use crate::ui_model::AppRoute;

#[component]
pub(super) fn LeaderboardPage() -> impl IntoView {
    view! {
        <div id="container" class="leaderboard-page">
            <h1>"Leaderboard"</h1>
            <table id="leaderboard">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {builtin_entries()
                        .iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.username}</td>
                                    <td>{row.streak.to_string()}</td>
                                    <td>{row.score.to_string()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <a id="home" href=AppRoute::Leaderboard.nav_target().path()>
                {AppRoute::Leaderboard.nav_target().label()}
            </a>
        </div>
    }
}
