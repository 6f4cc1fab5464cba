use leptos::prelude::*;
use physio::time::Instant;
use physio::{GameSession, ScoringTier};
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;

use super::backend::BackendClient;
use super::document::BodyBackground;
use super::storage::resolve_client_config;
use super::timers::{Interval, Timeout};
use crate::ui_model::{self, AppRoute, TimerSlot, APP_TITLE, BACKGROUND_IMAGE, REFRESH_ICON};

fn session_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    now ^ (noise << 21)
}

/// Writes `value` only when it differs, so effects keyed on the signal do not
/// re-run on every poll. No-op once the view is disposed.
fn set_if_changed<T>(sig: RwSignal<T>, value: T)
where
    T: PartialEq + Send + Sync + 'static,
{
    if sig.try_with_untracked(|cur| cur != &value) == Some(true) {
        sig.try_set(value);
    }
}

#[component]
pub(super) fn GamePage() -> impl IntoView {
    let config = resolve_client_config();
    let client = BackendClient::new(config.clone());
    let removal_delay_ms = config.removal_delay_ms;

    let session = StoredValue::new(GameSession::from_config(
        &config,
        session_seed(),
        Instant::now(),
    ));

    let queue = RwSignal::new(session.with_value(|s| *s.queue()));
    let removing = RwSignal::new(None::<usize>);
    let tier = RwSignal::new(None::<ScoringTier>);
    let score = RwSignal::new(0i64);
    let bar_width = RwSignal::new(100.0f64);

    let refresh_ui_from_session = move || {
        let Some((q, r, t, sc)) =
            session.try_with_value(|s| (*s.queue(), s.removing(), s.tier(), s.score()))
        else {
            return;
        };
        set_if_changed(queue, q);
        set_if_changed(removing, r);
        set_if_changed(tier, t);
        set_if_changed(score, sc);
    };

    let finish_rotation = move || {
        session.try_update_value(|s| {
            s.finish_rotation();
        });
        refresh_ui_from_session();
    };

    let removal_timer = StoredValue::new_local(TimerSlot::<Timeout>::default());

    // A rotation still waiting on its animation completes before a new one starts.
    let settle_rotation = move || {
        if let Some(Some(in_flight)) = removal_timer.try_update_value(|slot| slot.take()) {
            drop(in_flight);
            finish_rotation();
        }
    };

    let schedule_rotation = move || {
        let fire = move || {
            removal_timer.try_update_value(|slot| drop(slot.take()));
            finish_rotation();
        };
        match Timeout::start(removal_delay_ms, fire) {
            Ok(timeout) => {
                removal_timer.try_update_value(|slot| drop(slot.arm(timeout)));
            }
            Err(e) => {
                warn!("{e}; rotating without animation");
                finish_rotation();
            }
        }
    };

    let fast_poll = {
        let client = client.clone();
        move || {
            let now = Instant::now();
            if let Some(width) = session.try_with_value(|s| s.progress(now).bar_width()) {
                bar_width.try_set(width);
            }

            let client = client.clone();
            spawn_local(async move {
                match client.scoring_effect().await {
                    Ok(raw) => {
                        session.try_update_value(|s| {
                            s.observe_scoring_effect(raw);
                        });
                        refresh_ui_from_session();
                    }
                    Err(e) => warn!("scoring effect poll failed: {e}"),
                }
            });
        }
    };

    let slow_cycle = {
        let client = client.clone();
        move || {
            settle_rotation();
            let Some(report) = session.try_update_value(|s| s.begin_cycle(Instant::now())) else {
                return;
            };
            refresh_ui_from_session();
            schedule_rotation();

            let Some(report) = report else {
                return;
            };
            let client = client.clone();
            spawn_local(async move {
                match client.update_score(report).await {
                    Ok(reply) => {
                        session.try_update_value(|s| s.apply_score(&reply));
                        refresh_ui_from_session();
                    }
                    Err(e) => warn!("score update failed: {e}"),
                }
            });
        }
    };

    let do_refresh = move || {
        session.try_update_value(|s| {
            s.refresh();
        });
        refresh_ui_from_session();
    };

    let do_skip = move || {
        settle_rotation();
        session.try_update_value(|s| s.begin_skip());
        refresh_ui_from_session();
        schedule_rotation();
    };

    // Tell the backend which pose to score whenever the lead changes.
    {
        let client = client.clone();
        Effect::new(move |_| {
            queue.track();
            let Some(req) = session.try_with_value(|s| s.lead_report()) else {
                return;
            };
            let client = client.clone();
            spawn_local(async move {
                if let Err(e) = client.report_pose(req).await {
                    warn!("current pose report failed: {e}");
                }
            });
        });
    }

    let intervals = StoredValue::new_local(Vec::<Interval>::with_capacity(2));
    let loops: [(&str, u32, Box<dyn FnMut()>); 2] = [
        ("fast poll", config.fast_poll_ms, Box::new(fast_poll)),
        ("slow cycle", config.slow_cycle_ms, Box::new(slow_cycle)),
    ];
    for (label, period_ms, tick) in loops {
        match Interval::start(period_ms, tick) {
            Ok(interval) => intervals.update_value(|v| v.push(interval)),
            Err(e) => warn!("{label}: {e}"),
        }
    }

    let background = BodyBackground::apply(BACKGROUND_IMAGE);
    info!(backend = %config.backend_url, "game view mounted");

    on_cleanup(move || {
        intervals.try_update_value(|v| v.clear());
        removal_timer.try_update_value(|slot| drop(slot.take()));
        if let Some(background) = background {
            background.restore();
        }
        info!("game view unmounted");
    });

    let video_feed = client.video_feed_url();

    view! {
        <div class="game">
            <div class="game-title">
                <h1>{APP_TITLE}</h1>
            </div>

            <div class="game-stage">
                <div class="feedback-column">
                    {move || {
                        tier.get()
                            .map(|t| {
                                view! {
                                    <div class=t.css_class() style=ui_model::tier_style(t)>
                                        <p>{t.label()}</p>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="camera-column">
                    <div class="camera-frame">
                        <img src=video_feed alt="Camera Feed" class="camera-feed" />
                    </div>
                    <img
                        src=REFRESH_ICON
                        alt="Refresh Button"
                        class="refresh-button"
                        on:click=move |_| do_refresh()
                    />
                </div>

                <div class="score-column">
                    <h2>"SCORE: "</h2>
                    <div class="score-value">{move || score.get().to_string()}</div>
                </div>
            </div>

            <button class="skip" title="Skip to the next pose" on:click=move |_| do_skip()>
                "skip"
            </button>

            <a class="nav-link" href=AppRoute::Game.nav_target().path()>
                {AppRoute::Game.nav_target().label()}
            </a>

            <div id="moves" class="pose-queue">
                {move || {
                    let q = queue.get();
                    q.visible()
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(idx, pose)| {
                            view! {
                                <img
                                    src=pose.image_path()
                                    alt=pose.display_name()
                                    class=move || ui_model::slot_class(idx, removing.get())
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div id="progress-bar" class="progress-bar">
                <div id="bar" class="bar" style=move || ui_model::progress_bar_style(bar_width.get())></div>
            </div>
        </div>
    }
}
