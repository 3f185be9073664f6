use yew::prelude::*;
use yew_router::prelude::*;
use tracing::{info, warn};
use shared::*;
use crate::{Route, api, placeholder, styles::*};
use crate::config::CONFIG;
use crate::event_list::{capacity_line, format_date};
use crate::session::use_session;
use crate::tasks::{spawn_in, use_task_scope};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: EventId,
}

#[derive(Clone, PartialEq)]
enum State {
    Loading,
    Loaded(DatingEvent),
    Error(String),
}

#[function_component]
pub fn EventDetail(props: &Props) -> Html {
    let state = use_state(|| State::Loading);
    let alert = use_state(|| None::<Alert>);
    let joining = use_state(|| false);
    let session = use_session();
    let scope = use_task_scope();

    {
        let state = state.clone();
        let scope = scope.clone();
        use_effect_with_deps(move |&event_id| {
            state.set(State::Loading);
            spawn_in(&scope, async move {
                match api::event(event_id).await {
                    Ok(event) => state.set(State::Loaded(event)),
                    Err(e) if CONFIG.placeholder_fallback => {
                        warn!(event_id, error = %e, "event unavailable, showing placeholder data");
                        state.set(State::Loaded(placeholder::event(event_id)));
                    }
                    Err(e) => state.set(State::Error(e.to_string())),
                }
            });
            || ()
        }, props.id);
    }

    let on_join = {
        let state = state.clone();
        let alert = alert.clone();
        let joining = joining.clone();
        let event_id = props.id;
        let user_id = session.0.user_id();
        Callback::from(move |_| {
            let Some(user_id) = user_id else {
                alert.set(Some(Alert::Error("Select a user on the home screen first.".into())));
                return;
            };
            if *joining {
                return;
            }
            joining.set(true);
            alert.set(None);
            let state = state.clone();
            let alert = alert.clone();
            let joining = joining.clone();
            spawn_in(&scope, async move {
                match api::join_event(event_id, user_id).await {
                    Ok(event) => {
                        info!(event_id, user_id, "joined event");
                        state.set(State::Loaded(event));
                        alert.set(Some(Alert::Success("You have joined this event.".into())));
                    }
                    Err(e) => {
                        warn!(event_id, user_id, error = %e, code = ?e.code(), "join failed");
                        alert.set(Some(Alert::Error(e.to_string())));
                    }
                }
                joining.set(false);
            });
        })
    };

    let event = match &*state {
        State::Loading => return html! { <div class={LOADING}>{"Loading event..."}</div> },
        State::Error(error) => return html! {
            <div class={CONTAINER_SM}>
                <div class={alert_style("error")}>{error}</div>
                <Link<Route> to={Route::Events} classes={classes!(button_primary(false))}>{"Back to events"}</Link<Route>>
            </div>
        },
        State::Loaded(event) => event,
    };

    let full = event.capacity.is_full();
    let join_disabled = full || session.0.user_id().is_none() || *joining;

    html! {
        <div class={CONTAINER_SM}>
            {render_alert(&alert)}
            <div class={combine_classes(CARD, SPACE_Y_BASE)}>
                <div class={FLEX_BETWEEN}>
                    <h1 class={HEADING_MD}>{&event.title}</h1>
                    {if full {
                        html! { <span class={badge("bg-red-400")}>{"Full"}</span> }
                    } else { html! {} }}
                </div>
                <p class={TEXT_MUTED}>{format!("Hosted by {}", event.hostname)}</p>
                <p class={TEXT_MUTED}>{format_date(event.event_date)}</p>
                <p class={TEXT_MUTED}>{&event.location}</p>
                {capacity_line(&event.capacity)}
                {if let Some(description) = &event.description {
                    html! { <p class="text-gray-700 whitespace-pre-line">{description}</p> }
                } else { html! {} }}
                <div class="flex flex-col sm:flex-row gap-4 pt-2">
                    <button type="button" class={button_primary(false)} disabled={join_disabled} onclick={on_join}>
                        {if *joining { "Joining..." } else if full { "Event full" } else { "Join event" }}
                    </button>
                    <Link<Route> to={Route::EventVotes { id: event.id }} classes={classes!(combine_classes(BUTTON_BASE, BUTTON_SECONDARY))}>
                        {"Votes"}
                    </Link<Route>>
                </div>
                {if session.0.user_id().is_none() {
                    html! { <p class={TEXT_MUTED}>{"Pick a test user on the home screen to join."}</p> }
                } else { html! {} }}
            </div>
        </div>
    }
}

pub fn render_alert(alert: &Option<Alert>) -> Html {
    match alert {
        Some(Alert::Success(message)) => html! { <div class={alert_style("success")}>{message}</div> },
        Some(Alert::Error(message)) => html! { <div class={alert_style("error")}>{message}</div> },
        None => html! {},
    }
}
