use yew::prelude::*;
use yew_router::prelude::*;
use tracing::{debug, warn};
use shared::*;
use crate::{Route, api, placeholder, styles::*};
use crate::config::CONFIG;
use crate::event_list::{capacity_line, format_date};
use crate::session::use_session;
use crate::tasks::{spawn_for_effect, spawn_in, use_task_scope};
use crate::vote_create::VoteCreate;
use crate::vote_section::VoteSectionView;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: EventId,
}

/// Event header, the host's vote form and the event's votes.
#[function_component]
pub fn DatingEventDetail(props: &Props) -> Html {
    let session = use_session();
    let event = use_state(|| None::<DatingEvent>);
    let error = use_state(|| None::<String>);
    let is_participant = use_state(|| false);
    let show_create = use_state(|| false);
    let refresh = use_state(|| 0u32);
    let scope = use_task_scope();

    {
        let event = event.clone();
        let error = error.clone();
        use_effect_with_deps(move |&event_id| {
            spawn_in(&scope, async move {
                match api::event(event_id).await {
                    Ok(found) => event.set(Some(found)),
                    Err(e) if CONFIG.placeholder_fallback => {
                        warn!(event_id, error = %e, "event unavailable, showing placeholder data");
                        event.set(Some(placeholder::event(event_id)));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
            || ()
        }, props.id);
    }

    {
        let is_participant = is_participant.clone();
        use_effect_with_deps(move |&(event_id, user_id)| {
            is_participant.set(false);
            let request = user_id.map(|user_id| spawn_for_effect(async move {
                match api::user_events(user_id).await {
                    Ok(joined) => {
                        let joined = joined.iter().any(|e| e.id == event_id);
                        debug!(event_id, user_id, joined, "participation resolved");
                        is_participant.set(joined);
                    }
                    Err(e) => warn!(user_id, error = %e, "could not resolve participation"),
                }
            }));
            move || drop(request)
        }, (props.id, session.0.user_id()));
    }

    if let Some(error) = &*error {
        return html! {
            <div class={CONTAINER}>
                <div class={alert_style("error")}>{error}</div>
                <Link<Route> to={Route::Events} classes={classes!(button_primary(false))}>{"Back to events"}</Link<Route>>
            </div>
        };
    }
    let Some(event) = &*event else {
        return html! { <div class={LOADING}>{"Loading event..."}</div> };
    };

    let host_id = event.host_user_id.unwrap_or(CONFIG.default_host_id);
    let is_host = session.0.is_host() && session.0.user_id() == Some(host_id);
    // An anonymous viewer can only ever see results.
    let viewer = Viewer {
        user_id: session.0.user_id().unwrap_or_default(),
        is_participant: session.0.user_id().is_some() && *is_participant,
    };

    let on_open = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(true))
    };
    let on_close = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };
    let on_created = {
        let show_create = show_create.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            show_create.set(false);
            refresh.set(*refresh + 1);
        })
    };

    html! {
        <div class={combine_classes(CONTAINER, SPACE_Y_LG)}>
            <div class={combine_classes(CARD, SPACE_Y_BASE)}>
                <div class={FLEX_BETWEEN}>
                    <h1 class={HEADING_MD}>{&event.title}</h1>
                    <Link<Route> to={Route::Event { id: event.id }} classes="text-sm text-pink-500 hover:underline">
                        {"Event details"}
                    </Link<Route>>
                </div>
                <p class={TEXT_MUTED}>{format!("{} · {} · {}", event.hostname, format_date(event.event_date), event.location)}</p>
                {capacity_line(&event.capacity)}
                {if is_host {
                    html! {
                        <button type="button" class={button_primary(false)} onclick={on_open}>{"Create vote"}</button>
                    }
                } else { html! {} }}
            </div>

            {if is_host && *show_create {
                html! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40 p-4">
                        <div class={combine_classes(CARD, "w-full max-w-lg")}>
                            <VoteCreate {host_id} event_id={event.id} {on_created} on_cancel={on_close} />
                        </div>
                    </div>
                }
            } else { html! {} }}

            <VoteSectionView event_id={event.id} {host_id} {viewer} refresh={*refresh} />
        </div>
    }
}
