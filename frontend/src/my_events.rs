use yew::prelude::*;
use yew_router::prelude::*;
use tracing::{info, warn};
use shared::*;
use crate::{Route, api, styles::*};
use crate::event_detail::render_alert;
use crate::event_list::EventCard;
use crate::session::use_session;
use crate::tasks::{spawn_in, use_task_scope};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Events the selected user has joined.
#[function_component]
pub fn MyEvents() -> Html {
    let session = use_session();
    let events = use_state(|| None::<Vec<DatingEventCard>>);
    let alert = use_state(|| None::<Alert>);
    let leaving = use_state(|| None::<EventId>);
    let scope = use_task_scope();
    let user_id = session.0.user_id();

    {
        let events = events.clone();
        let alert = alert.clone();
        let scope = scope.clone();
        use_effect_with_deps(move |&user_id| {
            events.set(None);
            if let Some(user_id) = user_id {
                spawn_in(&scope, async move {
                    match api::user_events(user_id).await {
                        Ok(list) => events.set(Some(list)),
                        Err(e) => {
                            warn!(user_id, error = %e, "failed to load joined events");
                            alert.set(Some(Alert::Error(e.to_string())));
                            events.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        }, user_id);
    }

    let Some(user_id) = user_id else {
        return html! {
            <div class={CONTAINER_SM}>
                <div class={alert_style("info")}>{"Pick a test user on the home screen to see your events."}</div>
                <Link<Route> to={Route::Home} classes={classes!(button_primary(false))}>{"Go home"}</Link<Route>>
            </div>
        };
    };

    let on_leave = {
        let events = events.clone();
        let alert = alert.clone();
        let leaving = leaving.clone();
        Callback::from(move |event_id: EventId| {
            if leaving.is_some() || !confirm("Leave this event?") {
                return;
            }
            leaving.set(Some(event_id));
            let events = events.clone();
            let alert = alert.clone();
            let leaving = leaving.clone();
            spawn_in(&scope, async move {
                match api::leave_event(user_id, event_id).await {
                    Ok(response) => {
                        info!(user_id, event_id, "left event");
                        let remaining = (*events).clone()
                            .map(|list| list.into_iter().filter(|e| e.id != event_id).collect());
                        events.set(remaining);
                        let message = response.message.unwrap_or_else(|| "You have left the event.".into());
                        alert.set(Some(Alert::Success(message)));
                    }
                    Err(e) => {
                        warn!(user_id, event_id, error = %e, "leave failed");
                        alert.set(Some(Alert::Error(e.to_string())));
                    }
                }
                leaving.set(None);
            });
        })
    };

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"My events"}</h1>
            {render_alert(&alert)}
            {match &*events {
                None => html! { <div class={LOADING}>{"Loading your events..."}</div> },
                Some(list) if list.is_empty() => html! {
                    <div class="text-center space-y-4">
                        <p class={TEXT_MUTED}>{"You have not joined any events yet."}</p>
                        <Link<Route> to={Route::Events} classes={classes!(button_primary(false))}>{"Browse events"}</Link<Route>>
                    </div>
                },
                Some(list) => html! {
                    <div class="grid gap-4 md:grid-cols-2">
                        {list.iter().map(|event| {
                            let event_id = event.id;
                            let onclick = on_leave.reform(move |_: MouseEvent| event_id);
                            let busy = *leaving == Some(event_id);
                            html! {
                                <EventCard key={event_id} event={event.clone()}>
                                    <div class="flex gap-3 pt-2">
                                        <Link<Route> to={Route::EventVotes { id: event_id }} classes={classes!(button_primary(false))}>
                                            {"Votes"}
                                        </Link<Route>>
                                        <button type="button" class={combine_classes(BUTTON_BASE, BUTTON_DANGER)}
                                            disabled={leaving.is_some()} {onclick}>
                                            {if busy { "Leaving..." } else { "Leave" }}
                                        </button>
                                    </div>
                                </EventCard>
                            }
                        }).collect::<Html>()}
                    </div>
                },
            }}
        </div>
    }
}
