use yew::prelude::*;
use yew_router::prelude::*;
use tracing::warn;
use shared::*;
use crate::{Route, api, placeholder, styles::*};
use crate::config::CONFIG;
use crate::event_list::format_date;
use crate::session::{use_session, SessionAction};
use crate::tasks::{spawn_for_effect, spawn_in, use_task_scope};

#[function_component]
fn UserPicker() -> Html {
    let session = use_session();
    let selected = session.0.user_id();

    let render_group = |role: Role| {
        TEST_USERS.iter().filter(|u| u.role == role).map(|user| {
            let id = user.id;
            let onclick = {
                let session = session.clone();
                Callback::from(move |_| session.dispatch(SessionAction::Select(id)))
            };
            let class = if selected == Some(id) {
                combine_classes(BUTTON_BASE, "bg-pink-600 ring-2 ring-pink-300")
            } else {
                combine_classes(BUTTON_BASE, "bg-pink-300 hover:bg-pink-400")
            };
            html! { <button type="button" {class} {onclick}>{user.name}</button> }
        }).collect::<Html>()
    };

    let on_clear = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Clear))
    };

    html! {
        <div class={CARD}>
            <h2 class={HEADING_MD}>{"Choose a test user"}</h2>
            <p class={combine_classes(TEXT_LABEL, "mb-2")}>{Role::Host.label()}</p>
            <div class="flex flex-wrap gap-2 mb-4">{render_group(Role::Host)}</div>
            <p class={combine_classes(TEXT_LABEL, "mb-2")}>{Role::Guest.label()}</p>
            <div class="flex flex-wrap gap-2 mb-4">{render_group(Role::Guest)}</div>
            <div class={FLEX_BETWEEN}>
                <span class={TEXT_MUTED}>
                    {match session.0.user() {
                        Some(user) => format!("Signed in as {} ({})", user.name, user.role.label()),
                        None => "No user selected".to_string(),
                    }}
                </span>
                <button type="button" class={combine_classes(BUTTON_BASE, BUTTON_SECONDARY)}
                    disabled={selected.is_none()} onclick={on_clear}>
                    {"Clear"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileProps {
    user_id: UserId,
}

#[function_component]
fn Profile(props: &ProfileProps) -> Html {
    let user = use_state(|| None::<User>);

    {
        let user = user.clone();
        use_effect_with_deps(move |&user_id| {
            user.set(None);
            let request = spawn_for_effect(async move {
                match api::user(user_id).await {
                    Ok(found) => user.set(Some(found)),
                    Err(e) => warn!(user_id, error = %e, "profile unavailable"),
                }
            });
            move || drop(request)
        }, props.user_id);
    }

    match &*user {
        Some(user) => html! {
            <div class={CARD_SECTION}>
                <p class="font-semibold text-gray-800">{&user.name}</p>
                <p class={TEXT_MUTED}>{&user.email}</p>
                {if let Some(phone) = &user.phone {
                    html! { <p class={TEXT_MUTED}>{phone}</p> }
                } else { html! {} }}
            </div>
        },
        None => html! {},
    }
}

#[function_component]
fn Recommendation() -> Html {
    let events = use_state(|| None::<Vec<DatingEventCard>>);
    let roll = use_state(js_sys::Math::random);
    let scope = use_task_scope();

    {
        let events = events.clone();
        use_effect_with_deps(move |_| {
            spawn_in(&scope, async move {
                match api::list_events().await {
                    Ok(list) => events.set(Some(list)),
                    Err(e) => {
                        warn!(error = %e, "failed to load events for recommendation");
                        if CONFIG.placeholder_fallback {
                            events.set(Some(placeholder::events()));
                        } else {
                            events.set(Some(Vec::new()));
                        }
                    }
                }
            });
            || ()
        }, ());
    }

    let on_reroll = {
        let roll = roll.clone();
        Callback::from(move |_| roll.set(js_sys::Math::random()))
    };

    let body = match &*events {
        None => html! { <div class={LOADING}>{"Finding an event for you..."}</div> },
        Some(list) => match recommend_event(list, *roll) {
            Some(event) => html! {
                <div class={SPACE_Y_BASE}>
                    <Link<Route> to={Route::Event { id: event.id }} classes={CARD_HOVER}>
                        <h3 class={HEADING_SM}>{&event.title}</h3>
                        <p class={TEXT_MUTED}>{format!("{} · {}", event.hostname, event.location)}</p>
                        <p class={TEXT_MUTED}>{format_date(event.event_date)}</p>
                    </Link<Route>>
                    <button type="button" class={combine_classes(BUTTON_BASE, BUTTON_SECONDARY)} onclick={on_reroll}>
                        {"Show another"}
                    </button>
                </div>
            },
            None => html! { <p class={TEXT_MUTED}>{"No open events right now."}</p> },
        },
    };

    html! {
        <div class={CARD}>
            <h2 class={HEADING_MD}>{"Recommended for you"}</h2>
            {body}
        </div>
    }
}

#[function_component]
pub fn Home() -> Html {
    let session = use_session();

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"GrewMeet"}</h1>
            <p class="text-center text-gray-600 mb-8">
                {"Find a gathering, meet new people, and decide the details together."}
            </p>
            <div class={SPACE_Y_LG}>
                <UserPicker />
                {if let Some(user_id) = session.0.user_id() {
                    html! { <Profile {user_id} /> }
                } else { html! {} }}
                <Recommendation />
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Link<Route> to={Route::Events} classes={classes!(button_primary(false))}>
                        {"Browse events"}
                    </Link<Route>>
                    <Link<Route> to={Route::Signup} classes={classes!(combine_classes(BUTTON_BASE, BUTTON_SECONDARY))}>
                        {"Create an account"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
