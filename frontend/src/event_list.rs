use yew::prelude::*;
use yew_router::prelude::*;
use time::{OffsetDateTime, PrimitiveDateTime};
use time::macros::format_description;
use tracing::warn;
use shared::*;
use crate::{Route, api, placeholder, styles::*};
use crate::config::CONFIG;
use crate::tasks::{spawn_in, use_task_scope};

pub fn format_date(date: PrimitiveDateTime) -> String {
    date.format(format_description!("[year].[month].[day] [hour]:[minute]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Event dates carry no offset; they are compared as UTC.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

pub fn capacity_line(capacity: &Capacity) -> Html {
    html! {
        <div class="flex flex-wrap gap-4 text-sm text-gray-600">
            <span>{format!("Men {}/{} ({} left)", capacity.current_male_participants,
                capacity.max_male_participants_count, capacity.remaining_male())}</span>
            <span>{format!("Women {}/{} ({} left)", capacity.current_female_participants,
                capacity.max_female_participants_count, capacity.remaining_female())}</span>
            <span class="font-semibold">{format!("{}/{} joined", capacity.total_current(), capacity.total_max())}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: DatingEventCard,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn EventCard(props: &EventCardProps) -> Html {
    let event = &props.event;
    let status = EventStatus::at(event.event_date, now());

    html! {
        <div class={combine_classes(CARD, "h-full flex flex-col gap-2")}>
            <div class={FLEX_BETWEEN}>
                <Link<Route> to={Route::Event { id: event.id }} classes="hover:underline">
                    <h2 class={HEADING_SM}>{&event.title}</h2>
                </Link<Route>>
                {if event.capacity.is_full() {
                    html! { <span class={badge("bg-red-400")}>{"Full"}</span> }
                } else {
                    html! { <span class={badge(status_color(status))}>{status.label()}</span> }
                }}
            </div>
            <p class={TEXT_MUTED}>{&event.hostname}</p>
            <p class={TEXT_MUTED}>{format_date(event.event_date)}</p>
            <p class={TEXT_MUTED}>{&event.location}</p>
            {capacity_line(&event.capacity)}
            <div class="mt-auto">{ for props.children.iter() }</div>
        </div>
    }
}

pub fn status_color(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Upcoming => "bg-blue-400",
        EventStatus::Active => "bg-green-500",
        EventStatus::Completed => "bg-gray-400",
    }
}

#[function_component]
pub fn EventList() -> Html {
    let events = use_state(|| None::<Vec<DatingEventCard>>);
    let error = use_state(|| None::<String>);
    let scope = use_task_scope();

    {
        let events = events.clone();
        let error = error.clone();
        use_effect_with_deps(move |_| {
            spawn_in(&scope, async move {
                match api::list_events().await {
                    Ok(list) => events.set(Some(list)),
                    Err(e) if CONFIG.placeholder_fallback => {
                        warn!(error = %e, "event list unavailable, showing placeholder data");
                        events.set(Some(placeholder::events()));
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to load events");
                        error.set(Some(e.to_string()));
                        events.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        }, ());
    }

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"Events"}</h1>

            {if let Some(error) = &*error {
                html! { <div class={alert_style("error")}>{error}</div> }
            } else { html! {} }}

            {match &*events {
                None => html! { <div class={LOADING}>{"Loading events..."}</div> },
                Some(list) if list.is_empty() => html! {
                    <p class={combine_classes(TEXT_MUTED, "text-center")}>{"No events yet."}</p>
                },
                Some(list) => html! {
                    <div class="grid gap-4 md:grid-cols-2">
                        {list.iter().map(|event| html! {
                            <EventCard key={event.id} event={event.clone()} />
                        }).collect::<Html>()}
                    </div>
                },
            }}
        </div>
    }
}
