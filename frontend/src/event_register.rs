use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;
use time::{Duration, PrimitiveDateTime};
use time::macros::{format_description, time};
use tracing::{info, warn};
use shared::*;
use crate::{Route, api, styles::*};
use crate::event_list::now;
use crate::session::use_session;
use crate::tasks::{spawn_in, use_task_scope};

const INPUT_FORMAT: &[time::format_description::FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

fn default_date() -> PrimitiveDateTime {
    let week = now() + Duration::days(7);
    week.replace_time(time!(19:00))
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Location,
    Date,
}

fn stepper(label: &str, value: u32, on_step: Callback<i32>) -> Html {
    let down = {
        let on_step = on_step.clone();
        Callback::from(move |_| on_step.emit(-1))
    };
    let up = Callback::from(move |_| on_step.emit(1));
    html! {
        <div class={INPUT_GROUP}>
            <label class={TEXT_LABEL}>{label}</label>
            <div class="flex items-center gap-3">
                <button type="button" class={combine_classes(BUTTON_BASE, BUTTON_SECONDARY)}
                    disabled={value <= MIN_PARTICIPANTS} onclick={down}>{"-"}</button>
                <span class="w-8 text-center font-semibold">{value}</span>
                <button type="button" class={combine_classes(BUTTON_BASE, BUTTON_SECONDARY)}
                    disabled={value >= MAX_PARTICIPANTS} onclick={up}>{"+"}</button>
            </div>
        </div>
    }
}

/// Hosts register a new event here.
#[function_component]
pub fn EventRegister() -> Html {
    let session = use_session();
    let draft = use_state(|| EventDraft::new(default_date()));
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();
    let scope = use_task_scope();

    let Some(host_id) = session.0.user_id().filter(|_| session.0.is_host()) else {
        return html! {
            <div class={CONTAINER_SM}>
                <div class={alert_style("warning")}>{"Only hosts can register events. Pick a host on the home screen."}</div>
                <Link<Route> to={Route::Home} classes={classes!(button_primary(false))}>{"Go home"}</Link<Route>>
            </div>
        };
    };

    let on_field = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*draft).clone();
            match field {
                Field::Title => next.title = value,
                Field::Location => next.location = value,
                Field::Date => match PrimitiveDateTime::parse(&value, INPUT_FORMAT) {
                    Ok(date) => next.event_date_time = date,
                    Err(_) => return,
                },
            }
            draft.set(next);
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.description = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            draft.set(next);
        })
    };

    let on_male = {
        let draft = draft.clone();
        Callback::from(move |delta: i32| {
            let mut next = (*draft).clone();
            next.adjust_male(delta);
            draft.set(next);
        })
    };
    let on_female = {
        let draft = draft.clone();
        Callback::from(move |delta: i32| {
            let mut next = (*draft).clone();
            next.adjust_female(delta);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let request = match draft.to_request(now()) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            error.set(None);
            submitting.set(true);
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            spawn_in(&scope, async move {
                match api::create_event(host_id, &request).await {
                    Ok(event) => {
                        info!(event_id = event.id, host_id, "event registered");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Event { id: event.id });
                        }
                    }
                    Err(e) => {
                        warn!(host_id, error = %e, "event registration failed");
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let date_value = draft.event_date_time.format(INPUT_FORMAT).unwrap_or_default();

    html! {
        <div class={CONTAINER_SM}>
            <div class={CARD}>
                <h1 class={HEADING_LG}>{"Register an event"}</h1>
                {if let Some(error) = &*error {
                    html! { <div class={alert_style("error")}>{error}</div> }
                } else { html! {} }}
                <form {onsubmit} class={SPACE_Y_LG}>
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL}>{format!("Title ({}/{})", draft.title.chars().count(), MAX_TITLE_LENGTH)}</label>
                        <input type="text" class={INPUT_BASE} value={draft.title.clone()}
                            maxlength={MAX_TITLE_LENGTH.to_string()} oninput={on_field(Field::Title)} />
                    </div>
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL}>{"Location"}</label>
                        <input type="text" class={INPUT_BASE} value={draft.location.clone()}
                            oninput={on_field(Field::Location)} />
                    </div>
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL}>{"Date and time"}</label>
                        <input type="datetime-local" class={INPUT_BASE} value={date_value}
                            oninput={on_field(Field::Date)} />
                    </div>
                    <div class="flex gap-6">
                        {stepper("Men", draft.max_male, on_male)}
                        {stepper("Women", draft.max_female, on_female)}
                    </div>
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL}>{"Description"}</label>
                        <textarea class={INPUT_BASE} rows="4" value={draft.description.clone()}
                            oninput={on_description} />
                    </div>
                    <button type="submit" class={button_primary(true)} disabled={*submitting}>
                        {if *submitting { "Registering..." } else { "Register event" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
