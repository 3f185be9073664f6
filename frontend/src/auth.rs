use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use tracing::{info, warn};
use shared::*;
use crate::{Route, api, styles::*};
use crate::session::{use_session, SessionAction};
use crate::event_detail::render_alert;
use crate::tasks::{spawn_in, spawn_scoped, use_task_scope};

fn text_input(label: &str, kind: &'static str, value: &str, error: Option<&ValidationError>, oninput: Callback<InputEvent>) -> Html {
    html! {
        <div class={INPUT_GROUP}>
            <label class={TEXT_LABEL}>{label}</label>
            <input type={kind} class={INPUT_BASE} value={value.to_string()} {oninput} />
            {if let Some(error) = error {
                html! { <p class={TEXT_ERROR}>{error.to_string()}</p> }
            } else { html! {} }}
        </div>
    }
}

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(e.target_unchecked_into::<HtmlInputElement>().value());
    })
}

#[function_component]
pub fn Login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let session = use_session();
    let navigator = use_navigator();
    let scope = use_task_scope();

    let onsubmit = {
        let (email, password) = (email.clone(), password.clone());
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match validate_login(&email, &password) {
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
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_in(&scope, async move {
                let result = match api::login(&request).await {
                    Ok(_) => api::users().await,
                    Err(e) => Err(e),
                };
                submitting.set(false);
                match result {
                    Ok(users) => {
                        match users.iter().find(|u| u.email == request.email) {
                            Some(user) => {
                                info!(user_id = user.id, "logged in");
                                session.dispatch(SessionAction::Select(user.id));
                            }
                            None => warn!(email = %request.email, "logged in but no matching user"),
                        }
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "login failed");
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class={CONTAINER_SM}>
            <div class={CARD}>
                <h1 class={HEADING_LG}>{"Log in"}</h1>
                {if let Some(error) = &*error {
                    html! { <div class={alert_style("error")}>{error}</div> }
                } else { html! {} }}
                <form {onsubmit} class={SPACE_Y_LG}>
                    {text_input("Email", "email", &email, None, bind(&email))}
                    {text_input("Password", "password", &password, None, bind(&password))}
                    <button type="submit" class={button_primary(true)} disabled={*submitting}>
                        {if *submitting { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <div class="flex justify-between mt-4 text-sm">
                    <Link<Route> to={Route::FindId} classes="text-pink-500 hover:underline">{"Find my id"}</Link<Route>>
                    <Link<Route> to={Route::Signup} classes="text-pink-500 hover:underline">{"Sign up"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

pub struct Signup {
    form: SignupForm,
    errors: SignupErrors,
    server_error: Option<String>,
    submitting: bool,
    tasks: TaskScope,
}

pub enum SignupMsg {
    Name(String),
    Email(String),
    Phone(String),
    Password(String),
    Confirm(String),
    Submit,
    Done(Result<User>),
}

impl Component for Signup {
    type Message = SignupMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: SignupForm::default(),
            errors: SignupErrors::default(),
            server_error: None,
            submitting: false,
            tasks: TaskScope::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SignupMsg::Name(v) => self.form.name = v,
            SignupMsg::Email(v) => self.form.email = v,
            SignupMsg::Phone(v) => self.form.phone = v,
            SignupMsg::Password(v) => self.form.password = v,
            SignupMsg::Confirm(v) => self.form.confirm_password = v,
            SignupMsg::Submit => {
                if self.submitting {
                    return false;
                }
                match self.form.validate() {
                    Ok(request) => {
                        self.errors = SignupErrors::default();
                        self.server_error = None;
                        self.submitting = true;
                        spawn_scoped(ctx.link(), &mut self.tasks, async move {
                            SignupMsg::Done(api::register(&request).await)
                        });
                    }
                    Err(errors) => self.errors = errors,
                }
            }
            SignupMsg::Done(result) => {
                self.submitting = false;
                match result {
                    Ok(user) => {
                        info!(user_id = user.id, "account created");
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::SignupComplete);
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, code = ?e.code(), "signup failed");
                        match SignupErrors::from_api_error(&e) {
                            Some(errors) => self.errors = errors,
                            None => self.server_error = Some(e.to_string()),
                        }
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input = |f: fn(String) -> SignupMsg| link.callback(move |e: InputEvent| {
            f(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            SignupMsg::Submit
        });

        html! {
            <div class={CONTAINER_SM}>
                <div class={CARD}>
                    <h1 class={HEADING_LG}>{"Sign up"}</h1>
                    {if let Some(error) = &self.server_error {
                        html! { <div class={alert_style("error")}>{error}</div> }
                    } else { html! {} }}
                    <form {onsubmit} class={SPACE_Y_LG}>
                        {text_input("Name", "text", &self.form.name, self.errors.name.as_ref(), input(SignupMsg::Name))}
                        {text_input("Email", "email", &self.form.email, self.errors.email.as_ref(), input(SignupMsg::Email))}
                        {text_input("Phone", "tel", &self.form.phone, self.errors.phone.as_ref(), input(SignupMsg::Phone))}
                        {text_input("Password", "password", &self.form.password, self.errors.password.as_ref(), input(SignupMsg::Password))}
                        {text_input("Confirm password", "password", &self.form.confirm_password, self.errors.confirm_password.as_ref(), input(SignupMsg::Confirm))}
                        <button type="submit" class={button_primary(true)} disabled={self.submitting}>
                            {if self.submitting { "Creating account..." } else { "Create account" }}
                        </button>
                    </form>
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.tasks.cancel();
    }
}

#[function_component]
pub fn SignupComplete() -> Html {
    html! {
        <div class={CONTAINER_SM}>
            <div class={combine_classes(CARD, "text-center space-y-4")}>
                <h1 class={HEADING_LG}>{"Welcome to GrewMeet!"}</h1>
                <p class="text-gray-600">{"Your account is ready. Log in to start joining events."}</p>
                <Link<Route> to={Route::Login} classes={classes!(button_primary(false))}>{"Log in"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component]
pub fn FindId() -> Html {
    let email = use_state(String::new);
    let alert = use_state(|| None::<Alert>);
    let scope = use_task_scope();

    let onsubmit = {
        let email = email.clone();
        let alert = alert.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match validate_find_email(&email) {
                Ok(request) => request,
                Err(e) => {
                    alert.set(Some(Alert::Error(e.to_string())));
                    return;
                }
            };
            let alert = alert.clone();
            spawn_in(&scope, async move {
                match api::find_email(&request).await {
                    Ok(response) => {
                        let message = response.message
                            .unwrap_or_else(|| format!("An account is registered with {}.", request.email));
                        alert.set(Some(Alert::Success(message)));
                    }
                    Err(e) => alert.set(Some(Alert::Error(e.to_string()))),
                }
            });
        })
    };

    html! {
        <div class={CONTAINER_SM}>
            <div class={CARD}>
                <h1 class={HEADING_LG}>{"Find my id"}</h1>
                {render_alert(&alert)}
                <form {onsubmit} class={SPACE_Y_LG}>
                    {text_input("Email", "email", &email, None, bind(&email))}
                    <button type="submit" class={button_primary(true)}>{"Check"}</button>
                </form>
            </div>
        </div>
    }
}
