use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod config;
mod dating_event;
mod event_detail;
mod event_list;
mod event_register;
mod home;
mod logging;
mod my_events;
mod placeholder;
mod session;
mod styles;
mod tasks;
mod vote_create;
mod vote_section;

use crate::{
    auth::{FindId, Login, Signup, SignupComplete},
    dating_event::DatingEventDetail,
    event_detail::EventDetail,
    event_list::EventList,
    event_register::EventRegister,
    home::Home,
    my_events::MyEvents,
    session::{SessionContext, SessionState},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/events")] Events,
    #[at("/events/new")] EventRegister,
    #[at("/events/:id")] Event { id: i64 },
    #[at("/events/:id/votes")] EventVotes { id: i64 },
    #[at("/my-events")] MyEvents,
    #[at("/login")] Login,
    #[at("/signup")] Signup,
    #[at("/signup/complete")] SignupComplete,
    #[at("/find-id")] FindId,
    #[not_found]
    #[at("/404")] NotFound,
}

fn nav_link(route: Route, label: &'static str, current: &Option<Route>) -> Html {
    let active = current.as_ref() == Some(&route);
    html! {
        <Link<Route> to={route} classes={classes!(
            "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
            "transition-colors", "duration-200", "ease-in-out",
            "text-gray-700", "border", "border-transparent", "hover:border-pink-400", "hover:text-pink-500",
            if active {
                "text-pink-500 border-pink-400 ring-2 ring-pink-300 ring-offset-1"
            } else {
                ""
            }
        )}>
            {label}
        </Link<Route>>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();
    let session = session::use_session();

    html! {
        <nav class="bg-white shadow-md fixed top-0 w-full z-50">
            <div class="container mx-auto px-6 py-4 flex justify-center items-center space-x-6">
                {nav_link(Route::Home, "Home", &current_route)}
                {nav_link(Route::Events, "Events", &current_route)}
                {nav_link(Route::MyEvents, "My Events", &current_route)}
                {if session.0.is_host() {
                    nav_link(Route::EventRegister, "New Event", &current_route)
                } else { html! {} }}
                {match session.0.user() {
                    Some(user) => html! {
                        <span class={styles::badge("bg-pink-400")}>{user.name}</span>
                    },
                    None => nav_link(Route::Login, "Login", &current_route),
                }}
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionContext> context={session}>
            <BrowserRouter>
                <div class="min-h-screen bg-pink-50">
                    <Navigation />
                    <div class="pt-16">
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </BrowserRouter>
        </ContextProvider<SessionContext>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Events => html! { <EventList /> },
        Route::EventRegister => html! { <EventRegister /> },
        Route::Event { id } => html! { <EventDetail {id} /> },
        Route::EventVotes { id } => html! { <DatingEventDetail {id} /> },
        Route::MyEvents => html! { <MyEvents /> },
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::SignupComplete => html! { <SignupComplete /> },
        Route::FindId => html! { <FindId /> },
        Route::NotFound => html! {
            <div class={styles::CONTAINER}>
                <h1 class={styles::HEADING_LG}>{"Page not found"}</h1>
            </div>
        },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    logging::init();
    yew::Renderer::<App>::new().render();
}
