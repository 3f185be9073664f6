use yew::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::warn;
use shared::*;
use crate::{api, placeholder, styles::*};
use crate::config::CONFIG;
use crate::event_detail::render_alert;
use crate::tasks::spawn_scoped;

const ALERT_DISMISS_MS: u32 = 4_000;
const COLLAPSED_OPTIONS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub event_id: EventId,
    pub host_id: UserId,
    pub viewer: Viewer,
    /// Bumped by the parent to request a re-fetch, e.g. after a vote is created.
    #[prop_or_default]
    pub refresh: u32,
}

pub struct VoteSectionView {
    section: VoteSection,
    tasks: TaskScope,
    dismiss: Option<Timeout>,
}

impl Component for VoteSectionView {
    type Message = Action;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let (section, command) = VoteSection::new(props.event_id, props.host_id, props.viewer);
        let mut view = Self {
            section,
            tasks: TaskScope::new(),
            dismiss: None,
        };
        view.run(ctx, command);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, action: Self::Message) -> bool {
        let previous = self.section.alert().cloned();
        if let Some(command) = self.section.apply(action) {
            self.run(ctx, command);
        }
        if self.section.alert() != previous.as_ref() {
            self.schedule_dismiss(ctx);
        }
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.event_id != old_props.event_id || props.host_id != old_props.host_id {
            self.tasks.cancel();
            self.tasks = TaskScope::new();
            self.dismiss = None;
            let (section, command) = VoteSection::new(props.event_id, props.host_id, props.viewer);
            self.section = section;
            self.run(ctx, command);
            return true;
        }
        if props.viewer != old_props.viewer {
            self.section.apply(Action::ViewerChanged(props.viewer));
        }
        if props.refresh != old_props.refresh {
            if let Some(command) = self.section.apply(Action::Refresh) {
                self.run(ctx, command);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let votes = self.section.votes();
        let body = if votes.is_empty() && self.section.is_loading() {
            html! { <div class={LOADING}>{"Loading votes..."}</div> }
        } else if votes.is_empty() {
            html! { <p class={combine_classes(TEXT_MUTED, "text-center")}>{"No votes have been created yet."}</p> }
        } else {
            votes.iter().enumerate()
                .map(|(i, vote)| self.render_vote(ctx, vote, CARD_TINTS[i % CARD_TINTS.len()]))
                .collect::<Html>()
        };

        let on_refresh = ctx.link().callback(|_| Action::Refresh);

        html! {
            <div class={SPACE_Y_BASE}>
                <div class={FLEX_BETWEEN}>
                    <h2 class={HEADING_MD}>{"Votes"}</h2>
                    <button type="button" class={combine_classes(BUTTON_BASE, BUTTON_SECONDARY)}
                        disabled={self.section.is_loading()} onclick={on_refresh}>
                        {"Refresh"}
                    </button>
                </div>
                {render_alert(&self.section.alert().cloned())}
                {if !self.section.viewer().is_participant {
                    html! { <p class={TEXT_MUTED}>{"Join the event to take part in its votes."}</p> }
                } else { html! {} }}
                {body}
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.tasks.cancel();
        self.dismiss = None;
    }
}

impl VoteSectionView {
    fn run(&mut self, ctx: &Context<Self>, command: Command) {
        match command {
            Command::FetchVotes { host_id, event_id } => {
                spawn_scoped(ctx.link(), &mut self.tasks, async move {
                    match api::votes(host_id, event_id).await {
                        Err(e) if CONFIG.placeholder_fallback => {
                            warn!(event_id, error = %e, "votes unavailable, showing placeholder data");
                            Action::VotesLoaded(Ok(placeholder::votes()))
                        }
                        result => Action::VotesLoaded(result),
                    }
                });
            }
            Command::CastVote(request) => {
                spawn_scoped(ctx.link(), &mut self.tasks, async move {
                    Action::CastCompleted {
                        vote_id: request.vote_id,
                        result: api::cast_vote(request).await,
                    }
                });
            }
        }
    }

    fn schedule_dismiss(&mut self, ctx: &Context<Self>) {
        self.dismiss = self.section.alert().map(|_| {
            let link = ctx.link().clone();
            Timeout::new(ALERT_DISMISS_MS, move || link.send_message(Action::DismissAlert))
        });
    }

    fn render_vote(&self, ctx: &Context<Self>, vote: &Vote, tint: &'static str) -> Html {
        let Some(state) = self.section.state_of(vote.id) else {
            return html! {};
        };
        let selectable = matches!(state, VoteState::Selectable | VoteState::Submitting);
        let expanded = self.section.is_expanded(vote.id);
        let shown = if expanded { vote.options.len() } else { vote.options.len().min(COLLAPSED_OPTIONS) };

        let options = vote.options.iter().take(shown).map(|option| {
            if selectable {
                self.render_choice(ctx, vote, option, state == VoteState::Submitting)
            } else {
                render_result(vote, option)
            }
        }).collect::<Html>();

        let vote_id = vote.id;
        let toggle = if vote.options.len() > COLLAPSED_OPTIONS {
            html! {
                <button type="button" class="text-sm text-pink-500 hover:underline"
                    onclick={ctx.link().callback(move |_| Action::ToggleExpanded(vote_id))}>
                    {if expanded { "Show less".to_string() } else { format!("Show all {} options", vote.options.len()) }}
                </button>
            }
        } else { html! {} };

        html! {
            <div key={vote.id} class={combine_classes(tint, "border border-gray-200 rounded-2xl shadow-sm p-5 space-y-3")}>
                <div class={FLEX_BETWEEN}>
                    <h3 class={HEADING_SM}>{&vote.title}</h3>
                    {state_badge(state)}
                </div>
                <p class={TEXT_MUTED}>{format!("{} votes", vote.total_votes)}</p>
                <div class={SPACE_Y_BASE}>{options}</div>
                {toggle}
                {if selectable { self.render_cast(ctx, vote, state) } else { html! {} }}
            </div>
        }
    }

    fn render_choice(&self, ctx: &Context<Self>, vote: &Vote, option: &VoteOption, submitting: bool) -> Html {
        let (vote_id, option_id) = (vote.id, option.id);
        let selected = self.section.selection().is_selected(vote_id, option_id);
        let class = if selected {
            "w-full text-left px-4 py-2 rounded-lg border-2 border-pink-500 bg-pink-100 font-semibold text-gray-800"
        } else {
            "w-full text-left px-4 py-2 rounded-lg border border-gray-300 bg-white hover:border-pink-300 text-gray-700"
        };
        html! {
            <button type="button" {class} disabled={submitting}
                onclick={ctx.link().callback(move |_| Action::Select { vote_id, option_id })}>
                {&option.text}
            </button>
        }
    }

    fn render_cast(&self, ctx: &Context<Self>, vote: &Vote, state: VoteState) -> Html {
        let vote_id = vote.id;
        let submitting = state == VoteState::Submitting;
        let nothing_selected = self.section.selection().current(vote_id).is_none();
        html! {
            <button type="button" class={button_primary(true)}
                disabled={submitting || self.section.is_submitting() || nothing_selected}
                onclick={ctx.link().callback(move |_| Action::Cast(vote_id))}>
                {if submitting { "Submitting..." } else { "Vote" }}
            </button>
        }
    }
}

fn render_result(vote: &Vote, option: &VoteOption) -> Html {
    let mine = vote.selected_option_id() == Some(option.id);
    html! {
        <div class={CARD_SECTION}>
            <div class={FLEX_BETWEEN}>
                <span class={if mine { "font-semibold text-pink-600" } else { "text-gray-700" }}>
                    {&option.text}
                    {if mine { html! { <span class="ml-2 text-xs">{"(your vote)"}</span> } } else { html! {} }}
                </span>
                <span class={TEXT_MUTED}>{format!("{} · {}%", option.count, option.percentage)}</span>
            </div>
            <div class={PROGRESS_TRACK}>
                <div class="h-full bg-pink-400 rounded" style={format!("width: {}%", option.percentage)}></div>
            </div>
        </div>
    }
}

fn state_badge(state: VoteState) -> Html {
    let (color, label) = match state {
        VoteState::Loading => ("bg-gray-400", "Updating"),
        VoteState::ResultsOnly => ("bg-blue-400", "Results"),
        VoteState::Selectable => ("bg-green-500", "Open"),
        VoteState::Submitting => ("bg-yellow-500", "Submitting"),
        VoteState::AlreadyVoted => ("bg-pink-400", "Voted"),
        VoteState::Closed => ("bg-gray-500", "Closed"),
    };
    html! { <span class={badge(color)}>{label}</span> }
}
