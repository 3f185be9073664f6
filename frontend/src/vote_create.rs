use web_sys::HtmlInputElement;
use yew::prelude::*;
use tracing::{info, warn};
use shared::*;
use crate::{api, styles::*};
use crate::tasks::spawn_scoped;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub host_id: UserId,
    pub event_id: EventId,
    pub on_created: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub enum Msg {
    UpdateTitle(String),
    UpdateOption(usize, String),
    AddOption,
    RemoveOption(usize),
    Submit,
    SubmitResult(Result<MessageResponse>),
    Cancel,
}

/// Host-only form that creates a vote for one event.
pub struct VoteCreate {
    draft: VoteDraft,
    error: Option<String>,
    submitting: bool,
    tasks: TaskScope,
}

impl Component for VoteCreate {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: VoteDraft::default(),
            error: None,
            submitting: false,
            tasks: TaskScope::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateTitle(title) => {
                self.draft.title = title;
                true
            }
            Msg::UpdateOption(index, value) => {
                self.draft.set_option(index, value);
                true
            }
            Msg::AddOption => self.draft.add_option(),
            Msg::RemoveOption(index) => self.draft.remove_option(index),
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let request = match self.draft.to_request() {
                    Ok(request) => request,
                    Err(e) => {
                        self.error = Some(e.to_string());
                        return true;
                    }
                };
                self.submitting = true;
                self.error = None;
                let (host_id, event_id) = (ctx.props().host_id, ctx.props().event_id);
                spawn_scoped(ctx.link(), &mut self.tasks, async move {
                    Msg::SubmitResult(api::create_vote(host_id, event_id, &request).await)
                });
                true
            }
            Msg::SubmitResult(result) => {
                self.submitting = false;
                match result {
                    Ok(_) => {
                        info!(event_id = ctx.props().event_id, "vote created");
                        self.draft.reset();
                        ctx.props().on_created.emit(());
                    }
                    Err(e) => {
                        warn!(error = %e, "vote creation failed");
                        self.error = Some(e.to_string());
                    }
                }
                true
            }
            Msg::Cancel => {
                ctx.props().on_cancel.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form {onsubmit} class={SPACE_Y_LG}>
                <h2 class={HEADING_MD}>{"Create a vote"}</h2>
                {if let Some(error) = &self.error {
                    html! { <p class={TEXT_ERROR}>{error}</p> }
                } else { html! {} }}
                {self.render_title(ctx)}
                {self.render_options(ctx)}
                <div class="flex gap-4">
                    <button type="submit" class={button_primary(false)} disabled={self.submitting}>
                        {if self.submitting { "Creating..." } else { "Create vote" }}
                    </button>
                    <button type="button" class={combine_classes(BUTTON_BASE, BUTTON_SECONDARY)}
                        onclick={ctx.link().callback(|_| Msg::Cancel)}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.tasks.cancel();
    }
}

impl VoteCreate {
    fn render_title(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateTitle(input.value())
        });

        html! {
            <div class={SPACE_Y_BASE}>
                <label class={TEXT_LABEL}>
                    {format!("Title ({}/{})", self.draft.title.chars().count(), MAX_TITLE_LENGTH)}
                </label>
                <input type="text" class={INPUT_BASE} value={self.draft.title.clone()}
                    maxlength={MAX_TITLE_LENGTH.to_string()} {oninput}
                    placeholder="What should we decide?" />
            </div>
        }
    }

    fn render_options(&self, ctx: &Context<Self>) -> Html {
        let options = self.draft.options();
        let can_remove = self.draft.can_remove_option();

        html! {
            <div class={SPACE_Y_BASE}>
                <div class={FLEX_BETWEEN}>
                    <label class={TEXT_LABEL}>{"Options"}</label>
                    <span class={TEXT_MUTED}>{format!("{}/{}", options.len(), MAX_OPTIONS)}</span>
                </div>
                {for options.iter().enumerate().map(|(index, value)| {
                    let oninput = ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateOption(index, input.value())
                    });
                    html! {
                        <div class="flex gap-2 items-center">
                            <input type="text" class={INPUT_BASE} value={value.clone()}
                                maxlength={MAX_OPTION_LENGTH.to_string()} {oninput}
                                placeholder={format!("Option {}", index + 1)} />
                            {if can_remove {
                                html! {
                                    <button type="button" class={combine_classes(BUTTON_BASE, BUTTON_DANGER)}
                                        onclick={ctx.link().callback(move |_| Msg::RemoveOption(index))}>
                                        {"✕"}
                                    </button>
                                }
                            } else { html! {} }}
                        </div>
                    }
                })}
                {if self.draft.can_add_option() {
                    html! {
                        <button type="button" class="text-sm text-pink-500 hover:underline"
                            onclick={ctx.link().callback(|_| Msg::AddOption)}>
                            {"+ Add option"}
                        </button>
                    }
                } else { html! {} }}
            </div>
        }
    }
}
