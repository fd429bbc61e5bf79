// Page: explicit handler registration and trigger routing
//
// A page owns its views. Handlers are registered by element id with
// `on_submit` / `on_click`; lists are registered with `with_list` and
// answer both `Load` and their own row buttons.

use tracing::{debug, info};

use crate::context::AppContext;
use crate::form::FormData;
use crate::surface::{Route, Surface, Tone};
use crate::view::{CancelFlow, DetailView, Dispatch, FormView, ListView, ViewState};

/// A user interaction delivered to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The page was opened.
    Load,
    Submit { form: String, input: FormData },
    Click { control: String },
    RowAction {
        list: String,
        action: String,
        id: String,
    },
}

/// Handler of a form submit.
#[derive(Debug, Clone)]
pub enum SubmitHandler {
    Form(FormView),
    Detail(DetailView),
}

impl From<FormView> for SubmitHandler {
    fn from(view: FormView) -> Self {
        Self::Form(view)
    }
}

impl From<DetailView> for SubmitHandler {
    fn from(view: DetailView) -> Self {
        Self::Detail(view)
    }
}

/// Handler of a button click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Re-fetch the list rendered into the given target.
    Refresh(&'static str),
    Cancel(CancelFlow),
    /// Forget the credential and go to login. A store that cannot be
    /// cleared is reported in the message area.
    Logout { message: &'static str },
}

pub struct Page {
    name: &'static str,
    guarded: bool,
    submits: Vec<(&'static str, SubmitHandler)>,
    clicks: Vec<(&'static str, ClickAction)>,
    lists: Vec<ListView>,
}

impl Page {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            guarded: false,
            submits: Vec::new(),
            clicks: Vec::new(),
            lists: Vec::new(),
        }
    }

    /// Send visitors without a credential to login on `Load`.
    pub fn guarded(mut self) -> Self {
        self.guarded = true;
        self
    }

    pub fn on_submit(mut self, form: &'static str, handler: impl Into<SubmitHandler>) -> Self {
        self.submits.push((form, handler.into()));
        self
    }

    pub fn on_click(mut self, control: &'static str, action: ClickAction) -> Self {
        self.clicks.push((control, action));
        self
    }

    pub fn with_list(mut self, list: ListView) -> Self {
        self.lists.push(list);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_guarded(&self) -> bool {
        self.guarded
    }

    pub fn list(&self, target: &str) -> Option<&ListView> {
        self.lists.iter().find(|l| l.target() == target)
    }

    pub fn handler(&self, form: &str) -> Option<&SubmitHandler> {
        self.submits
            .iter()
            .find(|(id, _)| *id == form)
            .map(|(_, handler)| handler)
    }

    /// Route one trigger to its handler and run it to completion.
    pub async fn dispatch(
        &mut self,
        ctx: &mut AppContext,
        surface: &mut dyn Surface,
        trigger: Trigger,
    ) -> Dispatch {
        debug!(page = self.name, ?trigger, "dispatch");
        match trigger {
            Trigger::Load => self.load(ctx, surface).await,
            Trigger::Submit { form, input } => self.submit(ctx, surface, &form, &input).await,
            Trigger::Click { control } => self.click(ctx, surface, &control).await,
            Trigger::RowAction { list, action, id } => {
                match self.lists.iter_mut().find(|l| l.target() == list) {
                    Some(view) => view.row_action(ctx, surface, &action, &id).await,
                    None => Dispatch::Unhandled,
                }
            }
        }
    }

    async fn load(&mut self, ctx: &AppContext, surface: &mut dyn Surface) -> Dispatch {
        if self.guarded && !ctx.session.is_authenticated() {
            info!(page = self.name, "no credential, redirecting to login");
            surface.navigate(&Route::Login);
            return Dispatch::Unauthenticated;
        }

        let mut state = ViewState::Idle;
        for list in &mut self.lists {
            state = merge(state, list.load(ctx, surface).await);
        }
        Dispatch::Completed(state)
    }

    async fn submit(
        &mut self,
        ctx: &mut AppContext,
        surface: &mut dyn Surface,
        form: &str,
        input: &FormData,
    ) -> Dispatch {
        let Some((_, handler)) = self.submits.iter_mut().find(|(id, _)| *id == form) else {
            return Dispatch::Unhandled;
        };

        match handler {
            SubmitHandler::Detail(view) => Dispatch::Completed(view.show(ctx, surface, input).await),
            SubmitHandler::Form(view) => {
                let submission = view.submit(form, ctx, surface, input).await;
                let mut state = submission.state;
                for target in submission.refresh {
                    if let Some(list) = self.lists.iter_mut().find(|l| l.target() == target) {
                        state = merge(state, list.load(ctx, surface).await);
                    }
                }
                Dispatch::Completed(state)
            }
        }
    }

    async fn click(&mut self, ctx: &mut AppContext, surface: &mut dyn Surface, control: &str) -> Dispatch {
        let Some(action) = self
            .clicks
            .iter()
            .find(|(id, _)| *id == control)
            .map(|(_, action)| *action)
        else {
            return Dispatch::Unhandled;
        };

        match action {
            ClickAction::Refresh(target) => match self.lists.iter_mut().find(|l| l.target() == target) {
                Some(list) => Dispatch::Completed(list.load(ctx, surface).await),
                None => Dispatch::Unhandled,
            },
            ClickAction::Cancel(flow) => {
                flow.run(surface);
                Dispatch::Completed(ViewState::Idle)
            }
            ClickAction::Logout { message } => {
                if let Err(e) = ctx.sign_out() {
                    surface.show_message(message, Tone::Error, &format!("Sign-out failed: {e}"));
                    return Dispatch::Completed(ViewState::ErrorShown);
                }
                surface.navigate(&Route::Login);
                Dispatch::Completed(ViewState::Idle)
            }
        }
    }
}

/// Combine the states of several views: any error wins.
fn merge(current: ViewState, next: ViewState) -> ViewState {
    match (current, next) {
        (ViewState::ErrorShown, _) | (_, ViewState::ErrorShown) => ViewState::ErrorShown,
        (_, next) => next,
    }
}
