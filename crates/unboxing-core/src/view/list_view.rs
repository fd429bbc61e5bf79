// List-fetch flow

use tracing::{debug, error};
use unboxing_api::models::listing;
use unboxing_api::{Body, Method, RequestOutcome, ResourceDescriptor};

use super::row_action::RowEffect;
use super::{Dispatch, RowAction, ViewState};
use crate::context::AppContext;
use crate::format::{self, Column};
use crate::surface::{Row, Surface, Table, Tone};

const LOADING: &str = "Loading...";

/// Fetches a collection and renders it as a table into `target`.
#[derive(Debug, Clone)]
pub struct ListView {
    target: &'static str,
    message: &'static str,
    descriptor: &'static ResourceDescriptor,
    envelope: Option<&'static str>,
    columns: &'static [Column],
    actions: Vec<(&'static str, RowAction)>,
    empty: &'static str,
    failed: &'static str,
    state: ViewState,
}

impl ListView {
    pub fn new(
        target: &'static str,
        descriptor: &'static ResourceDescriptor,
        columns: &'static [Column],
    ) -> Self {
        Self {
            target,
            message: target,
            descriptor,
            envelope: None,
            columns,
            actions: Vec::new(),
            empty: "No records found.",
            failed: "Error loading records",
            state: ViewState::Idle,
        }
    }

    /// Accept `{"<key>": [...]}` as well as a bare array.
    pub fn envelope(mut self, key: &'static str) -> Self {
        self.envelope = Some(key);
        self
    }

    pub fn empty(mut self, text: &'static str) -> Self {
        self.empty = text;
        self
    }

    pub fn failed(mut self, text: &'static str) -> Self {
        self.failed = text;
        self
    }

    /// Message area row actions report into.
    pub fn messages_to(mut self, target: &'static str) -> Self {
        self.message = target;
        self
    }

    pub fn action(mut self, label: &'static str, action: RowAction) -> Self {
        self.actions.push((label, action));
        self
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Fetch and render, replacing whatever `target` showed before.
    pub async fn load(&mut self, ctx: &AppContext, surface: &mut dyn Surface) -> ViewState {
        self.state = ViewState::Loading;
        surface.render_placeholder(self.target, Tone::Info, LOADING);

        let outcome = ctx
            .client
            .perform(&ctx.session, self.descriptor, Method::Get, None, None)
            .await;

        let records = match outcome {
            RequestOutcome::Success(Body::Json(value)) => listing(value, self.envelope),
            RequestOutcome::Success(Body::Empty) => Some(Vec::new()),
            RequestOutcome::Success(Body::Text(_)) => None,
            RequestOutcome::HttpError { status, .. } => {
                debug!(status, list = self.target, "list fetch rejected");
                None
            }
            RequestOutcome::TransportError { kind, reason } => {
                error!(?kind, %reason, list = self.target, "list fetch failed");
                None
            }
        };

        self.state = match records {
            None => {
                surface.render_placeholder(self.target, Tone::Error, self.failed);
                ViewState::ErrorShown
            }
            Some(records) if records.is_empty() => {
                surface.render_placeholder(self.target, Tone::Info, self.empty);
                ViewState::Rendered
            }
            Some(records) => {
                let table = self.tabulate(records);
                surface.render_table(self.target, &table);
                ViewState::Rendered
            }
        };
        self.state
    }

    /// Run the row button `label` for the record `id`.
    pub async fn row_action(
        &mut self,
        ctx: &AppContext,
        surface: &mut dyn Surface,
        label: &str,
        id: &str,
    ) -> Dispatch {
        let Some(action) = self
            .actions
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
            .map(|(_, action)| *action)
        else {
            return Dispatch::Unhandled;
        };

        match action.run(ctx, surface, self.message, id).await {
            RowEffect::Cancelled => Dispatch::Cancelled,
            RowEffect::Reload => Dispatch::Completed(self.load(ctx, surface).await),
            RowEffect::Settled(state) => Dispatch::Completed(state),
        }
    }

    fn tabulate(&self, records: Vec<serde_json::Value>) -> Table {
        let rows = records
            .into_iter()
            .map(|record| Row {
                id: record.get("id").map(format::text).unwrap_or_default(),
                cells: self.columns.iter().map(|c| c.render(&record)).collect(),
                record,
            })
            .collect();
        Table {
            columns: self.columns.iter().map(|c| c.header).collect(),
            actions: self.actions.iter().map(|(label, _)| *label).collect(),
            rows,
        }
    }
}
