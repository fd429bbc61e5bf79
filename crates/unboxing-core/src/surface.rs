// Rendering surface
//
// Views never touch a terminal or document directly. Everything they show,
// hide, fill or ask goes through `Surface`, addressed by element ids
// ("addBillingMessage", "payrollList", ...). A CLI renders to stdout and
// stderr; tests record the calls.

use std::fmt;

use crate::form::FormData;

/// Message styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// Navigation targets between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    /// Payroll edit screen, carrying the record id.
    EditPayroll { id: String },
}

impl Route {
    /// Path with query string, e.g. `edit_payroll.html?id=7`.
    pub fn path(&self) -> String {
        match self {
            Self::Login => "login.html".into(),
            Self::Register => "register.html".into(),
            Self::Dashboard => "dashboard.html".into(),
            Self::EditPayroll { id } => format!("edit_payroll.html?id={id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Record id, as carried by the row's action buttons.
    pub id: String,
    /// Formatted cells, one per column.
    pub cells: Vec<String>,
    /// The record as received.
    pub record: serde_json::Value,
}

/// A rendered list: header plus rows in the order the server sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<&'static str>,
    /// Labels of the per-row action buttons, e.g. `["Edit", "Delete"]`.
    pub actions: Vec<&'static str>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn records(&self) -> Vec<&serde_json::Value> {
        self.rows.iter().map(|row| &row.record).collect()
    }
}

/// A single record shown as labelled fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub title: &'static str,
    pub fields: Vec<(&'static str, String)>,
    pub record: serde_json::Value,
}

/// Capability interface the views render through.
pub trait Surface: Send {
    /// Show `text` in the message area `target`.
    fn show_message(&mut self, target: &str, tone: Tone, text: &str);
    fn hide_message(&mut self, target: &str);

    /// Clear every input of `form`.
    fn reset_form(&mut self, form: &str);
    /// Populate inputs of `form` from `values`.
    fn fill_form(&mut self, form: &str, values: &FormData);

    /// Show or hide a page section.
    fn set_visible(&mut self, section: &str, visible: bool);

    /// Replace the content of `target` with a table.
    fn render_table(&mut self, target: &str, table: &Table);
    /// Replace the content of `target` with a record, or clear it.
    fn render_detail(&mut self, target: &str, detail: Option<&Detail>);
    /// Replace the content of `target` with a short notice
    /// ("Loading...", "No customers found.", "Error loading users").
    fn render_placeholder(&mut self, target: &str, tone: Tone, text: &str);

    fn navigate(&mut self, route: &Route);

    /// Ask the user to approve a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
}
