//! Clap derive structures for the `unboxing` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Each resource group mirrors one back-office screen; its subcommands
//! are the forms and buttons on that screen.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unboxing -- back-office operations from the command line
#[derive(Debug, Parser)]
#[command(
    name = "unboxing",
    version,
    about = "Manage Unboxing back-office records from the command line",
    long_about = "Customers, billing, payroll and user accounts of an Unboxing back-office\n\
        deployment. Sign in once with `unboxing login`; the token is kept in the\n\
        system keyring per profile.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "UNBOXING_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, short = 'u', env = "UNBOXING_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token for this run only (the keyring is left untouched)
    #[arg(long, env = "UNBOXING_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "UNBOXING_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "UNBOXING_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the token for this profile
    Login(LoginArgs),

    /// Register an administrator account
    Register(RegisterArgs),

    /// Forget the stored token
    Logout,

    /// Check that a token is stored and list the sections
    Dashboard,

    /// Manage customers
    #[command(alias = "cust", alias = "c")]
    Customers(CustomersArgs),

    /// Manage billing records
    #[command(alias = "bill", alias = "b")]
    Billing(BillingArgs),

    /// Manage payroll records
    #[command(alias = "pay")]
    Payroll(PayrollArgs),

    /// Manage user accounts
    #[command(alias = "u")]
    Users(UsersArgs),

    /// Query the API health endpoint
    Health,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email (defaults to the profile's email, else prompts)
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Account password (prompts when omitted)
    #[arg(long, env = "UNBOXING_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long, required = true)]
    pub name: String,

    /// Account email
    #[arg(long, required = true)]
    pub email: String,

    /// Account password (prompts when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Registration secret issued by the deployment
    #[arg(long)]
    pub secret_key: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CUSTOMERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List customers
    #[command(alias = "ls")]
    List,

    /// Add a customer
    Add {
        #[arg(long, required = true)]
        name: String,

        #[arg(long, required = true)]
        email: String,

        #[arg(long, required = true)]
        phone: String,

        #[arg(long)]
        address: Option<String>,
    },

    /// Update fields of a customer
    Update {
        /// Customer ID
        #[arg(long, required = true)]
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete {
        /// Customer ID
        #[arg(long, required = true)]
        id: i64,
    },

    /// Show one customer
    #[command(alias = "get")]
    Show {
        /// Customer ID
        #[arg(long, required = true)]
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BILLING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BillingArgs {
    #[command(subcommand)]
    pub command: BillingCommand,
}

#[derive(Debug, Subcommand)]
pub enum BillingCommand {
    /// List billing records
    #[command(alias = "ls")]
    List,

    /// Add a billing record
    Add {
        /// Customer the bill belongs to
        #[arg(long, required = true)]
        customer_id: i64,

        #[arg(long, required = true)]
        amount: f64,

        /// Billing date (YYYY-MM-DD)
        #[arg(long, required = true)]
        date: NaiveDate,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PAYROLL
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PayrollArgs {
    #[command(subcommand)]
    pub command: PayrollCommand,
}

#[derive(Debug, Subcommand)]
pub enum PayrollCommand {
    /// List payroll records
    #[command(alias = "ls")]
    List,

    /// Add a payroll record
    Add {
        #[arg(long, required = true)]
        employee_id: i64,

        #[arg(long, required = true)]
        amount: f64,

        /// Pay date (YYYY-MM-DD)
        #[arg(long, required = true)]
        date: NaiveDate,
    },

    /// Delete a payroll record (asks for confirmation)
    #[command(alias = "rm")]
    Delete {
        /// Payroll ID
        #[arg(long, required = true)]
        id: i64,
    },

    /// Edit a payroll record; without field flags, prints how to
    Edit {
        /// Payroll ID
        #[arg(long, required = true)]
        id: i64,

        #[arg(long)]
        employee_id: Option<i64>,

        #[arg(long)]
        amount: Option<f64>,

        /// Pay date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List user accounts
    #[command(alias = "ls")]
    List,

    /// Create a user account
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long, required = true)]
        email: String,

        /// Initial password (prompts when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Role, e.g. Admin or HR
        #[arg(long, required = true)]
        role: String,
    },

    /// Show one user account
    #[command(alias = "get")]
    Show {
        /// User ID
        #[arg(long, required = true)]
        id: i64,
    },

    /// Update fields of a user account
    Update(UserUpdateArgs),

    /// Delete a user account (asks for confirmation)
    #[command(alias = "rm")]
    Delete {
        /// User ID
        #[arg(long, required = true)]
        id: i64,
    },

    /// Load a user into the edit form; with field flags, save the edit
    Edit(UserUpdateArgs),
}

#[derive(Debug, Args)]
pub struct UserUpdateArgs {
    /// User ID
    #[arg(long, required = true)]
    pub id: i64,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub role: Option<String>,
}

impl UserUpdateArgs {
    pub fn has_changes(&self) -> bool {
        self.email.is_some() || self.password.is_some() || self.role.is_some()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
