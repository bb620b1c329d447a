//! Clap derive structures for the `aoscx` CLI.
//!
//! One subcommand per fact category, plus profile management and shell
//! completions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use aoscx_core::ConfigRetrieval;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// aoscx -- vendor-neutral facts from Aruba AOS-CX switches
#[derive(Debug, Parser)]
#[command(
    name = "aoscx",
    version,
    about = "Gather vendor-neutral facts from Aruba AOS-CX switches",
    long_about = "Reads facts, interfaces, LLDP neighbors, environment, addressing\n\
        and configuration from an AOS-CX switch over its REST API and prints\n\
        them in a multi-vendor shape.",
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
    /// Switch profile to use
    #[arg(long, short = 'p', env = "AOSCX_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "AOSCX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Switch hostname or address (overrides profile)
    #[arg(long, short = 'H', env = "AOSCX_HOST", global = true)]
    pub host: Option<String>,

    /// Login user (overrides profile)
    #[arg(long, short = 'u', env = "AOSCX_USERNAME", global = true)]
    pub username: Option<String>,

    /// Login password (prompted when absent and not resolvable)
    #[arg(long, env = "AOSCX_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// REST API version, e.g. 1 or 10.09
    #[arg(long, env = "AOSCX_API_VERSION", global = true)]
    pub api_version: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "AOSCX_OUTPUT",
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

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "AOSCX_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "AOSCX_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
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
    /// Open and close a session, reporting whether login succeeded
    Check,

    /// Chassis facts: model, serial, OS version, uptime, interface list
    Facts,

    /// Interface state, speed, MTU and MAC address
    #[command(alias = "int")]
    Interfaces,

    /// Per-interface traffic and error counters
    Counters,

    /// IPv4 and IPv6 addresses per interface
    Ip,

    /// LLDP neighbors (brief, or detailed with --detail)
    Lldp(LldpArgs),

    /// Fans, temperature sensors, power supplies, CPU and memory
    #[command(alias = "env")]
    Environment,

    /// VLANs and their member interfaces
    Vlans,

    /// MAC address table across all VLANs
    #[command(alias = "mac-table")]
    Mac,

    /// Running and startup configuration text
    Config(ConfigArgs),

    /// Manage connection profiles
    Profiles(ProfilesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Subcommand Arguments ─────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LldpArgs {
    /// Show the full neighbor record instead of hostname and port
    #[arg(long, short = 'd')]
    pub detail: bool,

    /// Restrict detail to one local interface, e.g. 1/1/1
    #[arg(requires = "detail")]
    pub interface: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Which configuration to fetch: running, startup, candidate or all
    #[arg(long, short = 'r', default_value = "all")]
    pub retrieve: ConfigRetrieval,
}

#[derive(Debug, Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    pub command: ProfilesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfilesCommand {
    /// List configured profiles (default marked with *)
    List,

    /// Store a profile's password in the system keyring
    SetPassword {
        /// Profile name (defaults to the active profile)
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
