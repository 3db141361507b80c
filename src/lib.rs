//! slctl - List and inspect SoftLayer classic infrastructure resources
//!
//! A CLI tool that fetches account resources over the SoftLayer REST API and
//! presents them as aligned tables, CSV or JSON.
//!
//! # Features
//!
//! - List hardware, virtual servers, block and file volumes, subnets,
//!   security groups and users
//! - Choose columns with `--column` and order rows with `--sortby`
//! - Only the fields behind the displayed columns are fetched
//! - Detail views with nested tables for related objects
//!
//! # Example
//!
//! ```bash
//! # List virtual servers sorted by memory
//! slctl vs list --sortby memory
//!
//! # Pick columns and emit CSV
//! slctl block volume-list --column id,username,lunId -o csv
//!
//! # Show a subnet without its IP addresses
//! slctl subnet detail 1234 --no-ip
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod query;
pub mod softlayer;
pub mod ui;

pub use cli::{Cli, Command};
pub use error::{Result, SlError};
pub use output::{render, Cell, OutputFormat, Table};
pub use query::{build_mask, ColumnRegistry, ColumnSpec, ListPlan, ListQuery, SortKey};
pub use softlayer::{
    run_hardware_command, run_security_group_command, run_storage_command, run_subnet_command,
    run_user_command, run_vs_command, CredentialResolver, Credentials, SlClient, VolumeKind,
};
