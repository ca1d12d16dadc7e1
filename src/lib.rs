pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod paths;
pub mod remote;
pub mod types;

pub use config::Config;
pub use controller::{
    NotificationChannel, OperationOutcome, PendingOperationTracker, PortfolioView, ProjectForm,
    ProjectListController, SavedListController, filter_items,
};
pub use error::{CatalogError, Result};
pub use remote::http::HttpCollectionClient;
pub use remote::{Collection, CollectionClient, RemoteOperation};
pub use types::{NewProject, Project, ProjectField, ProjectId, SavedProject};
