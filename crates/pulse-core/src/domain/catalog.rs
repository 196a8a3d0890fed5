//! Endpoint catalog: URL -> human-readable task label.
//!
//! Table order matters: with a seeded random source, the same order yields
//! the same sample. That is why this is an ordered table and not a map.

use serde::{Deserialize, Serialize};

/// Built-in Microsoft Graph and Power BI endpoints.
pub const GRAPH_ENDPOINTS: &[(&str, &str)] = &[
    (
        "https://graph.microsoft.com/v1.0/me/drive/root",
        "Read OneDrive root folder",
    ),
    ("https://graph.microsoft.com/v1.0/me/drive", "Read OneDrive"),
    (
        "https://graph.microsoft.com/v1.0/drive/root",
        "Read default drive root",
    ),
    ("https://graph.microsoft.com/v1.0/users", "List users"),
    ("https://graph.microsoft.com/v1.0/me/messages", "List mail"),
    (
        "https://graph.microsoft.com/v1.0/me/mailFolders/inbox/messageRules",
        "List inbox message rules",
    ),
    (
        "https://graph.microsoft.com/v1.0/me/drive/root/children",
        "List OneDrive root children",
    ),
    (
        "https://api.powerbi.com/v1.0/myorg/apps",
        "List Power BI apps",
    ),
    (
        "https://graph.microsoft.com/v1.0/me/mailFolders",
        "List mail folders",
    ),
    (
        "https://graph.microsoft.com/v1.0/me/outlook/masterCategories",
        "List Outlook categories",
    ),
    (
        "https://graph.microsoft.com/v1.0/applications?$count=true",
        "Count applications",
    ),
    (
        "https://graph.microsoft.com/v1.0/me/?$select=displayName,skills",
        "Read profile display name and skills",
    ),
    (
        "https://graph.microsoft.com/v1.0/me/mailFolders/Inbox/messages/delta",
        "Track inbox changes",
    ),
    (
        "https://graph.microsoft.com/beta/me/outlook/masterCategories",
        "List Outlook categories (beta)",
    ),
    (
        "https://graph.microsoft.com/beta/me/messages?$select=internetMessageHeaders&$top=1",
        "Read latest message headers (beta)",
    ),
    (
        "https://graph.microsoft.com/v1.0/sites/root/lists",
        "List SharePoint root site lists",
    ),
    (
        "https://graph.microsoft.com/v1.0/sites/root",
        "Read SharePoint root site",
    ),
    (
        "https://graph.microsoft.com/v1.0/sites/root/drives",
        "List SharePoint root site drives",
    ),
];

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub url: String,
    pub task: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            task: task.into(),
        }
    }
}

/// Read-only, ordered set of endpoints the runner samples from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCatalog {
    entries: Vec<Endpoint>,
}

impl EndpointCatalog {
    pub fn new(entries: Vec<Endpoint>) -> Self {
        Self { entries }
    }

    /// The built-in Graph / Power BI table.
    pub fn graph() -> Self {
        Self::from_table(GRAPH_ENDPOINTS)
    }

    pub fn from_table(table: &[(&str, &str)]) -> Self {
        Self::new(
            table
                .iter()
                .map(|(url, task)| Endpoint::new(*url, *task))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[Endpoint] {
        &self.entries
    }

    /// Task label for a URL, if the URL is in the catalog.
    pub fn task_for(&self, url: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.url == url)
            .map(|e| e.task.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EndpointCatalog {
    fn default() -> Self {
        Self::graph()
    }
}
