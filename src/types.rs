use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Server-assigned identifier of a catalog record
pub type ProjectId = u64;

/// Records that carry a server-assigned id
pub trait Identified {
    fn id(&self) -> ProjectId;
}

/// A record in the primary `projects` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub author: String,
    pub image_url: String,
}

impl Identified for Project {
    fn id(&self) -> ProjectId {
        self.id
    }
}

/// Create payload for the `projects` collection (no id yet)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub author: String,
    pub image_url: String,
}

impl NewProject {
    /// Names of required fields that are empty or whitespace-only
    pub fn missing_fields(&self) -> Vec<&'static str> {
        ProjectField::ALL
            .iter()
            .filter(|field| self.get(**field).trim().is_empty())
            .map(|field| field.as_str())
            .collect()
    }

    pub fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Title => &self.title,
            ProjectField::Description => &self.description,
            ProjectField::Category => &self.category,
            ProjectField::Author => &self.author,
            ProjectField::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: ProjectField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProjectField::Title => self.title = value,
            ProjectField::Description => self.description = value,
            ProjectField::Category => self.category = value,
            ProjectField::Author => self.author = value,
            ProjectField::ImageUrl => self.image_url = value,
        }
    }
}

/// A record in the secondary `saved` collection.
///
/// The server reshapes saved projects; this is not a subset of [`Project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProject {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
    pub category: String,
}

impl Identified for SavedProject {
    fn id(&self) -> ProjectId {
        self.id
    }
}

/// Editable fields of the create form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    Title,
    Description,
    Category,
    Author,
    ImageUrl,
}

impl ProjectField {
    pub const ALL: [ProjectField; 5] = [
        ProjectField::Title,
        ProjectField::Description,
        ProjectField::Category,
        ProjectField::Author,
        ProjectField::ImageUrl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectField::Title => "title",
            ProjectField::Description => "description",
            ProjectField::Category => "category",
            ProjectField::Author => "author",
            ProjectField::ImageUrl => "image_url",
        }
    }
}

impl fmt::Display for ProjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "title" => Ok(ProjectField::Title),
            "description" => Ok(ProjectField::Description),
            "category" => Ok(ProjectField::Category),
            "author" => Ok(ProjectField::Author),
            "image_url" => Ok(ProjectField::ImageUrl),
            _ => Err(CatalogError::Validation(format!("unknown field '{s}'"))),
        }
    }
}
