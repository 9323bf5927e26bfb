//! Prelude module for convenient imports.
//!
//! ```ignore
//! use rpg_forum::prelude::*;
//! ```
//!
//! This will import:
//! - Core application types (App, Screen, Focus, AppMessage)
//! - Model types (Topic, Comment, Category)
//! - The forum client and its configuration
//! - View-models and the toast queue
//! - UI types (render function, LayoutContext)

// Core application types
pub use crate::app::{App, AppMessage, Dialog, Focus, Screen};

// Model types
pub use crate::models::{Category, Comment, NewComment, NewTopic, Topic};

// Client
pub use crate::api::ForumClient;
pub use crate::config::ForumConfig;
pub use crate::error::{ForumError, ForumResult};

// View-models
pub use crate::view_model::{
    DetailPhase, Toast, ToastQueue, TopicDetailViewModel, TopicListViewModel,
};

// UI types
pub use crate::ui::layout::LayoutContext;
pub use crate::ui::render;
