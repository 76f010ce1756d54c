//! UI/backend events and error modeling for the catalog GUI controller.

use shared::domain::{Product, ProductId};

use crate::ui::app::ThumbnailImage;

pub enum UiEvent {
    LoadStarted,
    CatalogLoaded(Vec<Product>),
    ThumbnailLoaded {
        product_id: ProductId,
        image: ThumbnailImage,
    },
    ThumbnailFailed {
        product_id: ProductId,
        reason: String,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    RemoteStatus,
    Malformed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadCatalog,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("returned 4")
            || message_lower.contains("returned 5")
            || message_lower.contains("status")
        {
            UiErrorCategory::RemoteStatus
        } else if message_lower.contains("not a valid")
            || message_lower.contains("invalid")
            || message_lower.contains("malformed")
            || message_lower.contains("decod")
        {
            UiErrorCategory::Malformed
        } else if message_lower.contains("request failed")
            || message_lower.contains("connect")
            || message_lower.contains("timed out")
            || message_lower.contains("dns")
            || message_lower.contains("network")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
