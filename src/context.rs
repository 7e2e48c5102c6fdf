//! Application Context
//!
//! Read-only site data provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::Portfolio;

/// Static content and tuning shared by every section
#[derive(Clone)]
pub struct AppContext {
    pub portfolio: Arc<Portfolio>,
    pub config: Arc<SiteConfig>,
}

impl AppContext {
    pub fn new(portfolio: Portfolio) -> Self {
        let config = Arc::new(portfolio.settings.clone());
        Self { portfolio: Arc::new(portfolio), config }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
