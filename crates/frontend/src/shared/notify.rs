//! Inline alert area shown at the top of a page.

use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
    Secondary,
}

impl Severity {
    fn intent(self) -> MessageBarIntent {
        match self {
            Severity::Info | Severity::Secondary => MessageBarIntent::Info,
            Severity::Success => MessageBarIntent::Success,
            Severity::Warning => MessageBarIntent::Warning,
            Severity::Danger => MessageBarIntent::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
            Severity::Secondary => "secondary",
        }
    }
}

/// Latest message of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message)
    }

    pub fn secondary(message: impl Into<String>) -> Self {
        Self::new(Severity::Secondary, message)
    }
}

/// Renders the notice, if any. Multi-line messages keep their line breaks.
#[component]
pub fn AlertArea(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div class="alert-area" data-severity=n.severity.as_str()>
                    <MessageBar intent=n.severity.intent()>
                        <div style="white-space: pre-line;">{n.message}</div>
                    </MessageBar>
                </div>
            }
        })
    }
}
