//! Popup dialog configuration and controller.
//!
//! The controller owns at most one popup at a time: opening a new one
//! replaces whatever is on screen. It is a cheap `Copy` handle — construct
//! one in the app root and hand copies to anything that needs dialogs.

use leptos::*;

use crate::config::HOME_PAGE;
use crate::navigation;

const SUBMISSION_TITLE: &str = "Submission Successful!";
const SUBMISSION_MESSAGE: &str = "Thank you for your submission. We have received your \
     information and will process it shortly. You will receive a confirmation email within \
     the next few minutes.";

/// Visual flavor of a popup; selects the accent styling of the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
}

impl PopupKind {
    pub(crate) fn accent_class(self) -> &'static str {
        match self {
            PopupKind::Success => "border-emerald-500/40",
            PopupKind::Error => "border-red-500/40",
        }
    }
}

/// Styling of a single popup button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Success,
    Error,
}

impl ButtonStyle {
    pub(crate) fn class(self) -> &'static str {
        match self {
            ButtonStyle::Success => "bg-emerald-600 hover:bg-emerald-500",
            ButtonStyle::Error => "bg-red-600 hover:bg-red-500",
        }
    }
}

/// One button of a popup. Clicking it invokes `action` (if any), then closes
/// the popup.
#[derive(Clone)]
pub struct PopupButton {
    pub label: String,
    pub style: ButtonStyle,
    pub action: Option<Callback<()>>,
}

impl PopupButton {
    pub fn new(label: impl Into<String>, style: ButtonStyle) -> Self {
        PopupButton {
            label: label.into(),
            style,
            action: None,
        }
    }

    pub fn with_action(label: impl Into<String>, style: ButtonStyle, action: Callback<()>) -> Self {
        PopupButton {
            label: label.into(),
            style,
            action: Some(action),
        }
    }
}

/// Everything a popup displays. No field is required; an empty button list
/// renders as a single default "OK" button.
#[derive(Clone)]
pub struct PopupConfig {
    pub kind: PopupKind,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub buttons: Vec<PopupButton>,
}

/// Handle to the single active popup.
#[derive(Clone, Copy)]
pub struct PopupController {
    active: RwSignal<Option<PopupConfig>>,
}

impl PopupController {
    pub fn new() -> Self {
        PopupController {
            active: create_rw_signal(None),
        }
    }

    /// Show `config`, replacing any popup currently on screen.
    pub fn open(&self, config: PopupConfig) {
        self.active.set(Some(config));
    }

    /// Remove the active popup; no-op when none is shown.
    pub fn close(&self) {
        if self.active.with_untracked(Option::is_some) {
            self.active.set(None);
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.with(Option::is_some)
    }

    /// The reactive slot the host component renders from.
    pub(crate) fn active(&self) -> RwSignal<Option<PopupConfig>> {
        self.active
    }

    /// Success dialog with a "Back to Home" button invoking `on_confirm`.
    pub fn show_success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: Option<Callback<()>>,
    ) {
        self.open(PopupConfig {
            kind: PopupKind::Success,
            icon: Some("✓".to_string()),
            title: Some(title.into()),
            message: Some(message.into()),
            buttons: vec![PopupButton {
                label: "Back to Home".to_string(),
                style: ButtonStyle::Success,
                action: on_confirm,
            }],
        });
    }

    /// Error dialog with an "OK" button invoking `on_confirm`.
    pub fn show_error(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: Option<Callback<()>>,
    ) {
        self.open(PopupConfig {
            kind: PopupKind::Error,
            icon: Some("✗".to_string()),
            title: Some(title.into()),
            message: Some(message.into()),
            buttons: vec![PopupButton {
                label: "OK".to_string(),
                style: ButtonStyle::Error,
                action: on_confirm,
            }],
        });
    }

    /// Booking confirmation; "Back to Home" navigates to the home page.
    pub fn show_booking_success(&self) {
        self.show_success(
            SUBMISSION_TITLE,
            SUBMISSION_MESSAGE,
            Some(Callback::new(|_| navigation::redirect_to(HOME_PAGE))),
        );
    }

    /// Login confirmation; the "ok" button closes the popup and nothing else.
    pub fn show_login_success(&self) {
        self.open(PopupConfig {
            kind: PopupKind::Success,
            icon: Some("✓".to_string()),
            title: Some(SUBMISSION_TITLE.to_string()),
            message: Some(SUBMISSION_MESSAGE.to_string()),
            buttons: vec![PopupButton::new("ok", ButtonStyle::Success)],
        });
    }

    /// Validation failure with a fixed title and an action-less "OK" button.
    pub fn show_validation_error(&self, message: impl Into<String>) {
        self.open(PopupConfig {
            kind: PopupKind::Error,
            icon: Some("✗".to_string()),
            title: Some("Please enter a valid value".to_string()),
            message: Some(message.into()),
            buttons: vec![PopupButton::new("OK", ButtonStyle::Error)],
        });
    }
}

impl Default for PopupController {
    fn default() -> Self {
        Self::new()
    }
}
