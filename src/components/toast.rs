use leptos::{component, create_rw_signal, view, IntoView, RwSignal, SignalGet, SignalUpdate};
use std::time::Duration;
use crate::constants::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    serial: u64,
}

impl Toast {
    #[must_use]
    pub fn new(message: String, kind: ToastKind) -> Self {
        Self {
            message,
            kind,
            visible: true,
            serial: 0,
        }
    }

    /// Replace the current notice. Returns the serial that dismisses it.
    pub fn show(&mut self, message: String, kind: ToastKind) -> u64 {
        self.serial += 1;
        self.message = message;
        self.kind = kind;
        self.visible = true;
        self.serial
    }

    /// Hide the notice unless a newer one has replaced it
    pub fn dismiss(&mut self, serial: u64) {
        if self.serial == serial {
            self.visible = false;
        }
    }
}

/// Handle for posting transient notices from anywhere in the console
#[derive(Clone, Copy)]
pub struct Notifier {
    toast: RwSignal<Toast>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            toast: create_rw_signal(Toast::default()),
        }
    }

    #[must_use]
    pub fn toast(&self) -> RwSignal<Toast> {
        self.toast
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Info);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        leptos::logging::warn!("{message}");
        self.show(message, ToastKind::Error);
    }

    fn show(&self, message: String, kind: ToastKind) {
        let toast = self.toast;
        let Some(serial) = toast.try_update(|t| t.show(message, kind)) else {
            return;
        };
        let _ = leptos::leptos_dom::helpers::set_timeout_with_handle(
            move || {
                toast.try_update(|t| t.dismiss(serial));
            },
            Duration::from_millis(TOAST_DURATION_MS),
        );
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
#[must_use]
pub fn ToastNotification(toast: RwSignal<Toast>) -> impl IntoView {
    view! {
        {move || {
            let t = toast.get();
            if t.visible {
                view! {
                    <div class=format!("toast toast-visible {}", t.kind.css_class())>
                        {t.message}
                    </div>
                }.into_view()
            } else {
                view! { <div class="toast"></div> }.into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_hides_current_notice() {
        let mut toast = Toast::default();
        let serial = toast.show("Decision sent".to_string(), ToastKind::Info);
        assert!(toast.visible);

        toast.dismiss(serial);
        assert!(!toast.visible);
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut toast = Toast::default();
        let first = toast.show("first".to_string(), ToastKind::Info);
        toast.show("second".to_string(), ToastKind::Error);

        toast.dismiss(first);
        assert!(toast.visible);
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
    }
}
