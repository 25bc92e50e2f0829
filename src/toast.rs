use leptos::*;
use std::time::Duration;

const TOAST_MS: u64 = 5000;

/// Outcome severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn color_class(&self) -> &'static str {
        match self {
            Severity::Info => "text-blue-500",
            Severity::Success => "text-green-500",
            Severity::Warning => "text-yellow-500",
            Severity::Danger => "text-red-500",
        }
    }

    fn icon_path(&self) -> &'static str {
        match self {
            Severity::Info => "M8 11V7.5M8 5h.01M15 8A7 7 0 1 1 1 8a7 7 0 0 1 14 0Z",
            Severity::Success => "M3 8.5l3 3 7-7",
            Severity::Warning => "M8 2L1 14h14L8 2Zm0 4.5V10M8 12h.01",
            Severity::Danger => "M4.5 4.5l7 7M11.5 4.5l-7 7",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

/// Handle to the single toast slot. A new toast replaces the current one;
/// each carries a sequence number so a stale dismissal timer never clears a
/// newer toast.
#[derive(Clone, Copy)]
pub struct Toasts {
    current: RwSignal<Option<(u32, Toast)>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Toasts {
            current: create_rw_signal(None),
            next_id: create_rw_signal(0),
        }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.current.set(Some((
            id,
            Toast {
                message: message.into(),
                severity,
            },
        )));
        let current = self.current;
        set_timeout(
            move || {
                current.update(|cur| {
                    if matches!(cur, Some((shown, _)) if *shown == id) {
                        *cur = None;
                    }
                });
            },
            Duration::from_millis(TOAST_MS),
        );
    }
}

#[component]
pub fn ToastHost(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="fixed bottom-5 right-5 z-50">
            {move || {
                toasts
                    .current
                    .get()
                    .map(|(_, toast)| {
                        view! {
                            <div class="flex items-center gap-3 px-4 py-3 rounded-lg shadow-lg bg-white border border-gray-200 dark:bg-gray-800 dark:border-gray-700">
                                <svg
                                    class=format!("w-5 h-5 shrink-0 {}", toast.severity.color_class())
                                    viewBox="0 0 16 16"
                                    fill="none"
                                >
                                    <path
                                        d=toast.severity.icon_path()
                                        stroke="currentColor"
                                        stroke-width="1.5"
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                    />
                                </svg>
                                <span class="text-sm text-gray-900 dark:text-white">
                                    {toast.message}
                                </span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_styles_are_distinct() {
        let all = [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Danger,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.color_class(), b.color_class());
                assert_ne!(a.icon_path(), b.icon_path());
            }
        }
    }
}
