use leptos::*;
use std::time::Duration;

/// Key used to persist the theme preference in localStorage.
const STORAGE_KEY: &str = "tempconv-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    fn from_str(value: &str) -> Mode {
        if value == "dark" {
            Mode::Dark
        } else {
            Mode::Light
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

/// Read the stored mode from localStorage, defaulting to light.
fn stored_mode() -> Mode {
    storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .map(|value| Mode::from_str(&value))
        .unwrap_or(Mode::Light)
}

fn persist_mode(mode: Mode) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, mode.as_str());
    }
}

/// Apply the mode by toggling the `dark` class on the document element.
fn apply_mode(mode: Mode) {
    if let Some(el) = document().document_element() {
        let _ = el.class_list().toggle_with_force("dark", mode == Mode::Dark);
    }
}

/// Toggle button that flips between light and dark, persists the choice, and
/// plays a short rotate/scale flourish on each click.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let initial = stored_mode();
    apply_mode(initial);

    let (mode, set_mode) = create_signal(initial);
    let (spinning, set_spinning) = create_signal(false);

    let toggle = move |_| {
        let next = mode.get_untracked().toggled();
        apply_mode(next);
        persist_mode(next);
        set_mode.set(next);
        set_spinning.set(true);
        set_timeout(
            move || set_spinning.set(false),
            Duration::from_millis(300),
        );
    };

    view! {
        <button
            class="p-2 rounded-full text-gray-500 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-700 transition-transform duration-300"
            style:transform=move || {
                if spinning.get() { "rotate(360deg) scale(1.2)" } else { "" }
            }
            on:click=toggle
            title="Toggle theme"
        >
            {move || {
                if mode.get() == Mode::Dark {
                    view! {
                        <svg class="w-5 h-5" viewBox="0 0 16 16" fill="none">
                            <path
                                d="M8 1v2M8 13v2M1 8h2M13 8h2M3 3l1.5 1.5M11.5 11.5L13 13M13 3l-1.5 1.5M4.5 11.5L3 13M11 8a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z"
                                stroke="currentColor"
                                stroke-width="1.5"
                                stroke-linecap="round"
                            />
                        </svg>
                    }
                } else {
                    view! {
                        <svg class="w-5 h-5" viewBox="0 0 16 16" fill="none">
                            <path
                                d="M13.5 9.5A5.5 5.5 0 1 1 6.5 2.5a4.5 4.5 0 0 0 7 7Z"
                                stroke="currentColor"
                                stroke-width="1.5"
                                stroke-linejoin="round"
                            />
                        </svg>
                    }
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled(), Mode::Light);
        assert_eq!(Mode::Light.toggled().toggled(), Mode::Light);
    }

    #[test]
    fn persisted_values_are_light_and_dark() {
        assert_eq!(Mode::Light.as_str(), "light");
        assert_eq!(Mode::Dark.as_str(), "dark");
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        assert_eq!(Mode::from_str("dark"), Mode::Dark);
        assert_eq!(Mode::from_str("light"), Mode::Light);
        assert_eq!(Mode::from_str("solarized"), Mode::Light);
    }
}
