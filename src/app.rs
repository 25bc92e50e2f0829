use crate::convert::Converter;
use crate::history::History;
use crate::state::Conversion;
use crate::theme::ThemeToggle;
use crate::toast::{ToastHost, Toasts};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    // Session state lives here: the last successful conversion, the history
    // reload counter, and the toast slot. Children get them as props.
    let last: RwSignal<Option<Conversion>> = create_rw_signal(None);
    let refresh = create_rw_signal(0u32);
    let toasts = Toasts::new();

    view! {
        <div class="min-h-dvh bg-gray-50 dark:bg-gray-900">
            <div class="max-w-xl mx-auto px-4 py-8">
                <header class="flex items-center justify-between mb-6">
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                        Temperature Converter
                    </h1>
                    <ThemeToggle />
                </header>
                <main class="flex flex-col gap-6">
                    <Converter last refresh toasts />
                    <History refresh toasts />
                </main>
            </div>
        </div>
        <ToastHost toasts />
    }
}
