use crate::api;
use crate::loading::Loading;
use crate::state::HistoryEntry;
use crate::toast::{Severity, Toasts};
use leptos::logging::error;
use leptos::*;

/// History panel. The list is a read-only copy of the backend store: every
/// mutation round-trips through the API and then bumps `refresh`, which makes
/// the resource re-fetch the whole list.
#[component]
pub fn History(refresh: RwSignal<u32>, toasts: Toasts) -> impl IntoView {
    let entries = create_resource(
        move || refresh.get(),
        |_| async move {
            api::history().await.map_err(|err| {
                error!("failed to load history: {err}");
                err.to_string()
            })
        },
    );

    let delete_entry = move |id: i64| {
        spawn_local(async move {
            match api::delete_entry(id).await {
                Ok(()) => {
                    refresh.update(|n| *n += 1);
                    toasts.show("History item deleted", Severity::Success);
                }
                Err(err) => {
                    error!("failed to delete history item {id}: {err}");
                    toasts.show("Failed to delete history item", Severity::Danger);
                }
            }
        });
    };

    let clear_all = move |_| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to clear all conversion history?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::clear_history().await {
                Ok(()) => {
                    refresh.update(|n| *n += 1);
                    toasts.show("All history cleared", Severity::Success);
                }
                Err(err) => {
                    error!("failed to clear history: {err}");
                    toasts.show("Failed to clear history", Severity::Danger);
                }
            }
        });
    };

    view! {
        <section class="bg-white rounded-lg shadow p-6 dark:bg-gray-800">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">History</h2>
                <button
                    type="button"
                    class="text-sm font-medium text-red-600 hover:underline dark:text-red-500"
                    on:click=clear_all
                >
                    "Clear all"
                </button>
            </div>
            <Suspense fallback=move || {
                view! { <Loading /> }
            }>
                {move || {
                    entries
                        .get()
                        .map(|result| match result {
                            Err(_) => {
                                view! {
                                    <div class="text-center text-red-600 dark:text-red-500 py-10">
                                        <p class="font-medium">"Failed to load history"</p>
                                        <p class="mt-1 text-sm">
                                            "Please check if the server is running"
                                        </p>
                                    </div>
                                }
                                    .into_view()
                            }
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <div class="text-center text-gray-500 dark:text-gray-400 py-10">
                                        <p class="font-medium">"No conversion history yet"</p>
                                        <p class="mt-1 text-sm">
                                            "Convert temperatures and save them to see history"
                                        </p>
                                    </div>
                                }
                                    .into_view()
                            }
                            Ok(list) => {
                                list.into_iter()
                                    .map(|entry| {
                                        view! { <HistoryRow entry on_delete=delete_entry /> }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_view()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn HistoryRow<F>(entry: HistoryEntry, on_delete: F) -> impl IntoView
where
    F: FnMut(i64) -> () + 'static + Clone,
{
    let id = entry.id;
    let mut on_delete = on_delete.clone();
    view! {
        <div class="flex items-center justify-between py-3 border-b border-gray-100 last:border-b-0 dark:border-gray-700">
            <div>
                {entry
                    .nickname
                    .as_ref()
                    .map(|nickname| {
                        view! {
                            <div class="text-sm font-semibold text-blue-600 dark:text-blue-500">
                                {nickname.clone()}
                            </div>
                        }
                    })}
                <div class="text-gray-900 dark:text-white">{entry.conversion_label()}</div>
                <div class="mt-0.5 text-xs text-gray-500 dark:text-gray-400">
                    {entry.timestamp_label()}
                </div>
            </div>
            <button
                type="button"
                class="p-2 text-gray-400 hover:text-red-600 dark:hover:text-red-500"
                title="Delete"
                on:click=move |_| on_delete(id)
            >
                <svg class="w-4 h-4" viewBox="0 0 16 16" fill="none">
                    <path
                        d="M2.5 4h11M6.5 4V2.5h3V4M5.5 4l.5 9.5h4l.5-9.5"
                        stroke="currentColor"
                        stroke-width="1.5"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
            </button>
        </div>
    }
}
