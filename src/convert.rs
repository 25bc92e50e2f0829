use crate::api;
use crate::state::{normalize_nickname, parse_temperature, Conversion, Unit};
use crate::toast::{Severity, Toasts};
use leptos::html::Input;
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;

/// Conversion panel: value input, unit toggle, convert action, result display
/// and the save-to-history form. `last` is the session's last successful
/// conversion, owned by the root component; `refresh` is bumped after a save
/// so the history panel re-fetches.
#[component]
pub fn Converter(
    last: RwSignal<Option<Conversion>>,
    refresh: RwSignal<u32>,
    toasts: Toasts,
) -> impl IntoView {
    let (value, set_value) = create_signal(String::new());
    let (unit, set_unit) = create_signal(Unit::Celsius);
    let (nickname, set_nickname) = create_signal(String::new());
    let (converting, set_converting) = create_signal(false);
    let (saving, set_saving) = create_signal(false);

    let input_ref = create_node_ref::<Input>();
    create_effect(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let convert = move || {
        if converting.get_untracked() {
            return;
        }
        let Some(parsed) = parse_temperature(&value.get_untracked()) else {
            toasts.show("Please enter a valid number", Severity::Warning);
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
            return;
        };
        let from_unit = unit.get_untracked();
        set_converting.set(true);
        spawn_local(async move {
            match api::convert(parsed, from_unit).await {
                Ok(conversion) => {
                    last.set(Some(conversion));
                    set_nickname.set(String::new());
                    toasts.show("Conversion completed!", Severity::Info);
                }
                Err(err) => {
                    error!("conversion failed: {err}");
                    toasts.show(
                        "Failed to convert temperature. Please try again.",
                        Severity::Danger,
                    );
                }
            }
            set_converting.set(false);
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        convert();
    };

    // Flipping the unit while a result is on screen re-runs the conversion.
    let select_unit = move |next: Unit| {
        set_unit.set(next);
        if last.get_untracked().is_some() {
            convert();
        }
    };

    let save = move |_| {
        let Some(conversion) = last.get_untracked() else {
            toasts.show("Please convert a temperature first", Severity::Warning);
            return;
        };
        if saving.get_untracked() {
            return;
        }
        let nick = normalize_nickname(&nickname.get_untracked());
        set_saving.set(true);
        spawn_local(async move {
            match api::save(&conversion, nick).await {
                Ok(()) => {
                    refresh.update(|n| *n += 1);
                    set_nickname.set(String::new());
                    toasts.show("Conversion saved to history!", Severity::Success);
                }
                Err(err) => {
                    error!("save failed: {err}");
                    toasts.show(
                        "Failed to save conversion. Please try again.",
                        Severity::Danger,
                    );
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-white rounded-lg shadow p-6 dark:bg-gray-800">
            <form on:submit=on_submit>
                <label
                    for="temperature"
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                >
                    Temperature
                </label>
                <input
                    id="temperature"
                    type="text"
                    inputmode="decimal"
                    placeholder="Enter a value"
                    class="block w-full p-2.5 text-sm text-gray-900 bg-gray-50 rounded-lg border border-gray-300 focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    node_ref=input_ref
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    prop:value=value
                />
                <div class="flex gap-6 my-4">
                    <label class="flex items-center gap-2 text-sm text-gray-900 dark:text-white">
                        <input
                            type="radio"
                            name="unitToggle"
                            prop:checked=move || unit.get() == Unit::Celsius
                            on:change=move |_| select_unit(Unit::Celsius)
                        />
                        {Unit::Celsius.label()}
                    </label>
                    <label class="flex items-center gap-2 text-sm text-gray-900 dark:text-white">
                        <input
                            type="radio"
                            name="unitToggle"
                            prop:checked=move || unit.get() == Unit::Fahrenheit
                            on:change=move |_| select_unit(Unit::Fahrenheit)
                        />
                        {Unit::Fahrenheit.label()}
                    </label>
                </div>
                <button
                    type="submit"
                    disabled=move || converting.get()
                    class="w-full text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 disabled:opacity-60 disabled:cursor-not-allowed"
                >
                    {move || {
                        if converting.get() {
                            view! {
                                <span class="inline-flex items-center gap-2">
                                    <svg class="w-4 h-4 animate-spin" viewBox="0 0 16 16" fill="none">
                                        <path
                                            d="M14 8a6 6 0 1 1-6-6"
                                            stroke="currentColor"
                                            stroke-width="2"
                                            stroke-linecap="round"
                                        />
                                    </svg>
                                    Converting...
                                </span>
                            }
                        } else {
                            view! { <span>Convert</span> }
                        }
                    }}
                </button>
            </form>
            {move || {
                last.get()
                    .map(|conversion| {
                        view! {
                            <div class="mt-6 text-center">
                                <div class="text-4xl font-bold text-gray-900 dark:text-white">
                                    {conversion.display_value()}
                                </div>
                                <div class="mt-1 text-gray-500 dark:text-gray-400">
                                    {conversion.summary()}
                                </div>
                                <div class="mt-1 text-sm italic text-gray-400 dark:text-gray-500">
                                    {conversion.formula.clone()}
                                </div>
                                <div class="flex gap-2 mt-4">
                                    <input
                                        type="text"
                                        placeholder="Nickname (optional)"
                                        class="block w-full p-2.5 text-sm text-gray-900 bg-gray-50 rounded-lg border border-gray-300 focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                                        on:input=move |ev| set_nickname.set(event_target_value(&ev))
                                        prop:value=nickname
                                    />
                                    <button
                                        type="button"
                                        disabled=move || saving.get()
                                        class="shrink-0 text-white bg-green-700 hover:bg-green-800 focus:ring-4 focus:outline-none focus:ring-green-300 font-medium rounded-lg text-sm px-5 py-2.5 dark:bg-green-600 dark:hover:bg-green-700 dark:focus:ring-green-800 disabled:opacity-60 disabled:cursor-not-allowed"
                                        on:click=save
                                    >
                                        {move || if saving.get() { "Saving..." } else { "Save to History" }}
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{parse_temperature, Unit};

    // The validation gate sits in front of the network call; anything that
    // fails here must never produce a request.
    #[test]
    fn non_numeric_input_is_rejected_before_any_request() {
        for garbage in ["abc", "", "--3", "12,5", "NaN"] {
            assert_eq!(parse_temperature(garbage), None, "input {garbage:?}");
        }
    }

    #[test]
    fn unit_labels_carry_glyphs() {
        assert_eq!(Unit::Celsius.label(), "Celsius (°C)");
        assert_eq!(Unit::Fahrenheit.label(), "Fahrenheit (°F)");
    }
}
