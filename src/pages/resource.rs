//! Generic resource management screen
//!
//! One screen covers both collections; everything type-specific comes
//! from the [`Resource`] schema. The screen reads the session cache, lets
//! the search filter narrow the rows, and routes every user intent -
//! add, edit, quick action - through the dialog and the store.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{LoadingDots, SearchField};
use crate::dialog::{DialogState, MutationRequest};
use crate::schema::{Control, FieldDef, Resource};
use crate::search;
use crate::store::{self, FetchStatus, Notifier, ResourceCache};

/// Build the screen for one resource collection. Plain function rather
/// than a component so the pages can instantiate it per type; hooks run
/// in the calling page's scope.
pub fn resource_screen<R: Resource>() -> Element {
    let api = use_context::<ApiClient>();
    let cache = use_context::<Signal<ResourceCache<R>>>();
    let notices = use_context::<Signal<Notifier>>();
    let search_text = use_signal(String::new);
    let mut dialog = use_signal(DialogState::<R>::new);

    // Prime the cache on first use; later visits reuse the session entry.
    // The driver is detached from this screen's scope: the cache entry is
    // session-scoped, so navigating away must not cancel a request the
    // entry is waiting on.
    use_hook(|| {
        let api = api.clone();
        spawn_forever(async move {
            let mut cache = cache;
            store::read_through(&api, &mut cache).await;
        });
    });

    let rows = {
        let entry = cache.read();
        search::filter_by_name(search_text.read().as_str(), entry.records())
    };
    let status = cache.read().status();
    let show_loading = status == FetchStatus::Loading && rows.is_empty();
    let show_empty = !show_loading && rows.is_empty();

    let add_label = format!("Add {}", R::SINGULAR);
    let empty_message = format!("No {} found.", R::COLLECTION);
    let error_message = format!("Could not load {}. Showing the last known data.", R::COLLECTION);
    let headers: Vec<(&'static str, &'static str)> = R::columns()
        .iter()
        .map(|column| (column.header, column.align.class()))
        .collect();

    let on_retry = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_forever(async move {
                let mut cache = cache;
                store::invalidate(&api, &mut cache).await;
            });
        }
    };

    let on_submit = {
        let api = api.clone();
        move |_| {
            // Detached so navigating right after submit cannot cancel a
            // write the dialog already accepted.
            if let Some(request) = dialog.write().submit() {
                let api = api.clone();
                spawn_forever(async move {
                    let mut cache = cache;
                    let mut notices = notices;
                    match request {
                        MutationRequest::Create(body) => {
                            let message = format!("{} added successfully!", R::TITLE);
                            store::create_record(&api, &mut cache, &mut notices, body, message)
                                .await;
                        }
                        MutationRequest::Update { id, patch } => {
                            let message = format!("{} edited successfully!", R::TITLE);
                            store::update_record(&api, &mut cache, &mut notices, &id, patch, message)
                                .await;
                        }
                    }
                });
            }
        }
    };

    rsx! {
        div {
            class: "max-w-5xl mx-auto",

            // Search + add row
            div {
                class: "flex items-center justify-between mb-4",
                SearchField { value: search_text }
                button {
                    class: "px-4 py-2 border border-blue-600 text-blue-600 rounded-lg hover:bg-blue-50 font-medium",
                    onclick: move |_| dialog.write().open_create(),
                    "{add_label} +"
                }
            }

            if status == FetchStatus::Error {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4 flex items-center justify-between",
                    span { "{error_message}" }
                    button {
                        class: "px-3 py-1 text-sm border border-red-300 rounded hover:bg-red-100",
                        onclick: on_retry,
                        "Retry"
                    }
                }
            }

            if show_loading {
                div { class: "text-center py-12", LoadingDots {} }
            } else if show_empty {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                    p { class: "text-gray-500", "{empty_message}" }
                }
            } else {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                    table {
                        class: "min-w-full divide-y divide-gray-200",
                        thead {
                            class: "bg-gray-50",
                            tr {
                                for (header, align) in headers {
                                    th { class: "px-6 py-3 text-xs font-medium text-gray-500 uppercase {align}", "{header}" }
                                }
                                th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase", "Actions" }
                            }
                        }
                        tbody {
                            class: "bg-white divide-y divide-gray-200",
                            for record in rows {
                                ResourceRow::<R> { record, dialog }
                            }
                        }
                    }
                }
            }

            ResourceDialog::<R> { dialog, on_submit }
        }
    }
}

#[component]
fn ResourceRow<R: Resource>(record: R, dialog: Signal<DialogState<R>>) -> Element {
    let api = use_context::<ApiClient>();
    let cache = use_context::<Signal<ResourceCache<R>>>();
    let notices = use_context::<Signal<Notifier>>();
    let mut dialog = dialog;

    let action = R::quick_action();
    let cells: Vec<(&'static str, String)> = R::columns()
        .iter()
        .map(|column| (column.align.class(), (column.cell)(&record)))
        .collect();

    let on_edit = {
        let record = record.clone();
        move |_| dialog.write().open_edit(&record)
    };

    let on_quick = {
        let record = record.clone();
        move |_| {
            let api = api.clone();
            let record = record.clone();
            spawn_forever(async move {
                let mut cache = cache;
                let mut notices = notices;
                let action = R::quick_action();
                let patch = (action.build)(&record);
                store::update_record(
                    &api,
                    &mut cache,
                    &mut notices,
                    record.id(),
                    patch,
                    action.message.to_string(),
                )
                .await;
            });
        }
    };

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            for (align, value) in cells {
                td { class: "px-6 py-4 text-sm text-gray-700 {align}", "{value}" }
            }
            td {
                class: "px-6 py-4 text-right",
                button {
                    class: "px-2 py-1 text-gray-500 hover:text-gray-900 rounded hover:bg-gray-100",
                    title: "Edit",
                    onclick: on_edit,
                    "\u{270E}"
                }
                button {
                    class: "px-2 py-1 ml-1 text-gray-500 hover:text-gray-900 rounded hover:bg-gray-100",
                    title: action.label,
                    onclick: on_quick,
                    "{action.icon}"
                }
            }
        }
    }
}

#[component]
fn ResourceDialog<R: Resource>(dialog: Signal<DialogState<R>>, on_submit: EventHandler<()>) -> Element {
    let mut dialog = dialog;

    if !dialog.read().is_open() {
        return rsx! {};
    }
    let title = dialog.read().title();

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40",
            onclick: move |_| dialog.write().cancel(),
            div {
                class: "bg-white rounded-lg shadow-lg w-full max-w-md p-6",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "{title}" }

                form {
                    onsubmit: move |_| on_submit.call(()),

                    for field in R::fields() {
                        {field_input(*field, dialog)}
                    }

                    div {
                        class: "mt-6 flex justify-end gap-2",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 text-gray-600 rounded-lg hover:bg-gray-100",
                            onclick: move |_| dialog.write().cancel(),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium",
                            "{title}"
                        }
                    }
                }
            }
        }
    }
}

/// Render one dialog field from its schema definition.
fn field_input<R: Resource>(field: FieldDef, mut dialog: Signal<DialogState<R>>) -> Element {
    let name = field.name;
    let value = dialog.read().draft().text(name).to_string();
    let checked = dialog.read().draft().flag(name);
    let error = dialog.read().error(name).map(str::to_string);

    match field.control {
        Control::Text => rsx! {
            div {
                class: "mb-4",
                label { class: "block text-sm font-medium text-gray-700 mb-1", "{field.label}" }
                input {
                    r#type: "text",
                    value: "{value}",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                    oninput: move |e| dialog.write().set_text(name, e.value()),
                }
                if let Some(error) = error {
                    p { class: "mt-1 text-xs text-red-600", "{error}" }
                }
            }
        },
        Control::Number => rsx! {
            div {
                class: "mb-4",
                label { class: "block text-sm font-medium text-gray-700 mb-1", "{field.label}" }
                input {
                    r#type: "number",
                    value: "{value}",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                    oninput: move |e| dialog.write().set_text(name, e.value()),
                }
                if let Some(error) = error {
                    p { class: "mt-1 text-xs text-red-600", "{error}" }
                }
            }
        },
        Control::Checkbox => rsx! {
            div {
                class: "mb-4 flex items-center gap-2",
                input {
                    r#type: "checkbox",
                    checked,
                    oninput: move |e| dialog.write().set_flag(name, e.checked()),
                }
                label { class: "text-sm font-medium text-gray-700", "{field.label}" }
            }
        },
        Control::Select(options) => rsx! {
            div {
                class: "mb-4",
                label { class: "block text-sm font-medium text-gray-700 mb-1", "{field.label}" }
                select {
                    value: "{value}",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg bg-white focus:outline-none focus:ring-2 focus:ring-blue-500",
                    oninput: move |e| dialog.write().set_text(name, e.value()),
                    option { value: "", "Select {field.label}" }
                    for opt in options {
                        option { value: opt.value, selected: opt.value == value, "{opt.label}" }
                    }
                }
                if let Some(error) = error {
                    p { class: "mt-1 text-xs text-red-600", "{error}" }
                }
            }
        },
    }
}
