//! Transient notification overlay

use dioxus::prelude::*;

use crate::store::{NoticeKind, Notifier, AUTO_DISMISS_MS};

/// Snackbar fed by the shared notification channel. Each notice hides
/// itself after [`AUTO_DISMISS_MS`] unless dismissed first; dismissal is
/// id-checked so a timer cannot clear a newer notice.
#[component]
pub fn Snackbar() -> Element {
    let mut notices = use_context::<Signal<Notifier>>();
    let current = notices.read().current().cloned();

    use_effect(move || {
        let Some(id) = notices.read().current().map(|notice| notice.id) else {
            return;
        };
        #[cfg(feature = "web")]
        {
            let mut notices = notices;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
                notices.write().dismiss(id);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = id;
    });

    let Some(notice) = current else {
        return rsx! {};
    };
    let panel = match notice.kind {
        NoticeKind::Success => "bg-green-50 border-green-200 text-green-700",
        NoticeKind::Error => "bg-red-50 border-red-200 text-red-700",
    };
    let id = notice.id;

    rsx! {
        div {
            class: "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 flex items-center gap-3 border rounded-lg shadow-lg px-4 py-3 {panel}",
            span { class: "text-sm font-medium", "{notice.message}" }
            button {
                class: "text-sm",
                onclick: move |_| notices.write().dismiss(id),
                "\u{2715}"
            }
        }
    }
}
