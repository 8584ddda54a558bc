use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: ChildrenFn,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    let title = StoredValue::new(title);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                // Backdrop
                <div
                    class="absolute inset-0 bg-black/50"
                    on:click=move |_| on_close.run(())
                ></div>

                <div class=format!("relative w-full {} bg-white rounded-xl shadow-xl", max_width)>
                    <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200">
                        <h3 class="text-lg font-semibold text-gray-900">{title.get_value()}</h3>
                        <button
                            class="p-1 rounded hover:bg-gray-100"
                            on:click=move |_| on_close.run(())
                            title="Close"
                            aria-label="Close modal"
                        >
                            <Icon name=icons::X class="w-5 h-5"/>
                        </button>
                    </div>
                    <div class="p-6">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

/// Confirmation dialog modal
#[component]
pub fn ConfirmDialog(
    /// Dialog title
    title: String,
    /// Dialog message
    #[prop(into)]
    message: Signal<String>,
    /// Whether dialog is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback when confirmed
    on_confirm: Callback<()>,
    /// Callback when cancelled
    on_cancel: Callback<()>,
    /// Confirm button text
    #[prop(default = "Delete")]
    confirm_text: &'static str,
    /// Confirm button text while busy
    #[prop(default = "Deleting...")]
    busy_text: &'static str,
    /// Whether the confirm action is running
    #[prop(into, default = Signal::stored(false))]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <BaseModal title=title is_open=is_open on_close=on_cancel>
            <div class="space-y-4">
                <p class="text-gray-600">{move || message.get()}</p>

                <div class="flex items-center justify-end gap-2 pt-4 border-t border-gray-200">
                    <button
                        class="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 rounded-lg bg-red-600 text-white hover:bg-red-700 disabled:opacity-50"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { busy_text } else { confirm_text }}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
