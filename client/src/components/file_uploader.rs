//! Image upload widget with validation and data-URL preview.
//!
//! Accepts one file from the picker or by drag-and-drop onto the dropzone.
//! Either way the file is validated (MIME prefix, size ceiling) before
//! anything is read; rejected files produce an error toast and `on_upload`
//! is never invoked for them.

use leptos::prelude::*;

use crate::components::toast::toast_error;
use crate::state::ui::UiState;

#[component]
pub fn FileUploader(
    /// Receives the file contents as a `data:` URL once read.
    on_upload: Callback<String>,
    /// Clears the current preview.
    on_clear: Callback<()>,
    /// Preview image, owned by the parent page.
    #[prop(into)]
    preview: Signal<Option<String>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dragging = RwSignal::new(false);

    // Shared validation gate for picked and dropped files.
    #[cfg(feature = "hydrate")]
    let accept_file = move |file: web_sys::File| {
        let policy = crate::util::upload::UploadPolicy::default();
        match crate::util::upload::validate_file(&file.type_(), file.size(), &policy) {
            Ok(()) => {
                let result = crate::util::upload::read_data_url(&file, move |url| {
                    on_upload.run(url);
                });
                if let Err(message) = result {
                    log::error!("file read failed: {message}");
                    toast_error(ui, message);
                }
            }
            Err(err) => {
                log::error!("upload rejected: {}", err.user_message());
                toast_error(ui, err.user_message());
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            accept_file(file);
            // Allow re-selecting the same file after a clear.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, ui, on_upload);
        }
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(true);
    };

    let on_dragleave = move |_ev: leptos::ev::DragEvent| {
        dragging.set(false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|list| list.get(0))
            else {
                return;
            };
            accept_file(file);
        }
    };

    view! {
        <div class="file-uploader">
            <Show
                when=move || preview.get().is_some()
                fallback=move || {
                    view! {
                        <label
                            class="file-uploader__dropzone"
                            class=("file-uploader__dropzone--dragging", move || dragging.get())
                            on:dragover=on_dragover
                            on:dragleave=on_dragleave
                            on:drop=on_drop
                        >
                            <p>"Drag and drop an image, or click to select (max 5MB)"</p>
                            <input
                                class="file-uploader__input"
                                type="file"
                                accept="image/*"
                                on:change=on_change
                            />
                        </label>
                    }
                }
            >
                <div class="file-uploader__preview">
                    <img src=move || preview.get().unwrap_or_default() alt="Preview"/>
                    <button
                        class="file-uploader__clear"
                        aria-label="Remove image"
                        on:click=move |_| on_clear.run(())
                    >
                        "\u{d7}"
                    </button>
                </div>
            </Show>
        </div>
    }
}
