//! Create page: draw or upload an image, title it, and post it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::drawing_canvas::DrawingCanvas;
use crate::components::file_uploader::FileUploader;
use crate::components::nav_bar::NavBar;
use crate::components::toast::{toast_error, toast_success};
use crate::net::api::{ArtBackend, MockBackend};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CreateTab {
    Draw,
    Upload,
}

#[component]
pub fn CreatePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let backend = expect_context::<MockBackend>();
    let navigate = use_navigate();

    let tab = RwSignal::new(CreateTab::Draw);
    let title = RwSignal::new(String::new());
    let preview = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_drawing_save = Callback::new(move |data_url: String| {
        preview.set(Some(data_url));
    });
    let on_upload = Callback::new(move |data_url: String| {
        preview.set(Some(data_url));
    });
    let on_clear_upload = Callback::new(move |()| preview.set(None));

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(user) = auth.get().user else {
            toast_error(ui, "You must be logged in to post artwork");
            navigate_submit("/login", NavigateOptions::default());
            return;
        };
        let title_value = title.get().trim().to_owned();
        if title_value.is_empty() {
            toast_error(ui, "Please provide a title for your artwork");
            return;
        }
        let Some(image) = preview.get() else {
            toast_error(ui, "Please create or upload an image");
            return;
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate_done = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match backend.create_artwork(&title_value, &image, &user).await {
                    Ok(posted) => {
                        log::info!("posted artwork {}", posted.id);
                        toast_success(ui, "Artwork posted successfully!");
                        navigate_done("/explore", NavigateOptions::default());
                    }
                    Err(message) => {
                        log::error!("artwork post failed: {message}");
                        toast_error(ui, message);
                    }
                }
                submitting.set(false);
            });
        }
    };

    let navigate_login = navigate.clone();

    view! {
        <div class="page create-page">
            <NavBar/>
            <main class="page__body">
                <h1>"Create Artwork"</h1>

                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=move || {
                        let navigate_login = navigate_login.clone();
                        view! {
                            <div class="create-page__login-prompt">
                                <p>"You need to be logged in to post artwork."</p>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| navigate_login("/login", NavigateOptions::default())
                                >
                                    "Log In to Continue"
                                </button>
                            </div>
                        }
                    }
                >
                    <form class="create-page__form" on:submit=on_submit.clone()>
                        <div class="create-page__tabs">
                            <button
                                type="button"
                                class="tab"
                                class=("tab--active", move || tab.get() == CreateTab::Draw)
                                on:click=move |_| tab.set(CreateTab::Draw)
                            >
                                "Draw"
                            </button>
                            <button
                                type="button"
                                class="tab"
                                class=("tab--active", move || tab.get() == CreateTab::Upload)
                                on:click=move |_| tab.set(CreateTab::Upload)
                            >
                                "Upload"
                            </button>
                        </div>

                        <Show when=move || tab.get() == CreateTab::Draw>
                            <DrawingCanvas on_save=on_drawing_save/>
                        </Show>
                        <Show when=move || tab.get() == CreateTab::Upload>
                            <FileUploader on_upload=on_upload on_clear=on_clear_upload preview=preview/>
                        </Show>

                        <label class="create-page__title">
                            "Title"
                            <input
                                type="text"
                                placeholder="Give your artwork a title"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </label>

                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Posting..." } else { "Post Artwork" }}
                        </button>
                    </form>
                </Show>
            </main>
        </div>
    }
}
