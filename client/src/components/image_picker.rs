//! File input that turns a picked image into an inline preview.

use leptos::prelude::*;

use crate::util::image::IMAGE_ACCEPT;

/// Image picker with preview.
///
/// `on_pick` receives the data URL; `on_error` the banner text when the file
/// cannot be read.
#[component]
pub fn ImagePicker(
    label: &'static str,
    preview: Signal<Option<String>>,
    on_pick: Callback<String>,
    on_error: Callback<String>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::image::first_file(&ev) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::image::read_file(file).await {
                    Ok(url) => on_pick.run(url),
                    Err(err) => {
                        log::warn!("image read failed: {err}");
                        on_error.run(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_pick, on_error);
        }
    };

    view! {
        <div class="field field--wide image-picker">
            <span class="field__label">{label}</span>
            <Show when=move || preview.get().is_some()>
                <img
                    class="image-picker__preview"
                    src=move || preview.get().unwrap_or_default()
                    alt="Vista previa"
                />
            </Show>
            <input class="image-picker__input" type="file" accept=IMAGE_ACCEPT on:change=on_change/>
        </div>
    }
}
