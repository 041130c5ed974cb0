use leptos::prelude::*;
use leptos_use::use_window_scroll;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::STORAGE_KEY;
use crate::theme::Theme;

/// Light/dark mode, persisted in local storage once hydrated.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {next:?}");
        self.set_theme.set(next);
    }
}

/// Vertical window scroll in px.
#[derive(Debug, Clone, Copy)]
pub struct ScrollPosition(pub Signal<f64>);

/// Installs the page-wide providers. The scroll listener is removed when the owner is
/// cleaned up.
pub fn provide_ambient() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = signal(Theme::default());

    let ctx = ThemeContext {
        theme: theme.into(),
        set_theme,
    };
    provide_context(ctx);

    let (_, scroll_y) = use_window_scroll();
    provide_context(ScrollPosition(scroll_y));

    ctx
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    view! {
        <button
            type="button"
            aria-label="Toggle theme"
            class="p-2 text-zinc-500 hover:text-zinc-900 dark:text-zinc-400 dark:hover:text-zinc-100 transition-colors"
            on:click=move |_| ctx.toggle()
        >
            <i class=move || format!("{} text-lg", ctx.theme.get().toggle_icon().class()) />
        </button>
    }
}
