use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::{
    content::{Icon, NavLink, NAV_LINKS, OWNER},
    motion::stagger,
    nav::{is_active, HeaderState},
};

use super::ambient::{ScrollPosition, ThemeToggle};

const SOLID: &str = "bg-white/80 dark:bg-black/80 backdrop-blur-md border-b border-zinc-200/50 dark:border-zinc-800/50 shadow-sm";
const CLEAR: &str = "bg-transparent border-transparent";

/// Reactive header state. Location and scroll are folded in by a memo, so the overlay is
/// already closed when the new route renders.
#[derive(Clone, Copy)]
pub struct HeaderControls {
    pub state: Memo<HeaderState>,
    base: RwSignal<HeaderState>,
}

impl HeaderControls {
    pub fn new(pathname: Signal<String>, scroll_y: Signal<f64>) -> Self {
        let base = RwSignal::new(HeaderState::default());
        let state = Memo::new(move |_| {
            let y = scroll_y.get();
            pathname.with(|path| base.get().synced(path, y))
        });

        // commit the visited route so returning to an earlier one keeps the menu shut
        Effect::watch(
            move || pathname.get(),
            move |_, _, _| base.set(state.get_untracked()),
            false,
        );

        Self { state, base }
    }

    pub fn toggle_menu(&self) {
        self.commit(HeaderState::toggle_menu);
    }

    pub fn close_menu(&self) {
        self.commit(HeaderState::on_route_change);
    }

    fn commit(&self, change: impl FnOnce(&mut HeaderState)) {
        let mut next = self.state.get_untracked();
        change(&mut next);
        self.base.set(next);
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ScrollPosition(scroll_y) = expect_context::<ScrollPosition>();
    let pathname = use_location().pathname;
    let controls = HeaderControls::new(pathname.into(), scroll_y);

    view! { <HeaderBar controls /> }
}

#[component]
fn HeaderBar(controls: HeaderControls) -> impl IntoView {
    let menu_open = Memo::new(move |_| controls.state.with(|s| s.menu_open));

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 header-enter transition-all duration-300 {}",
                if controls.state.with(|s| s.is_solid()) { SOLID } else { CLEAR },
            )
        }>
            <div class="container mx-auto px-6 h-16 md:h-20 flex items-center justify-between">
                <Brand />
                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS.iter().map(|link| view! { <DesktopLink link=*link /> }).collect_view()}
                </nav>
                <div class="hidden md:flex items-center gap-4">
                    <a
                        href=OWNER.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-2 text-zinc-500 hover:text-zinc-900 dark:text-zinc-400 dark:hover:text-zinc-100 transition-colors"
                        aria-label="GitHub Profile"
                    >
                        <i class=Icon::Github.class() />
                    </a>
                    <ThemeToggle />
                </div>
                <button
                    type="button"
                    class="md:hidden z-50 p-2 text-zinc-900 dark:text-zinc-100 focus:outline-none"
                    aria-label="Toggle Menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| controls.toggle_menu()
                >
                    <i class=move || {
                        let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                        format!("{} text-2xl", icon.class())
                    } />
                </button>
            </div>
        </header>
        <Show when=move || menu_open.get()>
            <MobileMenu on_navigate=move || controls.close_menu() />
        </Show>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <A href="/" attr:class="group flex items-center gap-2 z-50">
            <div class="w-8 h-8 rounded-lg bg-zinc-900 dark:bg-zinc-100 flex items-center justify-center text-white dark:text-zinc-900 font-bold text-sm group-hover:scale-105 transition-transform">
                {OWNER.initials}
            </div>
            <span class="font-semibold text-zinc-900 dark:text-zinc-100 text-lg tracking-tight group-hover:opacity-80 transition-opacity">
                {OWNER.name}
            </span>
        </A>
    }
}

fn link_class(active: bool) -> &'static str {
    if active {
        "text-zinc-900 dark:text-zinc-100"
    } else {
        "text-zinc-500 dark:text-zinc-400"
    }
}

#[component]
fn DesktopLink(link: NavLink) -> impl IntoView {
    let pathname = use_location().pathname;
    let active = Memo::new(move |_| is_active(&pathname.get(), link.href));
    view! {
        <A
            href=link.href
            attr:class=move || {
                format!(
                    "relative text-sm font-medium transition-colors hover:text-zinc-900 dark:hover:text-zinc-100 {}",
                    link_class(active.get()),
                )
            }
        >
            {link.name}
            <Show when=move || active.get()>
                <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-zinc-900 dark:bg-zinc-100 rounded-full" />
            </Show>
        </A>
    }
}

/// Full-screen overlay for small viewports; links slide in one after another.
#[component]
fn MobileMenu<F>(on_navigate: F) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let pathname = use_location().pathname;
    view! {
        <div class="fixed inset-0 z-40 bg-white dark:bg-black pt-24 px-6 md:hidden flex flex-col menu-overlay">
            <nav class="flex flex-col gap-6">
                {NAV_LINKS
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        let delay = stagger(0.1, 0.1, i);
                        let href = link.href;
                        let on_navigate = on_navigate.clone();
                        view! {
                            <div
                                class="menu-item"
                                style=format!("animation-delay: {delay:.2}s;")
                                on:click=move |_| on_navigate()
                            >
                                <A
                                    href=href
                                    attr:class=move || {
                                        format!(
                                            "block text-3xl font-semibold tracking-tight {}",
                                            link_class(is_active(&pathname.get(), href)),
                                        )
                                    }
                                >
                                    {link.name}
                                </A>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
            <div
                class="menu-item mt-auto mb-10 flex items-center justify-between border-t border-zinc-100 dark:border-zinc-800 pt-6"
                style="animation-delay: 0.50s;"
            >
                <div class="flex gap-6 items-center">
                    <a
                        href=OWNER.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-zinc-500 dark:text-zinc-400"
                        aria-label="GitHub Profile"
                    >
                        <i class=format!("{} text-2xl", Icon::Github.class()) />
                    </a>
                    <ThemeToggle />
                </div>
                <span class="text-xs text-zinc-400 font-medium">
                    {format!("© {} {}", env!("BUILD_YEAR"), OWNER.name)}
                </span>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::ambient::provide_ambient;
    use leptos_router::location::RequestUrl;

    struct Fixture {
        _owner: Owner,
        path: RwSignal<String>,
        scroll: RwSignal<f64>,
        controls: HeaderControls,
    }

    fn fixture() -> Fixture {
        let owner = Owner::new();
        owner.set();
        provide_context(RequestUrl::new("/about"));
        provide_ambient();
        let path = RwSignal::new("/about".to_string());
        let scroll = RwSignal::new(0.0);
        let controls = HeaderControls::new(path.into(), scroll.into());
        Fixture {
            _owner: owner,
            path,
            scroll,
            controls,
        }
    }

    fn render(controls: HeaderControls) -> String {
        view! {
            <Router>
                <HeaderBar controls />
            </Router>
        }
        .to_html()
    }

    #[test]
    fn test_controls_follow_route_and_scroll() {
        let f = fixture();
        assert!(!f.controls.state.get_untracked().menu_open);

        f.controls.toggle_menu();
        assert!(f.controls.state.get_untracked().menu_open);

        f.path.set("/skills".to_string());
        let state = f.controls.state.get_untracked();
        assert!(!state.menu_open);
        assert!(!state.is_solid());

        f.scroll.set(120.0);
        assert!(f.controls.state.get_untracked().is_solid());

        f.controls.toggle_menu();
        f.controls.close_menu();
        assert!(!f.controls.state.get_untracked().menu_open);
    }

    #[test]
    fn test_overlay_renders_while_open() {
        let f = fixture();
        let closed = render(f.controls);
        assert!(!closed.contains("menu-overlay"));
        assert!(closed.contains(r#"aria-expanded="false""#));
        assert!(closed.contains(Icon::Menu.class()));
        assert!(closed.contains(CLEAR));

        f.controls.toggle_menu();
        let open = render(f.controls);
        assert!(open.contains("menu-overlay"));
        assert_eq!(open.matches("menu-item").count(), NAV_LINKS.len() + 1);
        assert!(open.contains(r#"aria-expanded="true""#));
        assert!(open.contains(Icon::Close.class()));
        assert!(open.contains(SOLID));
    }

    #[test]
    fn test_route_change_removes_overlay() {
        let f = fixture();
        f.controls.toggle_menu();
        assert!(render(f.controls).contains("menu-overlay"));

        f.path.set("/".to_string());
        let html = render(f.controls);
        assert!(!html.contains("menu-overlay"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_scrolled_bar_is_solid() {
        let f = fixture();
        f.scroll.set(300.0);
        let html = render(f.controls);
        assert!(html.contains(SOLID));
        assert!(!html.contains("menu-overlay"));
    }
}
