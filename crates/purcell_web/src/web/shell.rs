use leptos::prelude::*;

use purcell::config::{LoadingConfig, SiteConfig};
use purcell::cursor::CursorFrame;
use purcell::format::fmt_fixed;
use purcell::loading::{LoadingPhase, LoadingScreen};
use purcell::notify::{NotificationCenter, NotificationLevel, NotificationPhase, NotificationSchedule};
use tracing::warn;

use super::dom;

/// Reactive state for everything the app renders on top of the static page.
#[derive(Clone, Copy)]
pub(super) struct Overlay {
    pub loading: RwSignal<LoadingScreen>,
    pub progress: RwSignal<f64>,
    pub toasts: RwSignal<NotificationCenter>,
    pub cursor: RwSignal<Option<CursorFrame>>,
    pub schedule: NotificationSchedule,
}

impl Overlay {
    pub fn new(cfg: &SiteConfig) -> Self {
        Self {
            loading: RwSignal::new(LoadingScreen::default()),
            progress: RwSignal::new(0.0),
            toasts: RwSignal::new(NotificationCenter::new(&cfg.notifications)),
            cursor: RwSignal::new(None),
            schedule: NotificationSchedule::from_config(&cfg.notifications),
        }
    }

    /// Shows a notification and schedules its enter, leave and removal.
    pub fn notify(&self, level: NotificationLevel, message: impl Into<String>) {
        let toasts = self.toasts;
        let mut id = 0;
        toasts.update(|c| id = c.push(level, message));

        let s = self.schedule;
        let steps: [(u32, Option<NotificationPhase>); 3] = [
            (s.show_at, Some(NotificationPhase::Shown)),
            (s.leave_at, Some(NotificationPhase::Leaving)),
            (s.remove_at, None),
        ];
        for (at, phase) in steps {
            let res = dom::set_timeout(at, move || {
                toasts.update(|c| {
                    match phase {
                        Some(p) => c.advance(id, p),
                        None => c.remove(id),
                    };
                });
            });
            if let Err(e) = res {
                warn!(error = %e, id, "notification timer not scheduled");
            }
        }
    }
}

#[component]
pub(super) fn LoadingSplash(loading: RwSignal<LoadingScreen>, cfg: LoadingConfig) -> impl IntoView {
    let fade = format!("opacity {}s ease", fmt_fixed(cfg.fade_ms as f64 / 1000.0, 1));
    view! {
        <Show when=move || loading.get().phase() != LoadingPhase::Removed>
            <div
                class="loading"
                style:transition=fade.clone()
                style:opacity=move || match loading.get().phase() {
                    LoadingPhase::Visible => "1",
                    _ => "0",
                }
            >
                <div class="loading-content">
                    <div class="loading-bar">
                        <div class="loading-progress"></div>
                    </div>
                    <p class="loading-text">{cfg.text.clone()}</p>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn ScrollProgress(progress: RwSignal<f64>) -> impl IntoView {
    view! {
        <div
            class="scroll-progress"
            style:transform=move || format!("scaleX({})", fmt_fixed(progress.get(), 4))
        ></div>
    }
}

#[component]
pub(super) fn ToastStack(toasts: RwSignal<NotificationCenter>) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite" aria-relevant="additions removals">
            <For
                each=move || toasts.get().items().to_vec()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let base = format!("toast {}", t.level.css_class());
                    let class = move || {
                        let shown = toasts.with(|c| {
                            c.items()
                                .iter()
                                .any(|n| n.id == id && n.phase == NotificationPhase::Shown)
                        });
                        if shown { format!("{base} shown") } else { base.clone() }
                    };
                    view! {
                        <div class=class>
                            <div class="toast-dot"></div>
                            <p style="flex: 1; white-space: pre-wrap;">{t.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub(super) fn CursorDot(cursor: RwSignal<Option<CursorFrame>>, size_px: f64) -> impl IntoView {
    let size = format!("{}px", fmt_fixed(size_px, 0));
    view! {
        <Show when=move || cursor.get().is_some()>
            <div
                class="cursor-dot"
                style:width=size.clone()
                style:height=size.clone()
                style:left=move || cursor.get().map(|f| format!("{}px", fmt_fixed(f.left, 1))).unwrap_or_default()
                style:top=move || cursor.get().map(|f| format!("{}px", fmt_fixed(f.top, 1))).unwrap_or_default()
                style:opacity=move || if cursor.get().is_some_and(|f| f.visible) { "1" } else { "0" }
                style:transform=move || {
                    let scale = cursor.get().map(|f| f.scale).unwrap_or(1.0);
                    format!("scale({})", fmt_fixed(scale, 2))
                }
            ></div>
        </Show>
    }
}
