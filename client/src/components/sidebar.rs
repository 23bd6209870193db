//! Collapsible navigation sidebar for the dashboard shell.
//!
//! DESIGN
//! ======
//! Every entry is a full-page navigation, so the sidebar keeps no state of
//! its own beyond the mobile open/closed flag passed in by the page.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::util::browser;

/// Destinations reachable from the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Inicio,
    Clientes,
    Animales,
    Herraduras,
    Documentos,
}

impl NavSection {
    pub const ALL: [Self; 5] = [Self::Inicio, Self::Clientes, Self::Animales, Self::Herraduras, Self::Documentos];

    pub fn path(self) -> &'static str {
        match self {
            Self::Inicio => "/dashboard",
            Self::Clientes => "/dashboard/clientes",
            Self::Animales => "/dashboard/animales",
            Self::Herraduras => "/dashboard/herraduras",
            Self::Documentos => "/dashboard/documentos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inicio => "Inicio",
            Self::Clientes => "Registrar Clientes",
            Self::Animales => "Registrar Animales",
            Self::Herraduras => "Registrar Herraduras",
            Self::Documentos => "Generar Documentos",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Inicio => "🏠",
            Self::Clientes => "👥",
            Self::Animales => "🐎",
            Self::Herraduras => "🧲",
            Self::Documentos => "📄",
        }
    }

    /// Resolve a location path back to its entry.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|s| s.path() == path)
    }
}

#[component]
pub fn Sidebar(open: RwSignal<bool>, active: NavSection) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="sidebar-overlay" on:click=move |_| open.set(false)></div>
        </Show>
        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"📋"</span>
                <span class="sidebar__name">"Sistema de Registro"</span>
                <button class="sidebar__close" on:click=move |_| open.set(false) aria-label="Cerrar menú">
                    "✕"
                </button>
            </div>
            <nav class="sidebar__nav">
                <p class="sidebar__heading">"Menú Principal"</p>
                {NavSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=section == active
                                on:click=move |_| {
                                    open.set(false);
                                    browser::redirect(section.path());
                                }
                            >
                                <span aria-hidden="true">{section.icon()}</span>
                                {section.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <p class="sidebar__heading">"Herramientas"</p>
                <button class="sidebar__item" disabled=true>
                    <span aria-hidden="true">"⚙"</span>
                    "Configuración"
                </button>
            </nav>
        </aside>
    }
}
