//! Dashboard shell: header, sidebar, summary metrics and quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after login. Every figure here is static; the section
//! pages own their own data and nothing is shared back to this view.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::sidebar::{NavSection, Sidebar};
use crate::components::summary_card::SummaryCard;
use crate::util::browser;

/// One headline figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
}

pub const METRICS: [Metric; 4] = [
    Metric { title: "Total Clientes", value: "1,234", change: "+12%", icon: "👥" },
    Metric { title: "Animales Registrados", value: "567", change: "+15%", icon: "🐎" },
    Metric { title: "Herraduras Registradas", value: "342", change: "+8%", icon: "🧲" },
    Metric { title: "Documentos Generados", value: "856", change: "+8%", icon: "📄" },
];

/// Card linking to one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub section: NavSection,
    pub title: &'static str,
    pub description: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        section: NavSection::Clientes,
        title: "Gestión de Clientes",
        description: "Registre nuevos clientes y gestione la información existente",
        primary: "Registrar Nuevo Cliente",
        secondary: "Ver Lista de Clientes",
    },
    QuickAction {
        section: NavSection::Animales,
        title: "Registro de Animales",
        description: "Registre animales con imágenes y características detalladas",
        primary: "Registrar Nuevo Animal",
        secondary: "Ver Lista de Animales",
    },
    QuickAction {
        section: NavSection::Herraduras,
        title: "Registro de Herraduras",
        description: "Registre herraduras con imágenes y datos del propietario",
        primary: "Registrar Nueva Herradura",
        secondary: "Ver Lista de Herraduras",
    },
    QuickAction {
        section: NavSection::Documentos,
        title: "Generación de Documentos",
        description: "Cree y genere documentos personalizados para impresión",
        primary: "Crear Nuevo Documento",
        secondary: "Ver Documentos Recientes",
    },
];

/// `(text, when)` pairs for the activity feed.
pub const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("Cliente registrado: Juan Pérez", "Hace 2 horas"),
    ("Documento generado: Contrato #1234", "Hace 4 horas"),
    ("Cliente actualizado: María García", "Hace 6 horas"),
];

pub const LOGIN_PATH: &str = "/login";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    let on_logout = move |_| {
        log::info!("logout");
        browser::redirect(LOGIN_PATH);
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <button
                    class="dashboard-header__menu"
                    on:click=move |_| sidebar_open.update(|v| *v = !*v)
                    aria-label="Abrir menú"
                >
                    "☰"
                </button>
                <h1 class="dashboard-header__title">"Sistema de Registro"</h1>
                <span class="dashboard-header__spacer"></span>
                <span class="dashboard-header__greeting">"Bienvenido, Usuario"</span>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Cerrar Sesión"
                </button>
            </header>

            <div class="dashboard-page__body">
                <Sidebar open=sidebar_open active=NavSection::Inicio/>

                <main class="dashboard-main">
                    <div class="dashboard-main__intro">
                        <h1>"Panel de Control"</h1>
                        <p>"Gestione sus clientes, animales, herraduras y genere documentos de manera eficiente"</p>
                    </div>

                    <div class="dashboard-main__metrics">
                        {METRICS
                            .into_iter()
                            .map(|m| view! { <SummaryCard title=m.title value=m.value change=m.change icon=m.icon/> })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="dashboard-main__actions">
                        {QUICK_ACTIONS.into_iter().map(quick_action_card).collect::<Vec<_>>()}
                    </div>

                    <section class="activity">
                        <h2 class="activity__title">"Actividad Reciente"</h2>
                        <p class="activity__subtitle">"Últimas acciones realizadas en el sistema"</p>
                        <ul class="activity__list">
                            {RECENT_ACTIVITY
                                .into_iter()
                                .map(|(text, when)| {
                                    view! {
                                        <li class="activity__item">
                                            <p class="activity__text">{text}</p>
                                            <p class="activity__when">{when}</p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </section>
                </main>
            </div>
        </div>
    }
}

fn quick_action_card(action: QuickAction) -> impl IntoView {
    let path = action.section.path();
    view! {
        <div class="action-card">
            <h3 class="action-card__title">
                <span aria-hidden="true">{action.section.icon()}</span>
                {action.title}
            </h3>
            <p class="action-card__description">{action.description}</p>
            <button
                class="btn btn--primary btn--block"
                on:click=move |_| {
                    browser::redirect(path);
                }
            >
                "+ "
                {action.primary}
            </button>
            <button
                class="btn btn--block"
                on:click=move |_| {
                    browser::redirect(path);
                }
            >
                {action.secondary}
            </button>
        </div>
    }
}
