//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    animals::AnimalsPage, clients::ClientsPage, dashboard::DashboardPage, documents::DocumentsPage,
    horseshoes::HorseshoesPage, login::LoginPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Sistema de registro de clientes y documentos"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Pages own their state; nothing is provided through context because every
/// section is reached by a full-page navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/registro.css"/>
        <Title text="Sistema de Registro"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Página no encontrada."</p> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("clientes")) view=ClientsPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("animales")) view=AnimalsPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("herraduras")) view=HorseshoesPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("documentos")) view=DocumentsPage/>
            </Routes>
        </Router>
    }
}
