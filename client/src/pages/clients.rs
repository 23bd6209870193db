//! Client registry page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::crud::{self, bind_text};
use crate::components::alert_banner::AlertBanner;
use crate::components::form_fields::{FormActions, SelectField, TextAreaField, TextField};
use crate::components::search_box::SearchBox;
use crate::components::section_header::SectionHeader;
use crate::state::clients::{self, Client, ClientKind};
use crate::state::section::SectionState;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let state = RwSignal::new(SectionState::<Client>::new(clients::seed()));

    let form_open = Signal::derive(move || state.with(SectionState::form_open));
    let editing = Signal::derive(move || state.with(SectionState::is_editing));
    let busy = Signal::derive(move || state.with(|s| s.busy));
    let banner = Signal::derive(move || state.with(|s| s.banner.clone()));
    let on_new = Callback::new(move |()| state.update(SectionState::open_create));
    let on_cancel = Callback::new(move |()| state.update(SectionState::cancel));
    let search = crud::search_binding(state);

    let nombre = bind_text(state, |d| &d.nombre, |d| &mut d.nombre);
    let apellidos = bind_text(state, |d| &d.apellidos, |d| &mut d.apellidos);
    let email = bind_text(state, |d| &d.email, |d| &mut d.email);
    let telefono = bind_text(state, |d| &d.telefono, |d| &mut d.telefono);
    let direccion = bind_text(state, |d| &d.direccion, |d| &mut d.direccion);
    let ciudad = bind_text(state, |d| &d.ciudad, |d| &mut d.ciudad);
    let codigo_postal = bind_text(state, |d| &d.codigo_postal, |d| &mut d.codigo_postal);
    let tipo = bind_text(state, |d| &d.tipo_cliente, |d| &mut d.tipo_cliente);
    let empresa = bind_text(state, |d| &d.empresa, |d| &mut d.empresa);
    let notas = bind_text(state, |d| &d.notas, |d| &mut d.notas);
    let shows_company = move || state.with(|s| s.draft.shows_company());

    let kind_options: Vec<_> = ClientKind::ALL.into_iter().map(|k| (k.as_str(), k.label())).collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        crud::submit(state);
    };

    view! {
        <div class="section-page">
            <SectionHeader
                title="Gestión de Clientes"
                subtitle="Registre nuevos clientes y gestione la información existente"
                action_label="Nuevo Cliente"
                on_action=on_new
                hide_action=form_open
            />
            <main class="section-page__content">
                <AlertBanner banner=banner/>

                <Show when=move || form_open.get()>
                    <div class="card">
                        <div class="card__header">
                            <div>
                                <h2 class="card__title">
                                    {move || if editing.get() { "Editar Cliente" } else { "Registrar Nuevo Cliente" }}
                                </h2>
                                <p class="card__subtitle">
                                    {move || {
                                        if editing.get() {
                                            "Modifique los datos del cliente"
                                        } else {
                                            "Complete la información del cliente"
                                        }
                                    }}
                                </p>
                            </div>
                            <button
                                class="btn btn--ghost"
                                disabled=move || busy.get()
                                on:click=move |_| on_cancel.run(())
                                aria-label="Cerrar"
                            >
                                "✕"
                            </button>
                        </div>
                        <form class="form-grid" on:submit=on_submit>
                            <TextField
                                label="Nombre"
                                value=nombre.value
                                on_input=nombre.on_input
                                required=true
                                placeholder="Nombre del cliente"
                            />
                            <TextField
                                label="Apellidos"
                                value=apellidos.value
                                on_input=apellidos.on_input
                                required=true
                                placeholder="Apellidos del cliente"
                            />
                            <TextField
                                label="Email"
                                value=email.value
                                on_input=email.on_input
                                required=true
                                input_type="email"
                                placeholder="cliente@email.com"
                            />
                            <TextField
                                label="Teléfono"
                                value=telefono.value
                                on_input=telefono.on_input
                                required=true
                                input_type="tel"
                                placeholder="+34 600 123 456"
                            />
                            <TextField
                                label="Dirección"
                                value=direccion.value
                                on_input=direccion.on_input
                                placeholder="Calle, número, piso..."
                            />
                            <TextField label="Ciudad" value=ciudad.value on_input=ciudad.on_input placeholder="Ciudad"/>
                            <TextField
                                label="Código Postal"
                                value=codigo_postal.value
                                on_input=codigo_postal.on_input
                                placeholder="28001"
                            />
                            <SelectField
                                label="Tipo de Cliente"
                                value=tipo.value
                                on_change=tipo.on_input
                                options=kind_options.clone()
                                empty_label="Seleccione el tipo"
                            />
                            <Show when=shows_company>
                                <TextField
                                    label="Nombre de la Empresa"
                                    value=empresa.value
                                    on_input=empresa.on_input
                                    placeholder="Nombre de la empresa"
                                />
                            </Show>
                            <TextAreaField
                                label="Notas adicionales"
                                value=notas.value
                                on_input=notas.on_input
                                placeholder="Información adicional sobre el cliente..."
                            />
                            <FormActions
                                busy=busy
                                editing=editing
                                create_label="Registrar Cliente"
                                update_label="Actualizar Cliente"
                                on_cancel=on_cancel
                            />
                        </form>
                    </div>
                </Show>

                <Show when=move || !form_open.get()>
                    <div class="card">
                        <div class="card__header">
                            <div>
                                <h2 class="card__title">"Lista de Clientes"</h2>
                                <p class="card__subtitle">"Gestione y visualice todos los clientes registrados"</p>
                            </div>
                        </div>
                        <SearchBox value=search.value on_input=search.on_input placeholder="Buscar clientes..."/>
                        <div class="record-list">
                            {move || {
                                let visible = state.with(SectionState::visible);
                                if visible.is_empty() {
                                    return view! { <p class="record-list__empty">"No se encontraron clientes"</p> }
                                        .into_any();
                                }
                                visible.into_iter().map(|c| client_row(state, c)).collect::<Vec<_>>().into_any()
                            }}
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}

fn client_row(state: RwSignal<SectionState<Client>>, client: Client) -> impl IntoView {
    let id = client.id;
    let kind = client.kind_str();
    let company = client.is_company();
    view! {
        <div class="record-row">
            <div class="record-row__body">
                <div class="record-row__title">
                    <h3>{client.full_name()}</h3>
                    <span class="badge" class:badge--primary=company>{kind}</span>
                </div>
                <div class="record-row__meta">
                    <span>"✉ "{client.email.clone()}</span>
                    <span>"☎ "{client.telefono.clone()}</span>
                    {(!client.ciudad.is_empty()).then(|| view! { <span>"📍 "{client.ciudad.clone()}</span> })}
                    {client.empresa.clone().map(|empresa| view! { <span>"🏢 "{empresa}</span> })}
                </div>
            </div>
            <div class="record-row__actions">
                <button class="btn btn--ghost" on:click=move |_| crud::open_edit(state, id) aria-label="Editar">
                    "✎"
                </button>
                <button class="btn btn--ghost btn--danger" on:click=move |_| crud::delete(state, id) aria-label="Eliminar">
                    "🗑"
                </button>
            </div>
        </div>
    }
}
