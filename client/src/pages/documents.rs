//! Document generator page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Besides the shared section state this page keeps two local toggles: the
//! client picker's search term and whether the preview pane is open. The
//! client pool is the example client list; it is not linked to the clients
//! page, which owns a separate copy.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::crud::{self, bind_text};
use crate::components::alert_banner::AlertBanner;
use crate::components::form_fields::{FormActions, SelectField, TextAreaField, TextField};
use crate::components::search_box::SearchBox;
use crate::components::section_header::SectionHeader;
use crate::state::clients::{self, Client};
use crate::state::documents::{
    self, DOWNLOAD_NOTICE, Document, DocumentKind, DocumentPreview, DocumentStatus, FieldLayout, InputKind, PRINT_NOTICE,
};
use crate::state::section::SectionState;
use crate::util::browser;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let state = RwSignal::new(SectionState::<Document>::new(documents::seed()));
    let client_pool = StoredValue::new(clients::seed());
    let client_search = RwSignal::new(String::new());
    let show_preview = RwSignal::new(false);

    let form_open = Signal::derive(move || state.with(SectionState::form_open));
    let editing = Signal::derive(move || state.with(SectionState::is_editing));
    let busy = Signal::derive(move || state.with(|s| s.busy));
    let banner = Signal::derive(move || state.with(|s| s.banner.clone()));
    let search = crud::search_binding(state);

    let on_new = Callback::new(move |()| {
        client_search.set(String::new());
        show_preview.set(false);
        state.update(SectionState::open_create);
    });
    let on_cancel = Callback::new(move |()| {
        client_search.set(String::new());
        show_preview.set(false);
        state.update(SectionState::cancel);
    });

    let titulo = bind_text(state, |d| &d.titulo, |d| &mut d.titulo);
    let fecha = bind_text(state, |d| &d.fecha, |d| &mut d.fecha);
    let concepto = bind_text(state, |d| &d.concepto, |d| &mut d.concepto);
    let observaciones = bind_text(state, |d| &d.observaciones, |d| &mut d.observaciones);

    let kind_value = Signal::derive(move || {
        state.with(|s| s.draft.tipo.map(DocumentKind::as_str).unwrap_or_default().to_owned())
    });
    let on_kind = Callback::new(move |raw: String| state.update(|s| s.draft.tipo = DocumentKind::parse(&raw)));
    let kind_options: Vec<_> = DocumentKind::ALL.into_iter().map(|k| (k.as_str(), k.label())).collect();

    let candidates = move || {
        let term = client_search.get();
        client_pool.with_value(|pool| {
            documents::client_candidates(pool, &term).into_iter().cloned().collect::<Vec<_>>()
        })
    };
    let selected_client = move || state.with(|s| s.draft.cliente.clone());
    let choose_client = move |client: Client| {
        client_search.set(String::new());
        state.update(|s| s.draft.cliente = Some(client));
    };

    let preview = move || state.with(|s| s.draft.preview().ok());
    let on_preview = move |_| match state.with_untracked(|s| s.draft.preview()) {
        Ok(_) => show_preview.set(true),
        Err(err) => crud::show_error(state, err.to_string()),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        show_preview.set(false);
        crud::submit(state);
    };

    view! {
        <div class="section-page">
            <SectionHeader
                title="Generación de Documentos"
                subtitle="Cree y genere documentos personalizados para impresión"
                action_label="Nuevo Documento"
                on_action=on_new
                hide_action=form_open
            />
            <main class="section-page__content">
                <AlertBanner banner=banner/>

                <Show when=move || form_open.get()>
                    <div class="card">
                        <div class="card__header">
                            <div>
                                <h2 class="card__title">"Generar Nuevo Documento"</h2>
                                <p class="card__subtitle">"Complete los datos para generar el documento"</p>
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
                            <div class="field field--wide client-picker">
                                <span class="field__label">"Cliente *"</span>
                                <SearchBox
                                    value=Signal::derive(move || client_search.get())
                                    on_input=Callback::new(move |term: String| client_search.set(term))
                                    placeholder="Buscar cliente..."
                                />
                                <Show when=move || !client_search.get().is_empty()>
                                    <ul class="client-picker__results">
                                        {move || {
                                            candidates()
                                                .into_iter()
                                                .map(|client| {
                                                    let chosen = selected_client().is_some_and(|c| c.id == client.id);
                                                    let label = client.full_name();
                                                    let email = client.email.clone();
                                                    let kind = client.kind_str();
                                                    view! {
                                                        <li
                                                            class="client-picker__option"
                                                            class:client-picker__option--chosen=chosen
                                                            on:click=move |_| choose_client(client.clone())
                                                        >
                                                            <span class="client-picker__name">{label}</span>
                                                            <span class="client-picker__email">{email}</span>
                                                            <span class="badge">{kind}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </ul>
                                </Show>
                                {move || {
                                    selected_client()
                                        .map(|client| {
                                            view! {
                                                <div class="client-picker__selected">
                                                    <div>
                                                        <p class="client-picker__name">{client.full_name()}</p>
                                                        <p class="client-picker__email">{client.email.clone()}</p>
                                                    </div>
                                                    <button
                                                        class="btn btn--ghost"
                                                        type="button"
                                                        on:click=move |_| state.update(|s| s.draft.cliente = None)
                                                        aria-label="Quitar cliente"
                                                    >
                                                        "✕"
                                                    </button>
                                                </div>
                                            }
                                        })
                                }}
                            </div>

                            <SelectField
                                label="Tipo de Documento"
                                value=kind_value
                                on_change=on_kind
                                options=kind_options.clone()
                                empty_label="Seleccione el tipo de documento"
                                required=true
                            />
                            <TextField
                                label="Título del Documento"
                                value=titulo.value
                                on_input=titulo.on_input
                                required=true
                                placeholder="Ej: Contrato de Servicios #001"
                            />
                            <TextField label="Fecha del Documento" value=fecha.value on_input=fecha.on_input input_type="date"/>
                            <TextAreaField
                                label="Concepto/Descripción"
                                value=concepto.value
                                on_input=concepto.on_input
                                placeholder="Descripción del servicio o producto"
                            />

                            {move || {
                                state
                                    .with(|s| s.draft.tipo)
                                    .map(|kind| {
                                        view! {
                                            <div class="form-grid__group">
                                                <h3 class="form-grid__heading">"Datos Específicos del " {kind.label()}</h3>
                                                {kind.fields().iter().map(|layout| kind_field(state, *layout)).collect::<Vec<_>>()}
                                            </div>
                                        }
                                    })
                            }}

                            <TextAreaField
                                label="Observaciones"
                                value=observaciones.value
                                on_input=observaciones.on_input
                                placeholder="Notas adicionales..."
                            />
                            <button class="btn" type="button" on:click=on_preview>
                                "👁 Vista Previa"
                            </button>
                            <FormActions
                                busy=busy
                                editing=editing
                                create_label="Generar Documento"
                                update_label="Actualizar Documento"
                                busy_label="Generando..."
                                on_cancel=on_cancel
                            />
                        </form>
                    </div>
                </Show>

                {move || {
                    if !show_preview.get() {
                        return None;
                    }
                    preview()
                        .map(|p| {
                            view! {
                                <div class="card">
                                    <div class="card__header">
                                        <h2 class="card__title">"Vista Previa del Documento"</h2>
                                        <button class="btn btn--ghost" on:click=move |_| show_preview.set(false) aria-label="Cerrar">
                                            "✕"
                                        </button>
                                    </div>
                                    {preview_sheet(p)}
                                </div>
                            }
                        })
                }}

                <Show when=move || !form_open.get()>
                    <div class="card">
                        <div class="card__header">
                            <div>
                                <h2 class="card__title">"Documentos Generados"</h2>
                                <p class="card__subtitle">"Historial de documentos creados en el sistema"</p>
                            </div>
                        </div>
                        <SearchBox value=search.value on_input=search.on_input placeholder="Buscar documentos..."/>
                        <div class="record-list">
                            {move || {
                                let visible = state.with(SectionState::visible);
                                if visible.is_empty() {
                                    return view! { <p class="record-list__empty">"No hay documentos generados"</p> }
                                        .into_any();
                                }
                                visible.into_iter().map(|d| document_row(state, d)).collect::<Vec<_>>().into_any()
                            }}
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}

fn kind_field(state: RwSignal<SectionState<Document>>, layout: FieldLayout) -> impl IntoView {
    let value = Signal::derive(move || state.with(|s| s.draft.field(layout.field).to_owned()));
    let on_input = Callback::new(move |v: String| state.update(|s| s.draft.set_field(layout.field, v)));
    match layout.input {
        InputKind::Text => {
            view! { <TextField label=layout.label value=value on_input=on_input placeholder=layout.placeholder/> }
                .into_any()
        }
        InputKind::Date => {
            view! { <TextField label=layout.label value=value on_input=on_input input_type="date"/> }.into_any()
        }
        InputKind::TextArea => {
            view! { <TextAreaField label=layout.label value=value on_input=on_input placeholder=layout.placeholder/> }
                .into_any()
        }
    }
}

fn preview_sheet(preview: DocumentPreview) -> impl IntoView {
    view! {
        <article class="preview-sheet">
            <header class="preview-sheet__header">
                <h1>{preview.titulo}</h1>
                <p>"Fecha: "{preview.fecha}</p>
            </header>
            <section>
                <h2>"Datos del Cliente:"</h2>
                <p>{preview.cliente_nombre}</p>
                <p>{preview.cliente_email}</p>
                <p>{preview.cliente_telefono}</p>
                {preview.cliente_direccion.map(|d| view! { <p>{d}</p> })}
            </section>
            {preview.concepto.map(|c| view! { <section><h2>"Concepto:"</h2><p>{c}</p></section> })}
            {preview
                .importe
                .map(|i| view! { <section><h2>"Importe:"</h2><p class="preview-sheet__amount">{i}</p></section> })}
            {preview.observaciones.map(|o| view! { <section><h2>"Observaciones:"</h2><p>{o}</p></section> })}
        </article>
    }
}

fn print_document(document: &Document) {
    log::info!("imprimiendo documento: {}", document.to_log_json());
    browser::alert(PRINT_NOTICE);
}

fn download_document(document: &Document) {
    log::info!("descargando documento: {}", document.to_log_json());
    browser::alert(DOWNLOAD_NOTICE);
}

fn document_row(state: RwSignal<SectionState<Document>>, document: Document) -> impl IntoView {
    let id = document.id;
    let sent = document.estado == DocumentStatus::Enviado;
    let amount = document.importe_label();
    let for_download = document.clone();
    let for_print = document.clone();
    view! {
        <div class="record-row">
            <div class="record-row__body">
                <div class="record-row__title">
                    <h3>{document.titulo.clone()}</h3>
                    <span class="badge badge--outline">{document.tipo.as_str()}</span>
                    <span class="badge" class:badge--primary=sent>{document.estado.as_str()}</span>
                </div>
                <div class="record-row__meta">
                    <span>"👤 "{document.cliente.full_name()}</span>
                    <span>"📅 "{document.fecha_creacion.clone()}</span>
                    {amount.map(|a| view! { <span class="record-row__amount">{a}</span> })}
                </div>
            </div>
            <div class="record-row__actions">
                <button class="btn btn--ghost" on:click=move |_| download_document(&for_download) aria-label="Descargar">
                    "⬇"
                </button>
                <button class="btn btn--ghost" on:click=move |_| print_document(&for_print) aria-label="Imprimir">
                    "🖨"
                </button>
                <button class="btn btn--ghost btn--danger" on:click=move |_| crud::delete(state, id) aria-label="Eliminar">
                    "🗑"
                </button>
            </div>
        </div>
    }
}
