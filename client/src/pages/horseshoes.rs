//! Horseshoe registry page: item details plus the owner's contact block.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::crud::{self, bind_text};
use crate::components::alert_banner::AlertBanner;
use crate::components::form_fields::{FormActions, SelectField, TextAreaField, TextField};
use crate::components::image_picker::ImagePicker;
use crate::components::search_box::SearchBox;
use crate::components::section_header::SectionHeader;
use crate::state::horseshoes::{self, Horseshoe, HorseshoeCondition};
use crate::state::section::SectionState;

#[component]
pub fn HorseshoesPage() -> impl IntoView {
    let state = RwSignal::new(SectionState::<Horseshoe>::new(horseshoes::seed()));

    let form_open = Signal::derive(move || state.with(SectionState::form_open));
    let editing = Signal::derive(move || state.with(SectionState::is_editing));
    let busy = Signal::derive(move || state.with(|s| s.busy));
    let banner = Signal::derive(move || state.with(|s| s.banner.clone()));
    let count = Signal::derive(move || horseshoes::count_label(state.with(|s| s.visible().len())));
    let on_new = Callback::new(move |()| state.update(SectionState::open_create));
    let on_cancel = Callback::new(move |()| state.update(SectionState::cancel));
    let search = crud::search_binding(state);

    let preview = Signal::derive(move || state.with(|s| s.draft.imagen.clone()));
    let on_pick = Callback::new(move |url: String| state.update(|s| s.draft.imagen = Some(url)));
    let on_image_error = Callback::new(move |text: String| crud::show_error(state, text));

    let codigo = bind_text(state, |d| &d.codigo, |d| &mut d.codigo);
    let tipo = bind_text(state, |d| &d.tipo, |d| &mut d.tipo);
    let tamano = bind_text(state, |d| &d.tamano, |d| &mut d.tamano);
    let peso = bind_text(state, |d| &d.peso, |d| &mut d.peso);
    let material = bind_text(state, |d| &d.material, |d| &mut d.material);
    let estado = bind_text(state, |d| &d.estado, |d| &mut d.estado);
    let fecha = bind_text(state, |d| &d.fecha_fabricacion, |d| &mut d.fecha_fabricacion);
    let propietario = bind_text(state, |d| &d.owner.propietario, |d| &mut d.owner.propietario);
    let telefono = bind_text(state, |d| &d.owner.telefono, |d| &mut d.owner.telefono);
    let email = bind_text(state, |d| &d.owner.email, |d| &mut d.owner.email);
    let direccion = bind_text(state, |d| &d.owner.direccion, |d| &mut d.owner.direccion);
    let observaciones = bind_text(state, |d| &d.observaciones, |d| &mut d.observaciones);

    let condition_options: Vec<_> = HorseshoeCondition::ALL.into_iter().map(|c| (c.as_str(), c.as_str())).collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        crud::submit(state);
    };

    view! {
        <div class="section-page">
            <SectionHeader
                title="Registro de Herraduras"
                subtitle="Gestione el registro de herraduras con imágenes y datos del propietario"
                action_label="Registrar Herradura"
                on_action=on_new
                hide_action=form_open
                count=count
            />
            <main class="section-page__content">
                <AlertBanner banner=banner/>

                <Show when=move || form_open.get()>
                    <div class="card">
                        <div class="card__header">
                            <div>
                                <h2 class="card__title">
                                    {move || if editing.get() { "Editar Herradura" } else { "Registrar Nueva Herradura" }}
                                </h2>
                                <p class="card__subtitle">"Complete la información de la herradura y del propietario"</p>
                            </div>
                        </div>
                        <form class="form-grid" on:submit=on_submit>
                            <ImagePicker
                                label="Imagen de la Herradura"
                                preview=preview
                                on_pick=on_pick
                                on_error=on_image_error
                            />
                            <TextField
                                label="Código"
                                value=codigo.value
                                on_input=codigo.on_input
                                required=true
                                placeholder="Ej: HRD-001"
                            />
                            <TextField
                                label="Tipo de Herradura"
                                value=tipo.value
                                on_input=tipo.on_input
                                required=true
                                placeholder="Ej: Herradura Estándar"
                            />
                            <TextField label="Tamaño" value=tamano.value on_input=tamano.on_input placeholder="Ej: Talla 3"/>
                            <TextField label="Peso" value=peso.value on_input=peso.on_input placeholder="Ej: 250g"/>
                            <TextField
                                label="Material"
                                value=material.value
                                on_input=material.on_input
                                placeholder="Ej: Acero Forjado"
                            />
                            <SelectField
                                label="Estado"
                                value=estado.value
                                on_change=estado.on_input
                                options=condition_options.clone()
                            />
                            <TextField
                                label="Fecha de Fabricación"
                                value=fecha.value
                                on_input=fecha.on_input
                                input_type="date"
                            />

                            <h3 class="form-grid__heading">"Datos del Propietario"</h3>
                            <TextField
                                label="Nombre Completo"
                                value=propietario.value
                                on_input=propietario.on_input
                                required=true
                            />
                            <TextField label="Teléfono" value=telefono.value on_input=telefono.on_input input_type="tel"/>
                            <TextField label="Email" value=email.value on_input=email.on_input input_type="email"/>
                            <TextField label="Dirección" value=direccion.value on_input=direccion.on_input/>
                            <TextAreaField
                                label="Observaciones"
                                value=observaciones.value
                                on_input=observaciones.on_input
                            />
                            <FormActions
                                busy=busy
                                editing=editing
                                create_label="Registrar Herradura"
                                update_label="Actualizar Herradura"
                                on_cancel=on_cancel
                            />
                        </form>
                    </div>
                </Show>

                <Show when=move || !form_open.get()>
                    <div class="card card--toolbar">
                        <SearchBox
                            value=search.value
                            on_input=search.on_input
                            placeholder="Buscar por código, tipo o propietario..."
                        />
                    </div>
                    <div class="record-grid">
                        {move || {
                            let visible = state.with(SectionState::visible);
                            if visible.is_empty() {
                                let searching = state.with(|s| !s.search.is_empty());
                                return view! {
                                    <div class="card record-grid__empty">
                                        <h3>"No se encontraron herraduras"</h3>
                                        <p>
                                            {if searching {
                                                "No hay herraduras que coincidan con su búsqueda."
                                            } else {
                                                "Comience registrando su primera herradura."
                                            }}
                                        </p>
                                        <button class="btn btn--primary" on:click=move |_| on_new.run(())>
                                            "+ Registrar Primera Herradura"
                                        </button>
                                    </div>
                                }
                                    .into_any();
                            }
                            visible.into_iter().map(|h| horseshoe_card(state, h)).collect::<Vec<_>>().into_any()
                        }}
                    </div>
                </Show>
            </main>
        </div>
    }
}

fn horseshoe_card(state: RwSignal<SectionState<Horseshoe>>, horseshoe: Horseshoe) -> impl IntoView {
    let id = horseshoe.id;
    let estado = horseshoe.estado.map(HorseshoeCondition::as_str).unwrap_or_default();
    view! {
        <div class="record-card">
            <img class="record-card__image" src=horseshoe.imagen.clone() alt=horseshoe.codigo.clone()/>
            <div class="record-card__header">
                <h3>{horseshoe.codigo.clone()}</h3>
                <span class="badge badge--outline">{estado}</span>
            </div>
            <p class="record-card__subtitle">{horseshoe.tipo.clone()}</p>
            <dl class="record-card__facts">
                <dt>"Tamaño:"</dt>
                <dd>{horseshoe.tamano.clone()}</dd>
                <dt>"Material:"</dt>
                <dd>{horseshoe.material.clone()}</dd>
                <dt>"Peso:"</dt>
                <dd>{horseshoe.peso.clone()}</dd>
                <dt>"Propietario:"</dt>
                <dd>{horseshoe.owner.propietario.clone()}</dd>
            </dl>
            <div class="record-card__actions">
                <button class="btn" on:click=move |_| crud::open_edit(state, id)>
                    "✎ Editar"
                </button>
                <button class="btn btn--danger" on:click=move |_| crud::delete(state, id)>
                    "🗑 Eliminar"
                </button>
            </div>
        </div>
    }
}
