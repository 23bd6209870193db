//! Animal registry page with picture attachment.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::crud::{self, bind_text};
use crate::components::alert_banner::AlertBanner;
use crate::components::form_fields::{FormActions, SelectField, TextAreaField, TextField};
use crate::components::image_picker::ImagePicker;
use crate::components::search_box::SearchBox;
use crate::components::section_header::SectionHeader;
use crate::state::animals::{self, Animal, AnimalSex};
use crate::state::section::SectionState;

#[component]
pub fn AnimalsPage() -> impl IntoView {
    let state = RwSignal::new(SectionState::<Animal>::new(animals::seed()));

    let form_open = Signal::derive(move || state.with(SectionState::form_open));
    let editing = Signal::derive(move || state.with(SectionState::is_editing));
    let busy = Signal::derive(move || state.with(|s| s.busy));
    let banner = Signal::derive(move || state.with(|s| s.banner.clone()));
    let count = Signal::derive(move || animals::count_label(state.with(|s| s.visible().len())));
    let on_new = Callback::new(move |()| state.update(SectionState::open_create));
    let on_cancel = Callback::new(move |()| state.update(SectionState::cancel));
    let search = crud::search_binding(state);

    let preview = Signal::derive(move || state.with(|s| s.draft.imagen.clone()));
    let on_pick = Callback::new(move |url: String| state.update(|s| s.draft.imagen = Some(url)));
    let on_image_error = Callback::new(move |text: String| crud::show_error(state, text));

    let nombre = bind_text(state, |d| &d.nombre, |d| &mut d.nombre);
    let especie = bind_text(state, |d| &d.especie, |d| &mut d.especie);
    let raza = bind_text(state, |d| &d.raza, |d| &mut d.raza);
    let edad = bind_text(state, |d| &d.edad, |d| &mut d.edad);
    let peso = bind_text(state, |d| &d.peso, |d| &mut d.peso);
    let color = bind_text(state, |d| &d.color, |d| &mut d.color);
    let sexo = bind_text(state, |d| &d.sexo, |d| &mut d.sexo);
    let propietario = bind_text(state, |d| &d.propietario, |d| &mut d.propietario);
    let telefono = bind_text(state, |d| &d.telefono, |d| &mut d.telefono);
    let observaciones = bind_text(state, |d| &d.observaciones, |d| &mut d.observaciones);

    let sex_options: Vec<_> = AnimalSex::ALL.into_iter().map(|s| (s.as_str(), s.as_str())).collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        crud::submit(state);
    };

    view! {
        <div class="section-page">
            <SectionHeader
                title="Registro de Animales"
                subtitle="Gestione el registro de animales con imágenes y características"
                action_label="Registrar Animal"
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
                                    {move || if editing.get() { "Editar Animal" } else { "Registrar Nuevo Animal" }}
                                </h2>
                                <p class="card__subtitle">"Complete la información del animal"</p>
                            </div>
                        </div>
                        <form class="form-grid" on:submit=on_submit>
                            <ImagePicker
                                label="Imagen del Animal"
                                preview=preview
                                on_pick=on_pick
                                on_error=on_image_error
                            />
                            <TextField label="Nombre del Animal" value=nombre.value on_input=nombre.on_input required=true/>
                            <TextField
                                label="Especie"
                                value=especie.value
                                on_input=especie.on_input
                                required=true
                                placeholder="Ej: Equino, Bovino, Ovino"
                            />
                            <TextField label="Raza" value=raza.value on_input=raza.on_input/>
                            <TextField label="Edad" value=edad.value on_input=edad.on_input placeholder="Ej: 3 años"/>
                            <TextField label="Peso" value=peso.value on_input=peso.on_input placeholder="Ej: 450 kg"/>
                            <TextField label="Color" value=color.value on_input=color.on_input/>
                            <SelectField label="Sexo" value=sexo.value on_change=sexo.on_input options=sex_options.clone()/>
                            <TextField
                                label="Propietario"
                                value=propietario.value
                                on_input=propietario.on_input
                                required=true
                            />
                            <TextField label="Teléfono" value=telefono.value on_input=telefono.on_input input_type="tel"/>
                            <TextAreaField
                                label="Observaciones"
                                value=observaciones.value
                                on_input=observaciones.on_input
                            />
                            <FormActions
                                busy=busy
                                editing=editing
                                create_label="Registrar Animal"
                                update_label="Actualizar Animal"
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
                            placeholder="Buscar por nombre, especie o propietario..."
                        />
                    </div>
                    <div class="record-grid">
                        {move || {
                            let visible = state.with(SectionState::visible);
                            if visible.is_empty() {
                                let searching = state.with(|s| !s.search.is_empty());
                                return view! {
                                    <div class="card record-grid__empty">
                                        <h3>"No se encontraron animales"</h3>
                                        <p>
                                            {if searching {
                                                "No hay animales que coincidan con su búsqueda."
                                            } else {
                                                "Comience registrando su primer animal."
                                            }}
                                        </p>
                                        <button class="btn btn--primary" on:click=move |_| on_new.run(())>
                                            "+ Registrar Primer Animal"
                                        </button>
                                    </div>
                                }
                                    .into_any();
                            }
                            visible.into_iter().map(|a| animal_card(state, a)).collect::<Vec<_>>().into_any()
                        }}
                    </div>
                </Show>
            </main>
        </div>
    }
}

fn animal_card(state: RwSignal<SectionState<Animal>>, animal: Animal) -> impl IntoView {
    let id = animal.id;
    view! {
        <div class="record-card">
            <img class="record-card__image" src=animal.imagen.clone() alt=animal.nombre.clone()/>
            <div class="record-card__header">
                <h3>{animal.nombre.clone()}</h3>
                <span class="badge badge--outline">{animal.especie.clone()}</span>
            </div>
            <p class="record-card__subtitle">{animal.raza.clone()}</p>
            <dl class="record-card__facts">
                <dt>"Edad:"</dt>
                <dd>{animal.edad.clone()}</dd>
                <dt>"Peso:"</dt>
                <dd>{animal.peso.clone()}</dd>
                <dt>"Color:"</dt>
                <dd>{animal.color.clone()}</dd>
                <dt>"Propietario:"</dt>
                <dd>{animal.propietario.clone()}</dd>
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
