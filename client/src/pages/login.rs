//! Login page: email + password with client-side checks only.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no authentication backend. A non-empty password and an email
//! containing `@` are accepted after a simulated round trip, followed by a
//! full-page redirect to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

pub const LOGIN_DELAY_MS: u32 = 1000;
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("Por favor, complete todos los campos")]
    MissingFields,
    #[error("Por favor, ingrese un email válido")]
    InvalidEmail,
    #[error("Error al iniciar sesión. Verifique sus credenciales.")]
    Failed,
}

/// Check the login form before the simulated request.
///
/// # Errors
///
/// [`LoginError::MissingFields`] if either value is blank,
/// [`LoginError::InvalidEmail`] if the email lacks `@`.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), LoginError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(LoginError::MissingFields);
    }
    if !email.contains('@') {
        return Err(LoginError::InvalidEmail);
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let remember = RwSignal::new(false);
    let error = RwSignal::new(None::<LoginError>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        let email_value = email.get();
        if let Err(err) = validate_credentials(&email_value, &password.get()) {
            error.set(Some(err));
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::browser::simulated_delay(LOGIN_DELAY_MS).await;
            log::info!("login accepted");
            if !crate::util::browser::redirect(DASHBOARD_PATH) {
                error.set(Some(LoginError::Failed));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <div class="login-page">
            <div class="login-page__inner">
                <div class="login-brand">
                    <div class="login-brand__logo" aria-hidden="true">"🏢"</div>
                    <h1>"Sistema de Registro"</h1>
                    <p class="login-brand__subtitle">"Acceda a su cuenta para continuar"</p>
                </div>

                <div class="login-card">
                    <h2 class="login-card__title">"Iniciar Sesión"</h2>
                    <p class="login-card__subtitle">"Ingrese sus credenciales para acceder al sistema"</p>
                    <form class="login-form" on:submit=on_submit>
                        <Show when=move || error.get().is_some()>
                            <div class="alert alert--error" role="alert">
                                {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                            </div>
                        </Show>

                        <label class="field">
                            <span class="field__label">"Correo Electrónico"</span>
                            <input
                                class="field__input"
                                type="email"
                                placeholder="usuario@empresa.com"
                                required=true
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="field">
                            <span class="field__label">"Contraseña"</span>
                            <span class="login-form__password">
                                <input
                                    class="field__input"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="••••••••"
                                    required=true
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button
                                    class="login-form__reveal"
                                    type="button"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                    aria-label="Mostrar u ocultar contraseña"
                                >
                                    {move || if show_password.get() { "🙈" } else { "👁" }}
                                </button>
                            </span>
                        </label>

                        <div class="login-form__row">
                            <label class="login-form__remember">
                                <input
                                    type="checkbox"
                                    prop:checked=move || remember.get()
                                    on:change=move |ev| remember.set(event_target_checked(&ev))
                                />
                                "Recordarme"
                            </label>
                            <button class="btn btn--link" type="button">
                                "¿Olvidó su contraseña?"
                            </button>
                        </div>

                        <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                        </button>
                    </form>

                    <p class="login-card__help">
                        "¿Necesita acceso al sistema? "
                        <button class="btn btn--link" type="button">
                            "Contacte al administrador"
                        </button>
                    </p>
                </div>

                <p class="login-page__footer">"© 2024 Sistema de Registro. Todos los derechos reservados."</p>
            </div>
        </div>
    }
}
